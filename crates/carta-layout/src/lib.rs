//! E-Ink Layout Primitives
//!
//! Constraint-based measurement and stacking for component trees on
//! electrophoretic displays. There is no retained scene graph and no
//! incremental relayout: a screen is measured and placed from scratch on
//! every (infrequent) refresh, which keeps the model small enough for
//! `no_std` targets.
//!
//! # Architecture
//!
//! - [`Edges`] - insets for margins and padding
//! - [`Constraints`] / [`Layout`] - the measurement seam widgets share
//! - [`VStack`] / [`HStack`] / [`Spacer`] - gap-aware sequential stacking
//!
//! # Example
//!
//! ```
//! use carta_layout::prelude::*;
//! use embedded_graphics::prelude::*;
//!
//! let mut column: VStack<4> = VStack::new().gap(8).padding(Edges::all(16));
//! column.push(Size::new(120, 40)).ok();
//! column.push(Size::new(80, 40)).ok();
//!
//! let size = column.measure();
//! assert_eq!(size, Size::new(152, 120)); // widest child + padding, heights + gap + padding
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod edges;
pub mod layout;
pub mod stacks;

pub mod prelude {
    //! Convenience re-export of the whole public API.
    pub use crate::edges::Edges;
    pub use crate::layout::{Constraints, Layout, Placement};
    pub use crate::stacks::{CrossAlign, HStack, Spacer, VStack};
}

pub use edges::Edges;
pub use layout::{Constraints, Layout, Placement};
pub use stacks::{CrossAlign, HStack, Spacer, VStack};
