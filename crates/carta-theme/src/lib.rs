//! E-Ink Theme Primitives
//!
//! Color schemes, typography roles, and metric constants tuned for
//! electrophoretic displays: high contrast, a 16-level gray ramp, minimum
//! legible font sizes, and touch targets sized for slow-refresh panels
//! where a missed tap costs a full redraw.
//!
//! # Contents
//!
//! - [`Palette`] - grayscale color scheme (four built-in variants)
//! - [`TextRole`] - typography roles resolved to mono fonts with a legibility floor
//! - [`metrics`] - touch targets, spacing scale, border widths, corner radii
//!
//! # Feature flags
//!
//! - `serde` - serialize/deserialize the variant/mode/role enums for config files
//! - `defmt` - `defmt::Format` on the enums for firmware logging
//!
//! # Example
//!
//! ```
//! use carta_theme::{Mode, Palette, Variant};
//!
//! let palette = Palette::select(Variant::Grayscale, Mode::Light);
//! let button_fill = palette.primary;
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod colors;
pub mod metrics;
pub mod typography;

pub use colors::{Mode, Palette, Variant};
pub use typography::TextRole;
