//! E-Ink UI Components
//!
//! Themed widgets for electrophoretic displays, drawn with
//! embedded-graphics: flat, high-contrast, border-separated, and free of
//! anything that needs an animation to read well. Every widget renders onto
//! any `DrawTarget<Color = Gray4>` and takes its colors from an explicit
//! [`Palette`](carta_theme::Palette) — there is no global theme state.
//!
//! # Components
//!
//! - [`Button`] - filled / outlined / text button with touch-target minimums
//! - [`Card`] - bordered zero-elevation container
//! - [`TextField`] - single-line input display with label and error states
//! - [`Text`] - role-based themed text
//! - [`PaginatedList`] / [`PaginatedGrid`] - page-at-a-time item presentation
//! - [`PageIndicator`] - dot-strip or "Page X of Y" position display
//!
//! # Example
//!
//! ```no_run
//! use carta_theme::Palette;
//! use carta_widgets::prelude::*;
//!
//! let palette = Palette::default();
//! let button = Button::new("Next page")
//!     .kind(ButtonKind::Outlined)
//!     .palette(palette);
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod button;
pub mod card;
pub mod page_indicator;
pub mod paginated_list;
pub mod text;
pub mod text_field;

pub mod prelude {
    //! Convenience re-export of every widget type.
    pub use crate::button::{Button, ButtonKind};
    pub use crate::card::{Card, CardKind};
    pub use crate::page_indicator::{IndicatorStyle, PageIndicator};
    pub use crate::paginated_list::{PaginatedGrid, PaginatedList};
    pub use crate::text::Text;
    pub use crate::text_field::TextField;
}

pub use button::{Button, ButtonKind};
pub use card::{Card, CardKind};
pub use page_indicator::{IndicatorStyle, PageIndicator};
pub use paginated_list::{PaginatedGrid, PaginatedList};
pub use text::Text;
pub use text_field::TextField;
