//! Typography roles for e-ink rendering.
//!
//! Text is rendered with embedded-graphics mono fonts, so "font size" is a
//! choice among fixed glyph grids rather than a free scalar. Every role
//! resolves to a font at or above the legibility floor; nothing in the
//! library renders text smaller than [`MIN_GLYPH_HEIGHT`].

use embedded_graphics::mono_font::ascii::{
    FONT_6X10, FONT_8X13_BOLD, FONT_9X15, FONT_9X18_BOLD, FONT_10X20,
};
use embedded_graphics::mono_font::MonoFont;

/// Smallest glyph height (pixels) the library will render.
///
/// Below this, e-paper's limited dot gain makes strokes break up.
pub const MIN_GLYPH_HEIGHT: u32 = 10;

/// Recommended minimum glyph height for running body text.
pub const BODY_MIN_HEIGHT: u32 = 15;

/// Glyph height used for headlines.
pub const HEADLINE_HEIGHT: u32 = 20;

/// Semantic text roles, each resolved to a mono font.
///
/// Bold faces are preferred for the structural roles; contrast carries
/// hierarchy on e-paper, color cannot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextRole {
    /// Screen and section headers.
    Headline,
    /// Component headers and emphasized rows.
    Title,
    /// Running content.
    #[default]
    Body,
    /// Buttons and other interactive elements.
    Label,
    /// Fine print: timestamps, counters, supporting text.
    Caption,
}

impl TextRole {
    /// The mono font this role renders with.
    #[must_use]
    pub const fn font(self) -> &'static MonoFont<'static> {
        match self {
            TextRole::Headline => &FONT_10X20,
            TextRole::Title => &FONT_9X18_BOLD,
            TextRole::Body => &FONT_9X15,
            TextRole::Label => &FONT_8X13_BOLD,
            TextRole::Caption => &FONT_6X10,
        }
    }

    /// Vertical advance for one line of this role.
    #[must_use]
    pub const fn line_height(self) -> u32 {
        self.font().character_size.height
    }

    /// Horizontal advance for one character cell.
    #[must_use]
    pub const fn char_width(self) -> u32 {
        self.font().character_size.width
    }

    /// Width in pixels of `text` rendered in this role, measured in
    /// character cells.
    #[must_use]
    pub fn text_width(self, text: &str) -> u32 {
        let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
        chars.saturating_mul(self.char_width())
    }
}

/// Enforce the legibility floor on a caller-supplied font.
///
/// Returns the requested font unchanged when its glyphs are at least
/// [`MIN_GLYPH_HEIGHT`] tall; otherwise substitutes the caption font, the
/// smallest face the library permits.
#[must_use]
pub const fn enforce_minimum(font: &'static MonoFont<'static>) -> &'static MonoFont<'static> {
    if font.character_size.height < MIN_GLYPH_HEIGHT {
        TextRole::Caption.font()
    } else {
        font
    }
}
