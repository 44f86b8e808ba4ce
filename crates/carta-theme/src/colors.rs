//! Grayscale color schemes for electrophoretic panels.
//!
//! Panels render 16 gray levels, which maps directly onto
//! [`Gray4`]. Pure black on pure white carries the main content; the
//! intermediate levels exist only for subtle hierarchy (containers,
//! outlines, disabled states) and never for information on their own.

use embedded_graphics::pixelcolor::Gray4;
use embedded_graphics::prelude::*;

/// Color scheme family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// Pure black and white only. Best readability, no hierarchy.
    #[default]
    HighContrast,
    /// Uses the gray ramp for containers and outlines.
    Grayscale,
}

/// Light or dark rendition of a scheme.
///
/// Dark mode inverts the page: white text on black paper. Some panels
/// ghost more in this rendition; it is offered, not defaulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Dark content on a light background.
    #[default]
    Light,
    /// Light content on a dark background.
    Dark,
}

/// A complete grayscale color scheme.
///
/// Role names follow the container/on-container convention: `on_x` is
/// guaranteed readable against `x` in every built-in palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Main interactive color (filled buttons, selected indicators).
    pub primary: Gray4,
    /// Content drawn on `primary`.
    pub on_primary: Gray4,
    /// Container tint for primary-emphasis surfaces.
    pub primary_container: Gray4,
    /// Content drawn on `primary_container`.
    pub on_primary_container: Gray4,
    /// Secondary-emphasis color.
    pub secondary: Gray4,
    /// Content drawn on `secondary`.
    pub on_secondary: Gray4,
    /// Container tint for secondary-emphasis surfaces.
    pub secondary_container: Gray4,
    /// Content drawn on `secondary_container`.
    pub on_secondary_container: Gray4,
    /// Page background.
    pub background: Gray4,
    /// Content drawn directly on the background.
    pub on_background: Gray4,
    /// Component surface (cards, fields).
    pub surface: Gray4,
    /// Content drawn on a surface.
    pub on_surface: Gray4,
    /// De-emphasized surface (disabled fills).
    pub surface_variant: Gray4,
    /// Content drawn on `surface_variant` (disabled content).
    pub on_surface_variant: Gray4,
    /// Borders and dividers.
    pub outline: Gray4,
    /// Error emphasis. On e-ink this is still black or white; errors are
    /// signalled by weight and border, not hue.
    pub error: Gray4,
    /// Content drawn on `error`.
    pub on_error: Gray4,
}

impl Palette {
    /// Resolve a built-in palette from a variant and mode.
    #[must_use]
    pub const fn select(variant: Variant, mode: Mode) -> Self {
        match (variant, mode) {
            (Variant::HighContrast, Mode::Light) => HIGH_CONTRAST,
            (Variant::HighContrast, Mode::Dark) => HIGH_CONTRAST_DARK,
            (Variant::Grayscale, Mode::Light) => GRAYSCALE,
            (Variant::Grayscale, Mode::Dark) => GRAYSCALE_DARK,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        HIGH_CONTRAST
    }
}

/// Maximum-contrast scheme: pure black and pure white only.
pub const HIGH_CONTRAST: Palette = Palette {
    primary: Gray4::BLACK,
    on_primary: Gray4::WHITE,
    primary_container: Gray4::WHITE,
    on_primary_container: Gray4::BLACK,
    secondary: Gray4::BLACK,
    on_secondary: Gray4::WHITE,
    secondary_container: Gray4::WHITE,
    on_secondary_container: Gray4::BLACK,
    background: Gray4::WHITE,
    on_background: Gray4::BLACK,
    surface: Gray4::WHITE,
    on_surface: Gray4::BLACK,
    surface_variant: Gray4::WHITE,
    on_surface_variant: Gray4::BLACK,
    outline: Gray4::BLACK,
    error: Gray4::BLACK,
    on_error: Gray4::WHITE,
};

/// Grayscale scheme with subtle hierarchy from the 16-level ramp.
pub const GRAYSCALE: Palette = Palette {
    primary: Gray4::BLACK,
    on_primary: Gray4::WHITE,
    primary_container: Gray4::new(0xD), // light gray container
    on_primary_container: Gray4::BLACK,
    secondary: Gray4::new(0x5), // dark gray for secondary elements
    on_secondary: Gray4::WHITE,
    secondary_container: Gray4::new(0xC),
    on_secondary_container: Gray4::BLACK,
    background: Gray4::WHITE,
    on_background: Gray4::BLACK,
    surface: Gray4::WHITE,
    on_surface: Gray4::BLACK,
    surface_variant: Gray4::new(0xE), // barely-off-white differentiation
    on_surface_variant: Gray4::BLACK,
    outline: Gray4::new(0x3), // dark gray borders
    error: Gray4::BLACK,
    on_error: Gray4::WHITE,
};

/// Dark rendition of [`HIGH_CONTRAST`].
pub const HIGH_CONTRAST_DARK: Palette = Palette {
    primary: Gray4::WHITE,
    on_primary: Gray4::BLACK,
    primary_container: Gray4::BLACK,
    on_primary_container: Gray4::WHITE,
    secondary: Gray4::WHITE,
    on_secondary: Gray4::BLACK,
    secondary_container: Gray4::BLACK,
    on_secondary_container: Gray4::WHITE,
    background: Gray4::BLACK,
    on_background: Gray4::WHITE,
    surface: Gray4::BLACK,
    on_surface: Gray4::WHITE,
    surface_variant: Gray4::BLACK,
    on_surface_variant: Gray4::WHITE,
    outline: Gray4::WHITE,
    error: Gray4::WHITE,
    on_error: Gray4::BLACK,
};

/// Dark rendition of [`GRAYSCALE`].
pub const GRAYSCALE_DARK: Palette = Palette {
    primary: Gray4::WHITE,
    on_primary: Gray4::BLACK,
    primary_container: Gray4::new(0x3), // dark gray container
    on_primary_container: Gray4::WHITE,
    secondary: Gray4::new(0xA), // light gray for secondary elements
    on_secondary: Gray4::BLACK,
    secondary_container: Gray4::new(0x4),
    on_secondary_container: Gray4::WHITE,
    background: Gray4::BLACK,
    on_background: Gray4::WHITE,
    surface: Gray4::new(0x1), // near black surfaces
    on_surface: Gray4::WHITE,
    surface_variant: Gray4::new(0x2),
    on_surface_variant: Gray4::WHITE,
    outline: Gray4::new(0xC), // light gray borders
    error: Gray4::WHITE,
    on_error: Gray4::BLACK,
};
