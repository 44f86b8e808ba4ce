//! Button component.

use carta_layout::{Constraints, Layout};
use carta_theme::{metrics, Palette, TextRole};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

/// Visual weight of a button.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ButtonKind {
    /// Solid primary fill. The default for the main action on a screen.
    #[default]
    Filled,
    /// Transparent with an outline border.
    Outlined,
    /// Label only, no container.
    Text,
}

/// A flat, high-contrast button.
///
/// There is no elevation and no pressed animation: feedback on e-paper is
/// the caller redrawing with inverted colors if it wants any. The button
/// enforces the minimum touch-target size for its placement — panels
/// punish a missed tap with a full visible refresh.
///
/// # Example
///
/// ```
/// use carta_theme::Palette;
/// use carta_widgets::{Button, ButtonKind};
///
/// let button = Button::new("Next")
///     .kind(ButtonKind::Outlined)
///     .palette(Palette::default());
/// assert!(button.size().height >= 36);
/// ```
pub struct Button<'a> {
    label: &'a str,
    kind: ButtonKind,
    palette: Palette,
    enabled: bool,
    edge: bool,
    min_width: Option<u32>,
}

impl<'a> Button<'a> {
    /// Create a filled button with the given label.
    #[must_use]
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            kind: ButtonKind::Filled,
            palette: Palette::default(),
            enabled: true,
            edge: false,
            min_width: None,
        }
    }

    /// Set the button kind.
    #[must_use]
    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the palette to resolve colors from.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable or disable the button. Disabled buttons render in the
    /// surface-variant colors and are expected to ignore taps.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Mark the button as sitting near the bezel, raising the minimum
    /// touch target from the central to the edge size.
    #[must_use]
    pub fn edge(mut self, edge: bool) -> Self {
        self.edge = edge;
        self
    }

    /// Set a minimum width beyond the touch-target minimum.
    #[must_use]
    pub fn min_width(mut self, width: u32) -> Self {
        self.min_width = Some(width);
        self
    }

    fn min_target(&self) -> u32 {
        if self.edge {
            metrics::touch_target::EDGE_MIN
        } else {
            metrics::touch_target::CENTRAL_MIN
        }
    }

    /// Background / content / border colors for the current kind and state.
    fn colors(&self) -> (Option<Gray4>, Gray4, Option<Gray4>) {
        let p = &self.palette;
        match (self.kind, self.enabled) {
            (ButtonKind::Filled, true) => (Some(p.primary), p.on_primary, None),
            (ButtonKind::Filled, false) => (Some(p.surface_variant), p.on_surface_variant, None),
            (ButtonKind::Outlined, true) => (None, p.primary, Some(p.outline)),
            (ButtonKind::Outlined, false) => (None, p.on_surface_variant, Some(p.on_surface_variant)),
            (ButtonKind::Text, true) => (None, p.primary, None),
            (ButtonKind::Text, false) => (None, p.on_surface_variant, None),
        }
    }

    /// Size of the button: label plus content padding, clamped up to the
    /// touch-target minimum and any explicit minimum width.
    #[must_use]
    pub fn size(&self) -> Size {
        let role = TextRole::Label;
        let content_width = role
            .text_width(self.label)
            .saturating_add(metrics::spacing::MEDIUM.saturating_mul(2));
        let content_height = role
            .line_height()
            .saturating_add(metrics::spacing::SMALL.saturating_mul(2));

        let min = self.min_target();
        let width = content_width.max(min).max(self.min_width.unwrap_or(0));
        let height = content_height.max(min);
        Size::new(width, height)
    }

    /// The rectangle the button covers when its top-left corner sits at
    /// `position`.
    #[must_use]
    pub fn bounds(&self, position: Point) -> Rectangle {
        Rectangle::new(position, self.size())
    }

    /// Render the button with its top-left corner at `position`.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let size = self.size();
        let (background, content, border) = self.colors();

        let shape = RoundedRectangle::with_equal_corners(
            Rectangle::new(position, size),
            Size::new_equal(metrics::corner_radius::SMALL),
        );

        if let Some(fill) = background {
            shape.into_styled(PrimitiveStyle::with_fill(fill)).draw(display)?;
        }
        if let Some(stroke) = border {
            let style = PrimitiveStyleBuilder::new()
                .stroke_color(stroke)
                .stroke_width(metrics::border::THIN)
                .build();
            shape.into_styled(style).draw(display)?;
        }

        let character_style = MonoTextStyle::new(TextRole::Label.font(), content);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        // SAFETY: size() is display-bounded, the halved extents fit in i32.
        #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
        let center = Point::new(
            position.x + (size.width / 2) as i32,
            position.y + (size.height / 2) as i32,
        );
        Text::with_text_style(self.label, center, character_style, text_style).draw(display)?;

        Ok(())
    }
}

impl Layout for Button<'_> {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.size())
    }
}
