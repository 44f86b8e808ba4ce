//! Card component.

use carta_layout::Edges;
use carta_theme::{metrics, Palette};
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle},
};

/// Visual weight of a card.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CardKind {
    /// Surface fill with a hairline outline.
    #[default]
    Plain,
    /// Hierarchically raised content. On e-paper "elevation" is a thicker
    /// primary border, never a shadow.
    Elevated,
    /// Outline only, no fill.
    Outlined,
}

/// A bordered, zero-elevation container.
///
/// The card draws its background and border, then hands the inner content
/// rectangle back to the caller to draw into. Borders carry all the visual
/// separation; shadows and tonal elevation do not survive 16 gray levels.
///
/// # Example
///
/// ```
/// use carta_theme::Palette;
/// use carta_widgets::{Card, CardKind};
///
/// let card = Card::new()
///     .kind(CardKind::Elevated)
///     .palette(Palette::default());
/// ```
pub struct Card {
    kind: CardKind,
    palette: Palette,
    enabled: bool,
    content_padding: Edges,
}

impl Card {
    /// Create a plain card with the default content padding.
    #[must_use]
    pub fn new() -> Self {
        Self {
            kind: CardKind::Plain,
            palette: Palette::default(),
            enabled: true,
            content_padding: Edges::all(metrics::spacing::MEDIUM),
        }
    }

    /// Set the card kind.
    #[must_use]
    pub fn kind(mut self, kind: CardKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the palette to resolve colors from.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable or disable the card. Disabled cards render their fill and
    /// border in the surface-variant colors.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the padding between the card border and its content.
    #[must_use]
    pub fn content_padding(mut self, padding: Edges) -> Self {
        self.content_padding = padding;
        self
    }

    /// Fill / border-color / border-width for the current kind and state.
    fn style(&self) -> (Option<Gray4>, Gray4, u32) {
        let p = &self.palette;
        if !self.enabled {
            return (
                Some(p.surface_variant),
                p.on_surface_variant,
                metrics::border::THIN,
            );
        }
        match self.kind {
            CardKind::Plain => (Some(p.surface), p.outline, metrics::border::THIN),
            CardKind::Elevated => (Some(p.primary_container), p.primary, metrics::border::MEDIUM),
            CardKind::Outlined => (None, p.outline, metrics::border::THIN),
        }
    }

    /// The content rectangle inside the border and padding of a card drawn
    /// at `bounds`.
    #[must_use]
    pub fn content_area(&self, bounds: Rectangle) -> Rectangle {
        let (_, _, border_width) = self.style();
        let inset = self.content_padding;
        // SAFETY: insets are metric constants far below any display extent;
        // offsets fit in i32.
        #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
        let top_left = Point::new(
            bounds.top_left.x + (inset.left + border_width) as i32,
            bounds.top_left.y + (inset.top + border_width) as i32,
        );
        let shrink_w = inset
            .horizontal()
            .saturating_add(border_width.saturating_mul(2));
        let shrink_h = inset
            .vertical()
            .saturating_add(border_width.saturating_mul(2));
        Rectangle::new(
            top_left,
            Size::new(
                bounds.size.width.saturating_sub(shrink_w),
                bounds.size.height.saturating_sub(shrink_h),
            ),
        )
    }

    /// Render the card at `bounds` and return the content rectangle the
    /// caller should draw into.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn render<D>(&self, display: &mut D, bounds: Rectangle) -> Result<Rectangle, D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let (fill, border_color, border_width) = self.style();

        let shape = RoundedRectangle::with_equal_corners(
            bounds,
            Size::new_equal(metrics::corner_radius::MEDIUM),
        );

        if let Some(fill) = fill {
            shape.into_styled(PrimitiveStyle::with_fill(fill)).draw(display)?;
        }
        let border = PrimitiveStyleBuilder::new()
            .stroke_color(border_color)
            .stroke_width(border_width)
            .build();
        shape.into_styled(border).draw(display)?;

        Ok(self.content_area(bounds))
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carta_theme::colors::GRAYSCALE;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_plain_card_style() {
        let card = Card::new().palette(GRAYSCALE);
        let (fill, border, width) = card.style();
        assert_eq!(fill, Some(GRAYSCALE.surface));
        assert_eq!(border, GRAYSCALE.outline);
        assert_eq!(width, metrics::border::THIN);
    }

    #[test]
    fn test_elevated_card_uses_thicker_primary_border() {
        let card = Card::new().kind(CardKind::Elevated).palette(GRAYSCALE);
        let (fill, border, width) = card.style();
        assert_eq!(fill, Some(GRAYSCALE.primary_container));
        assert_eq!(border, GRAYSCALE.primary);
        assert_eq!(width, metrics::border::MEDIUM);
    }

    #[test]
    fn test_outlined_card_has_no_fill() {
        let card = Card::new().kind(CardKind::Outlined);
        let (fill, _, _) = card.style();
        assert_eq!(fill, None);
    }

    #[test]
    fn test_disabled_card_uses_variant_colors() {
        let card = Card::new().kind(CardKind::Elevated).palette(GRAYSCALE).enabled(false);
        let (fill, border, _) = card.style();
        assert_eq!(fill, Some(GRAYSCALE.surface_variant));
        assert_eq!(border, GRAYSCALE.on_surface_variant);
    }

    #[test]
    fn test_content_area_insets_padding_and_border() {
        let card = Card::new().content_padding(Edges::all(16));
        let bounds = Rectangle::new(Point::zero(), Size::new(200, 100));
        let content = card.content_area(bounds);
        assert_eq!(content.top_left, Point::new(17, 17));
        assert_eq!(content.size, Size::new(200 - 34, 100 - 34));
    }

    #[test]
    fn test_content_area_saturates_on_tiny_bounds() {
        let card = Card::new();
        let bounds = Rectangle::new(Point::zero(), Size::new(10, 10));
        let content = card.content_area(bounds);
        assert_eq!(content.size, Size::zero());
    }

    #[test]
    fn test_render_returns_content_area() {
        let mut display: MockDisplay<Gray4> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        let card = Card::new();
        let bounds = Rectangle::new(Point::new(2, 2), Size::new(60, 40));
        let content = card.render(&mut display, bounds).unwrap();
        assert_eq!(content, card.content_area(bounds));
    }
}
