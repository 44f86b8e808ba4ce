//! Themed text component.

use carta_layout::{Constraints, Layout};
use carta_theme::{typography, Palette, TextRole};
use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Gray4,
    prelude::*,
    text::{Baseline, Text as EgText},
};

/// A single line of themed text.
///
/// Resolves a [`TextRole`] to a mono font and the palette's `on_surface`
/// color; both can be overridden, but a custom font is still clamped to the
/// minimum legible glyph height.
///
/// # Example
///
/// ```
/// use carta_theme::{Palette, TextRole};
/// use carta_widgets::Text;
///
/// let heading = Text::new("Library")
///     .role(TextRole::Headline)
///     .palette(Palette::default());
/// assert_eq!(heading.size().height, 20);
/// ```
pub struct Text<'a> {
    text: &'a str,
    role: TextRole,
    palette: Palette,
    color: Option<Gray4>,
    font: Option<&'static MonoFont<'static>>,
}

impl<'a> Text<'a> {
    /// Create body text.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            role: TextRole::Body,
            palette: Palette::default(),
            color: None,
            font: None,
        }
    }

    /// Set the typography role.
    #[must_use]
    pub fn role(mut self, role: TextRole) -> Self {
        self.role = role;
        self
    }

    /// Set the palette to resolve the default color from.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Override the color (defaults to the palette's `on_surface`).
    #[must_use]
    pub fn color(mut self, color: Gray4) -> Self {
        self.color = Some(color);
        self
    }

    /// Override the font. Fonts below the legibility floor are replaced by
    /// the smallest permitted face.
    #[must_use]
    pub fn font(mut self, font: &'static MonoFont<'static>) -> Self {
        self.font = Some(typography::enforce_minimum(font));
        self
    }

    fn resolved_font(&self) -> &'static MonoFont<'static> {
        self.font.unwrap_or_else(|| self.role.font())
    }

    fn resolved_color(&self) -> Gray4 {
        self.color.unwrap_or(self.palette.on_surface)
    }

    /// Size of the rendered line, measured in character cells.
    #[must_use]
    pub fn size(&self) -> Size {
        let font = self.resolved_font();
        let chars = u32::try_from(self.text.chars().count()).unwrap_or(u32::MAX);
        Size::new(
            chars.saturating_mul(font.character_size.width),
            font.character_size.height,
        )
    }

    /// Render the text with its top-left corner at `position`.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let style = MonoTextStyle::new(self.resolved_font(), self.resolved_color());
        EgText::with_baseline(self.text, position, style, Baseline::Top).draw(display)?;
        Ok(())
    }
}

impl Layout for Text<'_> {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::mono_font::ascii::FONT_4X6;

    #[test]
    fn test_text_size_follows_role() {
        let body = Text::new("abc");
        assert_eq!(body.size(), Size::new(27, 15)); // 3 cells of 9x15

        let headline = Text::new("abc").role(TextRole::Headline);
        assert_eq!(headline.size(), Size::new(30, 20));
    }

    #[test]
    fn test_default_color_is_on_surface() {
        let palette = Palette::default();
        let text = Text::new("x").palette(palette);
        assert_eq!(text.resolved_color(), palette.on_surface);
    }

    #[test]
    fn test_color_override() {
        let text = Text::new("x").color(Gray4::new(0x5));
        assert_eq!(text.resolved_color(), Gray4::new(0x5));
    }

    #[test]
    fn test_tiny_font_override_is_clamped() {
        let text = Text::new("x").font(&FONT_4X6);
        assert!(text.size().height >= typography::MIN_GLYPH_HEIGHT);
    }

    #[test]
    fn test_render_draws_without_error() {
        let mut display: MockDisplay<Gray4> = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);

        Text::new("Hello").render(&mut display, Point::zero()).unwrap();
    }
}
