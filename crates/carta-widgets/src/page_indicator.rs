//! Page position indicator.

use core::fmt::Write;

use carta_theme::{metrics, Palette, TextRole};
use embedded_graphics::{
    pixelcolor::Gray4,
    prelude::*,
    primitives::{Circle, PrimitiveStyle},
};
use heapless::String;

use crate::text::Text;

/// How the current position is displayed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum IndicatorStyle {
    /// One dot per page, the current page enlarged and filled with the
    /// primary color.
    Dots,
    /// A literal "Page X of Y" label. The default: counts stay readable
    /// at any page count, where a long dot strip does not.
    #[default]
    Numbers,
}

/// Diameter of the dot marking the current page.
const SELECTED_DOT: u32 = 12;

/// Diameter of the other dots.
const DOT: u32 = 8;

/// Displays `current` within `page_count`.
///
/// Hidden entirely when there is a single page: the indicator is navigation
/// feedback, and with one page there is nothing to navigate. [`size`] is
/// zero and [`render`] draws nothing in that case.
///
/// [`size`]: Self::size
/// [`render`]: Self::render
///
/// # Example
///
/// ```
/// use carta_widgets::{IndicatorStyle, PageIndicator};
///
/// let indicator = PageIndicator::new(3, 0).style(IndicatorStyle::Dots);
/// assert!(indicator.size().width > 0);
///
/// let single = PageIndicator::new(1, 0);
/// assert_eq!(single.size().height, 0);
/// ```
pub struct PageIndicator {
    style: IndicatorStyle,
    page_count: usize,
    current: usize,
    palette: Palette,
}

impl PageIndicator {
    /// Create an indicator for `current` (zero-based) of `page_count` pages.
    #[must_use]
    pub fn new(page_count: usize, current: usize) -> Self {
        Self {
            style: IndicatorStyle::default(),
            page_count,
            current: current.min(page_count.saturating_sub(1)),
            palette: Palette::default(),
        }
    }

    /// Set the display style.
    #[must_use]
    pub fn style(mut self, style: IndicatorStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the palette to resolve colors from.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Whether the indicator draws anything.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.page_count > 1
    }

    /// The one-based "Page X of Y" label.
    fn label(&self) -> String<64> {
        let mut s = String::new();
        // A 64-byte buffer fits any two usize page numbers; write! cannot
        // overflow it.
        write!(s, "Page {} of {}", self.current.saturating_add(1), self.page_count).ok();
        s
    }

    /// Size of the rendered indicator; zero when hidden.
    #[must_use]
    pub fn size(&self) -> Size {
        if !self.visible() {
            return Size::zero();
        }
        match self.style {
            IndicatorStyle::Dots => {
                // One selected dot plus (count - 1) plain dots with gaps.
                let others = u32::try_from(self.page_count.saturating_sub(1)).unwrap_or(u32::MAX);
                let width = SELECTED_DOT
                    .saturating_add(others.saturating_mul(DOT.saturating_add(metrics::spacing::SMALL)));
                Size::new(width, SELECTED_DOT)
            }
            IndicatorStyle::Numbers => {
                let label = self.label();
                Size::new(
                    TextRole::Label.text_width(label.as_str()),
                    TextRole::Label.line_height(),
                )
            }
        }
    }

    /// Render the indicator with its top-left corner at `position`.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        if !self.visible() {
            return Ok(());
        }
        match self.style {
            IndicatorStyle::Dots => self.render_dots(display, position),
            IndicatorStyle::Numbers => Text::new(self.label().as_str())
                .role(TextRole::Label)
                .palette(self.palette)
                .render(display, position),
        }
    }

    // SAFETY: dot diameters and gaps are single-digit constants and the dot
    // count is a page count; coordinates stay far inside i32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
    fn render_dots<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        let mut x = position.x;
        for page in 0..self.page_count {
            let selected = page == self.current;
            let (diameter, color) = if selected {
                (SELECTED_DOT, self.palette.primary)
            } else {
                (DOT, self.palette.outline)
            };
            // Smaller dots sit centered on the selected dot's midline.
            let y = position.y + ((SELECTED_DOT - diameter) / 2) as i32;
            Circle::new(Point::new(x, y), diameter)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(display)?;
            x += diameter as i32 + metrics::spacing::SMALL as i32;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    #[test]
    fn test_single_page_is_hidden() {
        let indicator = PageIndicator::new(1, 0);
        assert!(!indicator.visible());
        assert_eq!(indicator.size(), Size::zero());
    }

    #[test]
    fn test_zero_pages_is_hidden() {
        let indicator = PageIndicator::new(0, 0);
        assert!(!indicator.visible());
    }

    #[test]
    fn test_current_is_clamped_into_range() {
        let indicator = PageIndicator::new(3, 99);
        assert_eq!(indicator.label().as_str(), "Page 3 of 3");
    }

    #[test]
    fn test_numbers_label_is_one_based() {
        let indicator = PageIndicator::new(5, 0);
        assert_eq!(indicator.label().as_str(), "Page 1 of 5");

        let indicator = PageIndicator::new(5, 4);
        assert_eq!(indicator.label().as_str(), "Page 5 of 5");
    }

    #[test]
    fn test_dots_width_grows_per_page() {
        let three = PageIndicator::new(3, 0).style(IndicatorStyle::Dots).size();
        let four = PageIndicator::new(4, 0).style(IndicatorStyle::Dots).size();
        assert_eq!(three.height, SELECTED_DOT);
        assert_eq!(four.width - three.width, DOT + metrics::spacing::SMALL);
    }

    #[test]
    fn test_numbers_size_matches_label() {
        let indicator = PageIndicator::new(12, 9);
        let expected_width = TextRole::Label.text_width("Page 10 of 12");
        assert_eq!(indicator.size().width, expected_width);
    }

    #[test]
    fn test_render_dots_without_error() {
        let mut display: MockDisplay<Gray4> = MockDisplay::new();
        display.set_allow_out_of_bounds_drawing(true);

        PageIndicator::new(3, 1)
            .style(IndicatorStyle::Dots)
            .render(&mut display, Point::new(1, 1))
            .unwrap();
    }

    #[test]
    fn test_render_hidden_draws_nothing() {
        // A hidden indicator must not touch the display at all.
        let mut display: MockDisplay<Gray4> = MockDisplay::new();
        PageIndicator::new(1, 0).render(&mut display, Point::zero()).unwrap();
        assert_eq!(display, MockDisplay::new());
    }
}
