//! Text field component.
//!
//! Input editing (keyboards, IMEs, cursors) belongs to the host platform;
//! this widget renders the field chrome: label, value or placeholder,
//! supporting text, and the enabled/focused/error state colors. Feedback is
//! an instant border color change — nothing animates on e-paper.

use carta_layout::{Constraints, Layout};
use carta_theme::{metrics, Palette, TextRole};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Gray4,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle},
    text::{Baseline, Text as EgText},
};

use crate::text::Text;

/// A single-line text field display.
///
/// # Example
///
/// ```
/// use carta_theme::Palette;
/// use carta_widgets::TextField;
///
/// let field = TextField::new("reader@example.com", 280)
///     .label("E-mail")
///     .supporting("Required")
///     .palette(Palette::default());
/// assert_eq!(field.size().width, 280);
/// ```
pub struct TextField<'a> {
    value: &'a str,
    width: u32,
    label: Option<&'a str>,
    placeholder: Option<&'a str>,
    supporting: Option<&'a str>,
    palette: Palette,
    enabled: bool,
    focused: bool,
    error: bool,
    outlined: bool,
}

impl<'a> TextField<'a> {
    /// Create a field showing `value`, `width` pixels wide.
    #[must_use]
    pub fn new(value: &'a str, width: u32) -> Self {
        Self {
            value,
            width,
            label: None,
            placeholder: None,
            supporting: None,
            palette: Palette::default(),
            enabled: true,
            focused: false,
            error: false,
            outlined: false,
        }
    }

    /// Set the label rendered above the field.
    #[must_use]
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Set the placeholder shown while the value is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    /// Set the supporting text rendered below the field.
    #[must_use]
    pub fn supporting(mut self, supporting: &'a str) -> Self {
        self.supporting = Some(supporting);
        self
    }

    /// Set the palette to resolve colors from.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable or disable the field.
    #[must_use]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Mark the field as holding input focus.
    #[must_use]
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Mark the field's value as invalid.
    #[must_use]
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Render without a container fill, outline only.
    #[must_use]
    pub fn outlined(mut self, outlined: bool) -> Self {
        self.outlined = outlined;
        self
    }

    /// Border color for the current state. Error wins over focus, focus
    /// over disabled.
    fn border_color(&self) -> Gray4 {
        let p = &self.palette;
        if self.error {
            p.error
        } else if self.focused {
            p.primary
        } else if !self.enabled {
            p.on_surface_variant
        } else {
            p.outline
        }
    }

    fn value_color(&self) -> Gray4 {
        let p = &self.palette;
        if self.error {
            p.error
        } else if !self.enabled {
            p.on_surface_variant
        } else {
            p.on_surface
        }
    }

    fn label_color(&self) -> Gray4 {
        if self.error {
            self.palette.error
        } else {
            self.palette.on_surface
        }
    }

    fn supporting_color(&self) -> Gray4 {
        if self.error {
            self.palette.error
        } else {
            self.palette.on_surface_variant
        }
    }

    /// Height of the input box itself (excluding label and supporting text).
    fn box_height(&self) -> u32 {
        metrics::touch_target::DEFAULT_MIN
    }

    fn label_band(&self) -> u32 {
        match self.label {
            Some(_) => TextRole::Label
                .line_height()
                .saturating_add(metrics::spacing::EXTRA_SMALL),
            None => 0,
        }
    }

    fn supporting_band(&self) -> u32 {
        match self.supporting {
            Some(_) => TextRole::Caption
                .line_height()
                .saturating_add(metrics::spacing::EXTRA_SMALL),
            None => 0,
        }
    }

    /// Total size: label band, input box, and supporting band.
    #[must_use]
    pub fn size(&self) -> Size {
        let height = self
            .label_band()
            .saturating_add(self.box_height())
            .saturating_add(self.supporting_band());
        Size::new(self.width, height)
    }

    /// The input box rectangle when the field's top-left corner sits at
    /// `position`. Useful for hit-testing taps.
    // SAFETY: band heights are font metrics plus small constants; they fit
    // in i32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
    #[must_use]
    pub fn box_area(&self, position: Point) -> Rectangle {
        Rectangle::new(
            Point::new(position.x, position.y + self.label_band() as i32),
            Size::new(self.width, self.box_height()),
        )
    }

    /// Render the field with its top-left corner at `position`.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    // SAFETY: all offsets are font metrics and metric constants bounded by
    // the display extent; they fit in i32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
    pub fn render<D>(&self, display: &mut D, position: Point) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        // Label above the box.
        if let Some(label) = self.label {
            Text::new(label)
                .role(TextRole::Label)
                .palette(self.palette)
                .color(self.label_color())
                .render(display, position)?;
        }

        // The input box: fill (unless outlined), then border.
        let box_rect = self.box_area(position);
        let shape = RoundedRectangle::with_equal_corners(
            box_rect,
            Size::new_equal(metrics::corner_radius::SMALL),
        );
        if !self.outlined {
            shape
                .into_styled(PrimitiveStyle::with_fill(self.palette.surface_variant))
                .draw(display)?;
        }
        let border = PrimitiveStyleBuilder::new()
            .stroke_color(self.border_color())
            .stroke_width(metrics::border::THIN)
            .build();
        shape.into_styled(border).draw(display)?;

        // Value, or placeholder while empty, vertically centered in the box.
        let (content, content_color) = if self.value.is_empty() {
            (
                self.placeholder.unwrap_or(""),
                self.palette.on_surface_variant,
            )
        } else {
            (self.value, self.value_color())
        };
        if !content.is_empty() {
            let style = MonoTextStyle::new(TextRole::Body.font(), content_color);
            let anchor = Point::new(
                box_rect.top_left.x + metrics::spacing::MEDIUM as i32,
                box_rect.top_left.y + (self.box_height() / 2) as i32,
            );
            EgText::with_baseline(content, anchor, style, Baseline::Middle).draw(display)?;
        }

        // Supporting text below the box.
        if let Some(supporting) = self.supporting {
            let y = box_rect.top_left.y
                + self.box_height() as i32
                + metrics::spacing::EXTRA_SMALL as i32;
            Text::new(supporting)
                .role(TextRole::Caption)
                .palette(self.palette)
                .color(self.supporting_color())
                .render(
                    display,
                    Point::new(position.x + metrics::spacing::MEDIUM as i32, y),
                )?;
        }

        Ok(())
    }
}

impl Layout for TextField<'_> {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.size())
    }
}
