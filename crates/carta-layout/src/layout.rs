//! The measurement seam: constraints flow down, sizes come back up.
//!
//! A parent offers a child a [`Constraints`] range; the child answers with
//! the size it wants inside that range. Placement is a separate step (see
//! the stack containers), so measurement stays a pure function.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

/// Valid size range for a measured element.
///
/// # Invariants
///
/// `min.width <= max.width` and `min.height <= max.height`, maintained by
/// the constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraints {
    /// Minimum allowed size (inclusive).
    pub min: Size,
    /// Maximum allowed size (inclusive).
    pub max: Size,
}

impl Constraints {
    /// Constraints with explicit min and max bounds.
    #[must_use]
    pub fn new(min: Size, max: Size) -> Self {
        debug_assert!(min.width <= max.width, "min.width must be <= max.width");
        debug_assert!(min.height <= max.height, "min.height must be <= max.height");
        Self { min, max }
    }

    /// Exact-size constraints: the element must be exactly `size`.
    #[must_use]
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Zero-to-`max` constraints.
    #[must_use]
    pub const fn loose(max: Size) -> Self {
        Self {
            min: Size::zero(),
            max,
        }
    }

    /// Clamp `size` into this range.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min.width, self.max.width),
            size.height.clamp(self.min.height, self.max.height),
        )
    }

    /// Shrink the maximum by `inset` on both axes, loosening the minimum to
    /// zero. Used when descending past padding.
    #[must_use]
    pub fn deflate(&self, inset: Size) -> Self {
        Self {
            min: Size::zero(),
            max: Size::new(
                self.max.width.saturating_sub(inset.width),
                self.max.height.saturating_sub(inset.height),
            ),
        }
    }
}

/// Anything that can report its size within constraints.
pub trait Layout {
    /// The size this element takes within `constraints`.
    fn measure(&self, constraints: Constraints) -> Size;
}

/// A fixed-size element is trivially measurable.
impl Layout for Size {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(*self)
    }
}

/// A measured element placed at a position, as produced by the stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Top-left corner, relative to the container's origin.
    pub position: Point,
    /// Final size.
    pub size: Size,
}

impl Placement {
    /// Create a placement.
    #[must_use]
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }

    /// The covered rectangle.
    #[must_use]
    pub const fn bounds(&self) -> Rectangle {
        Rectangle::new(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_constraints_pin_the_size() {
        let c = Constraints::tight(Size::new(100, 50));
        assert_eq!(c.constrain(Size::new(10, 10)), Size::new(100, 50));
        assert_eq!(c.constrain(Size::new(500, 500)), Size::new(100, 50));
    }

    #[test]
    fn test_loose_constraints_cap_the_size() {
        let c = Constraints::loose(Size::new(200, 100));
        assert_eq!(c.constrain(Size::new(50, 30)), Size::new(50, 30));
        assert_eq!(c.constrain(Size::new(500, 500)), Size::new(200, 100));
    }

    #[test]
    fn test_constrain_respects_minimum() {
        let c = Constraints::new(Size::new(40, 20), Size::new(200, 100));
        assert_eq!(c.constrain(Size::new(10, 10)), Size::new(40, 20));
    }

    #[test]
    fn test_deflate_saturates_at_zero() {
        let c = Constraints::loose(Size::new(30, 10));
        let deflated = c.deflate(Size::new(50, 50));
        assert_eq!(deflated.max, Size::zero());
    }

    #[test]
    fn test_size_measures_as_itself() {
        let c = Constraints::loose(Size::new(200, 200));
        assert_eq!(Size::new(80, 40).measure(c), Size::new(80, 40));
    }

    #[test]
    fn test_placement_bounds() {
        let p = Placement::new(Point::new(5, 7), Size::new(10, 20));
        let bounds = p.bounds();
        assert_eq!(bounds.top_left, Point::new(5, 7));
        assert_eq!(bounds.size, Size::new(10, 20));
    }
}
