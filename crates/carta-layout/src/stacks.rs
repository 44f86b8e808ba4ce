//! Sequential stack containers.
//!
//! A stack collects the measured sizes of its children, then reports its own
//! size ([`measure`](VStack::measure)) and the children's positions
//! ([`arrange`](VStack::arrange)). Children are stored as sizes, not trait
//! objects, so stacking works without an allocator; capacity is the `N`
//! const parameter.

use embedded_graphics::prelude::{Point, Size};
use heapless::Vec;

use crate::edges::Edges;
use crate::layout::{Constraints, Layout, Placement};

/// Cross-axis alignment of stack children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CrossAlign {
    /// Align to the leading edge (left in a VStack, top in an HStack).
    #[default]
    Start,
    /// Center on the cross axis.
    Center,
    /// Align to the trailing edge.
    End,
}

impl CrossAlign {
    /// Pixel offset of a child of extent `child` inside an extent `available`.
    fn offset(self, available: u32, child: u32) -> u32 {
        let slack = available.saturating_sub(child);
        match self {
            CrossAlign::Start => 0,
            CrossAlign::Center => slack / 2,
            CrossAlign::End => slack,
        }
    }
}

/// Vertical stack: children laid out top to bottom with a fixed gap.
///
/// # Example
///
/// ```
/// use carta_layout::{Edges, VStack};
/// use embedded_graphics::prelude::*;
///
/// let mut stack: VStack<4> = VStack::new().gap(8);
/// stack.push(Size::new(50, 30)).ok();
/// stack.push(Size::new(60, 20)).ok();
/// assert_eq!(stack.measure(), Size::new(60, 58));
/// ```
#[derive(Debug, Clone, Default)]
pub struct VStack<const N: usize> {
    children: Vec<Size, N>,
    gap: u32,
    padding: Edges,
    align: CrossAlign,
}

impl<const N: usize> VStack<N> {
    /// Create an empty vertical stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            gap: 0,
            padding: Edges::ZERO,
            align: CrossAlign::Start,
        }
    }

    /// Set the gap between children.
    #[must_use]
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the padding inside the stack's bounds.
    #[must_use]
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set the cross-axis alignment.
    #[must_use]
    pub fn align(mut self, align: CrossAlign) -> Self {
        self.align = align;
        self
    }

    /// Append a child of the given size.
    ///
    /// # Errors
    ///
    /// Returns the size back when the stack already holds `N` children.
    pub fn push(&mut self, size: Size) -> Result<(), Size> {
        self.children.push(size)
    }

    /// Measure a child against `constraints` and append it.
    ///
    /// # Errors
    ///
    /// Returns the measured size back when the stack is full.
    pub fn push_measured(
        &mut self,
        child: &impl Layout,
        constraints: Constraints,
    ) -> Result<(), Size> {
        self.push(child.measure(constraints))
    }

    /// Number of children currently in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the stack has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total size of the stack: widest child plus padding across, summed
    /// heights plus gaps and padding down.
    // SAFETY: all values are display pixel counts bounded by panel
    // dimensions, and child counts are bounded by N; sums fit in u32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    #[must_use]
    pub fn measure(&self) -> Size {
        let widest = self.children.iter().map(|s| s.width).max().unwrap_or(0);
        let heights: u32 = self.children.iter().map(|s| s.height).sum();
        let gaps = self.gap * (self.children.len().saturating_sub(1) as u32);
        Size::new(
            widest + self.padding.horizontal(),
            heights + gaps + self.padding.vertical(),
        )
    }

    /// Positions of every child when the stack's top-left corner sits at
    /// `origin`, in push order.
    // SAFETY: coordinates are display-bounded; u32 extents fit in i32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
    #[must_use]
    pub fn arrange(&self, origin: Point) -> Vec<Placement, N> {
        let content_width = self
            .measure()
            .width
            .saturating_sub(self.padding.horizontal());
        let mut placements = Vec::new();
        let mut y = origin.y + self.padding.top as i32;
        for child in &self.children {
            let x = origin.x
                + self.padding.left as i32
                + self.align.offset(content_width, child.width) as i32;
            // Capacity matches the children vec, this push cannot fail.
            placements.push(Placement::new(Point::new(x, y), *child)).ok();
            y += child.height as i32 + self.gap as i32;
        }
        placements
    }
}

impl<const N: usize> Layout for VStack<N> {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.measure())
    }
}

/// Horizontal stack: children laid out left to right with a fixed gap.
///
/// The horizontal counterpart of [`VStack`]; see there for the model.
#[derive(Debug, Clone, Default)]
pub struct HStack<const N: usize> {
    children: Vec<Size, N>,
    gap: u32,
    padding: Edges,
    align: CrossAlign,
}

impl<const N: usize> HStack<N> {
    /// Create an empty horizontal stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            gap: 0,
            padding: Edges::ZERO,
            align: CrossAlign::Start,
        }
    }

    /// Set the gap between children.
    #[must_use]
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the padding inside the stack's bounds.
    #[must_use]
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set the cross-axis alignment.
    #[must_use]
    pub fn align(mut self, align: CrossAlign) -> Self {
        self.align = align;
        self
    }

    /// Append a child of the given size.
    ///
    /// # Errors
    ///
    /// Returns the size back when the stack already holds `N` children.
    pub fn push(&mut self, size: Size) -> Result<(), Size> {
        self.children.push(size)
    }

    /// Measure a child against `constraints` and append it.
    ///
    /// # Errors
    ///
    /// Returns the measured size back when the stack is full.
    pub fn push_measured(
        &mut self,
        child: &impl Layout,
        constraints: Constraints,
    ) -> Result<(), Size> {
        self.push(child.measure(constraints))
    }

    /// Number of children currently in the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the stack has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total size of the stack: summed widths plus gaps and padding across,
    /// tallest child plus padding down.
    // SAFETY: all values are display pixel counts bounded by panel
    // dimensions, and child counts are bounded by N; sums fit in u32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    #[must_use]
    pub fn measure(&self) -> Size {
        let tallest = self.children.iter().map(|s| s.height).max().unwrap_or(0);
        let widths: u32 = self.children.iter().map(|s| s.width).sum();
        let gaps = self.gap * (self.children.len().saturating_sub(1) as u32);
        Size::new(
            widths + gaps + self.padding.horizontal(),
            tallest + self.padding.vertical(),
        )
    }

    /// Positions of every child when the stack's top-left corner sits at
    /// `origin`, in push order.
    // SAFETY: coordinates are display-bounded; u32 extents fit in i32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
    #[must_use]
    pub fn arrange(&self, origin: Point) -> Vec<Placement, N> {
        let content_height = self
            .measure()
            .height
            .saturating_sub(self.padding.vertical());
        let mut placements = Vec::new();
        let mut x = origin.x + self.padding.left as i32;
        for child in &self.children {
            let y = origin.y
                + self.padding.top as i32
                + self.align.offset(content_height, child.height) as i32;
            // Capacity matches the children vec, this push cannot fail.
            placements.push(Placement::new(Point::new(x, y), *child)).ok();
            x += child.width as i32 + self.gap as i32;
        }
        placements
    }
}

impl<const N: usize> Layout for HStack<N> {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.measure())
    }
}

/// Fixed-size spacer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacer {
    size: Size,
}

impl Spacer {
    /// A spacer with the given size.
    #[must_use]
    pub const fn new(size: Size) -> Self {
        Self { size }
    }

    /// A horizontal spacer (height 0).
    #[must_use]
    pub const fn width(width: u32) -> Self {
        Self {
            size: Size::new(width, 0),
        }
    }

    /// A vertical spacer (width 0).
    #[must_use]
    pub const fn height(height: u32) -> Self {
        Self {
            size: Size::new(0, height),
        }
    }

    /// The spacer's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }
}

impl Layout for Spacer {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(self.size)
    }
}
