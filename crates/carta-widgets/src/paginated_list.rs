//! Page-at-a-time list and grid presentation.
//!
//! Scrolling is replaced with discrete page navigation: the widget shows
//! one page of items, and the caller steps a [`PageCursor`] on navigation
//! events and re-renders. Items are drawn through a callback that receives
//! the item, its absolute index in the full sequence, and the cell
//! rectangle to draw into — the widget imposes nothing on cell content.

use carta_layout::{Edges, VStack};
use carta_paging::{GridSlots, PageCursor};
use carta_theme::{metrics, Palette};
use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::Rectangle};

use crate::page_indicator::{IndicatorStyle, PageIndicator};

/// Upper bound on rows drawn per page.
///
/// Pages longer than this are clipped at render time; pick a page size
/// from [`PaginatedList::page_capacity`] to stay within the view.
pub const MAX_PAGE_ROWS: usize = 32;

/// A paginated list of uniform-height rows.
///
/// # Example
///
/// ```
/// use carta_paging::{PageCursor, Paginator};
/// use carta_widgets::PaginatedList;
///
/// let items = ["Chapter 1", "Chapter 2", "Chapter 3"];
/// let list = PaginatedList::new(&items);
/// let cursor = PageCursor::new(Paginator::new(2)?);
/// // list.render(&mut display, bounds, &cursor, |d, item, index, cell| { ... })
/// # Ok::<(), carta_paging::PagingError>(())
/// ```
pub struct PaginatedList<'a, T> {
    items: &'a [T],
    item_height: u32,
    row_gap: u32,
    padding: Edges,
    palette: Palette,
    indicator: Option<IndicatorStyle>,
}

impl<'a, T> PaginatedList<'a, T> {
    /// Create a list over `items` with touch-target-height rows and a
    /// numeric page indicator.
    #[must_use]
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            item_height: metrics::touch_target::DEFAULT_MIN,
            row_gap: metrics::spacing::SMALL,
            padding: Edges::all(metrics::spacing::MEDIUM),
            palette: Palette::default(),
            indicator: Some(IndicatorStyle::default()),
        }
    }

    /// Set the height of each row.
    #[must_use]
    pub fn item_height(mut self, height: u32) -> Self {
        self.item_height = height;
        self
    }

    /// Set the vertical gap between rows.
    #[must_use]
    pub fn row_gap(mut self, gap: u32) -> Self {
        self.row_gap = gap;
        self
    }

    /// Set the padding between the widget bounds and its content.
    #[must_use]
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set the palette to resolve colors from.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the page-indicator style.
    #[must_use]
    pub fn indicator(mut self, style: IndicatorStyle) -> Self {
        self.indicator = Some(style);
        self
    }

    /// Render no page indicator, even with multiple pages.
    #[must_use]
    pub fn hide_indicator(mut self) -> Self {
        self.indicator = None;
        self
    }

    fn content_area(&self, bounds: Rectangle) -> Rectangle {
        inset(bounds, self.padding)
    }

    fn indicator_for(&self, cursor: &PageCursor) -> Option<PageIndicator> {
        let style = self.indicator?;
        let indicator = PageIndicator::new(cursor.page_count(self.items.len()), cursor.page())
            .style(style)
            .palette(self.palette);
        indicator.visible().then_some(indicator)
    }

    /// Vertical space reserved for the indicator strip, including its gap.
    fn indicator_band(&self, cursor: &PageCursor) -> u32 {
        match self.indicator_for(cursor) {
            Some(indicator) => indicator
                .size()
                .height
                .saturating_add(metrics::spacing::MEDIUM),
            None => 0,
        }
    }

    /// How many rows fit in `bounds` — the natural page size for this view.
    ///
    /// Computed against the worst case (indicator shown), so a paginator
    /// built from this capacity never overflows the view.
    #[must_use]
    pub fn page_capacity(&self, bounds: Rectangle) -> usize {
        if self.item_height == 0 {
            return 0;
        }
        let indicator_probe = match self.indicator {
            // Both styles are shorter than a row; probe with two pages to
            // get the shown-indicator height.
            Some(style) => PageIndicator::new(2, 0)
                .style(style)
                .palette(self.palette)
                .size()
                .height
                .saturating_add(metrics::spacing::MEDIUM),
            None => 0,
        };
        let rows_height = self
            .content_area(bounds)
            .size
            .height
            .saturating_sub(indicator_probe);
        // n rows need n * item_height + (n - 1) * row_gap.
        let per_row = self.item_height.saturating_add(self.row_gap);
        let fit = rows_height.saturating_add(self.row_gap).checked_div(per_row);
        usize::try_from(fit.unwrap_or(0)).unwrap_or(0).min(MAX_PAGE_ROWS)
    }

    /// Render the cursor's current page into `bounds`.
    ///
    /// `draw_item` receives the display, the item, its absolute index in
    /// the full sequence, and the row rectangle to draw into. Rows that do
    /// not fit the bounds are clipped, not shrunk.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    pub fn render<D, F>(
        &self,
        display: &mut D,
        bounds: Rectangle,
        cursor: &PageCursor,
        mut draw_item: F,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        F: FnMut(&mut D, &T, usize, Rectangle) -> Result<(), D::Error>,
    {
        let page_items = cursor.slice(self.items);
        let content = self.content_area(bounds);
        let rows_height = content
            .size
            .height
            .saturating_sub(self.indicator_band(cursor));

        // Stack up the visible rows, then place them.
        let per_row = self.item_height.saturating_add(self.row_gap);
        let fit = rows_height
            .saturating_add(self.row_gap)
            .checked_div(per_row)
            .unwrap_or(0);
        let visible = page_items
            .len()
            .min(usize::try_from(fit).unwrap_or(0))
            .min(MAX_PAGE_ROWS);

        let mut column: VStack<MAX_PAGE_ROWS> = VStack::new().gap(self.row_gap);
        for _ in 0..visible {
            column
                .push(Size::new(content.size.width, self.item_height))
                .ok();
        }
        let placements = column.arrange(content.top_left);

        for (local, (placement, item)) in placements.iter().zip(page_items).enumerate() {
            draw_item(display, item, cursor.global_index(local), placement.bounds())?;
        }

        self.render_indicator(display, content, cursor)
    }

    // SAFETY: indicator sizes and content extents are display-bounded; the
    // centering offsets fit in i32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
    fn render_indicator<D>(
        &self,
        display: &mut D,
        content: Rectangle,
        cursor: &PageCursor,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
    {
        if let Some(indicator) = self.indicator_for(cursor) {
            let size = indicator.size();
            let x = content.top_left.x
                + (content.size.width.saturating_sub(size.width) / 2) as i32;
            let y = content.top_left.y
                + content.size.height.saturating_sub(size.height) as i32;
            indicator.render(display, Point::new(x, y))?;
        }
        Ok(())
    }
}

/// A paginated grid with a fixed column count.
///
/// Rows come from [`GridSlots`]: the last row of a short page holds fewer
/// cells, and the remaining space simply stays blank — no placeholder items
/// are invented.
pub struct PaginatedGrid<'a, T> {
    items: &'a [T],
    grid: GridSlots,
    cell_height: u32,
    gap: u32,
    padding: Edges,
    palette: Palette,
    indicator: Option<IndicatorStyle>,
}

impl<'a, T> PaginatedGrid<'a, T> {
    /// Create a grid over `items` with the given column assignment.
    #[must_use]
    pub fn new(items: &'a [T], grid: GridSlots) -> Self {
        Self {
            items,
            grid,
            cell_height: metrics::touch_target::DEFAULT_MIN,
            gap: metrics::spacing::SMALL,
            padding: Edges::all(metrics::spacing::MEDIUM),
            palette: Palette::default(),
            indicator: Some(IndicatorStyle::default()),
        }
    }

    /// Set the height of each cell.
    #[must_use]
    pub fn cell_height(mut self, height: u32) -> Self {
        self.cell_height = height;
        self
    }

    /// Set the gap between cells, both across and down.
    #[must_use]
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the padding between the widget bounds and its content.
    #[must_use]
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set the palette to resolve colors from.
    #[must_use]
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the page-indicator style.
    #[must_use]
    pub fn indicator(mut self, style: IndicatorStyle) -> Self {
        self.indicator = Some(style);
        self
    }

    /// Render no page indicator, even with multiple pages.
    #[must_use]
    pub fn hide_indicator(mut self) -> Self {
        self.indicator = None;
        self
    }

    /// Width of one cell inside `bounds`.
    #[must_use]
    pub fn cell_width(&self, bounds: Rectangle) -> u32 {
        let content = inset(bounds, self.padding);
        let columns = u32::try_from(self.grid.columns()).unwrap_or(u32::MAX);
        let gaps = self.gap.saturating_mul(columns.saturating_sub(1));
        content
            .size
            .width
            .saturating_sub(gaps)
            .checked_div(columns)
            .unwrap_or(0)
    }

    /// Render the cursor's current page into `bounds`.
    ///
    /// `draw_cell` receives the display, the item, its absolute index in
    /// the full sequence, and the cell rectangle. Rows that do not fit are
    /// clipped.
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    // SAFETY: cell extents, gaps, and row/column counts are display-bounded;
    // the coordinate arithmetic fits in i32.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
    pub fn render<D, F>(
        &self,
        display: &mut D,
        bounds: Rectangle,
        cursor: &PageCursor,
        mut draw_cell: F,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Gray4>,
        F: FnMut(&mut D, &T, usize, Rectangle) -> Result<(), D::Error>,
    {
        let page_items = cursor.slice(self.items);
        let content = inset(bounds, self.padding);
        let band = match self.indicator_for(cursor) {
            Some(indicator) => indicator
                .size()
                .height
                .saturating_add(metrics::spacing::MEDIUM),
            None => 0,
        };
        let rows_height = content.size.height.saturating_sub(band);
        let cell_width = self.cell_width(bounds);
        let cell = Size::new(cell_width, self.cell_height);

        for (row_index, row) in self.grid.rows(page_items).enumerate().take(MAX_PAGE_ROWS) {
            let y_offset = (row_index as u32).saturating_mul(self.cell_height + self.gap);
            if y_offset.saturating_add(self.cell_height) > rows_height {
                break;
            }
            let y = content.top_left.y + y_offset as i32;
            for (column, item) in row.iter().enumerate() {
                let x = content.top_left.x
                    + ((column as u32).saturating_mul(cell_width + self.gap)) as i32;
                let local = row_index * self.grid.columns() + column;
                draw_cell(
                    display,
                    item,
                    cursor.global_index(local),
                    Rectangle::new(Point::new(x, y), cell),
                )?;
            }
        }

        if let Some(indicator) = self.indicator_for(cursor) {
            let size = indicator.size();
            let x =
                content.top_left.x + (content.size.width.saturating_sub(size.width) / 2) as i32;
            let y = content.top_left.y + content.size.height.saturating_sub(size.height) as i32;
            indicator.render(display, Point::new(x, y))?;
        }
        Ok(())
    }

    fn indicator_for(&self, cursor: &PageCursor) -> Option<PageIndicator> {
        let style = self.indicator?;
        let indicator = PageIndicator::new(cursor.page_count(self.items.len()), cursor.page())
            .style(style)
            .palette(self.palette);
        indicator.visible().then_some(indicator)
    }
}

/// Shrink `bounds` by `padding` on every side.
// SAFETY: padding values are metric constants far below display extents.
#[allow(clippy::arithmetic_side_effects, clippy::cast_possible_wrap)]
fn inset(bounds: Rectangle, padding: Edges) -> Rectangle {
    Rectangle::new(
        Point::new(
            bounds.top_left.x + padding.left as i32,
            bounds.top_left.y + padding.top as i32,
        ),
        Size::new(
            bounds.size.width.saturating_sub(padding.horizontal()),
            bounds.size.height.saturating_sub(padding.vertical()),
        ),
    )
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;
    use carta_paging::Paginator;
    use embedded_graphics::mock_display::MockDisplay;

    fn bounds() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(264, 400))
    }

    fn collect_rendered(
        list: &PaginatedList<'_, &str>,
        cursor: &PageCursor,
    ) -> Vec<(String, usize, Rectangle)> {
        let mut display: MockDisplay<Gray4> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        let mut seen = Vec::new();
        list.render(&mut display, bounds(), cursor, |_, item, index, cell| {
            seen.push(((*item).to_string(), index, cell));
            Ok(())
        })
        .unwrap();
        seen
    }

    #[test]
    fn test_renders_current_page_with_global_indices() {
        let items = ["a", "b", "c", "d", "e"];
        let list = PaginatedList::new(&items).hide_indicator();
        let mut cursor = PageCursor::new(Paginator::new(2).unwrap());
        cursor.next(items.len());

        let seen = collect_rendered(&list, &cursor);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, "c");
        assert_eq!(seen[0].1, 2);
        assert_eq!(seen[1].0, "d");
        assert_eq!(seen[1].1, 3);
    }

    #[test]
    fn test_last_page_renders_remainder() {
        let items = ["a", "b", "c", "d", "e"];
        let list = PaginatedList::new(&items).hide_indicator();
        let mut cursor = PageCursor::new(Paginator::new(2).unwrap());
        cursor.last(items.len());

        let seen = collect_rendered(&list, &cursor);
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "e");
        assert_eq!(seen[0].1, 4);
    }

    #[test]
    fn test_empty_sequence_renders_empty_page() {
        let items: [&str; 0] = [];
        let list = PaginatedList::new(&items).hide_indicator();
        let cursor = PageCursor::new(Paginator::new(10).unwrap());

        let seen = collect_rendered(&list, &cursor);
        assert!(seen.is_empty());
    }

    #[test]
    fn test_rows_are_stacked_with_gap() {
        let items = ["a", "b", "c"];
        let list = PaginatedList::new(&items)
            .hide_indicator()
            .item_height(40)
            .row_gap(8)
            .padding(Edges::all(16));
        let cursor = PageCursor::new(Paginator::new(3).unwrap());

        let seen = collect_rendered(&list, &cursor);
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].2.top_left, Point::new(16, 16));
        assert_eq!(seen[1].2.top_left.y, 16 + 40 + 8);
        assert_eq!(seen[2].2.top_left.y, 16 + 2 * 48);
        assert_eq!(seen[0].2.size, Size::new(264 - 32, 40));
    }

    #[test]
    fn test_rows_past_the_view_are_clipped() {
        let items: Vec<&str> = core::iter::repeat("x").take(30).collect();
        // 400 high, padding 32, rows of 48 + 8 gap: floor(376 / 56) = 6.
        let list = PaginatedList::new(&items).hide_indicator();
        let cursor = PageCursor::new(Paginator::new(30).unwrap());

        let mut display: MockDisplay<Gray4> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        let mut count = 0;
        list.render(&mut display, bounds(), &cursor, |_, _, _, _| {
            count += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(count, 6);
    }

    #[test]
    fn test_page_capacity_matches_clipping() {
        let items: Vec<&str> = core::iter::repeat("x").take(30).collect();
        let list = PaginatedList::new(&items).hide_indicator();
        assert_eq!(list.page_capacity(bounds()), 6);

        let with_indicator = PaginatedList::new(&items);
        assert!(with_indicator.page_capacity(bounds()) <= 6);
    }

    #[test]
    fn test_grid_short_last_row_no_placeholders() {
        let items: Vec<u32> = (0..10).collect();
        let grid = PaginatedGrid::new(&items, GridSlots::new(2).unwrap())
            .hide_indicator()
            .cell_height(40);
        let cursor = PageCursor::new(Paginator::new(3).unwrap());

        let mut display: MockDisplay<Gray4> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        let mut seen = Vec::new();
        grid.render(&mut display, bounds(), &cursor, |_, item, index, cell| {
            seen.push((*item, index, cell.top_left));
            Ok(())
        })
        .unwrap();

        // Page 0 holds items 0..3 in rows [0, 1] and [2]; exactly three
        // cells render, none synthesized for the empty slot.
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].0, 0);
        assert_eq!(seen[1].0, 1);
        assert_eq!(seen[2].0, 2);
        // Global indices are arithmetic, not item identity.
        assert_eq!(seen[2].1, 2);
        // Row 1 starts below row 0; columns share x coordinates.
        assert_eq!(seen[0].2.x, seen[2].2.x);
        assert!(seen[2].2.y > seen[0].2.y);
    }

    #[test]
    fn test_grid_cell_width_divides_content() {
        let items: Vec<u32> = (0..4).collect();
        let grid = PaginatedGrid::new(&items, GridSlots::new(2).unwrap()).gap(8);
        // content width = 264 - 32 = 232; minus one gap of 8 = 224; /2 = 112.
        assert_eq!(grid.cell_width(bounds()), 112);
    }

    #[test]
    fn test_duplicate_items_keep_distinct_global_indices() {
        // Identical values must still get their own indices.
        let items = ["same", "same", "same", "same"];
        let list = PaginatedList::new(&items).hide_indicator();
        let mut cursor = PageCursor::new(Paginator::new(2).unwrap());
        cursor.next(items.len());

        let seen = collect_rendered(&list, &cursor);
        assert_eq!(seen[0].1, 2);
        assert_eq!(seen[1].1, 3);
    }
}
