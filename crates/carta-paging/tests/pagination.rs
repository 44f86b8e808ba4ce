//! Cross-module pagination properties.
//!
//! These exercise the contracts the presentation layer relies on: pages
//! partition the sequence exactly, global indices are a bijection onto
//! `0..len`, and navigation can never leave the valid range.

#![allow(clippy::arithmetic_side_effects, clippy::indexing_slicing)]

use carta_paging::{GridSlots, PageCursor, Paginator, PagingError};

#[test]
fn page_count_is_at_least_one_for_all_lengths() {
    for page_size in 1..=8 {
        let p = Paginator::new(page_size).unwrap();
        for len in 0..=40 {
            assert!(p.page_count(len) >= 1, "len={len} page_size={page_size}");
        }
    }
}

#[test]
fn pages_partition_the_sequence_exactly() {
    let items: Vec<u32> = (0..23).collect();
    for page_size in 1..=25 {
        let p = Paginator::new(page_size).unwrap();
        let mut rebuilt = Vec::new();
        for page in 0..p.page_count(items.len()) {
            let slice = p.page_slice(&items, page);
            assert!(slice.len() <= page_size);
            if page < p.last_page(items.len()) {
                assert_eq!(slice.len(), page_size, "non-final page must be full");
            }
            rebuilt.extend_from_slice(slice);
        }
        assert_eq!(rebuilt, items, "page_size={page_size}");
    }
}

#[test]
fn global_indices_enumerate_the_sequence_in_order() {
    let items: Vec<u32> = (0..17).collect();
    for page_size in 1..=20 {
        let p = Paginator::new(page_size).unwrap();
        let mut seen = Vec::new();
        for page in 0..p.page_count(items.len()) {
            for local in 0..p.page_slice(&items, page).len() {
                seen.push(p.global_index(page, local));
            }
        }
        let expected: Vec<usize> = (0..items.len()).collect();
        assert_eq!(seen, expected, "page_size={page_size}");
    }
}

#[test]
fn global_index_recovers_the_item_itself() {
    let items = ["a", "b", "c", "d", "e", "f", "g"];
    let p = Paginator::new(3).unwrap();
    for page in 0..p.page_count(items.len()) {
        for (local, item) in p.page_slice(&items, page).iter().enumerate() {
            assert_eq!(items[p.global_index(page, local)], *item);
        }
    }
}

#[test]
fn scenario_five_items_page_size_two() {
    let items = ['A', 'B', 'C', 'D', 'E'];
    let p = Paginator::new(2).unwrap();
    assert_eq!(p.page_count(items.len()), 3);
    assert_eq!(p.page_slice(&items, 0), &['A', 'B']);
    assert_eq!(p.page_slice(&items, 1), &['C', 'D']);
    assert_eq!(p.page_slice(&items, 2), &['E']);
}

#[test]
fn scenario_empty_sequence_page_size_ten() {
    let items: [u8; 0] = [];
    let p = Paginator::new(10).unwrap();
    assert_eq!(p.page_count(items.len()), 1);
    assert!(p.page_slice(&items, 0).is_empty());
}

#[test]
fn scenario_grid_short_second_row() {
    // Ten items, three per page, two columns: page 0 is [i0, i1, i2],
    // rows [i0, i1] and [i2] — the second row is short, nothing synthesized.
    let items: Vec<u32> = (0..10).collect();
    let p = Paginator::new(3).unwrap();
    let grid = GridSlots::new(2).unwrap();

    let page0 = p.page_slice(&items, 0);
    let rows: Vec<&[u32]> = grid.rows(page0).collect();
    assert_eq!(rows, vec![&[0, 1][..], &[2][..]]);
}

#[test]
fn scenario_zero_page_size_rejected() {
    assert_eq!(Paginator::new(0), Err(PagingError::InvalidPageSize));
}

#[test]
fn cursor_navigation_stays_in_range() {
    let items: Vec<u8> = (0..9).collect();
    let mut cursor = PageCursor::new(Paginator::new(4).unwrap());
    let count = cursor.page_count(items.len());

    for _ in 0..10 {
        cursor.next(items.len());
        assert!(cursor.page() < count);
    }
    for _ in 0..10 {
        cursor.prev();
    }
    assert_eq!(cursor.page(), 0);
}

#[test]
fn cursor_slices_cover_sequence_via_navigation() {
    let items: Vec<u16> = (0..11).collect();
    let mut cursor = PageCursor::new(Paginator::new(4).unwrap());
    let mut rebuilt = Vec::new();

    loop {
        rebuilt.extend_from_slice(cursor.slice(&items));
        if cursor.page() == cursor.paginator().last_page(items.len()) {
            break;
        }
        cursor.next(items.len());
    }
    assert_eq!(rebuilt, items);
}

#[test]
fn grid_assignment_matches_row_iteration() {
    let grid = GridSlots::new(3).unwrap();
    let page: Vec<u32> = (0..8).collect();

    for (local, _) in page.iter().enumerate() {
        let row = grid.row_of(local);
        let col = grid.column_of(local);
        let rows: Vec<&[u32]> = grid.rows(&page).collect();
        assert_eq!(rows[row][col], page[local]);
    }
}
