//! Page arithmetic for page-based e-ink list presentation.
//!
//! E-ink panels refresh whole regions at once, so continuous scrolling reads
//! poorly: content is instead split into fixed-size pages and the user steps
//! between them. This crate is the arithmetic behind that presentation —
//! page counts, page slices, grid row assignment, and a clamped navigation
//! cursor. It performs no rendering and holds no item data; every computation
//! is a pure function of the slice and indices passed in.
//!
//! # Example
//!
//! ```
//! use carta_paging::{PageCursor, Paginator};
//!
//! let items = ["alpha", "beta", "gamma", "delta", "epsilon"];
//! let paginator = Paginator::new(2)?;
//! assert_eq!(paginator.page_count(items.len()), 3);
//! assert_eq!(paginator.page_slice(&items, 1), &["gamma", "delta"]);
//!
//! // The presentation layer owns the cursor and passes it into every call.
//! let mut cursor = PageCursor::new(paginator);
//! cursor.next(items.len());
//! cursor.next(items.len());
//! cursor.next(items.len()); // already on the last page: clamped
//! assert_eq!(cursor.page(), 2);
//! assert_eq!(paginator.page_slice(&items, cursor.page()), &["epsilon"]);
//! # Ok::<(), carta_paging::PagingError>(())
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod cursor;
pub mod error;
pub mod grid;
pub mod paginator;

pub use cursor::PageCursor;
pub use error::PagingError;
pub use grid::GridSlots;
pub use paginator::Paginator;
