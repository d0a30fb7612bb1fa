#![no_std]

//! `DynamicArrayList`: a growable array-backed list with fail-fast cursors.
//!
//! The list stores its elements in one contiguous buffer that doubles when an
//! append finds it full. Elements are addressed by index, kept in insertion
//! order, and compared with `PartialEq` for searching.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Time Complexity
//! - `add()`: amortized O(1), the buffer doubles on overflow
//! - `get()`, `set()`: O(1)
//! - `insert()`, `remove_at()`: O(n), the tail is shifted by one slot
//! - `index_of()`, `contains()`, `remove()`: O(n) linear scan
//! - `clear()`: O(n), live elements are dropped, capacity is kept
//!
//! # List Interface
//!
//! ```
//! # use dynarray_list::{DynamicArrayList, ListError};
//! let mut list = DynamicArrayList::new();
//! for i in 0..12 {
//!     list.add(i).unwrap();
//! }
//!
//! list.set(10, 100).unwrap();
//! assert_eq!(list.get(10), Ok(&100));
//!
//! list.insert(0, -1).unwrap();
//! assert_eq!(list.index_of(&-1), Some(0));
//! assert_eq!(list.len(), 13);
//!
//! assert_eq!(list.remove(&5), Ok(true));
//! assert!(!list.contains(&5));
//!
//! assert_eq!(
//!     list.get(12),
//!     Err(ListError::OutOfRange { index: 12, bound: 12 })
//! );
//! ```
//!
//! # Copying Out
//!
//! `copy_to()` accepts a slice or `None`; the latter reports an absent
//! destination:
//!
//! ```
//! # use dynarray_list::{DynamicArrayList, ListError};
//! let list: DynamicArrayList<u32> = (1..=3).collect();
//! let mut destination = [0u32; 5];
//!
//! list.copy_to(&mut destination[..], 2).unwrap();
//! assert_eq!(destination, [0, 0, 1, 2, 3]);
//!
//! assert!(matches!(
//!     list.copy_to(None::<&mut [u32]>, 0),
//!     Err(ListError::NullReference { .. })
//! ));
//! ```
//!
//! # Iterator Support
//!
//! Borrowing iteration uses the standard iterator traits. The borrow checker
//! keeps the list frozen while the iterator lives:
//!
//! ```
//! # use dynarray_list::DynamicArrayList;
//! let list: DynamicArrayList<_> = ["a", "b", "c"].into_iter().collect();
//!
//! let mut joined = String::new();
//! for item in &list {
//!     joined.push_str(item);
//! }
//! assert_eq!(joined, "abc");
//! ```
//!
//! A [`ListCursor`] does not borrow the list between steps. It snapshots the
//! modification stamp instead, and fails once the list changes structurally:
//!
//! ```
//! # use dynarray_list::{CursorState, DynamicArrayList};
//! let mut list: DynamicArrayList<i32> = (0..3).collect();
//! let mut cursor = list.cursor();
//!
//! while cursor.move_next(&list).unwrap() {
//!     let value = *cursor.current(&list).unwrap();
//!     list.set(0, value).unwrap(); // in-place writes keep the cursor valid
//! }
//! assert_eq!(cursor.state(), CursorState::Exhausted);
//!
//! list.add(3).unwrap();
//! cursor.reset();
//! assert!(cursor.move_next(&list).is_err());
//! ```
//!
//! # Thread Safety
//!
//! There is no internal locking. Concurrent mutation needs external
//! synchronization.

extern crate alloc;

mod core;
mod cursor;
mod error;
mod iter;

// Re-export public types
pub use crate::core::{DynamicArrayList, DEFAULT_CAPACITY};
pub use crate::cursor::{CursorState, ListCursor};
pub use crate::error::ListError;
pub use crate::iter::{IntoIter, Iter};
