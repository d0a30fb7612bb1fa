use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::sync::atomic::{AtomicU64, Ordering};

use crate::cursor::ListCursor;
use crate::error::ListError;
use crate::iter::Iter;

/// Capacity used by [`DynamicArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 16;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// A growable, insertion-ordered list backed by a contiguous buffer.
///
/// The buffer doubles when an append finds it full and never shrinks.
/// Every structural change (`add`, `insert`, `remove`, `remove_at`,
/// `clear`) advances the modification stamp, which is how a
/// [`ListCursor`] detects that it went stale. In-place `set` leaves the
/// stamp alone.
///
/// The list has no internal synchronization. It is `Send`/`Sync` whenever
/// `T` is, and sharing it between threads for mutation requires an
/// external lock.
pub struct DynamicArrayList<T> {
    // `items.len()` is the logical size; the allocation always holds at
    // least `capacity` elements.
    items: Vec<T>,
    capacity: usize,
    stamp: u64,
    id: u64,
    read_only: bool,
}

impl<T> DynamicArrayList<T> {
    /// Creates an empty list with room for [`DEFAULT_CAPACITY`] elements.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with room for `capacity` elements.
    ///
    /// A zero capacity is accepted; the first append grows it to one slot.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
            stamp: 0,
            id: next_list_id(),
            read_only: false,
        }
    }

    /// Consumes the list and returns it with the read-only flag set.
    ///
    /// Every mutating call on the returned list fails with
    /// [`ListError::Unsupported`].
    #[must_use]
    pub fn into_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Number of live elements.
    #[doc(alias = "count")]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Size of the backing buffer, always at least [`len`](Self::len).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Counter advanced by every structural mutation.
    #[must_use]
    pub fn modification_stamp(&self) -> u64 {
        self.stamp
    }

    /// The live elements in index order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `ListError::OutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.items.get(index).ok_or(ListError::OutOfRange {
            index,
            bound: self.items.len(),
        })
    }

    /// Replaces the element at `index` without touching the modification stamp.
    ///
    /// # Errors
    ///
    /// - `ListError::Unsupported` if the list is read-only
    /// - `ListError::OutOfRange` if `index >= len()`
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ListError> {
        self.check_writable("set")?;
        check_bounds(index, self.items.len())?;

        self.items[index] = value;
        Ok(())
    }

    /// Appends `item`, doubling the buffer first if it is full.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Unsupported` if the list is read-only.
    pub fn add(&mut self, item: T) -> Result<(), ListError> {
        self.check_writable("add")?;
        self.append(item);
        Ok(())
    }

    /// Drops all elements. The buffer keeps its capacity.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Unsupported` if the list is read-only.
    pub fn clear(&mut self) -> Result<(), ListError> {
        self.check_writable("clear")?;

        self.items.clear();
        self.bump_stamp();
        Ok(())
    }

    /// Position of the first element equal to `item`, if any.
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|element| element == item)
    }

    #[must_use]
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Clones all live elements into `destination` starting at `offset`.
    ///
    /// Pass `None` to model an absent destination.
    ///
    /// # Errors
    ///
    /// - `ListError::NullReference` if `destination` is `None`
    /// - `ListError::InvalidArgument` if fewer than `len()` slots remain
    ///   after `offset`
    pub fn copy_to<'d>(
        &self,
        destination: impl Into<Option<&'d mut [T]>>,
        offset: usize,
    ) -> Result<(), ListError>
    where
        T: Clone + 'd,
    {
        let destination = destination.into().ok_or(ListError::NullReference {
            parameter: "destination",
        })?;

        let available = destination.len().saturating_sub(offset);
        if offset > destination.len() || available < self.items.len() {
            return Err(ListError::InvalidArgument {
                required: self.items.len(),
                available,
            });
        }

        destination[offset..offset + self.items.len()].clone_from_slice(&self.items);
        Ok(())
    }

    /// Inserts `item` at `index`, shifting the tail one slot to the right.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// - `ListError::Unsupported` if the list is read-only
    /// - `ListError::OutOfRange` if `index > len()`
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        self.check_writable("insert")?;
        check_bounds(index, self.items.len() + 1)?;

        if self.items.len() == self.capacity {
            self.grow();
        }

        // Shifts in place: the allocation already has room for one more.
        self.items.insert(index, item);
        self.bump_stamp();
        Ok(())
    }

    /// Removes the first element equal to `item`.
    ///
    /// Returns `Ok(false)` if no element matched.
    ///
    /// # Errors
    ///
    /// Returns `ListError::Unsupported` if the list is read-only.
    pub fn remove(&mut self, item: &T) -> Result<bool, ListError>
    where
        T: PartialEq,
    {
        self.check_writable("remove")?;

        match self.index_of(item) {
            Some(index) => self.remove_at(index).map(|_| true),
            None => Ok(false),
        }
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    ///
    /// # Errors
    ///
    /// - `ListError::Unsupported` if the list is read-only
    /// - `ListError::OutOfRange` if `index >= len()`
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        self.check_writable("remove_at")?;
        check_bounds(index, self.items.len())?;

        let removed = self.items.remove(index);
        self.bump_stamp();
        Ok(removed)
    }

    /// Returns a fail-fast cursor positioned before the first element.
    #[must_use]
    pub fn cursor(&self) -> ListCursor {
        ListCursor::new(self.id, self.stamp)
    }

    /// Returns an iterator over the elements in index order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    pub(crate) fn into_items(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn append(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }

        self.items.push(item);
        self.bump_stamp();
    }

    fn grow(&mut self) {
        let new_capacity = self.capacity.saturating_mul(2).max(1);
        log::trace!(
            "growing list buffer from {} to {} slots",
            self.capacity,
            new_capacity
        );

        let mut items = Vec::with_capacity(new_capacity);
        items.append(&mut self.items);
        self.items = items;
        self.capacity = new_capacity;
    }

    fn bump_stamp(&mut self) {
        self.stamp = self.stamp.wrapping_add(1);
    }

    fn check_writable(&self, operation: &'static str) -> Result<(), ListError> {
        if self.read_only {
            Err(ListError::Unsupported { operation })
        } else {
            Ok(())
        }
    }
}

fn check_bounds(index: usize, bound: usize) -> Result<(), ListError> {
    if index >= bound {
        Err(ListError::OutOfRange { index, bound })
    } else {
        Ok(())
    }
}

impl<T> Default for DynamicArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

// A clone is a separate list: cursors of the original do not accept it.
impl<T: Clone> Clone for DynamicArrayList<T> {
    fn clone(&self) -> Self {
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
            stamp: self.stamp,
            id: next_list_id(),
            read_only: self.read_only,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// Capacity, stamp, identity and the read-only flag do not take part in equality.
impl<T: PartialEq> PartialEq for DynamicArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynamicArrayList<T> {}

impl<T> Index<usize> for DynamicArrayList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(_) => panic!(
                "Index {} out of bounds for list of length {}",
                index,
                self.items.len()
            ),
        }
    }
}
