use crate::core::DynamicArrayList;
use crate::error::ListError;

/// Observable lifecycle of a [`ListCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Positioned before the first element
    NotStarted,
    /// Positioned on a live element
    Iterating,
    /// Moved past the last element
    Exhausted,
    /// The list changed structurally under the cursor; every further call fails
    Poisoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    BeforeFirst,
    At(usize),
    AfterLast,
}

/// Fail-fast cursor over a [`DynamicArrayList`].
///
/// The cursor holds no borrow between calls: it remembers the list's
/// modification stamp at creation and a position, and takes the list on
/// every call. Any structural change to the list after the cursor was
/// created makes the next `move_next` fail with
/// [`ListError::InvalidOperation`], after which the cursor stays poisoned.
///
/// A cursor only accepts the list that created it; any other list,
/// including a clone, is rejected with [`ListError::InvalidOperation`].
///
/// ```
/// # use dynarray_list::{DynamicArrayList, ListError};
/// let mut list: DynamicArrayList<i32> = (0..3).collect();
/// let mut cursor = list.cursor();
///
/// assert_eq!(cursor.move_next(&list), Ok(true));
/// assert_eq!(cursor.current(&list), Ok(&0));
///
/// list.add(3).unwrap();
/// assert!(matches!(
///     cursor.move_next(&list),
///     Err(ListError::InvalidOperation { .. })
/// ));
/// ```
#[derive(Debug, Clone)]
pub struct ListCursor {
    list_id: u64,
    stamp: u64,
    position: Position,
    poisoned: bool,
}

impl ListCursor {
    pub(crate) fn new(list_id: u64, stamp: u64) -> Self {
        Self {
            list_id,
            stamp,
            position: Position::BeforeFirst,
            poisoned: false,
        }
    }

    /// Advances to the next element.
    ///
    /// Returns `Ok(false)` once the cursor moves past the last element.
    ///
    /// # Errors
    ///
    /// Returns `ListError::InvalidOperation` if `list` is not the list that
    /// created the cursor, or if it was structurally modified since.
    pub fn move_next<T>(&mut self, list: &DynamicArrayList<T>) -> Result<bool, ListError> {
        self.check_owner(list)?;
        if let Err(err) = self.check_stamp(list) {
            if !self.poisoned {
                log::debug!(
                    "stale cursor: snapshot stamp {} but list is at {}",
                    self.stamp,
                    list.modification_stamp()
                );
            }
            self.poisoned = true;
            return Err(err);
        }

        let next = match self.position {
            Position::BeforeFirst => 0,
            Position::At(index) => index + 1,
            Position::AfterLast => return Ok(false),
        };

        if next < list.len() {
            self.position = Position::At(next);
            Ok(true)
        } else {
            self.position = Position::AfterLast;
            Ok(false)
        }
    }

    /// Returns the element under the cursor.
    ///
    /// # Errors
    ///
    /// Returns `ListError::InvalidOperation` if the cursor is stale, belongs to
    /// another list, has not been advanced yet, or is exhausted.
    pub fn current<'a, T>(&self, list: &'a DynamicArrayList<T>) -> Result<&'a T, ListError> {
        self.check_owner(list)?;
        self.check_stamp(list)?;

        match self.position {
            Position::At(index) => list.get(index),
            Position::BeforeFirst => Err(ListError::InvalidOperation {
                reason: "cursor has not been advanced",
            }),
            Position::AfterLast => Err(ListError::InvalidOperation {
                reason: "cursor is past the last element",
            }),
        }
    }

    /// Moves back before the first element. The stamp snapshot is kept, so
    /// a stale cursor stays stale.
    pub fn reset(&mut self) {
        self.position = Position::BeforeFirst;
    }

    #[must_use]
    pub fn state(&self) -> CursorState {
        if self.poisoned {
            return CursorState::Poisoned;
        }
        match self.position {
            Position::BeforeFirst => CursorState::NotStarted,
            Position::At(_) => CursorState::Iterating,
            Position::AfterLast => CursorState::Exhausted,
        }
    }

    // A foreign list says nothing about the owner's state, so it does not poison.
    fn check_owner<T>(&self, list: &DynamicArrayList<T>) -> Result<(), ListError> {
        if self.list_id == list.id() {
            Ok(())
        } else {
            Err(ListError::InvalidOperation {
                reason: "cursor used with a different list",
            })
        }
    }

    fn check_stamp<T>(&self, list: &DynamicArrayList<T>) -> Result<(), ListError> {
        if self.poisoned || self.stamp != list.modification_stamp() {
            Err(ListError::InvalidOperation {
                reason: "list was modified after the cursor was created",
            })
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let list: DynamicArrayList<u8> = (0..2).collect();
        let mut cursor = list.cursor();
        assert_eq!(cursor.state(), CursorState::NotStarted);

        assert_eq!(cursor.move_next(&list), Ok(true));
        assert_eq!(cursor.state(), CursorState::Iterating);
        assert_eq!(cursor.move_next(&list), Ok(true));
        assert_eq!(cursor.move_next(&list), Ok(false));
        assert_eq!(cursor.state(), CursorState::Exhausted);

        // Stays exhausted
        assert_eq!(cursor.move_next(&list), Ok(false));
        assert_eq!(cursor.state(), CursorState::Exhausted);
    }

    #[test]
    fn test_poisoning_is_absorbing() {
        let mut list: DynamicArrayList<u8> = (0..4).collect();
        let mut cursor = list.cursor();
        cursor.move_next(&list).unwrap();

        list.remove_at(3).unwrap();
        assert!(cursor.move_next(&list).is_err());
        assert_eq!(cursor.state(), CursorState::Poisoned);

        cursor.reset();
        assert_eq!(cursor.state(), CursorState::Poisoned);
        assert!(cursor.move_next(&list).is_err());
        assert!(cursor.current(&list).is_err());
    }

    #[test]
    fn test_set_does_not_invalidate() {
        let mut list: DynamicArrayList<u8> = (0..3).collect();
        let mut cursor = list.cursor();
        cursor.move_next(&list).unwrap();

        list.set(0, 42).unwrap();

        assert_eq!(cursor.current(&list), Ok(&42));
        assert_eq!(cursor.move_next(&list), Ok(true));
        assert_eq!(cursor.current(&list), Ok(&1));
    }

    #[test]
    fn test_foreign_list_does_not_poison() {
        let list: DynamicArrayList<u8> = (0..3).collect();
        let other: DynamicArrayList<u8> = (0..3).collect();
        let mut cursor = list.cursor();

        assert!(cursor.move_next(&other).is_err());
        assert_eq!(cursor.state(), CursorState::NotStarted);

        assert_eq!(cursor.move_next(&list), Ok(true));
        assert_eq!(cursor.current(&list), Ok(&0));
    }
}
