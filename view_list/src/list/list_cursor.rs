// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`ListCursor`] walks a [`ViewList`] in both directions and can insert, remove, and
//! replace elements as it goes.
//!
//! The cursor never sits *on* an element, it sits in the gap between two of them. For a
//! view with `n` elements there are `n + 1` gaps:
//!
//! ```text
//! elements:    a     b     c
//! gaps:     ^0    ^1    ^2    ^3
//! ```
//!
//! [`ListCursor::next()`] returns the element right of the gap and moves right,
//! [`ListCursor::previous()`] returns the element left of the gap and moves left. The
//! element that was just returned is remembered in [`CursorState::AfterMove`], and that
//! is the element [`ListCursor::remove()`] and [`ListCursor::set()`] act on.
//!
//! The cursor holds `&mut` to the handle it was created from, so that handle can't be
//! used while the cursor is alive. Other handles can still change the same buffer:
//!
//! - another handle to the same view ([`ViewList`] clones share their view),
//! - an ancestor, sibling, or cousin view.
//!
//! Changes made through those paths leave the cursor stale. Its position and its last
//! returned slot are absolute buffer indices and are not shifted, so a following
//! [`ListCursor::remove()`] or [`ListCursor::set()`] acts on whatever element now sits in
//! that slot. As with stale views, an index that falls outside the buffer is reported as
//! [`ListError::IndexOutOfBounds`].

use std::fmt::{Display, Formatter, Result as FmtResult};

use super::{DEBUG_VIEW_LIST_MOD, ListError, ListResult, ViewList};

/// Which way the cursor moved to return its last element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorDirection {
    Forward,
    Backward,
}

impl Display for CursorDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CursorDirection::Forward => write!(f, "forward"),
            CursorDirection::Backward => write!(f, "backward"),
        }
    }
}

/// Whether the cursor has an element that [`ListCursor::remove()`] and
/// [`ListCursor::set()`] can act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorState {
    /// Nothing has been returned since the cursor was created or since the last
    /// structural change made through it.
    #[default]
    Ready,
    /// `index` is the absolute buffer slot of the element last returned.
    AfterMove {
        index: usize,
        direction: CursorDirection,
    },
}

#[derive(Debug)]
pub struct ListCursor<'a, T> {
    owner: &'a mut ViewList<T>,
    /// Absolute gap position in the shared buffer.
    cursor: usize,
    state: CursorState,
}

impl<'a, T> ListCursor<'a, T> {
    /// `start` is view-relative and must already be validated against `owner.size()`.
    pub(crate) fn new(owner: &'a mut ViewList<T>, start: usize) -> Self {
        let cursor = owner.window().start + start;
        Self {
            owner,
            cursor,
            state: CursorState::Ready,
        }
    }

    fn offset(&self) -> usize { self.owner.window().start }

    #[must_use]
    pub fn state(&self) -> CursorState { self.state }

    #[must_use]
    pub fn has_next(&self) -> bool { self.cursor < self.owner.window().end }

    #[must_use]
    pub fn has_previous(&self) -> bool { self.cursor > self.offset() }

    /// View-relative index of the element [`Self::next()`] would return (`size()` at
    /// the end).
    #[must_use]
    pub fn next_index(&self) -> usize { self.cursor - self.offset() }

    /// View-relative index of the element [`Self::previous()`] would return, or `None`
    /// at the front.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> { self.next_index().checked_sub(1) }

    /// Insert `value` in the gap the cursor is in. The cursor ends up after the new
    /// element, so a following [`Self::next()`] is unaffected and a following
    /// [`Self::previous()`] returns `value`.
    ///
    /// # Errors
    ///
    /// Only for a stale view, see [`ViewList`].
    pub fn add(&mut self, value: T) -> ListResult<()> {
        let relative_index = self.next_index();
        self.owner.add_at(relative_index, value)?;
        self.cursor += 1;
        self.state = CursorState::Ready;
        Ok(())
    }

    /// Remove the element last returned by [`Self::next()`] or [`Self::previous()`].
    ///
    /// # Errors
    ///
    /// [`ListError::IllegalCursorState`] if nothing was returned since the last move or
    /// the last structural change.
    pub fn remove(&mut self) -> ListResult<T> {
        let CursorState::AfterMove { index, direction } = self.state else {
            return Err(ListError::IllegalCursorState);
        };

        let removed = self.owner.remove_at(index - self.offset())?;
        self.cursor = index;
        self.state = CursorState::Ready;

        DEBUG_VIEW_LIST_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "✂️ cursor removed element",
                absolute_index = %index,
                direction = %direction,
            );
        });

        Ok(removed)
    }

    /// Replace the element last returned by [`Self::next()`] or [`Self::previous()`],
    /// returning the old one. The state is kept, so `set()` can be called repeatedly.
    ///
    /// # Errors
    ///
    /// [`ListError::IllegalCursorState`] under the same condition as
    /// [`Self::remove()`].
    pub fn set(&mut self, value: T) -> ListResult<T> {
        let CursorState::AfterMove { index, .. } = self.state else {
            return Err(ListError::IllegalCursorState);
        };
        let relative_index = index - self.offset();
        self.owner.set(relative_index, value)
    }
}

impl<T: Clone> ListCursor<'_, T> {
    /// Return the element after the cursor and move the cursor past it.
    ///
    /// # Errors
    ///
    /// [`ListError::NoMoreElements`] if [`Self::has_next()`] is `false`. The cursor is
    /// left unchanged.
    pub fn next(&mut self) -> ListResult<T> {
        if !self.has_next() {
            return Err(ListError::NoMoreElements {
                direction: CursorDirection::Forward,
            });
        }
        let index = self.cursor;
        let value = self.owner.get(index - self.offset())?;
        self.state = CursorState::AfterMove {
            index,
            direction: CursorDirection::Forward,
        };
        self.cursor += 1;
        Ok(value)
    }

    /// Move the cursor back by one and return the element it moved over.
    ///
    /// # Errors
    ///
    /// [`ListError::NoMoreElements`] if [`Self::has_previous()`] is `false`. The cursor
    /// is left unchanged.
    pub fn previous(&mut self) -> ListResult<T> {
        if !self.has_previous() {
            return Err(ListError::NoMoreElements {
                direction: CursorDirection::Backward,
            });
        }
        let index = self.cursor - 1;
        let value = self.owner.get(index - self.offset())?;
        self.state = CursorState::AfterMove {
            index,
            direction: CursorDirection::Backward,
        };
        self.cursor = index;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_forward_then_backward() {
        let mut list = ViewList::from_vec(vec![1, 2, 3]);
        let mut cursor = list.list_cursor();

        assert!(!cursor.has_previous());
        assert_eq!(cursor.previous_index(), None);
        assert_eq!(cursor.next(), Ok(1));
        assert_eq!(cursor.next(), Ok(2));
        assert_eq!(cursor.next(), Ok(3));
        assert!(!cursor.has_next());
        assert_eq!(cursor.next_index(), 3);
        assert_eq!(cursor.previous_index(), Some(2));

        assert_eq!(cursor.previous(), Ok(3));
        assert_eq!(cursor.previous(), Ok(2));
        assert_eq!(cursor.previous(), Ok(1));
        assert_eq!(
            cursor.previous(),
            Err(ListError::NoMoreElements {
                direction: CursorDirection::Backward
            })
        );
    }

    #[test]
    fn test_alternating_returns_same_element() {
        let mut list = ViewList::from_vec(vec!["a", "b"]);
        let mut cursor = list.list_cursor();
        assert_eq!(cursor.next(), Ok("a"));
        assert_eq!(cursor.previous(), Ok("a"));
        assert_eq!(cursor.next(), Ok("a"));
        assert_eq!(
            cursor.state(),
            CursorState::AfterMove {
                index: 0,
                direction: CursorDirection::Forward
            }
        );
    }

    #[test]
    fn test_failed_move_keeps_state() {
        let mut list = ViewList::from_vec(vec!["a"]);
        let mut cursor = list.list_cursor();
        assert_eq!(cursor.next(), Ok("a"));
        assert!(cursor.next().is_err());
        assert_eq!(cursor.next_index(), 1);
        // The failed move did not clear the last returned element.
        assert_eq!(cursor.remove(), Ok("a"));
        assert_eq!(list.size(), 0);
    }

    #[test]
    fn test_remove_after_next_and_previous() {
        let mut list = ViewList::from_vec(vec!["a", "b", "c", "d"]);
        {
            let mut cursor = list.list_cursor();
            cursor.next().unwrap();
            cursor.next().unwrap();
            assert_eq!(cursor.remove(), Ok("b"));
            assert_eq!(cursor.next_index(), 1);
            assert_eq!(cursor.next(), Ok("c"));
            assert_eq!(cursor.previous(), Ok("c"));
            assert_eq!(cursor.remove(), Ok("c"));
            assert_eq!(cursor.next_index(), 1);
            assert_eq!(cursor.next(), Ok("d"));
        }
        assert_eq!(list.to_vec(), vec!["a", "d"]);
    }

    #[test]
    fn test_remove_and_set_need_a_move() {
        let mut list = ViewList::from_vec(vec!["a"]);
        let mut cursor = list.list_cursor();
        assert_eq!(cursor.remove(), Err(ListError::IllegalCursorState));
        assert_eq!(cursor.set("z"), Err(ListError::IllegalCursorState));

        cursor.next().unwrap();
        cursor.remove().unwrap();
        assert_eq!(cursor.remove(), Err(ListError::IllegalCursorState));
    }

    #[test]
    fn test_set_keeps_state() {
        let mut list = ViewList::from_vec(vec!["a", "b"]);
        {
            let mut cursor = list.list_cursor();
            cursor.next().unwrap();
            assert_eq!(cursor.set("x"), Ok("a"));
            assert_eq!(cursor.set("y"), Ok("x"));
            assert_eq!(cursor.remove(), Ok("y"));
        }
        assert_eq!(list.to_vec(), vec!["b"]);
    }

    #[test]
    fn test_add_inserts_before_cursor_and_resets() {
        let mut list = ViewList::from_vec(vec!["a", "c"]);
        {
            let mut cursor = list.list_cursor();
            cursor.add("_").unwrap();
            cursor.next().unwrap();
            cursor.add("b").unwrap();
            assert_eq!(cursor.remove(), Err(ListError::IllegalCursorState));
            assert_eq!(cursor.next_index(), 3);
            assert_eq!(cursor.previous(), Ok("b"));
            assert_eq!(cursor.next(), Ok("b"));
            assert_eq!(cursor.next(), Ok("c"));
        }
        assert_eq!(list.to_vec(), vec!["_", "a", "b", "c"]);
    }

    #[test]
    fn test_cursor_at_index() {
        let mut list = ViewList::from_vec(vec![10, 20, 30]);
        let mut cursor = list.list_cursor_at(2).unwrap();
        assert_eq!(cursor.next_index(), 2);
        assert_eq!(cursor.previous_index(), Some(1));
        assert_eq!(cursor.next(), Ok(30));

        let mut cursor = list.list_cursor_at(3).unwrap();
        assert!(!cursor.has_next());
        assert_eq!(cursor.previous(), Ok(30));
    }

    #[test]
    fn test_cursor_over_sub_view() {
        let mut root = ViewList::from_vec(vec!["a", "b", "c", "d"]);
        let mut view = root.sub_view(1, 3).unwrap();
        {
            let mut cursor = view.list_cursor();
            assert_eq!(cursor.next_index(), 0);
            assert_eq!(cursor.next(), Ok("b"));
            cursor.add("x").unwrap();
            assert_eq!(cursor.next(), Ok("c"));
            assert!(!cursor.has_next());
            assert_eq!(cursor.remove(), Ok("c"));
        }
        assert_eq!(view.to_vec(), vec!["b", "x"]);
        assert_eq!(root.to_vec(), vec!["a", "b", "x", "d"]);
        assert_eq!(root.size(), 4);
        root.add("e").unwrap();
        assert_eq!(root.size(), 5);
    }

    #[test]
    fn test_cursor_goes_stale_when_another_handle_inserts() {
        let mut list = ViewList::from_vec(vec!["a", "b", "c"]);
        let mut alias = list.clone();
        {
            let mut cursor = list.list_cursor();
            assert_eq!(cursor.next(), Ok("a"));

            alias.add_at(0, "z").unwrap();

            // The last returned slot is not shifted, it now holds "z".
            assert_eq!(cursor.remove(), Ok("z"));
            assert_eq!(cursor.next_index(), 0);
        }
        assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
        assert_eq!(alias.size(), 3);
    }

    #[test]
    fn test_cursor_goes_stale_when_another_handle_removes() {
        let mut list = ViewList::from_vec(vec!["a", "b"]);
        let mut alias = list.clone();
        let mut cursor = list.list_cursor();
        assert_eq!(cursor.next(), Ok("a"));
        assert_eq!(cursor.next(), Ok("b"));

        alias.clear().unwrap();

        assert!(!cursor.has_next());
        assert_eq!(
            cursor.set("x"),
            Err(ListError::IndexOutOfBounds { index: 1, len: 0 })
        );
        assert_eq!(
            cursor.remove(),
            Err(ListError::IndexOutOfBounds { index: 1, len: 0 })
        );
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(CursorDirection::Forward.to_string(), "forward");
        assert_eq!(CursorDirection::Backward.to_string(), "backward");
    }
}
