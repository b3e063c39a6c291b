// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The single growable storage cell that a root [`super::ViewList`] and every view
//! derived from it read from and write to. All indices here are **absolute**, ie,
//! positions in the buffer's own index space. Translating view-relative indices is
//! the job of [`super::ViewNode`].

use std::{cell::RefCell, rc::Rc};

use super::{ListError, ListResult};

/// Shared, interior-mutable handle to a [`SharedBuffer`]. The root owns the first
/// strong reference, every view holds another one, so the buffer lives as long as the
/// longest-lived view.
pub type SharedBufferRef<T> = Rc<RefCell<SharedBuffer<T>>>;

/// Growable, indexable storage. Slots can hold any `T`, including `None` when `T` is
/// an [`Option`]; a stored `None` round trips exactly and is distinct from a slot that
/// does not exist (which is an error).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedBuffer<T> {
    internal_storage: Vec<T>,
}

impl<T> Default for SharedBuffer<T> {
    fn default() -> Self { Self::new() }
}

impl<T> SharedBuffer<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            internal_storage: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            internal_storage: Vec::with_capacity(capacity),
        }
    }

    #[must_use]
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self {
            internal_storage: vec,
        }
    }

    /// Wrap this buffer so that it can be shared by a tree of views.
    #[must_use]
    pub fn into_shared(self) -> SharedBufferRef<T> { Rc::new(RefCell::new(self)) }

    #[must_use]
    pub fn len(&self) -> usize { self.internal_storage.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.internal_storage.is_empty() }

    /// Borrow the element at `absolute_index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `absolute_index >= len`.
    pub fn get_ref(&self, absolute_index: usize) -> ListResult<&T> {
        self.internal_storage
            .get(absolute_index)
            .ok_or(ListError::IndexOutOfBounds {
                index: absolute_index,
                len: self.len(),
            })
    }

    /// Replace the element at `absolute_index`, returning the old one.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `absolute_index >= len`.
    pub fn set(&mut self, absolute_index: usize, value: T) -> ListResult<T> {
        let len = self.len();
        let slot = self.internal_storage.get_mut(absolute_index).ok_or(
            ListError::IndexOutOfBounds {
                index: absolute_index,
                len,
            },
        )?;
        Ok(std::mem::replace(slot, value))
    }

    /// Insert `value` at `absolute_index`, shifting every later slot right by one.
    /// Inserting at `len` appends.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `absolute_index > len`.
    pub fn insert_at(&mut self, absolute_index: usize, value: T) -> ListResult<()> {
        ListError::check_insert_index(absolute_index, self.len())?;
        self.internal_storage.insert(absolute_index, value);
        Ok(())
    }

    /// Remove the element at `absolute_index`, shifting every later slot left by one.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `absolute_index >= len`.
    pub fn remove_at(&mut self, absolute_index: usize) -> ListResult<T> {
        ListError::check_element_index(absolute_index, self.len())?;
        Ok(self.internal_storage.remove(absolute_index))
    }

    /// Returns a view of the underlying storage. Views use this to scan their window
    /// without going through the checked accessors one index at a time.
    #[must_use]
    pub fn as_slice(&self) -> &[T] { &self.internal_storage }
}

impl<T: Clone> SharedBuffer<T> {
    /// Clone of the element at `absolute_index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `absolute_index >= len`.
    pub fn get(&self, absolute_index: usize) -> ListResult<T> {
        self.get_ref(absolute_index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_shared_buffer() {
        let buffer: SharedBuffer<&str> = SharedBuffer::new();
        assert_eq!(buffer.len(), 0);
        assert!(buffer.is_empty());
        assert_eq!(
            buffer.get(0),
            Err(ListError::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_insert_shifts_later_slots() {
        let mut buffer = SharedBuffer::from_vec(vec!["a", "c"]);
        buffer.insert_at(1, "b").unwrap();
        buffer.insert_at(3, "d").unwrap();
        buffer.insert_at(0, "_").unwrap();
        assert_eq!(buffer.as_slice(), &["_", "a", "b", "c", "d"]);
        assert_eq!(
            buffer.insert_at(6, "x"),
            Err(ListError::IndexOutOfBounds { index: 6, len: 5 })
        );
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn test_remove_shifts_later_slots() {
        let mut buffer = SharedBuffer::from_vec(vec!["a", "b", "c"]);
        assert_eq!(buffer.remove_at(1), Ok("b"));
        assert_eq!(buffer.as_slice(), &["a", "c"]);
        assert_eq!(
            buffer.remove_at(2),
            Err(ListError::IndexOutOfBounds { index: 2, len: 2 })
        );
        assert_eq!(buffer.as_slice(), &["a", "c"]);
    }

    #[test]
    fn test_set_returns_old_value() {
        let mut buffer = SharedBuffer::from_vec(vec![1, 2, 3]);
        assert_eq!(buffer.set(2, 30), Ok(3));
        assert_eq!(buffer.get(2), Ok(30));
        assert!(buffer.set(3, 40).is_err());
    }

    #[test]
    fn test_none_payload_round_trips() {
        let mut buffer: SharedBuffer<Option<&str>> = SharedBuffer::with_capacity(4);
        buffer.insert_at(0, None).unwrap();
        buffer.insert_at(1, Some("a")).unwrap();
        assert_eq!(buffer.get(0), Ok(None));
        assert_eq!(buffer.set(0, Some("z")), Ok(None));
        assert_eq!(buffer.remove_at(1), Ok(Some("a")));
        // A stored `None` is a value, a missing slot is an error.
        buffer.insert_at(1, None).unwrap();
        assert_eq!(buffer.get(1), Ok(None));
        assert!(buffer.get(2).is_err());
    }

    #[test]
    fn test_into_shared_is_visible_through_every_handle() {
        let shared = SharedBuffer::from_vec(vec![1]).into_shared();
        let other_handle = Rc::clone(&shared);
        other_handle.borrow_mut().insert_at(1, 2).unwrap();
        assert_eq!(shared.borrow().as_slice(), &[1, 2]);
    }
}
