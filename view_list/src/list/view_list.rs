// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`ViewList`] is the public handle for a list. A handle is a pair of:
//!
//! 1. A [`SharedBufferRef`], the storage shared by the root and all of its views.
//! 2. A [`ViewNodeRef`], the window this handle sees and its link to the parent.
//!
//! A root list is created with [`ViewList::new()`] (or [`ViewList::from_vec()`], etc).
//! A view over part of it is created with [`ViewList::sub_view()`], and views can be
//! nested to any depth. Every operation takes **view-relative** indices (`0..size()`),
//! translates them with the node's absolute offset, and then touches the buffer.
//! Operations that change the number of elements propagate the change up the parent
//! chain with [`ViewNode::adjust_length()`], so every ancestor's [`ViewList::size()`]
//! is always correct.
//!
//! # Example
//!
//! ```
//! use r3bl_view_list::ViewList;
//!
//! let root = ViewList::from_vec(vec!["a", "b", "c", "d"]);
//! let mut middle = root.sub_view(1, 3)?; // [b, c]
//! middle.add_at(1, "x")?; // [b, x, c]
//!
//! assert_eq!(middle.size(), 3);
//! assert_eq!(root.size(), 5);
//! assert_eq!(root.to_vec(), vec!["a", "b", "x", "c", "d"]);
//! # Ok::<(), r3bl_view_list::ListError>(())
//! ```
//!
//! # Stale views
//!
//! A view's window is only kept up to date for changes made through the view itself
//! or through one of its descendants. Changes made through a sibling, a cousin, or an
//! ancestor directly leave the view's cached `offset` and `length` as they were. What
//! such a view observes afterwards is unspecified, but it is never memory unsafe: a
//! stale index that lands outside the buffer is reported as
//! [`ListError::IndexOutOfBounds`].
//!
//! Clones of a handle share one view, so they always agree on its window. A live
//! [`ListCursor`] on one of them is not told about changes made through another, see
//! [`super::list_cursor`].

use std::{ops::Range, rc::Rc};

use super::{ListCursor, ListError, ListResult, SharedBuffer, SharedBufferRef, ViewNode,
            ViewNodeRef};

/// Handle to a root list or to a view over part of one. See the module docs.
pub struct ViewList<T> {
    buffer: SharedBufferRef<T>,
    node: ViewNodeRef,
}

/// Cloning a handle does **not** copy any elements. The clone refers to the same
/// window of the same buffer, just like cloning an [`Rc`]. Use [`ViewList::copy_of()`]
/// to get an independent list.
impl<T> Clone for ViewList<T> {
    fn clone(&self) -> Self {
        Self {
            buffer: Rc::clone(&self.buffer),
            node: Rc::clone(&self.node),
        }
    }
}

impl<T> Default for ViewList<T> {
    fn default() -> Self { Self::new() }
}

impl<T> ViewList<T> {
    /// An empty root list with a fresh buffer.
    #[must_use]
    pub fn new() -> Self { Self::from_buffer(SharedBuffer::new()) }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_buffer(SharedBuffer::with_capacity(capacity))
    }

    /// A root list that takes ownership of `vec` as its buffer.
    #[must_use]
    pub fn from_vec(vec: Vec<T>) -> Self { Self::from_buffer(SharedBuffer::from_vec(vec)) }

    fn from_buffer(buffer: SharedBuffer<T>) -> Self {
        let node = ViewNode::new_root(buffer.len());
        Self {
            buffer: buffer.into_shared(),
            node,
        }
    }

    /// Number of elements visible through this view. O(1), it is the cached length of
    /// the view's node.
    #[must_use]
    pub fn size(&self) -> usize { self.node.borrow().length() }

    /// Same as [`Self::size()`].
    #[must_use]
    pub fn len(&self) -> usize { self.size() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.size() == 0 }

    /// The absolute buffer range this view covers.
    #[must_use]
    pub fn window(&self) -> Range<usize> { self.node.borrow().window() }

    /// `true` for a list created with a constructor, `false` for a sub-view.
    #[must_use]
    pub fn is_root(&self) -> bool { self.node.borrow().is_root() }

    /// How many views this one is nested in (0 for a root).
    #[must_use]
    pub fn depth(&self) -> usize { ViewNode::depth(&self.node) }

    /// `true` if both handles read from and write to the same buffer, ie, they belong
    /// to the same tree of views.
    #[must_use]
    pub fn shares_buffer_with(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.buffer, &other.buffer)
    }

    /// A live view over the view-relative range `from..to` of this list. The new view
    /// shares this list's buffer; adding to or removing from it also grows or shrinks
    /// this list (and all of this list's ancestors).
    ///
    /// # Errors
    ///
    /// [`ListError::InvalidRange`] unless `from <= to <= self.size()`.
    pub fn sub_view(&self, from: usize, to: usize) -> ListResult<Self> {
        Ok(Self {
            buffer: Rc::clone(&self.buffer),
            node: ViewNode::new_child(&self.node, from, to)?,
        })
    }

    /// Validate `index < size()` and translate it into an absolute buffer index.
    fn checked_element_index(&self, index: usize) -> ListResult<usize> {
        let node = self.node.borrow();
        ListError::check_element_index(index, node.length())?;
        Ok(node.absolute_index(index))
    }

    /// Validate `index <= size()` and translate it into an absolute buffer index.
    fn checked_insert_index(&self, index: usize) -> ListResult<usize> {
        let node = self.node.borrow();
        ListError::check_insert_index(index, node.length())?;
        Ok(node.absolute_index(index))
    }

    /// Replace the element at `index`, returning the element that was there.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= size()`.
    pub fn set(&mut self, index: usize, value: T) -> ListResult<T> {
        let absolute_index = self.checked_element_index(index)?;
        self.buffer.borrow_mut().set(absolute_index, value)
    }

    /// Insert `value` at `index`, shifting the element there (and everything after it)
    /// one position to the right. `index == size()` appends.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index > size()`.
    pub fn add_at(&mut self, index: usize, value: T) -> ListResult<()> {
        let absolute_index = self.checked_insert_index(index)?;
        self.buffer.borrow_mut().insert_at(absolute_index, value)?;
        ViewNode::adjust_length(&self.node, 1);
        Ok(())
    }

    /// Append `value` to the end of this view. Returns `true`, the list always changes.
    ///
    /// # Errors
    ///
    /// Only for a stale view whose window now ends past the buffer, see the module docs.
    pub fn add(&mut self, value: T) -> ListResult<bool> {
        self.add_at(self.size(), value)?;
        Ok(true)
    }

    /// Run `f` over the part of the buffer this view covers. A stale window is clamped
    /// to the buffer, so `f` never sees a slot that does not exist.
    pub(crate) fn with_window_slice<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let window = self.window();
        let buffer = self.buffer.borrow();
        let slice = buffer.as_slice();
        let end = window.end.min(slice.len());
        let start = window.start.min(end);
        f(&slice[start..end])
    }

    /// Remove and return the element at `index`, shifting everything after it one
    /// position to the left.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= size()`.
    pub fn remove_at(&mut self, index: usize) -> ListResult<T> {
        let absolute_index = self.checked_element_index(index)?;
        let removed = self.buffer.borrow_mut().remove_at(absolute_index)?;
        ViewNode::adjust_length(&self.node, -1);
        Ok(removed)
    }
}

impl<T: Clone> ViewList<T> {
    /// A new root list holding a copy of the elements visible through `other`.
    #[must_use]
    pub fn copy_of(other: &Self) -> Self { Self::from_vec(other.to_vec()) }

    /// Clone of the element at `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index >= size()`.
    pub fn get(&self, index: usize) -> ListResult<T> {
        let absolute_index = self.checked_element_index(index)?;
        self.buffer.borrow().get(absolute_index)
    }

    /// Copy the elements of this view, front to back, into a new [`Vec`].
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> { self.with_window_slice(<[T]>::to_vec) }

    /// A cursor positioned before the first element of this view.
    pub fn list_cursor(&mut self) -> ListCursor<'_, T> { ListCursor::new(self, 0) }

    /// A cursor positioned before the element at `index` (so the first call to
    /// [`ListCursor::next()`] returns it). `index == size()` positions the cursor at
    /// the end.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index > size()`.
    pub fn list_cursor_at(&mut self, index: usize) -> ListResult<ListCursor<'_, T>> {
        ListError::check_insert_index(index, self.size())?;
        Ok(ListCursor::new(self, index))
    }
}
