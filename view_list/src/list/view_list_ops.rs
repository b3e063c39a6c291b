// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bulk, search, and export operations on [`ViewList`]. Everything here is built from
//! the single element primitives ([`ViewList::add_at()`], [`ViewList::remove_at()`],
//! and the [`super::ListCursor`]), so length propagation to ancestor views comes for
//! free.
//!
//! Sources are taken as [`IntoIterator`] values and drained into a [`Vec`] before the
//! first change is made. This makes `list.add_all(&list.clone())` (or any source that
//! reads from the same buffer) well defined.

use super::{DEBUG_VIEW_LIST_MOD, ListError, ListResult, ViewList};

impl<T: Clone> ViewList<T> {
    /// Insert every element of `source`, in order, starting at `index`. Returns `true`
    /// if at least one element was inserted.
    ///
    /// # Errors
    ///
    /// [`ListError::IndexOutOfBounds`] if `index > size()`. Checked before anything is
    /// inserted.
    pub fn add_all_at(
        &mut self,
        index: usize,
        source: impl IntoIterator<Item = T>,
    ) -> ListResult<bool> {
        ListError::check_insert_index(index, self.size())?;
        let elements: Vec<T> = source.into_iter().collect();
        let count = elements.len();

        for (offset, element) in elements.into_iter().enumerate() {
            self.add_at(index + offset, element)?;
        }

        DEBUG_VIEW_LIST_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "➕ add_all_at",
                index = %index,
                count = %count,
                size = %self.size(),
            );
        });

        Ok(count > 0)
    }

    /// Append every element of `source`. Same as `add_all_at(size(), source)`.
    ///
    /// # Errors
    ///
    /// Only for a stale view, see [`ViewList`].
    pub fn add_all(&mut self, source: impl IntoIterator<Item = T>) -> ListResult<bool> {
        self.add_all_at(self.size(), source)
    }

    /// Remove, front to back, every element for which `predicate` returns `true`.
    /// Returns whether anything was removed.
    ///
    /// # Errors
    ///
    /// Only for a stale view, see [`ViewList`].
    pub fn remove_where(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> ListResult<bool> {
        let mut removed_count = 0_usize;
        let mut cursor = self.list_cursor();
        while cursor.has_next() {
            let element = cursor.next()?;
            if predicate(&element) {
                cursor.remove()?;
                removed_count += 1;
            }
        }

        DEBUG_VIEW_LIST_MOD.then(|| {
            tracing::debug!(
                message = "🧹 remove_where",
                removed_count = %removed_count,
                size = %self.size(),
            );
        });

        Ok(removed_count > 0)
    }

    /// Keep only the elements for which `predicate` returns `true`. Returns whether
    /// anything was removed.
    ///
    /// # Errors
    ///
    /// Only for a stale view, see [`ViewList`].
    pub fn retain_where(
        &mut self,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> ListResult<bool> {
        self.remove_where(|element| !predicate(element))
    }

    /// Remove every element of this view. On a sub-view this removes the covered range
    /// from the shared buffer and shrinks every ancestor by the same amount.
    ///
    /// # Errors
    ///
    /// Only for a stale view, see [`ViewList`].
    pub fn clear(&mut self) -> ListResult<()> {
        let mut cursor = self.list_cursor();
        while cursor.has_next() {
            cursor.next()?;
            cursor.remove()?;
        }
        Ok(())
    }

    /// Copy the elements of this view into `destination`.
    ///
    /// - If `destination` is shorter than `size()` it is resized to exactly `size()`.
    /// - Otherwise the first `size()` slots are overwritten and, if there is a slot at
    ///   `size()`, it is set to `None` to mark the end. Slots after that are untouched.
    pub fn to_array_into(&self, destination: &mut Vec<Option<T>>) {
        self.with_window_slice(|slice| {
            if destination.len() < slice.len() {
                destination.clear();
                destination.extend(slice.iter().cloned().map(Some));
                return;
            }
            for (slot, element) in destination.iter_mut().zip(slice) {
                *slot = Some(element.clone());
            }
            if let Some(terminator) = destination.get_mut(slice.len()) {
                *terminator = None;
            }
        });
    }
}

impl<T: Clone + PartialEq> ViewList<T> {
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.with_window_slice(|slice| slice.contains(value))
    }

    /// View-relative index of the first element equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.with_window_slice(|slice| slice.iter().position(|it| it == value))
    }

    /// View-relative index of the last element equal to `value`.
    #[must_use]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.with_window_slice(|slice| slice.iter().rposition(|it| it == value))
    }

    /// Remove the first element equal to `value`. Returns whether one was found.
    ///
    /// # Errors
    ///
    /// Only for a stale view, see [`ViewList`].
    pub fn remove_first(&mut self, value: &T) -> ListResult<bool> {
        match self.index_of(value) {
            Some(index) => {
                self.remove_at(index)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// `true` if every element of `others` is in this view. `true` for an empty
    /// `others`.
    pub fn contains_all(&self, others: impl IntoIterator<Item = T>) -> bool {
        others.into_iter().all(|it| self.contains(&it))
    }

    /// Remove every element that is equal to some element of `others`. Returns whether
    /// anything was removed.
    ///
    /// # Errors
    ///
    /// Only for a stale view, see [`ViewList`].
    pub fn remove_all(&mut self, others: impl IntoIterator<Item = T>) -> ListResult<bool> {
        let others: Vec<T> = others.into_iter().collect();
        self.remove_where(|it| others.contains(it))
    }

    /// Remove every element that is **not** equal to some element of `others`. Returns
    /// whether anything was removed.
    ///
    /// # Errors
    ///
    /// Only for a stale view, see [`ViewList`].
    pub fn retain_all(&mut self, others: impl IntoIterator<Item = T>) -> ListResult<bool> {
        let others: Vec<T> = others.into_iter().collect();
        self.retain_where(|it| others.contains(it))
    }
}
