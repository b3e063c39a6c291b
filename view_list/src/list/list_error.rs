// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced by [`super::SharedBuffer`], [`super::ViewList`] and
//! [`super::ListCursor`].
//!
//! Every failure is detected before any state is changed, so an `Err` always means
//! "nothing happened". The variants map onto four kinds of failure:
//!
//! | Variant                 | Raised by                                              |
//! | :---------------------- | :----------------------------------------------------- |
//! | [`IndexOutOfBounds`]    | any index outside `[0, len)` (or `[0, len]` to insert) |
//! | [`InvalidRange`]        | [`ViewList::sub_view()`] with a bad `from..to`         |
//! | [`NoMoreElements`]      | [`ListCursor::next()`] / [`ListCursor::previous()`]    |
//! | [`IllegalCursorState`]  | [`ListCursor::remove()`] / [`ListCursor::set()`]       |
//!
//! [`ViewList`] returns the typed [`ListError`] (see [`ListResult`]). Since it is a
//! [`miette::Diagnostic`], callers that work with [`miette::Result`] can use `?`
//! directly.
//!
//! [`IndexOutOfBounds`]: ListError::IndexOutOfBounds
//! [`InvalidRange`]: ListError::InvalidRange
//! [`NoMoreElements`]: ListError::NoMoreElements
//! [`IllegalCursorState`]: ListError::IllegalCursorState
//! [`ViewList`]: super::ViewList
//! [`ViewList::sub_view()`]: super::ViewList::sub_view
//! [`ListCursor::next()`]: super::ListCursor::next
//! [`ListCursor::previous()`]: super::ListCursor::previous
//! [`ListCursor::remove()`]: super::ListCursor::remove
//! [`ListCursor::set()`]: super::ListCursor::set

use super::CursorDirection;

/// Type alias to make it easy to work with [`ListError`].
pub type ListResult<T> = Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ListError {
    /// A position fell outside the range that is valid for the operation.
    #[error("Index {index} is out of bounds for length {len}")]
    #[diagnostic(
        code(r3bl_view_list::index_out_of_bounds),
        help("Reads and writes need `index < len`, inserts need `index <= len`")
    )]
    IndexOutOfBounds { index: usize, len: usize },

    /// A sub-view was requested with `from > to` or `to > len`.
    #[error("Range {from}..{to} is not a valid sub-view of a list of length {len}")]
    #[diagnostic(
        code(r3bl_view_list::invalid_range),
        help("A sub-view needs `from <= to <= len`")
    )]
    InvalidRange { from: usize, to: usize, len: usize },

    /// The cursor has no element left in the requested direction.
    #[error("No more elements moving {direction}")]
    #[diagnostic(
        code(r3bl_view_list::no_more_elements),
        help("Check `has_next()` or `has_previous()` before moving the cursor")
    )]
    NoMoreElements { direction: CursorDirection },

    /// `remove()` or `set()` was called on a cursor with no last returned element.
    #[error("The cursor has no last returned element")]
    #[diagnostic(
        code(r3bl_view_list::illegal_cursor_state),
        help(
            "Call `next()` or `previous()` first. `remove()` and `add()` consume the \
             last returned element, so move the cursor again after them"
        )
    )]
    IllegalCursorState,
}

impl ListError {
    /// Returns `Ok(())` when `index < len`, which is the check for every read, write
    /// and remove.
    pub fn check_element_index(index: usize, len: usize) -> ListResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds { index, len })
        }
    }

    /// Returns `Ok(())` when `index <= len`, which is the check for inserts (inserting
    /// at `len` appends).
    pub fn check_insert_index(index: usize, len: usize) -> ListResult<()> {
        if index <= len {
            Ok(())
        } else {
            Err(ListError::IndexOutOfBounds { index, len })
        }
    }
}
