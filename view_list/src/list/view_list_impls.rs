// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Standard trait impls for [`ViewList`]: iteration, positional equality, hashing,
//! [`Display`] and [`Debug`] formatting, and [`FromIterator`].

use std::{fmt::{Debug, Display, Formatter, Result as FmtResult},
          hash::{Hash, Hasher}};

use rustc_hash::FxHasher;

use super::ViewList;

/// Seed of [`ViewList::hash_code()`]. An empty list hashes to this value.
pub const HASH_CODE_SEED: u64 = 1;

/// Multiplier applied to the running value for each element in
/// [`ViewList::hash_code()`].
pub const HASH_CODE_MULTIPLIER: u64 = 31;

/// Front to back iterator over clones of the elements of a [`ViewList`]. Also
/// iterates from the back.
#[derive(Debug)]
pub struct ViewListIter<'a, T> {
    view_list: &'a ViewList<T>,
    front_index: usize,
    back_index: usize,
}

impl<T: Clone> ViewList<T> {
    #[must_use]
    pub fn iter(&self) -> ViewListIter<'_, T> {
        ViewListIter {
            view_list: self,
            front_index: 0,
            back_index: self.size(),
        }
    }
}

impl<T: Clone> Iterator for ViewListIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front_index == self.back_index {
            return None;
        }
        let it = self.view_list.get(self.front_index).ok()?;
        self.front_index += 1;
        Some(it)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back_index - self.front_index;
        (0, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for ViewListIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front_index == self.back_index {
            return None;
        }
        let it = self.view_list.get(self.back_index - 1).ok()?;
        self.back_index -= 1;
        Some(it)
    }
}

impl<'a, T: Clone> IntoIterator for &'a ViewList<T> {
    type Item = T;
    type IntoIter = ViewListIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T> FromIterator<T> for ViewList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

/// Two lists are equal if they have the same size and equal elements in the same
/// order. Where the elements are stored does not matter.
impl<T: PartialEq> PartialEq for ViewList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.with_window_slice(|lhs| other.with_window_slice(|rhs| lhs == rhs))
    }
}

impl<T: Eq> Eq for ViewList<T> {}

impl<T: PartialEq> PartialEq<[T]> for ViewList<T> {
    fn eq(&self, other: &[T]) -> bool { self.with_window_slice(|lhs| lhs == other) }
}

impl<T: PartialEq> PartialEq<Vec<T>> for ViewList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.with_window_slice(|lhs| lhs == other.as_slice())
    }
}

/// Feeds the size and then every element, so equal lists hash equally with any
/// [`Hasher`].
impl<T: Hash> Hash for ViewList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.with_window_slice(|slice| {
            state.write_usize(slice.len());
            for element in slice {
                element.hash(state);
            }
        });
    }
}

impl<T: Hash> ViewList<T> {
    /// Order sensitive hash: starting from [`HASH_CODE_SEED`], each element folds in as
    /// `h = HASH_CODE_MULTIPLIER * h + fx_hash(element)` (wrapping). The result is the
    /// same across runs and processes. A `None` element of a `ViewList<Option<_>>`
    /// always contributes the same value.
    #[must_use]
    pub fn hash_code(&self) -> u64 {
        self.with_window_slice(|slice| {
            slice.iter().fold(HASH_CODE_SEED, |acc, element| {
                let mut hasher = FxHasher::default();
                element.hash(&mut hasher);
                acc.wrapping_mul(HASH_CODE_MULTIPLIER)
                    .wrapping_add(hasher.finish())
            })
        })
    }
}

/// Renders `[a, b, c]`, or `[]` when empty.
impl<T: Display> Display for ViewList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        self.with_window_slice(|slice| {
            write!(f, "[")?;
            for (index, element) in slice.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{element}")?;
            }
            write!(f, "]")
        })
    }
}

impl<T: Debug> Debug for ViewList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let window = self.window();
        let depth = self.depth();
        self.with_window_slice(|slice| {
            f.debug_struct("ViewList")
                .field("window", &window)
                .field("depth", &depth)
                .field("elements", &slice)
                .finish()
        })
    }
}
