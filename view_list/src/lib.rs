// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_view_list
//!
//! A growable list whose elements live in one [`SharedBuffer`], plus live range views
//! over it, plus a bidirectional cursor.
//!
//! ## Views
//!
//! [`ViewList::sub_view()`] returns a new [`ViewList`] that covers a range of its
//! parent and shares the parent's buffer. Views nest to any depth. Reads and writes go
//! straight to the shared buffer, and adding or removing through any view grows or
//! shrinks that view and every one of its ancestors, all the way up to the root.
//!
//! ```
//! use r3bl_view_list::ViewList;
//!
//! let root = ViewList::from_vec(vec!["a", "b", "c"]);
//! let mut tail = root.sub_view(1, 3)?;
//! tail.clear()?;
//!
//! assert_eq!(root.size(), 1);
//! assert_eq!(root.get(0)?, "a");
//! # Ok::<(), r3bl_view_list::ListError>(())
//! ```
//!
//! Only the view that made a change, and its ancestors, see the new bounds. Siblings
//! and cousins keep their old window; see [`ViewList`] for what that means.
//!
//! ## Cursor
//!
//! [`ListCursor`] walks a view forwards and backwards and can [`ListCursor::add()`],
//! [`ListCursor::remove()`], and [`ListCursor::set()`] as it goes:
//!
//! ```
//! use r3bl_view_list::ViewList;
//!
//! let mut list = ViewList::from_vec(vec![1, 2, 3, 4]);
//! let mut cursor = list.list_cursor();
//! while cursor.has_next() {
//!     if cursor.next()? % 2 == 0 {
//!         cursor.remove()?;
//!     }
//! }
//! assert_eq!(list.to_vec(), vec![1, 3]);
//! # Ok::<(), r3bl_view_list::ListError>(())
//! ```
//!
//! ## Errors and logging
//!
//! Every fallible operation returns [`ListResult`]. [`ListError`] is a
//! [`miette::Diagnostic`], so it also works with `miette::Result` and `?`. Debug events
//! are emitted with [`tracing`] when [`DEBUG_VIEW_LIST_MOD`] is on; install a
//! subscriber with [`try_initialize_logging_global()`] to see them.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap().
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules.
pub mod list;
pub mod log;

// Re-export.
pub use list::*;
pub use log::*;
