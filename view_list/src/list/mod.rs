// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Enable or disable debug logging for this `list` module. The events are emitted with
/// [`tracing::debug!`], so a subscriber has to be installed to see them (see
/// [`crate::try_initialize_logging_global`]).
pub const DEBUG_VIEW_LIST_MOD: bool = false;

// Attach sources.
pub mod list_cursor;
pub mod list_error;
pub mod shared_buffer;
pub mod view_list;
pub mod view_list_impls;
pub mod view_list_ops;
pub mod view_node;

// Re-export.
pub use list_cursor::*;
pub use list_error::*;
pub use shared_buffer::*;
pub use view_list::*;
pub use view_list_impls::*;
pub use view_node::*;
