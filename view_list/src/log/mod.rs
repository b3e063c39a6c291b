// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Opt-in `tracing` setup for the debug events this crate emits. Nothing is installed
//! unless you call [`try_initialize_logging_global()`] or
//! [`try_initialize_logging_thread_local()`], and the events themselves are gated by
//! [`crate::DEBUG_VIEW_LIST_MOD`].

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
