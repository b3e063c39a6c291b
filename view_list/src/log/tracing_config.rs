// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Default log file used by [`TracingConfig::new_file()`] and
/// [`TracingConfig::new_file_and_display()`] when no file name is given.
pub const DEFAULT_LOG_FILE_NAME: &str = "view_list_debug.log";

/// Configure where the debug events of this crate go. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level.
///
/// Use [`crate::try_initialize_logging_global()`] to install it for the whole process,
/// or [`crate::try_initialize_logging_thread_local()`] for the current thread only.
///
/// Fields:
/// - `writer_config`: [`WriterConfig`] to choose where to write the logs.
/// - `level`: [`tracing::Level`] - The log level to use for tracing.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

/// The `String` payloads are paths to the log file, eg: `/tmp/view_list.log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* log_file_path */),
    DisplayAndFile(DisplayPreference, String /* log_file_path */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Log to both the given [`DisplayPreference`] and a file.
    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        Self {
            writer_config: WriterConfig::DisplayAndFile(
                preferred_display,
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        Self {
            writer_config: WriterConfig::Display(preferred_display),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
            ),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_constructors_default_to_debug() {
        let config = TracingConfig::new_display(DisplayPreference::Stderr);
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );
        assert_eq!(config.get_level_filter(), LevelFilter::DEBUG);

        let config = TracingConfig::new_file(None);
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let config = TracingConfig::new_file_and_display(
            Some("/tmp/a.log".to_string()),
            DisplayPreference::Stdout,
        );
        assert_eq!(
            config.get_writer_config(),
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stdout,
                "/tmp/a.log".to_string()
            )
        );
    }

    #[test]
    fn test_with_level() {
        let config = TracingConfig::new_display(DisplayPreference::Stdout)
            .with_level(tracing::Level::WARN);
        assert_eq!(config.get_level_filter(), LevelFilter::WARN);
    }
}
