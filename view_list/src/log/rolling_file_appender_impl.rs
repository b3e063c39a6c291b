// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use tracing_appender::rolling::RollingFileAppender;

/// Create an appender that writes to `path_str` and never rotates. The file (but not
/// its folder) is created if it does not exist.
///
/// # Errors
///
/// If `path_str` has no parent folder or no file name.
pub fn try_create(path_str: &str) -> miette::Result<RollingFileAppender> {
    let path = PathBuf::from(path_str);

    let parent = path.parent().ok_or_else(|| {
        miette::miette!(
            "Can't access parent folder of {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't access file name {}. It might not exist, or don't have required permissions.",
            path.display()
        )
    })?;

    Ok(tracing_appender::rolling::never(parent, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_create_makes_file() {
        let path = std::env::temp_dir().join(format!("view_list_{}.log", uuid::Uuid::new_v4()));
        let path_str = path.to_string_lossy().to_string();

        let appender = try_create(&path_str);
        assert!(appender.is_ok());
        assert!(path.exists());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_try_create_rejects_path_without_file_name() {
        assert!(try_create("/").is_err());
    }
}
