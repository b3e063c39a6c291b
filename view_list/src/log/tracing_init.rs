// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_thread_names(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Returns the layers, or `None` for [`WriterConfig::None`]. This does not install
/// anything, see [`try_initialize_logging_global()`] for that.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    if tracing_config.writer_config == WriterConfig::None {
        return Ok(None);
    }

    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Global level filter, in addition to the per-layer ones below.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer. There's more
/// info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
///
/// # Errors
///
/// Never for now, the signature matches [`try_create_file_layer()`].
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    })
}

/// Same as [`try_create_display_layer()`] but for the file half of the config.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, log_file_path)
        | WriterConfig::File(log_file_path) => {
            let file = rolling_file_appender_impl::try_create(log_file_path.as_str())?;
            Some(Box::new(
                fmt_layer
                    .with_ansi(false)
                    .with_writer(file)
                    .with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}

/// Install `tracing_config` as the global default subscriber. Does nothing for
/// [`WriterConfig::None`].
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already installed (it
/// can only be set once per process).
pub fn try_initialize_logging_global(tracing_config: &TracingConfig) -> miette::Result<()> {
    let Some(layers) = try_create_layers(tracing_config)? else {
        return Ok(());
    };
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .into_diagnostic()
}

/// Install `tracing_config` for the current thread only, until the returned guard is
/// dropped. Returns `None` for [`WriterConfig::None`].
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_initialize_logging_thread_local(
    tracing_config: &TracingConfig,
) -> miette::Result<Option<tracing::subscriber::DefaultGuard>> {
    let Some(layers) = try_create_layers(tracing_config)? else {
        return Ok(None);
    };
    let subscriber = tracing_subscriber::registry().with(layers);
    Ok(Some(tracing::subscriber::set_default(subscriber)))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use serial_test::serial;

    use super::*;

    fn temp_log_file_path() -> PathBuf {
        std::env::temp_dir().join(format!("view_list_{}.log", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::Display(DisplayPreference::Stdout),
            )
            .unwrap();
        assert!(layer.is_some());

        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, WriterConfig::File("x".into()))
                .unwrap();
        assert!(layer.is_none());
    }

    #[test]
    fn test_try_create_file_layer() {
        let file_path = temp_log_file_path();
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_file_layer(
                LevelFilter::DEBUG,
                WriterConfig::File(file_path.to_string_lossy().to_string()),
            )
            .unwrap();

        assert!(layer.is_some());
        assert!(file_path.exists());
        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_try_create_both_layers() {
        let file_path = temp_log_file_path();
        let tracing_config = TracingConfig::new_file_and_display(
            Some(file_path.to_string_lossy().to_string()),
            DisplayPreference::Stderr,
        );

        let layers = try_create_layers(&tracing_config).unwrap().unwrap();
        // Level filter, display, and file.
        assert_eq!(layers.len(), 3);
        assert!(file_path.exists());
        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    fn test_writer_config_none_creates_nothing() {
        let tracing_config = TracingConfig {
            writer_config: WriterConfig::None,
            level: tracing::Level::DEBUG,
        };
        assert!(try_create_layers(&tracing_config).unwrap().is_none());
        assert!(
            try_initialize_logging_thread_local(&tracing_config)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_thread_local_writes_to_file() {
        let file_path = temp_log_file_path();
        let tracing_config =
            TracingConfig::new_file(Some(file_path.to_string_lossy().to_string()));

        {
            let _guard = try_initialize_logging_thread_local(&tracing_config)
                .unwrap()
                .unwrap();
            tracing::debug!(message = "view list log line", size = 3);
            tracing::trace!(message = "filtered out");
        }

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("view list log line"));
        assert!(!content.contains("filtered out"));
        std::fs::remove_file(&file_path).ok();
    }

    #[test]
    #[serial]
    fn test_global_can_only_be_installed_once() {
        let file_path = temp_log_file_path();
        let tracing_config =
            TracingConfig::new_file(Some(file_path.to_string_lossy().to_string()));

        assert!(try_initialize_logging_global(&tracing_config).is_ok());
        assert!(try_initialize_logging_global(&tracing_config).is_err());
        std::fs::remove_file(&file_path).ok();
    }
}
