// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::{IntoDiagnostic, WrapErr};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry,
                         layer::SubscriberExt,
                         registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig};
use crate::{CommonError, CommonErrorType, CommonResult, throws};

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Initialize the global tracing subscriber using the given [`TracingConfig`]. Does
/// nothing if the config's writer is [`WriterConfig::None`].
///
/// # Errors
///
/// Returns an error if the log file can't be created, or if a global subscriber has
/// already been installed.
pub fn try_initialize_logging_global(tracing_config: &TracingConfig) -> CommonResult<()> {
    throws!({
        if let Some(layers) = try_create_layers(tracing_config)? {
            tracing_subscriber::registry()
                .with(layers)
                .try_init()
                .into_diagnostic()
                .wrap_err("Could not install the global tracing subscriber")?;
        }
    });
}

/// Returns the layers. This does not initialize the tracing system. Don't forget to do
/// this manually, by calling `init` on the returned layers, or use
/// [`try_initialize_logging_global`].
///
/// # Errors
///
/// Returns an error if the log file can't be created.
pub fn try_create_layers(
    tracing_config: &TracingConfig,
) -> CommonResult<Option<Vec<Box<DynLayer<Registry>>>>> {
    let writer_config = tracing_config.get_writer_config();
    if matches!(writer_config, WriterConfig::None) {
        return Ok(None);
    }

    let level_filter = tracing_config.get_level_filter();
    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add
    // more layers which don't have a level filter of their own.
    return_it.push(Box::new(level_filter));

    if let Some(layer) = create_display_layer(level_filter, &writer_config) {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        return_it.push(layer);
    }

    Ok(Some(return_it))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let display_pref = match writer_config {
        WriterConfig::Display(it) | WriterConfig::DisplayAndFile(it, _) => *it,
        WriterConfig::None | WriterConfig::File(_) => return None,
    };

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    let layer: Box<DynLayer<S>> = match display_pref {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    };

    Some(layer)
}

/// This erases the concrete type of the writer, and returns a boxed layer. The log file
/// is never rotated.
///
/// # Errors
///
/// Returns an error if the file path has no file name, or the file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file_path = match writer_config {
        WriterConfig::File(it) | WriterConfig::DisplayAndFile(_, it) => it,
        WriterConfig::None | WriterConfig::Display(_) => return Ok(None),
    };

    let Some(file_name) = file_path.file_name() else {
        return CommonError::new_error_result(
            CommonErrorType::InvalidArguments,
            &format!("Log file path has no file name: {}", file_path.display()),
        );
    };
    let directory = match file_path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(directory)
        .into_diagnostic()
        .wrap_err_with(|| format!("Could not create log file: {}", file_path.display()))?;

    Ok(Some(Box::new(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender)
            .with_filter(level_filter),
    )))
}
