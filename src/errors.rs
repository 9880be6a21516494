//! Error types for the visualizer
//!
//! Finishing a sort is not an error: the driver simply returns to idle. The
//! enums here cover bad command-line input, an empty value list, input that
//! arrives while a sort is stepping, and an unusable log file.

use thiserror::Error;

/// Invalid command-line configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bar count must be at least 1")]
    ZeroCount,

    #[error("value range is inverted: --min {min} is greater than --max {max}")]
    InvertedRange { min: i64, max: i64 },

    #[error("--fps must be at least 1")]
    ZeroFps,
}

/// Errors raised by the visualization state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VisualError {
    #[error("cannot visualize an empty list")]
    EmptyList,
}

/// Errors raised by the sort driver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// Input other than reset arrived while a sort was stepping
    #[error("cannot {action} while sorting")]
    SortInProgress { action: &'static str },

    #[error(transparent)]
    Visual(#[from] VisualError),
}

/// Failure to set up the log file
#[derive(Error, Debug)]
pub enum LogError {
    #[error("log file path {path} has no file name")]
    NoFileName { path: String },

    #[error("cannot open log file {path}: {source}")]
    Init {
        path: String,
        source: tracing_appender::rolling::InitError,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(String),
}
