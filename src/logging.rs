//! Optional file logging
//!
//! The TUI owns stdout and stderr while running, so tracing output only goes
//! to a file, and only when one is requested with `--log-file`. Without it no
//! subscriber is installed and every `tracing` macro is a no-op.

use crate::errors::LogError;
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Create a file appender for `path`, which is created or appended to.
///
/// Note that wrapping this in `tracing_appender::non_blocking` would drop
/// events still buffered when the app exits.
///
/// # Errors
///
/// Returns an error if:
/// - The path has no file name
/// - The parent directory or the file cannot be created or opened
pub fn try_create_appender(path: &Path) -> Result<RollingFileAppender, LogError> {
    let file_name = path.file_name().ok_or_else(|| LogError::NoFileName {
        path: path.display().to_string(),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy().into_owned())
        .build(parent)
        .map_err(|source| LogError::Init {
            path: path.display().to_string(),
            source,
        })
}

/// Install a global subscriber writing to `path`.
///
/// The level defaults to `debug` and can be overridden with `RUST_LOG`.
pub fn init(path: &Path) -> Result<(), LogError> {
    let appender = try_create_appender(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| LogError::Subscriber(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_path_without_file_name_rejected() {
        let err = try_create_appender(Path::new("/")).unwrap_err();
        assert!(matches!(err, LogError::NoFileName { .. }));
    }

    #[test]
    fn test_parent_is_regular_file_returns_error() {
        let dir = std::env::temp_dir().join(format!("sortty-log-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let not_a_dir = dir.join("plain-file");
        fs::write(&not_a_dir, "not a directory").unwrap();

        let result = try_create_appender(&not_a_dir.join("sortty.log"));
        let _ = fs::remove_dir_all(&dir);

        assert!(matches!(result, Err(LogError::Init { .. })));
    }

    #[test]
    fn test_creates_log_file_in_existing_directory() {
        let dir = std::env::temp_dir().join(format!("sortty-log-ok-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let result = try_create_appender(&dir.join("sortty.log"));
        let exists = dir.join("sortty.log").exists();
        let _ = fs::remove_dir_all(&dir);

        assert!(result.is_ok());
        assert!(exists);
    }
}
