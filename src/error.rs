use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid month \"{input}\" (expected YYYY-MM)")]
    InvalidMonth { input: String },

    #[error("Invalid span \"{input}\" (expected a positive number of days)")]
    InvalidSpan { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("No span configured. Set one with `periods span <DAYS>`.")]
    SpanNotConfigured,

    #[error("No dates recorded yet. Add the first one with `periods add <DATE>`.")]
    NoDates,

    #[error("Could not determine a data directory; pass --data-file")]
    NoDataDir,

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corrupt state file {} ({source}). Run `periods reset` to start over.", path.display())]
    CorruptState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_span() {
        let e = AppError::InvalidSpan {
            input: "0".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid span "0" (expected a positive number of days)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_io_includes_path() {
        let e = AppError::Io {
            path: PathBuf::from("/tmp/savedata.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = e.to_string();
        assert!(msg.contains("/tmp/savedata.json"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn app_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let app: AppError = json_err.into();
        assert!(app.to_string().starts_with("Failed to encode JSON"));
    }
}
