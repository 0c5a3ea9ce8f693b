//! JSON state file persistence
//!
//! The whole tracker is read on startup and rewritten after each mutation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::consts::{DATA_FILE_ENV, DATA_FILE_NAME};
use crate::error::AppError;

use super::state::PeriodTracker;

/// Outcome of reading the state file
#[derive(Debug)]
pub(crate) struct Loaded {
    pub(crate) tracker: PeriodTracker,
    /// No state existed yet
    pub(crate) first_run: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Store {
    path: PathBuf,
}

impl Store {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve the state file: explicit path, then `PERIODS_DATA_FILE`,
    /// then the configured path, then the platform data directory.
    pub(crate) fn locate(
        explicit: Option<&Path>,
        configured: Option<&Path>,
    ) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            return Ok(Self::new(path.to_path_buf()));
        }
        if let Some(path) = std::env::var_os(DATA_FILE_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(PathBuf::from(path)));
        }
        if let Some(path) = configured {
            return Ok(Self::new(path.to_path_buf()));
        }
        let dir = dirs::data_dir().ok_or(AppError::NoDataDir)?;
        Ok(Self::new(dir.join("periods").join(DATA_FILE_NAME)))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn load(&self) -> Result<Loaded, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(source) => {
                return Err(AppError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if content.trim().is_empty() {
            tracing::debug!(path = %self.path.display(), "no saved state, starting fresh");
            return Ok(Loaded {
                tracker: PeriodTracker::default(),
                first_run: true,
            });
        }

        let tracker: PeriodTracker =
            serde_json::from_str(&content).map_err(|source| AppError::CorruptState {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %self.path.display(),
            dates = tracker.dates().len(),
            "loaded state"
        );
        Ok(Loaded {
            tracker,
            first_run: false,
        })
    }

    /// Overwrite the state file with `tracker`
    pub(crate) fn save(&self, tracker: &PeriodTracker) -> Result<(), AppError> {
        let io_err = |source: std::io::Error| AppError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string(tracker)?;
        fs::write(&self.path, json).map_err(io_err)?;
        tracing::debug!(
            path = %self.path.display(),
            dates = tracker.dates().len(),
            "saved state"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Span;
    use chrono::NaiveDate;

    fn store_in(dir: &tempfile::TempDir) -> Store {
        Store::new(dir.path().join("nested").join(DATA_FILE_NAME))
    }

    #[test]
    fn missing_file_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = store_in(&dir).load().unwrap();
        assert!(loaded.first_run);
        assert_eq!(loaded.tracker, PeriodTracker::default());
    }

    #[test]
    fn blank_file_is_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE_NAME);
        fs::write(&path, "  \n").unwrap();
        assert!(Store::new(path).load().unwrap().first_run);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut tracker = PeriodTracker::new(Span::new(28));
        tracker.confirm(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        store.save(&tracker).unwrap();

        let loaded = store.load().unwrap();
        assert!(!loaded.first_run);
        assert_eq!(loaded.tracker, tracker);
    }

    #[test]
    fn save_overwrites_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut tracker = PeriodTracker::new(Span::new(28));
        tracker.add_confirmed_date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
        store.save(&tracker).unwrap();
        tracker.reset();
        store.save(&tracker).unwrap();

        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, r#"{"dates":[],"span":28}"#);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE_NAME);
        fs::write(&path, "{not json").unwrap();
        let err = Store::new(path.clone()).load().unwrap_err();
        assert!(matches!(err, AppError::CorruptState { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn reads_original_save_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATA_FILE_NAME);
        fs::write(&path, r#"{"dates":["2024-01-10","2024-02-06"],"length":27}"#).unwrap();
        let tracker = Store::new(path).load().unwrap().tracker;
        assert_eq!(tracker.span(), Span::new(27));
        assert_eq!(tracker.dates().len(), 2);
    }

    #[test]
    fn locate_prefers_explicit_path() {
        let explicit = PathBuf::from("/tmp/explicit.json");
        let configured = PathBuf::from("/tmp/configured.json");
        let store = Store::locate(Some(explicit.as_path()), Some(configured.as_path())).unwrap();
        assert_eq!(store.path(), explicit.as_path());
    }
}
