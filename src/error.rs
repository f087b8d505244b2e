//! Error types for profile generation, export, and display.

use std::path::PathBuf;

use thiserror::Error;

use crate::constants;

/// Everything that can end a gearview run.
#[derive(Debug, Error)]
pub enum GearError {
    /// The profile source could not build a gear from the given parameters.
    #[error("cannot generate gear profile: {0}")]
    ProfileGeneration(String),

    /// Writing (or opening) an output file failed.
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Display mode was requested but there is nothing to draw on.
    #[error("display unavailable ({reason}); {hint}", hint = constants::HINT_USE_SAVE)]
    DisplayUnavailable { reason: String },

    /// The config file is missing or malformed.
    #[error("invalid config {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl GearError {
    pub(crate) fn profile(reason: impl Into<String>) -> Self {
        Self::ProfileGeneration(reason.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn display(reason: impl Into<String>) -> Self {
        Self::DisplayUnavailable {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_error_mentions_save() {
        let err = GearError::display(constants::ERR_DISPLAY_NOT_TTY);
        let msg = err.to_string();
        assert!(msg.contains("display unavailable"));
        assert!(msg.contains("--save"));
    }

    #[test]
    fn test_io_error_includes_path() {
        let err = GearError::io(
            "/nope/out.svg",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(err.to_string().contains("/nope/out.svg"));
    }
}
