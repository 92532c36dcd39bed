//! Platform abstraction for native dialog services.
//!
//! The app talks to the native file-open dialog through the
//! [`PlatformServices`] trait so the action handler can be exercised in tests
//! with a stub implementation.

use std::path::PathBuf;

mod native;

pub use native::NativePlatform as Platform;

/// Result type for platform dialog operations.
pub type FileResult<T> = Result<T, FileError>;

/// Error from the native file-dialog service.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FileError {
    /// The user dismissed the dialog without choosing a file.
    #[display("file selection cancelled")]
    Cancelled,
    /// The dialog backend could not be initialized.
    #[display("file dialog unavailable: {_0}")]
    Unavailable(#[error(not(source))] String),
}

/// Native dialog operations the app depends on.
pub trait PlatformServices {
    /// Shows the native file-open dialog and returns the chosen path.
    fn pick_file(&self) -> FileResult<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_display_the_underlying_message() {
        assert_eq!(FileError::Cancelled.to_string(), "file selection cancelled");
        assert_eq!(
            FileError::Unavailable("no display".to_owned()).to_string(),
            "file dialog unavailable: no display"
        );
    }
}
