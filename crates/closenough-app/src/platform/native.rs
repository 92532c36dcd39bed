//! Native (desktop) dialog implementation using `rfd`.

use std::path::PathBuf;

use super::{FileError, FileResult, PlatformServices};

/// Native platform backed by `rfd` dialogs.
#[derive(Debug, Default)]
pub struct NativePlatform;

impl PlatformServices for NativePlatform {
    fn pick_file(&self) -> FileResult<PathBuf> {
        // rfd's synchronous API reports backend failure and user cancellation
        // the same way, so `None` maps to a silent cancellation.
        rfd::FileDialog::new()
            .set_title("Open File")
            .pick_file()
            .ok_or(FileError::Cancelled)
    }
}
