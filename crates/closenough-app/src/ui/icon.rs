//! Icon glyphs used on buttons and in dialogs.

pub(crate) const CHECK: &str = "✔";
pub(crate) const CANCEL: &str = "✖";
pub(crate) const FOLDER: &str = "📂";
