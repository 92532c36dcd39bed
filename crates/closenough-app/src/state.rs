use std::path::PathBuf;

use closenough_core::{ConvergenceCheck, HoverState, parse_lenient};

/// Per-window application state: the three input fields and the hover flag.
#[derive(Debug, Default)]
pub(crate) struct AppState {
    pub(crate) fields: InputFields,
    pub(crate) hover: HoverState,
}

/// The text contents of the three input fields.
///
/// The fields stay raw strings; parsing happens leniently at check time so
/// malformed input degrades to `0.0` instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InputFields {
    pub(crate) value_a: String,
    pub(crate) value_b: String,
    pub(crate) tolerance: String,
}

impl Default for InputFields {
    fn default() -> Self {
        Self {
            value_a: "1.01".to_owned(),
            value_b: "1.02".to_owned(),
            tolerance: ".001".to_owned(),
        }
    }
}

impl InputFields {
    #[must_use]
    pub(crate) fn convergence_check(&self) -> ConvergenceCheck {
        ConvergenceCheck::new(
            parse_lenient(&self.value_a),
            parse_lenient(&self.value_b),
            parse_lenient(&self.tolerance),
        )
    }
}

/// UI-only state: the active modal and the quit flag.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) active_modal: Option<ModalKind>,
    pub(crate) quit_confirmed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ModalKind {
    Greeting,
    ConvergenceVerdict { converged: bool },
    PickedFile(PathBuf),
    FileDialogError(String),
    QuitConfirm,
}
