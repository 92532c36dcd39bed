use crate::{
    action::{Action, ActionRequestQueue},
    platform::{FileError, PlatformServices},
    state::{AppState, ModalKind, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    platform: &impl PlatformServices,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, platform, action);
    }
}

pub(crate) fn handle(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    platform: &impl PlatformServices,
    action: Action,
) {
    match action {
        Action::Greet => ui_state.active_modal = Some(ModalKind::Greeting),
        Action::PickFile => pick_file(ui_state, platform),
        Action::CheckConvergence => {
            let check = app_state.fields.convergence_check();
            log::debug!(
                "convergence check: scale={}, threshold={}, converged={}",
                check.scale(),
                check.threshold(),
                check.is_converged()
            );
            ui_state.active_modal = Some(ModalKind::ConvergenceVerdict {
                converged: check.is_converged(),
            });
        }
        Action::PointerEntered => {
            if app_state.hover.enter() {
                log::trace!("pointer entered window");
            }
        }
        Action::PointerLeft => {
            if app_state.hover.leave() {
                log::trace!("pointer left window");
            }
        }
        Action::OpenModal(kind) => ui_state.active_modal = Some(kind),
        Action::CloseModal => ui_state.active_modal = None,
        Action::ConfirmQuit => ui_state.quit_confirmed = true,
    }
}

fn pick_file(ui_state: &mut UiState, platform: &impl PlatformServices) {
    match platform.pick_file() {
        Ok(path) => {
            log::info!("selected file: {}", path.display());
            ui_state.active_modal = Some(ModalKind::PickedFile(path));
        }
        // User cancellation is a silent no-op.
        Err(FileError::Cancelled) => log::debug!("file selection cancelled"),
        Err(err) => {
            log::warn!("file dialog failed: {err}");
            ui_state.active_modal = Some(ModalKind::FileDialogError(err.to_string()));
        }
    }
}
