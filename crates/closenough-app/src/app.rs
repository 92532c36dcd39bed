//! Close Enough desktop application UI.
//!
//! # Design Notes
//! - One window: hover status label, three text fields, three buttons.
//! - All mutation flows through queued actions drained by the action handler, so
//!   the behavior is testable without a running event loop.
//! - Closing the window asks for confirmation first; the close request is
//!   cancelled until the user confirms through the quit modal.

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, ViewportCommand},
};

use crate::{
    action::{Action, ActionRequestQueue},
    action_handler,
    platform::Platform,
    state::{AppState, ModalKind, UiState},
    ui,
};

#[derive(Debug, Default)]
pub struct CloseEnoughApp {
    app_state: AppState,
    ui_state: UiState,
    platform: Platform,
}

impl CloseEnoughApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        Self::default()
    }
}

impl App for CloseEnoughApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        ctx.input(|input| {
            ui::input::handle_pointer_events(&input.events, &mut action_queue);
            if self.ui_state.active_modal.is_none() {
                ui::input::handle_shortcuts(input, &mut action_queue);
            }
        });

        if ctx.input(|input| input.viewport().close_requested()) && !self.ui_state.quit_confirmed {
            ctx.send_viewport_cmd(ViewportCommand::CancelClose);
            action_queue.request(Action::OpenModal(ModalKind::QuitConfirm));
        }

        action_handler::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            &self.platform,
            &mut action_queue,
        );

        CentralPanel::default().show(ctx, |ui| {
            ui::form::show(
                ui,
                &mut self.app_state.fields,
                self.app_state.hover,
                &mut action_queue,
            );
        });

        if let Some(modal) = self.ui_state.active_modal.clone() {
            ui::dialogs::show(ctx, &modal, &mut action_queue);
        }

        action_handler::handle_all(
            &mut self.app_state,
            &mut self.ui_state,
            &self.platform,
            &mut action_queue,
        );

        if self.ui_state.quit_confirmed {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}
