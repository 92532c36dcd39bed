use std::path::Path;

use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::{
    action::{Action, ActionRequestQueue},
    state::ModalKind,
    ui::icon,
};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

fn ok_button(ui: &mut Ui) {
    let ok = ui.button(format!("{} OK", icon::CHECK));
    request_focus_if_none(ui, &ok);
    if ok.clicked() {
        ui.close();
    }
}

/// Shows the active modal and routes its dismissal through the action queue.
pub(crate) fn show(ctx: &Context, modal: &ModalKind, action_queue: &mut ActionRequestQueue) {
    let result = match modal {
        ModalKind::Greeting => show_greeting(ctx),
        ModalKind::ConvergenceVerdict { converged } => show_convergence_verdict(ctx, *converged),
        ModalKind::PickedFile(path) => show_picked_file(ctx, path),
        ModalKind::FileDialogError(message) => show_file_dialog_error(ctx, message),
        ModalKind::QuitConfirm => show_quit_confirm(ctx, action_queue),
    };
    if result.should_close {
        action_queue.request(Action::CloseModal);
    }
}

fn show_greeting(ctx: &Context) -> DialogResult {
    show_dialog(
        ctx,
        Id::new("greeting"),
        "Clicked!",
        |ui| {
            ui.label("You touched me!");
        },
        ok_button,
    )
}

fn show_convergence_verdict(ctx: &Context, converged: bool) -> DialogResult {
    let verdict = if converged {
        "Yes: the values converge within the tolerance."
    } else {
        "No: the values do not converge within the tolerance."
    };
    show_dialog(
        ctx,
        Id::new("convergence_verdict"),
        "Close enough?",
        |ui| {
            ui.label(verdict);
        },
        ok_button,
    )
}

fn show_picked_file(ctx: &Context, path: &Path) -> DialogResult {
    show_dialog(
        ctx,
        Id::new("picked_file"),
        "File Path",
        |ui| {
            ui.label(path.display().to_string());
        },
        ok_button,
    )
}

fn show_file_dialog_error(ctx: &Context, message: &str) -> DialogResult {
    show_dialog(
        ctx,
        Id::new("file_dialog_error"),
        "File Dialog Failed",
        |ui| {
            ui.label(message);
        },
        ok_button,
    )
}

fn show_quit_confirm(ctx: &Context, action_queue: &mut ActionRequestQueue) -> DialogResult {
    show_dialog(
        ctx,
        Id::new("quit_confirm"),
        "Really quit?",
        |ui| {
            ui.label("Are you serious?");
        },
        |ui| {
            let quit = ui.button(format!("{} Quit", icon::CHECK));
            request_focus_if_none(ui, &quit);
            if quit.clicked() {
                action_queue.request(Action::ConfirmQuit);
                ui.close();
            }
            if ui.button(format!("{} Cancel", icon::CANCEL)).clicked() {
                ui.close();
            }
        },
    )
}
