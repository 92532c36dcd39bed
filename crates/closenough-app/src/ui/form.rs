use closenough_core::HoverState;
use eframe::egui::{RichText, TextEdit, Ui};
use egui_extras::{Size, StripBuilder};

use crate::{
    action::{Action, ActionRequestQueue},
    state::InputFields,
    ui::icon,
};

/// Draws the main window contents: hover status, the three input fields, and
/// the button row.
pub(crate) fn show(
    ui: &mut Ui,
    fields: &mut InputFields,
    hover: HoverState,
    action_queue: &mut ActionRequestQueue,
) {
    let row_height = ui.spacing().interact_size.y;
    let spacing = ui.spacing().item_spacing.y;

    StripBuilder::new(ui)
        .size(Size::exact(row_height))
        .size(Size::exact(spacing))
        .size(Size::exact(row_height * 2.5))
        .size(Size::exact(spacing))
        .size(Size::exact(row_height))
        .size(Size::remainder())
        .vertical(|mut strip| {
            strip.cell(|ui| hover_status(ui, hover));
            strip.cell(|_ui| {}); // Spacer
            strip.cell(|ui| fields_row(ui, fields));
            strip.cell(|_ui| {}); // Spacer
            strip.cell(|ui| buttons_row(ui, action_queue));
            strip.empty();
        });
}

fn hover_status(ui: &mut Ui, hover: HoverState) {
    let color = if hover.is_inside() {
        ui.visuals().strong_text_color()
    } else {
        ui.visuals().weak_text_color()
    };
    ui.label(RichText::new(format!("pointer is {hover}")).color(color));
}

fn fields_row(ui: &mut Ui, fields: &mut InputFields) {
    StripBuilder::new(ui)
        .sizes(Size::remainder(), 3)
        .horizontal(|mut strip| {
            strip.cell(|ui| labeled_field(ui, "Value A:", &mut fields.value_a));
            strip.cell(|ui| labeled_field(ui, "Value B:", &mut fields.value_b));
            strip.cell(|ui| labeled_field(ui, "Tolerance:", &mut fields.tolerance));
        });
}

fn labeled_field(ui: &mut Ui, label: &str, text: &mut String) {
    ui.vertical(|ui| {
        ui.label(label);
        ui.add(TextEdit::singleline(text).desired_width(f32::INFINITY));
    });
}

fn buttons_row(ui: &mut Ui, action_queue: &mut ActionRequestQueue) {
    ui.horizontal(|ui| {
        if ui.button("Say Hello").clicked() {
            action_queue.request(Action::Greet);
        }
        if ui
            .button(format!("{} Open File…", icon::FOLDER))
            .clicked()
        {
            action_queue.request(Action::PickFile);
        }
        if ui.button(format!("{} Converge", icon::CHECK)).clicked() {
            action_queue.request(Action::CheckConvergence);
        }
    });
}
