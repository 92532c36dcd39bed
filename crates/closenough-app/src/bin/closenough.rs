//! Close Enough desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop application.

use closenough_app::CloseEnoughApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.closenough";

    better_panic::install();
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((640.0, 320.0))
            .with_min_inner_size((420.0, 240.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Close Enough?",
        options,
        Box::new(|cc| Ok(Box::new(CloseEnoughApp::new(cc)))),
    )
}
