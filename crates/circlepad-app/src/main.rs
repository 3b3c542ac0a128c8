//! Main application entry point.

mod app;
mod canvas;
mod panel;

use app::CirclepadApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Circlepad");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 680.0])
            .with_min_inner_size([1000.0, 660.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Circlepad",
        options,
        Box::new(|cc| Ok(Box::new(CirclepadApp::new(cc)))),
    )
}
