mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::GesViewerApp;
use config::{ViewerConfig, MIN_WINDOW_SIZE, WINDOW_SIZE};
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ViewerConfig::load_or_default();
    log::info!("Reading survey data from {}", config.source_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "One Stop GES",
        options,
        Box::new(|cc| Ok(Box::new(GesViewerApp::new(cc, config)))),
    )
}
