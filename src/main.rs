mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use app::DashboardApp;
use clap::Parser;
use config::Config;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::parse();
    log::info!(
        "starting on page {:?} with data folder {}",
        config.page,
        config.data_dir.display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dashboard Sentimen Analysis",
        options,
        Box::new(move |cc| {
            // Install image loaders so the home page can show its picture.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(DashboardApp::new(&config)))
        }),
    )
}
