#![warn(clippy::all, rust_2018_idioms)]

use eframe_sketch::logging::init_logging;
use eframe_sketch::{AppConfig, SketchApp};

fn main() -> eframe::Result<()> {
    let config = AppConfig::default();
    init_logging(config.log_filter.as_deref());

    let options = eframe::NativeOptions {
        viewport: config.viewport(),
        ..Default::default()
    };

    let title = config.title.clone();
    log::info!("Starting {title}");
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(SketchApp::new(cc, config)))),
    )
}
