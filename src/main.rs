mod app;

use app::DrillApp;
use tracing_subscriber::EnvFilter;
use vocab_drill_app::config::AppConfig;
use vocab_drill_app::{loader, speech};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load_or_default();

    let store = loader::load_store(&config.vocabulary);
    if let Err(e) = &store {
        tracing::error!(error = %e, "vocabulary could not be loaded");
    }

    let synthesizer = speech::from_config(&config.speech);
    if let Err(e) = &synthesizer {
        tracing::warn!(error = %e, "speech backend could not be created, audio disabled");
    }

    let deck_name = loader::deck_name(&config.vocabulary);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([520.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "German Vocabulary Drill",
        options,
        Box::new(|_cc| Ok(Box::new(DrillApp::new(config, store, synthesizer, deck_name)))),
    )
}
