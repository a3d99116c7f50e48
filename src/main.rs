#![deny(missing_docs)]
#![deny(warnings)]

//! Entry point for the egui-based SpamGuard UI.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use std::sync::Arc;

use eframe::egui;
use spamguard::api::{HttpSpamApi, SpamApi};
use spamguard::config;
use spamguard::egui_app::ui::{MIN_VIEWPORT_SIZE, SpamGuardApp};
use spamguard::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    let config = match config::load_or_default() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("Using default config: {err}");
            config::AppConfig::default()
        }
    };
    tracing::info!("Classification service at {}", config.api_base_url);
    let api: Arc<dyn SpamApi> = Arc::new(HttpSpamApi::new(&config.api_base_url));

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size(egui::vec2(1280.0, 860.0));
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "SpamGuard AI",
        native_options,
        Box::new(move |_cc| Ok(Box::new(SpamGuardApp::new(api, config.training)))),
    )?;
    Ok(())
}
