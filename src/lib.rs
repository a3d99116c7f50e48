//! Library exports for reuse in integration tests.
/// Wire types and HTTP client for the classification service.
pub mod api;
/// Application directory helpers.
pub mod app_dirs;
/// TOML application configuration.
pub mod config;
/// Majority-vote prediction aggregation.
pub mod consensus;
/// Shared egui UI modules.
pub mod egui_app;
/// Shared HTTP agent configuration.
mod http_client;
/// Logging setup.
pub mod logging;
/// Training workflow orchestration.
pub mod training;
