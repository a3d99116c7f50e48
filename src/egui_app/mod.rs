//! egui application: coordinator, state types and rendering.

pub mod controller;
pub mod state;
pub mod ui;
