//! egui renderer for the application UI.

mod composer_panel;
mod results_panel;
mod stats_row;
mod style;
mod training_panel;

use std::sync::Arc;
use std::time::Duration;

use eframe::egui::{self, Color32, Frame, RichText};

use crate::api::SpamApi;
use crate::config::TrainingSettings;
use crate::egui_app::controller::PageCoordinator;

/// Smallest window size that keeps both panes usable.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(960.0, 640.0);

/// Renders the egui UI using the shared coordinator state.
pub struct SpamGuardApp {
    controller: PageCoordinator,
    visuals_set: bool,
}

impl SpamGuardApp {
    /// Create the app and fire the startup health probe.
    pub fn new(api: Arc<dyn SpamApi>, settings: TrainingSettings) -> Self {
        let mut controller = PageCoordinator::new(api, settings);
        controller.initialize();
        Self {
            controller,
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        visuals.window_fill = Color32::from_rgb(12, 12, 12);
        visuals.panel_fill = Color32::from_rgb(16, 16, 16);
        visuals.widgets.noninteractive.bg_fill = Color32::from_rgb(16, 16, 16);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .frame(Frame::none().fill(Color32::from_rgb(24, 24, 24)))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("SpamGuard AI")
                            .color(Color32::WHITE)
                            .strong()
                            .size(18.0),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_space(8.0);
                        ui.label(
                            RichText::new("Advanced Email Security")
                                .color(Color32::from_gray(170)),
                        );
                    });
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .frame(Frame::none().fill(Color32::from_rgb(0, 0, 0)))
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.painter().circle_filled(
                        ui.cursor().min + egui::vec2(9.0, 11.0),
                        9.0,
                        status.badge_color,
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new(&status.badge_label).color(Color32::WHITE));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(Color32::WHITE));
                });
            });
    }
}

impl eframe::App for SpamGuardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.controller.poll_background();
        self.apply_visuals(ctx);
        self.render_top_bar(ctx);
        self.render_status(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                self.render_stats_row(ui);
                ui.add_space(12.0);
                if !self.controller.models_ready() {
                    self.render_training_panel(ui);
                    ui.add_space(12.0);
                }
                ui.columns(2, |columns| {
                    self.render_composer_panel(&mut columns[0]);
                    self.render_results_panel(&mut columns[1]);
                });
            });
        });

        // Background jobs finish without user input; keep polling while any
        // are pending.
        if self.controller.is_loading()
            || self.controller.training_in_progress()
            || self.controller.ui.status.notified_at.is_some()
        {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
