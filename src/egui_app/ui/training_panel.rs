use eframe::egui::{Color32, Frame, Margin, RichText, Ui};

use super::SpamGuardApp;
use super::style;
use crate::api::ModelKind;
use crate::training::TrainingStep;

const STEPS: [TrainingStep; 3] = [
    TrainingStep::LoadDataset,
    TrainingStep::TrainModels,
    TrainingStep::Complete,
];

impl SpamGuardApp {
    /// Vertical stepper for the training workflow, shown until the models
    /// are ready.
    pub(super) fn render_training_panel(&mut self, ui: &mut Ui) {
        Frame::none()
            .fill(style::CARD_FILL)
            .corner_radius(8.0)
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Model Training")
                        .color(Color32::WHITE)
                        .strong()
                        .size(16.0),
                );
                ui.add_space(6.0);
                ui.label(
                    RichText::new(
                        "Train the machine learning models on the Enron spam dataset to \
                         enable email classification. This process may take a few minutes.",
                    )
                    .color(style::MUTED),
                );

                if let Some(error) = self.controller.training_error() {
                    ui.add_space(8.0);
                    ui.colored_label(style::SPAM_RED, error);
                }

                ui.add_space(10.0);
                let active = self.controller.training_step();
                let in_progress = self.controller.training_in_progress();
                for step in STEPS {
                    self.render_step(ui, step, active, in_progress);
                }

                if self.controller.can_start_training() {
                    ui.add_space(10.0);
                    let button = eframe::egui::Button::new(
                        RichText::new("Start Training").color(Color32::WHITE),
                    )
                    .fill(style::ACCENT);
                    if ui.add(button).clicked() {
                        self.controller.start_training();
                    }
                }
            });
    }

    fn render_step(
        &self,
        ui: &mut Ui,
        step: TrainingStep,
        active: TrainingStep,
        in_progress: bool,
    ) {
        let reached = step.index() <= active.index();
        let marker_color = if reached { style::ACCENT } else { style::MUTED };
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{}.", step.index() + 1)).color(marker_color));
            ui.label(
                RichText::new(step.label())
                    .color(if reached { Color32::WHITE } else { style::MUTED })
                    .strong(),
            );
            if step == active && in_progress {
                ui.spinner();
            }
        });
        if step == active {
            ui.indent(step.label(), |ui| {
                ui.label(RichText::new(step.description()).color(style::MUTED));
                if step == TrainingStep::Complete {
                    self.render_accuracies(ui);
                }
            });
        }
        ui.add_space(4.0);
    }

    fn render_accuracies(&self, ui: &mut Ui) {
        let Some(accuracies) = self.controller.training_accuracies() else {
            return;
        };
        ui.add_space(4.0);
        ui.label(RichText::new("Training Results:").color(Color32::WHITE).strong());
        for model in ModelKind::ALL {
            if let Some(accuracy) = accuracies.get(&model) {
                ui.label(
                    RichText::new(format!(
                        "• {}: {:.2}%",
                        model.display_name(),
                        accuracy * 100.0
                    ))
                    .color(style::MUTED),
                );
            }
        }
    }
}
