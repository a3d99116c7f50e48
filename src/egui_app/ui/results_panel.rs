use eframe::egui::{Color32, Frame, Margin, ProgressBar, RichText, Ui};

use super::SpamGuardApp;
use super::style;
use crate::api::{ModelKind, ModelResult, Verdict};
use crate::consensus::ConsensusResult;

/// Longest message prefix shown in the analyzed-email preview.
const PREVIEW_CHARS: usize = 100;

impl SpamGuardApp {
    /// Right-hand pane: in-flight, empty, or full analysis breakdown.
    pub(super) fn render_results_panel(&mut self, ui: &mut Ui) {
        Frame::none()
            .fill(style::CARD_FILL)
            .corner_radius(8.0)
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                if self.controller.is_loading() {
                    self.render_in_flight(ui);
                    return;
                }
                let Some(outcome) = self.controller.consensus() else {
                    self.render_empty(ui);
                    return;
                };
                self.render_results(ui, outcome);
            });
    }

    fn render_in_flight(&self, ui: &mut Ui) {
        ui.label(
            RichText::new("Analysis in Progress")
                .color(Color32::WHITE)
                .strong()
                .size(16.0),
        );
        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.add_space(8.0);
            ui.label(RichText::new("Analyzing email with AI models...").color(style::MUTED));
        });
    }

    fn render_empty(&self, ui: &mut Ui) {
        ui.label(
            RichText::new("Analysis Results")
                .color(Color32::WHITE)
                .strong()
                .size(16.0),
        );
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new("Ready for Analysis")
                    .color(style::MUTED)
                    .size(16.0),
            );
            ui.label(
                RichText::new(
                    "Submit an email to see detailed spam detection results from our AI models",
                )
                .color(style::MUTED),
            );
        });
        ui.add_space(24.0);
    }

    fn render_results(&self, ui: &mut Ui, outcome: ConsensusResult) {
        ui.label(
            RichText::new("Analysis Results")
                .color(Color32::WHITE)
                .strong()
                .size(16.0),
        );

        self.render_email_preview(ui);
        self.render_consensus(ui, outcome);

        ui.add_space(8.0);
        ui.separator();
        ui.label(
            RichText::new("Model Breakdown")
                .color(Color32::WHITE)
                .strong(),
        );
        ui.add_space(4.0);
        let Some(predictions) = self.controller.last_predictions() else {
            return;
        };
        for model in ModelKind::ALL {
            if let Some(result) = predictions.get(&model) {
                render_model_card(ui, model, result);
            }
        }
    }

    fn render_email_preview(&self, ui: &mut Ui) {
        let email = self.controller.last_email();
        ui.add_space(8.0);
        Frame::none()
            .fill(Color32::from_rgb(20, 20, 20))
            .corner_radius(6.0)
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.label(RichText::new("Analyzed Email").color(style::MUTED).small());
                if !email.subject.is_empty() {
                    ui.label(
                        RichText::new(format!("Subject: {}", email.subject))
                            .color(Color32::WHITE),
                    );
                }
                if !email.message.is_empty() {
                    let mut preview: String =
                        email.message.chars().take(PREVIEW_CHARS).collect();
                    if email.message.chars().count() > PREVIEW_CHARS {
                        preview.push_str("...");
                    }
                    ui.label(
                        RichText::new(format!("Content: {preview}")).color(Color32::WHITE),
                    );
                }
            });
    }

    fn render_consensus(&self, ui: &mut Ui, outcome: ConsensusResult) {
        let is_spam = outcome.verdict == Verdict::Spam;
        ui.add_space(8.0);
        Frame::none()
            .fill(style::verdict_color(is_spam).gamma_multiply(0.15))
            .corner_radius(6.0)
            .inner_margin(Margin::same(10))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(format!("Final Verdict: {}", outcome.verdict.label()))
                        .color(style::verdict_color(is_spam))
                        .strong()
                        .size(16.0),
                );
                ui.label(
                    RichText::new(format!(
                        "{} out of {} models classified this as spam ({:.0}% consensus)",
                        outcome.spam_votes,
                        outcome.total_models,
                        outcome.agreement_ratio * 100.0
                    ))
                    .color(Color32::WHITE),
                );
            });
    }
}

fn render_model_card(ui: &mut Ui, model: ModelKind, result: &ModelResult) {
    let is_spam = result.prediction == Verdict::Spam;
    Frame::none()
        .fill(Color32::from_rgb(32, 32, 32))
        .corner_radius(6.0)
        .inner_margin(Margin::same(10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(model.display_name())
                        .color(Color32::WHITE)
                        .strong(),
                );
                ui.with_layout(
                    eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                    |ui| {
                        ui.label(
                            RichText::new(result.prediction.label())
                                .color(style::verdict_color(is_spam))
                                .strong(),
                        );
                    },
                );
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Confidence: {:.0}%", result.confidence * 100.0))
                    .color(style::MUTED),
            );
            ui.add(
                ProgressBar::new(result.confidence)
                    .fill(style::verdict_color(is_spam))
                    .desired_height(8.0),
            );
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format!(
                        "Spam: {:.0}%",
                        result.spam_probability * 100.0
                    ))
                    .color(style::SPAM_RED),
                );
                ui.label(
                    RichText::new(format!("Ham: {:.0}%", result.ham_probability * 100.0))
                        .color(style::HAM_GREEN),
                );
            });
        });
    ui.add_space(6.0);
}
