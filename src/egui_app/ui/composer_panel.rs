use eframe::egui::{Color32, Frame, Margin, RichText, TextEdit, Ui};

use super::SpamGuardApp;
use super::style;

impl SpamGuardApp {
    /// Email form: subject line, message body, gated submit.
    pub(super) fn render_composer_panel(&mut self, ui: &mut Ui) {
        Frame::none()
            .fill(style::CARD_FILL)
            .corner_radius(8.0)
            .inner_margin(Margin::same(16))
            .show(ui, |ui| {
                ui.label(
                    RichText::new("Compose Email")
                        .color(Color32::WHITE)
                        .strong()
                        .size(16.0),
                );

                if !self.controller.models_ready() {
                    ui.add_space(6.0);
                    ui.colored_label(
                        style::SPAM_RED,
                        "Please train the models first before analyzing emails",
                    );
                }

                let editable = self.controller.models_ready() && !self.controller.is_loading();

                ui.add_space(10.0);
                ui.label(RichText::new("Subject Line").color(style::MUTED));
                ui.add_enabled(
                    editable,
                    TextEdit::singleline(&mut self.controller.ui.composer.subject)
                        .hint_text("Enter email subject...")
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(8.0);
                ui.label(RichText::new("Email Content").color(style::MUTED));
                ui.add_enabled(
                    editable,
                    TextEdit::multiline(&mut self.controller.ui.composer.message)
                        .hint_text("Enter email content...")
                        .desired_rows(12)
                        .desired_width(f32::INFINITY),
                );

                ui.add_space(10.0);
                ui.separator();
                ui.horizontal(|ui| {
                    let hint = if self.controller.ui.composer.is_valid() {
                        "Ready for analysis"
                    } else {
                        "Enter subject or message to analyze"
                    };
                    ui.label(RichText::new(hint).color(style::MUTED));

                    ui.with_layout(
                        eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                        |ui| {
                            let label = if self.controller.is_loading() {
                                "Analyzing..."
                            } else {
                                "Analyze Email"
                            };
                            let button = eframe::egui::Button::new(
                                RichText::new(label).color(Color32::WHITE),
                            )
                            .fill(style::ACCENT);
                            let clicked = ui
                                .add_enabled(self.controller.can_submit(), button)
                                .clicked();
                            if self.controller.is_loading() {
                                ui.spinner();
                            }
                            if clicked {
                                let email = self.controller.ui.composer.email();
                                self.controller.submit_email(email);
                            }
                        },
                    );
                });

                ui.add_space(10.0);
                ui.label(
                    RichText::new(
                        "How it works: the AI analyzes your email using three machine \
                         learning models (Naive Bayes, SVM, and Neural Networks) to \
                         detect spam with high accuracy.",
                    )
                    .color(style::MUTED)
                    .small(),
                );
            });
    }
}
