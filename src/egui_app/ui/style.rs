//! Palette shared by the panels, mirroring the service demo's theming.

use eframe::egui::Color32;

/// Indigo accent used for headings and primary actions.
pub(super) const ACCENT: Color32 = Color32::from_rgb(99, 102, 241);
/// Green used for ham verdicts and success states.
pub(super) const HAM_GREEN: Color32 = Color32::from_rgb(16, 185, 129);
/// Red used for spam verdicts and error states.
pub(super) const SPAM_RED: Color32 = Color32::from_rgb(239, 68, 68);
/// Amber used for cautionary highlights.
pub(super) const WARN_AMBER: Color32 = Color32::from_rgb(245, 158, 11);
/// Muted gray for secondary text.
pub(super) const MUTED: Color32 = Color32::from_gray(160);

/// Card background used by all panels.
pub(super) const CARD_FILL: Color32 = Color32::from_rgb(26, 26, 26);

/// Verdict color: red for spam, green for ham.
pub(super) fn verdict_color(is_spam: bool) -> Color32 {
    if is_spam { SPAM_RED } else { HAM_GREEN }
}
