use std::time::Instant;

use egui::Color32;

/// How long a notification stays in the status bar before reverting to idle.
pub const NOTIFICATION_TIMEOUT_SECS: u64 = 6;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// When the current notification was shown; `None` for the idle status.
    pub notified_at: Option<Instant>,
}

impl StatusBarState {
    /// Default status shown while nothing is happening.
    pub fn idle() -> Self {
        Self {
            text: "Submit an email to see spam detection results".into(),
            badge_label: "Idle".into(),
            badge_color: Color32::from_rgb(42, 42, 42),
            notified_at: None,
        }
    }

    /// True once the current notification outlived its display window.
    pub fn notification_expired(&self, now: Instant) -> bool {
        self.notified_at
            .is_some_and(|at| now.duration_since(at).as_secs() >= NOTIFICATION_TIMEOUT_SECS)
    }
}
