//! Session state and background-job mediation for the egui UI.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Instant;

use egui::Color32;

use crate::api::{ApiError, EmailInput, PredictionSet, SpamApi};
use crate::config::TrainingSettings;
use crate::consensus::{self, ConsensusResult};
use crate::egui_app::state::UiState;
use crate::training::{TrainingOrchestrator, TrainingStep};

/// Fallback shown when a prediction failure carries no service message.
const PREDICT_FALLBACK_MESSAGE: &str = "Failed to analyze email";

/// Tone of a status-bar notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Idle,
    Busy,
    Success,
    Error,
}

fn status_badge(tone: StatusTone) -> (String, Color32) {
    match tone {
        StatusTone::Idle => ("Idle".into(), Color32::from_rgb(42, 42, 42)),
        StatusTone::Busy => ("Working".into(), Color32::from_rgb(31, 139, 255)),
        StatusTone::Success => ("Done".into(), Color32::from_rgb(16, 185, 129)),
        StatusTone::Error => ("Error".into(), Color32::from_rgb(239, 68, 68)),
    }
}

enum JobMessage {
    HealthChecked(Result<bool, ApiError>),
    Predicted(Result<PredictionSet, ApiError>),
}

/// Owns session state and bridges the orchestrator, the aggregator and the
/// external service to the egui UI.
///
/// Background work (health check, predictions, training) runs on worker
/// threads; results arrive over channels drained by [`Self::poll_background`]
/// once per frame. Nothing else mutates the session state.
pub struct PageCoordinator {
    pub ui: UiState,
    api: Arc<dyn SpamApi>,
    orchestrator: TrainingOrchestrator,
    job_tx: Sender<JobMessage>,
    job_rx: Receiver<JobMessage>,
    last_email: EmailInput,
    last_predictions: Option<PredictionSet>,
    is_loading: bool,
    models_ready: bool,
}

impl PageCoordinator {
    /// Create a coordinator bound to the given service client.
    pub fn new(api: Arc<dyn SpamApi>, settings: TrainingSettings) -> Self {
        let (job_tx, job_rx) = mpsc::channel();
        let orchestrator = TrainingOrchestrator::new(Arc::clone(&api), settings);
        Self {
            ui: UiState::default(),
            api,
            orchestrator,
            job_tx,
            job_rx,
            last_email: EmailInput::default(),
            last_predictions: None,
            is_loading: false,
            models_ready: false,
        }
    }

    /// Issue the one-shot startup health probe.
    ///
    /// Best effort: a failure leaves the session in its untrained state and
    /// is only logged when the result arrives.
    pub fn initialize(&mut self) {
        let api = Arc::clone(&self.api);
        let tx = self.job_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(JobMessage::HealthChecked(api.health()));
        });
    }

    /// Kick off a training run via the orchestrator.
    pub fn start_training(&mut self) {
        self.orchestrator.start();
    }

    /// Submit an email for classification.
    ///
    /// Rejected without any service call when the input is blank after
    /// trimming, when the models are not ready yet, or while a prediction is
    /// already in flight.
    pub fn submit_email(&mut self, email: EmailInput) {
        if email.is_blank() || !self.models_ready || self.is_loading {
            return;
        }
        self.is_loading = true;
        self.last_email = email.clone();
        self.set_status("Analyzing email with AI models...", StatusTone::Busy);

        let api = Arc::clone(&self.api);
        let tx = self.job_tx.clone();
        thread::spawn(move || {
            let _ = tx.send(JobMessage::Predicted(api.predict(&email)));
        });
    }

    /// Drain finished background work and apply its state transitions.
    ///
    /// Called once per frame by the renderer, and in a loop by headless
    /// tests.
    pub fn poll_background(&mut self) {
        loop {
            match self.job_rx.try_recv() {
                Ok(JobMessage::HealthChecked(Ok(models_trained))) => {
                    // models_ready is monotonic; a false probe never unsets it.
                    if models_trained {
                        self.models_ready = true;
                    }
                }
                Ok(JobMessage::HealthChecked(Err(err))) => {
                    tracing::warn!("Health check failed: {err}");
                }
                Ok(JobMessage::Predicted(result)) => self.apply_prediction(result),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if self.orchestrator.poll().is_some() {
            self.on_training_complete();
        }

        if self.ui.status.notification_expired(Instant::now()) {
            self.ui.status = crate::egui_app::state::StatusBarState::idle();
        }
    }

    /// Ordering matters here: predictions are stored before the loading flag
    /// clears and before the notification is signaled.
    fn apply_prediction(&mut self, result: Result<PredictionSet, ApiError>) {
        match result {
            Ok(predictions) => {
                self.last_predictions = Some(predictions);
                self.is_loading = false;
                self.notify("Email analyzed successfully!", StatusTone::Success);
            }
            Err(err) => {
                tracing::warn!("Prediction failed: {err}");
                self.is_loading = false;
                let message = match err {
                    ApiError::Service(message) => message,
                    _ => PREDICT_FALLBACK_MESSAGE.to_string(),
                };
                self.notify(message, StatusTone::Error);
            }
        }
    }

    fn on_training_complete(&mut self) {
        self.models_ready = true;
        self.notify("Models trained successfully!", StatusTone::Success);
    }

    /// Email most recently submitted for analysis.
    pub fn last_email(&self) -> &EmailInput {
        &self.last_email
    }

    /// Prediction set from the most recent successful analysis.
    pub fn last_predictions(&self) -> Option<&PredictionSet> {
        self.last_predictions.as_ref()
    }

    /// Consensus over the current prediction set, when one exists.
    pub fn consensus(&self) -> Option<ConsensusResult> {
        self.last_predictions.as_ref().and_then(consensus::consensus)
    }

    /// Whether a prediction request is in flight.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether trained models are available for predictions.
    pub fn models_ready(&self) -> bool {
        self.models_ready
    }

    /// Whether the composer form can currently be submitted.
    pub fn can_submit(&self) -> bool {
        self.models_ready && !self.is_loading && self.ui.composer.is_valid()
    }

    /// Progress of the training workflow, for the stepper panel.
    pub fn training_step(&self) -> TrainingStep {
        self.orchestrator.step()
    }

    /// Whether a training run is active.
    pub fn training_in_progress(&self) -> bool {
        self.orchestrator.in_progress()
    }

    /// Whether the training start button should be offered.
    pub fn can_start_training(&self) -> bool {
        self.orchestrator.can_start()
    }

    /// Accuracies from the most recent successful training run.
    pub fn training_accuracies(&self) -> Option<&crate::api::ModelAccuracies> {
        self.orchestrator.accuracies()
    }

    /// Failure reason of the most recent training run, if any.
    pub fn training_error(&self) -> Option<&str> {
        self.orchestrator.error()
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let (label, color) = status_badge(tone);
        self.ui.status.text = text.into();
        self.ui.status.badge_label = label;
        self.ui.status.badge_color = color;
        self.ui.status.notified_at = None;
    }

    fn notify(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.set_status(text, tone);
        self.ui.status.notified_at = Some(Instant::now());
    }
}
