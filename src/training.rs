//! Training workflow orchestration.
//!
//! One training run walks a fixed three-step sequence: `LoadDataset`,
//! `TrainModels`, `Complete`. Only the train request itself talks to the
//! service; the dataset phase and the completion pause are presentation
//! timers, since the service reports no intermediate progress. The worker
//! runs on its own thread and reports back over a channel that the
//! controller drains once per frame.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use crate::api::{ModelAccuracies, SpamApi};
use crate::config::TrainingSettings;

/// Position within the training workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingStep {
    LoadDataset,
    TrainModels,
    Complete,
}

impl TrainingStep {
    /// Zero-based index used by the stepper UI.
    pub fn index(self) -> usize {
        match self {
            TrainingStep::LoadDataset => 0,
            TrainingStep::TrainModels => 1,
            TrainingStep::Complete => 2,
        }
    }

    /// Label shown in the stepper.
    pub fn label(self) -> &'static str {
        match self {
            TrainingStep::LoadDataset => "Load Dataset",
            TrainingStep::TrainModels => "Train Models",
            TrainingStep::Complete => "Complete",
        }
    }

    /// Description shown under the step label.
    pub fn description(self) -> &'static str {
        match self {
            TrainingStep::LoadDataset => "Loading Enron spam dataset...",
            TrainingStep::TrainModels => {
                "Training Naive Bayes, SVM, and Neural Network models..."
            }
            TrainingStep::Complete => "Models trained and ready for predictions",
        }
    }
}

/// Signal emitted by [`TrainingOrchestrator::poll`] when a run finished
/// successfully and its completion pause elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunComplete;

enum WorkerMessage {
    /// The dataset phase elapsed; move on to the train step.
    Advanced,
    Finished(Result<ModelAccuracies, String>),
    /// The completion pause elapsed; the run is fully done.
    Ready,
}

/// Drives the three-step training workflow and surfaces progress and outcome.
pub struct TrainingOrchestrator {
    api: Arc<dyn SpamApi>,
    settings: TrainingSettings,
    step: TrainingStep,
    in_progress: bool,
    accuracies: Option<ModelAccuracies>,
    error: Option<String>,
    worker: Option<Receiver<WorkerMessage>>,
}

impl TrainingOrchestrator {
    /// Create an idle orchestrator bound to the given service client.
    pub fn new(api: Arc<dyn SpamApi>, settings: TrainingSettings) -> Self {
        Self {
            api,
            settings,
            step: TrainingStep::LoadDataset,
            in_progress: false,
            accuracies: None,
            error: None,
            worker: None,
        }
    }

    /// Current step of the active or most recent run.
    pub fn step(&self) -> TrainingStep {
        self.step
    }

    /// Whether a run is currently active.
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Accuracies recorded by the most recent successful run.
    pub fn accuracies(&self) -> Option<&ModelAccuracies> {
        self.accuracies.as_ref()
    }

    /// Failure reason of the most recent run, if it failed.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the start button should be offered: idle at the first step.
    pub fn can_start(&self) -> bool {
        !self.in_progress && self.step == TrainingStep::LoadDataset
    }

    /// Begin a fresh training run.
    ///
    /// No-op while a run is already in progress. Exactly one train request is
    /// issued per invocation; the outcome is observed via [`Self::poll`], not
    /// returned here.
    pub fn start(&mut self) {
        if self.in_progress {
            return;
        }
        self.step = TrainingStep::LoadDataset;
        self.in_progress = true;
        self.accuracies = None;
        self.error = None;

        let (tx, rx) = mpsc::channel();
        self.worker = Some(rx);
        let api = Arc::clone(&self.api);
        let settings = self.settings;
        tracing::info!("Training run started");
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(settings.dataset_phase_ms));
            if tx.send(WorkerMessage::Advanced).is_err() {
                return;
            }
            match api.train() {
                Ok(accuracies) => {
                    if tx.send(WorkerMessage::Finished(Ok(accuracies))).is_err() {
                        return;
                    }
                    thread::sleep(Duration::from_millis(settings.completion_delay_ms));
                    let _ = tx.send(WorkerMessage::Ready);
                }
                Err(err) => {
                    let _ = tx.send(WorkerMessage::Finished(Err(err.to_string())));
                }
            }
        });
    }

    /// Drain worker messages and apply their state transitions.
    ///
    /// Returns [`RunComplete`] when a successful run fully finished this
    /// poll, so the coordinator can flip its models-ready state.
    pub fn poll(&mut self) -> Option<RunComplete> {
        let rx = self.worker.take()?;
        let mut complete = None;
        let mut run_finished = false;
        loop {
            match rx.try_recv() {
                Ok(WorkerMessage::Advanced) => {
                    if self.step == TrainingStep::LoadDataset {
                        self.step = TrainingStep::TrainModels;
                    }
                }
                Ok(WorkerMessage::Finished(Ok(accuracies))) => {
                    tracing::info!("Training succeeded for {} models", accuracies.len());
                    self.accuracies = Some(accuracies);
                    self.step = TrainingStep::Complete;
                }
                Ok(WorkerMessage::Finished(Err(reason))) => {
                    tracing::warn!("Training failed: {reason}");
                    self.error = Some(reason);
                    self.step = TrainingStep::LoadDataset;
                    self.in_progress = false;
                    run_finished = true;
                    break;
                }
                Ok(WorkerMessage::Ready) => {
                    self.in_progress = false;
                    run_finished = true;
                    complete = Some(RunComplete);
                    break;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    run_finished = true;
                    break;
                }
            }
        }
        if !run_finished {
            self.worker = Some(rx);
        }
        complete
    }
}
