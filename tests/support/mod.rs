//! Shared harness pieces for integration tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use spamguard::api::{
    ApiError, EmailInput, ModelAccuracies, ModelKind, ModelResult, PredictionSet, SpamApi, Verdict,
};
use spamguard::config::TrainingSettings;

/// Timings that let a whole training run finish within one poll loop.
pub const ZERO_TIMINGS: TrainingSettings = TrainingSettings {
    dataset_phase_ms: 0,
    completion_delay_ms: 0,
};

/// Scripted [`SpamApi`] with per-endpoint call counters.
pub struct StubApi {
    health: Mutex<Result<bool, ApiError>>,
    train: Mutex<Result<ModelAccuracies, ApiError>>,
    predict: Mutex<Result<PredictionSet, ApiError>>,
    /// Artificial latency applied to every endpoint.
    pub delay: Duration,
    pub health_calls: AtomicUsize,
    pub train_calls: AtomicUsize,
    pub predict_calls: AtomicUsize,
}

impl StubApi {
    pub fn new() -> Self {
        Self {
            health: Mutex::new(Ok(false)),
            train: Mutex::new(Ok(sample_accuracies())),
            predict: Mutex::new(Ok(sample_predictions())),
            delay: Duration::ZERO,
            health_calls: AtomicUsize::new(0),
            train_calls: AtomicUsize::new(0),
            predict_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_health(&self, result: Result<bool, ApiError>) {
        *self.health.lock().unwrap() = result;
    }

    pub fn set_train(&self, result: Result<ModelAccuracies, ApiError>) {
        *self.train.lock().unwrap() = result;
    }

    pub fn set_predict(&self, result: Result<PredictionSet, ApiError>) {
        *self.predict.lock().unwrap() = result;
    }
}

impl SpamApi for StubApi {
    fn health(&self) -> Result<bool, ApiError> {
        self.health_calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);
        self.health.lock().unwrap().clone()
    }

    fn train(&self) -> Result<ModelAccuracies, ApiError> {
        self.train_calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);
        self.train.lock().unwrap().clone()
    }

    fn predict(&self, _email: &EmailInput) -> Result<PredictionSet, ApiError> {
        self.predict_calls.fetch_add(1, Ordering::SeqCst);
        thread::sleep(self.delay);
        self.predict.lock().unwrap().clone()
    }
}

/// Poll `condition` for up to a second, sleeping between attempts.
///
/// Returns its final value so asserts read naturally at the call site.
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

pub fn sample_accuracies() -> ModelAccuracies {
    BTreeMap::from([
        (ModelKind::NaiveBayes, 0.981),
        (ModelKind::Svm, 0.987),
        (ModelKind::NeuralNetwork, 0.992),
    ])
}

pub fn model_result(prediction: Verdict, spam_probability: f32) -> ModelResult {
    ModelResult {
        prediction,
        confidence: spam_probability.max(1.0 - spam_probability),
        spam_probability,
        ham_probability: 1.0 - spam_probability,
    }
}

/// Two spam votes against one ham vote.
pub fn sample_predictions() -> PredictionSet {
    BTreeMap::from([
        (ModelKind::NaiveBayes, model_result(Verdict::Spam, 0.93)),
        (ModelKind::Svm, model_result(Verdict::Spam, 0.71)),
        (ModelKind::NeuralNetwork, model_result(Verdict::Ham, 0.18)),
    ])
}
