//! Wire types and HTTP client for the external classification service.
//!
//! The service exposes three JSON endpoints: `GET /health`, `POST /train` and
//! `POST /predict`. Train and predict report application-level failures as
//! `{ "success": false, "message": ... }`, sometimes with a non-2xx status
//! whose body still carries the message.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::http_client;

/// A composed email submitted for classification. Immutable once submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmailInput {
    pub subject: String,
    pub message: String,
}

impl EmailInput {
    /// True when both fields are empty after trimming whitespace.
    ///
    /// Blank inputs are not eligible for submission.
    pub fn is_blank(&self) -> bool {
        self.subject.trim().is_empty() && self.message.trim().is_empty()
    }
}

/// Identifier of one of the three external classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    NaiveBayes,
    Svm,
    NeuralNetwork,
}

impl ModelKind {
    /// All known classifiers, in display order.
    pub const ALL: [ModelKind; 3] = [
        ModelKind::NaiveBayes,
        ModelKind::Svm,
        ModelKind::NeuralNetwork,
    ];

    /// Human-readable name used in panels.
    pub fn display_name(self) -> &'static str {
        match self {
            ModelKind::NaiveBayes => "Naive Bayes",
            ModelKind::Svm => "Support Vector Machine",
            ModelKind::NeuralNetwork => "Neural Network",
        }
    }
}

/// Binary classification decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Spam,
    Ham,
}

impl Verdict {
    /// Uppercase label used in chips and the consensus banner.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Spam => "SPAM",
            Verdict::Ham => "HAM",
        }
    }
}

/// One classifier's output for a single email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    pub prediction: Verdict,
    /// Probability mass of the predicted class, in `[0, 1]`.
    pub confidence: f32,
    pub spam_probability: f32,
    pub ham_probability: f32,
}

/// Per-model classification results, keyed by classifier. Only models the
/// service actually returned are present.
pub type PredictionSet = BTreeMap<ModelKind, ModelResult>;

/// Per-model training accuracies reported by a successful training run.
pub type ModelAccuracies = BTreeMap<ModelKind, f32>;

/// Errors surfaced by the classification service client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure or unreadable response.
    #[error("HTTP error: {0}")]
    Http(String),
    /// The service answered with `success: false` and a reason.
    #[error("{0}")]
    Service(String),
    /// A 2xx response that does not match the contract.
    #[error("Invalid response: {0}")]
    Invalid(String),
}

/// Seam to the external classification service.
///
/// The production implementation is [`HttpSpamApi`]; tests substitute stubs.
pub trait SpamApi: Send + Sync {
    /// `GET /health`: whether trained models are already loaded server-side.
    fn health(&self) -> Result<bool, ApiError>;
    /// `POST /train`: train all models, returning per-model accuracies.
    fn train(&self) -> Result<ModelAccuracies, ApiError>;
    /// `POST /predict`: classify one email with every trained model.
    fn predict(&self, email: &EmailInput) -> Result<PredictionSet, ApiError>;
}

/// ureq-backed [`SpamApi`] implementation.
#[derive(Debug, Clone)]
pub struct HttpSpamApi {
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct HealthResponse {
    models_trained: bool,
}

#[derive(Debug, Deserialize)]
struct TrainResponse {
    success: bool,
    #[serde(default)]
    accuracies: Option<ModelAccuracies>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    success: bool,
    #[serde(default)]
    predictions: Option<PredictionSet>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FailureBody {
    #[serde(default)]
    message: Option<String>,
}

impl HttpSpamApi {
    /// Create a client for the given base path (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }
}

impl SpamApi for HttpSpamApi {
    fn health(&self) -> Result<bool, ApiError> {
        let response = http_client::agent()
            .get(&self.url("health"))
            .call()
            .map_err(into_api_error)?;
        let health: HealthResponse = response
            .into_json()
            .map_err(|err| ApiError::Http(err.to_string()))?;
        Ok(health.models_trained)
    }

    fn train(&self) -> Result<ModelAccuracies, ApiError> {
        let response = http_client::agent()
            .post(&self.url("train"))
            .timeout(http_client::TRAIN_TIMEOUT)
            .call()
            .map_err(into_api_error)?;
        let train: TrainResponse = response
            .into_json()
            .map_err(|err| ApiError::Http(err.to_string()))?;
        if !train.success {
            return Err(service_failure(train.message));
        }
        train
            .accuracies
            .ok_or_else(|| ApiError::Invalid("train response missing accuracies".into()))
    }

    fn predict(&self, email: &EmailInput) -> Result<PredictionSet, ApiError> {
        let response = http_client::agent()
            .post(&self.url("predict"))
            .send_json(email)
            .map_err(into_api_error)?;
        let predict: PredictResponse = response
            .into_json()
            .map_err(|err| ApiError::Http(err.to_string()))?;
        if !predict.success {
            return Err(service_failure(predict.message));
        }
        predict
            .predictions
            .ok_or_else(|| ApiError::Invalid("predict response missing predictions".into()))
    }
}

/// Map a ureq error, preferring the service's own failure message when a
/// non-2xx response still carries the JSON failure body.
fn into_api_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(code, response) => match response.into_json::<FailureBody>() {
            Ok(FailureBody {
                message: Some(message),
            }) => ApiError::Service(message),
            _ => ApiError::Http(format!("Service returned status {code}")),
        },
        other => ApiError::Http(other.to_string()),
    }
}

fn service_failure(message: Option<String>) -> ApiError {
    match message {
        Some(message) if !message.trim().is_empty() => ApiError::Service(message),
        _ => ApiError::Invalid("service reported failure without a message".into()),
    }
}
