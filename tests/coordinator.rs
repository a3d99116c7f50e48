mod support;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::thread;
use std::time::Duration;

use support::{StubApi, ZERO_TIMINGS, sample_predictions, wait_until};

use spamguard::api::{ApiError, EmailInput, SpamApi, Verdict};
use spamguard::egui_app::controller::PageCoordinator;

fn coordinator(stub: &Arc<StubApi>) -> PageCoordinator {
    let api: Arc<dyn SpamApi> = stub.clone();
    PageCoordinator::new(api, ZERO_TIMINGS)
}

fn email(subject: &str, message: &str) -> EmailInput {
    EmailInput {
        subject: subject.into(),
        message: message.into(),
    }
}

/// Mark the session ready the way a prior training run would.
fn make_ready(stub: &Arc<StubApi>, coordinator: &mut PageCoordinator) {
    stub.set_health(Ok(true));
    coordinator.initialize();
    assert!(wait_until(|| {
        coordinator.poll_background();
        coordinator.models_ready()
    }));
}

#[test]
fn health_probe_sets_models_ready() {
    let stub = Arc::new(StubApi::new());
    let mut coordinator = coordinator(&stub);
    assert!(!coordinator.models_ready());

    make_ready(&stub, &mut coordinator);
    assert_eq!(stub.health_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn health_failure_is_swallowed() {
    let stub = Arc::new(StubApi::new());
    stub.set_health(Err(ApiError::Http("connection refused".into())));
    let mut coordinator = coordinator(&stub);

    coordinator.initialize();
    assert!(wait_until(|| {
        coordinator.poll_background();
        stub.health_calls.load(Ordering::SeqCst) == 1
    }));
    thread::sleep(Duration::from_millis(20));
    coordinator.poll_background();
    assert!(!coordinator.models_ready());
}

#[test]
fn blank_submission_is_rejected_before_any_call() {
    let stub = Arc::new(StubApi::new());
    let mut coordinator = coordinator(&stub);
    make_ready(&stub, &mut coordinator);

    coordinator.submit_email(email("", "   "));
    assert!(!coordinator.is_loading());
    thread::sleep(Duration::from_millis(20));
    coordinator.poll_background();
    assert_eq!(stub.predict_calls.load(Ordering::SeqCst), 0);
    assert_eq!(coordinator.last_predictions(), None);
}

#[test]
fn submission_is_gated_on_models_ready() {
    let stub = Arc::new(StubApi::new());
    let mut coordinator = coordinator(&stub);

    coordinator.submit_email(email("Hi", "test"));
    assert!(!coordinator.is_loading());
    thread::sleep(Duration::from_millis(20));
    assert_eq!(stub.predict_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn successful_submission_stores_predictions_then_clears_loading() {
    let stub = Arc::new(StubApi::new());
    let mut coordinator = coordinator(&stub);
    make_ready(&stub, &mut coordinator);

    coordinator.submit_email(email("Hi", "test"));
    assert!(coordinator.is_loading());

    assert!(wait_until(|| {
        coordinator.poll_background();
        !coordinator.is_loading()
    }));
    assert_eq!(coordinator.last_predictions(), Some(&sample_predictions()));
    assert_eq!(coordinator.last_email(), &email("Hi", "test"));
    assert_eq!(coordinator.ui.status.text, "Email analyzed successfully!");

    // Two of three stub models vote spam.
    let outcome = coordinator.consensus().unwrap();
    assert_eq!(outcome.verdict, Verdict::Spam);
    assert_eq!(outcome.spam_votes, 2);
}

#[test]
fn failed_submission_keeps_prior_predictions() {
    let stub = Arc::new(StubApi::new());
    let mut coordinator = coordinator(&stub);
    make_ready(&stub, &mut coordinator);

    coordinator.submit_email(email("First", ""));
    assert!(wait_until(|| {
        coordinator.poll_background();
        !coordinator.is_loading()
    }));
    assert!(coordinator.last_predictions().is_some());

    stub.set_predict(Err(ApiError::Service(
        "Models not trained. Please train models first.".into(),
    )));
    coordinator.submit_email(email("Second", ""));
    assert!(wait_until(|| {
        coordinator.poll_background();
        !coordinator.is_loading()
    }));

    assert_eq!(coordinator.last_predictions(), Some(&sample_predictions()));
    assert_eq!(
        coordinator.ui.status.text,
        "Models not trained. Please train models first."
    );
}

#[test]
fn transport_failure_uses_generic_fallback_message() {
    let stub = Arc::new(StubApi::new());
    stub.set_predict(Err(ApiError::Http("timed out".into())));
    let mut coordinator = coordinator(&stub);
    make_ready(&stub, &mut coordinator);

    coordinator.submit_email(email("Hi", "test"));
    assert!(wait_until(|| {
        coordinator.poll_background();
        !coordinator.is_loading()
    }));
    assert_eq!(coordinator.ui.status.text, "Failed to analyze email");
    assert_eq!(coordinator.last_predictions(), None);
}

#[test]
fn second_submission_while_loading_is_rejected() {
    let mut stub = StubApi::new();
    stub.delay = Duration::from_millis(100);
    let stub = Arc::new(stub);
    let mut coordinator = coordinator(&stub);
    make_ready(&stub, &mut coordinator);

    coordinator.submit_email(email("First", ""));
    assert!(coordinator.is_loading());
    coordinator.submit_email(email("Second", ""));

    assert!(wait_until(|| {
        coordinator.poll_background();
        !coordinator.is_loading()
    }));
    assert_eq!(stub.predict_calls.load(Ordering::SeqCst), 1);
    assert_eq!(coordinator.last_email(), &email("First", ""));
}

#[test]
fn training_completion_unlocks_submissions() {
    let stub = Arc::new(StubApi::new());
    let mut coordinator = coordinator(&stub);
    assert!(!coordinator.models_ready());

    coordinator.start_training();
    assert!(wait_until(|| {
        coordinator.poll_background();
        coordinator.models_ready()
    }));
    assert_eq!(coordinator.ui.status.text, "Models trained successfully!");
    assert_eq!(stub.train_calls.load(Ordering::SeqCst), 1);

    coordinator.submit_email(email("Hi", "test"));
    assert!(coordinator.is_loading());
}

#[test]
fn training_failure_leaves_models_locked() {
    let stub = Arc::new(StubApi::new());
    stub.set_train(Err(ApiError::Service("Training failed".into())));
    let mut coordinator = coordinator(&stub);

    coordinator.start_training();
    assert!(wait_until(|| {
        coordinator.poll_background();
        !coordinator.training_in_progress()
    }));
    assert!(!coordinator.models_ready());
    assert_eq!(coordinator.training_error(), Some("Training failed"));
}
