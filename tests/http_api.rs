//! Exercises `HttpSpamApi` against one-shot stub servers.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use spamguard::api::{ApiError, EmailInput, HttpSpamApi, ModelKind, SpamApi, Verdict};

/// Serve exactly one HTTP exchange, returning the base URL and a handle that
/// yields the request bytes the server saw.
fn serve_once(status_line: &str, body: &str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let handle = thread::spawn(move || {
        let mut data = Vec::new();
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            while let Ok(read) = stream.read(&mut buf) {
                if read == 0 {
                    break;
                }
                data.extend_from_slice(&buf[..read]);
                if request_complete(&data) {
                    break;
                }
            }
            let _ = stream.write_all(response.as_bytes());
        }
        String::from_utf8_lossy(&data).into_owned()
    });
    (format!("http://{addr}"), handle)
}

/// True once the buffered request holds all headers plus the announced body.
fn request_complete(data: &[u8]) -> bool {
    let text = String::from_utf8_lossy(data);
    let Some(header_end) = text.find("\r\n\r\n") else {
        return false;
    };
    let content_length = text
        .lines()
        .take_while(|line| !line.is_empty())
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);
    data.len() >= header_end + 4 + content_length
}

#[test]
fn health_reports_trained_models() {
    let (base, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"status": "healthy", "models_trained": true}"#,
    );
    let api = HttpSpamApi::new(base);
    assert!(api.health().unwrap());
    let request = server.join().unwrap();
    assert!(request.starts_with("GET /health"));
}

#[test]
fn train_parses_accuracies() {
    let (base, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{
            "success": true,
            "message": "Models trained successfully using spam_dataset.txt",
            "accuracies": {"naive_bayes": 0.981, "svm": 0.987, "neural_network": 0.992},
            "dataset_used": "spam_dataset.txt"
        }"#,
    );
    let api = HttpSpamApi::new(base);
    let accuracies = api.train().unwrap();
    assert_eq!(accuracies.len(), 3);
    assert!((accuracies[&ModelKind::Svm] - 0.987).abs() < 1e-6);
    let request = server.join().unwrap();
    assert!(request.starts_with("POST /train"));
}

#[test]
fn train_failure_status_surfaces_service_message() {
    let (base, server) = serve_once(
        "HTTP/1.1 500 Internal Server Error",
        r#"{"success": false, "message": "Failed to train with any available dataset"}"#,
    );
    let api = HttpSpamApi::new(base);
    let err = api.train().unwrap_err();
    match err {
        ApiError::Service(message) => {
            assert_eq!(message, "Failed to train with any available dataset");
        }
        other => panic!("expected service error, got {other:?}"),
    }
    server.join().unwrap();
}

#[test]
fn predict_sends_email_and_parses_predictions() {
    let (base, server) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{
            "success": true,
            "predictions": {
                "naive_bayes": {
                    "prediction": "spam",
                    "confidence": 0.97,
                    "spam_probability": 0.97,
                    "ham_probability": 0.03
                },
                "svm": {
                    "prediction": "ham",
                    "confidence": 0.62,
                    "spam_probability": 0.38,
                    "ham_probability": 0.62
                }
            }
        }"#,
    );
    let api = HttpSpamApi::new(base);
    let email = EmailInput {
        subject: "Free money".into(),
        message: "Click now".into(),
    };
    let predictions = api.predict(&email).unwrap();
    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[&ModelKind::NaiveBayes].prediction, Verdict::Spam);

    let request = server.join().unwrap();
    assert!(request.starts_with("POST /predict"));
    assert!(request.contains(r#""subject":"Free money""#));
    assert!(request.contains(r#""message":"Click now""#));
}

#[test]
fn predict_rejection_carries_validation_message() {
    let (base, _server) = serve_once(
        "HTTP/1.1 400 Bad Request",
        r#"{"success": false, "message": "Please provide some text to analyze"}"#,
    );
    let api = HttpSpamApi::new(base);
    let err = api
        .predict(&EmailInput::default())
        .unwrap_err();
    match err {
        ApiError::Service(message) => {
            assert_eq!(message, "Please provide some text to analyze");
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[test]
fn unreachable_service_is_a_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpSpamApi::new(format!("http://{addr}"));
    match api.health().unwrap_err() {
        ApiError::Http(_) => {}
        other => panic!("expected transport error, got {other:?}"),
    }
}
