use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use digit_canvas::surface::PixelBuffer;
use digit_canvas::{
    EncodedImage, ImageEncoder, ModelSelector, PredictionClient, PredictionError, ServiceConfig,
};
use parking_lot::Mutex;
use serde_json::{Value, json};

type Requests = Arc<Mutex<Vec<(String, Value)>>>;

async fn spawn_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Answers 7 / 0.93 for `cnn` and 404 for every other model
async fn recording_service(requests: Requests) -> String {
    async fn predict(
        State(requests): State<Requests>,
        Path(model): Path<String>,
        Json(body): Json<Value>,
    ) -> (StatusCode, Json<Value>) {
        requests.lock().push((model.clone(), body));
        if model == "cnn" {
            (StatusCode::OK, Json(json!({ "prediction": 7, "confidence": 0.93 })))
        } else {
            (StatusCode::NOT_FOUND, Json(json!({ "detail": "Model not found" })))
        }
    }

    let router = Router::new()
        .route("/predict/:model", post(predict))
        .with_state(requests);
    spawn_service(router).await
}

fn client_for(base_url: &str) -> PredictionClient {
    let config = ServiceConfig::new(base_url)
        .unwrap()
        .with_timeout(Some(Duration::from_secs(5)));
    PredictionClient::new(&config).unwrap()
}

fn blank_image() -> EncodedImage {
    ImageEncoder::new().encode(&PixelBuffer::new()).unwrap()
}

#[tokio::test]
async fn test_successful_prediction() {
    let requests = Requests::default();
    let base_url = recording_service(requests.clone()).await;
    let client = client_for(&base_url);

    let image = blank_image();
    let result = client.submit(ModelSelector::Cnn, &image).await.unwrap();
    assert_eq!(result.digit, 7);
    assert!((result.confidence - 0.93).abs() < 1e-6);

    let requests = requests.lock();
    assert_eq!(requests.len(), 1);
    let (model, body) = &requests[0];
    assert_eq!(model, "cnn");
    assert_eq!(body, &json!({ "image_base64": image.as_str() }));
}

#[tokio::test]
async fn test_unknown_model_is_a_status_error() {
    let requests = Requests::default();
    let base_url = recording_service(requests.clone()).await;
    let client = client_for(&base_url);

    let err = client
        .submit(ModelSelector::Mlp, &blank_image())
        .await
        .unwrap_err();
    assert_eq!(err, PredictionError::Status(404));
    assert_eq!(requests.lock()[0].0, "mlp");
}

#[tokio::test]
async fn test_server_error() {
    let router = Router::new().route(
        "/predict/:model",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }),
    );
    let client = client_for(&spawn_service(router).await);

    let err = client
        .submit(ModelSelector::Cnn, &blank_image())
        .await
        .unwrap_err();
    assert_eq!(err, PredictionError::Status(500));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_body_that_is_not_json() {
    let router = Router::new().route("/predict/:model", post(|| async { "seven" }));
    let client = client_for(&spawn_service(router).await);

    let err = client
        .submit(ModelSelector::Cnn, &blank_image())
        .await
        .unwrap_err();
    assert!(matches!(err, PredictionError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_body_with_missing_fields() {
    let router = Router::new().route(
        "/predict/:model",
        post(|| async { Json(json!({ "digit": 7 })) }),
    );
    let client = client_for(&spawn_service(router).await);

    let err = client
        .submit(ModelSelector::Cnn, &blank_image())
        .await
        .unwrap_err();
    assert!(matches!(err, PredictionError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_out_of_range_prediction() {
    let router = Router::new().route(
        "/predict/:model",
        post(|| async { Json(json!({ "prediction": 12, "confidence": 0.5 })) }),
    );
    let client = client_for(&spawn_service(router).await);

    let err = client
        .submit(ModelSelector::Cnn, &blank_image())
        .await
        .unwrap_err();
    assert!(matches!(err, PredictionError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let router = Router::new().route(
        "/predict/:model",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "prediction": 1, "confidence": 0.5 }))
        }),
    );
    let base_url = spawn_service(router).await;
    let config = ServiceConfig::new(&base_url)
        .unwrap()
        .with_timeout(Some(Duration::from_millis(200)));
    let client = PredictionClient::new(&config).unwrap();

    let err = client
        .submit(ModelSelector::Cnn, &blank_image())
        .await
        .unwrap_err();
    assert_eq!(err, PredictionError::Timeout);
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_unreachable_service() {
    // Nothing listens on a port we just released
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = client_for(&format!("http://127.0.0.1:{port}"));

    let err = client
        .submit(ModelSelector::Cnn, &blank_image())
        .await
        .unwrap_err();
    assert!(matches!(err, PredictionError::Transport(_)));
    assert_eq!(
        err.user_message(),
        "Could not reach the classification service. Is it running?"
    );
}

#[tokio::test]
async fn test_model_catalog() {
    let router = Router::new().route(
        "/model_info",
        get(|| async {
            Json(json!({
                "models": [
                    { "name": "cnn", "file": "cnn_model.keras" },
                    { "name": "mlp", "file": "mlp_model.keras" }
                ]
            }))
        }),
    );
    let client = client_for(&spawn_service(router).await);

    let catalog = client.fetch_model_info().await.unwrap();
    assert_eq!(catalog.models.len(), 2);
    assert!(catalog.serves(ModelSelector::Cnn));
    assert!(catalog.serves(ModelSelector::Mlp));
    assert_eq!(
        catalog.find(ModelSelector::Mlp).unwrap().details["file"],
        "mlp_model.keras"
    );
}

#[tokio::test]
async fn test_missing_model_catalog() {
    let router = Router::new().route("/health", get(|| async { "ok" }));
    let client = client_for(&spawn_service(router).await);

    let err = client.fetch_model_info().await.unwrap_err();
    assert_eq!(err, PredictionError::Status(404));
}
