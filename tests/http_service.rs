//! `HttpService` and `PreviewController` against an in-process fake backend.

use std::cell::RefCell;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use serde_json::{Value, json};

use deckview::http::HttpService;
use deckview::render::render_preview;
use deckview::{
    ControllerConfig, ControllerError, ExportArtifact, ExportKind, ExportOutcome, GenerationOutcome, GenerationRequest,
    Host, Overlay, Page, PresentationService, PreviewController,
};

// =============================================================================
// Fake backend
// =============================================================================

#[derive(Clone, Default)]
struct Seen {
    generate_bodies: Arc<Mutex<Vec<Value>>>,
    cache_headers: Arc<Mutex<Vec<Option<String>>>>,
    export_bodies: Arc<Mutex<Vec<Value>>>,
}

async fn generate(State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let cache = headers
        .get(header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    seen.cache_headers.lock().unwrap().push(cache);
    seen.generate_bodies.lock().unwrap().push(body.clone());

    match body["topic"].as_str().unwrap_or_default() {
        "quota" => (StatusCode::TOO_MANY_REQUESTS, Json(json!({ "error": "quota exceeded" }))).into_response(),
        "broken" => Json(json!({ "title": "no wrapper" })).into_response(),
        "crash" => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response(),
        topic => Json(json!({
            "presentation": {
                "title": topic,
                "subtitle": format!("A {} overview", body["style"].as_str().unwrap_or_default()),
                "theme": {
                    "primary_color": "#0072C6",
                    "secondary_color": "#404040",
                    "accent_color": "#00B294",
                    "background_color": "#FFFFFF"
                },
                "slides": [
                    { "title": topic, "type": "title", "layout": "centered" },
                    { "title": "Key facts", "type": "content", "content": ["One", "Two"] },
                    {
                        "title": "Comparison",
                        "type": "table",
                        "table_data": { "headers": ["A", "B"], "rows": [["1", "2"], ["3"]] }
                    }
                ]
            }
        }))
        .into_response(),
    }
}

async fn export_pdf(State(seen): State<Seen>, Json(body): Json<Value>) -> Response {
    seen.export_bodies.lock().unwrap().push(body);
    ([(header::CONTENT_TYPE, "application/pdf")], b"%PDF-1.7 fake".to_vec()).into_response()
}

async fn export_ppt(State(seen): State<Seen>, Json(body): Json<Value>) -> Response {
    seen.export_bodies.lock().unwrap().push(body);
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "Internal server error: boom" }))).into_response()
}

async fn spawn_backend() -> (ControllerConfig, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/generate", post(generate))
        .route("/export/pdf", post(export_pdf))
        .route("/export/ppt", post(export_ppt))
        .with_state(seen.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    let config = ControllerConfig::default().with_base_url(format!("http://{addr}"));
    (config, seen)
}

fn request(topic: &str) -> GenerationRequest {
    GenerationRequest { topic: topic.into(), style: "formal".into(), timestamp: 42 }
}

// =============================================================================
// Host that records downloads and drops timers
// =============================================================================

#[derive(Default)]
struct RecordingHost {
    downloads: RefCell<Vec<ExportArtifact>>,
    scheduled: RefCell<Vec<Duration>>,
}

impl Host for RecordingHost {
    fn now_ms(&self) -> u64 {
        1_700_000_000_000
    }

    async fn sleep(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }

    fn schedule(&self, delay: Duration, _callback: Box<dyn FnOnce()>) {
        self.scheduled.borrow_mut().push(delay);
    }

    fn deliver_download(&self, artifact: &ExportArtifact) {
        self.downloads.borrow_mut().push(artifact.clone());
    }
}

// =============================================================================
// HttpService
// =============================================================================

#[tokio::test]
async fn generate_posts_json_with_no_cache_headers() {
    let (config, seen) = spawn_backend().await;
    let service = HttpService::new(&config).unwrap();

    let preview = service.generate(&request("Mars")).await.unwrap();
    assert_eq!(preview.title, "Mars");
    assert_eq!(preview.subtitle, "A formal overview");
    assert_eq!(preview.slide_count(), 3);
    assert!(preview.theme.is_some());

    let bodies = seen.generate_bodies.lock().unwrap().clone();
    assert_eq!(bodies, vec![json!({ "topic": "Mars", "style": "formal", "timestamp": 42 })]);
    let cache = seen.cache_headers.lock().unwrap().clone();
    assert_eq!(cache, vec![Some("no-cache, no-store".to_owned())]);
}

#[tokio::test]
async fn generate_surfaces_server_error_message() {
    let (config, _) = spawn_backend().await;
    let service = HttpService::new(&config).unwrap();
    let err = service.generate(&request("quota")).await.unwrap_err();
    assert_eq!(err, ControllerError::Transport { status: 429, message: Some("quota exceeded".into()) });
}

#[tokio::test]
async fn generate_without_presentation_is_malformed() {
    let (config, _) = spawn_backend().await;
    let service = HttpService::new(&config).unwrap();
    let err = service.generate(&request("broken")).await.unwrap_err();
    assert_eq!(err.kind(), "malformed");
}

#[tokio::test]
async fn generate_plain_text_failure_has_no_message() {
    let (config, _) = spawn_backend().await;
    let service = HttpService::new(&config).unwrap();
    let err = service.generate(&request("crash")).await.unwrap_err();
    assert_eq!(err, ControllerError::Transport { status: 500, message: None });
}

#[tokio::test]
async fn unreachable_backend_is_network_error() {
    let config = ControllerConfig::default().with_base_url("http://127.0.0.1:1");
    let service = HttpService::new(&config).unwrap();
    let err = service.generate(&request("Mars")).await.unwrap_err();
    assert_eq!(err.kind(), "network");
}

#[tokio::test]
async fn export_pdf_returns_bytes_and_sends_presentation() {
    let (config, seen) = spawn_backend().await;
    let service = HttpService::new(&config).unwrap();
    let preview = service.generate(&request("Mars")).await.unwrap();

    let bytes = service.export(ExportKind::Pdf, &preview).await.unwrap();
    assert_eq!(bytes, b"%PDF-1.7 fake");

    let sent = seen.export_bodies.lock().unwrap()[0].clone();
    assert_eq!(sent["presentation"]["title"], "Mars");
    assert_eq!(sent["presentation"]["slides"][0]["layout"], "centered");
    assert_eq!(sent["presentation"]["slides"][2]["table_data"]["headers"], json!(["A", "B"]));
}

#[tokio::test]
async fn export_failure_ignores_body() {
    let (config, _) = spawn_backend().await;
    let service = HttpService::new(&config).unwrap();
    let preview = service.generate(&request("Mars")).await.unwrap();
    let err = service.export(ExportKind::SlideDeck, &preview).await.unwrap_err();
    assert_eq!(err, ControllerError::Transport { status: 500, message: None });
}

// =============================================================================
// End to end through the controller
// =============================================================================

#[tokio::test]
async fn controller_round_trip_over_http() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let (config, _) = spawn_backend().await;
    let service = HttpService::new(&config).unwrap();
    let controller = PreviewController::new(service, RecordingHost::default(), config);

    assert_eq!(controller.submit_generation_request("Mars", "formal").await, GenerationOutcome::Committed);
    let view = render_preview(&controller.snapshot()).unwrap();
    assert_eq!(view.nav.counter, "Slide 1 of 3");
    assert!(view.surface_style.is_some());

    assert_eq!(controller.request_export(ExportKind::Pdf).await, ExportOutcome::Delivered(ExportKind::Pdf));
    assert_eq!(controller.host().downloads.borrow()[0].filename(), "presentation.pdf");

    assert!(matches!(controller.request_export(ExportKind::SlideDeck).await, ExportOutcome::Failed(_)));
    let state = controller.snapshot();
    assert_eq!(state.page(), Page::Preview);
    assert_eq!(
        state.overlay().map(|active| active.overlay.clone()),
        Some(Overlay::Error("Failed to export PowerPoint".into()))
    );

    let outcome = controller.submit_generation_request("quota", "formal").await;
    assert!(matches!(outcome, GenerationOutcome::Failed(_)));
    assert_eq!(controller.snapshot().page(), Page::Input);
    assert_eq!(
        *controller.host().scheduled.borrow(),
        vec![Duration::from_secs(3), Duration::from_secs(5), Duration::from_secs(5)]
    );
}
