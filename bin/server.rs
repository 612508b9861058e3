// Conference Hub - Web Server
// REST API over the normalized conference graphs and the resource store

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use conference_hub::{
    discover_providers, etag, Conference, ConferenceService, ResourceStore, Styles,
};
use serde::Serialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

/// Shared application state
#[derive(Clone)]
struct AppState {
    service: Arc<ConferenceService>,
    store: Arc<ResourceStore>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(message.into()),
        }
    }
}

/// Conference response (summary for listings)
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConferenceSummary {
    id: String,
    name: String,
    event_count: usize,
    speaker_count: usize,
    track_count: usize,
}

impl From<&Arc<Conference>> for ConferenceSummary {
    fn from(conference: &Arc<Conference>) -> Self {
        Self {
            id: conference.id.clone(),
            name: conference.name.clone(),
            event_count: conference.events.len(),
            speaker_count: conference.speakers.len(),
            track_count: conference.meta_data.tracks.len(),
        }
    }
}

/// Path parameters arrive percent-encoded; conference ids may contain spaces
fn decode_id(id: &str) -> String {
    urlencoding::decode(id)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| id.to_string())
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/conferences - List normalized conferences
async fn list_conferences(State(state): State<AppState>) -> impl IntoResponse {
    let summaries: Vec<ConferenceSummary> = state.service.list().iter().map(Into::into).collect();
    Json(ApiResponse::ok(summaries))
}

/// GET /api/conferences/:id - Full normalized conference graph
async fn get_conference(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    match state.service.read(&decode_id(&id)) {
        Some(conference) => Json(conference.as_ref()).into_response(),
        None => not_found("conference"),
    }
}

/// GET /api/conferences/:id/styles - Theme colors
async fn get_styles(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.styles_for(&decode_id(&id)) {
        Some(styles) => Json(ApiResponse::<Styles>::ok(styles)).into_response(),
        None => not_found("styles"),
    }
}

/// GET /api/conferences/:id/logo - Conference logo
async fn get_logo(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.store.logo(&decode_id(&id)) {
        Some(image) => image_response(image),
        None => not_found("logo"),
    }
}

/// GET /api/conferences/:id/speakers/:speaker_id/photo - Speaker portrait
async fn get_speaker_photo(
    State(state): State<AppState>,
    Path((id, speaker_id)): Path<(String, String)>,
) -> Response {
    match state.store.speaker_photo(&decode_id(&id), &speaker_id) {
        Some(image) => image_response(image),
        None => not_found("speaker photo"),
    }
}

/// GET /api/conferences/:id/languages/:language_id/icon - Language icon
async fn get_language_icon(
    State(state): State<AppState>,
    Path((id, language_id)): Path<(String, String)>,
) -> Response {
    match state.store.language_icon(&decode_id(&id), &language_id) {
        Some(image) => image_response(image),
        None => not_found("language icon"),
    }
}

fn not_found(what: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::err(format!("{what} not found"))),
    )
        .into_response()
}

fn image_response(image: Vec<u8>) -> Response {
    let tag = etag(&image);
    (
        [
            (header::CONTENT_TYPE, content_type(&image).to_string()),
            (header::ETAG, format!("\"{tag}\"")),
        ],
        image,
    )
        .into_response()
}

/// Sniff the image format; store lookups drop the file extension
fn content_type(image: &[u8]) -> &'static str {
    if image.starts_with(b"\x89PNG") {
        "image/png"
    } else if image.starts_with(b"\xff\xd8") {
        "image/jpeg"
    } else if image.starts_with(b"GIF8") {
        "image/gif"
    } else if image.starts_with(b"<svg") || image.starts_with(b"<?xml") {
        "image/svg+xml"
    } else {
        "application/octet-stream"
    }
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() {
    println!("🌐 Conference Hub - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let args: Vec<String> = std::env::args().collect();
    let data_dir = args.get(1).map(String::as_str).unwrap_or("data");
    let resource_dir = args.get(2).map(String::as_str).unwrap_or("resources");

    let dir = std::path::Path::new(data_dir);
    if !dir.is_dir() {
        eprintln!("❌ Data directory not found: {}", dir.display());
        eprintln!("   Usage: conference-server [data-dir] [resource-dir]");
        std::process::exit(1);
    }

    let providers = discover_providers(dir).expect("Failed to scan data directory");
    println!("✓ Found {} conference document(s)", providers.len());

    let service = ConferenceService::from_providers(&providers);
    println!("✓ Normalized {} conference(s)", service.list().len());
    for failure in service.failures() {
        eprintln!("⚠️  Skipped: {failure}");
    }

    // Create shared state
    let state = AppState {
        service: Arc::new(service),
        store: Arc::new(ResourceStore::new(resource_dir)),
    };

    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/conferences", get(list_conferences))
        .route("/conferences/:id", get(get_conference))
        .route("/conferences/:id/styles", get(get_styles))
        .route("/conferences/:id/logo", get(get_logo))
        .route(
            "/conferences/:id/speakers/:speaker_id/photo",
            get(get_speaker_photo),
        )
        .route(
            "/conferences/:id/languages/:language_id/icon",
            get(get_language_icon),
        )
        .with_state(state);

    // Build main router
    let app = Router::new()
        .nest("/api", api_routes)
        .layer(ServiceBuilder::new().layer(CorsLayer::permissive()));

    // Start server
    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:3000");
    println!("   API: http://localhost:3000/api/conferences");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
