//! Web front end for the visualizer.
//!
//! Upload a `.vil` file, optionally rename a keycode in one layer, and get
//! back a PNG plus an interactive HTML page.
//!
//! # Endpoints
//!
//! - `GET /` - Upload form (flash message from `?flash=&level=`)
//! - `POST /upload` - Multipart upload: `file`, `rename_layer`, `rename_old`, `rename_new`
//! - `GET /download/{filename}` - Generated file as an attachment
//! - `GET /view/{filename}` - Generated file inline
//! - `GET /interactive/{filename}` - Generated HTML page
//! - `GET /about` - About page
//! - `GET /health` - Health check

pub mod static_files;

use std::net::SocketAddr;
use std::path::{Path as FsPath, PathBuf};
use std::sync::{Arc, LazyLock};

use anyhow::Context;
use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use uuid::Uuid;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::export::InteractiveRenderer;
use crate::parser::compute_dimensions;
use crate::services::{LayoutService, RenameRequest};
use static_files::{file_response, page_response};

/// Upload extensions accepted by `POST /upload` (compared case-insensitively).
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["vil", "json"];

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Where uploads are stored
    upload_dir: PathBuf,
    /// Where generated artifacts are written and served from
    output_dir: PathBuf,
}

impl AppState {
    /// Creates the state, making sure the upload and output directories exist.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let upload_dir = config.paths.upload_dir.clone();
        let output_dir = config.paths.output_dir.clone();

        for dir in [&upload_dir, &output_dir] {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }

        Ok(Self {
            config: Arc::new(config),
            upload_dir,
            output_dir,
        })
    }

    /// Returns the directory generated files are served from.
    #[must_use]
    pub fn output_dir(&self) -> &FsPath {
        &self.output_dir
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Flash message carried through the index page query string.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    /// Message text
    pub flash: Option<String>,
    /// `error` or `success`
    pub level: Option<String>,
}

/// Fields collected from the upload form.
#[derive(Debug, Default)]
struct UploadForm {
    file: Option<(String, Vec<u8>)>,
    rename_layer: Option<String>,
    rename_old: Option<String>,
    rename_new: Option<String>,
}

/// Names of the artifacts produced for one upload.
#[derive(Debug)]
struct UploadOutcome {
    image_filename: String,
    html_filename: String,
    num_layers: usize,
}

/// Reasons an upload is sent back to the index page.
#[derive(Debug, Error)]
enum UploadError {
    #[error("No file uploaded")]
    NoFile,
    #[error("No file selected")]
    NoSelection,
    #[error("Invalid file type. Please upload a .vil or .json file")]
    InvalidType,
    #[error("File too large (limit is {limit} bytes)")]
    TooLarge { limit: usize },
    #[error("No layers to visualize")]
    NoLayers,
    #[error("Error processing file: {0:#}")]
    Processing(#[from] anyhow::Error),
}

impl UploadError {
    fn from_multipart(err: MultipartError, limit: usize) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::TooLarge { limit }
        } else {
            Self::Processing(anyhow::anyhow!(err.body_text()))
        }
    }
}

// ============================================================================
// Filename Handling (Security)
// ============================================================================

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("static regex is valid"));

/// Validates a filename taken from a URL to prevent path traversal.
fn validate_filename(filename: &str) -> Result<&str, &'static str> {
    if filename.is_empty() {
        return Err("Filename cannot be empty");
    }

    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        return Err("Invalid filename: path traversal not allowed");
    }

    if filename.starts_with('.') {
        return Err("Invalid filename: hidden files not allowed");
    }

    Ok(filename)
}

/// Reduces an uploaded file name to a safe ASCII name.
///
/// Path separators and whitespace become `_`, anything outside
/// `[A-Za-z0-9_.-]` is dropped, and leading/trailing `.`/`_` are trimmed.
/// The result may be empty.
#[must_use]
pub fn secure_filename(filename: &str) -> String {
    let spaced = filename.replace(['/', '\\'], " ");
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let cleaned = UNSAFE_FILENAME_CHARS.replace_all(&joined, "");
    cleaned.trim_matches(['.', '_']).to_string()
}

/// True when the name ends in one of [`ALLOWED_EXTENSIONS`].
#[must_use]
pub fn allowed_file(filename: &str) -> bool {
    filename.rsplit_once('.').is_some_and(|(_, ext)| {
        ALLOWED_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    })
}

/// Redirects to the index page carrying a flash message.
fn flash_redirect(message: &str, level: &str) -> Response {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("flash", message)
        .append_pair("level", level)
        .finish();
    Redirect::to(&format!("/?{query}")).into_response()
}

// ============================================================================
// Upload Pipeline
// ============================================================================

async fn read_upload_form(
    mut multipart: Multipart,
    limit: usize,
) -> Result<UploadForm, UploadError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::from_multipart(e, limit))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| UploadError::from_multipart(e, limit))?;
                form.file = Some((filename, data.to_vec()));
            }
            "rename_layer" | "rename_old" | "rename_new" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| UploadError::from_multipart(e, limit))?;
                match name.as_str() {
                    "rename_layer" => form.rename_layer = Some(value),
                    "rename_old" => form.rename_old = Some(value),
                    _ => form.rename_new = Some(value),
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

async fn process_upload(state: &AppState, form: UploadForm) -> Result<UploadOutcome, UploadError> {
    let (original_name, data) = form.file.ok_or(UploadError::NoFile)?;
    if original_name.is_empty() {
        return Err(UploadError::NoSelection);
    }

    let filename = secure_filename(&original_name);
    if !allowed_file(&original_name) || !allowed_file(&filename) {
        return Err(UploadError::InvalidType);
    }

    let id = Uuid::new_v4().simple().to_string();
    let stem = FsPath::new(&filename)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let upload_path = state.upload_dir.join(format!("{id}_{filename}"));
    tokio::fs::write(&upload_path, &data)
        .await
        .with_context(|| format!("Failed to store upload {filename}"))?;
    info!("File uploaded: {}", filename);

    // An unparsable layer index counts as absent
    let rename = RenameRequest::from_parts(
        form.rename_layer
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok()),
        form.rename_old.as_deref(),
        form.rename_new.as_deref(),
    );

    let image_filename = format!("visualization_{stem}_{id}.png");
    let html_filename = format!("visualization_{stem}_{id}.html");
    let png_path = state.output_dir.join(&image_filename);
    let html_path = state.output_dir.join(&html_filename);
    let image_link = format!("/view/{image_filename}");
    let render = state.config.render.clone();

    let num_layers = tokio::task::spawn_blocking(move || -> anyhow::Result<usize> {
        let mut layers = LayoutService::load_layers(&upload_path)?;

        if let Some(request) = rename {
            layers = request.apply(layers);
            info!(
                "Applied transformation: layer {}, {} -> {}",
                request.layer, request.old, request.new
            );
        }

        let dims = compute_dimensions(&layers);
        let renderer = render.image_renderer()?;
        if !renderer.save(&layers, dims, &png_path)? {
            return Ok(0);
        }

        InteractiveRenderer::new(renderer.cell_px()).save(
            &layers,
            dims,
            Some(&image_link),
            &html_path,
        )?;

        Ok(layers.len())
    })
    .await
    .context("Rendering task failed")??;

    if num_layers == 0 {
        return Err(UploadError::NoLayers);
    }

    info!("Visualizations created: {}, {}", image_filename, html_filename);

    Ok(UploadOutcome {
        image_filename,
        html_filename,
        num_layers,
    })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET / - Upload form.
async fn index(Query(query): Query<FlashQuery>) -> Response {
    info!("Index page accessed");

    let flash = query.flash.unwrap_or_default();
    let level = match query.level.as_deref() {
        Some("success") => "success",
        _ => "error",
    };
    let hidden = if flash.is_empty() { "hidden" } else { "" };

    page_response(
        "index.html",
        &[
            ("flash_hidden", hidden.to_string()),
            ("flash_level", level.to_string()),
            ("flash", flash),
        ],
    )
}

/// POST /upload - Store, transform and render an uploaded layout.
async fn upload(State(state): State<AppState>, multipart: Multipart) -> Response {
    let limit = state.config.web.max_upload_bytes;
    let result = match read_upload_form(multipart, limit).await {
        Ok(form) => process_upload(&state, form).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(outcome) => page_response(
            "result.html",
            &[
                ("image_filename", outcome.image_filename),
                ("html_filename", outcome.html_filename),
                ("num_layers", outcome.num_layers.to_string()),
            ],
        ),
        Err(err) => {
            error!("Upload rejected: {}", err);
            flash_redirect(&err.to_string(), "error")
        }
    }
}

/// GET /download/{filename} - Generated file as an attachment.
async fn download(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    let Ok(name) = validate_filename(&filename) else {
        return flash_redirect("File not found", "error");
    };

    match tokio::fs::read(state.output_dir.join(name)).await {
        Ok(content) => {
            info!("File download: {}", name);
            file_response(name, content, true)
        }
        Err(e) => {
            error!("Error downloading file {}: {}", name, e);
            flash_redirect("File not found", "error")
        }
    }
}

/// GET /view/{filename} - Generated file displayed inline.
async fn view(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    let Ok(name) = validate_filename(&filename) else {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    };

    match tokio::fs::read(state.output_dir.join(name)).await {
        Ok(content) => file_response(name, content, false),
        Err(e) => {
            error!("Error viewing file {}: {}", name, e);
            (StatusCode::NOT_FOUND, "File not found").into_response()
        }
    }
}

/// GET /interactive/{filename} - Generated HTML page as the response body.
async fn interactive(State(state): State<AppState>, Path(filename): Path<String>) -> Response {
    let Ok(name) = validate_filename(&filename) else {
        return (StatusCode::NOT_FOUND, "File not found").into_response();
    };

    match tokio::fs::read_to_string(state.output_dir.join(name)).await {
        Ok(content) => Html(content).into_response(),
        Err(e) => {
            error!("Error loading interactive view {}: {}", name, e);
            (StatusCode::NOT_FOUND, "File not found").into_response()
        }
    }
}

/// GET /about - About page.
async fn about() -> Response {
    page_response(
        "about.html",
        &[("version", env!("CARGO_PKG_VERSION").to_string())],
    )
}

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let body_limit = state.config.web.max_upload_bytes;

    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .route("/download/{filename}", get(download))
        .route("/view/{filename}", get(view))
        .route("/interactive/{filename}", get(interactive))
        .route("/about", get(about))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server until it is stopped.
///
/// # Errors
///
/// Returns an error if the directories cannot be created or the address
/// cannot be bound.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(config)?;
    let app = create_router(state);

    info!("Starting {} web server on {}", APP_NAME, addr);
    info!("Server running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
