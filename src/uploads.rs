//! Serves uploaded photos at the `/uploads` URL prefix.
//!
//! Files are served byte-for-byte from `<app_root>/uploads`. The request
//! path is validated before any filesystem access: traversal components are
//! rejected outright, and the resolved path must stay inside the uploads
//! directory after canonicalization.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap},
    response::IntoResponse,
};
use std::path::{Component, PathBuf};
use tokio::fs;

use crate::app::AppState;
use crate::error::{AppError, Result};

pub async fn serve_upload(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse> {
    let relative = sanitize_request_path(&path)
        .ok_or_else(|| AppError::BadRequest("Invalid file path".to_string()))?;

    let uploads_root = state.config.uploads_root();
    let root = uploads_root.canonicalize().map_err(|_| AppError::NotFound)?;

    // Canonicalize fails for files that do not exist, which doubles as the
    // missing-file check.
    let file_path = root.join(relative).canonicalize().map_err(|_| AppError::NotFound)?;
    if !file_path.starts_with(&root) {
        return Err(AppError::BadRequest("Invalid file path".to_string()));
    }

    let data = fs::read(&file_path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::NotFound,
        _ => AppError::Io(e),
    })?;

    let mut headers = HeaderMap::new();
    let content_type = content_type_for(&file_path);
    if let Ok(value) = content_type.parse() {
        headers.insert(header::CONTENT_TYPE, value);
    }

    Ok((headers, Bytes::from(data)))
}

/// Validate a request path and turn it into a relative filesystem path.
/// Returns `None` for anything that is not a plain chain of normal
/// components (absolute paths, `..`, `.`, empty segments, embedded NULs).
fn sanitize_request_path(path: &str) -> Option<PathBuf> {
    if path.is_empty() || path.contains('\0') || path.contains('\\') {
        return None;
    }

    let candidate = PathBuf::from(path);
    let mut clean = PathBuf::new();
    for component in candidate.components() {
        match component {
            Component::Normal(part) => clean.push(part),
            _ => return None,
        }
    }

    if clean.as_os_str().is_empty() {
        None
    } else {
        Some(clean)
    }
}

fn content_type_for(path: &std::path::Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "heic" => "image/heic",
        "heif" => "image/heif",
        _ => "application/octet-stream",
    }
}
