use axum::{
    body::Body,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::constants::MAX_CONTENT_LENGTH;
use crate::error::{AppError, Result};

/// Reject requests whose declared body exceeds the upload limit before any
/// handler runs or any body bytes are read. Bodies without a Content-Length
/// header are bounded separately by the router's `DefaultBodyLimit`.
pub async fn content_length_guard(request: Request<Body>, next: Next) -> Result<Response> {
    if let Some(content_length) = request.headers().get(header::CONTENT_LENGTH) {
        if let Some(length) = content_length
            .to_str()
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
        {
            if length > MAX_CONTENT_LENGTH {
                return Err(AppError::PayloadTooLarge(format!(
                    "Content-Length {} exceeds maximum request size of {} bytes",
                    length, MAX_CONTENT_LENGTH
                )));
            }
        }
    }

    Ok(next.run(request).await)
}
