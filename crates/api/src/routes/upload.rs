//! File upload routes.
//!
//! Accepts a multipart form on `POST /upload`, forwards each file to the
//! object store under its own filename, and answers with either the list of
//! public URLs or the list of per-file error messages.

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use bytes::Bytes;
use serde_json::json;
use tracing::{error, info};

use crate::AppState;

/// Form field carrying the uploaded files.
const FILE_FIELD: &str = "files";

/// Creates the upload routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_files))
        // No size limits on uploads; the store is the only bound.
        .route_layer(DefaultBodyLimit::disable())
}

/// POST `/upload`
/// Upload every `files` part of a multipart form to the object store.
///
/// A single failing file never aborts the batch; all outcomes are collected
/// and the whole set is reported at once. Any per-file failure turns the
/// response into a 500 carrying one message per failed file, while the
/// successful uploads remain in the store.
async fn upload_files(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let mut multipart = match multipart {
        Ok(multipart) => multipart,
        Err(rejection) => return bad_request(&rejection.body_text()),
    };

    // Read the whole form before touching the store, so a body that turns
    // out to be malformed mid-stream never causes partial uploads.
    let mut files: Vec<(String, Bytes)> = Vec::new();
    let mut errors: Vec<String> = Vec::new();

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                if field.name() != Some(FILE_FIELD) {
                    continue;
                }
                let Some(filename) = field.file_name().map(ToOwned::to_owned) else {
                    continue;
                };

                match field.bytes().await {
                    Ok(data) => files.push((filename, data)),
                    Err(err) => {
                        let message = err.body_text();
                        error!(file = %filename, error = %message, "Failed to read file part");
                        errors.push(format!("Error opening file {filename}: {message}"));
                    }
                }
            }
            Ok(None) => break,
            Err(err) => return bad_request(&err.body_text()),
        }
    }

    let mut urls: Vec<String> = Vec::with_capacity(files.len());
    for (filename, data) in files {
        match state.store.put(&filename, data).await {
            Ok(url) => {
                info!(file = %filename, url = %url, "File uploaded");
                urls.push(url);
            }
            Err(err) => {
                error!(file = %filename, error = %err, "Failed to upload file");
                errors.push(format!("Error uploading file {filename}: {err}"));
            }
        }
    }

    if errors.is_empty() {
        (StatusCode::OK, Json(json!({ "url": urls }))).into_response()
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": errors })),
        )
            .into_response()
    }
}

/// 400 response for a request whose multipart body cannot be parsed.
fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": message })),
    )
        .into_response()
}
