use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use codedoc_core::CodeRequest;
use log::{error, info};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::error::Error;
use crate::model::Generator;
use crate::pipeline;

pub const DOCUMENTED_CODE_FAILURE: &str = "Failed to generate documented code";
pub const MARKDOWN_DOCS_FAILURE: &str = "Failed to generate markdown docs";

#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentedCode {
    pub documented: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MarkdownDocs {
    pub markdown: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Health {
    pub status: String,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

/// Parse a request body as JSON whatever its `Content-Type`.
fn parse_request(body: &[u8]) -> Result<CodeRequest, Error> {
    serde_json::from_slice(body).map_err(|e| Error::InvalidBody(e.to_string()))
}

pub async fn generate_documented_code<G: Generator>(
    State(state): State<Arc<AppState<G>>>,
    body: Bytes,
) -> Response {
    let result = match parse_request(&body) {
        Ok(request) => pipeline::document_code(&state.generator, &request).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(documented) => {
            info!("Generated documented code ({} chars)", documented.len());
            (StatusCode::OK, Json(DocumentedCode { documented })).into_response()
        }
        Err(err) => failure(err, DOCUMENTED_CODE_FAILURE),
    }
}

pub async fn generate_markdown_docs<G: Generator>(
    State(state): State<Arc<AppState<G>>>,
    body: Bytes,
) -> Response {
    let result = match parse_request(&body) {
        Ok(request) => pipeline::generate_markdown_docs(&state.generator, &request).await,
        Err(err) => Err(err),
    };

    match result {
        Ok(markdown) => {
            info!("Generated markdown docs ({} chars)", markdown.len());
            (StatusCode::OK, Json(MarkdownDocs { markdown })).into_response()
        }
        Err(err) => failure(err, MARKDOWN_DOCS_FAILURE),
    }
}

/// Map a pipeline error to its HTTP response.
///
/// Validation errors carry their own message. Anything else is logged and
/// answered with the endpoint's generic message; the cause stays server-side.
fn failure(err: Error, generic_message: &str) -> Response {
    let (status, message) = match err {
        Error::Validation(validation) => (StatusCode::BAD_REQUEST, validation.to_string()),
        other => {
            error!("{generic_message}: {other}");
            (StatusCode::INTERNAL_SERVER_ERROR, generic_message.to_string())
        }
    };

    (status, Json(ErrorBody { error: message })).into_response()
}
