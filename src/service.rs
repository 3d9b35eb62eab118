//! Request/response boundary around the [Paraphraser].
//!
//! Validates raw request parameters, runs the engine and wraps the result
//! in a JSON envelope:
//!
//! ```json
//! { "paraphrases": [ { "tree": "(S (NP ...) (VP ...))" }, ... ] }
//! ```
//!
//! Failures become `{ "error": "..." }` with an HTTP-style status code.
//! The transport (HTTP server, CLI, ...) is up to the caller.

use crate::paraphrase::{DEFAULT_LIMIT, ParaphraseError, Paraphraser};
use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use thiserror::Error;
use tracing::{debug, error, info};

/// Status code for invalid requests, including malformed trees
pub const STATUS_BAD_REQUEST: u16 = 400;

/// Status code for failures that are not the caller's fault
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Status code for success
pub const STATUS_OK: u16 = 200;

// ============================================================================
// Errors
// ============================================================================
/// Invalid request parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("The 'tree' parameter is required.")]
    MissingParameter,

    #[error("The 'limit' parameter must be an integer.")]
    BadInteger { value: String },
}

/// Any failure while serving a request.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Paraphrase(#[from] ParaphraseError),
}

impl ServiceError {
    /// HTTP-style status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Request(_) => STATUS_BAD_REQUEST,
            ServiceError::Paraphrase(err) if err.is_structural_mismatch() => STATUS_INTERNAL_ERROR,
            ServiceError::Paraphrase(_) => STATUS_BAD_REQUEST,
        }
    }

    /// Error envelope for this error.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
        }
    }
}

// ============================================================================
// Request & Responses
// ============================================================================
/// A validated paraphrase request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParaphraseRequest {
    pub tree: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT
}

impl ParaphraseRequest {
    /// Creates a request from already validated values.
    pub fn new<S: Into<String>>(tree: S, limit: i64) -> Self {
        Self {
            tree: tree.into(),
            limit,
        }
    }

    /// Validates raw request parameters.
    ///
    /// # Errors
    /// * [RequestError::MissingParameter] if `tree` is absent or empty
    /// * [RequestError::BadInteger] if `limit` is present but not an integer;
    ///   an absent `limit` defaults to 20
    pub fn from_params(tree: Option<&str>, limit: Option<&str>) -> Result<Self, RequestError> {
        let tree = match tree {
            Some(tree) if !tree.is_empty() => tree,
            _ => return Err(RequestError::MissingParameter),
        };

        Ok(Self::new(tree, parse_limit(limit)?))
    }
}

/// Parses a raw `limit` parameter, defaulting to 20 when absent.
///
/// Surrounding whitespace is ignored. Integers beyond the range of `i64`
/// are clamped to `i64::MAX` or `i64::MIN`.
pub fn parse_limit(limit: Option<&str>) -> Result<i64, RequestError> {
    let Some(value) = limit else {
        return Ok(DEFAULT_LIMIT);
    };

    match value.trim().parse::<i64>() {
        Ok(limit) => Ok(limit),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(RequestError::BadInteger {
                value: value.to_string(),
            }),
        },
    }
}

/// One paraphrase in the response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParaphraseRecord {
    pub tree: String,
}

/// Successful response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParaphraseResponse {
    pub paraphrases: Vec<ParaphraseRecord>,
}

impl ParaphraseResponse {
    /// Wraps serialized paraphrase trees.
    pub fn from_trees<I: IntoIterator<Item = String>>(trees: I) -> Self {
        Self {
            paraphrases: trees.into_iter().map(|tree| ParaphraseRecord { tree }).collect(),
        }
    }
}

/// Failure response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Status code plus JSON body, ready to be sent by any transport.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ServiceResponse {
    /// Serializes `body` into a response with the given status.
    ///
    /// A body that fails to serialize becomes a 500 error response.
    fn from_body<T: Serialize>(status: u16, body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status, body },
            Err(err) => {
                error!(error = %err, "Failed to serialize response body");
                Self {
                    status: STATUS_INTERNAL_ERROR,
                    body: serde_json::json!({ "error": err.to_string() }),
                }
            }
        }
    }

    /// Body as JSON with two-space indentation; non-ASCII stays as is.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.body)
    }
}

// ============================================================================
// Handling
// ============================================================================
/// Serves a validated request.
///
/// Paraphrases are always serialized on a single line each.
pub fn handle(request: &ParaphraseRequest) -> Result<ParaphraseResponse, ServiceError> {
    info!(limit = request.limit, tree_len = request.tree.len(), "Handling paraphrase request");
    let paraphrases = Paraphraser::new()
        .with_limit(request.limit)
        .generate(&request.tree)?;
    Ok(ParaphraseResponse::from_trees(paraphrases))
}

/// Validates raw parameters, serves the request and builds the response.
///
/// # Example
/// ```
/// use coordswap::service::respond;
///
/// let response = respond(None, Some("3"));
/// assert_eq!(response.status, 400);
/// assert_eq!(response.body["error"], "The 'tree' parameter is required.");
/// ```
pub fn respond(tree: Option<&str>, limit: Option<&str>) -> ServiceResponse {
    let result = ParaphraseRequest::from_params(tree, limit)
        .map_err(ServiceError::from)
        .and_then(|request| handle(&request));

    match result {
        Ok(response) => ServiceResponse::from_body(STATUS_OK, &response),
        Err(err) => {
            debug!(error = %err, "Paraphrase request failed");
            ServiceResponse::from_body(err.status_code(), &err.to_response())
        }
    }
}
