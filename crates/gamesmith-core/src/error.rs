use gamesmith_domain::HistoryError;
use thiserror::Error;

use crate::wizard::WizardState;

/// Failures below the HTTP status line: connecting, timing out, reading.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP client could not be built: {0}")]
    Client(String),
    #[error("request to {path} failed: {message}")]
    Request { path: String, message: String },
    #[error("request to {path} timed out")]
    Timeout { path: String },
    #[error("response from {path} could not be read: {message}")]
    Body { path: String, message: String },
}

/// Server outcomes the caller did not ask for, grouped by status class.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("server rejected the input: {0}")]
    InvalidInput(String),
    #[error("request conflicts with the current state: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("malformed response body: {0}")]
    Malformed(String),
    #[error("request body could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("{0}")]
    Validation(String),
    #[error("cannot {operation} while the builder is {state}")]
    InvalidState {
        operation: &'static str,
        state: WizardState,
    },
    #[error("no template selected for this session")]
    MissingTemplate,
    #[error("failed to start the game builder: {0}")]
    StartFailed(#[source] ApiError),
    #[error("prompt history: {0}")]
    History(#[from] HistoryError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("{0}")]
    Validation(String),
    #[error("unknown attribute `{0}`")]
    UnknownOption(String),
    #[error("attribute `{0}` is disabled while multiple choice is off")]
    OptionDisabled(String),
    #[error("invalid game genre `{0}`")]
    InvalidGenre(String),
    #[error("there's an invalid attribute or value: {0}")]
    InvalidAttribute(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}
