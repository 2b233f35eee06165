//! Request channel contract shared by every controller.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, TransportError};

/// Server paths consumed by the wizards.
pub mod endpoints {
    pub const CREATE_BUILDER: &str = "/game/create-builder";
    pub const MAKE_DESIGN_CHOICE: &str = "/game/make-design-choice";
    pub const CANCEL_BUILDER: &str = "/game/cancel-builder";
    pub const DEFAULT_ATTR_MAP: &str = "/template/default-attr-map";
    pub const CREATE_TEMPLATE: &str = "/template/create";
    pub const ALL_TEMPLATES: &str = "/template/all-templates";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path plus optional query string, relative to the server root.
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post_json<B: Serialize>(path: impl Into<String>, body: &B) -> Result<Self, ApiError> {
        Ok(Self {
            method: Method::Post,
            path: path.into(),
            body: Some(serde_json::to_value(body)?),
        })
    }
}

/// Status line and raw body of a completed request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body)
            .map_err(|err| ApiError::Malformed(err.to_string()))
    }

    /// Maps a status the caller has no specific handling for onto [`ApiError`].
    pub fn into_error(self) -> ApiError {
        let message = self.body.trim().to_string();
        match self.status {
            400 => ApiError::InvalidInput(message),
            403 => ApiError::Conflict(message),
            404 => ApiError::NotFound(message),
            status => ApiError::UnexpectedStatus {
                status,
                body: message,
            },
        }
    }
}

/// Issues one request at a time and reports its completion exactly once.
///
/// `send` takes `&mut self`, so a transport can never have two requests in
/// flight. There is no retry and no abort; a later request is just a later
/// call.
pub trait Transport {
    fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).send(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_map_to_error_classes() {
        assert!(matches!(
            ApiResponse::new(400, "bad").into_error(),
            ApiError::InvalidInput(message) if message == "bad"
        ));
        assert!(matches!(
            ApiResponse::new(403, "").into_error(),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiResponse::new(404, "").into_error(),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiResponse::new(500, "boom\n").into_error(),
            ApiError::UnexpectedStatus { status: 500, body } if body == "boom"
        ));
    }

    #[test]
    fn decode_reports_malformed_bodies() {
        let response = ApiResponse::new(200, "not json");
        let result: Result<Value, _> = response.decode();
        assert!(matches!(result, Err(ApiError::Malformed(_))));
    }
}
