//! gamesmith-http
//!
//! Blocking HTTP implementation of [`gamesmith_core::Transport`].

use std::time::Duration;

use gamesmith_core::{ApiRequest, ApiResponse, Method, Transport, TransportError};
use reqwest::blocking::Client;
use reqwest::header;
use tracing::debug;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub base_url: String,
    /// `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_owned(),
            timeout: None,
        }
    }
}

/// Sends JSON requests to the game server, one at a time.
pub struct HttpTransport {
    settings: HttpSettings,
    client: Client,
}

impl HttpTransport {
    pub fn new(settings: HttpSettings) -> Result<Self, TransportError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(settings.timeout)
            .default_headers(headers)
            .build()
            .map_err(|error| TransportError::Client(error.to_string()))?;

        Ok(Self { settings, client })
    }

    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.settings.base_url.trim_end_matches('/');
        let suffix = path.trim_start_matches('/');
        format!("{base}/{suffix}")
    }
}

impl Transport for HttpTransport {
    fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.endpoint(&request.path);
        let path = request.path;
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        if let Some(body) = request.body.as_ref() {
            builder = builder.json(body);
        }

        debug!(method = %request.method, %url, "http request");
        let response = builder.send().map_err(|error| {
            if error.is_timeout() {
                TransportError::Timeout { path: path.clone() }
            } else {
                TransportError::Request {
                    path: path.clone(),
                    message: error.to_string(),
                }
            }
        })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|error| TransportError::Body {
            path: path.clone(),
            message: error.to_string(),
        })?;
        debug!(status, %path, "http response");
        Ok(ApiResponse { status, body })
    }
}
