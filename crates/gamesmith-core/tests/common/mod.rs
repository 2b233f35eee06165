use std::collections::VecDeque;

use gamesmith_core::{ApiRequest, ApiResponse, Transport, TransportError};
use gamesmith_domain::{Session, TemplateId, UserId};

/// Replays canned responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: VecDeque<Result<ApiResponse, TransportError>>,
    pub sent: Vec<ApiRequest>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, status: u16, body: &str) -> Self {
        self.responses.push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn question(self, status: u16, text: &str) -> Self {
        let body = serde_json::json!({ "designQuestion": text }).to_string();
        self.respond(status, &body)
    }

    pub fn fail(mut self, path: &str) -> Self {
        self.responses.push_back(Err(TransportError::Request {
            path: path.into(),
            message: "connection refused".into(),
        }));
        self
    }

    pub fn paths(&self) -> Vec<&str> {
        self.sent.iter().map(|request| request.path.as_str()).collect()
    }
}

impl Transport for ScriptedTransport {
    fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.sent.push(request);
        self.responses
            .pop_front()
            .unwrap_or_else(|| {
                panic!("no scripted response for request #{}", self.sent.len())
            })
    }
}

pub fn session() -> Session {
    Session::for_template(UserId::new("user-1"), TemplateId::new("42"))
}
