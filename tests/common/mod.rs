#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use gamesmith_core::{ApiRequest, ApiResponse, Transport, TransportError};
use gamesmith_domain::{Session, TemplateId, UserId};

/// Replays canned responses in order and records every request.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: VecDeque<ApiResponse>,
    pub sent: Vec<ApiRequest>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, status: u16, body: &str) -> Self {
        self.responses.push_back(ApiResponse::new(status, body));
        self
    }

    pub fn question(self, status: u16, text: &str) -> Self {
        let body = serde_json::json!({ "designQuestion": text }).to_string();
        self.respond(status, &body)
    }

    pub fn paths(&self) -> Vec<&str> {
        self.sent.iter().map(|request| request.path.as_str()).collect()
    }
}

impl Transport for ScriptedTransport {
    fn send(&mut self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.sent.push(request);
        Ok(self
            .responses
            .pop_front()
            .unwrap_or_else(|| {
                panic!("no scripted response for request #{}", self.sent.len())
            }))
    }
}

pub fn session() -> Session {
    Session::for_template(UserId::new("user-1"), TemplateId::new("42"))
}

pub struct Captured {
    pub request_line: String,
    pub body: String,
}

/// Local HTTP server answering each connection with the next canned reply.
pub fn spawn_stub(responses: Vec<(u16, String)>) -> (String, mpsc::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let address = listener.local_addr().expect("stub local addr");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("read request line");
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("read header");
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap_or(0);
                    }
                }
            }
            let mut buffer = vec![0u8; content_length];
            reader.read_exact(&mut buffer).expect("read body");

            let mut stream = stream;
            let reply = format!(
                "HTTP/1.1 {status} Stub\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).expect("write reply");
            stream.flush().ok();

            let _ = tx.send(Captured {
                request_line: request_line.trim_end().to_string(),
                body: String::from_utf8(buffer).expect("utf8 body"),
            });
        }
    });

    (format!("http://{address}"), rx)
}
