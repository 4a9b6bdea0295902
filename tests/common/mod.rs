//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use network_observer::observe::IdGenerator;
use network_observer::report::{NetworkReporter, RequestRecord, ResponseRecord};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize a test tracing subscriber. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "network_observer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Reporter that collects records in memory for assertions.
#[derive(Default)]
pub struct CollectingReporter {
    requests: Mutex<Vec<RequestRecord>>,
    responses: Mutex<Vec<ResponseRecord>>,
}

impl CollectingReporter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requests(&self) -> Vec<RequestRecord> {
        self.requests.lock().unwrap().clone()
    }

    pub fn responses(&self) -> Vec<ResponseRecord> {
        self.responses.lock().unwrap().clone()
    }
}

impl NetworkReporter for CollectingReporter {
    fn report_request(&self, record: RequestRecord) {
        self.requests.lock().unwrap().push(record);
    }

    fn report_response(&self, record: ResponseRecord) {
        self.responses.lock().unwrap().push(record);
    }
}

/// Identifier source yielding "call-1", "call-2", ... for deterministic
/// assertions.
pub struct SequenceIds(AtomicU64);

impl SequenceIds {
    pub fn new() -> Arc<Self> {
        Arc::new(Self(AtomicU64::new(0)))
    }
}

impl IdGenerator for SequenceIds {
    fn next_id(&self) -> String {
        format!("call-{}", self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

/// One request as the mock backend saw it on the wire.
pub struct ReceivedRequest {
    /// Raw request line and headers.
    pub head: String,
    /// Request body bytes, complete per the declared content length.
    pub body: Vec<u8>,
}

/// Scripted response for the mock backend.
pub struct ResponseScript {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
    truncate_body_at: Option<usize>,
}

impl ResponseScript {
    /// A 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: body.into(),
            truncate_body_at: None,
        }
    }

    #[allow(dead_code)]
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    #[allow(dead_code)]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// Declare the full body length but write only the first `n` bytes
    /// before closing the connection mid-stream.
    #[allow(dead_code)]
    pub fn with_truncated_body(mut self, n: usize) -> Self {
        self.truncate_body_at = Some(n);
        self
    }

    fn render(&self) -> Vec<u8> {
        let status_text = match self.status {
            200 => "200 OK",
            201 => "201 Created",
            204 => "204 No Content",
            404 => "404 Not Found",
            429 => "429 Too Many Requests",
            500 => "500 Internal Server Error",
            502 => "502 Bad Gateway",
            503 => "503 Service Unavailable",
            _ => "200 OK",
        };

        let mut head = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n",
            status_text,
            self.body.len()
        );
        for (name, value) in &self.headers {
            head.push_str(&format!("{}: {}\r\n", name, value));
        }
        head.push_str("\r\n");

        let mut payload = head.into_bytes();
        match self.truncate_body_at {
            Some(n) => payload.extend_from_slice(&self.body[..n.min(self.body.len())]),
            None => payload.extend_from_slice(&self.body),
        }
        payload
    }
}

/// Start a mock backend on an ephemeral port that answers every
/// connection with the scripted response and records what it received.
pub async fn start_scripted_backend(
    script: ResponseScript,
) -> (SocketAddr, Arc<Mutex<Vec<ReceivedRequest>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_handle = received.clone();
    let script = Arc::new(script);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let script = script.clone();
                    let received = received_handle.clone();
                    tokio::spawn(async move {
                        let request = read_http_request(&mut socket).await;
                        received.lock().unwrap().push(request);
                        let _ = socket.write_all(&script.render()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, received)
}

/// Read one HTTP/1.1 request from the socket: head up to the blank line,
/// then as many body bytes as the content length declares.
async fn read_http_request(socket: &mut TcpStream) -> ReceivedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_end;
    loop {
        if let Some(end) = find_head_end(&buf) {
            head_end = end;
            break;
        }
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            head_end = buf.len();
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let content_length = parse_content_length(&head);
    let mut body = buf[head_end..].to_vec();
    while body.len() < content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    ReceivedRequest { head, body }
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n").map(|p| p + 4)
}

fn parse_content_length(head: &str) -> usize {
    head.lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}
