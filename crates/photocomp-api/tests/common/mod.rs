#![allow(dead_code)]

//! In-process HTTP stub for exercising the client end to end.
//!
//! The stub answers scripted responses in request order and records what
//! it saw, so tests assert on both the decoded results and the exact
//! requests that went over the wire.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// One canned HTTP response.
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn error(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// What the stub saw for one request.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Path plus query string, exactly as sent.
    pub target: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// Minimal HTTP/1.1 server answering from a fixed response queue.
pub struct StubApi {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    server: JoinHandle<()>,
}

impl StubApi {
    /// Bind an ephemeral port and serve the given responses in order.
    pub async fn start(responses: Vec<Canned>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind stub listener");
        let addr = listener.local_addr().expect("stub listener has no addr");

        let requests: Arc<Mutex<Vec<Recorded>>> = Arc::new(Mutex::new(Vec::new()));
        let queue: Arc<Mutex<VecDeque<Canned>>> = Arc::new(Mutex::new(VecDeque::from(responses)));

        let server = tokio::spawn({
            let requests = requests.clone();
            async move {
                // Test traffic is sequential, so connections are served
                // inline rather than spawned.
                loop {
                    let Ok((mut socket, _)) = listener.accept().await else {
                        break;
                    };
                    if let Err(e) = handle_connection(&mut socket, &requests, &queue).await {
                        eprintln!("stub connection error: {}", e);
                    }
                }
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
            server,
        }
    }

    /// Requests received so far, in arrival order.
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// `method` and `target` of every request, for order assertions.
    pub fn request_lines(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|r| format!("{} {}", r.method, r.target))
            .collect()
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn handle_connection(
    socket: &mut TcpStream,
    requests: &Arc<Mutex<Vec<Recorded>>>,
    queue: &Arc<Mutex<VecDeque<Canned>>>,
) -> std::io::Result<()> {
    let (reader, mut writer) = socket.split();
    let mut reader = BufReader::new(reader);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).await?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut authorization = None;
    let mut content_type = None;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).await?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            let value = value.trim();
            match name.to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.parse().unwrap_or(0),
                "authorization" => authorization = Some(value.to_string()),
                "content-type" => content_type = Some(value.to_string()),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body).await?;
    }

    requests.lock().unwrap().push(Recorded {
        method,
        target,
        authorization,
        content_type,
        body: String::from_utf8_lossy(&body).to_string(),
    });

    let canned = queue.lock().unwrap().pop_front().unwrap_or_else(|| Canned {
        status: 500,
        body: r#"{"message":"stub script exhausted"}"#.to_string(),
    });

    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        canned.status,
        status_text(canned.status),
        canned.body.len(),
        canned.body
    );
    writer.write_all(response.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        _ => "Error",
    }
}
