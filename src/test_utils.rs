//! Shared test utilities and Mother pattern factories.
//!
//! This module provides reusable test fixtures following the Mother pattern.
//! Use these helpers to avoid copy-pasting setup code across tests.

use serde_json::{Value, json};

use crate::domain::{Identity, Message, Peer};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// Response bodies and payloads as the node API returns them.
pub struct ApiJsonMother;

impl ApiJsonMother {
    /// `GET me` body.
    #[must_use]
    pub fn me(name: &str) -> Value {
        json!({ "me": name })
    }

    /// `GET peers` body.
    #[must_use]
    pub fn peers(names: &[&str]) -> Value {
        json!({ "peers": names })
    }

    /// An asset transfer state as it appears under `state.data`.
    #[must_use]
    pub fn asset_transfer(cusip: &str, asset_name: &str, status: &str) -> Value {
        json!({
            "asset": {
                "cusip": cusip,
                "assetName": asset_name,
                "purchaseCost": "1000 USD"
            },
            "securitySeller": "O=SecuritySeller,L=London,C=GB",
            "securityBuyer": "O=SecurityBuyer,L=New York,C=US",
            "status": status,
            "linearId": {
                "externalId": null,
                "id": "6f1c2a9e-4b7d-4e21-9c3a-0d5e8f7a1b2c"
            }
        })
    }

    /// A listing body whose entries carry `payloads`, inserted in order.
    ///
    /// Keys are assigned in reverse lexical order so tests notice any
    /// accidental key sorting.
    #[must_use]
    pub fn transactions(payloads: &[Value]) -> Value {
        let mut entries = serde_json::Map::new();
        for (index, payload) in payloads.iter().enumerate() {
            let key = format!("tx-{}", char::from(b'z' - (index as u8 % 26)));
            entries.insert(
                key,
                json!({ "state": { "data": payload }, "contract": "AssetContract" }),
            );
        }
        Value::Object(entries)
    }
}

/// Domain values built from [`ApiJsonMother`] bodies.
pub struct NodeMother;

impl NodeMother {
    #[must_use]
    pub fn identity(name: &str) -> Identity {
        Identity(json!(name))
    }

    #[must_use]
    pub fn peers(names: &[&str]) -> Vec<Peer> {
        names.iter().map(|name| Peer(json!(name))).collect()
    }

    /// Response message for a successful creation.
    #[must_use]
    pub fn created_message(id: &str) -> Message {
        Message::from_response(201, &json!({ "txId": id }).to_string())
    }
}

// ============================================================================
// Stub Node Server
// ============================================================================

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// A node API that answers exactly one request with a canned response.
pub struct StubNode {
    /// API base pointing at the stub, ready for `NodeClient::new`.
    pub base_url: String,
    request: JoinHandle<String>,
}

impl StubNode {
    /// Listens on an ephemeral localhost port and serves one response.
    pub async fn respond_once(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("stub should bind");
        let addr = listener.local_addr().expect("stub should have an address");

        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("stub should accept");
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                reason_phrase(status),
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("stub should write");
            let _ = socket.shutdown().await;
            request
        });

        Self {
            base_url: format!("http://{addr}/api/example/"),
            request,
        }
    }

    /// The raw request the stub received (request line, headers and body).
    pub async fn received(self) -> String {
        self.request.await.expect("stub task should finish")
    }
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.expect("stub should read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(end) = text.find("\r\n\r\n") {
            let length = text[..end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

// ============================================================================
// rstest Fixtures
// ============================================================================

use crate::state::{App, AppConfig};
use ratatui::{Terminal, backend::TestBackend};
use rstest::fixture;

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

/// An app with the default configuration. Nothing is sent until the
/// dispatcher is started, so requests stay queued for inspection.
#[fixture]
pub fn test_app() -> App {
    App::new(AppConfig::default()).expect("app creation should succeed")
}

/// Renders a test terminal's buffer to one string, row by row.
#[must_use]
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
