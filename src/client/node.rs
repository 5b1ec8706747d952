//! Node REST API client.
//!
//! Every endpoint lives under one API base (for example
//! `http://localhost:10007/api/example/`). Loaders return typed results;
//! creation requests always resolve to a [`Message`].

use serde_json::Value;

use super::http::{HttpClient, HttpConfig};
use crate::domain::{
    ApiError, CreateRequest, Identity, Message, Peer, TransactionScope, transaction,
};

// ============================================================================
// Node Client
// ============================================================================

/// Client for the node's example REST API.
#[derive(Debug, Clone)]
pub struct NodeClient {
    http: HttpClient,
    base_url: String,
}

impl NodeClient {
    /// Create a new node client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ClientInit` if the HTTP client fails to initialize.
    pub fn new(base_url: impl Into<String>, config: HttpConfig) -> Result<Self, ApiError> {
        Ok(Self {
            http: HttpClient::with_config(config)?,
            base_url: base_url.into(),
        })
    }

    /// Joins an endpoint path onto the API base.
    #[must_use]
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.endpoint_url(path);
        tracing::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::status(status.as_u16(), body));
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("{path}: {e}")))
    }

    /// Fetch this node's identity (`GET me`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body has no `me` field.
    pub async fn get_me(&self) -> Result<Identity, ApiError> {
        let json = self.get_json("me").await?;
        Identity::from_response(&json)
    }

    /// Fetch the peer list (`GET peers`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body has no `peers` array.
    pub async fn get_peers(&self) -> Result<Vec<Peer>, ApiError> {
        let json = self.get_json("peers").await?;
        Peer::list_from_response(&json)
    }

    /// Fetch a transaction listing, most recent first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is malformed.
    pub async fn get_transactions(&self, scope: TransactionScope) -> Result<Vec<Value>, ApiError> {
        let json = self.get_json(scope.endpoint()).await?;
        transaction::latest_first(json)
    }

    /// Submit a creation request.
    ///
    /// The request is sent once. Success, error statuses and transport
    /// failures all come back as a [`Message`].
    pub async fn submit(&self, request: &CreateRequest) -> Message {
        let url = self.endpoint_url(request.endpoint());
        tracing::debug!("POST {url}");

        let response = match self
            .http
            .post_form(&url, request.encoded_body())
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Message::transport_failure(e.to_string()),
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => Message::from_response(status, &body),
            Err(e) => Message::transport_failure(e.to_string()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkflowKind;
    use crate::test_utils::{ApiJsonMother, NodeMother, StubNode};
    use rstest::rstest;
    use serde_json::json;

    fn client_for(stub: &StubNode) -> NodeClient {
        NodeClient::new(&stub.base_url, HttpConfig::default()).unwrap()
    }

    #[rstest]
    #[case::trailing_slash("http://localhost:10007/api/example/")]
    #[case::no_trailing_slash("http://localhost:10007/api/example")]
    fn test_endpoint_url_joins_cleanly(#[case] base: &str) {
        let client = NodeClient::new(base, HttpConfig::default()).unwrap();
        assert_eq!(
            client.endpoint_url("create-transfer"),
            "http://localhost:10007/api/example/create-transfer"
        );
        assert_eq!(
            client.endpoint_url("/me"),
            "http://localhost:10007/api/example/me"
        );
    }

    #[tokio::test]
    async fn test_get_me_reads_identity() {
        let stub = StubNode::respond_once(200, ApiJsonMother::me("O=PartyA,L=London,C=GB").to_string())
            .await;

        let identity = client_for(&stub).get_me().await.unwrap();

        assert_eq!(identity, NodeMother::identity("O=PartyA,L=London,C=GB"));
        assert!(stub.received().await.starts_with("GET /api/example/me HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_get_peers_reads_peer_list() {
        let names = ["O=PartyB,L=New York,C=US", "O=PartyC,L=Paris,C=FR"];
        let stub = StubNode::respond_once(200, ApiJsonMother::peers(&names).to_string()).await;

        let peers = client_for(&stub).get_peers().await.unwrap();

        assert_eq!(peers, NodeMother::peers(&names));
        assert!(stub.received().await.starts_with("GET /api/example/peers HTTP/1.1"));
    }

    #[rstest]
    #[case::all(TransactionScope::All, "GET /api/example/transactions HTTP/1.1")]
    #[case::mine(TransactionScope::Mine, "GET /api/example/my-transactions HTTP/1.1")]
    #[tokio::test]
    async fn test_get_transactions_keeps_response_order(
        #[case] scope: TransactionScope,
        #[case] request_line: &str,
    ) {
        let body = ApiJsonMother::transactions(&[json!("first"), json!("second"), json!("third")]);
        let stub = StubNode::respond_once(200, body.to_string()).await;

        let payloads = client_for(&stub).get_transactions(scope).await.unwrap();

        assert_eq!(payloads, vec![json!("third"), json!("second"), json!("first")]);
        assert!(stub.received().await.starts_with(request_line));
    }

    #[tokio::test]
    async fn test_load_error_status_is_an_error() {
        let stub = StubNode::respond_once(500, r#"{"error":"node down"}"#).await;

        let result = client_for(&stub).get_peers().await;

        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_submit_posts_form_body() {
        let stub = StubNode::respond_once(201, r#"{"txId":"8F2A"}"#).await;
        let request = CreateRequest::new(WorkflowKind::Transaction, "US0378331005", "Apple Inc", "100");

        let message = client_for(&stub).submit(&request).await;

        assert_eq!(message.status, Some(201));
        assert_eq!(message.data, json!({"txId": "8F2A"}));
        let received = stub.received().await;
        assert!(received.starts_with("POST /api/example/create-transaction HTTP/1.1"));
        assert!(
            received
                .to_ascii_lowercase()
                .contains("content-type: application/x-www-form-urlencoded")
        );
        assert!(received.ends_with(
            "cusipValue=US0378331005&transactionAssetName=Apple%20Inc&transactionPurchaseCost=100"
        ));
    }

    #[tokio::test]
    async fn test_submit_failure_status_yields_message() {
        let stub = StubNode::respond_once(500, r#"{"error":"flow failed"}"#).await;
        let request = CreateRequest::new(WorkflowKind::Transfer, "US 1&2", "Bond", "5");

        let message = client_for(&stub).submit(&request).await;

        assert_eq!(message.status, Some(500));
        assert_eq!(message.data, json!({"error": "flow failed"}));
        assert!(!message.is_success());
        let received = stub.received().await;
        assert!(received.starts_with("POST /api/example/create-transfer HTTP/1.1"));
        assert!(received.ends_with(
            "cusipValueTr=US%201%262&transferAssetName=Bond&transferPurchaseCost=5\
             &transferBuyer=O%3DSecurityBuyer&transferLocation=L%3DNew%20York&transferCountry=C-US"
        ));
    }

    #[tokio::test]
    async fn test_submit_to_unreachable_node_yields_message() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let client = NodeClient::new("http://127.0.0.1:9/api/example/", HttpConfig::default())
            .unwrap();
        let request = CreateRequest::new(WorkflowKind::Transaction, "X", "Y", "1");

        let message = client.submit(&request).await;
        assert_eq!(message.status, None);
        assert!(!message.display_text().is_empty());
    }
}
