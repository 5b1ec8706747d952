//! Node identity and peer types.
//!
//! Both are opaque to this client: the node decides their shape and we only
//! render them. A plain string (an X.500 name such as `O=PartyA,L=London,C=GB`)
//! is shown as-is; anything else is shown as compact JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ApiError;

/// Renders an opaque JSON value as a single display line.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// ============================================================================
// Identity
// ============================================================================

/// The identity of the node this client is talking to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(pub Value);

impl Identity {
    /// Extracts the identity from a `GET me` response body (`{ "me": ... }`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Parse` if the body has no `me` field.
    pub fn from_response(json: &Value) -> Result<Self, ApiError> {
        json.get("me")
            .cloned()
            .map(Self)
            .ok_or_else(|| ApiError::parse("response is missing field 'me'"))
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        display_value(&self.0)
    }
}

// ============================================================================
// Peer
// ============================================================================

/// A counterparty node known to the network map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Peer(pub Value);

impl Peer {
    /// Extracts the peer list from a `GET peers` response body
    /// (`{ "peers": [...] }`), preserving the node's ordering.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Parse` if `peers` is missing or not an array.
    pub fn list_from_response(json: &Value) -> Result<Vec<Self>, ApiError> {
        let peers = json
            .get("peers")
            .and_then(Value::as_array)
            .ok_or_else(|| ApiError::parse("response is missing array field 'peers'"))?;

        Ok(peers.iter().cloned().map(Self).collect())
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        display_value(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identity_from_response() {
        let identity = Identity::from_response(&json!({"me": "O=PartyA,L=London,C=GB"})).unwrap();
        assert_eq!(identity.display_name(), "O=PartyA,L=London,C=GB");

        let err = Identity::from_response(&json!({"you": "x"})).unwrap_err();
        assert!(err.to_string().contains("'me'"));
    }

    #[test]
    fn test_peer_list_preserves_order() {
        let peers = Peer::list_from_response(&json!({
            "peers": ["O=SecurityBuyer,L=New York,C=US", "O=ClearingHouse,L=Paris,C=FR"]
        }))
        .unwrap();

        let names: Vec<String> = peers.iter().map(Peer::display_name).collect();
        assert_eq!(
            names,
            vec!["O=SecurityBuyer,L=New York,C=US", "O=ClearingHouse,L=Paris,C=FR"]
        );
    }

    #[test]
    fn test_peer_list_rejects_non_array() {
        assert!(Peer::list_from_response(&json!({"peers": "nope"})).is_err());
        assert!(Peer::list_from_response(&json!({})).is_err());
    }

    #[test]
    fn test_structured_values_render_as_json() {
        let peer = Peer(json!({"name": "O=PartyB"}));
        assert_eq!(peer.display_name(), r#"{"name":"O=PartyB"}"#);
    }
}
