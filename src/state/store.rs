//! Node identity and peer store.
//!
//! Populated from the startup loaders and read by everything else. Dialogs
//! never hold a reference into the store; they take a
//! [`peers_snapshot`](NodeStore::peers_snapshot) when they open.

use crate::domain::{Identity, Peer};

/// Identity and peers of the connected node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStore {
    identity: Option<Identity>,
    peers: Vec<Peer>,
}

impl NodeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn peers(&self) -> &[Peer] {
        &self.peers
    }

    /// An owned copy of the current peer list.
    #[must_use]
    pub fn peers_snapshot(&self) -> Vec<Peer> {
        self.peers.clone()
    }

    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }

    /// Replaces the peer list.
    pub fn set_peers(&mut self, peers: Vec<Peer>) {
        self.peers = peers;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = NodeStore::new();
        let before = store.peers_snapshot();

        store.set_peers(vec![Peer(json!("O=PartyB"))]);

        assert!(before.is_empty());
        assert_eq!(store.peers().len(), 1);
        assert_eq!(store.peers_snapshot(), store.peers());
    }

    #[test]
    fn test_identity_starts_empty() {
        let mut store = NodeStore::new();
        assert!(store.identity().is_none());

        store.set_identity(Identity(json!("O=PartyA")));
        assert_eq!(store.identity().map(Identity::display_name).as_deref(), Some("O=PartyA"));
    }
}
