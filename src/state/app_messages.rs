//! Message processing for the AssetDesk application.
//!
//! Applies results sent back by dispatched requests to application state.

use super::{App, AppMessage, Dialog};

impl App {
    /// Drains all pending messages.
    ///
    /// # Returns
    ///
    /// `true` if at least one message was applied.
    pub(crate) fn process_messages(&mut self) -> bool {
        let mut applied = false;
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
            applied = true;
        }
        applied
    }

    pub(crate) fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::IdentityLoaded(identity) => {
                tracing::info!("Connected as {}", identity.display_name());
                self.store.set_identity(identity);
            }
            AppMessage::PeersLoaded(peers) => {
                tracing::debug!("Loaded {} peers", peers.len());
                self.store.set_peers(peers);
                self.clamp_selections();
            }
            AppMessage::TransactionsLoaded(scope, payloads) => {
                let count = payloads.len();
                if self.data.replace_transactions(scope, payloads) {
                    tracing::debug!("Loaded {count} entries from {}", scope.endpoint());
                    self.clamp_selections();
                } else {
                    tracing::debug!("Ignoring stale {} listing", scope.endpoint());
                }
            }
            AppMessage::CreationCompleted(message) => {
                if !message.is_success() {
                    tracing::warn!("Creation request failed: {}", message.display_text());
                }
                self.ui.open_dialog(Dialog::Message(message));
            }
        }
    }

    fn clamp_selections(&mut self) {
        self.ui
            .clamp_selections(self.data.transactions.len(), self.store.peers().len());
    }
}
