//! State management module for the AssetDesk TUI application.
//!
//! This module provides a decomposed state architecture, separating concerns into:
//!
//! - [`NodeStore`] - Identity and peers of the connected node
//! - [`DataState`] - The loaded transaction listing
//! - [`UiState`] - Focus, selections, dialog stack, toasts
//! - [`AppConfig`] - Persistent configuration with load/save capabilities
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────┐
//! │                        App                        │
//! ├─────────────┬──────────────┬──────────────────────┤
//! │  NodeStore  │  DataState   │       UiState        │
//! │  - identity │  - txns      │  - focus/selection   │
//! │  - peers    │  - scope     │  - dialogs           │
//! └─────────────┴──────────────┴──────────────────────┘
//!         ▲                 │ ApiRequest
//!         │ AppMessage      ▼
//!      ┌──────────────────────────┐
//!      │   request dispatcher     │──▶ NodeClient
//!      └──────────────────────────┘
//! ```
//!
//! The app never awaits the network itself. It enqueues [`ApiRequest`]s and
//! drains [`AppMessage`]s between input polls.

use serde_json::Value;
use tokio::sync::mpsc;

use crate::client::NodeClient;
use crate::domain::{CreateRequest, Identity, Message, Peer, TransactionScope};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod data;
pub mod dialog;
pub mod store;
pub mod ui_state;
pub mod workflow;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use data::DataState;
pub use dialog::{Dialog, DialogOutcome, DialogResult};
pub use store::NodeStore;
pub use ui_state::{Focus, UiState};
pub use workflow::{CreationForm, FormField, SubmitOutcome};

// ============================================================================
// Requests & Messages
// ============================================================================

/// Requests the app hands to the dispatcher.
///
/// Each request is executed once on its own task; there is no cancellation
/// and no retry.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// `GET me`.
    Identity,
    /// `GET peers`.
    Peers,
    /// `GET transactions` or `GET my-transactions`.
    Transactions(TransactionScope),
    /// `POST create-transaction` or `POST create-transfer`.
    Create(CreateRequest),
}

/// Messages sent from dispatched requests back to the main app loop.
///
/// Failed loads produce no message; they are only logged.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// This node's identity was loaded.
    IdentityLoaded(Identity),
    /// The peer list was loaded.
    PeersLoaded(Vec<Peer>),
    /// A transaction listing was loaded.
    TransactionsLoaded(TransactionScope, Vec<Value>),
    /// A creation request finished, successfully or not.
    CreationCompleted(Message),
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
///
/// This struct holds all application state including:
/// - Node identity and peers
/// - The transaction listing
/// - UI state (focus, dialogs, toasts)
/// - Async communication channels
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states
    // ========================================================================
    /// Identity and peers.
    pub store: NodeStore,

    /// Transaction listing.
    pub data: DataState,

    /// UI state - focus, dialogs, toasts.
    pub ui: UiState,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Active configuration (after CLI overrides).
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    // ========================================================================
    // Async Communication Channels
    // ========================================================================
    // NOTE: Channel sends use `let _ = tx.send(...)` throughout this module.
    // Receivers may be dropped during shutdown.
    /// Sender for requests to the dispatcher.
    pub(crate) request_tx: mpsc::UnboundedSender<ApiRequest>,

    /// Receiver for requests, handed to the dispatcher when the app starts.
    pub(crate) request_rx: Option<mpsc::UnboundedReceiver<ApiRequest>>,

    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Network Client
    // ========================================================================
    /// Node client, cloned into the dispatcher.
    pub(crate) client: NodeClient,
}

impl App {
    /// Returns the identity display line for the header.
    #[must_use]
    pub fn identity_label(&self) -> Option<String> {
        self.store.identity().map(Identity::display_name)
    }

    /// Returns the selected transaction payload, if any.
    #[must_use]
    pub fn selected_transaction(&self) -> Option<&Value> {
        self.data.transactions.get(self.ui.transaction_index)
    }
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, workflows, input handling
mod app_commands;

// ============================================================================
// Tests
// ============================================================================
