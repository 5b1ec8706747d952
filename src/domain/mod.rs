//! Domain types for the AssetDesk client.
//!
//! This module contains the typed data exchanged with the node's REST API.
//!
//! # Module Organization
//!
//! - [`error`] - Error type for API operations
//! - [`node`] - Node identity and peers
//! - [`transaction`] - Transaction list extraction and summaries
//! - [`request`] - Creation workflow requests
//! - [`message`] - Creation responses shown to the user

// ============================================================================
// Module Declarations
// ============================================================================

pub mod error;
pub mod message;
pub mod node;
pub mod request;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::ApiError;
pub use message::Message;
pub use node::{Identity, Peer};
pub use request::{CreateRequest, WorkflowKind};
pub use transaction::{TransactionScope, TransactionSummary};
