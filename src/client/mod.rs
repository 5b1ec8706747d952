//! HTTP clients for the node's REST API.
//!
//! # Example
//!
//! ```ignore
//! use crate::client::{HttpConfig, NodeClient};
//!
//! let node = NodeClient::new("http://localhost:10007/api/example/", HttpConfig::default())?;
//! let peers = node.get_peers().await?;
//! ```

pub mod http;
pub mod node;

// ============================================================================
// Re-exports
// ============================================================================

pub use http::HttpConfig;
pub use node::NodeClient;
