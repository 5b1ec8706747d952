//! Reusable UI components for the AssetDesk TUI.
//!
//! Components are stateless: they take what they draw as arguments and hold
//! nothing between frames.
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages

pub mod toast;

pub use toast::render_toast;
