//! UI rendering module for the AssetDesk TUI.
//!
//! # Module Structure
//!
//! - `panels` - Peers and transactions lists
//! - `popups` - Modal dialogs (creation forms, messages, details)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod panels;
pub mod popups;

use ratatui::Frame;

use crate::state::App;

use layout::AppLayout;

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Main render function that orchestrates all UI rendering.
///
/// Draws, in order: the header, both panels and the footer; every open
/// dialog from the bottom of the stack up; the toast above everything.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = AppLayout::new(size);

    header::render(frame, layout.header, app);
    panels::render_peers(app, frame, layout.peers);
    panels::render_transactions(app, frame, layout.transactions);
    footer::render(frame, layout.footer, app);

    for dialog in app.ui.dialogs.iter() {
        popups::render_dialog(frame, size, dialog);
    }

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Tests
// ============================================================================
