//! Footer rendering module for the AssetDesk TUI.
//!
//! The footer lists the shortcuts of whichever context has the keyboard.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;
use crate::theme::MUTED_COLOR;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Shortcut hints for an input context.
#[must_use]
pub const fn shortcuts(context: InputContext) -> &'static str {
    match context {
        InputContext::Main => {
            "q:Quit  r:Refresh  m:Mine/All  n:New Txn  t:Transfer  Enter:Details  c:Copy  Tab:Focus"
        }
        InputContext::CreationForm => "Tab:Next  Shift+Tab:Prev  Enter:Submit  Esc:Cancel",
        InputContext::MessagePopup => "Enter:OK  Esc:Close",
        InputContext::DetailsPopup => "c:Copy JSON  Esc:Close",
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(shortcuts(app.get_input_context()))
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
