//! Header rendering for the AssetDesk TUI.
//!
//! Shows the application name, this node's identity (once loaded), the
//! displayed listing and the API base.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::App;
use crate::theme::{ACCENT_COLOR, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let identity = match app.identity_label() {
        Some(name) => Span::styled(name, Style::default().fg(ACCENT_COLOR)),
        None => Span::styled("loading…", Style::default().fg(WARNING_COLOR)),
    };

    let left = Line::from(vec![
        Span::styled(
            "assetdesk",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        identity,
    ]);
    frame.render_widget(Paragraph::new(left).alignment(Alignment::Left), inner);

    let right = Line::from(vec![
        Span::styled(app.data.scope.title(), Style::default().fg(PRIMARY_COLOR)),
        Span::raw("  "),
        Span::styled(
            app.config.api_base_url.clone(),
            Style::default().fg(MUTED_COLOR),
        ),
        Span::raw(" "),
    ]);
    if inner.width > 60 {
        frame.render_widget(Paragraph::new(right).alignment(Alignment::Right), inner);
    }
}

// ============================================================================
// Tests
// ============================================================================
