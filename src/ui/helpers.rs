//! UI helper functions for creating styled blocks and widgets.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, MUTED_COLOR};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block styled by focus state.
///
/// Focused blocks get a double border and a `●` marker in the title.
///
/// # Example
///
/// ```ignore
/// let focused_block = create_border_block("Transactions", true);
/// let unfocused_block = create_border_block("Peers", false);
/// ```
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'static> {
    let display_title = match (title.is_empty(), focused) {
        (true, _) => String::new(),
        (false, true) => format!(" ● {title} "),
        (false, false) => format!(" {title} "),
    };

    let (border_style, border_set, title_style) = if focused {
        (FOCUSED_BORDER_STYLE, border::DOUBLE, FOCUSED_TITLE_STYLE)
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Popup Chrome
// ============================================================================

/// Draws the separator and help line along the bottom of a popup.
///
/// Uses the last three rows of `popup_area` (border included), so callers
/// reserve two inner rows for it.
pub fn render_popup_help(frame: &mut Frame, popup_area: Rect, help_text: &str) {
    if popup_area.height < 4 || popup_area.width < 3 {
        return;
    }

    let separator = "─".repeat(popup_area.width.saturating_sub(2) as usize);
    let separator_area = Rect::new(
        popup_area.x + 1,
        popup_area.y + popup_area.height - 3,
        popup_area.width - 2,
        1,
    );
    frame.render_widget(
        Paragraph::new(separator).style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let help_area = Rect::new(
        popup_area.x + 1,
        popup_area.y + popup_area.height - 2,
        popup_area.width - 2,
        1,
    );
    frame.render_widget(
        Paragraph::new(help_text.to_string())
            .style(Style::default().fg(MUTED_COLOR))
            .alignment(Alignment::Center),
        help_area,
    );
}

// ============================================================================
// Tests
// ============================================================================
