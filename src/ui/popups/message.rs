//! Message popup rendering.
//!
//! Shows the response of a creation request. Successful and failed
//! responses are rendered the same way: the payload text, sized to fit.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::domain::Message;
use crate::theme::MUTED_COLOR;
use crate::ui::helpers::{create_popup_block, render_popup_help};
use crate::ui::layout::centered_popup_area;

// ============================================================================
// Public API
// ============================================================================

/// Renders a message popup sized to its content.
pub fn render(frame: &mut Frame, area: Rect, message: &Message) {
    let body = message.display_text();
    let line_count = u16::try_from(body.lines().count().max(1)).unwrap_or(u16::MAX);
    let longest_line = body
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let longest_line = u16::try_from(longest_line).unwrap_or(u16::MAX);

    let popup_width = 40.max(longest_line.saturating_add(6)).min(area.width * 8 / 10);
    // Body, received-at line, help rows and border.
    let popup_height = 7.max(line_count.saturating_add(6));
    let popup_area = centered_popup_area(area, popup_width, popup_height);

    let block = create_popup_block("Message");
    let inner = block.inner(popup_area);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(block, popup_area);

    // Pretty JSON keeps its indentation; plain text is centred.
    let payload_alignment = if message.data.is_string() {
        Alignment::Center
    } else {
        Alignment::Left
    };
    let mut lines: Vec<Line> = body
        .lines()
        .map(|l| Line::from(l.to_string()).alignment(payload_alignment))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("received {}", message.received_at.format("%H:%M:%S")),
        Style::default().fg(MUTED_COLOR),
    )));

    let content_area = Rect::new(
        inner.x,
        inner.y,
        inner.width,
        inner.height.saturating_sub(2),
    );
    let paragraph = Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, content_area);

    render_popup_help(frame, popup_area, "Enter:OK  Esc:Close");
}

// ============================================================================
// Tests
// ============================================================================
