//! Transaction details popup: the selected payload as pretty JSON.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Clear, Paragraph, Wrap},
};
use serde_json::Value;

use crate::domain::TransactionSummary;
use crate::theme::PRIMARY_COLOR;
use crate::ui::helpers::{create_popup_block, render_popup_help};
use crate::ui::layout::centered_popup_area;

/// Render the details of one transaction payload.
pub fn render(frame: &mut Frame, area: Rect, payload: &Value) {
    let popup_area = centered_popup_area(area, area.width * 8 / 10, area.height * 8 / 10);
    frame.render_widget(Clear, popup_area);

    let summary = TransactionSummary::from_data(payload);
    let block = create_popup_block("Transaction Details")
        .title_bottom(summary.title)
        .title_style(Style::default().fg(PRIMARY_COLOR));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let json = serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string());
    let content_area = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(2),
    );
    frame.render_widget(
        Paragraph::new(json).wrap(Wrap { trim: false }),
        content_area,
    );

    render_popup_help(frame, popup_area, "c:Copy JSON  Esc:Close");
}
