//! Toast notification component.
//!
//! A one-line overlay in the bottom-right corner, drawn above dialogs. The
//! text color follows the message prefix: `[+]` success, `[x]` failure.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

const MIN_TOAST_WIDTH: u16 = 20;
const TOAST_HEIGHT: u16 = 3;
/// Gap kept between the toast and the right/bottom edges.
const TOAST_MARGIN: u16 = 2;

// ============================================================================
// Public API
// ============================================================================

/// Renders a toast notification in the bottom-right corner of `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_area(area, message);
    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let text = Paragraph::new(message.to_string())
        .style(Style::default().fg(text_color(message)))
        .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

// ============================================================================
// Internal Helpers
// ============================================================================

fn toast_area(area: Rect, message: &str) -> Rect {
    let wanted = u16::try_from(message.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let width = wanted
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);
    let height = TOAST_HEIGHT.min(area.height);

    let x = area.x + area.width.saturating_sub(width + TOAST_MARGIN);
    let y = area.y + area.height.saturating_sub(height + TOAST_MARGIN);
    Rect::new(x, y, width, height)
}

fn text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_text;
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::short(Rect::new(0, 0, 100, 40), "Hi", MIN_TOAST_WIDTH)]
    #[case::medium(Rect::new(0, 0, 100, 40), "[+] JSON copied!", MIN_TOAST_WIDTH)]
    #[case::long(Rect::new(0, 0, 100, 40), &"x".repeat(80), 50)]
    #[case::tiny(Rect::new(0, 0, 12, 5), "Hello", 12)]
    fn test_toast_width(#[case] area: Rect, #[case] message: &str, #[case] width: u16) {
        let toast = toast_area(area, message);
        assert_eq!(toast.width, width);
        assert!(toast.right() <= area.right());
        assert!(toast.bottom() <= area.bottom());
    }

    #[rstest]
    #[case("[+] Copied", SUCCESS_COLOR)]
    #[case("[x] Clipboard not available", ERROR_COLOR)]
    #[case("My Transactions", Color::White)]
    fn test_text_color(#[case] message: &str, #[case] expected: Color) {
        assert_eq!(text_color(message), expected);
    }

    #[test]
    fn test_toast_renders_message() {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render_toast(frame, frame.area(), "[+] JSON copied!"))
            .unwrap();
        assert!(buffer_text(&terminal).contains("[+] JSON copied!"));
    }
}
