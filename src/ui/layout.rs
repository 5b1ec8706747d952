//! Layout calculations for the AssetDesk TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Constants
// ============================================================================

/// Height of the header area in terminal rows.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the footer area in terminal rows.
pub const FOOTER_HEIGHT: u16 = 1;

/// Share of the content width given to the peers panel, in percent.
pub const PEERS_PANEL_PERCENT: u16 = 30;

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    /// Header area (identity, API base).
    pub header: Rect,
    /// Peers panel.
    pub peers: Rect,
    /// Transactions panel.
    pub transactions: Rect,
    /// Footer area (keybinding hints).
    pub footer: Rect,
}

impl AppLayout {
    /// Splits the terminal area into header, panels and footer.
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(PEERS_PANEL_PERCENT),
                Constraint::Percentage(100 - PEERS_PANEL_PERCENT),
            ])
            .split(rows[1]);

        Self {
            header: rows[0],
            peers: columns[0],
            transactions: columns[1],
            footer: rows[2],
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Calculate a centered popup area with fixed dimensions, keeping a
/// two-cell margin from the parent's edges.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_covers_area() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 40));
        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.footer.y, 39);
        assert_eq!(layout.peers.width + layout.transactions.width, 100);
        assert_eq!(layout.peers.width, 30);
        assert_eq!(layout.peers.height, 36);
    }

    #[test]
    fn test_centered_popup_area() {
        let area = centered_popup_area(Rect::new(0, 0, 100, 40), 40, 10);
        assert_eq!(area, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_popup_area_is_clamped() {
        let area = centered_popup_area(Rect::new(0, 0, 20, 10), 40, 30);
        assert_eq!(area.width, 16);
        assert_eq!(area.height, 6);
        assert_eq!(area.x, 2);
        assert_eq!(area.y, 2);
    }
}
