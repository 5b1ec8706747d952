//! Theme and styling constants for the AssetDesk TUI.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - focused elements and highlights.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Green;

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Yellow;

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::Gray;

/// Accent color for identities and counterparties.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Style for the selected row of a focused list.
pub const HIGHLIGHT_STYLE: Style = Style::new()
    .bg(Color::DarkGray)
    .add_modifier(Modifier::BOLD);

/// Style for the selected row of an unfocused list.
pub const SELECTED_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for form labels.
pub const LABEL_STYLE: Style = Style::new().fg(MUTED_COLOR);
