//! UI state management for the AssetDesk TUI.
//!
//! This module manages UI presentation concerns including:
//! - Panel focus and list selections
//! - The modal dialog stack
//! - Toast notifications
//!
//! # Design
//!
//! The UI state is separate from loaded data, focusing purely on
//! presentation layer concerns.

use super::dialog::{Dialog, DialogStack};

// ============================================================================
// Focus
// ============================================================================

/// Represents which UI panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The transactions panel has focus.
    #[default]
    Transactions,
    /// The peers panel has focus.
    Peers,
}

impl Focus {
    /// Cycles to the next focus target.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Transactions => Self::Peers,
            Self::Peers => Self::Transactions,
        }
    }
}

// ============================================================================
// UI State
// ============================================================================

/// UI state: focus, selections, dialogs and toast.
///
/// # Example
///
/// ```ignore
/// use crate::state::UiState;
///
/// let mut ui = UiState::new();
/// ui.cycle_focus();
/// ui.show_toast("Copied", 20);
/// ```
#[derive(Debug, Default)]
pub struct UiState {
    /// Which panel currently has focus.
    pub focus: Focus,
    /// Selected row in the transactions panel.
    pub transaction_index: usize,
    /// Selected row in the peers panel.
    pub peer_index: usize,
    /// Open modal dialogs.
    pub dialogs: DialogStack,
    /// Toast message and remaining ticks.
    pub toast: Option<(String, u8)>,
}

impl UiState {
    /// Creates a new `UiState` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Focus & Selection
    // ========================================================================

    /// Cycles focus between the transactions and peers panels.
    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves the focused panel's selection up by one.
    pub fn move_up(&mut self) {
        let index = self.focused_index_mut();
        *index = index.saturating_sub(1);
    }

    /// Moves the focused panel's selection down by one, bounded by `len`.
    pub fn move_down(&mut self, len: usize) {
        let index = self.focused_index_mut();
        if *index + 1 < len {
            *index += 1;
        }
    }

    /// Keeps both selections inside their lists after a reload.
    pub fn clamp_selections(&mut self, transactions: usize, peers: usize) {
        self.transaction_index = self.transaction_index.min(transactions.saturating_sub(1));
        self.peer_index = self.peer_index.min(peers.saturating_sub(1));
    }

    fn focused_index_mut(&mut self) -> &mut usize {
        match self.focus {
            Focus::Transactions => &mut self.transaction_index,
            Focus::Peers => &mut self.peer_index,
        }
    }

    // ========================================================================
    // Dialogs
    // ========================================================================

    /// Returns `true` if any dialog is open.
    #[cfg(test)]
    #[must_use]
    pub fn has_active_dialog(&self) -> bool {
        !self.dialogs.is_empty()
    }

    /// Opens a dialog on top of any already open.
    pub fn open_dialog(&mut self, dialog: Dialog) {
        self.dialogs.open(dialog);
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks (each tick is ~100ms in the main loop).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
