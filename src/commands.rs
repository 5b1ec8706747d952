//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`], a pure
//! function of the key and the current [`InputContext`]. Only the topmost
//! dialog determines the context, so keys never reach a dialog underneath.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//!
//! match command {
//!     AppCommand::Quit => app.exit = true,
//!     AppCommand::Refresh => app.refresh_transactions(),
//!     // ...
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::WorkflowKind;

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// No dialog open - browsing peers and transactions.
    Main,
    /// A creation form is the top dialog.
    CreationForm,
    /// A response message is the top dialog.
    MessagePopup,
    /// A transaction details view is the top dialog.
    DetailsPopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,
    /// Reload the displayed transaction listing.
    Refresh,
    /// Switch between all transactions and this node's transactions.
    ToggleScope,

    // === Workflows ===
    /// Open a creation form.
    OpenWorkflow(WorkflowKind),

    // === Navigation ===
    /// Cycle focus between the peers and transactions panels.
    CycleFocus,
    /// Move selection up in the focused list.
    MoveUp,
    /// Move selection down in the focused list.
    MoveDown,
    /// Open details for the selected transaction.
    Select,
    /// Copy the selected or viewed payload as JSON.
    CopyToClipboard,

    // === Dialog Control ===
    /// Close the top dialog deliberately.
    CloseDialog,
    /// Dismiss the top dialog without a result.
    DismissDialog,

    // === Form Input ===
    /// Validate and submit the top creation form.
    SubmitForm,
    /// Move to the next form field.
    NextField,
    /// Move to the previous form field.
    PreviousField,
    /// Type a character into the active field.
    TypeChar(char),
    /// Delete the last character of the active field.
    Backspace,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command based on the current context.
    ///
    /// This is a pure function with no side effects.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::CreationForm => Self::map_form_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
            InputContext::DetailsPopup => Self::map_details_popup_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppCommand::Quit,
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('m') => AppCommand::ToggleScope,
            KeyCode::Char('n') => AppCommand::OpenWorkflow(WorkflowKind::Transaction),
            KeyCode::Char('t') => AppCommand::OpenWorkflow(WorkflowKind::Transfer),
            KeyCode::Char('c') => AppCommand::CopyToClipboard,
            KeyCode::Tab => AppCommand::CycleFocus,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::Select,
            _ => AppCommand::Noop,
        }
    }

    /// Every printable key is text while a form is open.
    fn map_form_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::DismissDialog,
            KeyCode::Enter => AppCommand::SubmitForm,
            KeyCode::Tab | KeyCode::Down => AppCommand::NextField,
            KeyCode::BackTab | KeyCode::Up => AppCommand::PreviousField,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => {
                if c == 'c' && key.modifiers.contains(KeyModifiers::CONTROL) {
                    AppCommand::DismissDialog
                } else {
                    AppCommand::TypeChar(c)
                }
            }
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter => AppCommand::CloseDialog,
            KeyCode::Esc | KeyCode::Char('q') => AppCommand::DismissDialog,
            _ => AppCommand::Noop,
        }
    }

    fn map_details_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => AppCommand::DismissDialog,
            KeyCode::Char('c') => AppCommand::CopyToClipboard,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
