//! Modal dialog stack.
//!
//! Dialogs stack in opening order and only the top one receives input. A
//! dialog leaves the stack either closed with a value or dismissed, which is
//! reported as a [`DialogOutcome`] so callers can act on (or ignore) each
//! branch.

use serde_json::Value;

use super::workflow::CreationForm;
use crate::domain::{CreateRequest, Message};

// ============================================================================
// Outcome
// ============================================================================

/// How a dialog left the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome<T> {
    /// Closed deliberately, producing a value.
    Closed(T),
    /// Dismissed without producing anything.
    Dismissed,
}

/// Outcome of a closed dialog, tagged by the dialog that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogResult {
    CreationForm(DialogOutcome<CreateRequest>),
    Message(DialogOutcome<()>),
    TransactionDetails(DialogOutcome<()>),
}

// ============================================================================
// Dialogs
// ============================================================================

/// A modal dialog and its state.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    /// Transaction or transfer creation form.
    CreationForm(CreationForm),
    /// Response of a creation request.
    Message(Message),
    /// Full payload of a listed transaction.
    TransactionDetails(Value),
}

impl Dialog {
    /// The result reported when this dialog is dismissed.
    #[must_use]
    pub fn dismissed(&self) -> DialogResult {
        match self {
            Self::CreationForm(_) => DialogResult::CreationForm(DialogOutcome::Dismissed),
            Self::Message(_) => DialogResult::Message(DialogOutcome::Dismissed),
            Self::TransactionDetails(_) => {
                DialogResult::TransactionDetails(DialogOutcome::Dismissed)
            }
        }
    }
}

// ============================================================================
// Stack
// ============================================================================

/// Open dialogs, bottom first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DialogStack {
    dialogs: Vec<Dialog>,
}

impl DialogStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, dialog: Dialog) {
        self.dialogs.push(dialog);
    }

    #[must_use]
    pub fn top(&self) -> Option<&Dialog> {
        self.dialogs.last()
    }

    /// The creation form on top of the stack, if the top dialog is one.
    pub fn top_form_mut(&mut self) -> Option<&mut CreationForm> {
        match self.dialogs.last_mut() {
            Some(Dialog::CreationForm(form)) => Some(form),
            _ => None,
        }
    }

    /// Removes the top dialog, reporting it as dismissed.
    pub fn dismiss_top(&mut self) -> Option<DialogResult> {
        self.dialogs.pop().map(|dialog| dialog.dismissed())
    }

    /// Removes the top dialog without reporting an outcome; the caller builds
    /// the `Closed` result from the returned dialog.
    pub fn pop(&mut self) -> Option<Dialog> {
        self.dialogs.pop()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dialogs.is_empty()
    }

    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dialogs.len()
    }

    /// Dialogs bottom-first, in render order.
    pub fn iter(&self) -> impl Iterator<Item = &Dialog> {
        self.dialogs.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
