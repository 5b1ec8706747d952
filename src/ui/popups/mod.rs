//! Popup UI components for the AssetDesk TUI.
//!
//! One renderer per [`Dialog`] variant. Dialogs are drawn bottom-first so
//! the top of the stack ends up on top of the screen.

pub mod creation_form;
pub mod details;
pub mod message;

use ratatui::{Frame, layout::Rect};

use crate::state::Dialog;

/// Renders one dialog.
pub fn render_dialog(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    match dialog {
        Dialog::CreationForm(form) => creation_form::render(frame, area, form),
        Dialog::Message(message) => message::render(frame, area, message),
        Dialog::TransactionDetails(payload) => details::render(frame, area, payload),
    }
}
