//! Command execution and input handling for the AssetDesk application.
//!
//! Maps keys to commands and applies them. Dialog outcomes are routed
//! through [`App::finish_dialog`], the single place that decides what a
//! closed or dismissed dialog does.

use arboard::Clipboard;
use crossterm::event::KeyEvent;
use serde_json::Value;

use super::{ApiRequest, App, Dialog, DialogOutcome, DialogResult, Focus, SubmitOutcome};
use super::workflow::CreationForm;
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::constants::TOAST_TICKS;
use crate::domain::WorkflowKind;

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context from the top dialog.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match self.ui.dialogs.top() {
            Some(Dialog::CreationForm(_)) => InputContext::CreationForm,
            Some(Dialog::Message(_)) => InputContext::MessagePopup,
            Some(Dialog::TransactionDetails(_)) => InputContext::DetailsPopup,
            None => InputContext::Main,
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                self.refresh_transactions();
            }
            AppCommand::ToggleScope => {
                let scope = self.data.toggle_scope();
                self.ui.transaction_index = 0;
                self.ui.show_toast(scope.title(), TOAST_TICKS);
                self.refresh_transactions();
            }

            // === Workflows ===
            AppCommand::OpenWorkflow(kind) => {
                self.open_creation_form(kind);
            }

            // === Navigation ===
            AppCommand::CycleFocus => {
                self.ui.cycle_focus();
            }
            AppCommand::MoveUp => {
                self.ui.move_up();
            }
            AppCommand::MoveDown => {
                let len = match self.ui.focus {
                    Focus::Transactions => self.data.transactions.len(),
                    Focus::Peers => self.store.peers().len(),
                };
                self.ui.move_down(len);
            }
            AppCommand::Select => {
                if self.ui.focus == Focus::Transactions {
                    if let Some(payload) = self.selected_transaction().cloned() {
                        self.ui.open_dialog(Dialog::TransactionDetails(payload));
                    }
                }
            }
            AppCommand::CopyToClipboard => {
                self.copy_json_to_clipboard();
            }

            // === Dialog Control ===
            AppCommand::CloseDialog => {
                self.close_top_dialog();
            }
            AppCommand::DismissDialog => {
                if let Some(result) = self.ui.dialogs.dismiss_top() {
                    self.finish_dialog(result);
                }
            }

            // === Form Input ===
            AppCommand::SubmitForm => {
                self.submit_top_form();
            }
            AppCommand::NextField => {
                if let Some(form) = self.ui.dialogs.top_form_mut() {
                    form.next_field();
                }
            }
            AppCommand::PreviousField => {
                if let Some(form) = self.ui.dialogs.top_form_mut() {
                    form.prev_field();
                }
            }
            AppCommand::TypeChar(c) => {
                if let Some(form) = self.ui.dialogs.top_form_mut() {
                    form.push_char(c);
                }
            }
            AppCommand::Backspace => {
                if let Some(form) = self.ui.dialogs.top_form_mut() {
                    form.backspace();
                }
            }

            AppCommand::Noop => {}
        }
    }

    // ========================================================================
    // Workflows
    // ========================================================================

    /// Opens a creation form bound to the peers known right now.
    pub(crate) fn open_creation_form(&mut self, kind: WorkflowKind) {
        let form = CreationForm::open(kind, self.store.peers_snapshot());
        tracing::debug!("Opening {} form", kind.title());
        self.ui.open_dialog(Dialog::CreationForm(form));
    }

    /// Validates the top form. On success the form closes and its request
    /// is handed on; on failure it stays open with its error flag set.
    pub(crate) fn submit_top_form(&mut self) {
        let Some(form) = self.ui.dialogs.top_form_mut() else {
            return;
        };
        match form.submit() {
            SubmitOutcome::Rejected => {
                tracing::debug!("Rejected {} form input", form.kind.title());
            }
            SubmitOutcome::Accepted(request) => {
                self.ui.dialogs.pop();
                self.finish_dialog(DialogResult::CreationForm(DialogOutcome::Closed(request)));
            }
        }
    }

    /// Closes the top dialog deliberately.
    ///
    /// Forms only close through a successful submit, so for them this is the
    /// same as submitting.
    fn close_top_dialog(&mut self) {
        let result = match self.ui.dialogs.top() {
            Some(Dialog::CreationForm(_)) => {
                self.submit_top_form();
                return;
            }
            Some(Dialog::Message(_)) => DialogResult::Message(DialogOutcome::Closed(())),
            Some(Dialog::TransactionDetails(_)) => {
                DialogResult::TransactionDetails(DialogOutcome::Closed(()))
            }
            None => return,
        };
        self.ui.dialogs.pop();
        self.finish_dialog(result);
    }

    /// Acts on a dialog that has left the stack.
    pub(crate) fn finish_dialog(&mut self, result: DialogResult) {
        match result {
            DialogResult::CreationForm(DialogOutcome::Closed(request)) => {
                tracing::info!("Submitting {}", request.endpoint());
                self.request(ApiRequest::Create(request));
            }
            DialogResult::CreationForm(DialogOutcome::Dismissed) => {
                tracing::debug!("Creation form cancelled");
            }
            // Acknowledging or dismissing a message or details view has no effect.
            DialogResult::Message(_) | DialogResult::TransactionDetails(_) => {}
        }
    }

    // ========================================================================
    // Clipboard
    // ========================================================================

    /// The payload a copy applies to: the viewed details, or the selected row.
    fn copy_target(&self) -> Option<Value> {
        match self.ui.dialogs.top() {
            Some(Dialog::TransactionDetails(payload)) => Some(payload.clone()),
            Some(_) => None,
            None => match self.ui.focus {
                Focus::Transactions => self.selected_transaction().cloned(),
                Focus::Peers => self
                    .store
                    .peers()
                    .get(self.ui.peer_index)
                    .map(|peer| peer.0.clone()),
            },
        }
    }

    fn copy_json_to_clipboard(&mut self) {
        let Some(payload) = self.copy_target() else {
            self.ui.show_toast("[x] Nothing selected", TOAST_TICKS);
            return;
        };
        let json = match serde_json::to_string_pretty(&payload) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Serializing payload for clipboard failed: {e}");
                self.ui.show_toast("[x] Failed to copy", TOAST_TICKS);
                return;
            }
        };

        match Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(json).is_ok() {
                    self.ui.show_toast("[+] JSON copied!", TOAST_TICKS);
                } else {
                    self.ui.show_toast("[x] Failed to copy", TOAST_TICKS);
                }
            }
            Err(_) => {
                self.ui.show_toast("[x] Clipboard not available", TOAST_TICKS);
            }
        }
    }
}
