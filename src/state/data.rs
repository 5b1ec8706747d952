//! Data state management for the AssetDesk TUI.
//!
//! Holds the loaded transaction listing. Each load replaces the listing
//! wholesale; nothing is merged.

use serde_json::Value;

use crate::domain::TransactionScope;

// ============================================================================
// Data State
// ============================================================================

/// Data state: the current transaction listing and which scope it shows.
///
/// # Example
///
/// ```ignore
/// use crate::state::DataState;
///
/// let mut data = DataState::new();
/// data.replace_transactions(TransactionScope::All, fetched);
/// ```
#[derive(Debug, Default)]
pub struct DataState {
    /// Transaction payloads, most recent first.
    pub transactions: Vec<Value>,
    /// Which listing is displayed.
    pub scope: TransactionScope,
}

impl DataState {
    /// Creates a new `DataState` with an empty listing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the listing with a freshly loaded one.
    ///
    /// A listing for a scope other than the displayed one is stale and
    /// ignored.
    ///
    /// # Returns
    ///
    /// `true` if the listing was replaced.
    pub fn replace_transactions(&mut self, scope: TransactionScope, payloads: Vec<Value>) -> bool {
        if scope != self.scope {
            return false;
        }
        self.transactions = payloads;
        true
    }

    /// Switches to the other listing and clears the current one.
    pub fn toggle_scope(&mut self) -> TransactionScope {
        self.scope = self.scope.toggle();
        self.transactions.clear();
        self.scope
    }
}

// ============================================================================
// Tests
// ============================================================================
