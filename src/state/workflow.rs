//! Creation workflow form state.
//!
//! One [`CreationForm`] exists per open creation dialog. It holds the user's
//! input, the peer list captured when the dialog opened, and the
//! `form_error` flag. Submitting validates the `value` field and either keeps
//! the form open with the error flag set or yields the [`CreateRequest`] to
//! send.

use crate::domain::{CreateRequest, Peer, WorkflowKind};

// ============================================================================
// Form Fields
// ============================================================================

/// Editable fields of a creation form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Value,
    Cusip,
    AssetName,
    PurchaseCost,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Value, Self::Cusip, Self::AssetName, Self::PurchaseCost];

    #[must_use]
    const fn next(self) -> Self {
        match self {
            Self::Value => Self::Cusip,
            Self::Cusip => Self::AssetName,
            Self::AssetName => Self::PurchaseCost,
            Self::PurchaseCost => Self::Value,
        }
    }

    #[must_use]
    const fn prev(self) -> Self {
        match self {
            Self::Value => Self::PurchaseCost,
            Self::Cusip => Self::Value,
            Self::AssetName => Self::Cusip,
            Self::PurchaseCost => Self::AssetName,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Value => "Value",
            Self::Cusip => "CUSIP",
            Self::AssetName => "Asset Name",
            Self::PurchaseCost => "Purchase Cost",
        }
    }
}

// ============================================================================
// Submit Outcome
// ============================================================================

/// Result of submitting a creation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the form stays open with `form_error` set.
    Rejected,
    /// Validation passed; the form should close and this request be sent.
    Accepted(CreateRequest),
}

// ============================================================================
// Creation Form
// ============================================================================

/// State of one open creation dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct CreationForm {
    pub kind: WorkflowKind,
    pub value: String,
    pub cusip: String,
    pub asset_name: String,
    pub purchase_cost: String,
    /// True iff the last submit attempt was rejected.
    pub form_error: bool,
    pub active_field: FormField,
    peers: Vec<Peer>,
}

impl CreationForm {
    /// Opens an empty form bound to a snapshot of the peer list.
    ///
    /// Later peer updates do not reach this form.
    #[must_use]
    pub fn open(kind: WorkflowKind, peers: Vec<Peer>) -> Self {
        Self {
            kind,
            value: String::new(),
            cusip: String::new(),
            asset_name: String::new(),
            purchase_cost: String::new(),
            form_error: false,
            active_field: FormField::Value,
            peers,
        }
    }

    /// Peers captured when the form was opened.
    #[must_use]
    pub fn peers(&self) -> &[Peer] {
        &self.peers
    }

    #[must_use]
    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::Value => &self.value,
            FormField::Cusip => &self.cusip,
            FormField::AssetName => &self.asset_name,
            FormField::PurchaseCost => &self.purchase_cost,
        }
    }

    fn current_value_mut(&mut self) -> &mut String {
        match self.active_field {
            FormField::Value => &mut self.value,
            FormField::Cusip => &mut self.cusip,
            FormField::AssetName => &mut self.asset_name,
            FormField::PurchaseCost => &mut self.purchase_cost,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    pub fn push_char(&mut self, c: char) {
        self.current_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.current_value_mut().pop();
    }

    /// Whether `value` parses to a number strictly greater than zero.
    ///
    /// Empty, non-numeric, NaN and infinite input all fail.
    #[must_use]
    pub fn value_is_positive(&self) -> bool {
        self.value
            .trim()
            .parse::<f64>()
            .is_ok_and(|value| value.is_finite() && value > 0.0)
    }

    /// Whether no CUSIP has been entered.
    ///
    /// Not part of validation: submission does not consult it. The form
    /// shows it as a hint only.
    #[must_use]
    pub fn cusip_missing(&self) -> bool {
        self.cusip.trim().is_empty()
    }

    /// Validates the form and produces the request to send.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.value_is_positive() {
            self.form_error = true;
            return SubmitOutcome::Rejected;
        }

        self.form_error = false;
        SubmitOutcome::Accepted(CreateRequest::new(
            self.kind,
            self.cusip.clone(),
            self.asset_name.clone(),
            self.purchase_cost.clone(),
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================
