//! Creation requests sent to the node.
//!
//! A [`CreateRequest`] is the fully-resolved form submission of one creation
//! workflow: the endpoint it targets and the ordered, named fields that are
//! sent as an `application/x-www-form-urlencoded` body.

// ============================================================================
// Constants
// ============================================================================

/// Counterparty organisation sent with every transfer.
pub const TRANSFER_BUYER: &str = "O=SecurityBuyer";

/// Counterparty locality sent with every transfer.
pub const TRANSFER_LOCATION: &str = "L=New York";

/// Counterparty country sent with every transfer.
pub const TRANSFER_COUNTRY: &str = "C-US";

// ============================================================================
// Workflow Kind
// ============================================================================

/// The two instantiations of the creation workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    /// Create a transaction for an asset.
    Transaction,
    /// Create a transfer of an asset to the fixed counterparty.
    Transfer,
}

impl WorkflowKind {
    /// Endpoint path relative to the API base.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Transaction => "create-transaction",
            Self::Transfer => "create-transfer",
        }
    }

    /// Dialog title for this workflow.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Transaction => "Create Transaction",
            Self::Transfer => "Create Transfer",
        }
    }

    /// Wire names of the user-entered fields: cusip, asset name, purchase cost.
    const fn field_names(self) -> [&'static str; 3] {
        match self {
            Self::Transaction => [
                "cusipValue",
                "transactionAssetName",
                "transactionPurchaseCost",
            ],
            Self::Transfer => ["cusipValueTr", "transferAssetName", "transferPurchaseCost"],
        }
    }
}

// ============================================================================
// Create Request
// ============================================================================

/// A validated creation submission, ready to be POSTed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    kind: WorkflowKind,
    fields: Vec<(&'static str, String)>,
}

impl CreateRequest {
    /// Builds a request for the given workflow. Transfers always carry the
    /// fixed counterparty fields after the user-entered ones.
    #[must_use]
    pub fn new(
        kind: WorkflowKind,
        cusip: impl Into<String>,
        asset_name: impl Into<String>,
        purchase_cost: impl Into<String>,
    ) -> Self {
        let [cusip_key, name_key, cost_key] = kind.field_names();
        let mut fields = vec![
            (cusip_key, cusip.into()),
            (name_key, asset_name.into()),
            (cost_key, purchase_cost.into()),
        ];

        if kind == WorkflowKind::Transfer {
            fields.push(("transferBuyer", TRANSFER_BUYER.to_string()));
            fields.push(("transferLocation", TRANSFER_LOCATION.to_string()));
            fields.push(("transferCountry", TRANSFER_COUNTRY.to_string()));
        }

        Self { kind, fields }
    }

    #[cfg(test)]
    #[must_use]
    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    #[must_use]
    pub fn endpoint(&self) -> &'static str {
        self.kind.endpoint()
    }

    /// The named fields, in wire order.
    #[cfg(test)]
    #[must_use]
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// Looks up a field value by its wire name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Encodes the fields as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn encoded_body(&self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// ============================================================================
// Tests
// ============================================================================
