//! Transaction list extraction and display summaries.
//!
//! The node returns transactions as a JSON object keyed by id, each entry
//! wrapping its payload as `{ "state": { "data": ... } }`. The payload is
//! opaque to this client; it is stored verbatim and only summarised for
//! list rows.

use serde_json::Value;

use super::ApiError;
use super::node::display_value;

// ============================================================================
// Scope
// ============================================================================

/// Which transaction listing to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionScope {
    /// Every transaction visible to the node.
    #[default]
    All,
    /// Only transactions this node participates in.
    Mine,
}

impl TransactionScope {
    /// Endpoint path relative to the API base.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::All => "transactions",
            Self::Mine => "my-transactions",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::All => "Transactions",
            Self::Mine => "My Transactions",
        }
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::All => Self::Mine,
            Self::Mine => Self::All,
        }
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Extracts every entry's `state.data` payload, most recently inserted first.
///
/// Keys are dropped. Entries are walked in the order the node serialised
/// them, which is assumed to be chronological. An entry whose `state` has no
/// `data` contributes `null`; an entry without a `state` object fails the
/// whole extraction.
///
/// # Errors
///
/// Returns `ApiError::Parse` if the body is not an object or an entry has no
/// `state` object.
pub fn latest_first(json: Value) -> Result<Vec<Value>, ApiError> {
    let Value::Object(entries) = json else {
        return Err(ApiError::parse("transactions response is not an object"));
    };

    let mut payloads = Vec::with_capacity(entries.len());
    for (id, entry) in entries {
        let state = entry
            .get("state")
            .and_then(Value::as_object)
            .ok_or_else(|| ApiError::parse(format!("transaction '{id}' has no state")))?;
        payloads.push(state.get("data").cloned().unwrap_or(Value::Null));
    }

    payloads.reverse();
    Ok(payloads)
}

// ============================================================================
// Summary
// ============================================================================

/// One-line description of a transaction payload for list rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
    /// Primary text (asset identification, or the raw payload).
    pub title: String,
    /// Request status, when the payload carries one.
    pub status: Option<String>,
    /// Seller → buyer description, when the payload names both.
    pub parties: Option<String>,
    /// Leading characters of the state's `linearId.id`.
    pub reference: Option<String>,
}

/// Number of `linearId.id` characters shown in list rows.
const REFERENCE_LEN: usize = 8;

impl TransactionSummary {
    /// Summarises a payload, recognising asset transfer states and falling
    /// back to compact JSON for anything else.
    #[must_use]
    pub fn from_data(data: &Value) -> Self {
        let Some(asset) = data.get("asset").filter(|a| a.is_object()) else {
            return Self {
                title: display_value(data),
                status: None,
                parties: None,
                reference: None,
            };
        };

        let mut title = field_text(asset, "cusip").unwrap_or_else(|| "?".to_string());
        if let Some(name) = field_text(asset, "assetName") {
            title.push(' ');
            title.push_str(&name);
        }
        if let Some(cost) = field_text(asset, "purchaseCost") {
            title.push_str(" @ ");
            title.push_str(&cost);
        }

        let parties = match (
            field_text(data, "securitySeller"),
            field_text(data, "securityBuyer"),
        ) {
            (Some(seller), Some(buyer)) => Some(format!("{seller} → {buyer}")),
            _ => None,
        };

        let reference = data
            .get("linearId")
            .and_then(|linear_id| field_text(linear_id, "id"))
            .map(|id| id.chars().take(REFERENCE_LEN).collect());

        Self {
            title,
            status: field_text(data, "status"),
            parties,
            reference,
        }
    }
}

fn field_text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .filter(|v| !v.is_null())
        .map(display_value)
        .filter(|s| !s.is_empty())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApiJsonMother;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_latest_first_reverses_insertion_order() {
        let body = json!({
            "a": {"state": {"data": 1}},
            "b": {"state": {"data": 2}}
        });
        assert_eq!(latest_first(body).unwrap(), vec![json!(2), json!(1)]);
    }

    #[test]
    fn test_latest_first_does_not_sort_keys() {
        // Keys deliberately out of lexical order: insertion order wins.
        let body: Value =
            serde_json::from_str(r#"{"z":{"state":{"data":"first"}},"a":{"state":{"data":"second"}}}"#)
                .unwrap();
        assert_eq!(
            latest_first(body).unwrap(),
            vec![json!("second"), json!("first")]
        );
    }

    #[test]
    fn test_latest_first_missing_data_is_null() {
        let body = json!({"a": {"state": {}}});
        assert_eq!(latest_first(body).unwrap(), vec![Value::Null]);
    }

    #[rstest]
    #[case::not_an_object(json!([1, 2]))]
    #[case::missing_state(json!({"a": {"data": 1}}))]
    #[case::state_not_object(json!({"a": {"state": 3}}))]
    fn test_latest_first_rejects_malformed(#[case] body: Value) {
        assert!(latest_first(body).is_err());
    }

    #[test]
    fn test_latest_first_empty_object() {
        assert!(latest_first(json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_summary_of_asset_transfer() {
        let summary = TransactionSummary::from_data(&ApiJsonMother::asset_transfer(
            "US0378331005",
            "Apple Inc",
            "PENDING_CONFIRMATION",
        ));
        assert_eq!(summary.title, "US0378331005 Apple Inc @ 1000 USD");
        assert_eq!(summary.status.as_deref(), Some("PENDING_CONFIRMATION"));
        assert_eq!(
            summary.parties.as_deref(),
            Some("O=SecuritySeller,L=London,C=GB → O=SecurityBuyer,L=New York,C=US")
        );
        assert_eq!(summary.reference.as_deref(), Some("6f1c2a9e"));
    }

    #[test]
    fn test_summary_without_linear_id_has_no_reference() {
        let summary = TransactionSummary::from_data(&json!({
            "asset": {"cusip": "US0378331005"},
            "linearId": {"externalId": null}
        }));
        assert_eq!(summary.title, "US0378331005");
        assert_eq!(summary.reference, None);
    }

    #[test]
    fn test_summary_falls_back_to_raw_payload() {
        let summary = TransactionSummary::from_data(&json!(42));
        assert_eq!(summary.title, "42");
        assert_eq!(summary.status, None);
        assert_eq!(summary.parties, None);
        assert_eq!(summary.reference, None);
    }

    #[test]
    fn test_scope_endpoints_and_toggle() {
        assert_eq!(TransactionScope::All.endpoint(), "transactions");
        assert_eq!(TransactionScope::Mine.endpoint(), "my-transactions");
        assert_eq!(TransactionScope::All.toggle(), TransactionScope::Mine);
        assert_eq!(TransactionScope::Mine.toggle(), TransactionScope::All);
    }
}
