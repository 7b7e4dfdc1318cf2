//! Commission Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::money::amount_text;
use crate::time::iso_timestamp;

/// Computed commission for one deal, as returned by the commissions resource
///
/// `deal_id` is an opaque reference: nothing here checks that the deal exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRecord {
    pub id: i64,
    pub deal_id: i64,
    pub sales_agent_id: i64,
    /// Commission rule that produced this amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<i64>,
    /// Exact decimal text (e.g. "2100.00")
    #[serde(with = "amount_text")]
    pub amount: String,
    #[serde(with = "iso_timestamp")]
    pub calculated_at: NaiveDateTime,
}
