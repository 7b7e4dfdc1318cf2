//! Deal Model (成交记录)

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::money::amount_text;
use crate::time::iso_timestamp;

/// Deal record as returned by the backend's deals resource
///
/// Read-only: the engine never edits a deal. The sales agent travels on
/// the wire as `s1NameLb` (the first salesperson column of the upload
/// spreadsheet) and the desk manager as `deskManager`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealRecord {
    pub id: i64,
    #[serde(with = "iso_timestamp")]
    pub sale_date: NaiveDateTime,
    /// Exact decimal text (e.g. "32500.00")
    #[serde(with = "amount_text")]
    pub sale_price: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub vehicle_model: String,
    #[serde(default)]
    pub vehicle_year: Option<i32>,
    /// None = unassigned
    #[serde(default, rename = "s1NameLb", alias = "salesAgentName")]
    pub sales_agent_name: Option<String>,
    /// None = unassigned
    #[serde(default, rename = "deskManager", alias = "deskManagerName")]
    pub desk_manager_name: Option<String>,

    // === Display extras ===
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fi_manager: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_type: Option<String>,
}

impl DealRecord {
    /// Calendar date of the sale, time-of-day dropped
    pub fn sale_day(&self) -> NaiveDate {
        self.sale_date.date()
    }

    /// Sales agent name, treating an empty string as unassigned
    pub fn sales_agent(&self) -> Option<&str> {
        non_empty(self.sales_agent_name.as_deref())
    }

    /// Desk manager name, treating an empty string as unassigned
    pub fn desk_manager(&self) -> Option<&str> {
        non_empty(self.desk_manager_name.as_deref())
    }

    /// Vehicle model, None when blank
    pub fn model(&self) -> Option<&str> {
        non_empty(Some(self.vehicle_model.as_str()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
