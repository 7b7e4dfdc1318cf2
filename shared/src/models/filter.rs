//! Filter Criteria Model (筛选条件)

use serde::{Deserialize, Serialize};

/// Caller-owned filter state for the deals browser
///
/// Every field is optional; an unset field (or an empty string, which is
/// what a cleared form input produces) imposes no constraint. Active
/// criteria combine with logical AND. Date bounds are kept as the text the
/// caller entered and are parsed when the filter runs, so a bad bound is
/// reported instead of silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Inclusive lower bound on the sale date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Inclusive upper bound on the sale date (YYYY-MM-DD)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sales_agent_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desk_manager_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the inclusive start date
    pub fn with_start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    /// Set the inclusive end date
    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn with_sales_agent(mut self, name: impl Into<String>) -> Self {
        self.sales_agent_name = Some(name.into());
        self
    }

    pub fn with_desk_manager(mut self, name: impl Into<String>) -> Self {
        self.desk_manager_name = Some(name.into());
        self
    }

    pub fn with_vehicle_model(mut self, model: impl Into<String>) -> Self {
        self.vehicle_model = Some(model.into());
        self
    }

    /// Reset every criterion ("Clear Filters")
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        [
            &self.start_date,
            &self.end_date,
            &self.sales_agent_name,
            &self.desk_manager_name,
            &self.vehicle_model,
        ]
        .into_iter()
        .all(|field| active(field).is_none())
    }
}

/// The active value of a criterion: set and non-empty
pub fn active(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}
