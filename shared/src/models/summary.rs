//! Summary Models (汇总统计)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate over a set of commission records
///
/// Amounts serialize as decimal strings at cent precision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommissionSummary {
    pub count: usize,
    pub total_amount: Decimal,
    /// Zero when `count` is zero
    pub average_amount: Decimal,
}

impl Default for CommissionSummary {
    fn default() -> Self {
        Self {
            count: 0,
            total_amount: crate::money::round_money(Decimal::ZERO),
            average_amount: crate::money::round_money(Decimal::ZERO),
        }
    }
}

/// One row of the sales performance overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPerformance {
    /// Sales agent name, None for deals with no agent assigned
    pub agent: Option<String>,
    pub deals_closed: usize,
    /// Sum of sale prices
    pub total_value: Decimal,
    /// Sum of commissions attributed through the agent's deals
    pub commission: Decimal,
}

impl AgentPerformance {
    /// Display label for the agent column
    pub fn label(&self) -> &str {
        self.agent.as_deref().unwrap_or(UNASSIGNED_LABEL)
    }
}

/// Label shown for deals without a sales agent
pub const UNASSIGNED_LABEL: &str = "Unassigned";
