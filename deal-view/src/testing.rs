//! Record fixtures for unit tests

use shared::models::{CommissionRecord, DealRecord};
use shared::time::parse_timestamp;

/// Bare deal on the given date; override fields with struct update syntax
pub(crate) fn deal(id: i64, sale_date: &str) -> DealRecord {
    DealRecord {
        id,
        sale_date: parse_timestamp(sale_date).expect("fixture date"),
        sale_price: "0.00".to_string(),
        customer_name: format!("Customer {}", id),
        vehicle_model: String::new(),
        vehicle_year: None,
        sales_agent_name: None,
        desk_manager_name: None,
        deal_number: None,
        stock: None,
        fi_manager: None,
        carline: None,
        sale_type: None,
    }
}

/// Deal with agent, desk manager and model filled in
pub(crate) fn staffed_deal(
    id: i64,
    sale_date: &str,
    agent: Option<&str>,
    manager: Option<&str>,
    model: &str,
) -> DealRecord {
    DealRecord {
        sales_agent_name: agent.map(String::from),
        desk_manager_name: manager.map(String::from),
        vehicle_model: model.to_string(),
        ..deal(id, sale_date)
    }
}

pub(crate) fn commission(id: i64, deal_id: i64, amount: &str) -> CommissionRecord {
    CommissionRecord {
        id,
        deal_id,
        sales_agent_id: 1,
        rule_id: Some(1),
        amount: amount.to_string(),
        calculated_at: parse_timestamp("2025-05-15T10:30:00Z").expect("fixture timestamp"),
    }
}
