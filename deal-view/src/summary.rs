//! Commission aggregates
//!
//! All sums are exact `Decimal` arithmetic over the amounts as received.
//! Results are presented at cent precision, rounded half away from zero.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use shared::error::{ViewError, ViewResult};
use shared::models::{AgentPerformance, CommissionRecord, CommissionSummary, DealRecord};
use shared::money::{parse_amount, round_money};

fn commission_amount(record: &CommissionRecord) -> ViewResult<Decimal> {
    parse_amount(&record.amount).ok_or_else(|| {
        tracing::warn!(
            commission_id = record.id,
            amount = %record.amount,
            "Malformed commission amount"
        );
        ViewError::malformed_amount("amount", record.id, &record.amount)
    })
}

fn sale_price(deal: &DealRecord) -> ViewResult<Decimal> {
    parse_amount(&deal.sale_price).ok_or_else(|| {
        tracing::warn!(deal_id = deal.id, sale_price = %deal.sale_price, "Malformed sale price");
        ViewError::malformed_amount("salePrice", deal.id, &deal.sale_price)
    })
}

/// `sum + amount`, or `AmountOverflow` blaming the record that overflowed
fn checked_sum(
    sum: Decimal,
    amount: Decimal,
    field: &'static str,
    record_id: i64,
) -> ViewResult<Decimal> {
    sum.checked_add(amount).ok_or_else(|| {
        tracing::warn!(field, record_id, "Amount total out of decimal range");
        ViewError::amount_overflow(field, record_id)
    })
}

/// Count, total and average of a set of commissions
///
/// The average of an empty set is zero. The first malformed amount aborts
/// the summary; no amount is ever treated as zero. A total beyond the
/// `Decimal` range is `AmountOverflow`.
pub fn summarize(commissions: &[CommissionRecord]) -> ViewResult<CommissionSummary> {
    let mut total = Decimal::ZERO;
    for record in commissions {
        total = checked_sum(total, commission_amount(record)?, "amount", record.id)?;
    }

    let count = commissions.len();
    let average = if count == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(count)
    };

    Ok(CommissionSummary {
        count,
        total_amount: round_money(total),
        average_amount: round_money(average),
    })
}

#[derive(Default)]
struct AgentTotals {
    deals_closed: usize,
    total_value: Decimal,
    commission: Decimal,
}

/// Per-agent deal counts, sale value and attributed commission
///
/// Deals are grouped by sales agent name; deals without one form a single
/// unassigned row, listed last. A commission counts toward the agent of the
/// deal it references; commissions pointing at unknown deals are left out.
pub fn agent_performance(
    deals: &[DealRecord],
    commissions: &[CommissionRecord],
) -> ViewResult<Vec<AgentPerformance>> {
    let mut by_agent: BTreeMap<Option<&str>, AgentTotals> = BTreeMap::new();
    let mut agent_of_deal: HashMap<i64, Option<&str>> = HashMap::with_capacity(deals.len());

    for deal in deals {
        let agent = deal.sales_agent();
        let totals = by_agent.entry(agent).or_default();
        totals.deals_closed += 1;
        totals.total_value =
            checked_sum(totals.total_value, sale_price(deal)?, "salePrice", deal.id)?;
        agent_of_deal.insert(deal.id, agent);
    }

    let mut unattributed = 0usize;
    for record in commissions {
        let amount = commission_amount(record)?;
        match agent_of_deal.get(&record.deal_id) {
            Some(agent) => {
                if let Some(totals) = by_agent.get_mut(agent) {
                    totals.commission =
                        checked_sum(totals.commission, amount, "amount", record.id)?;
                }
            }
            None => unattributed += 1,
        }
    }
    if unattributed > 0 {
        tracing::debug!(unattributed, "Commissions reference deals outside the collection");
    }

    // BTreeMap orders None first; the unassigned row belongs at the end
    let mut rows: Vec<AgentPerformance> = Vec::with_capacity(by_agent.len());
    let mut unassigned = None;
    for (agent, totals) in by_agent {
        let row = AgentPerformance {
            agent: agent.map(String::from),
            deals_closed: totals.deals_closed,
            total_value: round_money(totals.total_value),
            commission: round_money(totals.commission),
        };
        if agent.is_none() {
            unassigned = Some(row);
        } else {
            rows.push(row);
        }
    }
    rows.extend(unassigned);
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{commission, deal, staffed_deal};
    use rust_decimal_macros::dec;

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]).unwrap();
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_amount, Decimal::ZERO);
        assert_eq!(summary.average_amount, Decimal::ZERO);
    }

    #[test]
    fn test_summarize_dashboard_sample() {
        let records = vec![
            commission(1, 101, "2100.00"),
            commission(2, 102, "1600.00"),
            commission(3, 103, "1500.00"),
        ];
        let summary = summarize(&records).unwrap();

        assert_eq!(summary.count, 3);
        assert_eq!(summary.total_amount.to_string(), "5200.00");
        assert_eq!(summary.average_amount.to_string(), "1733.33");
    }

    #[test]
    fn test_summarize_is_exact_for_cents() {
        // 0.1 + 0.2 drifts in binary floating point
        let records = vec![commission(1, 1, "0.10"), commission(2, 2, "0.20")];
        let summary = summarize(&records).unwrap();
        assert_eq!(summary.total_amount, dec!(0.30));
        assert_eq!(summary.average_amount, dec!(0.15));
    }

    #[test]
    fn test_summarize_rounds_average_half_away_from_zero() {
        let records = vec![commission(1, 1, "0.01"), commission(2, 2, "0.00")];
        let summary = summarize(&records).unwrap();
        // 0.005 rounds up
        assert_eq!(summary.average_amount.to_string(), "0.01");
    }

    #[test]
    fn test_summarize_reports_malformed_amount() {
        let records = vec![commission(1, 1, "100.00"), commission(2, 2, "$50")];
        let err = summarize(&records).unwrap_err();
        assert_eq!(
            err,
            ViewError::MalformedAmount {
                field: "amount",
                record_id: 2,
                value: "$50".to_string(),
            }
        );
    }

    #[test]
    fn test_summarize_empty_amount_is_malformed() {
        let err = summarize(&[commission(9, 1, "")]).unwrap_err();
        assert!(matches!(err, ViewError::MalformedAmount { record_id: 9, .. }));
    }

    #[test]
    fn test_agent_performance_groups_and_attributes() {
        let deals = vec![
            DealRecord {
                sale_price: "30000.00".to_string(),
                ..staffed_deal(101, "2025-05-01", Some("John"), None, "Civic")
            },
            DealRecord {
                sale_price: "30000.00".to_string(),
                ..staffed_deal(102, "2025-05-02", Some("John"), None, "Civic")
            },
            DealRecord {
                sale_price: "42000.50".to_string(),
                ..staffed_deal(103, "2025-05-03", Some("Jane"), None, "Accord")
            },
            DealRecord {
                sale_price: "9999.99".to_string(),
                ..deal(104, "2025-05-04")
            },
        ];
        let commissions = vec![
            commission(1, 101, "1500.00"),
            commission(2, 102, "1500.00"),
            commission(3, 103, "2100.25"),
            commission(4, 999, "700.00"),
        ];

        let rows = agent_performance(&deals, &commissions).unwrap();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].label(), "Jane");
        assert_eq!(rows[0].deals_closed, 1);
        assert_eq!(rows[0].total_value, dec!(42000.50));
        assert_eq!(rows[0].commission, dec!(2100.25));

        assert_eq!(rows[1].label(), "John");
        assert_eq!(rows[1].deals_closed, 2);
        assert_eq!(rows[1].total_value.to_string(), "60000.00");
        assert_eq!(rows[1].commission.to_string(), "3000.00");

        assert_eq!(rows[2].agent, None);
        assert_eq!(rows[2].deals_closed, 1);
        assert_eq!(rows[2].commission.to_string(), "0.00");
    }

    #[test]
    fn test_agent_performance_reports_malformed_sale_price() {
        let deals = vec![DealRecord {
            sale_price: "thirty grand".to_string(),
            ..deal(5, "2025-05-01")
        }];
        let err = agent_performance(&deals, &[]).unwrap_err();
        assert!(matches!(
            err,
            ViewError::MalformedAmount {
                field: "salePrice",
                record_id: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_agent_performance_reports_malformed_unattributed_commission() {
        let err = agent_performance(&[], &[commission(1, 42, "1,000")]).unwrap_err();
        assert!(matches!(err, ViewError::MalformedAmount { field: "amount", .. }));
    }

    #[test]
    fn test_summarize_overflow_is_an_error() {
        let records = vec![
            commission(1, 1, "79228162514264337593543950335"),
            commission(2, 2, "1.00"),
        ];
        let err = summarize(&records).unwrap_err();
        assert_eq!(err, ViewError::amount_overflow("amount", 2));
    }

    #[test]
    fn test_agent_performance_overflow_is_an_error() {
        let deals = vec![
            DealRecord {
                sale_price: "79228162514264337593543950335".to_string(),
                ..staffed_deal(1, "2025-05-01", Some("John"), None, "Civic")
            },
            DealRecord {
                sale_price: "5.00".to_string(),
                ..staffed_deal(2, "2025-05-02", Some("John"), None, "Civic")
            },
        ];
        let err = agent_performance(&deals, &[]).unwrap_err();
        assert_eq!(err, ViewError::amount_overflow("salePrice", 2));

        let commissions = vec![
            commission(1, 1, "79228162514264337593543950335"),
            commission(2, 1, "0.01"),
        ];
        let err = agent_performance(&deals[..1], &commissions).unwrap_err();
        assert_eq!(err, ViewError::amount_overflow("amount", 2));
    }

    #[test]
    fn test_agent_performance_empty() {
        assert!(agent_performance(&[], &[]).unwrap().is_empty());
    }
}
