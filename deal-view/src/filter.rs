//! Deal filtering
//!
//! Criteria are conjunctive and the filter is stable: retained deals keep
//! their input order. Date bounds compare calendar dates only and are
//! inclusive on both ends.

use chrono::NaiveDate;

use shared::error::{DateBound, ViewError, ViewResult};
use shared::models::{DealRecord, FilterCriteria, active};
use shared::time::parse_date;

/// Filter criteria with date bounds parsed, ready to test deals against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DealFilter<'a> {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    sales_agent: Option<&'a str>,
    desk_manager: Option<&'a str>,
    vehicle_model: Option<&'a str>,
}

impl<'a> DealFilter<'a> {
    /// Resolve criteria, failing on a date bound that does not parse
    pub fn new(criteria: &'a FilterCriteria) -> ViewResult<Self> {
        Ok(Self {
            start: resolve_bound(DateBound::Start, &criteria.start_date)?,
            end: resolve_bound(DateBound::End, &criteria.end_date)?,
            sales_agent: active(&criteria.sales_agent_name),
            desk_manager: active(&criteria.desk_manager_name),
            vehicle_model: active(&criteria.vehicle_model),
        })
    }

    /// True when the deal satisfies every active criterion
    pub fn matches(&self, deal: &DealRecord) -> bool {
        let day = deal.sale_day();
        if self.start.is_some_and(|start| day < start) {
            return false;
        }
        if self.end.is_some_and(|end| day > end) {
            return false;
        }
        if let Some(agent) = self.sales_agent
            && deal.sales_agent_name.as_deref() != Some(agent)
        {
            return false;
        }
        if let Some(manager) = self.desk_manager
            && deal.desk_manager_name.as_deref() != Some(manager)
        {
            return false;
        }
        if let Some(model) = self.vehicle_model
            && deal.vehicle_model != model
        {
            return false;
        }
        true
    }

    /// True when no criterion is active
    pub fn is_unconstrained(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.sales_agent.is_none()
            && self.desk_manager.is_none()
            && self.vehicle_model.is_none()
    }
}

fn resolve_bound(bound: DateBound, raw: &Option<String>) -> ViewResult<Option<NaiveDate>> {
    let Some(value) = active(raw) else {
        return Ok(None);
    };
    match parse_date(value) {
        Some(date) => Ok(Some(date)),
        None => {
            tracing::warn!(%bound, value, "Rejecting unparsable filter date bound");
            Err(ViewError::invalid_date_bound(bound, value))
        }
    }
}

/// Keep the deals matching every active criterion, in input order
///
/// An empty result is `Ok(vec![])`; only an unparsable date bound errors.
pub fn apply_filters<'d>(
    deals: &'d [DealRecord],
    criteria: &FilterCriteria,
) -> ViewResult<Vec<&'d DealRecord>> {
    let filter = DealFilter::new(criteria)?;
    let kept: Vec<&DealRecord> = deals.iter().filter(|deal| filter.matches(deal)).collect();

    tracing::debug!(
        input = deals.len(),
        kept = kept.len(),
        unconstrained = filter.is_unconstrained(),
        "Applied deal filters"
    );
    Ok(kept)
}
