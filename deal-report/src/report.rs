//! Plain-text report rendering

use std::fmt;

use shared::models::{
    AgentPerformance, CommissionSummary, DealRecord, FacetSet, FilterCriteria, filter::active,
};
use shared::money::{format_currency, parse_amount};

/// Everything one report run prints
pub struct Report<'a> {
    pub criteria: &'a FilterCriteria,
    pub facets: &'a FacetSet,
    /// Size of the unfiltered collection
    pub total_deals: usize,
    /// Filtered deals, newest first
    pub deals: &'a [&'a DealRecord],
    pub summary: &'a CommissionSummary,
    pub performance: &'a [AgentPerformance],
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_criteria(f, self.criteria)?;
        writeln!(f)?;
        write_facets(f, self.facets)?;
        writeln!(f)?;
        write_deals(f, self.deals, self.total_deals)?;
        writeln!(f)?;
        write_summary(f, self.summary)?;
        writeln!(f)?;
        write_performance(f, self.performance)
    }
}

fn write_criteria(f: &mut fmt::Formatter<'_>, criteria: &FilterCriteria) -> fmt::Result {
    let parts: Vec<String> = [
        ("startDate", &criteria.start_date),
        ("endDate", &criteria.end_date),
        ("salesAgentName", &criteria.sales_agent_name),
        ("deskManagerName", &criteria.desk_manager_name),
        ("vehicleModel", &criteria.vehicle_model),
    ]
    .into_iter()
    .filter_map(|(name, field)| active(field).map(|value| format!("{name}={value}")))
    .collect();

    if parts.is_empty() {
        writeln!(f, "Filters: none")
    } else {
        writeln!(f, "Filters: {}", parts.join(", "))
    }
}

fn facet_line(values: Vec<&str>) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

fn write_facets(f: &mut fmt::Formatter<'_>, facets: &FacetSet) -> fmt::Result {
    writeln!(f, "Facets")?;
    writeln!(f, "  Sales agents:   {}", facet_line(facets.sorted_sales_agents()))?;
    writeln!(f, "  Desk managers:  {}", facet_line(facets.sorted_desk_managers()))?;
    writeln!(f, "  Vehicle models: {}", facet_line(facets.sorted_vehicle_models()))
}

/// Sale price as currency, or the raw text when it does not parse
fn display_price(deal: &DealRecord) -> String {
    parse_amount(&deal.sale_price)
        .map(format_currency)
        .unwrap_or_else(|| deal.sale_price.clone())
}

fn write_deals(f: &mut fmt::Formatter<'_>, deals: &[&DealRecord], total: usize) -> fmt::Result {
    writeln!(f, "Deals ({} of {})", deals.len(), total)?;
    if deals.is_empty() {
        return writeln!(f, "  (no deals match)");
    }
    for deal in deals {
        let vehicle = match deal.vehicle_year {
            Some(year) => format!("{} {}", deal.model().unwrap_or("-"), year),
            None => deal.model().unwrap_or("-").to_string(),
        };
        writeln!(
            f,
            "  {}  #{:<6} {:<18} {:>12}  agent: {}  desk: {}  customer: {}",
            deal.sale_day(),
            deal.id,
            vehicle,
            display_price(deal),
            deal.sales_agent().unwrap_or("-"),
            deal.desk_manager().unwrap_or("-"),
            deal.customer_name,
        )?;
    }
    Ok(())
}

fn write_summary(f: &mut fmt::Formatter<'_>, summary: &CommissionSummary) -> fmt::Result {
    writeln!(f, "Commissions")?;
    writeln!(f, "  Count:   {}", summary.count)?;
    writeln!(f, "  Total:   {}", format_currency(summary.total_amount))?;
    writeln!(f, "  Average: {}", format_currency(summary.average_amount))
}

fn write_performance(f: &mut fmt::Formatter<'_>, rows: &[AgentPerformance]) -> fmt::Result {
    writeln!(f, "Sales performance")?;
    if rows.is_empty() {
        return writeln!(f, "  (no deals)");
    }
    for row in rows {
        writeln!(
            f,
            "  {:<20} {:>4} deals {:>15}  commission {}",
            row.label(),
            row.deals_closed,
            format_currency(row.total_value),
            format_currency(row.commission),
        )?;
    }
    Ok(())
}
