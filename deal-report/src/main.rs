//! deal-report - print the deals browser and dashboard views of a JSON export

mod config;
mod logger;
mod report;

use anyhow::Context;
use deal_view::{DealView, JsonExportSource, RecordSource, agent_performance, summarize};

use config::Config;
use report::Report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenv::dotenv().ok();

    let config = Config::from_env().context("invalid configuration")?;
    logger::init_logger_with_file(
        Some(&config.log_level),
        config.log_json,
        config.log_dir.as_deref(),
    );

    tracing::info!(data_dir = %config.data_dir.display(), "deal-report starting");

    let source = JsonExportSource::new(config.data_dir.clone());
    let (deals, commissions) = tokio::try_join!(
        source.fetch_deals(),
        source.fetch_commissions(config.agent_id),
    )?;
    tracing::info!(
        deals = deals.len(),
        commissions = commissions.len(),
        agent_id = ?config.agent_id,
        "Fetched records"
    );

    let view = DealView::new(deals);
    let kept = view.filter(&config.criteria)?;
    let summary = summarize(&commissions)?;
    let performance = agent_performance(view.deals(), &commissions)?;

    tracing::info!(matched = kept.len(), total = view.len(), "Filter applied");

    let report = Report {
        criteria: &config.criteria,
        facets: view.facets(),
        total_deals: view.len(),
        deals: &kept,
        summary: &summary,
        performance: &performance,
    };
    print!("{report}");

    Ok(())
}
