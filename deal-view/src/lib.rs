//! Deal View - record view engine for the commission portal
//!
//! Turns raw deal and commission collections into what the deals browser
//! and the agent dashboard show: facet options, filtered deals, and
//! commission aggregates. Every engine operation is a pure function of its
//! inputs; the only asynchronous step is fetching from a [`RecordSource`].
//!
//! ```
//! use deal_view::{DealView, summarize};
//! use shared::models::FilterCriteria;
//!
//! let view = DealView::new(Vec::new());
//! assert!(view.filter(&FilterCriteria::default()).unwrap().is_empty());
//! assert_eq!(summarize(&[]).unwrap().count, 0);
//! ```

pub mod facets;
pub mod filter;
pub mod sort;
pub mod source;
pub mod summary;
pub mod view;

#[cfg(test)]
mod testing;

pub use facets::derive_facets;
pub use filter::{DealFilter, apply_filters};
pub use sort::{sort_commissions_newest_first, sort_newest_first};
pub use source::{
    JsonExportSource, RecordSource, Resource, SourceError, SourceResult, StaticSource,
};
pub use summary::{agent_performance, summarize};
pub use view::DealView;

// Re-export shared types for convenience
pub use shared::error::{DateBound, ViewError, ViewResult};
pub use shared::models::{
    AgentPerformance, CommissionRecord, CommissionSummary, DealRecord, FacetSet, FilterCriteria,
};
