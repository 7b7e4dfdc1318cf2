//! Facet derivation
//!
//! Facets come from the raw collection, never the filtered one, so every
//! option stays selectable whatever the current criteria exclude.

use shared::models::{DealRecord, FacetSet};

/// Collect the distinct non-empty agents, desk managers and vehicle models
pub fn derive_facets(deals: &[DealRecord]) -> FacetSet {
    let mut facets = FacetSet::default();
    for deal in deals {
        if let Some(agent) = deal.sales_agent() {
            facets.sales_agents.insert(agent.to_string());
        }
        if let Some(manager) = deal.desk_manager() {
            facets.desk_managers.insert(manager.to_string());
        }
        if let Some(model) = deal.model() {
            facets.vehicle_models.insert(model.to_string());
        }
    }

    tracing::debug!(
        deals = deals.len(),
        agents = facets.sales_agents.len(),
        desk_managers = facets.desk_managers.len(),
        models = facets.vehicle_models.len(),
        "Derived deal facets"
    );
    facets
}
