//! Facet Set Model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Distinct filter options seen in a raw deal collection
///
/// Storage order is unspecified; use the `sorted_*` accessors when
/// presenting options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetSet {
    pub sales_agents: HashSet<String>,
    pub desk_managers: HashSet<String>,
    pub vehicle_models: HashSet<String>,
}

impl FacetSet {
    pub fn is_empty(&self) -> bool {
        self.sales_agents.is_empty()
            && self.desk_managers.is_empty()
            && self.vehicle_models.is_empty()
    }

    pub fn sorted_sales_agents(&self) -> Vec<&str> {
        sorted(&self.sales_agents)
    }

    pub fn sorted_desk_managers(&self) -> Vec<&str> {
        sorted(&self.desk_managers)
    }

    pub fn sorted_vehicle_models(&self) -> Vec<&str> {
        sorted(&self.vehicle_models)
    }
}

fn sorted(values: &HashSet<String>) -> Vec<&str> {
    let mut out: Vec<&str> = values.iter().map(String::as_str).collect();
    out.sort_unstable();
    out
}
