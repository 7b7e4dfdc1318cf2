//! Deal view pipeline
//!
//! Stage order is fixed: sort newest first, derive facets from the sorted
//! collection, then filter. Filtering never reorders, so the filtered view
//! is always newest first as well.

use shared::error::ViewResult;
use shared::models::{DealRecord, FacetSet, FilterCriteria};

use crate::facets::derive_facets;
use crate::filter::apply_filters;
use crate::sort::sort_newest_first;

/// A fetched deal collection with its facets
///
/// Holds no filter state: the caller owns `FilterCriteria` and passes it to
/// [`DealView::filter`] each time. A re-fetch replaces the collection
/// wholesale through [`DealView::replace`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealView {
    deals: Vec<DealRecord>,
    facets: FacetSet,
}

impl DealView {
    /// Build the view from a freshly fetched collection
    pub fn new(mut deals: Vec<DealRecord>) -> Self {
        sort_newest_first(&mut deals);
        let facets = derive_facets(&deals);
        Self { deals, facets }
    }

    /// Swap in a new fetch; facets are recomputed from scratch
    pub fn replace(&mut self, deals: Vec<DealRecord>) {
        *self = Self::new(deals);
    }

    /// All deals, newest first
    pub fn deals(&self) -> &[DealRecord] {
        &self.deals
    }

    /// Facets of the whole collection, independent of any criteria
    pub fn facets(&self) -> &FacetSet {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.deals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deals.is_empty()
    }

    /// Deals matching `criteria`, newest first
    pub fn filter(&self, criteria: &FilterCriteria) -> ViewResult<Vec<&DealRecord>> {
        apply_filters(&self.deals, criteria)
    }
}

impl From<Vec<DealRecord>> for DealView {
    fn from(deals: Vec<DealRecord>) -> Self {
        Self::new(deals)
    }
}
