//! Newest-first ordering
//!
//! First stage of the deal pipeline. Sorting is stable, so records with the
//! same timestamp keep the order the backend returned them in.

use std::cmp::Reverse;

use shared::models::{CommissionRecord, DealRecord};

/// Sort deals by sale date, newest first
pub fn sort_newest_first(deals: &mut [DealRecord]) {
    deals.sort_by_key(|deal| Reverse(deal.sale_date));
}

/// Sort commissions by calculation time, newest first
pub fn sort_commissions_newest_first(commissions: &mut [CommissionRecord]) {
    commissions.sort_by_key(|c| Reverse(c.calculated_at));
}
