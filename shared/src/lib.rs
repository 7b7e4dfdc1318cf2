//! Shared types for Deal Desk
//!
//! Record models, filter criteria, error codes, and the money / date
//! helpers used by the record view engine and its callers.

pub mod error;
pub mod models;
pub mod money;
pub mod time;

// Re-exports
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};

pub use error::{DateBound, ErrorCategory, ErrorCode, ViewError, ViewResult};
pub use models::{
    AgentPerformance, CommissionRecord, CommissionSummary, DealRecord, FacetSet, FilterCriteria,
};
