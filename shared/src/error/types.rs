//! Record view error types

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which end of a date range a bound belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateBound {
    Start,
    End,
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateBound::Start => write!(f, "start"),
            DateBound::End => write!(f, "end"),
        }
    }
}

/// Errors raised by the record view engine
///
/// Every variant is a data-quality error. The engine never substitutes a
/// default for the offending value: what an unparsable amount or bound
/// should mean is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// A currency string on a record failed decimal parsing
    #[error("Malformed {field} on record {record_id}: {value:?}")]
    MalformedAmount {
        /// Wire name of the offending field (`amount`, `salePrice`)
        field: &'static str,
        record_id: i64,
        value: String,
    },

    /// A filter date bound failed to parse
    #[error("Invalid {bound} date bound: {value:?}")]
    InvalidDateBound { bound: DateBound, value: String },

    /// Adding this record's amount pushed a running sum out of the decimal range
    #[error("{field} total overflowed at record {record_id}")]
    AmountOverflow {
        /// Wire name of the summed field (`amount`, `salePrice`)
        field: &'static str,
        record_id: i64,
    },
}

impl ViewError {
    // ========== Convenient constructors ==========

    /// Create a MalformedAmount error
    pub fn malformed_amount(
        field: &'static str,
        record_id: i64,
        value: impl Into<String>,
    ) -> Self {
        Self::MalformedAmount {
            field,
            record_id,
            value: value.into(),
        }
    }

    /// Create an InvalidDateBound error
    pub fn invalid_date_bound(bound: DateBound, value: impl Into<String>) -> Self {
        Self::InvalidDateBound {
            bound,
            value: value.into(),
        }
    }

    /// Create an AmountOverflow error
    pub fn amount_overflow(field: &'static str, record_id: i64) -> Self {
        Self::AmountOverflow { field, record_id }
    }

    // ========== Error inspection methods ==========

    /// Get the error code for this error
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::MalformedAmount { .. } => ErrorCode::MalformedAmount,
            Self::InvalidDateBound { .. } => ErrorCode::InvalidDateBound,
            Self::AmountOverflow { .. } => ErrorCode::AmountOverflow,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        self.error_code().into()
    }
}

/// Result type for record view operations
pub type ViewResult<T> = Result<T, ViewError>;
