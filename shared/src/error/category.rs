//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 1xxx: Record data errors
/// - 2xxx: Record source errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Record data errors (1xxx)
    Data,
    /// Record source errors (2xxx)
    Source,
}

impl ErrorCategory {
    /// Determine category from error code value, None outside the known ranges
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1000..2000 => Some(Self::Data),
            2000..3000 => Some(Self::Source),
            _ => None,
        }
    }

    /// Data-quality errors are reported upward for a business decision,
    /// never recovered locally.
    pub fn is_data_quality(&self) -> bool {
        matches!(self, Self::Data)
    }
}

impl From<ErrorCode> for ErrorCategory {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::MalformedAmount
            | ErrorCode::InvalidDateBound
            | ErrorCode::AmountOverflow => Self::Data,
            ErrorCode::SourceUnavailable | ErrorCode::SourcePayloadInvalid => Self::Source,
        }
    }
}
