//! Unified error codes for the Deal Desk workspace
//!
//! Error codes are organized by category:
//! - 1xxx: Record data errors (amounts, date bounds)
//! - 2xxx: Record source errors (collaborator fetch)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so callers in other languages can match on
/// them without knowing the Rust variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 1xxx: Record data ====================
    /// A currency amount string failed decimal parsing
    MalformedAmount = 1001,
    /// A filter date bound failed to parse
    InvalidDateBound = 1002,
    /// A running sum of amounts exceeded the decimal range
    AmountOverflow = 1003,

    // ==================== 2xxx: Record source ====================
    /// The collaborator could not be reached or read
    SourceUnavailable = 2001,
    /// The collaborator returned something other than a record array
    SourcePayloadInvalid = 2002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::MalformedAmount => "Malformed currency amount",
            ErrorCode::InvalidDateBound => "Invalid filter date bound",
            ErrorCode::AmountOverflow => "Amount total out of range",

            ErrorCode::SourceUnavailable => "Record source unavailable",
            ErrorCode::SourcePayloadInvalid => "Record source returned an invalid payload",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Record data
            1001 => Ok(ErrorCode::MalformedAmount),
            1002 => Ok(ErrorCode::InvalidDateBound),
            1003 => Ok(ErrorCode::AmountOverflow),

            // Record source
            2001 => Ok(ErrorCode::SourceUnavailable),
            2002 => Ok(ErrorCode::SourcePayloadInvalid),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
