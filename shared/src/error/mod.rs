//! Unified error system for Deal Desk
//!
//! - [`ErrorCode`]: Standardized numeric error codes
//! - [`ErrorCategory`]: Classification of errors by code range
//! - [`ViewError`]: Data-quality errors raised by the record view engine
//!
//! # Error Code Ranges
//!
//! - 1xxx: Record data errors
//! - 2xxx: Record source errors
//!
//! # Example
//!
//! ```
//! use shared::error::{DateBound, ErrorCode, ViewError};
//!
//! let err = ViewError::invalid_date_bound(DateBound::Start, "yesterday");
//! assert_eq!(err.error_code(), ErrorCode::InvalidDateBound);
//! ```

pub mod category;
pub mod codes;
pub mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{DateBound, ViewError, ViewResult};
