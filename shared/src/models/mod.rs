//! Data models
//!
//! Record shapes exchanged with the backend collaborator plus the values
//! the record view engine derives from them. Wire names are camelCase.
//! All IDs are `i64`.

pub mod commission;
pub mod deal;
pub mod facet;
pub mod filter;
pub mod summary;

// Re-exports
pub use commission::*;
pub use deal::*;
pub use facet::*;
pub use filter::*;
pub use summary::*;
