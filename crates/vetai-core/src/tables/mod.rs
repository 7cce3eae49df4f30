//! Static veterinary knowledge tables.
//!
//! All disease matching in these tables is exact and case-sensitive by
//! policy. Disease names are the shared identity across the compatibility
//! matrix, the prevalence table, and the treatment database.

mod compatibility;
mod prevalence;
mod treatment;

pub use compatibility::*;
pub use prevalence::*;
pub use treatment::*;
