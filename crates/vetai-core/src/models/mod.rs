//! Domain models for prediction requests and results.

mod category;
mod patient;
mod report;

pub use category::*;
pub use patient::*;
pub use report::*;
