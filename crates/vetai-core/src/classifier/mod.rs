//! Deterministic classifiers and the pinned model artifact format.
//!
//! Stage 1 predicts a disease category from the scaled feature vector; stage
//! 2 runs a category-specific model from the bank. Models are plain linear
//! softmax classifiers whose parameters ship in a single validated JSON
//! artifact, loaded once at startup.

mod artifact;
mod model;

pub use artifact::*;
pub use model::*;
