//! VetAI Core Library
//!
//! Two-stage veterinary disease prediction with biological plausibility
//! validation and telemetry rule checking.
//!
//! # Architecture
//!
//! ```text
//! PatientRecord → Feature Building → Stage 1 (category classifier)
//!                                          │
//!                              Stage 2 (per-category disease model)
//!                                          │
//!                          ┌───────────────▼───────────────┐
//!                          │   Biological Validation       │
//!                          │   (species/disease matrix)    │
//!                          └───────────────┬───────────────┘
//!                                          │
//!                  ┌───────────────────────┼───────────────────────┐
//!                  │                       │                       │
//!                  ▼                       ▼                       ▼
//!             Prevalence             Treatment               Alternatives
//!             Annotation              Lookup             (when implausible)
//! ```
//!
//! # Core Principle
//!
//! **Every prediction carries its plausibility verdict.** An implausible
//! prediction is a first-class result with suggested alternatives, never a
//! silent error or a patched-over answer.
//!
//! # Modules
//!
//! - [`models`]: Domain types (PatientRecord, Category, PredictionReport, etc.)
//! - [`tables`]: Static veterinary knowledge (compatibility matrix, prevalence, treatments)
//! - [`features`]: Patient record to numeric feature vector conversion
//! - [`classifier`]: Deterministic softmax models and the pinned artifact format
//! - [`pipeline`]: The full prediction cascade (InferenceContext)
//! - [`telemetry`]: Vital-sign rule engine for IoT readings

pub mod classifier;
pub mod features;
pub mod models;
pub mod pipeline;
pub mod tables;
pub mod telemetry;

// Re-export commonly used types
pub use classifier::{ArtifactError, ModelArtifact, Scaler, SoftmaxModel};
pub use features::{FeatureBuilder, FeatureVector, SpeciesEncoder, NUMERIC_COLUMNS};
pub use models::{
    Category, Gender, PatientRecord, PredictionReport, PrevalenceInfo, Symptoms, TreatmentInfo,
    ValidationResult, Vitals,
};
pub use pipeline::{InferenceContext, PredictError};
pub use tables::{CompatibilityMatrix, PrevalenceTable, TreatmentTable};
pub use telemetry::{Alert, AlertSeverity, RuleEngine, VitalsAnalysis};
