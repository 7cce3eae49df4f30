//! VetAI Gateway Library
//!
//! The serving boundary around [`vetai_core`]: typed prediction
//! request/response handling, IoT telemetry ingestion with a device
//! registry, and JSON-lines monitoring logs with a background health
//! sampler.
//!
//! # Architecture
//!
//! ```text
//! PredictionRequest ──► PredictionService ──► InferenceContext (core)
//!                              │
//!                              └──► prediction_log.jsonl
//!
//! TelemetryReading ──► IotGateway ──► RuleEngine (core) ──► alerts/actions
//!                          │
//!                          ├──► stream buffers (last 50 per device)
//!                          └──► diagnose: telemetry ──► symptoms ──► cascade
//!
//! HealthSampler (thread) ──► system_metrics.jsonl
//! ```
//!
//! A failed artifact load disables prediction but leaves telemetry and
//! monitoring fully operational. Per-request failures produce error
//! responses; the process never crashes on a request.
//!
//! # Modules
//!
//! - [`api`]: Prediction request/response contract and service
//! - [`gateway`]: Telemetry ingestion, dashboard summary, diagnosis trigger
//! - [`registry`]: Device-to-animal registry
//! - [`monitoring`]: JSON-lines logs and the background health sampler

pub mod api;
pub mod gateway;
pub mod monitoring;
pub mod registry;

// Re-export commonly used types
pub use api::{PredictionRequest, PredictionResponse, PredictionService};
pub use gateway::{
    DashboardEntry, DeviceStatus, Diagnosis, IngestOutcome, IotGateway, TelemetryReading,
    TelemetryStatus,
};
pub use monitoring::{HealthSampler, JsonlLog, PredictionLogEntry, SystemHealthEntry, SystemMonitor};
pub use registry::{DeviceProfile, DeviceRegistry};

use thiserror::Error;

/// Gateway-level errors.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("device not registered: {0}")]
    UnknownDevice(String),

    #[error("no telemetry buffered for device: {0}")]
    NoTelemetry(String),

    #[error("prediction is disabled: no model artifact is loaded")]
    PredictionsDisabled,

    #[error(transparent)]
    Predict(#[from] vetai_core::PredictError),

    #[error("log I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("log lock poisoned")]
    LockPoisoned,
}

impl<T> From<std::sync::PoisonError<T>> for GatewayError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        GatewayError::LockPoisoned
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;
