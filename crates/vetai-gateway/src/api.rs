//! The prediction request/response contract and service.

use crate::monitoring::SystemMonitor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};
use vetai_core::classifier::ModelArtifact;
use vetai_core::models::{
    Category, Gender, PatientRecord, PredictionReport, PrevalenceInfo, Symptoms, TreatmentInfo,
    ValidationResult, Vitals,
};
use vetai_core::pipeline::InferenceContext;

/// An incoming prediction request. Vitals and symptoms are optional and
/// default to the documented reference values / all-false flags, so a
/// minimal request is just species and age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub species: String,
    pub age: f64,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub vitals: Vitals,
    #[serde(default)]
    pub symptoms: Symptoms,
}

impl PredictionRequest {
    pub fn to_record(&self) -> PatientRecord {
        PatientRecord {
            species: self.species.clone(),
            age: self.age,
            gender: self.gender,
            breed: self.breed.clone(),
            vitals: self.vitals.clone(),
            symptoms: self.symptoms,
        }
    }
}

/// The outgoing prediction response. Internal failures produce
/// `success: false` with a message; the field set mirrors the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predicted_disease: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disease_confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biological_validation: Option<ValidationResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_diseases: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevalence: Option<PrevalenceInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment: Option<TreatmentInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_safe: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResponse {
    pub fn from_report(report: PredictionReport) -> Self {
        Self {
            success: true,
            predicted_category: Some(report.predicted_category),
            predicted_disease: Some(report.predicted_disease),
            category_confidence: Some(report.category_confidence),
            disease_confidence: Some(report.disease_confidence),
            biological_validation: Some(report.validation),
            alternative_diseases: report.alternative_diseases,
            prevalence: Some(report.prevalence),
            treatment: Some(report.treatment),
            prediction_safe: Some(report.prediction_safe),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            predicted_category: None,
            predicted_disease: None,
            category_confidence: None,
            disease_confidence: None,
            biological_validation: None,
            alternative_diseases: Vec::new(),
            prevalence: None,
            treatment: None,
            prediction_safe: None,
            error: Some(message.into()),
        }
    }
}

/// Handles prediction requests against an optional inference context.
///
/// `context` is `None` when the artifact failed to load at startup; in that
/// state every request gets an error response, but telemetry and monitoring
/// keep running.
pub struct PredictionService {
    context: Option<Arc<InferenceContext>>,
    monitor: Arc<SystemMonitor>,
}

impl PredictionService {
    pub fn new(context: Option<Arc<InferenceContext>>, monitor: Arc<SystemMonitor>) -> Self {
        Self { context, monitor }
    }

    /// Build a service by loading an artifact file. A load failure disables
    /// prediction instead of failing startup.
    pub fn from_artifact_path(path: impl AsRef<Path>, monitor: Arc<SystemMonitor>) -> Self {
        let context = match ModelArtifact::load(path.as_ref()) {
            Ok(artifact) => Some(Arc::new(InferenceContext::new(artifact))),
            Err(e) => {
                error!(
                    path = %path.as_ref().display(),
                    error = %e,
                    "artifact load failed; prediction disabled"
                );
                None
            }
        };
        Self::new(context, monitor)
    }

    pub fn is_enabled(&self) -> bool {
        self.context.is_some()
    }

    pub fn context(&self) -> Option<&Arc<InferenceContext>> {
        self.context.as_ref()
    }

    /// Handle one request: predict, log the event win or lose, respond.
    pub fn handle(&self, request: &PredictionRequest) -> PredictionResponse {
        let started = Instant::now();
        let record = request.to_record();
        let response = match &self.context {
            None => PredictionResponse::failure("models not loaded"),
            Some(ctx) => match ctx.predict(&record) {
                Ok(report) => PredictionResponse::from_report(report),
                Err(e) => {
                    error!(species = %record.species, error = %e, "prediction failed");
                    PredictionResponse::failure(e.to_string())
                }
            },
        };
        let latency_ms = started.elapsed().as_secs_f64() * 1000.0;
        if let Err(e) = self.monitor.log_prediction(&record.species, &response, latency_ms) {
            warn!(error = %e, "failed to log prediction");
        }
        info!(
            species = %record.species,
            success = response.success,
            latency_ms,
            "prediction handled"
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> (tempfile::TempDir, Arc<SystemMonitor>) {
        let dir = tempfile::tempdir().unwrap();
        let monitor = Arc::new(SystemMonitor::new(dir.path()).unwrap());
        (dir, monitor)
    }

    fn parvo_request() -> PredictionRequest {
        PredictionRequest {
            species: "Dog".to_string(),
            age: 2.0,
            gender: Gender::Male,
            breed: "Beagle".to_string(),
            vitals: Vitals::default(),
            symptoms: Symptoms {
                fever: true,
                lethargy: true,
                vomiting: true,
                diarrhea: true,
                ..Symptoms::default()
            },
        }
    }

    #[test]
    fn test_minimal_request_deserializes_with_defaults() {
        let request: PredictionRequest =
            serde_json::from_str(r#"{"species": "Dog", "age": 3.0}"#).unwrap();
        assert_eq!(request.vitals, Vitals::default());
        assert_eq!(request.symptoms, Symptoms::default());
        assert_eq!(request.gender, Gender::Unknown);
    }

    #[test]
    fn test_handle_success_and_log() {
        let (_dir, monitor) = monitor();
        let ctx = Arc::new(InferenceContext::new(ModelArtifact::demo()));
        let service = PredictionService::new(Some(ctx), Arc::clone(&monitor));
        let response = service.handle(&parvo_request());
        assert!(response.success);
        assert_eq!(response.predicted_disease.as_deref(), Some("Canine Parvovirus"));
        assert_eq!(response.error, None);

        let logged = monitor.recent_predictions(10);
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].status, "success");
        assert_eq!(logged[0].animal, "Dog");
        assert_eq!(logged[0].disease.as_deref(), Some("Canine Parvovirus"));
        assert!(logged[0].latency_ms >= 0.0);
    }

    #[test]
    fn test_disabled_service_returns_error_response() {
        let (_dir, monitor) = monitor();
        let service = PredictionService::new(None, Arc::clone(&monitor));
        let response = service.handle(&parvo_request());
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("models not loaded"));
        assert_eq!(monitor.recent_predictions(10)[0].status, "error");
    }

    #[test]
    fn test_from_artifact_path_bad_file_disables() {
        let (_dir, monitor) = monitor();
        let service = PredictionService::from_artifact_path("no/such/artifact.json", monitor);
        assert!(!service.is_enabled());
    }

    #[test]
    fn test_failure_response_omits_result_fields() {
        let json = serde_json::to_value(PredictionResponse::failure("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("predicted_disease").is_none());
        assert!(json.get("treatment").is_none());
    }
}
