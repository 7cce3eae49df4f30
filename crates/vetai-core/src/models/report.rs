//! Prediction result models.

use super::Category;
use serde::{Deserialize, Serialize};

/// Outcome of checking a predicted disease against the species compatibility
/// matrix. A mismatch is a result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_plausible: bool,
    /// Human-readable explanation of the verdict.
    pub reason: String,
    /// Set when the disease is documented but under a different category, or
    /// when the verdict could not be grounded in the matrix at all.
    pub requires_confirmation: bool,
    /// The category the disease was actually found under, when found.
    pub matched_category: Option<Category>,
}

/// Epidemiological annotation for a predicted disease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrevalenceInfo {
    pub prevalence: String,
    pub severity: String,
    pub urgency: String,
}

impl PrevalenceInfo {
    /// Sentinel returned for diseases without documented prevalence.
    pub fn unknown() -> Self {
        Self {
            prevalence: "Unknown".to_string(),
            severity: "Unknown".to_string(),
            urgency: "Consult Veterinarian".to_string(),
        }
    }
}

/// Recommended treatment for a predicted disease. Never empty: lookups fall
/// back to category-level guidance, then to a generic consult message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentInfo {
    pub treatment_plan: String,
    pub medications: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<String>,
    pub prognosis: String,
}

impl TreatmentInfo {
    /// Last-resort guidance when neither a specific nor a category entry applies.
    pub fn generic() -> Self {
        Self {
            treatment_plan: "Consult veterinarian for specific treatment protocols.".to_string(),
            medications: vec!["Symptomatic care".to_string()],
            follow_up: Some("Monitor condition closely.".to_string()),
            prognosis: "Unknown".to_string(),
        }
    }
}

/// Full output of the prediction cascade for one patient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub species: String,
    pub predicted_category: Category,
    pub predicted_disease: String,
    /// Stage-1 max class probability, rounded to 3 decimals.
    pub category_confidence: f64,
    /// Stage-2 probability of the predicted disease, rounded to 3 decimals.
    pub disease_confidence: f64,
    pub validation: ValidationResult,
    /// Populated only when the prediction is implausible.
    pub alternative_diseases: Vec<String>,
    pub prevalence: PrevalenceInfo,
    pub treatment: TreatmentInfo,
    /// True when the prediction is plausible and disease confidence exceeds 0.5.
    pub prediction_safe: bool,
}
