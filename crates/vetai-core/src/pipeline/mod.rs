//! The prediction cascade.
//!
//! Pipeline: Feature Building → Stage 1 (category) → Stage 2 (disease) →
//! Biological Validation → Prevalence/Treatment Annotation

mod annotator;
mod validator;

pub use annotator::*;
pub use validator::*;

use crate::classifier::{ModelArtifact, ModelError};
use crate::features::FeatureBuilder;
use crate::models::{Category, PatientRecord, PredictionReport};
use crate::tables::{CompatibilityMatrix, PrevalenceTable, TreatmentTable};
use thiserror::Error;
use tracing::debug;

/// How many alternative diseases to suggest for implausible predictions.
const ALTERNATIVES_TOP_N: usize = 3;

/// Minimum disease confidence for a plausible prediction to count as safe.
const SAFE_CONFIDENCE: f64 = 0.5;

/// Per-request prediction errors. Each aborts only the single request.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error(transparent)]
    Schema(#[from] ModelError),

    /// The artifact bank carries no model for the predicted category. This
    /// indicates artifact corruption and is never silently defaulted.
    #[error("no disease model for predicted category {0}")]
    UnknownCategory(Category),

    #[error("label id {id} out of range ({count} labels)")]
    UnknownLabel { id: usize, count: usize },
}

pub type PredictResult<T> = Result<T, PredictError>;

/// Immutable bundle of everything a prediction needs.
///
/// Built once at startup and shared behind an `Arc` by concurrent callers;
/// pointing at a new artifact means building a new context.
#[derive(Debug)]
pub struct InferenceContext {
    artifact: ModelArtifact,
    matrix: CompatibilityMatrix,
    prevalence: PrevalenceTable,
    treatments: TreatmentTable,
}

impl InferenceContext {
    /// Context over an artifact with the built-in knowledge tables.
    pub fn new(artifact: ModelArtifact) -> Self {
        Self {
            artifact,
            matrix: CompatibilityMatrix::default(),
            prevalence: PrevalenceTable::default(),
            treatments: TreatmentTable::default(),
        }
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    pub fn matrix(&self) -> &CompatibilityMatrix {
        &self.matrix
    }

    /// Run the full cascade for one patient record.
    pub fn predict(&self, record: &PatientRecord) -> PredictResult<PredictionReport> {
        let fv = FeatureBuilder::build(record, &self.artifact.species);
        let scaled = self.artifact.scaler.transform(&fv.numeric)?;

        // Stage 1: disease category
        let (cat_id, cat_probs) = self.artifact.category_model.predict(&scaled, fv.species_index);
        let category = *self
            .artifact
            .categories
            .get(cat_id)
            .ok_or(PredictError::UnknownLabel {
                id: cat_id,
                count: self.artifact.categories.len(),
            })?;
        let category_confidence = self
            .artifact
            .category_model
            .confidence_for(&cat_probs, cat_id)
            .ok_or(PredictError::UnknownLabel {
                id: cat_id,
                count: self.artifact.categories.len(),
            })?;

        // Stage 2: disease within the category
        let entry = self
            .artifact
            .disease_model(category)
            .ok_or(PredictError::UnknownCategory(category))?;
        let (disease_id, disease_probs) = entry.model.predict(&scaled, fv.species_index);
        let disease = entry
            .labels
            .get(disease_id)
            .ok_or(PredictError::UnknownLabel {
                id: disease_id,
                count: entry.labels.len(),
            })?
            .clone();
        // Confidence is resolved through the model's own class list; the
        // predicted id is not a row index.
        let disease_confidence = entry
            .model
            .confidence_for(&disease_probs, disease_id)
            .ok_or(PredictError::UnknownLabel {
                id: disease_id,
                count: entry.labels.len(),
            })?;

        let validation = validate(&self.matrix, &record.species, &disease, category);
        let alternative_diseases = if validation.is_plausible {
            Vec::new()
        } else {
            self.matrix
                .alternatives(&record.species, category, ALTERNATIVES_TOP_N)
        };

        let prevalence = annotate_prevalence(&self.prevalence, &disease);
        let treatment = annotate_treatment(&self.treatments, &disease, category);

        debug!(
            species = %record.species,
            %category,
            %disease,
            plausible = validation.is_plausible,
            "prediction complete"
        );

        Ok(PredictionReport {
            species: record.species.clone(),
            predicted_category: category,
            predicted_disease: disease,
            category_confidence: round3(category_confidence),
            disease_confidence: round3(disease_confidence),
            prediction_safe: validation.is_plausible && disease_confidence > SAFE_CONFIDENCE,
            validation,
            alternative_diseases,
            prevalence,
            treatment,
        })
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Symptoms;

    fn ctx() -> InferenceContext {
        InferenceContext::new(ModelArtifact::demo())
    }

    fn record(species: &str, symptoms: Symptoms) -> PatientRecord {
        let mut r = PatientRecord::new(species, 3.0);
        r.symptoms = symptoms;
        r
    }

    #[test]
    fn test_parvo_presentation() {
        let report = ctx()
            .predict(&record(
                "Dog",
                Symptoms {
                    fever: true,
                    lethargy: true,
                    vomiting: true,
                    diarrhea: true,
                    ..Symptoms::default()
                },
            ))
            .unwrap();
        assert_eq!(report.predicted_category, Category::Viral);
        assert_eq!(report.predicted_disease, "Canine Parvovirus");
        assert!(report.validation.is_plausible);
        assert!(report.prediction_safe);
        assert!(report.alternative_diseases.is_empty());
    }

    #[test]
    fn test_confidences_rounded_to_three_decimals() {
        let report = ctx()
            .predict(&record(
                "Dog",
                Symptoms {
                    lameness: true,
                    ..Symptoms::default()
                },
            ))
            .unwrap();
        for conf in [report.category_confidence, report.disease_confidence] {
            assert!((0.0..=1.0).contains(&conf));
            assert_eq!(conf, round3(conf));
        }
    }

    #[test]
    fn test_unknown_species_still_predicts() {
        let report = ctx()
            .predict(&record(
                "Dragon",
                Symptoms {
                    coughing: true,
                    fever: true,
                    ..Symptoms::default()
                },
            ))
            .unwrap();
        assert!(!report.validation.is_plausible);
        assert_eq!(
            report.validation.reason,
            "Unknown animal species: Dragon"
        );
        // No matrix entry, so no alternatives either.
        assert!(report.alternative_diseases.is_empty());
    }

    #[test]
    fn test_missing_bank_entry_is_loud() {
        let mut artifact = ModelArtifact::demo();
        artifact.disease_models.remove(&Category::Musculoskeletal);
        let ctx = InferenceContext::new(artifact);
        let err = ctx
            .predict(&record(
                "Dog",
                Symptoms {
                    lameness: true,
                    ..Symptoms::default()
                },
            ))
            .unwrap_err();
        assert!(matches!(
            err,
            PredictError::UnknownCategory(Category::Musculoskeletal)
        ));
    }

    #[test]
    fn test_treatment_is_never_empty() {
        let report = ctx()
            .predict(&record(
                "Dog",
                Symptoms {
                    weight_loss: true,
                    ..Symptoms::default()
                },
            ))
            .unwrap();
        assert!(!report.treatment.treatment_plan.is_empty());
        assert!(!report.treatment.medications.is_empty());
    }
}
