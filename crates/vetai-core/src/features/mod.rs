//! Feature vector construction.
//!
//! Converts a [`PatientRecord`] into the fixed-width numeric vector the
//! classifiers were trained on, plus a species index for the embedding-style
//! species bias. The column order is pinned; changing it means a new
//! artifact.

use crate::models::PatientRecord;
use serde::{Deserialize, Serialize};

/// Numeric feature columns in training order: base clinical values, derived
/// ratios, then the symptom flags.
pub const NUMERIC_COLUMNS: [&str; 21] = [
    "Age",
    "WBC",
    "RBC",
    "Hemoglobin",
    "Platelets",
    "Glucose",
    "ALT",
    "AST",
    "Urea",
    "Creatinine",
    "WBC_RBC_Ratio",
    "ALT_AST_Ratio",
    "Urea_Creatinine_Ratio",
    "Symptom_Fever",
    "Symptom_Lethargy",
    "Symptom_Vomiting",
    "Symptom_Diarrhea",
    "Symptom_WeightLoss",
    "Symptom_SkinLesion",
    "Symptom_Coughing",
    "Symptom_Lameness",
];

/// Maps species display names to the integer index the models expect.
///
/// The class list comes from the fitted artifact. Unrecognized species map to
/// the sentinel index one past the last class, which every model carries a
/// bias row for, so encoding never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEncoder {
    classes: Vec<String>,
}

impl SpeciesEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }

    /// Index of a species, or the unknown-species sentinel.
    pub fn index_of(&self, species: &str) -> usize {
        self.classes
            .iter()
            .position(|c| c == species)
            .unwrap_or(self.classes.len())
    }

    /// The sentinel index used for unrecognized species.
    pub fn sentinel(&self) -> usize {
        self.classes.len()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// A built feature vector ready for scaling and classification.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub numeric: Vec<f64>,
    pub species_index: usize,
}

/// Builds feature vectors in the pinned column order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureBuilder;

impl FeatureBuilder {
    /// Assemble the numeric vector and species index for a patient record.
    ///
    /// Output length always equals `NUMERIC_COLUMNS.len()` regardless of
    /// input values.
    pub fn build(record: &PatientRecord, encoder: &SpeciesEncoder) -> FeatureVector {
        let v = &record.vitals;
        let mut numeric = Vec::with_capacity(NUMERIC_COLUMNS.len());
        numeric.extend_from_slice(&[
            record.age,
            v.wbc,
            v.rbc,
            v.hemoglobin,
            v.platelets,
            v.glucose,
            v.alt,
            v.ast,
            v.urea,
            v.creatinine,
            safe_ratio(v.wbc, v.rbc),
            safe_ratio(v.alt, v.ast),
            safe_ratio(v.urea, v.creatinine),
        ]);
        numeric.extend_from_slice(&record.symptoms.as_flags());
        FeatureVector {
            numeric,
            species_index: encoder.index_of(&record.species),
        }
    }
}

/// Ratio with a guard: non-positive denominators yield 0.0.
fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PatientRecord, Symptoms};

    fn encoder() -> SpeciesEncoder {
        SpeciesEncoder::new(vec!["Cat".into(), "Cattle".into(), "Dog".into()])
    }

    #[test]
    fn test_vector_length_is_pinned() {
        let record = PatientRecord::new("Dog", 3.0);
        let fv = FeatureBuilder::build(&record, &encoder());
        assert_eq!(fv.numeric.len(), NUMERIC_COLUMNS.len());
    }

    #[test]
    fn test_known_species_index() {
        let record = PatientRecord::new("Cattle", 4.0);
        let fv = FeatureBuilder::build(&record, &encoder());
        assert_eq!(fv.species_index, 1);
    }

    #[test]
    fn test_unknown_species_uses_sentinel() {
        let record = PatientRecord::new("Dragon", 100.0);
        let fv = FeatureBuilder::build(&record, &encoder());
        assert_eq!(fv.species_index, encoder().sentinel());
        assert_eq!(fv.numeric.len(), NUMERIC_COLUMNS.len());
    }

    #[test]
    fn test_ratio_guard_on_zero_denominator() {
        let mut record = PatientRecord::new("Dog", 3.0);
        record.vitals.rbc = 0.0;
        record.vitals.ast = -1.0;
        let fv = FeatureBuilder::build(&record, &encoder());
        assert_eq!(fv.numeric[10], 0.0); // WBC/RBC
        assert_eq!(fv.numeric[11], 0.0); // ALT/AST
    }

    #[test]
    fn test_symptom_flags_at_tail() {
        let mut record = PatientRecord::new("Dog", 3.0);
        record.symptoms = Symptoms {
            fever: true,
            coughing: true,
            ..Symptoms::default()
        };
        let fv = FeatureBuilder::build(&record, &encoder());
        assert_eq!(fv.numeric[13], 1.0); // Symptom_Fever
        assert_eq!(fv.numeric[19], 1.0); // Symptom_Coughing
        assert_eq!(fv.numeric[20], 0.0); // Symptom_Lameness
    }
}
