//! Biological plausibility checks against the compatibility matrix.

use crate::models::{Category, ValidationResult};
use crate::tables::CompatibilityMatrix;

/// Check a predicted disease against the matrix for a species.
///
/// Four outcomes:
/// - unknown species: implausible, confirmation required
/// - disease found under the predicted category: compatible
/// - disease found under another category: plausible but miscategorized,
///   confirmation required
/// - disease not documented for the species: implausible
pub fn validate(
    matrix: &CompatibilityMatrix,
    species: &str,
    disease: &str,
    predicted_category: Category,
) -> ValidationResult {
    if !matrix.is_known_species(species) {
        return ValidationResult {
            is_plausible: false,
            reason: format!("Unknown animal species: {species}"),
            requires_confirmation: true,
            matched_category: None,
        };
    }
    match matrix.find_disease(species, disease) {
        Some(found) if found == predicted_category => ValidationResult {
            is_plausible: true,
            reason: "Compatible".to_string(),
            requires_confirmation: false,
            matched_category: Some(found),
        },
        Some(found) => ValidationResult {
            is_plausible: true,
            reason: format!("Disease found but in {found}, not {predicted_category}"),
            requires_confirmation: true,
            matched_category: Some(found),
        },
        None => ValidationResult {
            is_plausible: false,
            reason: format!("{disease} is not documented for {species}"),
            requires_confirmation: true,
            matched_category: None,
        },
    }
}
