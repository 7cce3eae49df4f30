//! The pinned model artifact format.
//!
//! A single JSON file carries everything inference needs: feature schema,
//! scaler parameters, species and category encoders, the stage-1 category
//! model, and the per-category disease model bank. The file is validated
//! structurally at load; any violation disables prediction rather than being
//! patched around.

use super::model::{Scaler, SoftmaxModel};
use crate::features::{SpeciesEncoder, NUMERIC_COLUMNS};
use crate::models::Category;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Artifact schema version this build understands.
pub const SCHEMA_VERSION: u32 = 1;

/// Errors raised while loading or validating an artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed artifact: {0}")]
    Format(#[from] serde_json::Error),

    #[error("artifact schema violation: {0}")]
    Schema(String),
}

pub type ArtifactResult<T> = Result<T, ArtifactError>;

/// A stage-2 disease model together with its own label list.
///
/// `model.class_ids` index into `labels`; the list belongs to this model
/// alone and is not shared with any other bank entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseModelEntry {
    pub labels: Vec<String>,
    pub model: SoftmaxModel,
}

/// The complete, immutable set of fitted parameters for one model
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub schema_version: u32,
    /// Numeric feature columns in training order.
    pub feature_names: Vec<String>,
    pub scaler: Scaler,
    pub species: SpeciesEncoder,
    /// External label id for stage 1 is the position in this list.
    pub categories: Vec<Category>,
    pub category_model: SoftmaxModel,
    pub disease_models: HashMap<Category, DiseaseModelEntry>,
}

impl ModelArtifact {
    /// Load and validate an artifact file.
    pub fn load(path: impl AsRef<Path>) -> ArtifactResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let artifact: ModelArtifact = serde_json::from_slice(&bytes)?;
        artifact.validate()?;
        info!(
            path = %path.display(),
            categories = artifact.categories.len(),
            species = artifact.species.classes().len(),
            "model artifact loaded"
        );
        Ok(artifact)
    }

    /// Persist the artifact as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> ArtifactResult<()> {
        let json = serde_json::to_vec_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Assemble an artifact from already-parsed parts, with full validation.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        feature_names: Vec<String>,
        scaler: Scaler,
        species: SpeciesEncoder,
        categories: Vec<Category>,
        category_model: SoftmaxModel,
        disease_models: HashMap<Category, DiseaseModelEntry>,
    ) -> ArtifactResult<Self> {
        let artifact = Self {
            schema_version: SCHEMA_VERSION,
            feature_names,
            scaler,
            species,
            categories,
            category_model,
            disease_models,
        };
        artifact.validate()?;
        Ok(artifact)
    }

    /// The stage-2 model for a category, if the bank carries one.
    pub fn disease_model(&self, category: Category) -> Option<&DiseaseModelEntry> {
        self.disease_models.get(&category)
    }

    /// Structural consistency checks. Every violation is loud.
    pub fn validate(&self) -> ArtifactResult<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(ArtifactError::Schema(format!(
                "unsupported schema version {} (expected {})",
                self.schema_version, SCHEMA_VERSION
            )));
        }
        let n_features = self.feature_names.len();
        if self.scaler.n_features() != n_features || self.scaler.std.len() != n_features {
            return Err(ArtifactError::Schema(format!(
                "scaler dimensions ({}/{}) do not match {} feature names",
                self.scaler.mean.len(),
                self.scaler.std.len(),
                n_features
            )));
        }
        let n_species_rows = self.species.classes().len() + 1;
        validate_model(
            &self.category_model,
            n_features,
            self.categories.len(),
            n_species_rows,
            "category model",
        )?;
        for (category, entry) in &self.disease_models {
            validate_model(
                &entry.model,
                n_features,
                entry.labels.len(),
                n_species_rows,
                &format!("{category} disease model"),
            )?;
        }
        for category in &self.categories {
            if !self.disease_models.contains_key(category) {
                warn!(%category, "artifact has no disease model for category");
            }
        }
        Ok(())
    }

    /// A small self-contained artifact for demos and tests.
    ///
    /// Species classes are Cat, Cattle, Dog, Horse; disease labels are the
    /// Dog entries of the compatibility matrix, driven purely by symptom
    /// weights so predictions are easy to reason about.
    pub fn demo() -> Self {
        // Symptom column indices within NUMERIC_COLUMNS.
        const FEVER: usize = 13;
        const LETHARGY: usize = 14;
        const VOMITING: usize = 15;
        const DIARRHEA: usize = 16;
        const WEIGHT_LOSS: usize = 17;
        const SKIN_LESION: usize = 18;
        const COUGHING: usize = 19;
        const LAMENESS: usize = 20;

        let n = NUMERIC_COLUMNS.len();
        let row = |pairs: &[(usize, f64)]| -> Vec<f64> {
            let mut r = vec![0.0; n];
            for &(col, w) in pairs {
                r[col] = w;
            }
            r
        };
        let species = SpeciesEncoder::new(vec![
            "Cat".to_string(),
            "Cattle".to_string(),
            "Dog".to_string(),
            "Horse".to_string(),
        ]);
        let n_species_rows = species.classes().len() + 1;
        let model = |rows: Vec<Vec<f64>>| -> SoftmaxModel {
            let k = rows.len();
            SoftmaxModel {
                class_ids: (0..k).collect(),
                weights: rows,
                bias: vec![0.0; k],
                species_bias: vec![vec![0.0; k]; n_species_rows],
            }
        };

        // Category rows in Category::ALL order.
        let category_model = model(vec![
            row(&[(FEVER, 2.0), (VOMITING, 2.0), (DIARRHEA, 2.0), (LETHARGY, 1.0)]),
            row(&[(FEVER, 1.0), (DIARRHEA, 1.0)]),
            row(&[(DIARRHEA, 1.0), (WEIGHT_LOSS, 1.0)]),
            row(&[(WEIGHT_LOSS, 2.0)]),
            row(&[(COUGHING, 4.0)]),
            row(&[(LETHARGY, 2.0), (COUGHING, 1.0)]),
            row(&[(LAMENESS, 4.0)]),
            row(&[(VOMITING, 1.5), (DIARRHEA, 1.5)]),
        ]);

        let labels = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let mut bank = HashMap::new();
        bank.insert(
            Category::Viral,
            DiseaseModelEntry {
                labels: labels(&[
                    "Canine Distemper",
                    "Canine Parvovirus",
                    "Rabies",
                    "Canine Influenza",
                    "Kennel Cough",
                ]),
                model: model(vec![
                    row(&[(FEVER, 1.0), (COUGHING, 2.0)]),
                    row(&[(VOMITING, 2.0), (DIARRHEA, 2.0), (LETHARGY, 1.0), (FEVER, 1.0)]),
                    row(&[]),
                    row(&[(FEVER, 2.0), (COUGHING, 1.0)]),
                    row(&[(COUGHING, 3.0)]),
                ]),
            },
        );
        bank.insert(
            Category::Bacterial,
            DiseaseModelEntry {
                labels: labels(&[
                    "Leptospirosis",
                    "Bordetella",
                    "Salmonellosis",
                    "E.coli Infection",
                    "Brucellosis",
                ]),
                model: model(vec![
                    row(&[(FEVER, 2.0), (LETHARGY, 1.0)]),
                    row(&[(COUGHING, 2.0)]),
                    row(&[(DIARRHEA, 2.0), (VOMITING, 1.0)]),
                    row(&[(DIARRHEA, 1.0)]),
                    row(&[]),
                ]),
            },
        );
        bank.insert(
            Category::Parasitic,
            DiseaseModelEntry {
                labels: labels(&["Roundworm", "Hookworm", "Tapeworm", "Giardia", "Heartworm"]),
                model: model(vec![
                    row(&[(WEIGHT_LOSS, 1.0)]),
                    row(&[]),
                    row(&[(WEIGHT_LOSS, 0.5)]),
                    row(&[(DIARRHEA, 2.0)]),
                    row(&[(COUGHING, 2.0), (LETHARGY, 1.0)]),
                ]),
            },
        );
        bank.insert(
            Category::Metabolic,
            DiseaseModelEntry {
                labels: labels(&[
                    "Diabetes Mellitus",
                    "Kidney Disease",
                    "Liver Disease",
                    "Hypothyroidism",
                    "Cushings Disease",
                ]),
                model: model(vec![
                    row(&[(WEIGHT_LOSS, 2.0)]),
                    row(&[(VOMITING, 1.0), (LETHARGY, 1.0)]),
                    row(&[(VOMITING, 1.0)]),
                    row(&[(LETHARGY, 1.0)]),
                    row(&[(SKIN_LESION, 2.0)]),
                ]),
            },
        );
        bank.insert(
            Category::Respiratory,
            DiseaseModelEntry {
                labels: labels(&[
                    "Pneumonia",
                    "Bronchitis",
                    "Tracheal Collapse",
                    "Laryngeal Paralysis",
                    "Pulmonary Edema",
                ]),
                model: model(vec![
                    row(&[(COUGHING, 2.0), (FEVER, 2.0), (LETHARGY, 1.0)]),
                    row(&[(COUGHING, 1.5)]),
                    row(&[]),
                    row(&[]),
                    row(&[]),
                ]),
            },
        );
        bank.insert(
            Category::Cardiovascular,
            DiseaseModelEntry {
                labels: labels(&[
                    "Dilated Cardiomyopathy",
                    "Mitral Valve Disease",
                    "Congestive Heart Failure",
                    "Arrhythmia",
                    "Pericardial Effusion",
                ]),
                model: model(vec![
                    row(&[(LETHARGY, 2.0), (COUGHING, 1.0)]),
                    row(&[]),
                    row(&[(COUGHING, 2.0)]),
                    row(&[]),
                    row(&[]),
                ]),
            },
        );
        bank.insert(
            Category::Musculoskeletal,
            DiseaseModelEntry {
                labels: labels(&[
                    "Hip Dysplasia",
                    "Arthritis",
                    "Cruciate Ligament Rupture",
                    "Patellar Luxation",
                    "Osteochondrosis",
                ]),
                model: model(vec![
                    row(&[(LAMENESS, 2.0)]),
                    row(&[(LAMENESS, 1.0)]),
                    row(&[]),
                    row(&[]),
                    row(&[]),
                ]),
            },
        );
        bank.insert(
            Category::Gastrointestinal,
            DiseaseModelEntry {
                labels: labels(&[
                    "Gastroenteritis",
                    "Pancreatitis",
                    "IBD",
                    "Colitis",
                    "Gastric Dilation",
                ]),
                model: model(vec![
                    row(&[(VOMITING, 1.5), (DIARRHEA, 1.5)]),
                    row(&[(VOMITING, 1.0)]),
                    row(&[]),
                    row(&[(DIARRHEA, 1.0)]),
                    row(&[]),
                ]),
            },
        );

        // Reference defaults scale to zero so only symptom flags move logits.
        let mean = vec![
            3.0, 8.0, 6.0, 14.0, 300.0, 100.0, 40.0, 40.0, 25.0, 1.0,
            8.0 / 6.0, 1.0, 25.0,
            0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        ];
        let artifact = Self {
            schema_version: SCHEMA_VERSION,
            feature_names: NUMERIC_COLUMNS.iter().map(|s| s.to_string()).collect(),
            scaler: Scaler {
                mean,
                std: vec![1.0; n],
            },
            species,
            categories: Category::ALL.to_vec(),
            category_model,
            disease_models: bank,
        };
        debug_assert!(artifact.validate().is_ok());
        artifact
    }
}

fn validate_model(
    model: &SoftmaxModel,
    n_features: usize,
    n_labels: usize,
    n_species_rows: usize,
    context: &str,
) -> ArtifactResult<()> {
    let k = model.class_ids.len();
    // A model with no output classes would make every dimension check below
    // vacuous and cannot classify anything.
    if k == 0 {
        return Err(ArtifactError::Schema(format!(
            "{context}: model has no output classes"
        )));
    }
    if model.weights.len() != k || model.bias.len() != k {
        return Err(ArtifactError::Schema(format!(
            "{context}: {} weight rows / {} biases for {} classes",
            model.weights.len(),
            model.bias.len(),
            k
        )));
    }
    for (i, row) in model.weights.iter().enumerate() {
        if row.len() != n_features {
            return Err(ArtifactError::Schema(format!(
                "{context}: weight row {i} has {} columns, expected {n_features}",
                row.len()
            )));
        }
    }
    if let Some(&bad) = model.class_ids.iter().find(|&&id| id >= n_labels) {
        return Err(ArtifactError::Schema(format!(
            "{context}: class id {bad} out of range for {n_labels} labels"
        )));
    }
    if model.species_bias.len() != n_species_rows {
        return Err(ArtifactError::Schema(format!(
            "{context}: {} species bias rows, expected {n_species_rows}",
            model.species_bias.len()
        )));
    }
    for (i, row) in model.species_bias.iter().enumerate() {
        if row.len() != k {
            return Err(ArtifactError::Schema(format!(
                "{context}: species bias row {i} has {} entries, expected {k}",
                row.len()
            )));
        }
    }
    Ok(())
}
