//! Scaler and softmax classifier primitives.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Model-level errors surfaced during scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("feature vector length mismatch: expected {expected}, got {actual}")]
    SchemaMismatch { expected: usize, actual: usize },
}

pub type ModelResult<T> = Result<T, ModelError>;

/// Mean/std standardization fitted at training time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub std: Vec<f64>,
}

impl Scaler {
    /// Standardize a feature vector.
    ///
    /// A length mismatch is a schema violation, never silently truncated.
    /// Columns with non-positive std map to 0.0.
    pub fn transform(&self, x: &[f64]) -> ModelResult<Vec<f64>> {
        if x.len() != self.mean.len() {
            return Err(ModelError::SchemaMismatch {
                expected: self.mean.len(),
                actual: x.len(),
            });
        }
        Ok(x.iter()
            .zip(self.mean.iter().zip(&self.std))
            .map(|(&v, (&m, &s))| if s > 0.0 { (v - m) / s } else { 0.0 })
            .collect())
    }

    pub fn n_features(&self) -> usize {
        self.mean.len()
    }
}

/// A linear softmax classifier with a per-species bias row.
///
/// `class_ids` maps output rows to external label ids, and may be an
/// arbitrary permutation of those ids. Confidence for a predicted id must be
/// resolved through [`SoftmaxModel::confidence_for`], which locates the id in
/// the model's own class list. Equating label ids with row positions was a
/// real defect in an earlier generation of this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftmaxModel {
    /// External label id for each output row.
    pub class_ids: Vec<usize>,
    /// One weight row per output row, one column per numeric feature.
    pub weights: Vec<Vec<f64>>,
    /// One intercept per output row.
    pub bias: Vec<f64>,
    /// Additive bias per species, rows indexed by species index. The last
    /// row is the unknown-species sentinel.
    pub species_bias: Vec<Vec<f64>>,
}

impl SoftmaxModel {
    /// Score a scaled feature vector. Returns the predicted external label
    /// id and the probability for each output row, in row order.
    pub fn predict(&self, scaled: &[f64], species_index: usize) -> (usize, Vec<f64>) {
        let species_row = self.species_bias.get(species_index);
        let logits: Vec<f64> = self
            .weights
            .iter()
            .enumerate()
            .map(|(row, w)| {
                let dot: f64 = w.iter().zip(scaled).map(|(wi, xi)| wi * xi).sum();
                let sb = species_row.and_then(|r| r.get(row)).copied().unwrap_or(0.0);
                dot + self.bias.get(row).copied().unwrap_or(0.0) + sb
            })
            .collect();
        let probs = softmax(&logits);
        let best_row = probs
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(i, _)| i)
            .unwrap_or(0);
        (self.class_ids[best_row], probs)
    }

    /// Probability assigned to an external label id.
    ///
    /// Locates the id in `class_ids` rather than indexing the probability
    /// array directly, so permuted class lists resolve correctly.
    pub fn confidence_for(&self, probs: &[f64], class_id: usize) -> Option<f64> {
        let row = self.class_ids.iter().position(|&id| id == class_id)?;
        probs.get(row).copied()
    }

    pub fn n_classes(&self) -> usize {
        self.class_ids.len()
    }
}

/// Numerically stable softmax.
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|&l| (l - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_feature_model(class_ids: Vec<usize>) -> SoftmaxModel {
        SoftmaxModel {
            class_ids,
            weights: vec![vec![3.0, 0.0], vec![0.0, 3.0], vec![0.0, 0.0]],
            bias: vec![0.0; 3],
            species_bias: vec![vec![0.0; 3]; 2],
        }
    }

    #[test]
    fn test_scaler_rejects_wrong_length() {
        let scaler = Scaler {
            mean: vec![0.0, 0.0],
            std: vec![1.0, 1.0],
        };
        let err = scaler.transform(&[1.0]).unwrap_err();
        assert_eq!(
            err,
            ModelError::SchemaMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_scaler_zero_std_maps_to_zero() {
        let scaler = Scaler {
            mean: vec![5.0],
            std: vec![0.0],
        };
        assert_eq!(scaler.transform(&[42.0]).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_softmax_probs_sum_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
    }

    #[test]
    fn test_predict_returns_class_id_not_row() {
        // Rows map to ids [7, 4, 9]; feature 0 drives row 0.
        let model = two_feature_model(vec![7, 4, 9]);
        let (id, probs) = model.predict(&[1.0, 0.0], 0);
        assert_eq!(id, 7);
        assert_eq!(probs.len(), 3);
    }

    #[test]
    fn test_confidence_resolved_through_permuted_class_list() {
        let model = two_feature_model(vec![2, 0, 1]);
        // Feature 1 drives row 1, whose external id is 0.
        let (id, probs) = model.predict(&[0.0, 1.0], 0);
        assert_eq!(id, 0);
        let conf = model.confidence_for(&probs, id).unwrap();
        // The correct probability lives at row 1, not row `id`.
        assert_eq!(conf, probs[1]);
        assert!(conf > probs[0] && conf > probs[2]);
    }

    #[test]
    fn test_confidence_for_unknown_id_is_none() {
        let model = two_feature_model(vec![0, 1, 2]);
        let (_, probs) = model.predict(&[1.0, 0.0], 0);
        assert_eq!(model.confidence_for(&probs, 99), None);
    }

    #[test]
    fn test_out_of_range_species_index_contributes_nothing() {
        let mut model = two_feature_model(vec![0, 1, 2]);
        model.species_bias = vec![vec![5.0, 0.0, 0.0]];
        let (_, with_bias) = model.predict(&[0.0, 0.0], 0);
        let (_, without) = model.predict(&[0.0, 0.0], 10);
        assert!(with_bias[0] > without[0]);
    }
}
