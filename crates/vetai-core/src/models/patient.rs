//! Patient record models.

use serde::{Deserialize, Serialize};

/// Biological sex of the patient, carried for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

/// Blood work and chemistry panel values.
///
/// `Default` carries the reference values used when a caller omits a field,
/// so a bare request still produces a full-length feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// White blood cell count (10^9/L)
    pub wbc: f64,
    /// Red blood cell count (10^12/L)
    pub rbc: f64,
    /// Hemoglobin (g/dL)
    pub hemoglobin: f64,
    /// Platelet count (10^9/L)
    pub platelets: f64,
    /// Blood glucose (mg/dL)
    pub glucose: f64,
    /// Alanine aminotransferase (U/L)
    pub alt: f64,
    /// Aspartate aminotransferase (U/L)
    pub ast: f64,
    /// Blood urea (mg/dL)
    pub urea: f64,
    /// Creatinine (mg/dL)
    pub creatinine: f64,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            wbc: 8.0,
            rbc: 6.0,
            hemoglobin: 14.0,
            platelets: 300.0,
            glucose: 100.0,
            alt: 40.0,
            ast: 40.0,
            urea: 25.0,
            creatinine: 1.0,
        }
    }
}

/// The fixed clinical symptom flags the models were trained on.
///
/// The set is closed: adding a flag means retraining and a new artifact, so
/// the struct is the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Symptoms {
    pub fever: bool,
    pub lethargy: bool,
    pub vomiting: bool,
    pub diarrhea: bool,
    pub weight_loss: bool,
    pub skin_lesion: bool,
    pub coughing: bool,
    pub lameness: bool,
}

impl Symptoms {
    /// Flags as 0.0/1.0 values in schema order.
    pub fn as_flags(&self) -> [f64; 8] {
        [
            self.fever as u8 as f64,
            self.lethargy as u8 as f64,
            self.vomiting as u8 as f64,
            self.diarrhea as u8 as f64,
            self.weight_loss as u8 as f64,
            self.skin_lesion as u8 as f64,
            self.coughing as u8 as f64,
            self.lameness as u8 as f64,
        ]
    }
}

/// A single patient presentation. Immutable for the duration of a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Species display name (e.g. "Dog"). Unrecognized species degrade
    /// gracefully downstream rather than erroring.
    pub species: String,
    /// Age in years.
    pub age: f64,
    pub gender: Gender,
    pub breed: String,
    pub vitals: Vitals,
    pub symptoms: Symptoms,
}

impl PatientRecord {
    /// Create a record with reference vitals and no symptoms.
    pub fn new(species: impl Into<String>, age: f64) -> Self {
        Self {
            species: species.into(),
            age,
            gender: Gender::Unknown,
            breed: String::new(),
            vitals: Vitals::default(),
            symptoms: Symptoms::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vitals_are_reference_values() {
        let v = Vitals::default();
        assert_eq!(v.wbc, 8.0);
        assert_eq!(v.platelets, 300.0);
        assert_eq!(v.creatinine, 1.0);
    }

    #[test]
    fn test_symptom_flags_order() {
        let s = Symptoms {
            fever: true,
            lameness: true,
            ..Symptoms::default()
        };
        let flags = s.as_flags();
        assert_eq!(flags[0], 1.0);
        assert_eq!(flags[7], 1.0);
        assert_eq!(flags[1..7], [0.0; 6]);
    }
}
