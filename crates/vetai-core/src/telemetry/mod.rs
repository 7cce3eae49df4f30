//! Vital-sign rule engine for telemetry readings.
//!
//! Stateless checks of temperature and heart rate against species-specific
//! reference ranges. Missing readings skip their checks; an unrecognized
//! species falls back to generic mammal ranges with an INFO alert, so the
//! engine never errors.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Alert severity levels, serialized uppercase for downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertSeverity {
    Info,
    Warning,
    Critical,
}

/// A single vital-sign alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub severity: AlertSeverity,
    pub message: String,
    /// Which parameter triggered the alert (e.g. "Temperature").
    pub parameter: String,
}

/// Reference vital-sign ranges for one species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalRange {
    pub temp_min: f64,
    pub temp_max: f64,
    pub hr_min: f64,
    pub hr_max: f64,
    pub rr_min: f64,
    pub rr_max: f64,
    pub notes: String,
}

/// Result of analyzing one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VitalsAnalysis {
    /// Species name after synonym normalization.
    pub species_key: String,
    pub alerts: Vec<Alert>,
    pub reference: VitalRange,
}

impl VitalsAnalysis {
    pub fn has_severity(&self, severity: AlertSeverity) -> bool {
        self.alerts.iter().any(|a| a.severity == severity)
    }
}

/// Species reference table plus synonym normalization.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    ranges: HashMap<String, VitalRange>,
    synonyms: HashMap<String, String>,
}

/// Temperature excess over the species maximum, in degrees Celsius, at which
/// a fever alert escalates from WARNING to CRITICAL. The boundary is
/// inclusive: an excess of exactly this value is CRITICAL.
pub const FEVER_CRITICAL_EXCESS: f64 = 1.0;

const GENERIC_KEY: &str = "Unknown";

impl RuleEngine {
    /// Normalize a species name through the synonym table.
    pub fn normalize_species(&self, species: &str) -> String {
        self.synonyms
            .get(species)
            .cloned()
            .unwrap_or_else(|| species.to_string())
    }

    /// Analyze a reading's vitals. `None` values skip their checks.
    pub fn analyze(&self, species: &str, temp: Option<f64>, heart_rate: Option<f64>) -> VitalsAnalysis {
        let mut alerts = Vec::new();
        let key = self.normalize_species(species);
        let reference = match self.ranges.get(&key) {
            Some(r) => r.clone(),
            None => {
                alerts.push(Alert {
                    severity: AlertSeverity::Info,
                    message: format!("Species '{species}' not found. Using generic mammal ranges."),
                    parameter: "Species".to_string(),
                });
                self.ranges[GENERIC_KEY].clone()
            }
        };

        if let Some(t) = temp {
            if t < reference.temp_min {
                alerts.push(Alert {
                    severity: AlertSeverity::Critical,
                    message: format!(
                        "Hypothermia Risk: {}°C is below normal range ({}-{}) for {species}",
                        fmt(t),
                        fmt(reference.temp_min),
                        fmt(reference.temp_max)
                    ),
                    parameter: "Temperature".to_string(),
                });
            } else if t > reference.temp_max {
                let severity = if t >= reference.temp_max + FEVER_CRITICAL_EXCESS {
                    AlertSeverity::Critical
                } else {
                    AlertSeverity::Warning
                };
                alerts.push(Alert {
                    severity,
                    message: format!(
                        "Fever Detected: {}°C is above normal range ({}-{}) for {species}",
                        fmt(t),
                        fmt(reference.temp_min),
                        fmt(reference.temp_max)
                    ),
                    parameter: "Temperature".to_string(),
                });
            }
        }

        // Heart-rate extremes are WARNING only; escalation is a clinician's
        // call, not a threshold rule.
        if let Some(hr) = heart_rate {
            if hr < reference.hr_min {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    message: format!(
                        "Bradycardia (Low HR): {} bpm is below normal ({}-{})",
                        fmt(hr),
                        fmt(reference.hr_min),
                        fmt(reference.hr_max)
                    ),
                    parameter: "Heart Rate".to_string(),
                });
            } else if hr > reference.hr_max {
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    message: format!(
                        "Tachycardia (High HR): {} bpm is above normal ({}-{})",
                        fmt(hr),
                        fmt(reference.hr_min),
                        fmt(reference.hr_max)
                    ),
                    parameter: "Heart Rate".to_string(),
                });
            }
        }

        VitalsAnalysis {
            species_key: key,
            alerts,
            reference,
        }
    }
}

/// Format a reference value without a trailing `.0` for whole numbers.
fn fmt(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

fn range(
    temp_min: f64,
    temp_max: f64,
    hr_min: f64,
    hr_max: f64,
    rr_min: f64,
    rr_max: f64,
    notes: &str,
) -> VitalRange {
    VitalRange {
        temp_min,
        temp_max,
        hr_min,
        hr_max,
        rr_min,
        rr_max,
        notes: notes.to_string(),
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        let mut ranges = HashMap::new();
        ranges.insert(
            "Dog".to_string(),
            range(37.9, 39.9, 60.0, 140.0, 10.0, 30.0,
                "HR varies significantly by size (Small dogs higher, Large dogs lower)"),
        );
        ranges.insert(
            "Cat".to_string(),
            range(38.1, 39.2, 140.0, 220.0, 20.0, 30.0, "Stress can rapidly increase HR"),
        );
        ranges.insert(
            "Cattle".to_string(),
            range(38.0, 39.3, 40.0, 80.0, 10.0, 30.0, "Rumen contractions 1-2 per minute"),
        );
        ranges.insert(
            "Horse".to_string(),
            range(37.2, 38.3, 28.0, 40.0, 8.0, 16.0, "Resting HR > 60 is a pain indicator (Colic)"),
        );
        ranges.insert(
            "Pig".to_string(),
            range(38.7, 39.8, 60.0, 100.0, 8.0, 18.0, "Susceptible to heat stress"),
        );
        ranges.insert(
            "Sheep".to_string(),
            range(38.3, 39.9, 70.0, 90.0, 12.0, 25.0, "Pant when stressed"),
        );
        ranges.insert(
            "Goat".to_string(),
            range(38.5, 39.7, 70.0, 90.0, 15.0, 30.0, "Similar to sheep but more active"),
        );
        ranges.insert(
            "Chicken".to_string(),
            range(40.6, 41.7, 250.0, 300.0, 12.0, 36.0, "Very high metabolic rate"),
        );
        ranges.insert(
            "Buffalo".to_string(),
            range(37.5, 39.0, 40.0, 80.0, 10.0, 30.0, "Similar to Cattle but more resilient to heat"),
        );
        ranges.insert(
            "Lion".to_string(),
            range(38.0, 39.5, 40.0, 50.0, 10.0, 24.0, "Carnivore; stress can spike HR rapidly"),
        );
        ranges.insert(
            "Tiger".to_string(),
            range(37.8, 39.2, 45.0, 60.0, 12.0, 25.0,
                "Solitary predator; high stress sensitivity in captivity"),
        );
        ranges.insert(
            "Elephant".to_string(),
            range(36.0, 37.0, 25.0, 35.0, 4.0, 12.0, "Largest land mammal; unique physiology"),
        );
        ranges.insert(
            "Giraffe".to_string(),
            range(38.0, 39.0, 40.0, 90.0, 8.0, 20.0, "Unique cardiovascular system for height"),
        );
        ranges.insert(
            GENERIC_KEY.to_string(),
            range(37.0, 39.5, 60.0, 100.0, 10.0, 30.0, "Generic Reference"),
        );

        let mut synonyms = HashMap::new();
        for (from, to) in [
            ("Cow", "Cattle"),
            ("Puppy", "Dog"),
            ("Kitten", "Cat"),
            ("Calf", "Cattle"),
            ("Foal", "Horse"),
        ] {
            synonyms.insert(from.to_string(), to.to_string());
        }
        Self { ranges, synonyms }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> RuleEngine {
        RuleEngine::default()
    }

    #[test]
    fn test_normal_vitals_no_alerts() {
        let a = engine().analyze("Dog", Some(38.5), Some(90.0));
        assert!(a.alerts.is_empty());
        assert_eq!(a.species_key, "Dog");
    }

    #[test]
    fn test_synonym_normalization() {
        let a = engine().analyze("Cow", Some(38.5), Some(60.0));
        assert_eq!(a.species_key, "Cattle");
        assert!(a.alerts.is_empty());
    }

    #[test]
    fn test_unknown_species_info_alert_generic_ranges() {
        let a = engine().analyze("Kangaroo", Some(38.0), Some(80.0));
        assert_eq!(a.alerts.len(), 1);
        assert_eq!(a.alerts[0].severity, AlertSeverity::Info);
        assert_eq!(
            a.alerts[0].message,
            "Species 'Kangaroo' not found. Using generic mammal ranges."
        );
        assert_eq!(a.reference.temp_min, 37.0);
    }

    #[test]
    fn test_hypothermia_is_critical() {
        let a = engine().analyze("Dog", Some(36.5), None);
        assert_eq!(a.alerts.len(), 1);
        assert_eq!(a.alerts[0].severity, AlertSeverity::Critical);
        assert_eq!(
            a.alerts[0].message,
            "Hypothermia Risk: 36.5°C is below normal range (37.9-39.9) for Dog"
        );
        assert_eq!(a.alerts[0].parameter, "Temperature");
    }

    #[test]
    fn test_mild_fever_is_warning() {
        // Dog max is 39.9; an excess below 1.0 degree stays WARNING.
        let a = engine().analyze("Dog", Some(40.5), None);
        assert_eq!(a.alerts[0].severity, AlertSeverity::Warning);
        assert!(a.alerts[0].message.starts_with("Fever Detected: 40.5°C"));
    }

    #[test]
    fn test_fever_boundary_is_critical_at_exactly_one_degree() {
        // 39.9 + 1.0 = 40.9 exactly: the boundary is inclusive.
        let a = engine().analyze("Dog", Some(40.9), None);
        assert_eq!(a.alerts[0].severity, AlertSeverity::Critical);
        // Just under the boundary stays WARNING.
        let a = engine().analyze("Dog", Some(40.89), None);
        assert_eq!(a.alerts[0].severity, AlertSeverity::Warning);
    }

    #[test]
    fn test_heart_rate_extremes_stay_warning() {
        let low = engine().analyze("Cat", None, Some(100.0));
        assert_eq!(low.alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(
            low.alerts[0].message,
            "Bradycardia (Low HR): 100 bpm is below normal (140-220)"
        );
        let high = engine().analyze("Cat", None, Some(260.0));
        assert_eq!(high.alerts[0].severity, AlertSeverity::Warning);
        assert!(high.alerts[0].message.starts_with("Tachycardia (High HR): 260 bpm"));
    }

    #[test]
    fn test_missing_vitals_skip_checks() {
        let a = engine().analyze("Horse", None, None);
        assert!(a.alerts.is_empty());
    }

    #[test]
    fn test_both_vitals_abnormal_yields_two_alerts() {
        let a = engine().analyze("Horse", Some(39.5), Some(70.0));
        assert_eq!(a.alerts.len(), 2);
    }
}
