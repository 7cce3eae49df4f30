//! IoT telemetry ingestion and diagnosis triggering.
//!
//! Readings are analyzed at the edge as they arrive: the rule engine runs on
//! every ingest, a rolling buffer keeps the last 50 readings per device, and
//! the latest buffered reading can be turned into a full prediction via
//! [`IotGateway::diagnose`].

use crate::registry::DeviceRegistry;
use crate::{GatewayError, GatewayResult};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use vetai_core::models::{PatientRecord, PredictionReport, Symptoms, Vitals};
use vetai_core::pipeline::InferenceContext;
use vetai_core::telemetry::{Alert, AlertSeverity, RuleEngine};

/// Readings kept per device.
pub const STREAM_BUFFER_CAP: usize = 50;

/// Cattle activity below this is flagged as possible lethargy or lameness.
const LOW_ACTIVITY_THRESHOLD: f64 = 10.0;

/// Activity below this maps to the lethargy symptom during diagnosis.
const LETHARGY_ACTIVITY_THRESHOLD: f64 = 20.0;

/// One reading from a collar or tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryReading {
    pub device_id: String,
    pub animal_id: String,
    pub species: String,
    /// Unix seconds, as sent by the device.
    pub timestamp: f64,
    pub temperature: Option<f64>,
    pub heart_rate: Option<f64>,
    pub activity_level: Option<f64>,
    #[serde(default = "default_battery")]
    pub battery_level: f64,
}

fn default_battery() -> f64 {
    100.0
}

/// Overall status of one ingested reading.
///
/// Any alert raises the status to at least `Alert` (INFO-only alerts
/// included); a CRITICAL alert raises it to `Critical`. `Warning` is
/// reached only through the low-activity rule on an otherwise normal
/// reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TelemetryStatus {
    Normal,
    Warning,
    Critical,
    Alert,
}

/// Result of ingesting one reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestOutcome {
    pub status: TelemetryStatus,
    pub alerts: Vec<Alert>,
    /// Deduplicated, in first-occurrence order.
    pub actions: Vec<String>,
}

/// Health status shown on the dashboard, derived from the latest reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeviceStatus {
    Healthy,
    Warning,
    Critical,
}

/// One device row of the dashboard summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardEntry {
    pub device_id: String,
    pub animal_id: String,
    pub species: String,
    pub last_seen: f64,
    pub seconds_ago: i64,
    pub status: DeviceStatus,
    pub temperature: Option<f64>,
    pub heart_rate: Option<f64>,
    pub activity: Option<f64>,
    pub battery: f64,
    pub alerts: Vec<String>,
}

/// A diagnosis derived from the latest telemetry of a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub device_id: String,
    pub timestamp: String,
    pub report: PredictionReport,
}

/// The telemetry ingestion gateway.
pub struct IotGateway {
    registry: DeviceRegistry,
    buffers: DashMap<String, VecDeque<TelemetryReading>>,
    engine: RuleEngine,
    context: Option<Arc<InferenceContext>>,
}

impl IotGateway {
    pub fn new(registry: DeviceRegistry, context: Option<Arc<InferenceContext>>) -> Self {
        Self {
            registry,
            buffers: DashMap::new(),
            engine: RuleEngine::default(),
            context,
        }
    }

    pub fn registry(&self) -> &DeviceRegistry {
        &self.registry
    }

    /// Buffer a reading, run the vital-sign rules, and derive status and
    /// recommended actions.
    pub fn ingest(&self, reading: TelemetryReading) -> IngestOutcome {
        {
            let mut buffer = self.buffers.entry(reading.device_id.clone()).or_default();
            buffer.push_back(reading.clone());
            while buffer.len() > STREAM_BUFFER_CAP {
                buffer.pop_front();
            }
        }

        let analysis =
            self.engine
                .analyze(&reading.species, reading.temperature, reading.heart_rate);
        let mut alerts = analysis.alerts;
        let mut actions = Vec::new();
        let mut status = TelemetryStatus::Normal;

        if !alerts.is_empty() {
            status = TelemetryStatus::Alert;
            for alert in &alerts {
                match alert.severity {
                    AlertSeverity::Critical => {
                        status = TelemetryStatus::Critical;
                        actions.push(format!(
                            "IMMEDIATE ATTENTION: Check {} for {}",
                            reading.animal_id, alert.parameter
                        ));
                    }
                    AlertSeverity::Warning => {
                        actions.push(format!(
                            "Monitor: {} showing signs of {} stress",
                            reading.animal_id, alert.parameter
                        ));
                    }
                    AlertSeverity::Info => {}
                }
            }
        }

        if let Some(activity) = reading.activity_level {
            if reading.species == "Cattle" && activity < LOW_ACTIVITY_THRESHOLD {
                if status == TelemetryStatus::Normal {
                    status = TelemetryStatus::Warning;
                }
                alerts.push(Alert {
                    severity: AlertSeverity::Warning,
                    message: "Low Activity: Possible lethargy or lameness".to_string(),
                    parameter: "Activity".to_string(),
                });
                actions.push("Check for lameness or isolate animal".to_string());
            }
        }

        dedup_in_order(&mut actions);
        info!(
            device_id = %reading.device_id,
            animal_id = %reading.animal_id,
            ?status,
            alerts = alerts.len(),
            "telemetry ingested"
        );
        IngestOutcome {
            status,
            alerts,
            actions,
        }
    }

    /// Buffered readings for a device, oldest first.
    pub fn history(&self, device_id: &str) -> Vec<TelemetryReading> {
        self.buffers
            .get(device_id)
            .map(|b| b.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Dashboard rows for every device with at least one buffered reading.
    pub fn summary(&self) -> Vec<DashboardEntry> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        self.summary_at(now)
    }

    /// Dashboard rows relative to an explicit current time.
    pub fn summary_at(&self, now: f64) -> Vec<DashboardEntry> {
        let mut rows = Vec::new();
        for entry in self.buffers.iter() {
            let Some(last) = entry.value().back().cloned() else {
                continue;
            };
            let analysis =
                self.engine
                    .analyze(&last.species, last.temperature, last.heart_rate);
            let mut status = DeviceStatus::Healthy;
            for alert in &analysis.alerts {
                match alert.severity {
                    AlertSeverity::Critical => {
                        status = DeviceStatus::Critical;
                        break;
                    }
                    AlertSeverity::Warning => status = DeviceStatus::Warning,
                    AlertSeverity::Info => {}
                }
            }
            rows.push(DashboardEntry {
                device_id: entry.key().clone(),
                animal_id: last.animal_id,
                species: last.species,
                last_seen: last.timestamp,
                seconds_ago: (now - last.timestamp) as i64,
                status,
                temperature: last.temperature,
                heart_rate: last.heart_rate,
                activity: last.activity_level,
                battery: last.battery_level,
                alerts: analysis.alerts.into_iter().map(|a| a.message).collect(),
            });
        }
        rows
    }

    /// Run the prediction cascade on a device's latest reading.
    ///
    /// Symptoms are inferred from the vitals: a fever alert maps to the
    /// fever flag, low activity to lethargy, and a critical status to
    /// lameness. Registry profile data fills in age/breed/gender; blood
    /// work uses sensorless defaults.
    pub fn diagnose(&self, device_id: &str) -> GatewayResult<Diagnosis> {
        let context = self
            .context
            .as_ref()
            .ok_or(GatewayError::PredictionsDisabled)?;
        let reading = self
            .buffers
            .get(device_id)
            .ok_or_else(|| GatewayError::UnknownDevice(device_id.to_string()))?
            .back()
            .cloned()
            .ok_or_else(|| GatewayError::NoTelemetry(device_id.to_string()))?;

        let analysis =
            self.engine
                .analyze(&reading.species, reading.temperature, reading.heart_rate);
        let fever = analysis.alerts.iter().any(|a| a.message.contains("Fever"));
        let lethargy = reading
            .activity_level
            .is_some_and(|a| a < LETHARGY_ACTIVITY_THRESHOLD);
        let critical = analysis.has_severity(AlertSeverity::Critical);

        let profile = self.registry.get(device_id);
        let record = PatientRecord {
            species: reading.species.clone(),
            age: profile.as_ref().map(|p| p.age).unwrap_or(5.0),
            gender: profile.as_ref().map(|p| p.gender).unwrap_or_default(),
            breed: profile
                .as_ref()
                .map(|p| p.breed.clone())
                .unwrap_or_else(|| "Mixed".to_string()),
            // No blood sensors on collars yet; keep reference values apart
            // from the slightly elevated infection markers.
            vitals: Vitals {
                wbc: 10.0,
                urea: 30.0,
                ..Vitals::default()
            },
            symptoms: Symptoms {
                fever,
                lethargy,
                lameness: critical,
                ..Symptoms::default()
            },
        };
        let report = context.predict(&record)?;
        Ok(Diagnosis {
            device_id: device_id.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            report,
        })
    }
}

fn dedup_in_order(items: &mut Vec<String>) {
    let mut seen = std::collections::HashSet::new();
    items.retain(|item| seen.insert(item.clone()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> IotGateway {
        IotGateway::new(DeviceRegistry::new(), None)
    }

    fn reading(species: &str, temp: Option<f64>, hr: Option<f64>) -> TelemetryReading {
        TelemetryReading {
            device_id: "TAG_1".to_string(),
            animal_id: "Animal_1".to_string(),
            species: species.to_string(),
            timestamp: 1000.0,
            temperature: temp,
            heart_rate: hr,
            activity_level: None,
            battery_level: 100.0,
        }
    }

    #[test]
    fn test_normal_reading() {
        let outcome = gateway().ingest(reading("Dog", Some(38.5), Some(90.0)));
        assert_eq!(outcome.status, TelemetryStatus::Normal);
        assert!(outcome.alerts.is_empty());
        assert!(outcome.actions.is_empty());
    }

    #[test]
    fn test_warning_alerts_map_to_alert_status() {
        // Mild fever: WARNING severity, but any alert raises status to ALERT.
        let outcome = gateway().ingest(reading("Dog", Some(40.3), None));
        assert_eq!(outcome.status, TelemetryStatus::Alert);
        assert_eq!(
            outcome.actions,
            vec!["Monitor: Animal_1 showing signs of Temperature stress"]
        );
    }

    #[test]
    fn test_info_only_alert_still_alert_status() {
        let outcome = gateway().ingest(reading("Kangaroo", Some(38.0), Some(80.0)));
        assert_eq!(outcome.status, TelemetryStatus::Alert);
        assert!(outcome.actions.is_empty());
    }

    #[test]
    fn test_critical_temperature() {
        let outcome = gateway().ingest(reading("Dog", Some(41.5), None));
        assert_eq!(outcome.status, TelemetryStatus::Critical);
        assert_eq!(
            outcome.actions,
            vec!["IMMEDIATE ATTENTION: Check Animal_1 for Temperature"]
        );
    }

    #[test]
    fn test_cattle_low_activity_rule() {
        let gw = gateway();
        let mut r = reading("Cattle", Some(38.5), Some(60.0));
        r.activity_level = Some(9.9);
        let outcome = gw.ingest(r);
        assert_eq!(outcome.status, TelemetryStatus::Warning);
        assert_eq!(outcome.alerts.len(), 1);
        assert_eq!(
            outcome.alerts[0].message,
            "Low Activity: Possible lethargy or lameness"
        );
        assert_eq!(outcome.actions, vec!["Check for lameness or isolate animal"]);
    }

    #[test]
    fn test_low_activity_does_not_downgrade_critical() {
        let gw = gateway();
        let mut r = reading("Cattle", Some(41.0), None);
        r.activity_level = Some(5.0);
        let outcome = gw.ingest(r);
        assert_eq!(outcome.status, TelemetryStatus::Critical);
        // Both the fever alert and the activity alert are present.
        assert_eq!(outcome.alerts.len(), 2);
    }

    #[test]
    fn test_activity_rule_is_cattle_only() {
        let gw = gateway();
        let mut r = reading("Dog", Some(38.5), None);
        r.activity_level = Some(2.0);
        let outcome = gw.ingest(r);
        assert_eq!(outcome.status, TelemetryStatus::Normal);
    }

    #[test]
    fn test_buffer_caps_at_fifty() {
        let gw = gateway();
        for i in 0..60 {
            let mut r = reading("Dog", Some(38.5), None);
            r.timestamp = i as f64;
            gw.ingest(r);
        }
        let history = gw.history("TAG_1");
        assert_eq!(history.len(), STREAM_BUFFER_CAP);
        assert_eq!(history[0].timestamp, 10.0);
        assert_eq!(history[49].timestamp, 59.0);
    }

    #[test]
    fn test_history_unknown_device_empty() {
        assert!(gateway().history("TAG_404").is_empty());
    }

    #[test]
    fn test_summary_reflects_latest_reading() {
        let gw = gateway();
        gw.ingest(reading("Dog", Some(41.5), None));
        let rows = gw.summary_at(1060.0);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, DeviceStatus::Critical);
        assert_eq!(rows[0].seconds_ago, 60);
        assert_eq!(rows[0].alerts.len(), 1);
    }

    #[test]
    fn test_diagnose_without_context_fails() {
        let gw = gateway();
        gw.ingest(reading("Dog", Some(41.5), None));
        let err = gw.diagnose("TAG_1").unwrap_err();
        assert!(matches!(err, GatewayError::PredictionsDisabled));
    }

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&TelemetryStatus::Critical).unwrap(),
            "\"CRITICAL\""
        );
        assert_eq!(
            serde_json::to_string(&DeviceStatus::Healthy).unwrap(),
            "\"HEALTHY\""
        );
    }
}
