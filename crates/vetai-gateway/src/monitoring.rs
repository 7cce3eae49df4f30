//! JSON-lines monitoring logs and the background health sampler.
//!
//! Each log record is one full line appended in a single write, so
//! concurrent writers never interleave partial lines. Readers are tolerant:
//! malformed lines are skipped, not fatal.

use crate::{GatewayResult, PredictionResponse};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;
use sysinfo::System;
use tracing::{info, warn};

/// An append-only line-delimited JSON log.
#[derive(Debug)]
pub struct JsonlLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonlLog {
    /// Open (creating if needed) a log file for appending.
    pub fn open(path: impl Into<PathBuf>) -> GatewayResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Append one record as one full line.
    pub fn append<T: Serialize>(&self, record: &T) -> GatewayResult<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        let mut file = self.file.lock()?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// The most recent `limit` parseable records, oldest first.
    ///
    /// Unreadable files yield an empty list; malformed lines are skipped.
    pub fn read_recent<T: DeserializeOwned>(&self, limit: usize) -> Vec<T> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        let records: Vec<T> = contents
            .lines()
            .filter(|l| !l.trim().is_empty())
            .filter_map(|l| serde_json::from_str(l).ok())
            .collect();
        let skip = records.len().saturating_sub(limit);
        records.into_iter().skip(skip).collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One logged prediction event, success or failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionLogEntry {
    pub id: String,
    pub timestamp: String,
    pub animal: String,
    pub category: Option<String>,
    pub disease: Option<String>,
    pub category_confidence: Option<f64>,
    pub disease_confidence: Option<f64>,
    pub latency_ms: f64,
    pub status: String,
    pub error_msg: Option<String>,
}

/// One sampled host resource snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemHealthEntry {
    pub timestamp: String,
    pub cpu_percent: f64,
    pub memory_percent: f64,
}

/// Owns both monitoring logs and the host metrics source.
#[derive(Debug)]
pub struct SystemMonitor {
    predictions: JsonlLog,
    health: JsonlLog,
    system: Mutex<System>,
}

impl SystemMonitor {
    /// Open monitoring logs under a directory, creating it if needed.
    pub fn new(log_dir: impl AsRef<Path>) -> GatewayResult<Self> {
        let dir = log_dir.as_ref();
        Ok(Self {
            predictions: JsonlLog::open(dir.join("prediction_log.jsonl"))?,
            health: JsonlLog::open(dir.join("system_metrics.jsonl"))?,
            system: Mutex::new(System::new()),
        })
    }

    /// Record one prediction event.
    pub fn log_prediction(
        &self,
        animal: &str,
        response: &PredictionResponse,
        latency_ms: f64,
    ) -> GatewayResult<()> {
        let entry = PredictionLogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            animal: animal.to_string(),
            category: response.predicted_category.map(|c| c.to_string()),
            disease: response.predicted_disease.clone(),
            category_confidence: response.category_confidence,
            disease_confidence: response.disease_confidence,
            latency_ms,
            status: if response.success { "success" } else { "error" }.to_string(),
            error_msg: response.error.clone(),
        };
        self.predictions.append(&entry)
    }

    /// Sample and record host CPU and memory usage.
    pub fn log_system_health(&self) -> GatewayResult<()> {
        let entry = {
            let mut system = self.system.lock()?;
            system.refresh_cpu();
            system.refresh_memory();
            let total = system.total_memory();
            let memory_percent = if total > 0 {
                system.used_memory() as f64 / total as f64 * 100.0
            } else {
                0.0
            };
            SystemHealthEntry {
                timestamp: chrono::Utc::now().to_rfc3339(),
                cpu_percent: system.global_cpu_info().cpu_usage() as f64,
                memory_percent,
            }
        };
        self.health.append(&entry)
    }

    pub fn recent_predictions(&self, limit: usize) -> Vec<PredictionLogEntry> {
        self.predictions.read_recent(limit)
    }

    pub fn recent_health(&self, limit: usize) -> Vec<SystemHealthEntry> {
        self.health.read_recent(limit)
    }
}

/// Background thread sampling host health at a fixed interval.
///
/// Runs independently of the request path; stop it explicitly with
/// [`HealthSampler::stop`] or let `Drop` join it.
#[derive(Debug)]
pub struct HealthSampler {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl HealthSampler {
    pub fn start(monitor: Arc<SystemMonitor>, interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = std::thread::spawn(move || {
            info!(interval_secs = interval.as_secs_f64(), "health sampler started");
            while !flag.load(Ordering::Relaxed) {
                if let Err(e) = monitor.log_system_health() {
                    warn!(error = %e, "health sample failed");
                }
                // Sleep in short slices so stop() is responsive.
                let step = Duration::from_millis(100);
                let mut waited = Duration::ZERO;
                while waited < interval && !flag.load(Ordering::Relaxed) {
                    let nap = step.min(interval - waited);
                    std::thread::sleep(nap);
                    waited += nap;
                }
            }
            info!("health sampler stopped");
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }

    /// Signal the sampler to stop and wait for it to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for HealthSampler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
