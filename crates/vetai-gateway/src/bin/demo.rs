//! End-to-end demo: one prediction request, one telemetry ingest, and a
//! telemetry-driven diagnosis, with monitoring logs under `logs/`.

use anyhow::Result;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use vetai_core::classifier::ModelArtifact;
use vetai_core::models::{Gender, Symptoms, Vitals};
use vetai_core::pipeline::InferenceContext;
use vetai_gateway::{
    DeviceRegistry, HealthSampler, IotGateway, PredictionRequest, PredictionService,
    SystemMonitor, TelemetryReading,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let monitor = Arc::new(SystemMonitor::new("logs")?);
    let sampler = HealthSampler::start(Arc::clone(&monitor), Duration::from_secs(10));

    let context = Arc::new(InferenceContext::new(ModelArtifact::demo()));
    let service = PredictionService::new(Some(Arc::clone(&context)), Arc::clone(&monitor));

    let request = PredictionRequest {
        species: "Dog".to_string(),
        age: 2.0,
        gender: Gender::Male,
        breed: "Beagle".to_string(),
        vitals: Vitals::default(),
        symptoms: Symptoms {
            fever: true,
            lethargy: true,
            vomiting: true,
            diarrhea: true,
            ..Symptoms::default()
        },
    };
    let response = service.handle(&request);
    println!("--- prediction ---");
    println!("{}", serde_json::to_string_pretty(&response)?);

    let gateway = IotGateway::new(DeviceRegistry::with_demo_devices(), Some(context));
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    let outcome = gateway.ingest(TelemetryReading {
        device_id: "TAG_101".to_string(),
        animal_id: "Lion_Alpha".to_string(),
        species: "Lion".to_string(),
        timestamp: now,
        temperature: Some(40.8),
        heart_rate: Some(55.0),
        activity_level: Some(15.0),
        battery_level: 87.0,
    });
    println!("--- telemetry ---");
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    let diagnosis = gateway.diagnose("TAG_101")?;
    println!("--- diagnosis ---");
    println!("{}", serde_json::to_string_pretty(&diagnosis)?);

    println!("--- dashboard ---");
    println!("{}", serde_json::to_string_pretty(&gateway.summary())?);

    sampler.stop();
    Ok(())
}
