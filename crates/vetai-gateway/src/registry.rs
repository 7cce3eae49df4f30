//! Device-to-animal registry.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use vetai_core::models::Gender;

/// The animal profile a physical device (collar/tag) is attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub animal_id: String,
    pub species: String,
    pub name: String,
    pub age: f64,
    pub breed: String,
    pub gender: Gender,
}

/// Concurrent device registry. Process-lifetime only; re-register on restart.
#[derive(Debug, Default)]
pub struct DeviceRegistry {
    devices: DashMap<String, DeviceProfile>,
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the demo collar tags.
    pub fn with_demo_devices() -> Self {
        let registry = Self::new();
        registry.register(
            "TAG_101",
            DeviceProfile {
                animal_id: "Lion_Alpha".to_string(),
                species: "Lion".to_string(),
                name: "Simba".to_string(),
                age: 4.5,
                breed: "African".to_string(),
                gender: Gender::Male,
            },
        );
        registry.register(
            "TAG_102",
            DeviceProfile {
                animal_id: "Elephant_01".to_string(),
                species: "Elephant".to_string(),
                name: "Hathi".to_string(),
                age: 12.0,
                breed: "African".to_string(),
                gender: Gender::Female,
            },
        );
        registry
    }

    /// Register or replace a device's profile.
    pub fn register(&self, device_id: impl Into<String>, profile: DeviceProfile) {
        self.devices.insert(device_id.into(), profile);
    }

    pub fn get(&self, device_id: &str) -> Option<DeviceProfile> {
        self.devices.get(device_id).map(|p| p.clone())
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }
}
