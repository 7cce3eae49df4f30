//! Disease prevalence annotations.

use crate::models::PrevalenceInfo;
use std::collections::HashMap;

/// Epidemiological prevalence, severity, and urgency per disease.
///
/// Coverage is intentionally partial; lookups for undocumented diseases
/// resolve to the [`PrevalenceInfo::unknown`] sentinel rather than erroring.
#[derive(Debug, Clone)]
pub struct PrevalenceTable {
    entries: HashMap<String, PrevalenceInfo>,
}

impl PrevalenceTable {
    /// Prevalence for a disease, falling back to the unknown sentinel.
    pub fn lookup(&self, disease: &str) -> PrevalenceInfo {
        self.entries
            .get(disease)
            .cloned()
            .unwrap_or_else(PrevalenceInfo::unknown)
    }

    pub fn contains(&self, disease: &str) -> bool {
        self.entries.contains_key(disease)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn info(prevalence: &str, severity: &str, urgency: &str) -> PrevalenceInfo {
    PrevalenceInfo {
        prevalence: prevalence.to_string(),
        severity: severity.to_string(),
        urgency: urgency.to_string(),
    }
}

impl Default for PrevalenceTable {
    fn default() -> Self {
        let mut e = HashMap::new();
        // Dogs
        e.insert("Canine Distemper".to_string(), info("Medium", "Fatal", "Emergency"));
        e.insert("Canine Parvovirus".to_string(), info("Medium", "Fatal", "Emergency"));
        e.insert("Rabies".to_string(), info("Low", "Fatal", "Emergency"));
        e.insert("Canine Influenza".to_string(), info("Low", "Medium", "Urgent"));
        e.insert("Kennel Cough".to_string(), info("High", "Low", "Routine"));
        e.insert("Leptospirosis".to_string(), info("Low", "High", "Urgent"));
        e.insert("Hip Dysplasia".to_string(), info("High", "Medium", "Important"));
        e.insert("Diabetes Mellitus".to_string(), info("Medium", "High", "Important"));
        // Cats
        e.insert("Feline Panleukopenia".to_string(), info("Medium", "Fatal", "Emergency"));
        e.insert("Feline Leukemia Virus".to_string(), info("Medium", "Fatal", "Urgent"));
        e.insert("Hypertrophic Cardiomyopathy".to_string(), info("High", "High", "Urgent"));
        e.insert("Chronic Kidney Disease".to_string(), info("High", "High", "Important"));
        e.insert("Hyperthyroidism".to_string(), info("High", "Medium", "Important"));
        // Cattle
        e.insert("Bovine Viral Diarrhea".to_string(), info("High", "High", "Urgent"));
        e.insert("Foot-and-Mouth Disease".to_string(), info("Low", "Fatal", "Emergency"));
        e.insert("Mastitis".to_string(), info("Very High", "Medium", "Important"));
        e.insert("Milk Fever".to_string(), info("Medium", "High", "Urgent"));
        // Pigs
        e.insert("African Swine Fever".to_string(), info("Low", "Fatal", "Emergency"));
        e.insert("PRRS".to_string(), info("High", "High", "Urgent"));
        e.insert("Swine Erysipelas".to_string(), info("Medium", "Medium", "Important"));
        // Sheep
        e.insert("Bluetongue".to_string(), info("Medium", "High", "Urgent"));
        e.insert("Pregnancy Toxemia".to_string(), info("Medium", "Fatal", "Emergency"));
        e.insert("Footrot".to_string(), info("High", "Medium", "Important"));
        // Horses
        e.insert("Equine Influenza".to_string(), info("Medium", "Medium", "Urgent"));
        e.insert("Laminitis".to_string(), info("Medium", "High", "Emergency"));
        e.insert("Colic".to_string(), info("High", "High", "Emergency"));
        e.insert("Strangles".to_string(), info("Medium", "Medium", "Urgent"));
        // Goats
        e.insert("Caseous Lymphadenitis".to_string(), info("High", "Medium", "Important"));
        e.insert("Haemonchus".to_string(), info("High", "High", "Urgent"));
        // Chickens
        e.insert("Newcastle Disease".to_string(), info("Medium", "Fatal", "Emergency"));
        e.insert("Coccidiosis".to_string(), info("Very High", "Medium", "Important"));
        e.insert("Avian Influenza".to_string(), info("Low", "Fatal", "Emergency"));
        // Cross-species
        e.insert("Roundworm".to_string(), info("High", "Low", "Routine"));
        e.insert("Hookworm".to_string(), info("Medium", "Medium", "Important"));
        e.insert("Giardia".to_string(), info("High", "Low", "Routine"));
        e.insert("E.coli Infection".to_string(), info("High", "Medium", "Important"));
        e.insert("Salmonellosis".to_string(), info("Medium", "Medium", "Important"));
        e.insert("Pneumonia".to_string(), info("High", "High", "Urgent"));
        e.insert("Arthritis".to_string(), info("High", "Medium", "Important"));
        Self { entries: e }
    }
}
