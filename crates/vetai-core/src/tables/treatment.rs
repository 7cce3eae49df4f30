//! Treatment recommendation database.

use crate::models::{Category, TreatmentInfo};
use std::collections::HashMap;

/// Recommended treatments per disease, with category-level fallbacks.
///
/// Lookup chain: specific disease entry, then the category template
/// parameterized with the disease name, then [`TreatmentInfo::generic`].
#[derive(Debug, Clone)]
pub struct TreatmentTable {
    entries: HashMap<String, TreatmentInfo>,
}

impl TreatmentTable {
    /// Treatment guidance for a disease. Never returns an empty plan.
    pub fn lookup(&self, disease: &str, category: Option<Category>) -> TreatmentInfo {
        if let Some(specific) = self.entries.get(disease) {
            return specific.clone();
        }
        match category {
            Some(cat) => category_fallback(disease, cat),
            None => TreatmentInfo::generic(),
        }
    }

    pub fn contains(&self, disease: &str) -> bool {
        self.entries.contains_key(disease)
    }
}

fn entry(plan: &str, medications: &[&str], follow_up: &str, prognosis: &str) -> TreatmentInfo {
    TreatmentInfo {
        treatment_plan: plan.to_string(),
        medications: medications.iter().map(|m| m.to_string()).collect(),
        follow_up: Some(follow_up.to_string()),
        prognosis: prognosis.to_string(),
    }
}

/// Category-level guidance when no specific protocol is documented.
fn category_fallback(disease: &str, category: Category) -> TreatmentInfo {
    let (plan, medications, prognosis): (String, &[&str], &str) = match category {
        Category::Viral => (
            format!("Supportive care is priority for {disease}. Viral conditions require hydration and monitoring."),
            &["IV Fluids", "Anti-inflammatories", "Immune support"],
            "Variable - requires clinical observation.",
        ),
        Category::Bacterial => (
            format!("Empirical antibiotic therapy initiated for {disease}. Culture and sensitivity recommended."),
            &["Broad-spectrum antibiotics", "NSAIDs"],
            "Fair to Good with proper antibiotics.",
        ),
        Category::Parasitic => (
            format!("Antiparasitic protocol for {disease}. Environmental control is essential."),
            &["Specific anthelmintics", "External parasite control"],
            "Excellent with completion of treatment.",
        ),
        Category::Metabolic => (
            format!("Dietary management and hormonal stabilization for {disease}."),
            &["Hormonal supplements", "Specialized prescription diet"],
            "Manageable with long-term care.",
        ),
        Category::Respiratory => (
            format!("Oxygen support and airway management for {disease}."),
            &["Bronchodilators", "Nebulization"],
            "Guarded during acute phase.",
        ),
        Category::Cardiovascular => (
            format!("Cardiac stabilization and monitoring for {disease}. Avoid stress."),
            &["ACE inhibitors", "Diuretics if needed", "Beta-blockers"],
            "Requires lifelong management and frequent checkups.",
        ),
        Category::Musculoskeletal => (
            format!("Rest and anti-inflammatory support for {disease}."),
            &["NSAIDs", "Glucosamine supplements", "Pain management"],
            "Manageable with restricted activity.",
        ),
        Category::Gastrointestinal => (
            format!("Bland diet and gastrointestinal protectants for {disease}."),
            &["Anti-emetics", "Probiotics", "Hydration therapy"],
            "Good with 48-hour stabilization.",
        ),
    };
    TreatmentInfo {
        treatment_plan: plan,
        medications: medications.iter().map(|m| m.to_string()).collect(),
        follow_up: None,
        prognosis: prognosis.to_string(),
    }
}

impl Default for TreatmentTable {
    fn default() -> Self {
        let mut e = HashMap::new();
        // Viral
        e.insert(
            "Canine Parvovirus".to_string(),
            entry(
                "Immediate hospitalization required. IV fluid therapy for dehydration is critical.",
                &["Maropitant (antiemetic)", "Broad-spectrum antibiotics (to prevent secondary infection)", "Pain management"],
                "Check white blood cell count daily. Isolate from other dogs for 2 weeks.",
                "Good with early aggressive treatment (80-90% survival).",
            ),
        );
        e.insert(
            "Feline Panleukopenia".to_string(),
            entry(
                "Intensive supportive care. Isolation is mandatory.",
                &["IV Fluids (Lactated Ringer's)", "Ampicillin or Cefazolin", "Anti-nausea medication"],
                "Monitor electrolytes and glucose. Force feeding if anorexic.",
                "Guarded to Poor depending on severity.",
            ),
        );
        e.insert(
            "Rabies".to_string(),
            entry(
                "No cure. Euthanasia is recommended for confirmed cases due to zoonotic risk.",
                &["None"],
                "Report to local health authorities immediately.",
                "Fatal.",
            ),
        );
        // Bacterial
        e.insert(
            "Leptospirosis".to_string(),
            entry(
                "Antibiotic therapy and supportive care for kidney/liver function.",
                &["Doxycycline (drug of choice)", "Penicillin G (for severe cases)"],
                "Monitor renal values (BUN/Creatinine) weekly.",
                "Good if treated early; can lead to chronic kidney failure.",
            ),
        );
        e.insert(
            "Salmonellosis".to_string(),
            entry(
                "Fluid therapy and antimicrobials if systemic.",
                &["Enrofloxacin", "Amoxicillin-clavulanate"],
                "Recheck fecal culture after treatment.",
                "Variable.",
            ),
        );
        // Parasitic
        e.insert(
            "Heartworm".to_string(),
            entry(
                "Multi-stage protocol (Immiticide). Strict exercise restriction.",
                &["Melarsomine", "Doxycycline", "Prednisone", "Macrocyclic lactone preventive"],
                "Antigen test 6 months post-treatment.",
                "Good for Class 1-2; Guarded for Class 3-4.",
            ),
        );
        e.insert(
            "Giardia".to_string(),
            entry(
                "Antiparasitic medication and environmental decontamination.",
                &["Fenbendazole", "Metronidazole"],
                "Retest fecal sample in 2-4 weeks.",
                "Excellent.",
            ),
        );
        // Metabolic
        e.insert(
            "Diabetes Mellitus".to_string(),
            entry(
                "Insulin therapy and dietary management.",
                &["Insulin (NPH or Glargine)", "High-fiber diet (dogs)", "Low-carb diet (cats)"],
                "Blood glucose curve every 1-2 weeks initially.",
                "Good with consistent management.",
            ),
        );
        e.insert(
            "Milk Fever".to_string(),
            entry(
                "Immediate calcium supplementation.",
                &["Calcium gluconate (IV slow)", "Oral calcium gel"],
                "Monitor for relapse within 24 hours.",
                "Excellent if treated immediately.",
            ),
        );
        // Musculoskeletal
        e.insert(
            "Hip Dysplasia".to_string(),
            entry(
                "Weight management, physical therapy, and pain control.",
                &["NSAIDs (Carprofen/Meloxicam)", "Glucosamine/Chondroitin", "Gabapentin"],
                "Radiographs annually to monitor arthritis.",
                "Managed chronically.",
            ),
        );
        e.insert(
            "Laminitis".to_string(),
            entry(
                "Emergency. Cryotherapy (ice boots), stall rest, foot support.",
                &["Phenylbutazone (Bute)", "Acepromazine (vasodilator)"],
                "Radiographs to check for coffin bone rotation.",
                "Guarded.",
            ),
        );
        // Respiratory
        e.insert(
            "Pneumonia".to_string(),
            entry(
                "Oxygen therapy, nebulization, and antibiotics.",
                &["Doxycycline", "Azithromycin", "Bronchodilators"],
                "Chest X-rays every 2 weeks.",
                "Fair to Good.",
            ),
        );
        // Gastrointestinal
        e.insert(
            "Colic".to_string(),
            entry(
                "Pain management, hydration, walking. Surgery for displacement/torsion.",
                &["Flunixin meglumine (Banamine)", "Xylazine", "Mineral oil (via nasogastric tube)"],
                "Monitor manure production.",
                "Variable depending on cause.",
            ),
        );
        Self { entries: e }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_entry_wins() {
        let t = TreatmentTable::default();
        let info = t.lookup("Canine Parvovirus", Some(Category::Viral));
        assert!(info.treatment_plan.contains("IV fluid therapy"));
        assert!(info.follow_up.is_some());
    }

    #[test]
    fn test_category_fallback_names_disease() {
        let t = TreatmentTable::default();
        let info = t.lookup("Kennel Cough", Some(Category::Viral));
        assert!(info.treatment_plan.contains("Kennel Cough"));
        assert_eq!(info.follow_up, None);
        assert!(!info.medications.is_empty());
    }

    #[test]
    fn test_generic_fallback_without_category() {
        let t = TreatmentTable::default();
        let info = t.lookup("Mystery Condition", None);
        assert_eq!(info, TreatmentInfo::generic());
        assert!(!info.treatment_plan.is_empty());
    }
}
