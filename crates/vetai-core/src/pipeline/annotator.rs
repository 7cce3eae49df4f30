//! Prevalence and treatment annotation for predicted diseases.

use crate::models::{Category, PrevalenceInfo, TreatmentInfo};
use crate::tables::{PrevalenceTable, TreatmentTable};

/// Epidemiological annotation; undocumented diseases get the sentinel.
pub fn annotate_prevalence(table: &PrevalenceTable, disease: &str) -> PrevalenceInfo {
    table.lookup(disease)
}

/// Treatment guidance with the full fallback chain.
pub fn annotate_treatment(
    table: &TreatmentTable,
    disease: &str,
    category: Category,
) -> TreatmentInfo {
    table.lookup(disease, Some(category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotations_always_resolve() {
        let prevalence = PrevalenceTable::default();
        let treatments = TreatmentTable::default();
        // A disease in neither table still annotates fully.
        let p = annotate_prevalence(&prevalence, "Scale Rot");
        assert_eq!(p.urgency, "Consult Veterinarian");
        let t = annotate_treatment(&treatments, "Scale Rot", Category::Bacterial);
        assert!(t.treatment_plan.contains("Scale Rot"));
    }
}
