//! Property and concurrency tests for the prediction pipeline.

use proptest::prelude::*;
use std::sync::Arc;

use vetai_core::classifier::ModelArtifact;
use vetai_core::features::{FeatureBuilder, SpeciesEncoder, NUMERIC_COLUMNS};
use vetai_core::models::{PatientRecord, Symptoms, Vitals};
use vetai_core::pipeline::InferenceContext;
use vetai_core::telemetry::RuleEngine;

fn arb_symptoms() -> impl Strategy<Value = Symptoms> {
    (any::<[bool; 8]>()).prop_map(|f| Symptoms {
        fever: f[0],
        lethargy: f[1],
        vomiting: f[2],
        diarrhea: f[3],
        weight_loss: f[4],
        skin_lesion: f[5],
        coughing: f[6],
        lameness: f[7],
    })
}

fn arb_vitals() -> impl Strategy<Value = Vitals> {
    (
        0.0..50.0f64,
        -1.0..20.0f64,
        0.0..25.0f64,
        0.0..600.0f64,
        0.0..400.0f64,
        -1.0..300.0f64,
        -1.0..300.0f64,
        0.0..150.0f64,
        -1.0..10.0f64,
    )
        .prop_map(|(wbc, rbc, hemoglobin, platelets, glucose, alt, ast, urea, creatinine)| Vitals {
            wbc,
            rbc,
            hemoglobin,
            platelets,
            glucose,
            alt,
            ast,
            urea,
            creatinine,
        })
}

proptest! {
    /// The feature vector length never varies with input values or species.
    #[test]
    fn prop_feature_vector_length_invariant(
        vitals in arb_vitals(),
        symptoms in arb_symptoms(),
        species in "[A-Za-z]{1,12}",
        age in 0.0..40.0f64,
    ) {
        let encoder = SpeciesEncoder::new(vec!["Cat".into(), "Dog".into()]);
        let mut record = PatientRecord::new(species, age);
        record.vitals = vitals;
        record.symptoms = symptoms;
        let fv = FeatureBuilder::build(&record, &encoder);
        prop_assert_eq!(fv.numeric.len(), NUMERIC_COLUMNS.len());
        // Ratio guards keep every column finite even with hostile denominators.
        prop_assert!(fv.numeric.iter().all(|v| v.is_finite()));
    }

    /// Every symptom combination predicts without error, with confidences
    /// in range and a non-empty treatment plan.
    #[test]
    fn prop_predict_total_over_symptoms(symptoms in arb_symptoms()) {
        let ctx = InferenceContext::new(ModelArtifact::demo());
        let mut record = PatientRecord::new("Dog", 3.0);
        record.symptoms = symptoms;
        let report = ctx.predict(&record).unwrap();
        prop_assert!((0.0..=1.0).contains(&report.category_confidence));
        prop_assert!((0.0..=1.0).contains(&report.disease_confidence));
        prop_assert!(!report.treatment.treatment_plan.is_empty());
        prop_assert!(!report.prevalence.urgency.is_empty());
    }

    /// The rule engine never panics and at most one alert per checked vital
    /// plus the unknown-species notice.
    #[test]
    fn prop_rule_engine_total(
        species in "[A-Za-z]{1,12}",
        temp in proptest::option::of(20.0..45.0f64),
        hr in proptest::option::of(0.0..400.0f64),
    ) {
        let engine = RuleEngine::default();
        let analysis = engine.analyze(&species, temp, hr);
        prop_assert!(analysis.alerts.len() <= 3);
        prop_assert!(!analysis.reference.notes.is_empty());
    }
}

/// N parallel predictions over a shared context equal N sequential ones.
#[test]
fn test_concurrent_predictions_match_sequential() {
    let ctx = Arc::new(InferenceContext::new(ModelArtifact::demo()));
    let cases: Vec<PatientRecord> = (0..8)
        .map(|i| {
            let mut r = PatientRecord::new(if i % 2 == 0 { "Dog" } else { "Cat" }, i as f64);
            r.symptoms = Symptoms {
                fever: i % 2 == 0,
                coughing: i % 3 == 0,
                lameness: i % 5 == 0,
                ..Symptoms::default()
            };
            r
        })
        .collect();

    let sequential: Vec<_> = cases.iter().map(|r| ctx.predict(r).unwrap()).collect();

    let handles: Vec<_> = cases
        .iter()
        .cloned()
        .map(|r| {
            let ctx = Arc::clone(&ctx);
            std::thread::spawn(move || ctx.predict(&r).unwrap())
        })
        .collect();
    let parallel: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(sequential, parallel);
}
