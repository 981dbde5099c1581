//! Rule-based prediction engine.
//!
//! Turns one set of lab readings into a list of condition predictions.
//! Rules are independent and evaluated in a fixed order; when none fires a
//! single fallback (`Healthy` or `Inconclusive`) is emitted, so the result
//! is never empty.

use crate::models::{Disease, LabValues, Marker, MarkerSet, Prediction, RiskLevel};

use super::confidence::interpolate;

// Anemia
const HEMOGLOBIN_THRESHOLD: f64 = 12.0;
const HEMOGLOBIN_SEVERE: f64 = 10.0;
const HEMOGLOBIN_EXTREME: f64 = 8.0;

// Type 2 Diabetes
const GLUCOSE_THRESHOLD: f64 = 126.0;
const GLUCOSE_SEVERE: f64 = 180.0;
const GLUCOSE_EXTREME: f64 = 200.0;

// Chronic Kidney Disease
const CREATININE_THRESHOLD: f64 = 1.2;
const CREATININE_SEVERE: f64 = 2.0;
const CREATININE_EXTREME: f64 = 3.0;
const UREA_THRESHOLD: f64 = 20.0;

// Thrombocytopenia
const PLATELET_THRESHOLD: f64 = 150_000.0;
const PLATELET_SEVERE: f64 = 100_000.0;
const PLATELET_EXTREME: f64 = 50_000.0;

// Thalassemia
const MCH_THRESHOLD: f64 = 27.0;
const MCV_THRESHOLD: f64 = 80.0;
const THALASSEMIA_CONFIDENCE: u8 = 75;

const HEALTHY_CONFIDENCE: u8 = 85;
const INCONCLUSIVE_CONFIDENCE: u8 = 30;

/// Fixed finding sentence attached to each prediction.
pub fn finding(disease: Disease) -> &'static str {
    match disease {
        Disease::Anemia => "Low hemoglobin levels detected, indicating possible anemia.",
        Disease::Type2Diabetes => {
            "Elevated glucose levels detected, indicating possible diabetes."
        }
        Disease::ChronicKidneyDisease => {
            "Elevated creatinine and/or urea levels detected, indicating possible kidney issues."
        }
        Disease::Thrombocytopenia => {
            "Low platelet count detected, indicating possible thrombocytopenia."
        }
        Disease::Thalassemia => {
            "Low MCV and MCH levels detected, suggesting possible thalassemia."
        }
        Disease::Healthy => "All measured values appear within normal ranges.",
        Disease::Inconclusive => {
            "Not enough data provided to make accurate predictions. Please provide more test values."
        }
    }
}

/// Classify a set of readings. Pure and deterministic; NaN readings count as absent.
pub fn classify(values: &LabValues) -> Vec<Prediction> {
    let values = values.sanitized();

    let mut predictions: Vec<Prediction> = [
        check_anemia(&values),
        check_diabetes(&values),
        check_kidney_disease(&values),
        check_thrombocytopenia(&values),
        check_thalassemia(&values),
    ]
    .into_iter()
    .flatten()
    .collect();

    if predictions.is_empty() {
        predictions.push(fallback(&values));
    }

    tracing::debug!(
        count = predictions.len(),
        diseases = ?predictions.iter().map(|p| p.disease.as_str()).collect::<Vec<_>>(),
        "Classification complete"
    );

    predictions
}

fn detected(
    disease: Disease,
    confidence: u8,
    risk_level: RiskLevel,
    values: &LabValues,
    markers: &[Marker],
) -> Prediction {
    Prediction {
        disease,
        confidence,
        risk_level,
        description: finding(disease).to_string(),
        markers: Some(MarkerSet::from_values(values, markers)),
    }
}

fn check_anemia(values: &LabValues) -> Option<Prediction> {
    let hemoglobin = values.hemoglobin.filter(|v| *v < HEMOGLOBIN_THRESHOLD)?;
    let risk = if hemoglobin < HEMOGLOBIN_SEVERE {
        RiskLevel::High
    } else {
        RiskLevel::Moderate
    };

    Some(detected(
        Disease::Anemia,
        interpolate(hemoglobin, HEMOGLOBIN_THRESHOLD, HEMOGLOBIN_EXTREME),
        risk,
        values,
        &[Marker::Hemoglobin],
    ))
}

fn check_diabetes(values: &LabValues) -> Option<Prediction> {
    let glucose = values.glucose.filter(|v| *v > GLUCOSE_THRESHOLD)?;
    let risk = if glucose > GLUCOSE_SEVERE {
        RiskLevel::High
    } else {
        RiskLevel::Moderate
    };

    Some(detected(
        Disease::Type2Diabetes,
        interpolate(glucose, GLUCOSE_THRESHOLD, GLUCOSE_EXTREME),
        risk,
        values,
        &[Marker::Glucose],
    ))
}

fn check_kidney_disease(values: &LabValues) -> Option<Prediction> {
    let creatinine_high = values.creatinine.is_some_and(|v| v > CREATININE_THRESHOLD);
    let urea_high = values.urea.is_some_and(|v| v > UREA_THRESHOLD);
    if !creatinine_high && !urea_high {
        return None;
    }

    let risk = if values.creatinine.is_some_and(|v| v > CREATININE_SEVERE) {
        RiskLevel::High
    } else {
        RiskLevel::Moderate
    };

    // Confidence tracks creatinine only; a urea-only trigger scores at the floor.
    let confidence = interpolate(
        values.creatinine.unwrap_or(0.0),
        CREATININE_THRESHOLD,
        CREATININE_EXTREME,
    );

    Some(detected(
        Disease::ChronicKidneyDisease,
        confidence,
        risk,
        values,
        &[Marker::Creatinine, Marker::Urea],
    ))
}

fn check_thrombocytopenia(values: &LabValues) -> Option<Prediction> {
    let platelets = values.platelets.filter(|v| *v < PLATELET_THRESHOLD)?;
    let risk = if platelets < PLATELET_SEVERE {
        RiskLevel::High
    } else {
        RiskLevel::Moderate
    };

    Some(detected(
        Disease::Thrombocytopenia,
        interpolate(platelets, PLATELET_THRESHOLD, PLATELET_EXTREME),
        risk,
        values,
        &[Marker::Platelets],
    ))
}

fn check_thalassemia(values: &LabValues) -> Option<Prediction> {
    let mch = values.mch?;
    let mcv = values.mcv?;
    if mch >= MCH_THRESHOLD || mcv >= MCV_THRESHOLD {
        return None;
    }

    Some(detected(
        Disease::Thalassemia,
        THALASSEMIA_CONFIDENCE,
        RiskLevel::Moderate,
        values,
        &[Marker::Hemoglobin],
    ))
}

fn fallback(values: &LabValues) -> Prediction {
    let enough_data =
        values.hemoglobin.is_some() && values.glucose.is_some() && values.creatinine.is_some();

    if enough_data {
        detected(
            Disease::Healthy,
            HEALTHY_CONFIDENCE,
            RiskLevel::Low,
            values,
            &[
                Marker::Hemoglobin,
                Marker::Glucose,
                Marker::Creatinine,
                Marker::Platelets,
            ],
        )
    } else {
        Prediction {
            disease: Disease::Inconclusive,
            confidence: INCONCLUSIVE_CONFIDENCE,
            risk_level: RiskLevel::Low,
            description: finding(Disease::Inconclusive).to_string(),
            markers: None,
        }
    }
}
