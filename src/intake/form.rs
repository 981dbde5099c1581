//! Form-text parsing into `LabValues`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::models::{Gender, LabValues};

/// Leading decimal number, optionally signed, with optional exponent.
static RE_LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").unwrap()
});

/// Parse a form field. Blank or non-numeric text is "not measured".
/// Trailing garbage after a leading number is ignored ("12.5 g/dL" -> 12.5).
pub fn parse_marker(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    RE_LEADING_NUMBER
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Raw form submission: every marker as free text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    pub hemoglobin: Option<String>,
    pub glucose: Option<String>,
    pub creatinine: Option<String>,
    pub urea: Option<String>,
    pub cholesterol: Option<String>,
    pub wbc: Option<String>,
    pub rbc: Option<String>,
    pub platelets: Option<String>,
    pub hematocrit: Option<String>,
    pub mcv: Option<String>,
    pub mch: Option<String>,
    pub mchc: Option<String>,
    pub age: Option<String>,
    pub gender: Option<Gender>,
}

impl FormSubmission {
    pub fn into_lab_values(self) -> LabValues {
        let field = |v: Option<String>| v.as_deref().and_then(parse_marker);

        LabValues {
            hemoglobin: field(self.hemoglobin),
            glucose: field(self.glucose),
            creatinine: field(self.creatinine),
            urea: field(self.urea),
            cholesterol: field(self.cholesterol),
            wbc: field(self.wbc),
            rbc: field(self.rbc),
            platelets: field(self.platelets),
            hematocrit: field(self.hematocrit),
            mcv: field(self.mcv),
            mch: field(self.mch),
            mchc: field(self.mchc),
            age: field(self.age),
            gender: self.gender,
        }
    }
}

/// Required form fields that are missing or zero, in display order.
pub fn missing_required(values: &LabValues) -> Vec<&'static str> {
    [
        ("glucose", values.glucose),
        ("hemoglobin", values.hemoglobin),
        ("creatinine", values.creatinine),
    ]
    .into_iter()
    .filter(|(_, v)| v.map_or(true, |x| x == 0.0))
    .map(|(name, _)| name)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_marker_plain_numbers() {
        assert_eq!(parse_marker("12.5"), Some(12.5));
        assert_eq!(parse_marker(" 140 "), Some(140.0));
        assert_eq!(parse_marker(".8"), Some(0.8));
        assert_eq!(parse_marker("2.5e5"), Some(250_000.0));
        assert_eq!(parse_marker("-3"), Some(-3.0));
    }

    #[test]
    fn parse_marker_lenient_suffix() {
        assert_eq!(parse_marker("12.5 g/dL"), Some(12.5));
        assert_eq!(parse_marker("7."), Some(7.0));
    }

    #[test]
    fn parse_marker_rejects_non_numeric() {
        assert_eq!(parse_marker(""), None);
        assert_eq!(parse_marker("   "), None);
        assert_eq!(parse_marker("abc"), None);
        assert_eq!(parse_marker("NaN"), None);
        assert_eq!(parse_marker("g/dL 12"), None);
    }

    #[test]
    fn submission_converts_fields() {
        let form: FormSubmission = serde_json::from_str(
            r#"{"hemoglobin": "11.2", "glucose": "", "platelets": "oops", "gender": "male"}"#,
        )
        .unwrap();
        let values = form.into_lab_values();
        assert_eq!(values.hemoglobin, Some(11.2));
        assert_eq!(values.glucose, None);
        assert_eq!(values.platelets, None);
        assert_eq!(values.gender, Some(Gender::Male));
    }

    #[test]
    fn missing_required_reports_absent_and_zero() {
        let values = LabValues {
            hemoglobin: Some(0.0),
            creatinine: Some(1.0),
            ..Default::default()
        };
        assert_eq!(missing_required(&values), vec!["glucose", "hemoglobin"]);

        let complete = LabValues {
            hemoglobin: Some(13.0),
            glucose: Some(90.0),
            creatinine: Some(1.0),
            ..Default::default()
        };
        assert!(missing_required(&complete).is_empty());
    }
}
