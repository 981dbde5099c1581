use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::{Disease, Marker, RiskLevel};
use super::lab::LabValues;

/// Markers relevant to one prediction. A key mapped to `None` is relevant
/// but was not measured; an absent key is not relevant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerSet(BTreeMap<Marker, Option<f64>>);

impl MarkerSet {
    /// Copy the given markers out of a set of readings.
    pub fn from_values(values: &LabValues, markers: &[Marker]) -> Self {
        Self(markers.iter().map(|m| (*m, values.marker(*m))).collect())
    }

    /// Measured value, flattening "not relevant" and "not measured".
    pub fn get(&self, marker: Marker) -> Option<f64> {
        self.0.get(&marker).copied().flatten()
    }

    pub fn contains(&self, marker: Marker) -> bool {
        self.0.contains_key(&marker)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Marker, Option<f64>)> + '_ {
        self.0.iter().map(|(m, v)| (*m, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One detected (or fallback) condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub disease: Disease,
    /// Integer percentage in 0..=100.
    pub confidence: u8,
    pub risk_level: RiskLevel,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markers: Option<MarkerSet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_set_keeps_unmeasured_keys() {
        let values = LabValues {
            creatinine: Some(1.5),
            ..Default::default()
        };
        let set = MarkerSet::from_values(&values, &[Marker::Creatinine, Marker::Urea]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Marker::Urea));
        assert_eq!(set.get(Marker::Urea), None);
        assert_eq!(set.get(Marker::Creatinine), Some(1.5));
        assert!(!set.contains(Marker::Glucose));
    }

    #[test]
    fn prediction_json_shape() {
        let values = LabValues {
            platelets: None,
            hemoglobin: Some(13.0),
            ..Default::default()
        };
        let prediction = Prediction {
            disease: Disease::Healthy,
            confidence: 85,
            risk_level: RiskLevel::Low,
            description: "ok".into(),
            markers: Some(MarkerSet::from_values(
                &values,
                &[Marker::Hemoglobin, Marker::Platelets],
            )),
        };
        let json = serde_json::to_value(&prediction).unwrap();
        assert_eq!(json["disease"], "Healthy");
        assert_eq!(json["riskLevel"], "low");
        assert_eq!(json["markers"]["hemoglobin"], 13.0);
        assert!(json["markers"]["platelets"].is_null());
        assert!(json["markers"].as_object().unwrap().contains_key("platelets"));
    }

    #[test]
    fn prediction_without_markers_omits_field() {
        let prediction = Prediction {
            disease: Disease::Inconclusive,
            confidence: 30,
            risk_level: RiskLevel::Low,
            description: "n/a".into(),
            markers: None,
        };
        let json = serde_json::to_value(&prediction).unwrap();
        assert!(json.get("markers").is_none());
        let back: Prediction = serde_json::from_value(json).unwrap();
        assert_eq!(back, prediction);
    }
}
