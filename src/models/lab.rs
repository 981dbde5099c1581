use serde::{Deserialize, Serialize};

use super::enums::{Gender, Marker};

/// One set of blood-test readings. Every field is optional; `None` means
/// "not measured" and is never treated as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabValues {
    /// g/dL
    pub hemoglobin: Option<f64>,
    /// mg/dL
    pub glucose: Option<f64>,
    /// mg/dL
    pub creatinine: Option<f64>,
    /// mg/dL
    pub urea: Option<f64>,
    /// mg/dL
    pub cholesterol: Option<f64>,
    pub wbc: Option<f64>,
    pub rbc: Option<f64>,
    pub platelets: Option<f64>,
    /// %
    pub hematocrit: Option<f64>,
    /// fL
    pub mcv: Option<f64>,
    /// pg
    pub mch: Option<f64>,
    /// g/dL
    pub mchc: Option<f64>,
    pub age: Option<f64>,
    pub gender: Option<Gender>,
}

impl LabValues {
    /// Copy with every NaN reading dropped to `None`.
    pub fn sanitized(&self) -> Self {
        fn clean(v: Option<f64>) -> Option<f64> {
            v.filter(|x| !x.is_nan())
        }

        Self {
            hemoglobin: clean(self.hemoglobin),
            glucose: clean(self.glucose),
            creatinine: clean(self.creatinine),
            urea: clean(self.urea),
            cholesterol: clean(self.cholesterol),
            wbc: clean(self.wbc),
            rbc: clean(self.rbc),
            platelets: clean(self.platelets),
            hematocrit: clean(self.hematocrit),
            mcv: clean(self.mcv),
            mch: clean(self.mch),
            mchc: clean(self.mchc),
            age: clean(self.age),
            gender: self.gender,
        }
    }

    /// Reading for one of the display markers.
    pub fn marker(&self, marker: Marker) -> Option<f64> {
        match marker {
            Marker::Hemoglobin => self.hemoglobin,
            Marker::Glucose => self.glucose,
            Marker::Creatinine => self.creatinine,
            Marker::Urea => self.urea,
            Marker::Platelets => self.platelets,
        }
    }

    /// Number of fields that carry a value (gender included).
    pub fn present_count(&self) -> usize {
        [
            self.hemoglobin,
            self.glucose,
            self.creatinine,
            self.urea,
            self.cholesterol,
            self.wbc,
            self.rbc,
            self.platelets,
            self.hematocrit,
            self.mcv,
            self.mch,
            self.mchc,
            self.age,
        ]
        .iter()
        .filter(|v| v.is_some())
        .count()
            + usize::from(self.gender.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_json_fields_are_none() {
        let values: LabValues =
            serde_json::from_str(r#"{"hemoglobin": 11.5, "gender": "female"}"#).unwrap();
        assert_eq!(values.hemoglobin, Some(11.5));
        assert_eq!(values.glucose, None);
        assert_eq!(values.gender, Some(Gender::Female));
    }

    #[test]
    fn explicit_null_is_none_and_zero_is_kept() {
        let values: LabValues =
            serde_json::from_str(r#"{"glucose": null, "urea": 0}"#).unwrap();
        assert_eq!(values.glucose, None);
        assert_eq!(values.urea, Some(0.0));
    }

    #[test]
    fn sanitized_drops_nan() {
        let values = LabValues {
            hemoglobin: Some(f64::NAN),
            glucose: Some(95.0),
            ..Default::default()
        };
        let clean = values.sanitized();
        assert_eq!(clean.hemoglobin, None);
        assert_eq!(clean.glucose, Some(95.0));
    }

    #[test]
    fn present_count_includes_gender() {
        let values = LabValues {
            hemoglobin: Some(13.0),
            platelets: Some(200_000.0),
            gender: Some(Gender::Male),
            ..Default::default()
        };
        assert_eq!(values.present_count(), 3);
        assert_eq!(LabValues::default().present_count(), 0);
    }
}
