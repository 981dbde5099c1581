//! Risk ordering for presentation and the chat responder.

use std::cmp::Ordering;

use crate::models::Prediction;

/// Comparator placing higher risk first.
pub fn by_risk_desc(a: &Prediction, b: &Prediction) -> Ordering {
    b.risk_level.rank().cmp(&a.risk_level.rank())
}

/// Predictions sorted highest risk first. The sort is stable: equal risk
/// levels keep their engine order.
pub fn rank_by_risk(predictions: &[Prediction]) -> Vec<&Prediction> {
    let mut ranked: Vec<&Prediction> = predictions.iter().collect();
    ranked.sort_by(|a, b| by_risk_desc(a, b));
    ranked
}

/// First prediction of the highest risk tier.
pub fn highest_risk(predictions: &[Prediction]) -> Option<&Prediction> {
    predictions
        .iter()
        .reduce(|best, p| {
            if p.risk_level.rank() > best.risk_level.rank() {
                p
            } else {
                best
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Disease, RiskLevel};

    fn prediction(disease: Disease, risk_level: RiskLevel) -> Prediction {
        Prediction {
            disease,
            confidence: 50,
            risk_level,
            description: String::new(),
            markers: None,
        }
    }

    #[test]
    fn ranks_high_before_moderate() {
        let list = vec![
            prediction(Disease::Anemia, RiskLevel::Moderate),
            prediction(Disease::Type2Diabetes, RiskLevel::High),
            prediction(Disease::Thalassemia, RiskLevel::Moderate),
        ];
        let ranked = rank_by_risk(&list);
        let order: Vec<Disease> = ranked.iter().map(|p| p.disease).collect();
        assert_eq!(
            order,
            vec![Disease::Type2Diabetes, Disease::Anemia, Disease::Thalassemia]
        );
    }

    #[test]
    fn ties_keep_engine_order() {
        let list = vec![
            prediction(Disease::ChronicKidneyDisease, RiskLevel::High),
            prediction(Disease::Thrombocytopenia, RiskLevel::High),
        ];
        assert_eq!(
            highest_risk(&list).unwrap().disease,
            Disease::ChronicKidneyDisease
        );
        assert_eq!(rank_by_risk(&list)[0].disease, Disease::ChronicKidneyDisease);
    }

    #[test]
    fn highest_risk_of_empty_is_none() {
        assert!(highest_risk(&[]).is_none());
    }

    #[test]
    fn highest_risk_agrees_with_ranking() {
        let list = vec![
            prediction(Disease::Anemia, RiskLevel::Moderate),
            prediction(Disease::Type2Diabetes, RiskLevel::Moderate),
            prediction(Disease::ChronicKidneyDisease, RiskLevel::High),
            prediction(Disease::Thrombocytopenia, RiskLevel::High),
        ];
        assert_eq!(
            highest_risk(&list).map(|p| p.disease),
            rank_by_risk(&list).first().map(|p| p.disease)
        );
    }
}
