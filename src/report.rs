//! Analysis report: engine output plus the derived views a front-end renders.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::intelligence::{classify, rank_by_risk, KnowledgeBase};
use crate::models::{Disease, LabValues, Prediction, RiskLevel};

/// One slice of the confidence chart.
#[derive(Debug, Clone, Serialize)]
pub struct ChartSlice {
    pub name: Disease,
    pub value: u8,
    pub color: &'static str,
}

/// Chart color for a risk level.
pub fn risk_color(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::High => "#ef4444",
        RiskLevel::Moderate => "#f59e0b",
        RiskLevel::Low => "#10b981",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub values: LabValues,
    /// Engine order.
    pub predictions: Vec<Prediction>,
    /// Highest risk first.
    pub ranked: Vec<Prediction>,
    pub chart: Vec<ChartSlice>,
    pub primary: Prediction,
    pub tips: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl AnalysisReport {
    /// Classify `values` and assemble the report.
    pub fn analyze(values: LabValues, kb: &KnowledgeBase) -> Self {
        let predictions = classify(&values);
        Self::build(values, predictions, kb)
    }

    pub fn build(values: LabValues, predictions: Vec<Prediction>, kb: &KnowledgeBase) -> Self {
        let ranked: Vec<Prediction> = rank_by_risk(&predictions).into_iter().cloned().collect();
        // classify() never returns an empty list; guard anyway for externally built input.
        let primary = ranked.first().cloned().unwrap_or_else(|| {
            let mut fallback = classify(&LabValues::default());
            fallback.remove(0)
        });

        let chart = predictions
            .iter()
            .map(|p| ChartSlice {
                name: p.disease,
                value: p.confidence,
                color: risk_color(p.risk_level),
            })
            .collect();

        let tips = kb.tips_for(primary.disease).to_vec();

        Self {
            values,
            predictions,
            ranked,
            chart,
            primary,
            tips,
            generated_at: Utc::now(),
        }
    }
}
