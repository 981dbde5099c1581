//! Form analysis: parse, gate on required fields, classify, report, record.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::intake::{missing_required, FormSubmission};
use crate::report::AnalysisReport;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub values: FormSubmission,
    #[serde(default)]
    pub lab_name: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub history_id: Uuid,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

/// `POST /api/analyze`
pub async fn analyze(
    State(ctx): State<ApiContext>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let values = req.values.into_lab_values();

    let missing = missing_required(&values);
    if !missing.is_empty() {
        return Err(ApiError::BadRequest(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    let report = AnalysisReport::analyze(values, &ctx.state.kb);
    let entry = ctx.state.history.record(req.lab_name, &report.predictions)?;

    tracing::info!(
        history_id = %entry.id,
        primary = report.primary.disease.as_str(),
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        history_id: entry.id,
        report,
    }))
}
