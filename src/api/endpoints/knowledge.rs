//! Static reference lookups by condition name (case-insensitive).

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::intelligence::DiseaseInfo;

#[derive(Serialize)]
pub struct TipsResponse {
    pub disease: String,
    pub tips: Vec<String>,
    pub treatments: Vec<String>,
    pub lifestyle_impact: Vec<String>,
    pub medications: Vec<String>,
}

/// `GET /api/knowledge/:disease`
pub async fn info(
    State(ctx): State<ApiContext>,
    Path(disease): Path<String>,
) -> Result<Json<DiseaseInfo>, ApiError> {
    ctx.state
        .kb
        .info_for_name(&disease)
        .cloned()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown condition: {disease}")))
}

/// `GET /api/knowledge/:disease/tips`: unknown names get the default tips
/// and no treatment detail.
pub async fn tips(
    State(ctx): State<ApiContext>,
    Path(disease): Path<String>,
) -> Json<TipsResponse> {
    let kb = &ctx.state.kb;
    let response = match kb.health_tip_for_name(&disease) {
        Some(tip) => TipsResponse {
            disease,
            tips: tip.tips.clone(),
            treatments: tip.treatments.clone(),
            lifestyle_impact: tip.lifestyle_impact.clone(),
            medications: tip.medications.clone(),
        },
        None => TipsResponse {
            disease,
            tips: kb.default_tips().to_vec(),
            treatments: Vec::new(),
            lifestyle_impact: Vec::new(),
            medications: Vec::new(),
        },
    };
    Json(response)
}
