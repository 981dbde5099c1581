//! Raw engine endpoint: `LabValues` in, predictions out.

use axum::Json;

use crate::api::error::ApiError;
use crate::intelligence;
use crate::models::{LabValues, Prediction};

/// `POST /classify` and `POST /api/classify`.
pub async fn classify(
    Json(values): Json<LabValues>,
) -> Result<Json<Vec<Prediction>>, ApiError> {
    let predictions = intelligence::classify(&values);
    tracing::info!(count = predictions.len(), "Classified lab values");
    Ok(Json(predictions))
}
