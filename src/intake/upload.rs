//! Report upload checks and the fixed sample extraction.
//!
//! Uploaded files are validated but never read: no document extraction
//! happens. A fixed sample panel stands in for the extracted values.

use serde::Serialize;
use thiserror::Error;

use crate::models::{Gender, LabValues};

/// 5 MiB upload limit.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub const ALLOWED_CONTENT_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png"];

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("No file provided")]
    Empty,
    #[error("File too large: {size} bytes (max {MAX_UPLOAD_BYTES})")]
    TooLarge { size: usize },
    #[error("Unsupported file type: {0}. Please upload a PDF, JPG, or PNG file")]
    UnsupportedType(String),
}

/// Result of a (simulated) report extraction.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractedReport {
    pub file_name: String,
    pub content_type: String,
    pub extracted_count: usize,
    pub values: LabValues,
}

/// Resolve the content type (declared, else guessed from the file name) and
/// check size and type. Returns the accepted content type.
pub fn validate_upload(
    file_name: &str,
    content_type: Option<&str>,
    size: usize,
) -> Result<String, IntakeError> {
    if size == 0 {
        return Err(IntakeError::Empty);
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(IntakeError::TooLarge { size });
    }

    let resolved = match content_type.filter(|c| !c.is_empty() && *c != "application/octet-stream") {
        Some(declared) => declared.to_ascii_lowercase(),
        None => mime_guess::from_path(file_name)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string(),
    };

    if !ALLOWED_CONTENT_TYPES.contains(&resolved.as_str()) {
        return Err(IntakeError::UnsupportedType(resolved));
    }
    Ok(resolved)
}

/// Fixed demo panel returned in place of a real extraction.
pub fn sample_values() -> LabValues {
    LabValues {
        hemoglobin: Some(11.2),
        glucose: Some(140.0),
        creatinine: Some(1.4),
        urea: Some(25.0),
        cholesterol: Some(220.0),
        wbc: Some(8500.0),
        rbc: Some(4.1),
        platelets: Some(250_000.0),
        hematocrit: Some(38.0),
        mcv: Some(85.0),
        mch: Some(28.0),
        mchc: Some(33.0),
        age: Some(45.0),
        gender: Some(Gender::Male),
    }
}

pub fn sample_extraction(file_name: &str, content_type: String) -> ExtractedReport {
    let values = sample_values();
    ExtractedReport {
        file_name: file_name.to_string(),
        content_type,
        extracted_count: values.present_count(),
        values,
    }
}
