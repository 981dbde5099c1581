//! Input collection: form parsing and report upload.

pub mod form;
pub mod upload;

pub use form::{missing_required, parse_marker, FormSubmission};
pub use upload::{sample_extraction, validate_upload, ExtractedReport, IntakeError};
