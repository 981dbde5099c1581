pub mod enums;
pub mod lab;
pub mod prediction;

pub use enums::{Disease, Gender, Marker, MessageRole, RiskLevel, VerificationStatus};
pub use lab::LabValues;
pub use prediction::{MarkerSet, Prediction};
