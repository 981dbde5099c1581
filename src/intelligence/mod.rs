//! Prediction engine, risk ranking and the static knowledge base.

pub mod confidence;
pub mod engine;
pub mod ranking;
pub mod reference;

pub use engine::classify;
pub use ranking::{highest_risk, rank_by_risk};
pub use reference::{DiseaseInfo, HealthTip, KnowledgeBase, KnowledgeError};
