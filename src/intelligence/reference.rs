use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Disease;

const DISEASE_INFO_JSON: &str = include_str!("../../resources/disease_info.json");
const HEALTH_TIPS_JSON: &str = include_str!("../../resources/health_tips.json");

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("Failed to parse {0}: {1}")]
    Parse(&'static str, String),
    #[error("{file} has no entry for {disease}")]
    MissingEntry {
        file: &'static str,
        disease: Disease,
    },
    #[error("{file} lists {disease} more than once")]
    DuplicateEntry {
        file: &'static str,
        disease: Disease,
    },
}

/// Descriptive metadata for one condition (loaded from disease_info.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseInfo {
    pub disease: Disease,
    pub name: String,
    pub description: String,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    pub treatments: Vec<String>,
    pub lifestyle: Vec<String>,
    pub medications: Vec<String>,
    pub complications: Vec<String>,
    pub prognosis: String,
}

/// Short recommendation lists for one condition (loaded from health_tips.json).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthTip {
    pub disease: Disease,
    pub tips: Vec<String>,
    #[serde(default)]
    pub treatments: Vec<String>,
    #[serde(default)]
    pub lifestyle_impact: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
}

#[derive(Deserialize)]
struct HealthTipsFile {
    default_tips: Vec<String>,
    diseases: Vec<HealthTip>,
}

/// Static knowledge base keyed by the same closed disease set the engine emits.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    info: HashMap<Disease, DiseaseInfo>,
    tips: HashMap<Disease, HealthTip>,
    default_tips: Vec<String>,
}

impl KnowledgeBase {
    /// Parse the bundled JSON tables. Every disease must have exactly one entry in each.
    pub fn load_bundled() -> Result<Self, KnowledgeError> {
        Self::from_json(DISEASE_INFO_JSON, HEALTH_TIPS_JSON)
    }

    pub fn from_json(info_json: &str, tips_json: &str) -> Result<Self, KnowledgeError> {
        let infos: Vec<DiseaseInfo> = serde_json::from_str(info_json)
            .map_err(|e| KnowledgeError::Parse("disease_info.json", e.to_string()))?;
        let tips_file: HealthTipsFile = serde_json::from_str(tips_json)
            .map_err(|e| KnowledgeError::Parse("health_tips.json", e.to_string()))?;

        let info = index_by_disease("disease_info.json", infos, |i| i.disease)?;
        let tips = index_by_disease("health_tips.json", tips_file.diseases, |t| t.disease)?;

        tracing::debug!(
            diseases = info.len(),
            default_tips = tips_file.default_tips.len(),
            "Knowledge base loaded"
        );

        Ok(Self {
            info,
            tips,
            default_tips: tips_file.default_tips,
        })
    }

    pub fn disease_info(&self, disease: Disease) -> &DiseaseInfo {
        &self.info[&disease]
    }

    pub fn health_tip(&self, disease: Disease) -> &HealthTip {
        &self.tips[&disease]
    }

    pub fn tips_for(&self, disease: Disease) -> &[String] {
        &self.health_tip(disease).tips
    }

    /// Full tip record by disease name (case-insensitive).
    pub fn health_tip_for_name(&self, name: &str) -> Option<&HealthTip> {
        Disease::from_name(name).map(|d| self.health_tip(d))
    }

    pub fn info_for_name(&self, name: &str) -> Option<&DiseaseInfo> {
        Disease::from_name(name).map(|d| self.disease_info(d))
    }

    pub fn default_tips(&self) -> &[String] {
        &self.default_tips
    }
}

fn index_by_disease<T>(
    file: &'static str,
    entries: Vec<T>,
    key: impl Fn(&T) -> Disease,
) -> Result<HashMap<Disease, T>, KnowledgeError> {
    let mut map = HashMap::with_capacity(entries.len());
    for entry in entries {
        let disease = key(&entry);
        if map.insert(disease, entry).is_some() {
            return Err(KnowledgeError::DuplicateEntry { file, disease });
        }
    }
    if let Some(disease) = Disease::ALL.iter().find(|d| !map.contains_key(*d)) {
        return Err(KnowledgeError::MissingEntry {
            file,
            disease: *disease,
        });
    }
    Ok(map)
}
