use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Disease, Prediction, RiskLevel};

/// Oldest entries are dropped beyond this many.
pub const MAX_HISTORY_ENTRIES: usize = 100;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    pub disease: Disease,
    pub confidence: u8,
    pub risk_level: RiskLevel,
}

impl From<&Prediction> for PredictionSummary {
    fn from(p: &Prediction) -> Self {
        Self {
            disease: p.disease,
            confidence: p.confidence,
            risk_level: p.risk_level,
        }
    }
}

/// One completed analysis.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub lab_name: Option<String>,
    pub predictions: Vec<PredictionSummary>,
}

/// In-memory analysis history backed by RwLock. Not persisted.
pub struct HistoryStore {
    entries: std::sync::RwLock<Vec<HistoryEntry>>,
    capacity: usize,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: std::sync::RwLock::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn record(
        &self,
        lab_name: Option<String>,
        predictions: &[Prediction],
    ) -> Result<HistoryEntry, StoreError> {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            lab_name: lab_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            predictions: predictions.iter().map(PredictionSummary::from).collect(),
        };

        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.push(entry.clone());
        if entries.len() > self.capacity {
            let excess = entries.len() - self.capacity;
            entries.drain(..excess);
        }

        tracing::debug!(id = %entry.id, stored = entries.len(), "Analysis recorded");
        Ok(entry)
    }

    /// Newest first.
    pub fn list(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        let take = limit.unwrap_or(entries.len());
        Ok(entries.iter().rev().take(take).cloned().collect())
    }

    pub fn get(&self, id: &Uuid) -> Result<Option<HistoryEntry>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.iter().find(|e| e.id == *id).cloned())
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::classify;
    use crate::models::LabValues;

    fn anemia() -> Vec<Prediction> {
        classify(&LabValues {
            hemoglobin: Some(9.0),
            ..Default::default()
        })
    }

    #[test]
    fn record_and_get() {
        let store = HistoryStore::new();
        let entry = store.record(Some("  City Lab ".into()), &anemia()).unwrap();
        assert_eq!(entry.lab_name.as_deref(), Some("City Lab"));
        assert_eq!(entry.predictions[0].disease, Disease::Anemia);
        assert_eq!(entry.predictions[0].risk_level, RiskLevel::High);

        let fetched = store.get(&entry.id).unwrap().unwrap();
        assert_eq!(fetched.id, entry.id);
        assert!(store.get(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn blank_lab_name_is_dropped() {
        let store = HistoryStore::new();
        let entry = store.record(Some("   ".into()), &anemia()).unwrap();
        assert!(entry.lab_name.is_none());
    }

    #[test]
    fn list_is_newest_first_with_limit() {
        let store = HistoryStore::new();
        let first = store.record(Some("a".into()), &anemia()).unwrap();
        let second = store.record(Some("b".into()), &anemia()).unwrap();
        let third = store.record(Some("c".into()), &anemia()).unwrap();

        let all = store.list(None).unwrap();
        let ids: Vec<Uuid> = all.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);

        let limited = store.list(Some(2)).unwrap();
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].id, third.id);
    }

    #[test]
    fn capacity_drops_oldest() {
        let store = HistoryStore::with_capacity(2);
        let first = store.record(None, &anemia()).unwrap();
        store.record(None, &anemia()).unwrap();
        store.record(None, &anemia()).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.get(&first.id).unwrap().is_none());
    }

    #[test]
    fn summary_serializes_camel_case() {
        let store = HistoryStore::new();
        let entry = store.record(None, &anemia()).unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["predictions"][0]["riskLevel"], "high");
        assert_eq!(json["predictions"][0]["disease"], "Anemia");
    }
}
