//! Shared application state for the HTTP layer.
//!
//! Built once at startup and wrapped in `Arc` by `ApiContext`. Every
//! mutable part sits behind its own `RwLock`, so handlers never hold a lock
//! across an await point.

use std::sync::Arc;

use crate::chat::{Assistant, Pacer, ReportVerifier, SimulatedVerifier};
use crate::config::ServerConfig;
use crate::history::HistoryStore;
use crate::intelligence::{KnowledgeBase, KnowledgeError};

pub struct AppState {
    pub config: ServerConfig,
    pub kb: Arc<KnowledgeBase>,
    pub assistant: Assistant,
    pub history: HistoryStore,
    /// Simulated extraction delay for uploads.
    pub upload_pacer: Pacer,
}

impl AppState {
    /// Load the bundled knowledge base and wire a randomized verifier.
    pub fn new(config: ServerConfig) -> Result<Self, KnowledgeError> {
        let verifier = SimulatedVerifier::new(config.verify_success_rate);
        Self::with_verifier(config, Box::new(verifier))
    }

    pub fn with_verifier(
        config: ServerConfig,
        verifier: Box<dyn ReportVerifier>,
    ) -> Result<Self, KnowledgeError> {
        let kb = Arc::new(KnowledgeBase::load_bundled()?);
        let (chat_min, chat_max) = config.chat_delay;

        let assistant = Assistant::new(
            Arc::clone(&kb),
            verifier,
            Pacer::new(chat_min, chat_max),
            Pacer::fixed(config.verify_delay),
        );

        Ok(Self {
            upload_pacer: Pacer::fixed(config.upload_delay),
            config,
            kb,
            assistant,
            history: HistoryStore::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::FixedVerifier;
    use crate::models::Disease;

    #[test]
    fn builds_from_default_config() {
        let state = AppState::new(ServerConfig::instant()).unwrap();
        assert!(state.history.is_empty());
        assert_eq!(state.assistant.session_count(), 0);
        assert!(state.upload_pacer.is_noop());
        assert!(!state.kb.disease_info(Disease::Anemia).symptoms.is_empty());
    }

    #[test]
    fn custom_verifier_is_accepted() {
        let state = AppState::with_verifier(
            ServerConfig::instant(),
            Box::new(FixedVerifier { succeed: true }),
        )
        .unwrap();
        assert_eq!(state.config, ServerConfig::instant());
    }
}
