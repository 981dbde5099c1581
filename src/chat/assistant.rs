//! Scripted assistant: session lifecycle over the store, responder, verifier and pacers.

use std::sync::Arc;

use uuid::Uuid;

use crate::intelligence::KnowledgeBase;
use crate::models::{Prediction, VerificationStatus};

use super::pacing::Pacer;
use super::responder::{Responder, GREETING};
use super::session::{validate_message, ChatError, ChatMessage, ChatSession, ChatStore};
use super::verification::ReportVerifier;

pub struct Assistant {
    kb: Arc<KnowledgeBase>,
    store: ChatStore,
    verifier: Box<dyn ReportVerifier>,
    reply_pacer: Pacer,
    verify_pacer: Pacer,
}

impl Assistant {
    pub fn new(
        kb: Arc<KnowledgeBase>,
        verifier: Box<dyn ReportVerifier>,
        reply_pacer: Pacer,
        verify_pacer: Pacer,
    ) -> Self {
        Self {
            kb,
            store: ChatStore::new(),
            verifier,
            reply_pacer,
            verify_pacer,
        }
    }

    /// Open a session. A non-empty prediction list is verified straight away.
    pub async fn start_session(
        &self,
        predictions: Vec<Prediction>,
    ) -> Result<ChatSession, ChatError> {
        let has_report = !predictions.is_empty();
        let session = self.store.create(predictions, GREETING)?;

        if has_report {
            return self.verify(&session.id).await;
        }
        Ok(session)
    }

    /// Run the simulated verification and append its transcript message.
    pub async fn verify(&self, id: &Uuid) -> Result<ChatSession, ChatError> {
        // Fail fast on unknown sessions before pacing.
        self.store.get(id)?;
        self.verify_pacer.pause().await;

        let outcome = self.verifier.verify();
        tracing::info!(session_id = %id, status = outcome.status.as_str(), "Report verification");

        self.store.update(id, |session| {
            session.verification = outcome.status;
            session.messages.push(ChatMessage::assistant(outcome.message));
        })?;
        self.store.get(id)
    }

    /// Record a user message and return the assistant's reply.
    pub async fn send(&self, id: &Uuid, text: &str) -> Result<ChatMessage, ChatError> {
        let text = validate_message(text)?;
        self.store.push_message(id, ChatMessage::user(text))?;

        self.reply_pacer.pause().await;

        let (predictions, verification): (Vec<Prediction>, VerificationStatus) = {
            let session = self.store.get(id)?;
            (session.predictions, session.verification)
        };
        let reply = Responder::new(&self.kb).respond(text, &predictions, verification);
        let message = ChatMessage::assistant(reply);
        self.store.push_message(id, message.clone())?;
        Ok(message)
    }

    pub fn session(&self, id: &Uuid) -> Result<ChatSession, ChatError> {
        self.store.get(id)
    }

    pub fn session_count(&self) -> usize {
        self.store.len()
    }
}
