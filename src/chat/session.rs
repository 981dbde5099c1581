//! In-memory chat sessions.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{MessageRole, Prediction, VerificationStatus};

/// Maximum accepted user message length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Chat session not found: {0}")]
    SessionNotFound(Uuid),
    #[error("Message cannot be empty")]
    EmptyMessage,
    #[error("Message too long (max {MAX_MESSAGE_CHARS} chars)")]
    MessageTooLong,
    #[error("Chat store lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// One conversation: the predictions it discusses plus its transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub predictions: Vec<Prediction>,
    pub verification: VerificationStatus,
    pub messages: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
}

/// Trim and bound-check a user message.
pub fn validate_message(text: &str) -> Result<&str, ChatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    if trimmed.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ChatError::MessageTooLong);
    }
    Ok(trimmed)
}

/// Oldest sessions are evicted beyond this many.
pub const MAX_CHAT_SESSIONS: usize = 1000;
/// Oldest messages are dropped from a transcript beyond this many.
pub const MAX_SESSION_MESSAGES: usize = 200;

#[derive(Default)]
struct Sessions {
    by_id: HashMap<Uuid, ChatSession>,
    /// Creation order, oldest first.
    order: VecDeque<Uuid>,
}

/// Bounded session map behind a RwLock. Contents live for the process lifetime only.
pub struct ChatStore {
    sessions: RwLock<Sessions>,
    max_sessions: usize,
    max_messages: usize,
}

impl ChatStore {
    pub fn new() -> Self {
        Self::with_limits(MAX_CHAT_SESSIONS, MAX_SESSION_MESSAGES)
    }

    pub fn with_limits(max_sessions: usize, max_messages: usize) -> Self {
        Self {
            sessions: RwLock::new(Sessions::default()),
            max_sessions: max_sessions.max(1),
            max_messages: max_messages.max(1),
        }
    }

    /// Create a session seeded with `greeting` and return a snapshot of it.
    pub fn create(
        &self,
        predictions: Vec<Prediction>,
        greeting: &str,
    ) -> Result<ChatSession, ChatError> {
        let session = ChatSession {
            id: Uuid::new_v4(),
            predictions,
            verification: VerificationStatus::Pending,
            messages: vec![ChatMessage::assistant(greeting)],
            created_at: Utc::now(),
        };

        let mut sessions = self.sessions.write().map_err(|_| ChatError::LockPoisoned)?;
        sessions.by_id.insert(session.id, session.clone());
        sessions.order.push_back(session.id);

        while sessions.order.len() > self.max_sessions {
            if let Some(oldest) = sessions.order.pop_front() {
                sessions.by_id.remove(&oldest);
                tracing::debug!(session_id = %oldest, "Chat session evicted");
            }
        }

        tracing::debug!(session_id = %session.id, "Chat session created");
        Ok(session)
    }

    pub fn get(&self, id: &Uuid) -> Result<ChatSession, ChatError> {
        let sessions = self.sessions.read().map_err(|_| ChatError::LockPoisoned)?;
        sessions
            .by_id
            .get(id)
            .cloned()
            .ok_or(ChatError::SessionNotFound(*id))
    }

    /// Apply `f` to the session under the write lock, then trim its transcript.
    pub fn update<T>(
        &self,
        id: &Uuid,
        f: impl FnOnce(&mut ChatSession) -> T,
    ) -> Result<T, ChatError> {
        let mut sessions = self.sessions.write().map_err(|_| ChatError::LockPoisoned)?;
        let session = sessions
            .by_id
            .get_mut(id)
            .ok_or(ChatError::SessionNotFound(*id))?;
        let result = f(session);

        let excess = session.messages.len().saturating_sub(self.max_messages);
        if excess > 0 {
            session.messages.drain(..excess);
        }
        Ok(result)
    }

    pub fn push_message(&self, id: &Uuid, message: ChatMessage) -> Result<(), ChatError> {
        self.update(id, |s| s.messages.push(message))
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|s| s.by_id.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}
