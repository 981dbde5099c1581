//! Scripted conversational assistant.
//!
//! A deterministic keyword-to-template dispatcher over the current
//! predictions and the knowledge base. Verification and typing delays are
//! simulated and isolated behind `ReportVerifier` and `Pacer`.

pub mod assistant;
pub mod classify;
pub mod pacing;
pub mod responder;
pub mod session;
pub mod verification;

pub use assistant::Assistant;
pub use classify::{classify_query, QueryCategory};
pub use pacing::Pacer;
pub use responder::Responder;
pub use session::{ChatError, ChatMessage, ChatSession, ChatStore};
pub use verification::{FixedVerifier, ReportVerifier, SimulatedVerifier, VerificationOutcome};
