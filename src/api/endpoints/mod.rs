pub mod analyze;
pub mod chat;
pub mod classify;
pub mod health;
pub mod history;
pub mod knowledge;
pub mod upload;
