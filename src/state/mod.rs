//! State Management
//!
//! Shell-level application state and the chat session transcript.

pub mod chat;
pub mod global;

pub use chat::ChatSession;
pub use global::{provide_app_state, AppState, Tab};
