//! Pages
//!
//! Top-level view components, one per navigation tab.

pub mod alerts;
pub mod chatbot;
pub mod dashboard;
pub mod home;

pub use alerts::Alerts;
pub use chatbot::Chatbot;
pub use dashboard::Dashboard;
pub use home::Home;
