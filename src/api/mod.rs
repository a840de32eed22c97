//! API Layer
//!
//! HTTP client for the AlertIndia backend.

pub mod client;

pub use client::*;
