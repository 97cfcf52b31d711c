// src/models/mod.rs

//! Domain models for the quake feed client.

mod config;
mod earthquake;

// Re-export all public types
pub use config::{Config, DisplayConfig, FeedConfig, Palette};
pub use earthquake::Earthquake;
