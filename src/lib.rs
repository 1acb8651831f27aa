//! Smartnotes - self-hosted notes server with LLM-assisted enrichment
//!
//! This crate provides:
//! - SQLite storage for notes with keyword and natural-language date search
//! - Server-rendered HTML pages for browsing and editing
//! - JSON endpoints that enrich note content (summary, category, sentiment)
//!   through an OpenAI-compatible chat-completions gateway
//!
//! # Usage
//!
//! As a standalone server:
//! ```text
//! smartnotes --config ~/.smartnotes/config.toml
//! ```

pub mod ai;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod search;

// Re-export main types for convenience
pub use config::Config;
pub use db::Database;
pub use error::{AppError, Result};
