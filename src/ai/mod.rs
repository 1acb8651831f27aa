//! Enrichment gateway
//!
//! Notes can be annotated with an LLM-generated summary, category, or
//! sentiment. Everything goes through the [`EnrichmentBackend`] seam so
//! request handlers never know which provider (or mock) is behind it.

pub mod enrich;
pub mod mock;
pub mod openai;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;

/// Text-generation backend used for note enrichment.
///
/// One synchronous request per call; no retries. Implementations report
/// failures through `AppError::Gateway`.
#[async_trait]
pub trait EnrichmentBackend: Send + Sync {
    /// Generate text for a prompt under a system instruction persona
    async fn generate(&self, system: &str, prompt: &str) -> Result<String>;

    /// The model name requests are sent to
    fn model_name(&self) -> &str;
}
