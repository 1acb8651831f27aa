//! Enrichment operations
//!
//! Each operation is one gateway call with a fixed instruction persona and
//! the note's content interpolated into the prompt. The results are
//! advisory: callers persist whatever string comes back, or nothing at all
//! when the gateway fails.

use crate::ai::EnrichmentBackend;
use crate::error::Result;

const SUMMARIZE_PERSONA: &str = "You are a helpful assistant that summarizes notes.";
const CATEGORIZE_PERSONA: &str =
    "You are a helpful assistant that categorizes notes in a single word category.";
const SENTIMENT_PERSONA: &str = "You are a helpful assistant that analyzes the sentiment of \
     notes in a single word (e.g., Positive, Neutral, Negative).";

/// Generate a concise summary of the content
pub async fn summarize(backend: &dyn EnrichmentBackend, content: &str) -> Result<String> {
    let prompt = format!("Generate a concise summary for: {}", content);
    let raw = backend.generate(SUMMARIZE_PERSONA, &prompt).await?;
    Ok(clean_response(&raw))
}

/// Produce a single category label for the content
pub async fn categorize(backend: &dyn EnrichmentBackend, content: &str) -> Result<String> {
    let prompt = format!("Categorize this note: {}", content);
    let raw = backend.generate(CATEGORIZE_PERSONA, &prompt).await?;
    Ok(clean_response(&raw))
}

/// Produce a single sentiment label for the content. The service is
/// free-text; Positive/Neutral/Negative are expected but not enforced.
pub async fn analyze_sentiment(backend: &dyn EnrichmentBackend, content: &str) -> Result<String> {
    let prompt = format!("Detect and display the sentiment of this note: {}", content);
    let raw = backend.generate(SENTIMENT_PERSONA, &prompt).await?;
    Ok(clean_response(&raw))
}

/// Strip surrounding whitespace and wrapping quotes from a model response
fn clean_response(raw: &str) -> String {
    raw.trim().trim_matches('"').trim_matches('\'').trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::mock::MockGateway;

    #[test]
    fn test_clean_response() {
        assert_eq!(clean_response("  Work  "), "Work");
        assert_eq!(clean_response("\"Positive\""), "Positive");
        assert_eq!(clean_response("'Neutral'"), "Neutral");
        assert_eq!(clean_response("\" padded \""), "padded");
    }

    #[tokio::test]
    async fn test_summarize_uses_persona_and_content() {
        let mock = MockGateway::new().with_response("A short summary.");
        let summary = summarize(&mock, "Long note body").await.unwrap();
        assert_eq!(summary, "A short summary.");

        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].system.contains("summarizes notes"));
        assert!(calls[0].prompt.contains("Long note body"));
    }

    #[tokio::test]
    async fn test_categorize_and_sentiment_personas() {
        let mock = MockGateway::new().with_response("Work");
        categorize(&mock, "standup notes").await.unwrap();
        analyze_sentiment(&mock, "great day").await.unwrap();

        let calls = mock.calls();
        assert!(calls[0].system.contains("single word category"));
        assert!(calls[1].system.contains("sentiment"));
        assert!(calls[1].prompt.starts_with("Detect and display"));
    }

    #[tokio::test]
    async fn test_failure_propagates() {
        let mock = MockGateway::failing();
        let err = summarize(&mock, "anything").await.unwrap_err();
        assert!(matches!(err, crate::error::AppError::Gateway(_)));
    }
}
