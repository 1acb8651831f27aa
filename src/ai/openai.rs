//! OpenAI-compatible enrichment gateway

use crate::ai::types::{ApiError, ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::ai::EnrichmentBackend;
use crate::config::AiConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Gateway to an OpenAI-compatible chat-completions service
pub struct OpenAiGateway {
    client: Client,
    config: AiConfig,
}

impl OpenAiGateway {
    /// Build a gateway from configuration. The request timeout bounds how
    /// long a single enrichment call can block its request.
    pub fn new(config: AiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Gateway(format!("Failed to create HTTP client: {}", e)))?;

        Ok(OpenAiGateway { client, config })
    }

    fn build_request(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut req = self.client.post(&url);

        if let Some(ref api_key) = self.config.api_key {
            req = req.header("Authorization", format!("Bearer {}", api_key));
        }

        req.header("Content-Type", "application/json")
    }
}

#[async_trait]
impl EnrichmentBackend for OpenAiGateway {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String> {
        debug!(
            "Generating with model {}, prompt length: {}",
            self.config.model,
            prompt.len()
        );

        let mut messages = Vec::new();
        if !system.is_empty() {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.to_string(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: prompt.to_string(),
        });

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            temperature: None,
            max_tokens: None,
        };

        let response = self
            .build_request("/chat/completions")
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body: ApiErrorResponse = response.json().await.unwrap_or(ApiErrorResponse {
                error: ApiError {
                    message: "Unknown error".to_string(),
                    error_type: None,
                },
            });
            return Err(AppError::Gateway(format!(
                "Service returned {}: {}",
                status, body.error.message
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("Failed to parse response: {}", e)))?;

        let content = result
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default();

        debug!("Generation complete, response length: {}", content.len());
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
