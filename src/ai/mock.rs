//! Mock enrichment backend for deterministic testing

use crate::ai::EnrichmentBackend;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// One recorded call to the mock
#[derive(Debug, Clone)]
pub struct MockCall {
    pub system: String,
    pub prompt: String,
}

/// Deterministic gateway substitute. Returns a fixed response, or fails
/// every call when built with [`MockGateway::failing`].
#[derive(Clone)]
pub struct MockGateway {
    response: String,
    fail: bool,
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockGateway {
    pub fn new() -> Self {
        MockGateway {
            response: "Mock response".to_string(),
            fail: false,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A gateway whose every call fails, for exercising error paths
    pub fn failing() -> Self {
        let mut mock = MockGateway::new();
        mock.fail = true;
        mock
    }

    /// Set the fixed response returned by every call
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    /// All calls recorded so far, for assertions
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnrichmentBackend for MockGateway {
    async fn generate(&self, system: &str, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(MockCall {
            system: system.to_string(),
            prompt: prompt.to_string(),
        });

        if self.fail {
            return Err(AppError::Gateway("mock gateway failure".to_string()));
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
