//! Shared LLM test doubles for the generation tests.

use async_trait::async_trait;

use crate::infrastructure::ports::{FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse};

/// LLM double that always returns the same payload.
pub(super) struct CannedLlm {
    content: String,
}

impl CannedLlm {
    pub(super) fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait]
impl LlmPort for CannedLlm {
    async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
        Ok(LlmResponse {
            content: self.content.clone(),
            finish_reason: FinishReason::Stop,
            usage: None,
        })
    }
}

/// LLM double that always fails.
pub(super) struct FailingLlm;

#[async_trait]
impl LlmPort for FailingLlm {
    async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
        Err(LlmError::RequestFailed(
            "simulated backend failure".to_string(),
        ))
    }
}
