//! Offline adapters for deployments without external capabilities.
//!
//! Both adapters fail immediately, before any network submission, so the
//! callers' fallback paths engage deterministically.

use async_trait::async_trait;
use siteforge_domain::ToolSpecification;

use crate::infrastructure::ports::{
    ClassifierError, IntentClassifierPort, LlmError, LlmPort, LlmRequest, LlmResponse,
};

/// LLM adapter for offline mode: the generative capability is absent and
/// every generation resolves through the deterministic fallback templates.
pub struct OfflineLlm;

#[async_trait]
impl LlmPort for OfflineLlm {
    async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
        Err(LlmError::Unavailable(
            "generative backend is disabled".to_string(),
        ))
    }
}

/// Classifier adapter for deployments with no intent classification
/// service wired in. The generation facade maps this to an empty tool list.
pub struct UnconfiguredClassifier;

#[async_trait]
impl IntentClassifierPort for UnconfiguredClassifier {
    async fn classify(&self, _query: &str) -> Result<Vec<ToolSpecification>, ClassifierError> {
        Err(ClassifierError::Unavailable(
            "no intent classification service configured".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_llm_fails_before_submission() {
        let result = OfflineLlm
            .generate(LlmRequest::new(vec![]).with_json_output())
            .await;
        assert!(matches!(result, Err(LlmError::Unavailable(_))));
    }

    #[tokio::test]
    async fn unconfigured_classifier_reports_unavailable() {
        let result = UnconfiguredClassifier.classify("a recipe site").await;
        assert!(matches!(result, Err(ClassifierError::Unavailable(_))));
    }
}
