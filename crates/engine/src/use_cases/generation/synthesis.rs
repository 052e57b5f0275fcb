//! Content synthesis against the generative backend.
//!
//! Every scenario returns complete copy: a backend failure or malformed
//! response is logged and replaced by the scenario's deterministic
//! template, and each field of a parseable response is repaired
//! independently. No error crosses this module's boundary.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use siteforge_domain::{WorldArchetype, WorldArchetypeDef};

use crate::infrastructure::ports::{ChatMessage, LlmError, LlmPort, LlmRequest};

use super::prompts;

const GENERATION_TEMPERATURE: f32 = 0.7;

/// Synthesized homepage copy (site and world scenarios).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct SiteCopy {
    pub title: String,
    pub description: String,
    pub content: String,
}

/// Synthesized page copy. Pages carry no description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct PageCopy {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
struct RawSiteCopy {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPageCopy {
    title: Option<String>,
    content: Option<String>,
}

pub(super) async fn synthesize_site(llm: &dyn LlmPort, query: &str) -> SiteCopy {
    let fallback = site_fallback(query);

    let raw: RawSiteCopy = match request_json(llm, prompts::site_prompt(query)).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, scenario = "site", "Content generation failed, using fallback copy");
            return fallback;
        }
    };

    SiteCopy {
        title: non_empty(raw.title).unwrap_or(fallback.title),
        description: non_empty(raw.description).unwrap_or(fallback.description),
        content: non_empty(raw.content).unwrap_or(fallback.content),
    }
}

pub(super) async fn synthesize_world(
    llm: &dyn LlmPort,
    archetype: WorldArchetype,
    slot_combination: Option<&str>,
) -> SiteCopy {
    let def = archetype.definition();
    let fallback = world_fallback(def);

    let raw: RawSiteCopy = match request_json(llm, prompts::world_prompt(def, slot_combination)).await
    {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(
                error = %e,
                scenario = "world",
                archetype = %archetype,
                "Content generation failed, using fallback copy"
            );
            return fallback;
        }
    };

    SiteCopy {
        title: non_empty(raw.title).unwrap_or(fallback.title),
        description: non_empty(raw.description).unwrap_or(fallback.description),
        content: non_empty(raw.content).unwrap_or(fallback.content),
    }
}

pub(super) async fn synthesize_page(
    llm: &dyn LlmPort,
    website_context: &str,
    page_query: &str,
) -> PageCopy {
    let fallback = page_fallback(page_query);

    let raw: RawPageCopy =
        match request_json(llm, prompts::page_prompt(website_context, page_query)).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, scenario = "page", "Content generation failed, using fallback copy");
                return fallback;
            }
        };

    PageCopy {
        title: non_empty(raw.title).unwrap_or(fallback.title),
        content: non_empty(raw.content).unwrap_or(fallback.content),
    }
}

fn site_fallback(query: &str) -> SiteCopy {
    SiteCopy {
        title: query.to_string(),
        description: "An Infinity-powered website".to_string(),
        content: format!(
            "## {query}\n\nThis website was created to explore: {query}\n\nContent generation is in progress..."
        ),
    }
}

fn world_fallback(def: &WorldArchetypeDef) -> SiteCopy {
    SiteCopy {
        title: def.name.to_string(),
        description: def.description.to_string(),
        content: format!(
            "## {}\n\n{}\n\n### Educational Goal\n\n{}\n\n### Get Started\n\nExplore the tools below to begin your learning journey.",
            def.name, def.description, def.educational_goal
        ),
    }
}

fn page_fallback(page_query: &str) -> PageCopy {
    PageCopy {
        title: page_query.to_string(),
        content: format!("## {page_query}\n\nThis page explores {page_query} in detail."),
    }
}

async fn request_json<T: DeserializeOwned>(
    llm: &dyn LlmPort,
    prompt: String,
) -> Result<T, LlmError> {
    let request = LlmRequest::new(vec![ChatMessage::user(prompt)])
        .with_temperature(GENERATION_TEMPERATURE)
        .with_json_output();

    let response = llm.generate(request).await?;
    parse_json_object(&response.content)
}

/// Extract and parse the outermost JSON object in a text payload.
///
/// Backends wrap JSON in prose or code fences often enough that parsing
/// the raw payload directly would discard usable generations.
fn parse_json_object<T: DeserializeOwned>(content: &str) -> Result<T, LlmError> {
    let json_start = content.find('{');
    let json_end = content.rfind('}');

    let json_str = match (json_start, json_end) {
        (Some(start), Some(end)) if end > start => &content[start..=end],
        _ => {
            return Err(LlmError::InvalidResponse(
                "response did not contain a JSON object".to_string(),
            ))
        }
    };

    serde_json::from_str(json_str).map_err(|e| LlmError::InvalidResponse(e.to_string()))
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{CannedLlm, FailingLlm};
    use super::*;

    #[tokio::test]
    async fn site_scenario_uses_generated_copy() {
        let llm = CannedLlm::new(
            r###"{"title": "Sourdough, Demystified", "description": "Starters to crumb", "content": "## Flour\n\nStart here."}"###,
        );
        let copy = synthesize_site(&llm, "sourdough baking").await;
        assert_eq!(copy.title, "Sourdough, Demystified");
        assert_eq!(copy.description, "Starters to crumb");
        assert_eq!(copy.content, "## Flour\n\nStart here.");
    }

    #[tokio::test]
    async fn site_scenario_falls_back_on_backend_failure() {
        let copy = synthesize_site(&FailingLlm, "sourdough baking").await;
        assert_eq!(copy.title, "sourdough baking");
        assert_eq!(copy.description, "An Infinity-powered website");
        assert!(copy.content.starts_with("## sourdough baking"));
        assert!(copy.content.contains("This website was created to explore: sourdough baking"));
    }

    #[tokio::test]
    async fn missing_fields_default_independently() {
        let llm = CannedLlm::new(r#"{"title": "T"}"#);
        let copy = synthesize_site(&llm, "the query").await;
        assert_eq!(copy.title, "T");
        assert_eq!(copy.description, "An Infinity-powered website");
        assert!(copy.content.contains("the query"));
    }

    #[tokio::test]
    async fn blank_fields_count_as_missing() {
        let llm = CannedLlm::new(r#"{"title": "  ", "description": "Kept", "content": ""}"#);
        let copy = synthesize_site(&llm, "the query").await;
        assert_eq!(copy.title, "the query");
        assert_eq!(copy.description, "Kept");
        assert!(copy.content.starts_with("## the query"));
    }

    #[tokio::test]
    async fn json_is_extracted_from_fenced_response() {
        let llm = CannedLlm::new(
            "Here is your website:\n```json\n{\"title\": \"Fenced\", \"description\": \"D\", \"content\": \"C\"}\n```\nEnjoy!",
        );
        let copy = synthesize_site(&llm, "q").await;
        assert_eq!(copy.title, "Fenced");
    }

    #[tokio::test]
    async fn unparseable_response_falls_back() {
        let llm = CannedLlm::new("Sorry, I can't help with that.");
        let copy = synthesize_site(&llm, "the query").await;
        assert_eq!(copy.title, "the query");
    }

    #[tokio::test]
    async fn world_scenario_falls_back_to_archetype_copy() {
        let copy = synthesize_world(&FailingLlm, WorldArchetype::FrontierOutpost, None).await;
        let def = WorldArchetype::FrontierOutpost.definition();
        assert_eq!(copy.title, def.name);
        assert_eq!(copy.description, def.description);
        assert!(copy.content.contains(def.educational_goal));
        assert!(copy.content.contains("### Get Started"));
    }

    #[tokio::test]
    async fn world_scenario_repairs_partial_response() {
        let llm = CannedLlm::new(r#"{"description": "A tagline"}"#);
        let copy = synthesize_world(&llm, WorldArchetype::EcoGarden, Some("spring")).await;
        assert_eq!(copy.title, "Eco Garden");
        assert_eq!(copy.description, "A tagline");
        assert!(copy.content.contains("Eco Garden"));
    }

    #[tokio::test]
    async fn page_scenario_falls_back_on_backend_failure() {
        let copy = synthesize_page(&FailingLlm, "tide pools", "anemones").await;
        assert_eq!(copy.title, "anemones");
        assert_eq!(copy.content, "## anemones\n\nThis page explores anemones in detail.");
    }

    #[tokio::test]
    async fn page_scenario_uses_generated_copy() {
        let llm = CannedLlm::new(r###"{"title": "Anemone Feeding", "content": "## Tentacles"}"###);
        let copy = synthesize_page(&llm, "tide pools", "anemones").await;
        assert_eq!(copy.title, "Anemone Feeding");
        assert_eq!(copy.content, "## Tentacles");
    }

    #[test]
    fn parse_json_object_rejects_braceless_text() {
        let result: Result<RawPageCopy, _> = parse_json_object("no json here");
        assert!(matches!(result, Err(LlmError::InvalidResponse(_))));
    }
}
