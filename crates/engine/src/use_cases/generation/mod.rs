//! Content generation use cases.
//!
//! The facade turns a free-text query (or a world archetype) into a
//! complete content payload: synthesized copy plus materialized tool
//! components. Entry points never fail; backend and classifier trouble
//! degrade to deterministic fallbacks.

mod materialize;
pub mod prompts;
mod synthesis;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use siteforge_domain::{ToolComponent, ToolSpecification, WalletAddress, WorldArchetype};

use crate::infrastructure::ports::{ClockPort, IntentClassifierPort, LlmPort};

pub use materialize::{materialize_archetype_tools, materialize_tools};

/// Result of site and world generation.
#[derive(Debug, Clone)]
pub struct GeneratedSiteContent {
    pub title: String,
    pub description: String,
    /// Markdown homepage body
    pub content: String,
    pub tools: Vec<ToolComponent>,
}

/// Result of page generation. Pages carry no description.
#[derive(Debug, Clone)]
pub struct GeneratedPageContent {
    pub title: String,
    /// Markdown page body
    pub content: String,
    pub tools: Vec<ToolComponent>,
}

/// Facade over intent classification, tool materialization, and content
/// synthesis.
///
/// Each call is an independent unit of work: no shared mutable state, one
/// backend round trip at most, and no internal retry (callers own retry
/// and timeout policy).
pub struct ContentGenerator {
    llm: Arc<dyn LlmPort>,
    classifier: Arc<dyn IntentClassifierPort>,
    clock: Arc<dyn ClockPort>,
}

impl ContentGenerator {
    pub fn new(
        llm: Arc<dyn LlmPort>,
        classifier: Arc<dyn IntentClassifierPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            llm,
            classifier,
            clock,
        }
    }

    /// Create homepage content and tools for a new website.
    pub async fn create_site_content(
        &self,
        query: &str,
        author: &WalletAddress,
    ) -> GeneratedSiteContent {
        let specs = self.classify_or_empty(query).await;
        let tools = materialize_tools(specs, author, self.clock.now());

        let copy = synthesis::synthesize_site(self.llm.as_ref(), query).await;

        tracing::info!(
            scenario = "site",
            tool_count = tools.len(),
            title = %copy.title,
            "Generated site content"
        );

        GeneratedSiteContent {
            title: copy.title,
            description: copy.description,
            content: copy.content,
            tools,
        }
    }

    /// Create homepage content and tools for a themed-world website.
    pub async fn create_world_content(
        &self,
        archetype: WorldArchetype,
        author: &WalletAddress,
        slot_combination: Option<&str>,
    ) -> GeneratedSiteContent {
        let tools = materialize_archetype_tools(archetype, author, self.clock.now());

        let copy =
            synthesis::synthesize_world(self.llm.as_ref(), archetype, slot_combination).await;

        tracing::info!(
            scenario = "world",
            archetype = %archetype,
            tool_count = tools.len(),
            "Generated world content"
        );

        GeneratedSiteContent {
            title: copy.title,
            description: copy.description,
            content: copy.content,
            tools,
        }
    }

    /// Create content and tools for a new page on an existing website.
    pub async fn create_page_content(
        &self,
        website_context: &str,
        page_query: &str,
        author: &WalletAddress,
    ) -> GeneratedPageContent {
        let specs = self.classify_or_empty(page_query).await;
        let tools = materialize_tools(specs, author, self.clock.now());

        let copy =
            synthesis::synthesize_page(self.llm.as_ref(), website_context, page_query).await;

        tracing::info!(
            scenario = "page",
            tool_count = tools.len(),
            title = %copy.title,
            "Generated page content"
        );

        GeneratedPageContent {
            title: copy.title,
            content: copy.content,
            tools,
        }
    }

    /// Classify a query, treating classifier failure as an empty tool list.
    ///
    /// Generation must complete even when classification is down; the user
    /// sees generic content, never an error.
    async fn classify_or_empty(&self, query: &str) -> Vec<ToolSpecification> {
        match self.classifier.classify(query).await {
            Ok(specs) => specs,
            Err(e) => {
                tracing::warn!(error = %e, "Intent classification failed, continuing with no tools");
                Vec::new()
            }
        }
    }
}
