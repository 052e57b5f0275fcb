//! Website entity - the tradable artifact whose value the core computes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    Page, TokenId, ToolComponent, WalletAddress, WebsiteId, WebsiteTheme, WorldArchetype,
};

/// An AI-generated website artifact, represented in the marketplace as a token.
///
/// Value is always derived by the valuation engine from current attributes;
/// it is never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: WebsiteId,
    pub token_id: TokenId,
    pub title: String,
    pub description: String,
    /// Markdown body of the homepage
    pub content: String,
    pub theme: WebsiteTheme,
    pub world_archetype: Option<WorldArchetype>,
    /// Scarcity multiplier applied against the base value (1.0 = neutral)
    pub rarity_multiplier: f64,
    /// Uniqueness score (1.0 = baseline)
    pub uniqueness_score: f64,
    /// Milliseconds of accumulated authoring time
    pub active_build_time_ms: u64,
    pub pages: Vec<Page>,
    pub tools: Vec<ToolComponent>,
    pub owner: WalletAddress,
    pub created_at: DateTime<Utc>,
}

impl Website {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
        owner: WalletAddress,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: WebsiteId::new(),
            token_id: TokenId::new(),
            title: title.into(),
            description: description.into(),
            content: content.into(),
            theme: WebsiteTheme::default(),
            world_archetype: None,
            rarity_multiplier: 1.0,
            uniqueness_score: 1.0,
            active_build_time_ms: 0,
            pages: Vec::new(),
            tools: Vec::new(),
            owner,
            created_at,
        }
    }

    pub fn with_theme(mut self, theme: WebsiteTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_archetype(mut self, archetype: WorldArchetype) -> Self {
        self.world_archetype = Some(archetype);
        self
    }

    pub fn with_rarity_multiplier(mut self, multiplier: f64) -> Self {
        self.rarity_multiplier = multiplier;
        self
    }

    pub fn with_uniqueness_score(mut self, score: f64) -> Self {
        self.uniqueness_score = score;
        self
    }

    /// Attach a generated page. Pages keep their creation order.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Attach a materialized tool. Tools keep their creation order.
    pub fn add_tool(&mut self, tool: ToolComponent) {
        self.tools.push(tool);
    }

    /// Accumulate authoring time from a completed build session.
    pub fn record_build_time(&mut self, elapsed_ms: u64) {
        self.active_build_time_ms = self.active_build_time_ms.saturating_add(elapsed_ms);
    }
}
