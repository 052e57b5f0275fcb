//! Page entity - a named content unit attached to a website.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{PageId, ToolComponent, WalletAddress};

/// A named content unit attached to a website.
///
/// Immutable once created except for being listed under its parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    pub title: String,
    /// Markdown body text
    pub content: String,
    pub tools: Vec<ToolComponent>,
    /// The query that prompted this page's creation
    pub query: String,
    pub added_at: DateTime<Utc>,
    pub added_by: WalletAddress,
}

impl Page {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tools: Vec<ToolComponent>,
        query: impl Into<String>,
        added_by: WalletAddress,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: PageId::new(),
            title: title.into(),
            content: content.into(),
            tools,
            query: query.into(),
            added_at,
            added_by,
        }
    }
}
