//! Tool components - materialized functional units embedded in a website or page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{ToolComponentId, ToolKind, WalletAddress};

/// Tool-type-specific configuration bag.
///
/// The shape is opaque to the core; each renderer interprets its own keys.
pub type ToolConfig = serde_json::Map<String, serde_json::Value>;

/// A materialized functional unit embedded in a website or page.
///
/// Created exclusively from a [`ToolSpecification`] by the tool
/// materializer; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolComponent {
    pub id: ToolComponentId,
    #[serde(rename = "type")]
    pub kind: ToolKind,
    pub title: String,
    pub description: String,
    pub config: ToolConfig,
    pub added_at: DateTime<Utc>,
    pub added_by: WalletAddress,
}

impl ToolComponent {
    /// Stamp a specification into a component with a fresh unique id.
    pub fn materialize(
        spec: ToolSpecification,
        added_by: WalletAddress,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ToolComponentId::new(),
            kind: spec.kind,
            title: spec.title,
            description: spec.description,
            config: spec.config,
            added_at,
            added_by,
        }
    }
}

/// Classifier or archetype output before materialization.
///
/// Transient; consumed immediately by the tool materializer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpecification {
    #[serde(rename = "type")]
    pub kind: ToolKind,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub config: ToolConfig,
}

impl ToolSpecification {
    pub fn new(kind: ToolKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
            config: ToolConfig::new(),
        }
    }

    pub fn with_config(mut self, config: ToolConfig) -> Self {
        self.config = config;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn materialize_preserves_spec_fields() {
        let mut config = ToolConfig::new();
        config.insert("precision".into(), serde_json::json!(2));
        let spec = ToolSpecification::new(ToolKind::Calculator, "Budget Helper", "Adds up costs")
            .with_config(config.clone());

        let author = WalletAddress::generate();
        let now = Utc::now();
        let tool = ToolComponent::materialize(spec, author.clone(), now);

        assert_eq!(tool.kind, ToolKind::Calculator);
        assert_eq!(tool.title, "Budget Helper");
        assert_eq!(tool.description, "Adds up costs");
        assert_eq!(tool.config, config);
        assert_eq!(tool.added_at, now);
        assert_eq!(tool.added_by, author);
    }

    #[test]
    fn serde_uses_type_field_for_kind() {
        let spec = ToolSpecification::new(ToolKind::Quiz, "Reef Quiz", "Test your knowledge");
        let json = serde_json::to_value(&spec).expect("serializes");
        assert_eq!(json["type"], "quiz");
    }

    #[test]
    fn spec_deserializes_without_config() {
        let spec: ToolSpecification = serde_json::from_str(
            r#"{"type": "timer", "title": "Launch Countdown", "description": "T-minus"}"#,
        )
        .expect("deserializes");
        assert_eq!(spec.kind, ToolKind::Timer);
        assert!(spec.config.is_empty());
    }
}
