//! Tool materialization: specifications -> embedded tool components.

use chrono::{DateTime, Utc};

use siteforge_domain::{
    ToolComponent, ToolConfig, ToolKind, ToolSpecification, WalletAddress, WorldArchetype,
};

/// Stamp classifier output into tool components.
///
/// One component per specification, input order preserved, every component
/// in the batch sharing `batch_time` and `author`, each with a fresh
/// process-unique id.
pub fn materialize_tools(
    specs: Vec<ToolSpecification>,
    author: &WalletAddress,
    batch_time: DateTime<Utc>,
) -> Vec<ToolComponent> {
    specs
        .into_iter()
        .map(|spec| ToolComponent::materialize(spec, author.clone(), batch_time))
        .collect()
}

/// Materialize an archetype's fixed tool list.
///
/// Archetype tools embed as content hubs; the config records which world
/// tool each one hosts, and the title capitalizes the hyphenated kind words.
pub fn materialize_archetype_tools(
    archetype: WorldArchetype,
    author: &WalletAddress,
    batch_time: DateTime<Utc>,
) -> Vec<ToolComponent> {
    let def = archetype.definition();

    let specs = def
        .tools
        .iter()
        .map(|kind| {
            let mut config = ToolConfig::new();
            config.insert(
                "worldType".to_string(),
                serde_json::Value::String(archetype.as_str().to_string()),
            );
            config.insert(
                "toolName".to_string(),
                serde_json::Value::String(kind.as_str().to_string()),
            );

            ToolSpecification::new(
                ToolKind::ContentHub,
                kind.display_name(),
                format!("{} for {}", kind.as_str(), def.name),
            )
            .with_config(config)
        })
        .collect();

    materialize_tools(specs, author, batch_time)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn specs() -> Vec<ToolSpecification> {
        vec![
            ToolSpecification::new(ToolKind::Quiz, "Reef Quiz", "Test yourself"),
            ToolSpecification::new(ToolKind::Chart, "Depth Chart", "Plot readings"),
            ToolSpecification::new(ToolKind::Quiz, "Kelp Quiz", "Round two"),
        ]
    }

    #[test]
    fn materializes_one_component_per_spec_in_order() {
        let author = WalletAddress::generate();
        let now = Utc::now();
        let tools = materialize_tools(specs(), &author, now);

        assert_eq!(tools.len(), 3);
        assert_eq!(
            tools.iter().map(|t| t.title.as_str()).collect::<Vec<_>>(),
            vec!["Reef Quiz", "Depth Chart", "Kelp Quiz"]
        );
    }

    #[test]
    fn batch_shares_timestamp_and_author_with_distinct_ids() {
        let author = WalletAddress::generate();
        let now = Utc::now();
        let tools = materialize_tools(specs(), &author, now);

        let ids: HashSet<_> = tools.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), tools.len());
        assert!(tools.iter().all(|t| t.added_at == now));
        assert!(tools.iter().all(|t| t.added_by == author));
    }

    #[test]
    fn empty_spec_list_materializes_nothing() {
        let tools = materialize_tools(vec![], &WalletAddress::generate(), Utc::now());
        assert!(tools.is_empty());
    }

    #[test]
    fn archetype_tools_are_titled_from_kind_words() {
        let author = WalletAddress::generate();
        let tools =
            materialize_archetype_tools(WorldArchetype::FrontierOutpost, &author, Utc::now());

        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].title, "Map Explorer");
        assert_eq!(tools[1].title, "Trade Post");
        assert!(tools.iter().all(|t| t.kind == ToolKind::ContentHub));
    }

    #[test]
    fn archetype_tool_config_records_world_and_tool() {
        let author = WalletAddress::generate();
        let tools = materialize_archetype_tools(WorldArchetype::EcoGarden, &author, Utc::now());

        let config = &tools[0].config;
        assert_eq!(
            config.get("worldType").and_then(|v| v.as_str()),
            Some("eco-garden")
        );
        assert_eq!(
            config.get("toolName").and_then(|v| v.as_str()),
            Some("todo-list")
        );
    }
}
