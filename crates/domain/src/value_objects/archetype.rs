//! World archetypes: statically defined thematic site templates.
//!
//! Each archetype carries a base value for valuation and a fixed ordered
//! tool list that gets materialized when a world site is created. The
//! catalog is read-only.

use crate::error::DomainError;
use crate::value_objects::ToolKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named world archetype, looked up by its hyphenated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorldArchetype {
    /// Settlement on the edge of the known map
    FrontierOutpost,
    /// Underwater research station
    OceanObservatory,
    /// Orbital flight school
    StarshipAcademy,
    /// Market street of a lost civilization
    AncientBazaar,
    /// Community garden ecosystem
    EcoGarden,
    /// Tinkerer's machine workshop
    RoboticsLab,
}

/// Static definition backing a [`WorldArchetype`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorldArchetypeDef {
    /// Display name
    pub name: &'static str,
    /// Emoji badge shown next to the name
    pub emoji: &'static str,
    /// One-sentence pitch
    pub description: &'static str,
    /// What the world teaches through play
    pub educational_goal: &'static str,
    /// Base economic value of a site built from this archetype
    pub base_value: i64,
    /// Ordered tool kinds materialized on creation
    pub tools: &'static [ToolKind],
}

const FRONTIER_OUTPOST: WorldArchetypeDef = WorldArchetypeDef {
    name: "Frontier Outpost",
    emoji: "🏕️",
    description: "A settlement on the edge of the known map where explorers barter supplies and chart new territory",
    educational_goal: "Practice economic reasoning and spatial thinking through exploration and trade",
    base_value: 2500,
    tools: &[ToolKind::MapExplorer, ToolKind::TradePost],
};

const OCEAN_OBSERVATORY: WorldArchetypeDef = WorldArchetypeDef {
    name: "Ocean Observatory",
    emoji: "🌊",
    description: "An underwater research station tracking reef life across the seasons",
    educational_goal: "Learn marine ecosystems through observation, cataloging, and data",
    base_value: 2200,
    tools: &[ToolKind::Gallery, ToolKind::Chart, ToolKind::Quiz],
};

const STARSHIP_ACADEMY: WorldArchetypeDef = WorldArchetypeDef {
    name: "Starship Academy",
    emoji: "🚀",
    description: "An orbital flight school where cadets plan missions and run launch drills",
    educational_goal: "Build estimation and planning skills through mission math and countdown practice",
    base_value: 2800,
    tools: &[ToolKind::Calculator, ToolKind::Timer, ToolKind::Quiz],
};

const ANCIENT_BAZAAR: WorldArchetypeDef = WorldArchetypeDef {
    name: "Ancient Bazaar",
    emoji: "🏺",
    description: "The market street of a lost civilization, stall by stall",
    educational_goal: "Discover history and material culture through artifacts and trade routes",
    base_value: 2000,
    tools: &[ToolKind::TradePost, ToolKind::Gallery, ToolKind::NoteBoard],
};

const ECO_GARDEN: WorldArchetypeDef = WorldArchetypeDef {
    name: "Eco Garden",
    emoji: "🌱",
    description: "A community garden where every bed is an experiment in balance",
    educational_goal: "Understand growth cycles and stewardship by planning, planting, and measuring",
    base_value: 1800,
    tools: &[ToolKind::TodoList, ToolKind::Chart, ToolKind::ContentHub],
};

const ROBOTICS_LAB: WorldArchetypeDef = WorldArchetypeDef {
    name: "Robotics Lab",
    emoji: "🤖",
    description: "A tinkerer's workshop full of half-built machines and schematics",
    educational_goal: "Learn systems thinking by wiring, testing, and documenting builds",
    base_value: 3000,
    tools: &[ToolKind::Calculator, ToolKind::SearchIndex, ToolKind::Chart],
};

impl WorldArchetype {
    /// All archetypes for catalogs and pickers
    pub fn all() -> &'static [WorldArchetype] {
        &[
            WorldArchetype::FrontierOutpost,
            WorldArchetype::OceanObservatory,
            WorldArchetype::StarshipAcademy,
            WorldArchetype::AncientBazaar,
            WorldArchetype::EcoGarden,
            WorldArchetype::RoboticsLab,
        ]
    }

    /// Hyphenated key, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            WorldArchetype::FrontierOutpost => "frontier-outpost",
            WorldArchetype::OceanObservatory => "ocean-observatory",
            WorldArchetype::StarshipAcademy => "starship-academy",
            WorldArchetype::AncientBazaar => "ancient-bazaar",
            WorldArchetype::EcoGarden => "eco-garden",
            WorldArchetype::RoboticsLab => "robotics-lab",
        }
    }

    /// Static definition for this archetype
    pub fn definition(&self) -> &'static WorldArchetypeDef {
        match self {
            WorldArchetype::FrontierOutpost => &FRONTIER_OUTPOST,
            WorldArchetype::OceanObservatory => &OCEAN_OBSERVATORY,
            WorldArchetype::StarshipAcademy => &STARSHIP_ACADEMY,
            WorldArchetype::AncientBazaar => &ANCIENT_BAZAAR,
            WorldArchetype::EcoGarden => &ECO_GARDEN,
            WorldArchetype::RoboticsLab => &ROBOTICS_LAB,
        }
    }
}

impl fmt::Display for WorldArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for WorldArchetype {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "frontier-outpost" => Ok(WorldArchetype::FrontierOutpost),
            "ocean-observatory" => Ok(WorldArchetype::OceanObservatory),
            "starship-academy" => Ok(WorldArchetype::StarshipAcademy),
            "ancient-bazaar" => Ok(WorldArchetype::AncientBazaar),
            "eco-garden" => Ok(WorldArchetype::EcoGarden),
            "robotics-lab" => Ok(WorldArchetype::RoboticsLab),
            _ => Err(DomainError::parse(format!(
                "Unknown world archetype: '{}'. Valid values: frontier-outpost, \
                ocean-observatory, starship-academy, ancient-bazaar, eco-garden, robotics-lab",
                s
            ))),
        }
    }
}
