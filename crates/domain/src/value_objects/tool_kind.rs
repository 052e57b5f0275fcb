//! The closed enumeration of functional tool kinds.
//!
//! Valuation and diversity scoring both depend on this enumeration being
//! closed and stable. Intent classification may hand back kinds this build
//! has never heard of; serde folds those into `Unknown` instead of failing,
//! and `Unknown` carries a defined base value.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base value credited for a tool kind the value table doesn't recognize.
pub const UNKNOWN_TOOL_VALUE: i64 = 50;

/// Kind of a functional tool component embedded in a website or page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// Arithmetic and unit-conversion widget
    Calculator,
    /// Checkable task list
    TodoList,
    /// Countdown / stopwatch
    Timer,
    /// Free-form sticky notes
    NoteBoard,
    /// Multiple-choice quiz
    Quiz,
    /// Data visualization panel
    Chart,
    /// Image gallery
    Gallery,
    /// Full-text search over the site's pages
    SearchIndex,
    /// Visitor contact form
    ContactForm,
    /// Curated links and embedded resources
    ContentHub,
    /// Pannable map with discoverable markers
    MapExplorer,
    /// Barter and exchange board
    TradePost,
    /// Unrecognized kind (for forward compatibility)
    #[serde(other)]
    Unknown,
}

impl ToolKind {
    /// All recognized kinds for catalogs and dropdowns (excludes Unknown)
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Calculator,
            ToolKind::TodoList,
            ToolKind::Timer,
            ToolKind::NoteBoard,
            ToolKind::Quiz,
            ToolKind::Chart,
            ToolKind::Gallery,
            ToolKind::SearchIndex,
            ToolKind::ContactForm,
            ToolKind::ContentHub,
            ToolKind::MapExplorer,
            ToolKind::TradePost,
        ]
    }

    /// Hyphenated identifier, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::Calculator => "calculator",
            ToolKind::TodoList => "todo-list",
            ToolKind::Timer => "timer",
            ToolKind::NoteBoard => "note-board",
            ToolKind::Quiz => "quiz",
            ToolKind::Chart => "chart",
            ToolKind::Gallery => "gallery",
            ToolKind::SearchIndex => "search-index",
            ToolKind::ContactForm => "contact-form",
            ToolKind::ContentHub => "content-hub",
            ToolKind::MapExplorer => "map-explorer",
            ToolKind::TradePost => "trade-post",
            ToolKind::Unknown => "unknown",
        }
    }

    /// Human-readable title: each hyphenated word capitalized
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolKind::Calculator => "Calculator",
            ToolKind::TodoList => "Todo List",
            ToolKind::Timer => "Timer",
            ToolKind::NoteBoard => "Note Board",
            ToolKind::Quiz => "Quiz",
            ToolKind::Chart => "Chart",
            ToolKind::Gallery => "Gallery",
            ToolKind::SearchIndex => "Search Index",
            ToolKind::ContactForm => "Contact Form",
            ToolKind::ContentHub => "Content Hub",
            ToolKind::MapExplorer => "Map Explorer",
            ToolKind::TradePost => "Trade Post",
            ToolKind::Unknown => "Unknown",
        }
    }

    /// Flat per-kind value used by the valuation formula.
    ///
    /// Unrecognized kinds resolve to [`UNKNOWN_TOOL_VALUE`] rather than
    /// erroring; the valuation engine must stay total.
    pub fn base_value(&self) -> i64 {
        match self {
            ToolKind::Calculator => 150,
            ToolKind::TodoList => 120,
            ToolKind::Timer => 100,
            ToolKind::NoteBoard => 110,
            ToolKind::Quiz => 180,
            ToolKind::Chart => 200,
            ToolKind::Gallery => 130,
            ToolKind::SearchIndex => 220,
            ToolKind::ContactForm => 90,
            ToolKind::ContentHub => 160,
            ToolKind::MapExplorer => 250,
            ToolKind::TradePost => 240,
            ToolKind::Unknown => UNKNOWN_TOOL_VALUE,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ToolKind {
    type Err = DomainError;

    /// Parses a hyphenated kind identifier.
    ///
    /// Unlike serde deserialization (which folds unknown values into
    /// `Unknown` via `#[serde(other)]`), this returns an error for
    /// unrecognized inputs.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calculator" => Ok(ToolKind::Calculator),
            "todo-list" => Ok(ToolKind::TodoList),
            "timer" => Ok(ToolKind::Timer),
            "note-board" => Ok(ToolKind::NoteBoard),
            "quiz" => Ok(ToolKind::Quiz),
            "chart" => Ok(ToolKind::Chart),
            "gallery" => Ok(ToolKind::Gallery),
            "search-index" => Ok(ToolKind::SearchIndex),
            "contact-form" => Ok(ToolKind::ContactForm),
            "content-hub" => Ok(ToolKind::ContentHub),
            "map-explorer" => Ok(ToolKind::MapExplorer),
            "trade-post" => Ok(ToolKind::TradePost),
            "unknown" => Ok(ToolKind::Unknown),
            _ => Err(DomainError::parse(format!("Unknown tool kind: '{}'", s))),
        }
    }
}
