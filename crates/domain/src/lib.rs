//! # Siteforge Domain
//!
//! Core domain types for the Siteforge marketplace: website artifacts,
//! pages, tool components, the world-archetype catalog, and the valuation
//! engine. Pure data and pure functions; no I/O, no async.

pub mod entities;
pub mod error;
pub mod format;
pub mod ids;
pub mod valuation;
pub mod value_objects;

pub use entities::{Page, ToolComponent, ToolConfig, ToolSpecification, Website};

pub use error::DomainError;

pub use format::{format_relative_date, format_value, format_wallet_address};

pub use ids::{
    PageId, TokenId, ToolComponentId, TransactionId, WalletAddress, WebsiteId,
};

pub use valuation::{
    compute_value, ACTIVE_BUILD_BONUS_CAP, DEFAULT_BASE_VALUE, DIVERSITY_INCREMENT, PAGE_VALUE,
    UNIQUENESS_WEIGHT,
};

pub use value_objects::{
    ToolKind, WebsiteTheme, WorldArchetype, WorldArchetypeDef, UNKNOWN_TOOL_VALUE,
};
