//! # Siteforge Engine
//!
//! The content-generation pipeline behind the Siteforge marketplace:
//! infrastructure ports and adapters for the generative backend and the
//! intent classifier, plus the generation facade that turns user intent
//! into website content and tool components.

pub mod infrastructure;
pub mod use_cases;

pub use use_cases::generation::{ContentGenerator, GeneratedPageContent, GeneratedSiteContent};
