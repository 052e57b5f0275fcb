//! Visual theme selection for a website.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme applied to a generated website.
///
/// Rendering (CSS, layout) lives with the UI layer; the domain only records
/// the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebsiteTheme {
    /// Deep space theme with vibrant accents (default)
    #[default]
    Cosmic,
    /// Clean and simple with focus on content
    Minimal,
    /// Magazine-style with elegant typography
    Editorial,
    /// Code-inspired with monospace fonts
    Technical,
    /// Bold colors and energetic design
    Vibrant,
}

impl WebsiteTheme {
    /// All themes for pickers
    pub fn all() -> &'static [WebsiteTheme] {
        &[
            WebsiteTheme::Cosmic,
            WebsiteTheme::Minimal,
            WebsiteTheme::Editorial,
            WebsiteTheme::Technical,
            WebsiteTheme::Vibrant,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            WebsiteTheme::Cosmic => "Cosmic",
            WebsiteTheme::Minimal => "Minimal",
            WebsiteTheme::Editorial => "Editorial",
            WebsiteTheme::Technical => "Technical",
            WebsiteTheme::Vibrant => "Vibrant",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WebsiteTheme::Cosmic => "Deep space theme with vibrant accents",
            WebsiteTheme::Minimal => "Clean and simple with focus on content",
            WebsiteTheme::Editorial => "Magazine-style with elegant typography",
            WebsiteTheme::Technical => "Code-inspired with monospace fonts",
            WebsiteTheme::Vibrant => "Bold colors and energetic design",
        }
    }
}

impl fmt::Display for WebsiteTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

impl FromStr for WebsiteTheme {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cosmic" => Ok(WebsiteTheme::Cosmic),
            "minimal" => Ok(WebsiteTheme::Minimal),
            "editorial" => Ok(WebsiteTheme::Editorial),
            "technical" => Ok(WebsiteTheme::Technical),
            "vibrant" => Ok(WebsiteTheme::Vibrant),
            _ => Err(DomainError::parse(format!(
                "Unknown theme: '{}'. Valid values: cosmic, minimal, editorial, technical, vibrant",
                s
            ))),
        }
    }
}
