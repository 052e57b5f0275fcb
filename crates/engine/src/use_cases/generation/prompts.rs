//! Configurable prompt templates for the generation scenarios.
//!
//! Resolution priority: environment variable override > default. Overrides
//! use `SITEFORGE_PROMPT_` plus the upper-cased key with separators folded
//! to underscores.

/// All prompt template keys as constants.
pub mod keys {
    /// Homepage generation from a free-text query.
    pub const SITE_GENERATION: &str = "generation.site";
    /// Themed-world generation from an archetype definition.
    pub const WORLD_GENERATION: &str = "generation.world";
    /// Page generation within an existing website.
    pub const PAGE_GENERATION: &str = "generation.page";
}

/// Default values for all prompt templates.
pub mod defaults {
    /// Homepage generation prompt.
    pub const SITE_GENERATION: &str = r###"You are creating a comprehensive, educational website homepage based on this user query: {query}

Generate a complete website with:
1. A clear, engaging title (5-10 words)
2. A concise description/tagline (15-25 words)
3. Rich, informative content organized into sections with headings

The content should be:
- Educational and research-backed
- Well-structured with clear sections
- Human-readable and engaging
- Practical and actionable
- NOT just a description, but actual valuable information

Return ONLY valid JSON in this exact format:
{
  "title": "Website Title Here",
  "description": "Brief compelling description here",
  "content": "## Section 1\n\nParagraph content...\n\n## Section 2\n\nMore content..."
}"###;

    /// Themed-world generation prompt.
    pub const WORLD_GENERATION: &str = r###"You are creating an educational game-world website based on the "{name}" archetype.

World Details:
- Name: {name}
- Emoji: {emoji}
- Description: {description}
- Educational Goal: {educational_goal}
{slot_info}

Generate engaging content that:
1. Explains what this world teaches through play
2. Describes the game mechanics and interactions
3. Highlights how learning happens through discovery
4. Provides clear next steps for the user

Return ONLY valid JSON in this exact format:
{
  "title": "Engaging World Title (5-8 words)",
  "description": "Compelling tagline about learning through play (15-25 words)",
  "content": "## Welcome to [World]\n\nIntroduction...\n\n## How It Works\n\nMechanics...\n\n## What You'll Learn\n\nEducational outcomes...\n\n## Get Started\n\nNext steps..."
}"###;

    /// Page generation prompt.
    pub const PAGE_GENERATION: &str = r###"You are adding a new page to a website about {context}.

The user wants to add a page about: {page_query}

Generate a new page with:
1. A clear page title (3-8 words)
2. Rich, informative content organized with markdown headings and paragraphs

Return ONLY valid JSON in this exact format:
{
  "title": "Page Title Here",
  "content": "## Section\n\nContent here..."
}"###;
}

/// Get the hard-coded default for a template key.
pub fn get_default(key: &str) -> Option<&'static str> {
    match key {
        keys::SITE_GENERATION => Some(defaults::SITE_GENERATION),
        keys::WORLD_GENERATION => Some(defaults::WORLD_GENERATION),
        keys::PAGE_GENERATION => Some(defaults::PAGE_GENERATION),
        _ => None,
    }
}

/// Environment variable name carrying the override for a template key.
pub fn key_to_env_var(key: &str) -> String {
    let suffix: String = key
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("SITEFORGE_PROMPT_{}", suffix)
}

/// Resolve a template: environment override if set and non-empty, else the
/// default. Unknown keys resolve to `None`.
pub fn resolve(key: &str) -> Option<String> {
    resolve_with(key, |var| std::env::var(var).ok())
}

fn resolve_with(key: &str, env: impl Fn(&str) -> Option<String>) -> Option<String> {
    let default_value = get_default(key)?;

    if let Some(env_value) = env(&key_to_env_var(key)) {
        if !env_value.trim().is_empty() {
            return Some(env_value);
        }
    }

    Some(default_value.to_string())
}

pub(super) fn site_prompt(query: &str) -> String {
    resolve(keys::SITE_GENERATION)
        .unwrap_or_default()
        .replace("{query}", query)
}

pub(super) fn world_prompt(
    def: &siteforge_domain::WorldArchetypeDef,
    slot_combination: Option<&str>,
) -> String {
    let slot_info = slot_combination
        .filter(|s| !s.is_empty())
        .map(|s| format!("- Slot Combination: {}", s))
        .unwrap_or_default();

    resolve(keys::WORLD_GENERATION)
        .unwrap_or_default()
        .replace("{name}", def.name)
        .replace("{emoji}", def.emoji)
        .replace("{description}", def.description)
        .replace("{educational_goal}", def.educational_goal)
        .replace("{slot_info}", &slot_info)
}

pub(super) fn page_prompt(context: &str, page_query: &str) -> String {
    resolve(keys::PAGE_GENERATION)
        .unwrap_or_default()
        .replace("{context}", context)
        .replace("{page_query}", page_query)
}
