//! Valuation engine: website attributes -> economic value.
//!
//! Pure and total: no I/O, no memory of prior results, defined for every
//! website regardless of how its attributes are populated. Callers
//! recompute after any structural change; the value is never patched
//! incrementally.

use std::collections::HashSet;

use crate::Website;

/// Base value for a website with no world archetype.
pub const DEFAULT_BASE_VALUE: i64 = 1000;

/// Value contributed by each attached page.
pub const PAGE_VALUE: i64 = 100;

/// Weight applied to the uniqueness score.
pub const UNIQUENESS_WEIGHT: f64 = 100.0;

/// Diversity multiplier increment per distinct tool kind.
pub const DIVERSITY_INCREMENT: f64 = 0.1;

/// Upper bound on the active-build-time bonus, in value units.
pub const ACTIVE_BUILD_BONUS_CAP: f64 = 500.0;

const MS_PER_MINUTE: f64 = 60_000.0;

/// Compute a website's economic value from its current attributes.
///
/// The result is the floored arithmetic total. It is not clamped at zero:
/// a rarity multiplier far below zero produces a negative bonus large
/// enough to drive the total negative, and the engine reports that
/// arithmetic truth rather than deciding presentation policy for callers.
pub fn compute_value(website: &Website) -> i64 {
    let base_value = website
        .world_archetype
        .map(|archetype| archetype.definition().base_value)
        .unwrap_or(DEFAULT_BASE_VALUE) as f64;

    let rarity_bonus = base_value * (website.rarity_multiplier - 1.0);

    // Distinct kinds, not tool count: varied functionality beats duplicates.
    let tool_diversity_score = website
        .tools
        .iter()
        .map(|tool| tool.kind)
        .collect::<HashSet<_>>()
        .len();
    let diversity_multiplier = 1.0 + tool_diversity_score as f64 * DIVERSITY_INCREMENT;

    let page_value = (website.pages.len() as i64 * PAGE_VALUE) as f64;
    let tool_value: i64 = website.tools.iter().map(|tool| tool.kind.base_value()).sum();

    let uniqueness_bonus = website.uniqueness_score * UNIQUENESS_WEIGHT;

    let active_build_bonus =
        (website.active_build_time_ms as f64 / MS_PER_MINUTE).min(ACTIVE_BUILD_BONUS_CAP);

    let total = (base_value
        + page_value
        + tool_value as f64
        + uniqueness_bonus
        + rarity_bonus
        + active_build_bonus)
        * diversity_multiplier;

    total.floor() as i64
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        Page, ToolComponent, ToolKind, ToolSpecification, WalletAddress, WorldArchetype,
    };

    fn site() -> Website {
        Website::new(
            "Test Site",
            "A site",
            "## Test",
            WalletAddress::generate(),
            Utc::now(),
        )
    }

    fn tool(kind: ToolKind) -> ToolComponent {
        ToolComponent::materialize(
            ToolSpecification::new(kind, kind.display_name(), ""),
            WalletAddress::generate(),
            Utc::now(),
        )
    }

    fn page() -> Page {
        Page::new(
            "Page",
            "## Page",
            vec![],
            "query",
            WalletAddress::generate(),
            Utc::now(),
        )
    }

    #[test]
    fn baseline_site_value() {
        // base 1000 + uniqueness 1.0 * 100, diversity multiplier 1.0
        assert_eq!(compute_value(&site()), 1100);
    }

    #[test]
    fn archetype_overrides_base_value() {
        let themed = site().with_archetype(WorldArchetype::RoboticsLab);
        let base = WorldArchetype::RoboticsLab.definition().base_value;
        assert_eq!(compute_value(&themed), base + 100);
    }

    #[test]
    fn neutral_rarity_contributes_nothing() {
        let neutral = site().with_rarity_multiplier(1.0);
        assert_eq!(compute_value(&neutral), compute_value(&site()));
    }

    #[test]
    fn rarity_below_one_penalizes() {
        let common = site().with_rarity_multiplier(0.5);
        // rarity bonus = 1000 * -0.5
        assert_eq!(compute_value(&common), 600);
    }

    #[test]
    fn rarity_is_unclamped_below_zero() {
        let pathological = site().with_rarity_multiplier(-10.0);
        assert!(compute_value(&pathological) < 0);
    }

    #[test]
    fn value_grows_with_pages() {
        let mut sited = site();
        let before = compute_value(&sited);
        sited.add_page(page());
        let one = compute_value(&sited);
        sited.add_page(page());
        let two = compute_value(&sited);
        assert_eq!(one, before + PAGE_VALUE);
        assert_eq!(two, before + 2 * PAGE_VALUE);
    }

    #[test]
    fn value_grows_with_uniqueness() {
        let plain = compute_value(&site());
        let unique = compute_value(&site().with_uniqueness_score(3.0));
        assert!(unique > plain);
        assert_eq!(unique, plain + 200);
    }

    #[test]
    fn duplicate_tools_count_once_for_diversity() {
        let mut duplicated = site();
        duplicated.add_tool(tool(ToolKind::Chart));
        duplicated.add_tool(tool(ToolKind::Chart));

        let mut varied = site();
        varied.add_tool(tool(ToolKind::Chart));
        varied.add_tool(tool(ToolKind::Quiz));

        // Same tool count; the varied site gets a second diversity increment
        // and outvalues the duplicated one despite a lower raw tool sum.
        // duplicated: (1100 + 400) * 1.1 = 1650
        assert_eq!(compute_value(&duplicated), 1650);
        assert!(compute_value(&varied) > compute_value(&duplicated));
    }

    #[test]
    fn unknown_tool_kind_uses_default_value() {
        let mut sited = site();
        sited.add_tool(tool(ToolKind::Unknown));
        // (1100 + 50) * 1.1
        assert_eq!(compute_value(&sited), 1265);
    }

    #[test]
    fn active_build_bonus_is_clamped() {
        let mut fresh = site();
        fresh.active_build_time_ms = 0;
        assert_eq!(compute_value(&fresh), 1100);

        let mut five_hundred_minutes = site();
        five_hundred_minutes.active_build_time_ms = 30_000_000;
        assert_eq!(compute_value(&five_hundred_minutes), 1600);

        let mut thousand_minutes = site();
        thousand_minutes.active_build_time_ms = 60_000_000;
        assert_eq!(compute_value(&thousand_minutes), 1600);
    }

    #[test]
    fn recomputation_is_deterministic() {
        let mut sited = site().with_archetype(WorldArchetype::FrontierOutpost);
        sited.add_tool(tool(ToolKind::MapExplorer));
        sited.add_page(page());
        assert_eq!(compute_value(&sited), compute_value(&sited));
    }
}
