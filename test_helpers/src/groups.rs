//! Builders for small group trees used throughout the test suites.
//!
//! Settings are string literals and viewers are numeric ranks, which keeps
//! assertions on resolved output readable.

use setting_groups::{Group, Visibility};

/// Setting type used by the fixtures.
pub type Setting = &'static str;

/// Viewer type used by the fixtures: a numeric rank.
pub type Rank = u8;

/// Group type produced by the fixtures.
pub type RankedGroup = Group<Setting, Rank>;

/// A labelled group holding `settings` at `priority`.
#[must_use]
pub fn labelled(label: &str, settings: &[Setting], priority: i32) -> RankedGroup {
    Group::new(settings.to_vec())
        .with_label(label)
        .with_priority(priority)
}

/// Predicate admitting viewers of at least `rank`.
#[must_use]
pub fn min_rank(rank: Rank) -> Visibility<Rank> {
    Visibility::new(move |viewer: &Rank| *viewer >= rank)
}

/// Predicate admitting nobody.
#[must_use]
pub fn hidden() -> Visibility<Rank> {
    Visibility::new(|_: &Rank| false)
}

/// Clears the subgroups of every group in `groups`.
///
/// Tests that wire cycles call this afterwards so the reference-counted
/// nodes are released.
pub fn break_cycles(groups: &[&RankedGroup]) {
    for group in groups {
        group.set_subgroups(Vec::new());
    }
}

/// Two groups referencing each other: `R -> C -> R`.
#[must_use]
pub fn two_cycle() -> (RankedGroup, RankedGroup) {
    let root = labelled("R", &["r"], 0);
    let child = labelled("C", &["c"], 0);
    root.add_subgroup(child.clone());
    child.add_subgroup(root.clone());
    (root, child)
}

/// A root with two branches that both contain the same leaf `D`.
#[must_use]
pub fn diamond() -> RankedGroup {
    let shared = labelled("D", &["d"], 0);
    labelled("R", &["r"], 0).with_subgroups(vec![
        labelled("left", &["left"], 0).with_subgroups(vec![shared.clone()]),
        labelled("right", &["right"], 0).with_subgroups(vec![shared]),
    ])
}
