//! Step definitions for the resolution scenarios.

use rstest_bdd_macros::{given, then, when};
use setting_groups::{Group, GroupError, collect_viewable};
use test_helpers::groups::min_rank;

use crate::fixtures::{ResolutionState, StepGroup};

fn step_group(setting: String, priority: i32) -> StepGroup {
    let label = setting.clone();
    Group::new(vec![setting])
        .with_label(label)
        .with_priority(priority)
}

#[given("a root group holding setting {setting}")]
fn root_group(resolution_state: &ResolutionState, setting: String) {
    resolution_state
        .root
        .set(Group::new(vec![setting]).with_label("root"));
}

#[given("a subgroup holding setting {setting} with priority {priority:i32}")]
fn subgroup(resolution_state: &ResolutionState, setting: String, priority: i32) {
    attach(resolution_state, step_group(setting, priority));
}

#[given(
    "a restricted subgroup holding setting {setting} with priority {priority:i32} for rank {rank:u8}"
)]
fn restricted_subgroup(
    resolution_state: &ResolutionState,
    setting: String,
    priority: i32,
    rank: u8,
) {
    let group = step_group(setting, priority).with_visibility(min_rank(rank));
    attach(resolution_state, group);
}

#[given("the last subgroup contains the root group")]
fn last_contains_root(resolution_state: &ResolutionState) {
    let root = resolution_state
        .root
        .with_ref(Clone::clone)
        .expect("a root group must be defined first");
    let subgroups = resolution_state.subgroups.borrow();
    let last = subgroups.last().expect("a subgroup must be defined first");
    last.add_subgroup(root);
}

fn attach(resolution_state: &ResolutionState, group: StepGroup) {
    resolution_state
        .root
        .with_ref(|root| root.add_subgroup(group.clone()))
        .expect("a root group must be defined first");
    resolution_state.subgroups.borrow_mut().push(group);
}

#[when("the settings are resolved for a viewer of rank {rank:u8}")]
fn resolve_for_rank(resolution_state: &ResolutionState, rank: u8) {
    let outcome = resolution_state
        .root
        .with_ref(|root| collect_viewable(root, Some(&rank)))
        .expect("a root group must be defined first");
    resolution_state.outcome.set(outcome);
}

#[when("the settings are resolved for an absent viewer")]
fn resolve_for_absent(resolution_state: &ResolutionState) {
    let outcome = resolution_state
        .root
        .with_ref(|root| collect_viewable(root, None))
        .expect("a root group must be defined first");
    resolution_state.outcome.set(outcome);
}

#[then("the resolved settings are {expected}")]
fn resolved_settings(resolution_state: &ResolutionState, expected: String) {
    let actual = resolution_state
        .outcome
        .with_ref(|outcome| outcome.as_ref().map(|settings| settings.join(",")).ok())
        .expect("settings must have been resolved")
        .expect("resolution must succeed");
    assert_eq!(actual, expected);
}

#[then("no settings are resolved")]
fn nothing_resolved(resolution_state: &ResolutionState) {
    let is_empty = resolution_state
        .outcome
        .with_ref(|outcome| matches!(outcome, Ok(settings) if settings.is_empty()))
        .expect("settings must have been resolved");
    assert!(is_empty, "absent viewer must see nothing");
}

#[then("resolution fails with a cyclic group error")]
fn resolution_fails(resolution_state: &ResolutionState) {
    let is_cycle = resolution_state
        .outcome
        .with_ref(|outcome| outcome.as_ref().is_err_and(GroupError::is_cycle))
        .expect("settings must have been resolved");
    assert!(is_cycle, "expected a cyclic group error");
}
