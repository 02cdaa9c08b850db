//! Shared fixtures for the behaviour suite.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd::Slot;
use setting_groups::{Group, GroupResult};
use test_helpers::groups::Rank;

/// Group type built by the steps; settings come from the feature text.
pub type StepGroup = Group<String, Rank>;

/// State shared between the steps of one scenario.
#[derive(Default)]
pub struct ResolutionState {
    /// Group the scenario resolves.
    pub root: Slot<StepGroup>,
    /// Subgroups attached to the root, in declaration order.
    pub subgroups: RefCell<Vec<StepGroup>>,
    /// Result of the most recent resolution.
    pub outcome: Slot<GroupResult<Vec<String>>>,
}

impl Drop for ResolutionState {
    // Scenarios may wire cycles; clearing the links releases the nodes.
    fn drop(&mut self) {
        for group in self.subgroups.get_mut().iter() {
            group.set_subgroups(Vec::new());
        }
    }
}

/// Creates an empty scenario state.
#[fixture]
pub fn resolution_state() -> ResolutionState {
    ResolutionState::default()
}
