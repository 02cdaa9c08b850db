//! Unit tests for group handles and live reconfiguration.

use rstest::{fixture, rstest};

use super::{Group, Visibility, group_of, group_of_all};

type TestGroup = Group<&'static str, u8>;

#[fixture]
fn leaf() -> TestGroup {
    Group::new(vec!["a", "b"]).with_label("leaf")
}

#[rstest]
fn new_group_uses_defaults() {
    let group: TestGroup = Group::new(vec!["x"]);
    assert_eq!(group.priority(), 0);
    assert!(!group.has_visibility());
    assert!(group.subgroups().is_empty());
    assert_eq!(group.label(), None);
    assert_eq!(group.settings(), vec!["x"]);
}

#[rstest]
fn clones_share_identity(leaf: TestGroup) {
    let other = leaf.clone();
    assert!(leaf.ptr_eq(&other));
    assert_eq!(leaf.id(), other.id());

    other.set_priority(7);
    assert_eq!(leaf.priority(), 7, "mutation through one handle is visible to all");
}

#[rstest]
fn equal_content_is_not_identity(leaf: TestGroup) {
    let twin: TestGroup = Group::new(vec!["a", "b"]).with_label("leaf");
    assert!(!leaf.ptr_eq(&twin));
    assert_ne!(leaf.id(), twin.id());
}

#[rstest]
fn convenience_constructors_wrap_settings() {
    let single: TestGroup = group_of("only");
    assert_eq!(single.settings(), vec!["only"]);
    assert_eq!(single.priority(), 0);

    let many: TestGroup = group_of_all(["one", "two", "three"]);
    assert_eq!(many.settings(), vec!["one", "two", "three"]);
    assert!(many.subgroups().is_empty());

    let converted: TestGroup = vec!["v"].into();
    assert_eq!(converted.settings(), vec!["v"]);
}

#[rstest]
fn setters_reconfigure_live(leaf: TestGroup) {
    leaf.push_setting("c");
    assert_eq!(leaf.settings(), vec!["a", "b", "c"]);

    leaf.set_settings(vec!["z"]);
    assert_eq!(leaf.settings_len(), 1);

    leaf.set_label("renamed");
    assert_eq!(leaf.label().as_deref(), Some("renamed"));
}

#[rstest]
fn visibility_is_evaluated_per_node(leaf: TestGroup) {
    assert!(leaf.is_visible_to(&0), "no predicate admits everyone");

    leaf.set_visibility(Visibility::new(|level: &u8| *level >= 5));
    assert!(leaf.has_visibility());
    assert!(!leaf.is_visible_to(&1));
    assert!(leaf.is_visible_to(&5));

    leaf.clear_visibility();
    assert!(leaf.is_visible_to(&1));
}

#[rstest]
fn subgroups_are_added_and_removed_by_identity(leaf: TestGroup) {
    let root: TestGroup = Group::new(Vec::new());
    let twin: TestGroup = Group::new(vec!["a", "b"]);
    root.add_subgroup(leaf.clone());
    root.add_subgroup(twin.clone());
    root.add_subgroup(leaf.clone());
    assert_eq!(root.subgroups().len(), 3);

    assert!(root.remove_subgroup(&leaf));
    let remaining = root.subgroups();
    assert_eq!(remaining.len(), 1);
    assert!(remaining.iter().all(|child| child.ptr_eq(&twin)));
    assert!(!root.remove_subgroup(&leaf), "second removal finds nothing");
}

#[rstest]
fn add_subgroup_once_rejects_existing_child(leaf: TestGroup) {
    let root: TestGroup = Group::new(Vec::new());
    assert!(root.add_subgroup_once(leaf.clone()));
    assert!(!root.add_subgroup_once(leaf));
    assert_eq!(root.subgroups().len(), 1);
}

#[rstest]
fn debug_output_does_not_recurse_into_cycles() {
    let root: TestGroup = Group::new(vec!["r"]).with_label("root");
    let child: TestGroup = Group::new(vec!["c"]).with_label("child");
    root.add_subgroup(child.clone());
    child.add_subgroup(root.clone());

    let rendered = format!("{root:?}");
    assert!(rendered.contains("\"root\""), "label missing: {rendered}");
    assert!(rendered.contains("subgroups: 1"), "count missing: {rendered}");

    child.set_subgroups(Vec::new());
}
