//! Shared group handles and their live-reconfiguration API.
//!
//! A [`Group`] is a reference-counted handle: cloning it yields another
//! handle to the *same* node, which is how one group is placed under several
//! parents. Construction uses the `with_*` builder methods; later changes go
//! through the explicit `set_*` methods.
//!
//! Each node sits behind a [`parking_lot::RwLock`]. The resolver reads a
//! short snapshot of every node it visits and releases the lock before
//! descending, so reconfiguring a group while another thread resolves it is
//! memory safe. Such a traversal observes each node at its own instant, so
//! callers needing a consistent view of the whole tree must serialize their
//! own mutations.
//!
//! Handles forming a cycle keep each other alive. Break the cycle with
//! [`Group::remove_subgroup`] or [`Group::set_subgroups`] to release them.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

mod visibility;

pub use visibility::Visibility;

/// Label rendered for groups built without one.
pub(crate) const UNNAMED_GROUP: &str = "<unnamed>";

/// Identity of a group node, shared by every handle to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

struct GroupState<S, V> {
    settings: Vec<S>,
    priority: i32,
    visibility: Option<Visibility<V>>,
    subgroups: Vec<Group<S, V>>,
    label: Option<Arc<str>>,
}

/// A node aggregating leaf settings and ordered child groups.
///
/// `S` is the opaque leaf setting and `V` the viewer handed to visibility
/// predicates.
pub struct Group<S, V> {
    node: Arc<RwLock<GroupState<S, V>>>,
}

/// Point-in-time copy of a node taken by the resolver.
pub(crate) struct Snapshot<S, V> {
    pub(crate) id: GroupId,
    pub(crate) label: Option<Arc<str>>,
    pub(crate) settings: Vec<S>,
    pub(crate) visibility: Option<Visibility<V>>,
    pub(crate) subgroups: Vec<Group<S, V>>,
}

impl<S, V> Snapshot<S, V> {
    /// A missing predicate admits every viewer.
    pub(crate) fn is_visible_to(&self, viewer: &V) -> bool {
        self.visibility
            .as_ref()
            .is_none_or(|visibility| visibility.allows(viewer))
    }
}

impl<S, V> Group<S, V> {
    /// Create a group holding `settings` with priority 0, no visibility
    /// predicate and no subgroups.
    #[must_use]
    pub fn new(settings: Vec<S>) -> Self {
        Self {
            node: Arc::new(RwLock::new(GroupState {
                settings,
                priority: 0,
                visibility: None,
                subgroups: Vec::new(),
                label: None,
            })),
        }
    }

    /// Set the sibling ordering priority; higher values sort first.
    #[must_use]
    pub fn with_priority(self, priority: i32) -> Self {
        self.set_priority(priority);
        self
    }

    /// Restrict the group to viewers accepted by `visibility`.
    #[must_use]
    pub fn with_visibility(self, visibility: Visibility<V>) -> Self {
        self.set_visibility(visibility);
        self
    }

    /// Replace the child groups.
    #[must_use]
    pub fn with_subgroups(self, subgroups: Vec<Self>) -> Self {
        self.set_subgroups(subgroups);
        self
    }

    /// Attach a diagnostic label used when reporting cycles.
    #[must_use]
    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Identity shared by every handle to this node.
    #[must_use]
    pub fn id(&self) -> GroupId {
        GroupId(Arc::as_ptr(&self.node).addr())
    }

    /// Returns `true` when both handles refer to the same node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Current sibling ordering priority.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.node.read().priority
    }

    /// Diagnostic label, if one was set.
    #[must_use]
    pub fn label(&self) -> Option<String> {
        self.node.read().label.as_deref().map(str::to_owned)
    }

    /// Returns `true` when a visibility predicate is installed.
    #[must_use]
    pub fn has_visibility(&self) -> bool {
        self.node.read().visibility.is_some()
    }

    /// Evaluate this group's own predicate for `viewer`.
    ///
    /// Ancestors are not consulted.
    #[must_use]
    pub fn is_visible_to(&self, viewer: &V) -> bool {
        let visibility = self.node.read().visibility.clone();
        visibility.is_none_or(|predicate| predicate.allows(viewer))
    }

    /// Handles to the direct child groups in stored order.
    #[must_use]
    pub fn subgroups(&self) -> Vec<Self> {
        self.node.read().subgroups.clone()
    }

    /// Number of direct settings.
    #[must_use]
    pub fn settings_len(&self) -> usize {
        self.node.read().settings.len()
    }

    /// Replace the direct settings.
    pub fn set_settings(&self, settings: Vec<S>) {
        self.node.write().settings = settings;
    }

    /// Append one direct setting.
    pub fn push_setting(&self, setting: S) {
        self.node.write().settings.push(setting);
    }

    /// Change the sibling ordering priority.
    pub fn set_priority(&self, priority: i32) {
        self.node.write().priority = priority;
    }

    /// Install or replace the visibility predicate.
    pub fn set_visibility(&self, visibility: Visibility<V>) {
        self.node.write().visibility = Some(visibility);
    }

    /// Remove the visibility predicate so every viewer sees the group.
    pub fn clear_visibility(&self) {
        self.node.write().visibility = None;
    }

    /// Replace the child groups.
    pub fn set_subgroups(&self, subgroups: Vec<Self>) {
        self.node.write().subgroups = subgroups;
    }

    /// Append a child group.
    pub fn add_subgroup(&self, subgroup: Self) {
        self.node.write().subgroups.push(subgroup);
    }

    /// Append `subgroup` unless it is already a direct child.
    ///
    /// Returns `true` when the group was added.
    pub(crate) fn add_subgroup_once(&self, subgroup: Self) -> bool {
        let mut state = self.node.write();
        if state.subgroups.iter().any(|child| child.ptr_eq(&subgroup)) {
            return false;
        }
        state.subgroups.push(subgroup);
        true
    }

    /// Remove every direct child that is `subgroup`.
    ///
    /// Returns `true` when at least one child was removed.
    pub fn remove_subgroup(&self, subgroup: &Self) -> bool {
        let mut state = self.node.write();
        let before = state.subgroups.len();
        state.subgroups.retain(|child| !child.ptr_eq(subgroup));
        state.subgroups.len() != before
    }

    /// Replace the diagnostic label.
    pub fn set_label(&self, label: impl Into<String>) {
        self.node.write().label = Some(Arc::from(label.into()));
    }
}

impl<S: Clone, V> Group<S, V> {
    /// Copy of the direct settings in stored order.
    #[must_use]
    pub fn settings(&self) -> Vec<S> {
        self.node.read().settings.clone()
    }

    /// Priority and predicate, read without copying settings.
    pub(crate) fn ordering(&self) -> (i32, Option<Visibility<V>>) {
        let state = self.node.read();
        (state.priority, state.visibility.clone())
    }

    pub(crate) fn snapshot(&self) -> Snapshot<S, V> {
        let state = self.node.read();
        Snapshot {
            id: self.id(),
            label: state.label.clone(),
            settings: state.settings.clone(),
            visibility: state.visibility.clone(),
            subgroups: state.subgroups.clone(),
        }
    }
}

impl<S, V> Clone for Group<S, V> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<S, V> From<Vec<S>> for Group<S, V> {
    fn from(settings: Vec<S>) -> Self {
        Self::new(settings)
    }
}

impl<S, V> fmt::Debug for Group<S, V> {
    // Subgroups are summarised by count; recursing would not terminate on
    // cyclic configurations.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.node.read();
        f.debug_struct("Group")
            .field("label", &state.label.as_deref().unwrap_or(UNNAMED_GROUP))
            .field("priority", &state.priority)
            .field("settings", &state.settings.len())
            .field("visibility", &state.visibility.is_some())
            .field("subgroups", &state.subgroups.len())
            .finish()
    }
}

/// Wrap a single setting in a default group.
///
/// # Examples
///
/// ```
/// use setting_groups::{collect_all, group_of};
///
/// let group = group_of::<_, ()>("volume");
/// assert_eq!(collect_all(&group)?, vec!["volume"]);
/// # Ok::<_, setting_groups::GroupError>(())
/// ```
#[must_use]
pub fn group_of<S, V>(setting: S) -> Group<S, V> {
    Group::new(vec![setting])
}

/// Wrap an ordered sequence of settings in a default group.
#[must_use]
pub fn group_of_all<S, V, I>(settings: I) -> Group<S, V>
where
    I: IntoIterator<Item = S>,
{
    Group::new(settings.into_iter().collect())
}

#[cfg(test)]
mod tests;
