//! Registration of feature-owned root groups.
//!
//! Features register their root groups for as long as they are loaded.
//! Registered groups behave as sibling subgroups of an implicit registry root,
//! so resolution orders them by priority and filters each by its own
//! visibility, exactly as nested groups are treated.

use tracing::debug;

use crate::{Group, GroupResult, SettingGroupResolver};

const REGISTRY_LABEL: &str = "registry";

/// Collection of registered root groups sharing one pooled resolver.
///
/// # Examples
///
/// ```
/// use setting_groups::{Group, SettingsRegistry, Visibility};
///
/// let registry: SettingsRegistry<&str, bool> = SettingsRegistry::new();
/// registry.register(Group::new(vec!["volume"]));
/// registry.register(
///     Group::new(vec!["noclip"])
///         .with_priority(10)
///         .with_visibility(Visibility::new(|is_admin: &bool| *is_admin)),
/// );
///
/// assert_eq!(registry.resolve(Some(&true))?, vec!["noclip", "volume"]);
/// assert_eq!(registry.resolve(Some(&false))?, vec!["volume"]);
/// # Ok::<_, setting_groups::GroupError>(())
/// ```
#[derive(Debug)]
pub struct SettingsRegistry<S, V> {
    root: Group<S, V>,
    resolver: SettingGroupResolver,
}

impl<S, V> SettingsRegistry<S, V> {
    /// Create an empty registry with a default resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(SettingGroupResolver::new())
    }

    /// Create an empty registry resolving through `resolver`.
    #[must_use]
    pub fn with_resolver(resolver: SettingGroupResolver) -> Self {
        Self {
            root: Group::new(Vec::new()).with_label(REGISTRY_LABEL),
            resolver,
        }
    }

    /// Register `group`.
    ///
    /// Returns `false` when the same group is already registered.
    pub fn register(&self, group: Group<S, V>) -> bool {
        let added = self.root.add_subgroup_once(group);
        debug!(added, registered = self.len(), "register setting group");
        added
    }

    /// Remove `group` from the registry.
    ///
    /// Returns `true` when it was registered.
    pub fn unregister(&self, group: &Group<S, V>) -> bool {
        let removed = self.root.remove_subgroup(group);
        debug!(removed, registered = self.len(), "unregister setting group");
        removed
    }

    /// Returns `true` when `group` is registered.
    #[must_use]
    pub fn contains(&self, group: &Group<S, V>) -> bool {
        self.root
            .subgroups()
            .iter()
            .any(|registered| registered.ptr_eq(group))
    }

    /// Number of registered groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.root.subgroups().len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Handles to the registered groups in registration order.
    #[must_use]
    pub fn groups(&self) -> Vec<Group<S, V>> {
        self.root.subgroups()
    }
}

impl<S: Clone, V> SettingsRegistry<S, V> {
    /// Settings `viewer` may see across every registered group.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GroupError::CyclicGroup`] when a registered group
    /// contains a path cycle.
    pub fn resolve(&self, viewer: Option<&V>) -> GroupResult<Vec<S>> {
        self.resolver.collect_viewable(&self.root, viewer)
    }

    /// Every registered setting, ignoring visibility and priority.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GroupError::CyclicGroup`] when a registered group
    /// contains a path cycle.
    pub fn resolve_all(&self) -> GroupResult<Vec<S>> {
        self.resolver.collect_all(&self.root)
    }
}

impl<S, V> Default for SettingsRegistry<S, V> {
    fn default() -> Self {
        Self::new()
    }
}
