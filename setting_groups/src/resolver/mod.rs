//! Flattening of group trees into ordered setting lists.
//!
//! Two traversals are offered. [`collect_all`] walks every group in stored
//! order and ignores visibility. [`collect_viewable`] emits a group's own
//! settings first, then visits the subgroups the viewer may see, highest
//! priority first (ties keep their stored order).
//!
//! Both walks track the groups on the current descent path. Entering a group
//! that is already on the path fails with
//! [`GroupError::CyclicGroup`](crate::GroupError::CyclicGroup); the same
//! group reached through two disjoint branches is expanded once per branch.
//!
//! Traversal recurses once per nesting level and uses the caller's stack. A
//! chain nested tens of thousands of groups deep can overflow it; resolve
//! such trees on a thread spawned with a larger stack.

use std::cmp::Reverse;

use tracing::{debug, trace};

use crate::group::{Group, Snapshot, UNNAMED_GROUP};
use crate::{GroupResult, ResolverConfig};

mod path;

use path::{ActivePath, PathPool};

/// Collect every setting reachable from `root`, ignoring visibility.
///
/// Settings are emitted depth-first in pre-order: the root's own settings,
/// then each subgroup's expansion in stored order. Recursion depth equals
/// the nesting depth of the tree.
///
/// # Errors
///
/// Returns [`GroupError::CyclicGroup`](crate::GroupError::CyclicGroup) when
/// a group repeats along one descent path. No partial result is produced.
pub fn collect_all<S: Clone, V>(root: &Group<S, V>) -> GroupResult<Vec<S>> {
    let mut path = ActivePath::default();
    resolve_all(root, &mut path)
}

/// Collect the settings `viewer` may see, in priority order.
///
/// A `None` viewer yields an empty list without visiting any group.
/// Recursion depth equals the nesting depth of the visible tree.
///
/// # Errors
///
/// Returns [`GroupError::CyclicGroup`](crate::GroupError::CyclicGroup) when
/// a visible group repeats along one descent path. No partial result is
/// produced.
///
/// # Examples
///
/// ```
/// use setting_groups::{Group, collect_viewable};
///
/// let root: Group<&str, ()> = Group::new(vec!["s1"]).with_subgroups(vec![
///     Group::new(vec!["s2"]).with_priority(1),
///     Group::new(vec!["s3"]).with_priority(2),
/// ]);
/// assert_eq!(collect_viewable(&root, Some(&()))?, vec!["s1", "s3", "s2"]);
/// assert!(collect_viewable(&root, None)?.is_empty());
/// # Ok::<_, setting_groups::GroupError>(())
/// ```
pub fn collect_viewable<S: Clone, V>(
    root: &Group<S, V>,
    viewer: Option<&V>,
) -> GroupResult<Vec<S>> {
    let Some(present) = viewer else {
        return Ok(Vec::new());
    };
    let mut path = ActivePath::default();
    resolve_viewable(root, present, &mut path)
}

/// Resolver that reuses its active-path buffers between calls.
///
/// Buffers are handed out empty and cleared when a call finishes, including
/// calls that fail on a cycle. The pool sits behind a mutex so one resolver
/// may be shared between threads.
#[derive(Debug)]
pub struct SettingGroupResolver {
    pool: PathPool,
}

impl SettingGroupResolver {
    /// Create a resolver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&ResolverConfig::default())
    }

    /// Create a resolver sized by `config`.
    #[must_use]
    pub fn with_config(config: &ResolverConfig) -> Self {
        Self {
            pool: PathPool::new(config.path_pool_capacity, config.path_capacity_hint),
        }
    }

    /// Pooled counterpart of [`collect_all`].
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::CyclicGroup`](crate::GroupError::CyclicGroup)
    /// when a group repeats along one descent path.
    pub fn collect_all<S: Clone, V>(&self, root: &Group<S, V>) -> GroupResult<Vec<S>> {
        let mut lease = self.pool.acquire();
        resolve_all(root, lease.path())
    }

    /// Pooled counterpart of [`collect_viewable`].
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::CyclicGroup`](crate::GroupError::CyclicGroup)
    /// when a visible group repeats along one descent path.
    pub fn collect_viewable<S: Clone, V>(
        &self,
        root: &Group<S, V>,
        viewer: Option<&V>,
    ) -> GroupResult<Vec<S>> {
        let Some(present) = viewer else {
            return Ok(Vec::new());
        };
        let mut lease = self.pool.acquire();
        resolve_viewable(root, present, lease.path())
    }

    /// Number of idle path buffers currently retained.
    #[must_use]
    pub fn pooled_paths(&self) -> usize {
        self.pool.idle()
    }
}

impl Default for SettingGroupResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_all<S: Clone, V>(root: &Group<S, V>, path: &mut ActivePath) -> GroupResult<Vec<S>> {
    let mut out = Vec::new();
    expand_all(root.snapshot(), path, &mut out)?;
    debug!(
        operation = "collect_all",
        settings = out.len(),
        "resolved setting group"
    );
    Ok(out)
}

fn expand_all<S: Clone, V>(
    node: Snapshot<S, V>,
    path: &mut ActivePath,
    out: &mut Vec<S>,
) -> GroupResult<()> {
    let Snapshot {
        id,
        label,
        settings,
        subgroups,
        ..
    } = node;
    path.descend(id, label.as_ref(), |inner| {
        trace!(
            group = label.as_deref().unwrap_or(UNNAMED_GROUP),
            settings = settings.len(),
            "expanding group"
        );
        out.extend(settings);
        for child in &subgroups {
            expand_all(child.snapshot(), inner, out)?;
        }
        Ok(())
    })
}

fn resolve_viewable<S: Clone, V>(
    root: &Group<S, V>,
    viewer: &V,
    path: &mut ActivePath,
) -> GroupResult<Vec<S>> {
    let node = root.snapshot();
    // The root's predicate only governs its own settings; its subgroups are
    // still filtered individually.
    let is_root_visible = node.is_visible_to(viewer);
    let mut out = Vec::new();
    expand_viewable(node, is_root_visible, viewer, path, &mut out)?;
    debug!(
        operation = "collect_viewable",
        settings = out.len(),
        "resolved setting group"
    );
    Ok(out)
}

fn expand_viewable<S: Clone, V>(
    node: Snapshot<S, V>,
    include_settings: bool,
    viewer: &V,
    path: &mut ActivePath,
    out: &mut Vec<S>,
) -> GroupResult<()> {
    let Snapshot {
        id,
        label,
        settings,
        subgroups,
        ..
    } = node;
    path.descend(id, label.as_ref(), |inner| {
        trace!(
            group = label.as_deref().unwrap_or(UNNAMED_GROUP),
            include_settings,
            "expanding visible group"
        );
        if include_settings {
            out.extend(settings);
        }
        // Hidden subgroups are dropped before their settings are copied.
        let mut visible: Vec<(i32, &Group<S, V>)> = subgroups
            .iter()
            .filter_map(|child| {
                let (priority, visibility) = child.ordering();
                visibility
                    .as_ref()
                    .is_none_or(|predicate| predicate.allows(viewer))
                    .then_some((priority, child))
            })
            .collect();
        visible.sort_by_key(|&(priority, _)| Reverse(priority));
        for (_, child) in visible {
            expand_viewable(child.snapshot(), true, viewer, inner, out)?;
        }
        Ok(())
    })
}
