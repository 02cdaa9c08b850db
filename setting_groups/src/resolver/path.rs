//! Active descent path and the pool of reusable path buffers.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::group::{GroupId, UNNAMED_GROUP};
use crate::{GroupError, GroupResult, MAX_PATH_CAPACITY_HINT};

/// Groups on the current root-to-node branch.
///
/// Membership answers "is this group already being expanded?" while the
/// ordered labels render the chain when a cycle is found. A group leaves the
/// path once its expansion finishes, so disjoint branches may share groups.
#[derive(Debug, Default)]
pub(crate) struct ActivePath {
    members: HashSet<GroupId>,
    labels: Vec<Option<Arc<str>>>,
}

impl ActivePath {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            members: HashSet::with_capacity(capacity),
            labels: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty() && self.labels.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.members.clear();
        self.labels.clear();
    }

    /// Run `operation` with `id` on the path.
    ///
    /// The group is removed again whether `operation` succeeds or fails.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::CyclicGroup`] when `id` is already on the path,
    /// otherwise whatever `operation` returns.
    pub(crate) fn descend<T, F>(
        &mut self,
        id: GroupId,
        label: Option<&Arc<str>>,
        operation: F,
    ) -> GroupResult<T>
    where
        F: FnOnce(&mut Self) -> GroupResult<T>,
    {
        if !self.members.insert(id) {
            let err = GroupError::cyclic(
                self.labels.iter().map(|entry| render_label(entry.as_ref())),
                render_label(label),
            );
            tracing::warn!(error = %err, "setting group cycle detected");
            return Err(err);
        }
        self.labels.push(label.cloned());
        let result = operation(self);
        self.members.remove(&id);
        self.labels.pop();
        result
    }
}

fn render_label(label: Option<&Arc<str>>) -> &str {
    label.map_or(UNNAMED_GROUP, |text| text.as_ref())
}

/// Bounded stock of cleared [`ActivePath`] buffers.
#[derive(Debug)]
pub(crate) struct PathPool {
    buffers: Mutex<Vec<ActivePath>>,
    capacity: usize,
    capacity_hint: usize,
}

impl PathPool {
    pub(crate) fn new(capacity: usize, capacity_hint: usize) -> Self {
        Self {
            buffers: Mutex::new(Vec::new()),
            capacity,
            capacity_hint: capacity_hint.min(MAX_PATH_CAPACITY_HINT),
        }
    }

    /// Take an empty path, reusing a pooled buffer when one is available.
    pub(crate) fn acquire(&self) -> PooledPath<'_> {
        let path = self
            .buffers
            .lock()
            .pop()
            .unwrap_or_else(|| ActivePath::with_capacity(self.capacity_hint));
        debug_assert!(path.is_empty(), "pooled path buffers must be cleared");
        PooledPath { pool: self, path }
    }

    pub(crate) fn idle(&self) -> usize {
        self.buffers.lock().len()
    }

    fn release(&self, mut path: ActivePath) {
        path.clear();
        let mut buffers = self.buffers.lock();
        if buffers.len() < self.capacity {
            buffers.push(path);
        }
    }
}

/// Lease on a pooled path; clears and returns the buffer on drop.
pub(crate) struct PooledPath<'pool> {
    pool: &'pool PathPool,
    path: ActivePath,
}

impl PooledPath<'_> {
    pub(crate) const fn path(&mut self) -> &mut ActivePath {
        &mut self.path
    }
}

impl Drop for PooledPath<'_> {
    fn drop(&mut self) {
        self.pool.release(std::mem::take(&mut self.path));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    fn labelled(label: &str) -> Group<u8, ()> {
        Group::new(Vec::new()).with_label(label)
    }

    #[test]
    fn descend_pops_after_success_and_failure() {
        let root = labelled("root");
        let label: Option<Arc<str>> = Some(Arc::from("root"));
        let mut path = ActivePath::default();

        let ok: GroupResult<()> = path.descend(root.id(), label.as_ref(), |_| Ok(()));
        assert!(ok.is_ok());
        assert!(path.is_empty());

        let failed: GroupResult<()> = path.descend(root.id(), label.as_ref(), |_| {
            Err(GroupError::MissingRoot { id: "x".into() })
        });
        assert!(failed.is_err());
        assert!(path.is_empty(), "failed descent must not leave entries");
    }

    #[test]
    fn nested_reentry_reports_chain() {
        let root = labelled("root");
        let child = labelled("child");
        let root_label: Option<Arc<str>> = Some(Arc::from("root"));
        let child_label: Option<Arc<str>> = Some(Arc::from("child"));
        let mut path = ActivePath::default();

        let result: GroupResult<()> = path.descend(root.id(), root_label.as_ref(), |inner| {
            inner.descend(child.id(), child_label.as_ref(), |deeper| {
                deeper.descend(root.id(), root_label.as_ref(), |_| Ok(()))
            })
        });
        match result {
            Err(GroupError::CyclicGroup { cycle }) => assert_eq!(cycle, "root -> child -> root"),
            other => panic!("expected CyclicGroup, got {other:?}"),
        }
        assert!(path.is_empty());
    }

    #[test]
    fn unlabelled_groups_render_placeholder() {
        let anonymous: Group<u8, ()> = Group::new(Vec::new());
        let mut path = ActivePath::default();
        let result: GroupResult<()> = path.descend(anonymous.id(), None, |inner| {
            inner.descend(anonymous.id(), None, |_| Ok(()))
        });
        match result {
            Err(GroupError::CyclicGroup { cycle }) => {
                assert_eq!(cycle, "<unnamed> -> <unnamed>");
            }
            other => panic!("expected CyclicGroup, got {other:?}"),
        }
    }

    #[test]
    fn pool_retains_at_most_capacity() {
        let pool = PathPool::new(1, 4);
        {
            let _first = pool.acquire();
            let _second = pool.acquire();
        }
        assert_eq!(pool.idle(), 1);
    }

    #[test]
    fn zero_capacity_pool_never_retains() {
        let pool = PathPool::new(0, 4);
        drop(pool.acquire());
        assert_eq!(pool.idle(), 0);
    }
}
