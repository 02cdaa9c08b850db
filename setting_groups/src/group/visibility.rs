//! Viewer predicates attached to groups.

use std::fmt;
use std::sync::Arc;

type Predicate<V> = dyn Fn(&V) -> bool + Send + Sync;

/// Shared predicate deciding whether a viewer may see a group.
///
/// Cloning is cheap; clones share the same closure.
///
/// # Examples
///
/// ```
/// use setting_groups::Visibility;
///
/// let staff_only = Visibility::new(|rank: &u8| *rank >= 3);
/// assert!(staff_only.allows(&4));
/// assert!(!staff_only.allows(&1));
/// ```
pub struct Visibility<V> {
    predicate: Arc<Predicate<V>>,
}

impl<V> Visibility<V> {
    /// Wrap `predicate`.
    #[must_use]
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate for `viewer`.
    #[must_use]
    pub fn allows(&self, viewer: &V) -> bool {
        (self.predicate)(viewer)
    }
}

impl<V> Clone for Visibility<V> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<V> fmt::Debug for Visibility<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visibility")
            .field("predicate", &"<closure>")
            .finish()
    }
}
