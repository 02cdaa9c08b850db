//! Role-based viewers for layout groups.

use std::collections::BTreeSet;

use crate::Visibility;

/// A viewer identified by the roles it holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleViewer {
    roles: BTreeSet<String>,
}

impl RoleViewer {
    /// Create a viewer holding `roles`.
    #[must_use]
    pub fn new<I, R>(roles: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` when the viewer holds `role`.
    #[must_use]
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Roles held by the viewer in sorted order.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    /// Predicate admitting viewers that hold any of `roles`.
    ///
    /// An empty role list admits nobody.
    ///
    /// # Examples
    ///
    /// ```
    /// use setting_groups::layout::RoleViewer;
    ///
    /// let staff = RoleViewer::visibility_for(["admin", "moderator"]);
    /// assert!(staff.allows(&RoleViewer::new(["moderator"])));
    /// assert!(!staff.allows(&RoleViewer::new(["player"])));
    /// ```
    #[must_use]
    pub fn visibility_for<I, R>(roles: I) -> Visibility<Self>
    where
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        let allowed: BTreeSet<String> = roles.into_iter().map(Into::into).collect();
        Visibility::new(move |viewer: &Self| !allowed.is_disjoint(&viewer.roles))
    }
}
