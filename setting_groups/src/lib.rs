//! Priority-ordered, viewer-filtered setting groups.
//!
//! A [`Group`] bundles opaque leaf settings with an integer priority, an
//! optional [`Visibility`] predicate and ordered child groups. The resolver
//! flattens a group into the settings a particular viewer may see:
//!
//! ```rust
//! use setting_groups::{Group, Visibility, collect_viewable};
//!
//! let root: Group<&str, u32> = Group::new(vec!["s1"]).with_subgroups(vec![
//!     Group::new(vec!["s2"]).with_priority(1),
//!     Group::new(vec!["s3"]).with_priority(2),
//!     Group::new(vec!["hidden"]).with_visibility(Visibility::new(|level: &u32| *level > 9)),
//! ]);
//!
//! let seen = collect_viewable(&root, Some(&1))?;
//! assert_eq!(seen, vec!["s1", "s3", "s2"]);
//! # Ok::<_, setting_groups::GroupError>(())
//! ```
//!
//! Groups are shared handles, so the same group may sit under several
//! parents. A group may not, however, appear twice along a single descent;
//! such a path is reported as [`GroupError::CyclicGroup`].

mod config;
mod error;
mod group;
pub mod layout;
mod registry;
mod resolver;

pub use config::{ENV_PREFIX, MAX_PATH_CAPACITY_HINT, ResolverConfig};
pub use error::{GroupError, GroupResult};
pub use group::{Group, GroupId, Visibility, group_of, group_of_all};
pub use registry::SettingsRegistry;
pub use resolver::{SettingGroupResolver, collect_all, collect_viewable};
