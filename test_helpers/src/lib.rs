//! Test helpers shared across crates in the setting-groups workspace.
//!
//! [`groups`] builds small labelled trees and viewers; [`jail`] runs layout
//! and configuration loading inside a [`figment::Jail`].

pub mod groups;
pub mod jail;
