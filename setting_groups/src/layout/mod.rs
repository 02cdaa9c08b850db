//! Declarative group layouts.
//!
//! A layout names every group by id and wires subgroups by reference, which
//! lets one group appear under several parents:
//!
//! ```toml
//! root = "server"
//!
//! [[groups]]
//! id = "server"
//! settings = ["motd"]
//! subgroups = ["audio", "admin"]
//!
//! [[groups]]
//! id = "audio"
//! settings = ["volume", "voice-chat"]
//!
//! [[groups]]
//! id = "admin"
//! priority = 10
//! visible_to = ["admin", "moderator"]
//! settings = ["noclip"]
//! ```
//!
//! Building a layout does not reject cycles expressed through ids; they are
//! reported by the resolver, the same as for groups wired in code.

use std::collections::HashMap;

use camino::Utf8Path;
use figment::Figment;
use figment::providers::{Format, Toml};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Group, GroupError, GroupResult};

mod viewer;

pub use viewer::RoleViewer;

/// Group tree produced from a layout.
pub type LayoutGroup = Group<String, RoleViewer>;

const INLINE_SOURCE: &str = "<inline>";

/// A complete layout document.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayoutDocument {
    /// Id of the group returned by [`LayoutDocument::build`].
    pub root: String,
    /// Every group in the layout.
    #[serde(default)]
    pub groups: Vec<GroupLayout>,
}

/// One group entry in a [`LayoutDocument`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GroupLayout {
    /// Unique id; also used as the group's diagnostic label.
    pub id: String,
    /// Direct settings in display order.
    #[serde(default)]
    pub settings: Vec<String>,
    /// Sibling ordering priority.
    #[serde(default)]
    pub priority: i32,
    /// Roles allowed to see the group; omitted means everyone.
    #[serde(default)]
    pub visible_to: Option<Vec<String>>,
    /// Ids of child groups in stored order.
    #[serde(default)]
    pub subgroups: Vec<String>,
}

impl LayoutDocument {
    /// Read a TOML layout from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Layout`] when the file is missing or does not
    /// describe a layout.
    pub fn load(path: &Utf8Path) -> GroupResult<Self> {
        if !path.is_file() {
            return Err(GroupError::layout(
                path,
                figment::Error::from(format!("layout file '{path}' does not exist")),
            ));
        }
        Figment::from(Toml::file(path))
            .extract()
            .map_err(|err| GroupError::layout(path, err))
    }

    /// Parse a TOML layout held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::Layout`] when `source` does not describe a
    /// layout.
    pub fn from_toml_str(source: &str) -> GroupResult<Self> {
        Figment::from(Toml::string(source))
            .extract()
            .map_err(|err| GroupError::layout(Utf8Path::new(INLINE_SOURCE), err))
    }

    /// Instantiate the layout and return its root group.
    ///
    /// Every reference is checked before any subgroup is attached, so a
    /// failed build leaves no cycle behind to keep its groups alive.
    ///
    /// The resolver recurses once per nesting level, so layouts are expected
    /// to stay shallow; a chain tens of thousands of groups deep can exhaust
    /// the thread's stack when resolved.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::DuplicateGroup`] when an id is declared twice,
    /// [`GroupError::UnknownSubgroup`] when a subgroup id is undeclared and
    /// [`GroupError::MissingRoot`] when the root id is undeclared.
    pub fn build(&self) -> GroupResult<LayoutGroup> {
        let index = self.instantiate_all()?;
        let root = index
            .get(self.root.as_str())
            .cloned()
            .ok_or_else(|| GroupError::MissingRoot {
                id: self.root.clone(),
            })?;
        self.link(&index)?;
        Ok(root)
    }

    fn instantiate_all(&self) -> GroupResult<HashMap<&str, LayoutGroup>> {
        let mut index: HashMap<&str, LayoutGroup> = HashMap::with_capacity(self.groups.len());
        for entry in &self.groups {
            if index.insert(entry.id.as_str(), instantiate(entry)).is_some() {
                return Err(GroupError::DuplicateGroup {
                    id: entry.id.clone(),
                });
            }
        }
        Ok(index)
    }

    /// Attach subgroups once all of them resolve; on error nothing changes.
    fn link(&self, index: &HashMap<&str, LayoutGroup>) -> GroupResult<()> {
        let mut wiring = Vec::with_capacity(self.groups.len());
        for entry in &self.groups {
            let children = entry
                .subgroups
                .iter()
                .map(|child| lookup(index, &entry.id, child))
                .collect::<GroupResult<Vec<_>>>()?;
            if let Some(parent) = index.get(entry.id.as_str()) {
                wiring.push((parent.clone(), children));
            }
        }
        for (parent, children) in wiring {
            parent.set_subgroups(children);
        }
        Ok(())
    }
}

fn instantiate(entry: &GroupLayout) -> LayoutGroup {
    let group = Group::new(entry.settings.clone())
        .with_priority(entry.priority)
        .with_label(entry.id.as_str());
    if let Some(roles) = &entry.visible_to {
        group.set_visibility(RoleViewer::visibility_for(roles.iter().cloned()));
    }
    group
}

fn lookup(
    index: &HashMap<&str, LayoutGroup>,
    parent: &str,
    child: &str,
) -> GroupResult<LayoutGroup> {
    index.get(child).cloned().ok_or_else(|| {
        warn!(parent, subgroup = child, "layout references an undeclared group");
        GroupError::UnknownSubgroup {
            parent: parent.to_owned(),
            id: child.to_owned(),
        }
    })
}
