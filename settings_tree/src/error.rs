//! Error types for `settings-tree`.

use thiserror::Error;

/// Errors surfaced by the `settings-tree` pipeline.
#[derive(Debug, Error)]
pub enum SettingsTreeError {
    /// Loading, building or resolving the layout failed.
    #[error(transparent)]
    Groups(#[from] setting_groups::GroupError),

    /// Writing the resolved settings failed.
    #[error("failed to write resolved settings: {0}")]
    Output(#[from] std::io::Error),
}
