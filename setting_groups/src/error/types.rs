//! Primary error enum for group construction and resolution.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type GroupResult<T> = Result<T, GroupError>;

/// Errors raised while building or resolving setting groups.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GroupError {
    /// A group was entered again while already on the active descent path.
    #[error("cyclic setting group detected: {cycle}")]
    CyclicGroup {
        /// Chain of group labels from the root to the repeated group.
        cycle: String,
    },

    /// Two layout entries share the same identifier.
    #[error("duplicate group id '{id}' in layout")]
    DuplicateGroup {
        /// Identifier declared more than once.
        id: String,
    },

    /// A layout entry references a subgroup that was never declared.
    #[error("group '{parent}' references unknown subgroup '{id}'")]
    UnknownSubgroup {
        /// Identifier of the referencing group.
        parent: String,
        /// Identifier that could not be found.
        id: String,
    },

    /// The layout root does not name a declared group.
    #[error("layout root '{id}' is not a declared group")]
    MissingRoot {
        /// Identifier given as the layout root.
        id: String,
    },

    /// A layout document could not be read or parsed.
    #[error("failed to load group layout from '{path}': {source}")]
    Layout {
        /// Path of the layout document, or `<inline>` for in-memory input.
        path: Utf8PathBuf,
        /// Underlying provider error.
        #[source]
        source: Box<FigmentError>,
    },

    /// Resolver configuration could not be gathered.
    #[error("failed to load resolver configuration: {0}")]
    Config(#[source] Box<FigmentError>),
}
