//! Library half of `settings-tree`.
//!
//! [`resolve`] loads the layout named by [`Args`] and returns the settings
//! the requested viewer sees; `main` prints them.

pub mod cli;
pub mod error;
pub mod output;

use setting_groups::ResolverConfig;
use setting_groups::layout::{LayoutDocument, RoleViewer};
use tracing::info;

pub use cli::Args;
pub use error::SettingsTreeError;

/// Resolve the settings selected by `args`.
///
/// # Errors
///
/// Returns a [`SettingsTreeError`] when the configuration or layout cannot
/// be loaded or the layout is inconsistent or cyclic.
pub fn resolve(args: &Args) -> Result<Vec<String>, SettingsTreeError> {
    let config = ResolverConfig::load(args.config.as_deref())?;
    let resolver = config.resolver();
    let root = LayoutDocument::load(&args.layout)?.build()?;
    info!(layout = %args.layout, roles = ?args.roles, "resolving layout");

    let settings = if args.should_list_all {
        resolver.collect_all(&root)?
    } else if args.is_anonymous {
        resolver.collect_viewable(&root, None)?
    } else {
        let viewer = RoleViewer::new(args.roles.iter().cloned());
        resolver.collect_viewable(&root, Some(&viewer))?
    };
    Ok(settings)
}
