//! Command-line interface definitions for `settings-tree`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Parsed CLI arguments for `settings-tree`.
#[derive(Debug, Parser)]
#[command(name = "settings-tree")]
#[command(about = "Print the settings a viewer sees in a setting group layout")]
#[command(version)]
pub struct Args {
    /// TOML layout describing the setting groups.
    #[arg(value_name = "LAYOUT")]
    pub layout: Utf8PathBuf,
    /// Role held by the viewer (repeat for several roles).
    #[arg(long = "role", value_name = "role")]
    pub roles: Vec<String>,
    /// Resolve for the absent viewer, which sees nothing.
    #[arg(long = "anonymous", conflicts_with_all = ["roles", "should_list_all"])]
    pub is_anonymous: bool,
    /// Print every setting, ignoring visibility and priority.
    #[arg(long = "all", conflicts_with = "roles")]
    pub should_list_all: bool,
    /// Resolver configuration file.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
}

impl Args {
    /// Returns `true` when neither `--all` nor `--anonymous` is given.
    #[must_use]
    pub const fn resolves_for_roles(&self) -> bool {
        !self.should_list_all && !self.is_anonymous
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use clap::error::ErrorKind;
    use rstest::rstest;

    #[rstest]
    fn parses_repeated_roles() {
        let args = Args::try_parse_from([
            "settings-tree",
            "layout.toml",
            "--role",
            "admin",
            "--role",
            "moderator",
        ])
        .expect("arguments parse");
        assert_eq!(args.layout.as_str(), "layout.toml");
        assert_eq!(args.roles, vec!["admin", "moderator"]);
        assert!(args.resolves_for_roles());
    }

    #[rstest]
    #[case(&["settings-tree", "l.toml", "--all"])]
    #[case(&["settings-tree", "l.toml", "--anonymous"])]
    fn special_modes_skip_role_resolution(#[case] argv: &[&str]) {
        let args = Args::try_parse_from(argv.iter().copied()).expect("arguments parse");
        assert!(!args.resolves_for_roles());
    }

    #[rstest]
    #[case(&["settings-tree", "l.toml", "--anonymous", "--role", "admin"])]
    #[case(&["settings-tree", "l.toml", "--all", "--role", "admin"])]
    #[case(&["settings-tree", "l.toml", "--all", "--anonymous"])]
    fn conflicting_modes_are_rejected(#[case] argv: &[&str]) {
        let err = Args::try_parse_from(argv.iter().copied()).expect_err("modes conflict");
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[rstest]
    fn layout_is_required() {
        assert!(Args::try_parse_from(["settings-tree"]).is_err());
    }
}
