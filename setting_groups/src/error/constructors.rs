//! Constructors for `GroupError` variants that wrap provider errors.

use camino::Utf8Path;
use figment::Error as FigmentError;

use super::GroupError;

impl GroupError {
    /// Construct a cycle error from the labels on the active path.
    ///
    /// `repeated` is the label of the group that was entered twice; it is
    /// appended to the chain so the loop is visible in the message.
    ///
    /// # Examples
    ///
    /// ```
    /// use setting_groups::GroupError;
    /// let err = GroupError::cyclic(["root", "child"], "root");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "cyclic setting group detected: root -> child -> root"
    /// );
    /// ```
    #[must_use]
    pub fn cyclic<I, L>(path: I, repeated: &str) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut chain: Vec<String> = path
            .into_iter()
            .map(|label| label.as_ref().to_owned())
            .collect();
        chain.push(repeated.to_owned());
        Self::CyclicGroup {
            cycle: chain.join(" -> "),
        }
    }

    /// Construct a layout error for `path` from a [`figment::Error`].
    #[must_use]
    pub fn layout(path: &Utf8Path, source: FigmentError) -> Self {
        Self::Layout {
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }

    /// Construct a configuration error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use setting_groups::GroupError;
    /// let err = GroupError::config(figment::Error::from(String::from("boom")));
    /// assert!(matches!(err, GroupError::Config(_)));
    /// ```
    #[must_use]
    pub fn config(source: FigmentError) -> Self {
        Self::Config(Box::new(source))
    }

    /// Returns `true` when the error reports a cyclic group path.
    #[must_use]
    pub const fn is_cycle(&self) -> bool {
        matches!(self, Self::CyclicGroup { .. })
    }
}
