//! Rendering of resolved settings.

use std::io::{self, Write};

/// Writes one setting per line to `writer`.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing fails.
pub fn write_settings_to<W: Write>(writer: &mut W, settings: &[String]) -> io::Result<()> {
    for setting in settings {
        writeln!(writer, "{setting}")?;
    }
    writer.flush()
}

/// Prints `settings` to standard output.
///
/// # Errors
///
/// Returns an [`io::Error`] when writing to standard output fails.
pub fn print_settings(settings: &[String]) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_settings_to(&mut stdout, settings)
}
