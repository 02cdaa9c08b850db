//! CLI entrypoint for `settings-tree`.

use clap::Parser;
use settings_tree::{Args, SettingsTreeError, output, resolve};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), SettingsTreeError> {
    init_tracing();
    run()
}

fn run() -> Result<(), SettingsTreeError> {
    let args = Args::parse();
    let settings = resolve(&args)?;
    output::print_settings(&settings)?;
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
