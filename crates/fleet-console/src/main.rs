use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleet_console::{Cli, ConsoleConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConsoleConfig::resolve(cli.config.as_deref())?
        .with_overrides(cli.fixture.clone(), cli.seed);

    init_tracing(&config.log_filter);
    tracing::debug!(?config, "Resolved console config");

    let output = fleet_console::run(&cli.command, &config, cli.format, cli.today)?;
    println!("{output}");
    Ok(())
}

/// Log to stderr so stdout carries only command output.
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
