//! CLI entry point for rendering autotile previews

use clap::Parser;
use tracing_subscriber::EnvFilter;
use wolftile::io::cli::{Cli, Previewer};

fn main() -> wolftile::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let previewer = Previewer::new(Cli::parse());
    let output = previewer.run()?;
    tracing::info!(path = %output.display(), "preview written");
    Ok(())
}
