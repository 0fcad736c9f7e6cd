//! # metagen
//!
//! Thin entrypoint for the `metagen` command. All logic lives in the library crate.

use anyhow::Result;
use clap::Parser;
use rust_metagen_cli::{run, Cli};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("rust_metagen=info".parse()?)
                .add_directive("rust_metagen_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("[metagen error] {e:?}");
        std::process::exit(1);
    }

    Ok(())
}
