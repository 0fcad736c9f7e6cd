//! # `metagen` Library Crate
//!
//! Command-line front end for `rust-metagen`: reads one image or video, asks Gemini for
//! a title, description and keywords, prints them and optionally exports them.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use rust_metagen::{
    write_export, Client, ExportFormat, GenerateMetadataConfig, GenerationProgress, MediaKind,
    MetadataRecord,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

pub mod key_file;

/// Environment variable consulted when no key flag is given.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

// --- CLI Argument Structs ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The image or video file to describe.
    pub file: PathBuf,
    /// Media kind. Inferred from the file extension when omitted.
    #[arg(long, value_parser = clap::value_parser!(MediaKind))]
    pub kind: Option<MediaKind>,
    /// Gemini API key. Falls back to `GEMINI_API_KEY` when neither key flag is given.
    #[arg(long)]
    pub api_key: Option<String>,
    /// Read the API key from a file instead.
    #[arg(long, conflicts_with = "api_key")]
    pub api_key_file: Option<PathBuf>,
    /// Store the API key in this file after a successful run.
    #[arg(long)]
    pub save_api_key: Option<PathBuf>,
    /// Model ID (defaults to gemini-1.5-flash).
    #[arg(long, env = "GEMINI_MODEL")]
    pub model: Option<String>,
    /// Override the API base URL.
    #[arg(long, env = "GEMINI_BASE_URL")]
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Declare the MIME type guessed from the file extension instead of the kind's default.
    #[arg(long)]
    pub guess_mime: bool,
    /// Export the result. `.json` writes JSON, anything else plain text.
    #[arg(long)]
    pub export: Option<PathBuf>,
    /// Print progress to stderr.
    #[arg(long)]
    pub progress: bool,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct Outcome {
    pub record: MetadataRecord,
    pub exported: Option<(PathBuf, ExportFormat)>,
}

// --- Public Entrypoint ---

/// The main entry point for the `metagen` library.
pub async fn run(cli: Cli) -> Result<()> {
    let outcome = execute(cli).await?;
    print!("{}", format_record(&outcome.record));
    if let Some((path, format)) = &outcome.exported {
        println!("Exported ({format:?}) to {}", path.display());
    }
    Ok(())
}

/// Runs one generation without printing the record.
pub async fn execute(cli: Cli) -> Result<Outcome> {
    if !cli.file.is_file() {
        bail!("File not found: {}", cli.file.display());
    }
    let api_key = resolve_api_key(&cli)?;
    let kind = match cli.kind {
        Some(kind) => kind,
        None => MediaKind::from_path(&cli.file).ok_or_else(|| {
            anyhow!(
                "Cannot infer media kind for '{}'; pass --kind image or --kind video",
                cli.file.display()
            )
        })?,
    };
    info!(file = %cli.file.display(), %kind, "generating metadata");

    let client = build_client(&cli, &api_key)?;
    let config = GenerateMetadataConfig {
        mime_type: None,
        guess_mime_type: cli.guess_mime,
    };

    let result = if cli.progress {
        generate_with_progress(&client, &cli.file, kind, config).await
    } else {
        client
            .metadata()
            .generate_with_config(&cli.file, kind, config)
            .await
    };
    let record = result.context("Metadata generation failed")?;

    if let Some(path) = &cli.save_api_key {
        key_file::save_api_key(path, &api_key)?;
        info!(path = %path.display(), "saved API key");
    }

    let exported = match &cli.export {
        Some(path) => {
            let format = write_export(path, &record, Some(cli.file.as_path()))
                .await
                .with_context(|| format!("Failed to export to '{}'", path.display()))?;
            Some((path.clone(), format))
        }
        None => None,
    };

    Ok(Outcome { record, exported })
}

/// Renders the record the way it is printed to stdout.
pub fn format_record(record: &MetadataRecord) -> String {
    format!(
        "Title: {}\nDescription: {}\nKeywords: {}\n",
        record.title,
        record.description,
        record.keywords_joined()
    )
}

fn resolve_api_key(cli: &Cli) -> Result<String> {
    let key = match (&cli.api_key, &cli.api_key_file) {
        (Some(key), _) => key.trim().to_string(),
        (None, Some(path)) => key_file::load_api_key(path)?,
        (None, None) => std::env::var(API_KEY_ENV)
            .map(|key| key.trim().to_string())
            .unwrap_or_default(),
    };
    if key.is_empty() {
        bail!("An API key is required: pass --api-key, --api-key-file or set GEMINI_API_KEY");
    }
    Ok(key)
}

fn build_client(cli: &Cli, api_key: &str) -> Result<Client> {
    let mut builder = Client::builder().api_key(api_key);
    if let Some(model) = &cli.model {
        builder = builder.model(model);
    }
    if let Some(base_url) = &cli.base_url {
        builder = builder.base_url(base_url);
    }
    if let Some(timeout) = cli.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build()?;
    debug!(model = client.model(), "client ready");
    Ok(client)
}

async fn generate_with_progress(
    client: &Client,
    file: &Path,
    kind: MediaKind,
    config: GenerateMetadataConfig,
) -> rust_metagen::Result<MetadataRecord> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let printer = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            if let Some(line) = progress_line(&event) {
                eprintln!("{line}");
            }
        }
    });
    let result = client
        .metadata()
        .generate_with_progress(file, kind, config, &tx)
        .await;
    drop(tx);
    let _ = printer.await;
    result
}

/// One stderr line per progress event; the terminal success event prints nothing.
pub fn progress_line(event: &GenerationProgress) -> Option<String> {
    match event {
        GenerationProgress::Stage(stage) => Some(format!("[{:>3}%] {stage:?}", stage.percent())),
        GenerationProgress::Completed(_) => None,
        GenerationProgress::Failed(message) => Some(format!("[fail] {message}")),
    }
}
