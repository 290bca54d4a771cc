//! Primary command - print only the best B/L number.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use blref_core::{BlNumberExtractor, ReferenceExtractor};

use super::{load_config, read_transcript};

/// Arguments for the primary command.
#[derive(Args)]
pub struct PrimaryArgs {
    /// Input transcript file ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Exit with an error when no B/L number is found
    #[arg(long)]
    require: bool,
}

pub async fn run(args: PrimaryArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    info!("Processing transcript: {}", args.input.display());
    let text = read_transcript(&args.input, config.input.max_file_size)?;

    let extractor = BlNumberExtractor::from_config(&config.extraction);
    let values = extractor.extract_all(&text);

    match values.first() {
        Some(primary) => println!("{}", primary),
        None if args.require => {
            anyhow::bail!("No B/L number found in {}", args.input.display())
        }
        None => println!("{}", blref_core::NOT_FOUND),
    }

    Ok(())
}
