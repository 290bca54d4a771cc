//! Debug command - show raw pattern matches for pattern tuning.

use std::path::PathBuf;

use clap::Args;
use console::style;

use blref_core::BlNumberExtractor;

use super::{load_config, read_transcript};

/// Arguments for the debug command.
#[derive(Args)]
pub struct DebugArgs {
    /// Input transcript file ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Emit the trace as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: DebugArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_transcript(&args.input, config.input.max_file_size)?;

    let trace = BlNumberExtractor::from_config(&config.extraction).debug_trace(&text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    print!("{}", trace);
    eprintln!(
        "{} {} raw matches",
        style("ℹ").blue(),
        trace.match_count()
    );

    Ok(())
}
