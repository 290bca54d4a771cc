//! Extract command - rank B/L numbers in a single transcript.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use blref_core::models::candidate::ExtractionReport;
use blref_core::BlNumberExtractor;

use super::{load_config, read_transcript};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input transcript file ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Include candidate scores and label provenance
    #[arg(long)]
    scores: bool,

    /// Maximum number of candidates to return (0 = unlimited)
    #[arg(long)]
    max: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Numbered listing
    Text,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Text => "txt",
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Processing transcript: {}", args.input.display());
    let text = read_transcript(&args.input, config.input.max_file_size)?;

    let include_scores =
        args.scores || config.extraction.include_scores || args.format == OutputFormat::Csv;
    let extractor = BlNumberExtractor::from_config(&config.extraction)
        .with_max_candidates(args.max.unwrap_or(config.extraction.max_candidates))
        .with_scores(include_scores);

    let report = extractor.report(&text);
    let output = format_report(&report, args.format, config.output.pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output.trim_end());
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Render a report in the requested format.
pub fn format_report(
    report: &ExtractionReport,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Json => Ok(serde_json::to_string(report)?),
        OutputFormat::Csv => format_csv(report),
        OutputFormat::Text => Ok(report.to_listing()),
    }
}

fn format_csv(report: &ExtractionReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["rank", "value", "score", "from_label"])?;

    match &report.candidates {
        Some(candidates) => {
            for (i, candidate) in candidates.iter().enumerate() {
                wtr.write_record([
                    &(i + 1).to_string(),
                    &candidate.value,
                    &candidate.score.to_string(),
                    &candidate.from_label.to_string(),
                ])?;
            }
        }
        None => {
            for (i, value) in report.bl_numbers.iter().enumerate() {
                wtr.write_record([(i + 1).to_string().as_str(), value.as_str(), "", ""])?;
            }
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
