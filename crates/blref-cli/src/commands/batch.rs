//! Batch processing command for multiple transcript files.

use std::fs;
use std::path::{Path, PathBuf};
use std::pin::pin;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use blref_core::models::candidate::ExtractionReport;
use blref_core::BlNumberExtractor;

use super::extract::{format_report, OutputFormat};
use super::{load_config, read_transcript};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Write only the primary value per file
    #[arg(long)]
    primary_only: bool,
}

/// Result of processing a single file.
struct ProcessResult {
    /// Position in input order, from 0.
    index: usize,
    path: PathBuf,
    report: Option<ExtractionReport>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file() && config.input.accepts(p))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let extractor = BlNumberExtractor::from_config(&config.extraction)
        .with_scores(config.extraction.include_scores || args.format == OutputFormat::Csv);
    let max_file_size = config.input.max_file_size;

    let mut pending = pin!(
        stream::iter(files.into_iter().enumerate())
            .map(|(index, path)| {
                let extractor = extractor.clone();
                async move {
                    let file_start = Instant::now();
                    let task_path = path.clone();
                    let outcome = tokio::task::spawn_blocking(move || {
                        process_single_file(&task_path, &extractor, max_file_size)
                    })
                    .await
                    .map_err(anyhow::Error::from)
                    .and_then(|r| r);

                    (index, path, outcome, file_start.elapsed().as_millis() as u64)
                }
            })
            .buffered(args.jobs.max(1))
    );

    let mut results = Vec::new();
    while let Some((index, path, outcome, processing_time_ms)) = pending.next().await {
        match outcome {
            Ok(report) => {
                debug!(
                    "{}: {} B/L numbers, primary {}",
                    path.display(),
                    report.bl_number_count,
                    report.primary
                );
                results.push(ProcessResult {
                    index,
                    path,
                    report: Some(report),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to process {}: {}", path.display(), error_msg);
                    results.push(ProcessResult {
                        index,
                        path,
                        report: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    progress.abandon();
                    error!("Failed to process {}: {}", path.display(), error_msg);
                    anyhow::bail!("Processing failed: {}", error_msg);
                }
            }
        }

        progress.inc(1);
    }

    progress.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        for result in &results {
            if let Some(report) = &result.report {
                write_output(output_dir, result, report, &args, config.output.pretty)?;
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let successful: Vec<_> = results.iter().filter(|r| r.report.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();
    let found = successful
        .iter()
        .filter(|r| r.report.as_ref().is_some_and(ExtractionReport::is_found))
        .count();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful ({} with a B/L number), {} failed",
        style(successful.len()).green(),
        found,
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn process_single_file(
    path: &Path,
    extractor: &BlNumberExtractor,
    max_file_size: u64,
) -> anyhow::Result<ExtractionReport> {
    let text = read_transcript(path, max_file_size)?;
    Ok(extractor.report(&text))
}

fn write_output(
    output_dir: &Path,
    result: &ProcessResult,
    report: &ExtractionReport,
    args: &BatchArgs,
    pretty: bool,
) -> anyhow::Result<()> {
    let output_name = result
        .path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("transcript");

    let (extension, content) = if args.primary_only {
        ("txt", format!("{}\n", report.primary))
    } else {
        (
            args.format.extension(),
            format_report(report, args.format, pretty)?,
        )
    };

    let output_path = output_dir.join(format!("{}.{}", output_name, extension));
    fs::write(&output_path, content)?;
    debug!("Wrote output to {}", output_path.display());

    Ok(())
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "index",
        "filename",
        "status",
        "primary",
        "count",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let index = (result.index + 1).to_string();
        let time = result.processing_time_ms.to_string();

        if let Some(report) = &result.report {
            let status = if report.is_found() { "found" } else { "not_found" };
            wtr.write_record([
                index.as_str(),
                filename,
                status,
                report.primary.as_str(),
                report.bl_number_count.to_string().as_str(),
                time.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                index.as_str(),
                filename,
                "error",
                "",
                "",
                time.as_str(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
