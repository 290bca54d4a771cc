//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod debug;
pub mod extract;
pub mod primary;

use std::fs;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use blref_core::BlrefConfig;

/// Load configuration from an explicit path, the default location, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<BlrefConfig> {
    if let Some(path) = config_path {
        return Ok(BlrefConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Loading config from {}", default_path.display());
        Ok(BlrefConfig::from_file(&default_path)?)
    } else {
        Ok(BlrefConfig::default())
    }
}

/// Read an OCR transcript from a file, or from stdin when the path is `-`.
///
/// Invalid UTF-8 is replaced rather than rejected; OCR output is often dirty.
pub fn read_transcript(input: &Path, max_size: u64) -> anyhow::Result<String> {
    let bytes = if input == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .take(max_size.saturating_add(1))
            .read_to_end(&mut buf)?;
        if buf.len() as u64 > max_size {
            anyhow::bail!("Input on stdin exceeds {} bytes", max_size);
        }
        buf
    } else {
        if !input.exists() {
            anyhow::bail!("Input file not found: {}", input.display());
        }
        let size = fs::metadata(input)?.len();
        if size > max_size {
            anyhow::bail!(
                "Input file {} is {} bytes, limit is {}",
                input.display(),
                size,
                max_size
            );
        }
        fs::read(input)?
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
