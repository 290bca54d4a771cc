//! Configuration structures for the extraction pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Main configuration for blref.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlrefConfig {
    /// Candidate extraction configuration.
    pub extraction: ExtractionConfig,

    /// Transcript input configuration.
    pub input: InputConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Candidate extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Maximum number of ranked candidates to return (0 = unlimited).
    pub max_candidates: usize,

    /// Include per-candidate scores in reports.
    pub include_scores: bool,
}

/// Transcript input configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// File extensions treated as OCR transcripts in batch mode.
    pub extensions: Vec<String>,

    /// Maximum transcript size in bytes.
    pub max_file_size: u64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string(), "text".to_string(), "ocr".to_string()],
            max_file_size: 10 * 1024 * 1024,
        }
    }
}

impl InputConfig {
    /// Check whether a path has one of the configured transcript extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext))
    }
}

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl BlrefConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check value constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.input.extensions.is_empty() {
            return Err(ConfigError::Invalid {
                key: "input.extensions".to_string(),
                reason: "at least one extension is required".to_string(),
            }
            .into());
        }
        if self.input.max_file_size == 0 {
            return Err(ConfigError::Invalid {
                key: "input.max_file_size".to_string(),
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Look up a value by dotted key path (e.g. "extraction.max_candidates").
    pub fn get_value(&self, key: &str) -> Result<serde_json::Value> {
        let json = serde_json::to_value(self)?;

        let mut current = &json;
        for part in key.split('.') {
            current = current
                .get(part)
                .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;
        }

        Ok(current.clone())
    }

    /// Set a value by dotted key path and return the updated configuration.
    ///
    /// The value is parsed as JSON, falling back to a plain string.
    pub fn with_value(&self, key: &str, value: &str) -> Result<Self> {
        let parsed: serde_json::Value = serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));

        let mut json = serde_json::to_value(self)?;
        let parts: Vec<&str> = key.split('.').collect();
        let (last, path) = parts
            .split_last()
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;

        let mut current = &mut json;
        for part in path {
            current = current
                .get_mut(*part)
                .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))?;
        }

        let obj = current
            .as_object_mut()
            .ok_or_else(|| ConfigError::NotAnObject(key.to_string()))?;
        if !obj.contains_key(*last) {
            return Err(ConfigError::KeyNotFound(key.to_string()).into());
        }
        obj.insert((*last).to_string(), parsed);

        let config: Self = serde_json::from_value(json)?;
        config.validate()?;
        Ok(config)
    }
}
