//! Data models for extraction results, diagnostics and configuration.

pub mod candidate;
pub mod config;
pub mod trace;
