//! # Artifact File Names
//!
//! Every exported artifact embeds a `YYYYMMDD_HHMM` timestamp so repeated
//! exports of the same quote never overwrite each other.

use chrono::{DateTime, Local};

/// Formats the artifact timestamp: "20240125_1432".
pub fn timestamp(now: DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M").to_string()
}

/// Builds a timestamped artifact name: "Orcamento_Comum_ELIV_20240125_1432.docx".
pub fn timestamped(stem: &str, extension: &str, now: DateTime<Local>) -> String {
    format!("{}_{}.{}", stem, timestamp(now), extension)
}
