//! Loading event records from files
//!
//! The event source is the authority on record identity: every loader checks
//! that ids are unique before handing records to the classifier.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use super::EventRecord;
use crate::types::EventId;

/// Errors raised while loading event records
#[derive(Debug, Error)]
pub enum SourceError {
    /// Events file not found
    #[error("Events file not found: {0}")]
    FileNotFound(String),

    /// Events file read error
    #[error("Failed to read events file: {0}")]
    Read(#[from] std::io::Error),

    /// JSON array parsing error
    #[error("Failed to parse events JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON Lines parsing error
    #[error("Failed to parse event on line {line}: {source}")]
    JsonLine {
        /// 1-based line number
        line: usize,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// Unsupported events file format
    #[error("Unsupported events file format: {0} (supported: .json, .jsonl, .ndjson)")]
    UnsupportedFormat(String),

    /// Two records share an id
    #[error("Duplicate event id: {0}")]
    DuplicateId(EventId),
}

/// Load records from a `.json` array or a `.jsonl` / `.ndjson` file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<EventRecord>, SourceError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SourceError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;

    let records = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&content)?,
        Some("jsonl") | Some("ndjson") => parse_json_lines(&content)?,
        Some(ext) => return Err(SourceError::UnsupportedFormat(ext.to_string())),
        None => return Err(SourceError::UnsupportedFormat("no extension".to_string())),
    };

    info!("Loaded {} event records from {}", records.len(), path.display());
    Ok(records)
}

/// Parse a JSON array of records
pub fn parse_json(content: &str) -> Result<Vec<EventRecord>, SourceError> {
    let records: Vec<EventRecord> = serde_json::from_str(content)?;
    ensure_unique_ids(&records)?;
    warn_over_capacity(&records);
    Ok(records)
}

/// Parse one record per non-blank line
pub fn parse_json_lines(content: &str) -> Result<Vec<EventRecord>, SourceError> {
    let mut records = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: EventRecord = serde_json::from_str(line)
            .map_err(|source| SourceError::JsonLine { line: index + 1, source })?;
        records.push(record);
    }

    ensure_unique_ids(&records)?;
    warn_over_capacity(&records);
    Ok(records)
}

/// Fail on the first id that appears twice
pub fn ensure_unique_ids(records: &[EventRecord]) -> Result<(), SourceError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.id) {
            return Err(SourceError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}

// Capacity is enforced upstream; a violation is worth a log line, not a failure.
fn warn_over_capacity(records: &[EventRecord]) {
    for record in records {
        if let Some(capacity) = record.capacity {
            if record.participant_count > capacity {
                warn!(
                    event_id = %record.id,
                    participants = record.participant_count,
                    capacity,
                    "Event has more participants than capacity"
                );
            }
        }
    }
}
