//! Configuration structures for the event classifier
//!
//! This module contains the classifier configuration structure, the command line
//! arguments that feed it, and the validation logic that guards both.

use super::{CategoryFilter, OutputFormat, SortKey};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default imminence window, in hours
pub const DEFAULT_IMMINENCE_WINDOW_HOURS: i64 = 24;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "event-classifier",
    version,
    about = "Event Classifier - Buckets event listings into upcoming, imminent and past",
    long_about = "Reads a list of event records and partitions them into upcoming, imminent (starting within the imminence window) and past buckets, then filters each bucket by category and sorts it for display.

EXAMPLES:
    # Classify against the current time
    event-classifier --events events.json

    # Classify against a fixed instant with a 48 hour window
    event-classifier --events events.jsonl --now 2024-02-22T00:00:00Z --window-hours 48

    # Only sports events, busiest first, as a text report
    event-classifier --events events.json --category Sports --sort-key participantCount --output-format text

    # Generate configuration template
    event-classifier --print-config > my-config.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Event records file (.json array or .jsonl)
    #[arg(short, long, help = "Event records file (.json or .jsonl)")]
    pub events: Option<String>,

    /// Reference instant for classification
    #[arg(
        long,
        help = "Reference instant (RFC 3339), defaults to now",
        long_help = "Instant to classify against, e.g. 2024-02-22T00:00:00Z. A timestamp without an offset is read as UTC. Default: the current time"
    )]
    pub now: Option<String>,

    /// Imminence window in hours
    #[arg(
        long,
        help = "Imminence window in hours",
        allow_negative_numbers = true,
        long_help = "Events starting within this many hours of the reference instant are imminent and no longer editable. Must not be negative. Default: 24"
    )]
    pub window_hours: Option<i64>,

    /// Category to keep in every bucket
    #[arg(long, help = "Only show events in this category (\"all\" for no filter)")]
    pub category: Option<String>,

    /// Sort key applied to every bucket
    #[arg(
        long,
        help = "Sort key (startTime or participantCount)",
        long_help = "Key used to order each bucket: startTime sorts earliest first, participantCount sorts busiest first. Default: startTime"
    )]
    pub sort_key: Option<String>,

    /// Output format for the report
    #[arg(long, help = "Output format (json or text)")]
    pub output_format: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without classifying
    #[arg(long, help = "Validate configuration without classifying")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Event records file
    pub events_path: Option<String>,

    /// Imminence window in hours
    pub imminence_window_hours: Option<i64>,

    /// Category filter
    pub category: Option<String>,

    /// Sort key name
    pub sort_key: Option<String>,

    /// Output format name
    pub output_format: Option<String>,

    /// Fixed reference instant
    pub now: Option<String>,
}

/// Configuration for a classification run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierConfig {
    /// Event records file
    pub events_path: Option<String>,

    /// Imminence window in hours
    pub imminence_window_hours: i64,

    /// Category filter (`None` or "all" keeps every category)
    pub category: Option<String>,

    /// Sort key name
    pub sort_key: String,

    /// Output format name
    pub output_format: String,

    /// Fixed reference instant; the wall clock is used when absent
    pub now: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for classifier configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Imminence window is negative
    #[error("Imminence window must not be negative, got {0} hours")]
    NegativeImminenceWindow(i64),

    /// Imminence window does not fit in a duration
    #[error("Imminence window of {0} hours is out of range")]
    ImminenceWindowOutOfRange(i64),

    /// Sort key is not recognised
    #[error("{0}")]
    InvalidSortKey(#[from] crate::classifier::error::ClassifierError),

    /// Output format is not recognised
    #[error("{0}")]
    InvalidOutputFormat(String),

    /// Reference instant could not be parsed
    #[error("Invalid reference instant '{value}': expected RFC 3339 (e.g. 2024-02-22T00:00:00Z)")]
    InvalidNow {
        /// The unparseable value
        value: String,
    },
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            events_path: None,
            imminence_window_hours: DEFAULT_IMMINENCE_WINDOW_HOURS,
            category: None,
            sort_key: "startTime".to_string(),
            output_format: "json".to_string(),
            now: None,
        }
    }
}

impl ClassifierConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            events_path: config_file.events_path.or(defaults.events_path),
            imminence_window_hours: config_file
                .imminence_window_hours
                .unwrap_or(defaults.imminence_window_hours),
            category: config_file.category.or(defaults.category),
            sort_key: config_file.sort_key.unwrap_or(defaults.sort_key),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            now: config_file.now.or(defaults.now),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.events {
            config.events_path = Some(value);
        }
        if let Some(value) = args.window_hours {
            config.imminence_window_hours = value;
        }
        if let Some(value) = args.category {
            config.category = Some(value);
        }
        if let Some(value) = args.sort_key {
            config.sort_key = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.now {
            config.now = Some(value);
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.imminence_window()?;
        self.sort_key()?;
        self.get_output_format()?;
        if let Some(value) = &self.now {
            parse_instant(value)?;
        }
        Ok(())
    }

    /// Imminence window as a duration
    pub fn imminence_window(&self) -> Result<Duration, ConfigValidationError> {
        let hours = self.imminence_window_hours;
        if hours < 0 {
            return Err(ConfigValidationError::NegativeImminenceWindow(hours));
        }
        Duration::try_hours(hours).ok_or(ConfigValidationError::ImminenceWindowOutOfRange(hours))
    }

    /// Parsed sort key
    pub fn sort_key(&self) -> Result<SortKey, ConfigValidationError> {
        Ok(self.sort_key.parse::<SortKey>()?)
    }

    /// Category filter built from the configured category
    pub fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::from_option(self.category.as_deref())
    }

    /// Parsed output format
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse::<OutputFormat>()
            .map_err(ConfigValidationError::InvalidOutputFormat)
    }

    /// Reference instant: the configured value, or the wall clock when none is set
    pub fn resolve_now(&self) -> Result<DateTime<Utc>, ConfigValidationError> {
        match &self.now {
            Some(value) => parse_instant(value),
            None => Ok(Utc::now()),
        }
    }
}

/// Parse an RFC 3339 timestamp; one without an offset is read as UTC
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Parse the configured reference instant
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, ConfigValidationError> {
    parse_timestamp(value).ok_or_else(|| ConfigValidationError::InvalidNow {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_args() -> CliArgs {
        CliArgs::try_parse_from(["test"]).unwrap()
    }

    #[test]
    fn test_classifier_config_default() {
        let config = ClassifierConfig::default();

        assert!(config.events_path.is_none());
        assert_eq!(config.imminence_window_hours, 24);
        assert!(config.category.is_none());
        assert_eq!(config.sort_key, "startTime");
        assert_eq!(config.output_format, "json");
        assert!(config.now.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_cli_overrides_defaults() {
        let args = CliArgs::try_parse_from([
            "test",
            "--events",
            "events.json",
            "--window-hours",
            "48",
            "--category",
            "Sports",
            "--sort-key",
            "participantCount",
        ])
        .unwrap();

        let config = ClassifierConfig::from_cli_args(args).unwrap();
        assert_eq!(config.events_path.as_deref(), Some("events.json"));
        assert_eq!(config.imminence_window().unwrap(), Duration::hours(48));
        assert_eq!(config.category_filter(), CategoryFilter::Only("Sports".to_string()));
        assert_eq!(config.sort_key().unwrap(), SortKey::ParticipantCount);
    }

    #[test]
    fn test_config_file_loading() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        let config_json = r#"{
            "imminence_window_hours": 12,
            "category": "Technology",
            "output_format": "text"
        }"#;
        temp_file.write_all(config_json.as_bytes()).unwrap();

        let config = ClassifierConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.imminence_window_hours, 12);
        assert_eq!(config.category.as_deref(), Some("Technology"));
        assert_eq!(config.get_output_format().unwrap(), OutputFormat::Text);
        // Unset fields fall back to defaults
        assert_eq!(config.sort_key, "startTime");
    }

    #[test]
    fn test_cli_takes_precedence_over_file() {
        use std::io::Write;
        use tempfile::Builder;

        let mut temp_file = Builder::new().suffix(".json").tempfile().unwrap();
        temp_file.write_all(br#"{"imminence_window_hours": 12}"#).unwrap();

        let mut args = base_args();
        args.config = Some(temp_file.path().display().to_string());
        args.window_hours = Some(6);

        let config = ClassifierConfig::from_cli_args(args).unwrap();
        assert_eq!(config.imminence_window_hours, 6);
    }

    #[test]
    fn test_missing_and_unsupported_config_files() {
        let err = ClassifierConfig::from_file("does-not-exist.json").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));

        let temp_file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        let err = ClassifierConfig::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ref ext) if ext == "toml"));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = ClassifierConfig { imminence_window_hours: -1, ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::NegativeImminenceWindow(-1))
        ));

        let config = ClassifierConfig { sort_key: "rating".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidSortKey(_))));

        let config = ClassifierConfig { output_format: "csv".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidOutputFormat(_))));

        let config = ClassifierConfig { now: Some("yesterday".to_string()), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidNow { .. })));
    }

    #[test]
    fn test_zero_window_is_valid() {
        let config = ClassifierConfig { imminence_window_hours: 0, ..Default::default() };
        assert_eq!(config.imminence_window().unwrap(), Duration::zero());
    }

    #[test]
    fn test_parse_instant_accepts_offset_and_naive_forms() {
        let expected = Utc.with_ymd_and_hms(2024, 2, 22, 0, 0, 0).unwrap();
        assert_eq!(parse_instant("2024-02-22T00:00:00Z").unwrap(), expected);
        assert_eq!(parse_instant("2024-02-22T01:00:00+01:00").unwrap(), expected);
        assert_eq!(parse_instant("2024-02-22T00:00:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        assert!(parse_timestamp("2024-02-22").is_none());
        assert!(parse_timestamp("next tuesday").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_print_json_round_trips() {
        let config = ClassifierConfig::default();
        let json = config.print_json().unwrap();
        let parsed: ClassifierConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
