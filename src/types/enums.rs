//! Enumeration types for the event classifier
//!
//! This module contains the lifecycle statuses, classification buckets, sort keys,
//! category filters and output formats used throughout the crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::classifier::error::ClassifierError;

/// Externally-set lifecycle state of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleStatus {
    /// Scheduled and not yet started
    Upcoming,
    /// Currently running
    Active,
    /// Finished, or manually marked complete by the owner
    Completed,
    /// Called off by the owner
    Cancelled,
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleStatus::Upcoming => write!(f, "upcoming"),
            LifecycleStatus::Active => write!(f, "active"),
            LifecycleStatus::Completed => write!(f, "completed"),
            LifecycleStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl FromStr for LifecycleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upcoming" => Ok(LifecycleStatus::Upcoming),
            "active" => Ok(LifecycleStatus::Active),
            "completed" => Ok(LifecycleStatus::Completed),
            "cancelled" | "canceled" => Ok(LifecycleStatus::Cancelled),
            _ => Err(format!("Unknown lifecycle status: {}", s)),
        }
    }
}

/// Time-derived classification bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    /// Starts after the imminence window closes
    Upcoming,
    /// Starts within the imminence window
    Imminent,
    /// Already started, or completed
    Past,
}

impl Bucket {
    /// All buckets in display order
    pub const ALL: [Bucket; 3] = [Bucket::Upcoming, Bucket::Imminent, Bucket::Past];

    /// Whether the owner may still edit events in this bucket
    pub fn is_editable(self) -> bool {
        matches!(self, Bucket::Upcoming)
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bucket::Upcoming => write!(f, "Upcoming"),
            Bucket::Imminent => write!(f, "Imminent"),
            Bucket::Past => write!(f, "Past"),
        }
    }
}

/// Key used to order a bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Earliest start first
    StartTime,
    /// Most participants first
    ParticipantCount,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::StartTime => write!(f, "startTime"),
            SortKey::ParticipantCount => write!(f, "participantCount"),
        }
    }
}

impl FromStr for SortKey {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "starttime" | "start_time" | "start-time" => Ok(SortKey::StartTime),
            "participantcount" | "participant_count" | "participant-count" => {
                Ok(SortKey::ParticipantCount)
            }
            _ => Err(ClassifierError::invalid_sort_key(s)),
        }
    }
}

/// Category restriction applied to a bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// No filtering
    #[default]
    All,
    /// Keep only records whose category equals this value
    Only(String),
}

impl CategoryFilter {
    /// Build a filter from an optional category name; absent, empty or "all" means no filtering
    pub fn from_option(category: Option<&str>) -> Self {
        match category.map(str::trim) {
            None | Some("") => CategoryFilter::All,
            Some(name) if name.eq_ignore_ascii_case("all") => CategoryFilter::All,
            Some(name) => CategoryFilter::Only(name.to_string()),
        }
    }

    /// Check whether a category passes the filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Only(name) => write!(f, "{}", name),
        }
    }
}

/// Output formats for the command-line report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// JSON document for the view layer
    Json,
    /// Human-readable text report
    Text,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_status_from_str() {
        assert_eq!("upcoming".parse::<LifecycleStatus>().unwrap(), LifecycleStatus::Upcoming);
        assert_eq!("ACTIVE".parse::<LifecycleStatus>().unwrap(), LifecycleStatus::Active);
        assert_eq!("canceled".parse::<LifecycleStatus>().unwrap(), LifecycleStatus::Cancelled);
        assert!("archived".parse::<LifecycleStatus>().is_err());
    }

    #[test]
    fn test_lifecycle_status_serde_is_lowercase() {
        let json = serde_json::to_string(&LifecycleStatus::Completed).unwrap();
        assert_eq!(json, "\"completed\"");
        let parsed: LifecycleStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(parsed, LifecycleStatus::Cancelled);
    }

    #[test]
    fn test_only_upcoming_bucket_is_editable() {
        assert!(Bucket::Upcoming.is_editable());
        assert!(!Bucket::Imminent.is_editable());
        assert!(!Bucket::Past.is_editable());
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("startTime".parse::<SortKey>().unwrap(), SortKey::StartTime);
        assert_eq!("start_time".parse::<SortKey>().unwrap(), SortKey::StartTime);
        assert_eq!(
            "participantCount".parse::<SortKey>().unwrap(),
            SortKey::ParticipantCount
        );
        assert_eq!(
            "participant-count".parse::<SortKey>().unwrap(),
            SortKey::ParticipantCount
        );
    }

    #[test]
    fn test_unknown_sort_key_is_rejected() {
        let err = "rating".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidSortKey(ref key) if key == "rating"));
    }

    #[test]
    fn test_category_filter_from_option() {
        assert_eq!(CategoryFilter::from_option(None), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_option(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_option(Some("All")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_option(Some("")), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_option(Some("Sports")),
            CategoryFilter::Only("Sports".to_string())
        );
    }

    #[test]
    fn test_category_filter_matches_exactly() {
        let filter = CategoryFilter::Only("Technology".to_string());
        assert!(filter.matches("Technology"));
        assert!(!filter.matches("technology"));
        assert!(!filter.matches("Sports"));
        assert!(CategoryFilter::All.matches("anything"));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
