//! Event Classifier
//!
//! Time-windowed classification, filtering and sorting of social event listings.
//!
//! # Overview
//!
//! Given a flat list of event records and a reference instant, the classifier
//! splits the records into three mutually exclusive buckets:
//!
//! - **Upcoming**: scheduled events starting after the imminence window (editable by their owner)
//! - **Imminent**: scheduled events starting within the imminence window (default 24 hours)
//! - **Past**: events that already started, or were marked completed
//!
//! Cancelled events are kept out of every bucket. Each bucket can then be
//! filtered by category and sorted by start time or participant count.
//!
//! Classification is a pure function of each record's start time, lifecycle
//! status and the reference instant: nothing is mutated and no clock is read
//! unless the caller asks for it.
//!
//! ## Quick Start
//!
//! ```rust
//! use event_classifier::*;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2024, 2, 22, 0, 0, 0).unwrap();
//! let owner = OwnerRef::new(OwnerId::new("org-1"), "Run Club");
//! let records = vec![
//!     EventRecord::new("Morning run", "5k", now + Duration::hours(8), "Sports", owner.clone()),
//!     EventRecord::new("Trail day", "20k", now + Duration::days(4), "Sports", owner),
//! ];
//!
//! let classified = classify(&records, now, Duration::hours(24))?;
//! let stats = BucketStatistics::from_classification(&classified);
//! assert_eq!(stats.imminent, 1);
//! assert_eq!(stats.upcoming, 1);
//! # Ok::<(), ClassifierError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enumerations and configuration
//! - [`events`]: Event records and the event source loaders
//! - [`classifier`]: Classification, filtering, views, statistics, errors and logging
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod classifier;
pub mod events;
pub mod types;

// Core types and identifiers
pub use types::{
    Bucket, CategoryFilter, ClassifierConfig, ConfigError, ConfigValidationError, EventId,
    LifecycleStatus, OutputFormat, OwnerId, SortKey,
};

// Records and loading
pub use events::{load_records, Classifiable, EventRecord, OwnerRef, SourceError};

// Classification
pub use classifier::{
    available_categories, classify, filter_and_sort, filter_and_sort_by_name, BucketStatistics,
    ClassificationView, ClassifiedEvents, ClassifierError, ClassifierResult, EventClassifier,
    EventView, LoggingConfig,
};
