//! Event classification, filtering and sorting
//!
//! This module contains the classifier, the bucket filter/sort step, the view
//! projection, statistics, error handling and logging setup.
//!
//! # Overview
//!
//! - **EventClassifier / classify**: partitions records into upcoming, imminent and past
//! - **filter_and_sort**: category filter plus stable sort of one bucket
//! - **ClassificationView**: serializable rows with the derived `editable` flag
//! - **BucketStatistics**: per-bucket and per-category counts
//! - **ClassifierError**: invalid record and invalid sort key errors
//!
//! # Usage Example
//!
//! ```rust
//! use event_classifier::classifier::*;
//! use event_classifier::events::*;
//! use event_classifier::types::*;
//! use chrono::{Duration, TimeZone, Utc};
//!
//! let now = Utc.with_ymd_and_hms(2024, 2, 22, 0, 0, 0).unwrap();
//! let owner = OwnerRef::new(OwnerId::new("u1"), "Ferris");
//! let records = vec![
//!     EventRecord::new("Lunch talk", "", now + Duration::hours(12), "Technology", owner.clone()),
//!     EventRecord::new("Hackathon", "", now + Duration::days(3), "Technology", owner),
//! ];
//!
//! let classified = EventClassifier::default().classify_at(&records, now)?;
//! assert_eq!(classified.imminent().len(), 1);
//! assert_eq!(classified.upcoming().len(), 1);
//!
//! let sorted = filter_and_sort(classified.upcoming(), &CategoryFilter::All, SortKey::StartTime);
//! assert!(classified.is_editable(&sorted[0].id));
//! # Ok::<(), ClassifierError>(())
//! ```

pub mod classify;
pub mod error;
pub mod filter;
pub mod logging;
pub mod statistics;
pub mod view;

// Re-export all public types for convenience
pub use classify::*;
pub use error::*;
pub use filter::*;
pub use logging::*;
pub use statistics::*;
pub use view::*;
