//! Event records and the event source
//!
//! This module holds the record shape handed to the classifier and the loaders
//! that read records from disk.
//!
//! # Overview
//!
//! - **EventRecord**: full event record, including display-only fields
//! - **Classifiable**: the narrow view of a record the classifier depends on
//! - **source**: JSON / JSON Lines loaders that enforce unique ids
//!
//! # Usage Example
//!
//! ```rust
//! use event_classifier::events::*;
//! use event_classifier::types::*;
//! use chrono::{TimeZone, Utc};
//!
//! let record = EventRecord::new(
//!     "Rust Meetup",
//!     "Monthly meetup",
//!     Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap(),
//!     "Technology",
//!     OwnerRef::new(OwnerId::new("u1"), "Ferris"),
//! )
//! .with_capacity(30);
//!
//! assert_eq!(record.remaining_capacity(), Some(30));
//! assert_eq!(record.lifecycle_status(), Some(LifecycleStatus::Upcoming));
//! ```

pub mod record;
pub mod source;

// Re-export all public types for convenience
pub use record::*;
pub use source::*;
