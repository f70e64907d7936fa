//! Core types and identifiers for the event classifier
//!
//! This module contains identifiers, enumerations and configuration structures
//! used throughout the crate.
//!
//! # Overview
//!
//! - **Identifiers**: opaque event and owner identifiers
//! - **Enums**: lifecycle statuses, buckets, sort keys and category filters
//! - **Configuration**: classification settings with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use event_classifier::types::*;
//!
//! let id = EventId::new("evt-1");
//! assert_eq!(id.as_str(), "evt-1");
//!
//! let key: SortKey = "participantCount".parse().unwrap();
//! assert_eq!(key, SortKey::ParticipantCount);
//!
//! let config = ClassifierConfig {
//!     imminence_window_hours: 48,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
