//! Event records and the narrow classification shape
//!
//! [`EventRecord`] is the full record handed over by the event source.
//! The classifier only reads it through [`Classifiable`].

use chrono::{DateTime, Duration, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

use crate::types::{parse_timestamp, EventId, LifecycleStatus, OwnerId};

/// Fields the classifier needs from a record
pub trait Classifiable {
    /// Unique identifier of the record
    fn event_id(&self) -> &EventId;
    /// When the event begins, if the source supplied it
    fn start_time(&self) -> Option<DateTime<Utc>>;
    /// Lifecycle status, if the source supplied it
    fn lifecycle_status(&self) -> Option<LifecycleStatus>;
    /// Category used for filtering
    fn category(&self) -> &str;
    /// Current number of signups
    fn participant_count(&self) -> u32;
}

/// Weak reference to the user or organization that created an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRef {
    /// Owner identifier
    pub id: OwnerId,
    /// Name shown next to the event
    pub display_name: String,
    /// Avatar image, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl OwnerRef {
    /// Create an owner reference without an avatar
    pub fn new(id: OwnerId, display_name: impl Into<String>) -> Self {
        Self { id, display_name: display_name.into(), avatar_url: None }
    }
}

/// An event as supplied by the event source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Stable unique identifier
    pub id: EventId,
    /// Display title
    pub title: String,
    /// Display description
    pub description: String,
    /// When the event begins
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub start_time: Option<DateTime<Utc>>,
    /// When the event ends (display only)
    #[serde(
        default,
        deserialize_with = "deserialize_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<DateTime<Utc>>,
    /// Category from an open set, e.g. "Technology"
    pub category: String,
    /// Venue (display only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Current signups
    #[serde(default)]
    pub participant_count: u32,
    /// Maximum signups; `None` means unlimited
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Owner-controlled lifecycle state
    #[serde(default)]
    pub lifecycle_status: Option<LifecycleStatus>,
    /// Creator of the event
    #[serde(rename = "ownerRef")]
    pub owner: OwnerRef,
}

// `null` stays `None` so the classifier can report the missing field.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|value| {
            parse_timestamp(&value).ok_or_else(|| {
                de::Error::custom(format!(
                    "invalid timestamp '{}': expected RFC 3339 or YYYY-MM-DDTHH:MM:SS",
                    value
                ))
            })
        })
        .transpose()
}

impl EventRecord {
    /// Create an upcoming record with a fresh id and no signups
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        start_time: DateTime<Utc>,
        category: impl Into<String>,
        owner: OwnerRef,
    ) -> Self {
        Self {
            id: EventId::generate(),
            title: title.into(),
            description: description.into(),
            start_time: Some(start_time),
            end_time: None,
            category: category.into(),
            location: None,
            participant_count: 0,
            capacity: None,
            lifecycle_status: Some(LifecycleStatus::Upcoming),
            owner,
        }
    }

    /// Replace the id
    pub fn with_id(mut self, id: impl Into<EventId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the lifecycle status
    pub fn with_status(mut self, status: LifecycleStatus) -> Self {
        self.lifecycle_status = Some(status);
        self
    }

    /// Set the participant count
    pub fn with_participants(mut self, count: u32) -> Self {
        self.participant_count = count;
        self
    }

    /// Set the capacity
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Open spots left, or `None` when capacity is unlimited
    pub fn remaining_capacity(&self) -> Option<u32> {
        self.capacity.map(|cap| cap.saturating_sub(self.participant_count))
    }

    /// Whether no spots are left
    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == Some(0)
    }

    /// Time left until the event starts; `None` once started or when no start time is known
    pub fn time_until_start(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.start_time.filter(|start| *start > now).map(|start| start - now)
    }
}

impl Classifiable for EventRecord {
    fn event_id(&self) -> &EventId {
        &self.id
    }

    fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    fn lifecycle_status(&self) -> Option<LifecycleStatus> {
        self.lifecycle_status
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn participant_count(&self) -> u32 {
        self.participant_count
    }
}
