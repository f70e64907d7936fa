//! Serializable projection of a classification for the view layer

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::classify::ClassifiedEvents;
use super::filter::filter_and_sort;
use crate::events::EventRecord;
use crate::types::{Bucket, CategoryFilter, EventId, LifecycleStatus, SortKey};

/// One row handed to the view layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    /// Record id
    pub id: EventId,
    /// Display title
    pub title: String,
    /// Category
    pub category: String,
    /// Start instant
    pub start_time: Option<DateTime<Utc>>,
    /// Current signups
    pub participant_count: u32,
    /// Maximum signups, if limited
    pub capacity: Option<u32>,
    /// Open spots, if limited
    pub remaining_capacity: Option<u32>,
    /// Lifecycle status
    pub status: Option<LifecycleStatus>,
    /// Bucket the record was placed in
    pub bucket: Bucket,
    /// Whether the owner may still edit the record
    pub editable: bool,
}

impl EventView {
    /// Project a record placed in `bucket`
    pub fn new(record: &EventRecord, bucket: Bucket) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            category: record.category.clone(),
            start_time: record.start_time,
            participant_count: record.participant_count,
            capacity: record.capacity,
            remaining_capacity: record.remaining_capacity(),
            status: record.lifecycle_status,
            bucket,
            editable: bucket.is_editable(),
        }
    }
}

/// The three filtered and sorted buckets, ready to render
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationView {
    /// Reference instant
    pub now: DateTime<Utc>,
    /// Imminence window in seconds
    pub imminence_window_seconds: i64,
    /// Category filter applied to each bucket
    pub category: String,
    /// Sort key applied to each bucket
    pub sort_key: SortKey,
    /// Upcoming rows
    pub upcoming: Vec<EventView>,
    /// Imminent rows
    pub imminent: Vec<EventView>,
    /// Past rows
    pub past: Vec<EventView>,
}

impl ClassificationView {
    /// Apply the same filter and sort key to every bucket and project the rows
    pub fn build(
        classified: &ClassifiedEvents<'_, EventRecord>,
        category_filter: &CategoryFilter,
        sort_key: SortKey,
    ) -> Self {
        let rows = |bucket: Bucket| -> Vec<EventView> {
            filter_and_sort(classified.get(bucket), category_filter, sort_key)
                .into_iter()
                .map(|record| EventView::new(record, bucket))
                .collect()
        };

        Self {
            now: classified.now(),
            imminence_window_seconds: classified.imminence_window().num_seconds(),
            category: category_filter.to_string(),
            sort_key,
            upcoming: rows(Bucket::Upcoming),
            imminent: rows(Bucket::Imminent),
            past: rows(Bucket::Past),
        }
    }

    /// Number of rows across all buckets
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.imminent.len() + self.past.len()
    }

    /// Whether every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
