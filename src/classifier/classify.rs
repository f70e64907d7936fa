//! Time-bucket classification
//!
//! Partitions records into upcoming, imminent and past buckets relative to a
//! reference instant. Cancelled records are set aside explicitly so callers can
//! account for every input record.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

use super::error::{ClassifierError, ClassifierResult};
use crate::events::Classifiable;
use crate::types::{Bucket, EventId, LifecycleStatus, DEFAULT_IMMINENCE_WINDOW_HOURS};

/// Result of classifying a slice of records
///
/// Every input record is referenced from exactly one of `upcoming`, `imminent`,
/// `past` or `excluded`, and each list keeps input order.
#[derive(Debug)]
pub struct ClassifiedEvents<'a, T> {
    now: DateTime<Utc>,
    imminence_window: Duration,
    upcoming: Vec<&'a T>,
    imminent: Vec<&'a T>,
    past: Vec<&'a T>,
    excluded: Vec<&'a T>,
}

impl<'a, T: Classifiable> ClassifiedEvents<'a, T> {
    fn empty(now: DateTime<Utc>, imminence_window: Duration) -> Self {
        Self {
            now,
            imminence_window,
            upcoming: Vec::new(),
            imminent: Vec::new(),
            past: Vec::new(),
            excluded: Vec::new(),
        }
    }

    fn push(&mut self, bucket: Option<Bucket>, record: &'a T) {
        match bucket {
            Some(Bucket::Upcoming) => self.upcoming.push(record),
            Some(Bucket::Imminent) => self.imminent.push(record),
            Some(Bucket::Past) => self.past.push(record),
            None => self.excluded.push(record),
        }
    }

    /// Reference instant used for this classification
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Imminence window used for this classification
    pub fn imminence_window(&self) -> Duration {
        self.imminence_window
    }

    /// Records starting after the imminence window
    pub fn upcoming(&self) -> &[&'a T] {
        &self.upcoming
    }

    /// Records starting within the imminence window
    pub fn imminent(&self) -> &[&'a T] {
        &self.imminent
    }

    /// Records that already started or were completed
    pub fn past(&self) -> &[&'a T] {
        &self.past
    }

    /// Cancelled records, kept out of every bucket
    pub fn excluded(&self) -> &[&'a T] {
        &self.excluded
    }

    /// Records in the given bucket
    pub fn get(&self, bucket: Bucket) -> &[&'a T] {
        match bucket {
            Bucket::Upcoming => self.upcoming(),
            Bucket::Imminent => self.imminent(),
            Bucket::Past => self.past(),
        }
    }

    /// Number of records placed in a bucket
    pub fn len_classified(&self) -> usize {
        self.upcoming.len() + self.imminent.len() + self.past.len()
    }

    /// Number of input records, excluded ones included
    pub fn total(&self) -> usize {
        self.len_classified() + self.excluded.len()
    }

    /// Bucket holding the record with this id, or `None` if it is excluded or unknown
    pub fn bucket_of(&self, id: &EventId) -> Option<Bucket> {
        Bucket::ALL
            .into_iter()
            .find(|bucket| self.get(*bucket).iter().any(|record| record.event_id() == id))
    }

    /// Whether the owner may still edit the record with this id
    pub fn is_editable(&self, id: &EventId) -> bool {
        self.bucket_of(id).is_some_and(Bucket::is_editable)
    }
}

/// Place one record; `None` means the record is excluded from every bucket
///
/// Only `Upcoming` records are split between upcoming and imminent by the
/// window. As a policy, an `Active` record with a future start goes to
/// imminent however far out it starts: it is live, so it must not be editable,
/// and every non-cancelled record still lands in a bucket.
pub fn bucket_for(
    start_time: DateTime<Utc>,
    status: LifecycleStatus,
    now: DateTime<Utc>,
    horizon: DateTime<Utc>,
) -> Option<Bucket> {
    match status {
        LifecycleStatus::Cancelled => None,
        LifecycleStatus::Completed => Some(Bucket::Past),
        _ if start_time <= now => Some(Bucket::Past),
        LifecycleStatus::Active => Some(Bucket::Imminent),
        _ if start_time <= horizon => Some(Bucket::Imminent),
        _ => Some(Bucket::Upcoming),
    }
}

fn imminence_horizon(now: DateTime<Utc>, imminence_window: Duration) -> DateTime<Utc> {
    now.checked_add_signed(imminence_window).unwrap_or(if imminence_window < Duration::zero() {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

fn required_fields<T: Classifiable>(
    record: &T,
) -> ClassifierResult<(DateTime<Utc>, LifecycleStatus)> {
    let start_time = record
        .start_time()
        .ok_or_else(|| ClassifierError::invalid_record(record.event_id().as_str(), "startTime"))?;
    let status = record.lifecycle_status().ok_or_else(|| {
        ClassifierError::invalid_record(record.event_id().as_str(), "lifecycleStatus")
    })?;
    Ok((start_time, status))
}

/// Partition `records` into time buckets relative to `now`
///
/// Fails on the first record, in input order, that lacks a start time or a
/// lifecycle status.
#[instrument(level = "debug", skip_all, fields(records = records.len(), %now))]
pub fn classify<T: Classifiable>(
    records: &[T],
    now: DateTime<Utc>,
    imminence_window: Duration,
) -> ClassifierResult<ClassifiedEvents<'_, T>> {
    let horizon = imminence_horizon(now, imminence_window);
    let mut classified = ClassifiedEvents::empty(now, imminence_window);

    for record in records {
        let (start_time, status) = required_fields(record)?;
        classified.push(bucket_for(start_time, status, now, horizon), record);
    }

    debug!(
        upcoming = classified.upcoming.len(),
        imminent = classified.imminent.len(),
        past = classified.past.len(),
        excluded = classified.excluded.len(),
        "Classified event records"
    );
    Ok(classified)
}

/// Distinct categories across `records`, sorted, for building a filter list
pub fn available_categories<T: Classifiable>(records: &[T]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.category())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Classifier holding an imminence window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventClassifier {
    imminence_window: Duration,
}

impl EventClassifier {
    /// Create a classifier with the given imminence window
    pub fn new(imminence_window: Duration) -> Self {
        Self { imminence_window }
    }

    /// Imminence window applied by this classifier
    pub fn imminence_window(&self) -> Duration {
        self.imminence_window
    }

    /// Classify against an explicit reference instant
    pub fn classify_at<'a, T: Classifiable>(
        &self,
        records: &'a [T],
        now: DateTime<Utc>,
    ) -> ClassifierResult<ClassifiedEvents<'a, T>> {
        classify(records, now, self.imminence_window)
    }

    /// Classify against the wall clock
    pub fn classify_now<'a, T: Classifiable>(
        &self,
        records: &'a [T],
    ) -> ClassifierResult<ClassifiedEvents<'a, T>> {
        self.classify_at(records, Utc::now())
    }
}

impl Default for EventClassifier {
    fn default() -> Self {
        Self::new(Duration::hours(DEFAULT_IMMINENCE_WINDOW_HOURS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{EventRecord, OwnerRef};
    use crate::types::OwnerId;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 22, 0, 0, 0).unwrap()
    }

    fn record(id: &str, start: DateTime<Utc>, status: LifecycleStatus) -> EventRecord {
        EventRecord::new("t", "d", start, "Technology", OwnerRef::new(OwnerId::new("u"), "U"))
            .with_id(id)
            .with_status(status)
    }

    #[test]
    fn test_bucket_for_rules() {
        let now = now();
        let horizon = now + Duration::hours(24);

        assert_eq!(
            bucket_for(now + Duration::hours(1), LifecycleStatus::Upcoming, now, horizon),
            Some(Bucket::Imminent)
        );
        assert_eq!(
            bucket_for(now + Duration::days(3), LifecycleStatus::Upcoming, now, horizon),
            Some(Bucket::Upcoming)
        );
        assert_eq!(bucket_for(now, LifecycleStatus::Upcoming, now, horizon), Some(Bucket::Past));
        assert_eq!(
            bucket_for(now + Duration::days(365), LifecycleStatus::Completed, now, horizon),
            Some(Bucket::Past)
        );
        assert_eq!(
            bucket_for(now + Duration::days(3), LifecycleStatus::Cancelled, now, horizon),
            None
        );
    }

    #[test]
    fn test_active_event_is_never_editable() {
        let now = now();
        let horizon = now + Duration::hours(24);

        assert_eq!(
            bucket_for(now + Duration::days(3), LifecycleStatus::Active, now, horizon),
            Some(Bucket::Imminent)
        );
        assert_eq!(
            bucket_for(now + Duration::days(365), LifecycleStatus::Active, now, horizon),
            Some(Bucket::Imminent)
        );
        assert_eq!(
            bucket_for(now - Duration::hours(1), LifecycleStatus::Active, now, horizon),
            Some(Bucket::Past)
        );
    }

    #[test]
    fn test_missing_start_time_is_reported() {
        let mut broken = record("broken", now(), LifecycleStatus::Upcoming);
        broken.start_time = None;
        let records = vec![
            record("ok", now() + Duration::days(2), LifecycleStatus::Upcoming),
            broken,
        ];

        let err = classify(&records, now(), Duration::hours(24)).unwrap_err();
        assert_eq!(err, ClassifierError::invalid_record("broken", "startTime"));
    }

    #[test]
    fn test_missing_status_is_reported_even_for_otherwise_past_records() {
        let mut broken = record("no-status", now() - Duration::days(2), LifecycleStatus::Upcoming);
        broken.lifecycle_status = None;

        let err = classify(&[broken], now(), Duration::hours(24)).unwrap_err();
        assert_eq!(err, ClassifierError::invalid_record("no-status", "lifecycleStatus"));
    }

    #[test]
    fn test_editability_follows_bucket() {
        let records = vec![
            record("later", now() + Duration::days(5), LifecycleStatus::Upcoming),
            record("soon", now() + Duration::hours(2), LifecycleStatus::Upcoming),
            record("gone", now() - Duration::hours(2), LifecycleStatus::Upcoming),
            record("off", now() + Duration::days(5), LifecycleStatus::Cancelled),
        ];
        let classified = EventClassifier::default().classify_at(&records, now()).unwrap();

        assert!(classified.is_editable(&EventId::new("later")));
        assert!(!classified.is_editable(&EventId::new("soon")));
        assert!(!classified.is_editable(&EventId::new("gone")));
        assert!(!classified.is_editable(&EventId::new("off")));
        assert_eq!(classified.bucket_of(&EventId::new("off")), None);
        assert_eq!(classified.bucket_of(&EventId::new("missing")), None);
    }

    #[test]
    fn test_extreme_window_does_not_overflow() {
        let records = vec![record("far", now() + Duration::days(3650), LifecycleStatus::Upcoming)];
        let classified = classify(&records, now(), Duration::weeks(1_000_000_000)).unwrap();
        assert_eq!(classified.imminent().len(), 1);
    }

    #[test]
    fn test_available_categories_sorted_and_distinct() {
        let mut a = record("a", now(), LifecycleStatus::Upcoming);
        a.category = "Sports".to_string();
        let b = record("b", now(), LifecycleStatus::Upcoming);
        let mut c = record("c", now(), LifecycleStatus::Upcoming);
        c.category = "Sports".to_string();

        assert_eq!(available_categories(&[a, b, c]), vec!["Sports", "Technology"]);
    }

    #[test]
    fn test_default_window_is_24_hours() {
        assert_eq!(EventClassifier::default().imminence_window(), Duration::hours(24));
    }
}
