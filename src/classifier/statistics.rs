//! Bucket statistics
//!
//! Counts per bucket and per category for a classification, plus a plain-text
//! summary used by the command-line report.

use std::collections::BTreeMap;

use serde::Serialize;

use super::classify::ClassifiedEvents;
use crate::events::Classifiable;
use crate::types::Bucket;

/// Counts derived from a classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BucketStatistics {
    /// Records in the upcoming bucket
    pub upcoming: usize,
    /// Records in the imminent bucket
    pub imminent: usize,
    /// Records in the past bucket
    pub past: usize,
    /// Cancelled records left out of every bucket
    pub excluded: usize,
    /// Classified records per category
    pub per_category: BTreeMap<String, usize>,
}

impl BucketStatistics {
    /// Count the buckets of a classification
    pub fn from_classification<T: Classifiable>(classified: &ClassifiedEvents<'_, T>) -> Self {
        let mut per_category = BTreeMap::new();
        for bucket in Bucket::ALL {
            for record in classified.get(bucket) {
                *per_category.entry(record.category().to_string()).or_insert(0) += 1;
            }
        }

        Self {
            upcoming: classified.upcoming().len(),
            imminent: classified.imminent().len(),
            past: classified.past().len(),
            excluded: classified.excluded().len(),
            per_category,
        }
    }

    /// Count for one bucket
    pub fn count(&self, bucket: Bucket) -> usize {
        match bucket {
            Bucket::Upcoming => self.upcoming,
            Bucket::Imminent => self.imminent,
            Bucket::Past => self.past,
        }
    }

    /// All input records, excluded ones included
    pub fn total_records(&self) -> usize {
        self.upcoming + self.imminent + self.past + self.excluded
    }

    /// Records the owner may still edit
    pub fn editable_count(&self) -> usize {
        self.upcoming
    }

    /// Share of input records in a bucket, as a percentage
    pub fn percentage(&self, bucket: Bucket) -> f64 {
        match self.total_records() {
            0 => 0.0,
            total => self.count(bucket) as f64 / total as f64 * 100.0,
        }
    }

    /// Plain-text summary
    pub fn summary(&self) -> String {
        let mut output = String::new();

        output.push_str("Event Classification Summary\n");
        output.push_str("============================\n");
        output.push_str(&format!("   Total Records: {}\n", self.total_records()));
        for bucket in Bucket::ALL {
            output.push_str(&format!(
                "   {}: {} ({:.1}%)\n",
                bucket,
                self.count(bucket),
                self.percentage(bucket)
            ));
        }
        output.push_str(&format!("   Cancelled (hidden): {}\n", self.excluded));
        output.push_str(&format!("   Editable: {}\n", self.editable_count()));

        if !self.per_category.is_empty() {
            output.push_str("\nBy Category:\n");
            for (category, count) in &self.per_category {
                output.push_str(&format!("   {}: {}\n", category, count));
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify::classify;
    use crate::events::{EventRecord, OwnerRef};
    use crate::types::{LifecycleStatus, OwnerId};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_statistics_from_classification() {
        let now = Utc.with_ymd_and_hms(2024, 2, 22, 0, 0, 0).unwrap();
        let owner = OwnerRef::new(OwnerId::new("u"), "U");
        let records = vec![
            EventRecord::new("a", "d", now + Duration::days(2), "Music", owner.clone()),
            EventRecord::new("b", "d", now + Duration::hours(2), "Music", owner.clone()),
            EventRecord::new("c", "d", now - Duration::hours(2), "Sports", owner.clone()),
            EventRecord::new("d", "d", now + Duration::days(2), "Sports", owner)
                .with_status(LifecycleStatus::Cancelled),
        ];
        let classified = classify(&records, now, Duration::hours(24)).unwrap();
        let stats = BucketStatistics::from_classification(&classified);

        assert_eq!(stats.upcoming, 1);
        assert_eq!(stats.imminent, 1);
        assert_eq!(stats.past, 1);
        assert_eq!(stats.excluded, 1);
        assert_eq!(stats.total_records(), 4);
        assert_eq!(stats.editable_count(), 1);
        // Cancelled records do not count towards categories
        assert_eq!(stats.per_category.get("Music"), Some(&2));
        assert_eq!(stats.per_category.get("Sports"), Some(&1));
        assert_eq!(stats.percentage(Bucket::Past), 25.0);
    }

    #[test]
    fn test_empty_statistics() {
        let stats = BucketStatistics::default();
        assert_eq!(stats.total_records(), 0);
        assert_eq!(stats.percentage(Bucket::Upcoming), 0.0);
        assert!(!stats.summary().contains("By Category"));
    }

    #[test]
    fn test_summary_lists_buckets() {
        let stats = BucketStatistics {
            upcoming: 2,
            imminent: 1,
            past: 1,
            excluded: 0,
            per_category: BTreeMap::from([("Technology".to_string(), 4)]),
        };
        let summary = stats.summary();
        assert!(summary.contains("Total Records: 4"));
        assert!(summary.contains("Upcoming: 2 (50.0%)"));
        assert!(summary.contains("Imminent: 1 (25.0%)"));
        assert!(summary.contains("Technology: 4"));
    }
}
