//! Category filtering and stable sorting of a bucket

use std::cmp::Ordering;

use tracing::debug;

use super::error::ClassifierResult;
use crate::events::Classifiable;
use crate::types::{CategoryFilter, SortKey};

fn compare<T: Classifiable>(a: &T, b: &T, sort_key: SortKey) -> Ordering {
    match sort_key {
        SortKey::StartTime => a.start_time().cmp(&b.start_time()),
        SortKey::ParticipantCount => b.participant_count().cmp(&a.participant_count()),
    }
}

/// Keep the records matching `category_filter`, ordered by `sort_key`
///
/// Start time sorts ascending, participant count descending. The sort is
/// stable, so records with equal keys keep their order from `bucket`.
pub fn filter_and_sort<'a, T: Classifiable>(
    bucket: &[&'a T],
    category_filter: &CategoryFilter,
    sort_key: SortKey,
) -> Vec<&'a T> {
    let mut selected: Vec<&'a T> = bucket
        .iter()
        .copied()
        .filter(|record| category_filter.matches(record.category()))
        .collect();
    selected.sort_by(|a, b| compare(*a, *b, sort_key));

    debug!(
        kept = selected.len(),
        dropped = bucket.len() - selected.len(),
        filter = %category_filter,
        sort_key = %sort_key,
        "Filtered and sorted bucket"
    );
    selected
}

/// Same as [`filter_and_sort`], parsing the category and sort key from strings
pub fn filter_and_sort_by_name<'a, T: Classifiable>(
    bucket: &[&'a T],
    category: Option<&str>,
    sort_key: &str,
) -> ClassifierResult<Vec<&'a T>> {
    let sort_key = sort_key.parse::<SortKey>()?;
    Ok(filter_and_sort(bucket, &CategoryFilter::from_option(category), sort_key))
}
