//! Collapses raw observations into dated update events with gaps and weekdays.

use crate::model::{AggregatedObservation, CommitterCategory, Observation};
use crate::util::weekday_name;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Groups `observations` by (date, committer), sorted by date, and measures
/// each row's gap against the row before it on the merged timeline. Rows of
/// one category therefore measure time since the previous update of any
/// category. The first row has nothing to measure against and is dropped, so
/// fewer than two distinct rows yield an empty result.
pub fn aggregate(observations: &[Observation]) -> Vec<AggregatedObservation> {
    let mut groups: BTreeMap<(NaiveDate, CommitterCategory), usize> = BTreeMap::new();
    for obs in observations {
        *groups.entry((obs.date, obs.committer)).or_insert(0) += 1;
    }

    let mut rows = Vec::with_capacity(groups.len().saturating_sub(1));
    let mut previous: Option<NaiveDate> = None;

    for ((date, committer), count) in groups {
        if let Some(prev) = previous {
            rows.push(AggregatedObservation {
                date,
                committer,
                count,
                gap_days: (date - prev).num_days(),
                weekday: weekday_name(date).to_string(),
            });
        }
        previous = Some(date);
    }

    rows
}

/// Rows made by `category`, order preserved.
pub fn by_committer(
    rows: &[AggregatedObservation],
    category: CommitterCategory,
) -> Vec<AggregatedObservation> {
    rows.iter()
        .filter(|row| row.committer == category)
        .cloned()
        .collect()
}
