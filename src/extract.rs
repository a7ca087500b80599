//! Commit history extraction for a single region file.

use crate::error::Result;
use crate::git::CommitSource;
use crate::model::{CommitterCategory, Observation, Region};
use crate::util::local_date;
use chrono::NaiveDate;
use tracing::debug;

/// One observation per commit that touched `file_path` on or after `since`,
/// in the order the source returns them.
pub fn extract<S: CommitSource>(
    source: &S,
    file_path: &str,
    region: Region,
    since: NaiveDate,
    automation_identity: &str,
) -> Result<Vec<Observation>> {
    let records = source.commits_touching(file_path, since)?;

    let observations: Vec<Observation> = records
        .iter()
        .map(|record| Observation {
            region,
            date: local_date(&record.committed_at),
            committer: CommitterCategory::classify(&record.committer_name, automation_identity),
        })
        .filter(|obs| obs.date >= since)
        .collect();

    debug!(
        "Extracted {} observations for {} from {}",
        observations.len(),
        region,
        file_path
    );
    Ok(observations)
}
