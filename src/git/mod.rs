//! Repository provider: acquiring a checkout and walking the history of one path.

pub mod repo;

pub use repo::GitRepo;

use crate::error::Result;
use chrono::{DateTime, FixedOffset, NaiveDate};

/// One commit that changed the inspected file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Committer display name.
    pub committer_name: String,
    pub committed_at: DateTime<FixedOffset>,
}

/// Read access to the commits that touched a path.
pub trait CommitSource {
    /// Commits touching `file_path` whose committer-local date is on or after
    /// `since`, newest first. A path that never existed yields no records.
    fn commits_touching(&self, file_path: &str, since: NaiveDate) -> Result<Vec<CommitRecord>>;
}

impl<T: CommitSource + ?Sized> CommitSource for &T {
    fn commits_touching(&self, file_path: &str, since: NaiveDate) -> Result<Vec<CommitRecord>> {
        (**self).commits_touching(file_path, since)
    }
}
