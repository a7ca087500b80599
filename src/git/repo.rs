use super::{CommitRecord, CommitSource};
use crate::error::{CadenceError, Result};
use crate::util::local_date;
use chrono::{DateTime, FixedOffset, NaiveDate};
use gix::{ObjectId, Repository};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
    progress: bool,
}

impl GitRepo {
    /// Clone `remote` into `path` unless something already lives there.
    pub fn ensure_present(path: &Path, remote: &str, offline: bool, progress: bool) -> Result<()> {
        if path.exists() {
            debug!("Using existing checkout at {:?}", path);
            return Ok(());
        }
        if offline {
            return Err(CadenceError::RepositoryUnavailable(format!(
                "no checkout at {} and cloning is disabled",
                path.display()
            )));
        }

        info!("Cloning {} into {:?}", remote, path);
        let pb = spinner(progress);
        pb.set_message(format!("Cloning {remote}..."));

        let unavailable =
            |e: &dyn std::fmt::Display| CadenceError::RepositoryUnavailable(format!("clone of {remote} failed: {e}"));

        let mut prepare = gix::prepare_clone(remote, path).map_err(|e| unavailable(&e))?;
        let (mut checkout, _) = prepare
            .fetch_then_checkout(gix::progress::Discard, &gix::interrupt::IS_INTERRUPTED)
            .map_err(|e| unavailable(&e))?;
        checkout
            .main_worktree(gix::progress::Discard, &gix::interrupt::IS_INTERRUPTED)
            .map_err(|e| unavailable(&e))?;

        pb.finish_with_message("Repository cloned");
        Ok(())
    }

    /// Open the checkout rooted exactly at `path` for reading. Enclosing
    /// repositories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let requested = path.as_ref();
        let repo = gix::open(requested).map_err(|e| {
            CadenceError::RepositoryUnavailable(format!("cannot open {}: {e}", requested.display()))
        })?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        debug!("Opened git repository at {:?}", path);

        Ok(Self {
            repo,
            path,
            progress: false,
        })
    }

    /// Show a spinner while walking history.
    pub fn with_progress(mut self, enabled: bool) -> Self {
        self.progress = enabled;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn blob_at(&self, commit_id: ObjectId, file_path: &str) -> Result<Option<ObjectId>> {
        let tree = self.repo.find_commit(commit_id)?.tree()?;
        let entry = tree.lookup_entry_by_path(file_path)?;
        Ok(entry.map(|e| e.object_id()))
    }

    /// Whether the commit touches the path, and which parents the walk
    /// continues through.
    ///
    /// A commit whose blob matches some parent's is TREESAME to it: it does
    /// not touch the path and only the first such parent is followed, as in
    /// git's default history simplification. Otherwise every parent is.
    fn simplify(
        &self,
        commit_id: ObjectId,
        parents: Vec<ObjectId>,
        file_path: &str,
    ) -> Result<(bool, Vec<ObjectId>)> {
        let current = self.blob_at(commit_id, file_path)?;
        if parents.is_empty() {
            return Ok((current.is_some(), parents));
        }
        for parent_id in &parents {
            if self.blob_at(*parent_id, file_path)? == current {
                return Ok((false, vec![*parent_id]));
            }
        }
        Ok((true, parents))
    }
}

impl CommitSource for GitRepo {
    fn commits_touching(&self, file_path: &str, since: NaiveDate) -> Result<Vec<CommitRecord>> {
        let mut head = self.repo.head()?;
        let head_commit = head.peel_to_commit_in_place()?;

        let mut records = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([head_commit.id]);

        let pb = spinner(self.progress);
        pb.set_message(format!("Walking history of {file_path}..."));

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let committed_at = commit_timestamp(&commit)?;

            // Older ancestors are not expanded, as with `git rev-list --since`.
            if local_date(&committed_at) < since {
                continue;
            }

            let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.into()).collect();
            let (touched, follow) = self.simplify(commit_id, parents, file_path)?;

            if touched {
                records.push(CommitRecord {
                    committer_name: commit.committer()?.name.to_string(),
                    committed_at,
                });
            }

            for pid in follow {
                stack.push_back(pid);
            }

            pb.inc(1);
        }

        pb.finish_and_clear();
        records.sort_by(|a, b| b.committed_at.cmp(&a.committed_at));
        debug!(
            "Found {} commits touching {} since {}",
            records.len(),
            file_path,
            since
        );
        Ok(records)
    }
}

fn commit_timestamp(commit: &gix::Commit<'_>) -> Result<DateTime<FixedOffset>> {
    let time = commit.time()?;
    let offset = FixedOffset::east_opt(time.offset)
        .ok_or_else(|| CadenceError::InvalidDate(format!("Invalid offset: {}", time.offset)))?;
    DateTime::from_timestamp(time.seconds, 0)
        .map(|utc| utc.with_timezone(&offset))
        .ok_or_else(|| CadenceError::InvalidDate(format!("Invalid timestamp: {}", time.seconds)))
}

fn spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb
}
