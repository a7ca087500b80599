//! Per-region report: extraction through prediction for one selection.

use crate::aggregate::aggregate;
use crate::cache::{Cache, CacheKey};
use crate::config::Settings;
use crate::error::{CadenceError, Result};
use crate::extract::extract;
use crate::git::CommitSource;
use crate::histogram::breakdown;
use crate::model::{AggregatedObservation, Observation, Prediction, Region, WeekdayBreakdown, Window};
use crate::predict::{predict, Clock};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionReport {
    pub region: Region,
    pub window: Window,
    /// Raw commits seen before aggregation.
    pub commits: usize,
    pub observations: Vec<AggregatedObservation>,
    pub histogram: Vec<WeekdayBreakdown>,
    /// `None` when there are too few updates to project from.
    pub prediction: Option<Prediction>,
}

pub struct Analyzer<S: CommitSource> {
    source: S,
    cache: Cache,
    settings: Settings,
}

impl<S: CommitSource> Analyzer<S> {
    pub fn new(source: S, settings: Settings) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            source,
            cache: Cache::new()?,
            settings,
        })
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Observations for `region` within `window`, extracted once per key.
    pub fn observations(&mut self, region: Region, window: &Window) -> Result<Vec<Observation>> {
        let key = CacheKey::new(region, window.start);
        if let Some(cached) = self.cache.get(&key)? {
            return Ok(cached);
        }

        let file_path = self.settings.file_path(region);
        let observations = extract(
            &self.source,
            &file_path,
            region,
            window.start,
            &self.settings.scraper_name,
        )?;
        self.cache.store(&key, &observations)?;
        Ok(observations)
    }

    pub fn report(&mut self, region: Region, clock: &dyn Clock) -> Result<RegionReport> {
        let now = clock.now();
        let window = Window::trailing(now, self.settings.weeks)?;
        info!(
            "Computing report for {} over {} weeks since {}",
            region, window.weeks, window.start
        );

        let raw = self.observations(region, &window)?;
        let observations = aggregate(&raw);
        let histogram = breakdown(&observations);

        let prediction = match predict(&observations, now) {
            Ok(prediction) => Some(prediction),
            Err(CadenceError::InsufficientHistory { rows }) => {
                debug!("No prediction for {}: only {} aggregated rows", region, rows);
                None
            }
            Err(e) => return Err(e),
        };

        Ok(RegionReport {
            region,
            window,
            commits: raw.len(),
            observations,
            histogram,
            prediction,
        })
    }

    /// Forgets the cached extraction for the current window, then recomputes.
    pub fn refresh(&mut self, region: Region, clock: &dyn Clock) -> Result<RegionReport> {
        let window = Window::trailing(clock.now(), self.settings.weeks)?;
        self.cache.invalidate(&CacheKey::new(region, window.start))?;
        self.report(region, clock)
    }
}
