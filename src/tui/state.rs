use crate::model::{Region, REGION_CODES};
use crate::report::RegionReport;
use std::time::{Duration, Instant};

const STATUS_TTL: Duration = Duration::from_secs(3);

pub struct TuiState {
    /// Index into [`REGION_CODES`].
    pub selected: usize,
    pub report: Option<RegionReport>,
    pub error: Option<String>,
    pub show_help: bool,
    pub table_offset: usize,
    pub status_message: Option<(String, Instant)>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self {
            selected: 0,
            report: None,
            error: None,
            show_help: false,
            table_offset: 0,
            status_message: None,
        }
    }
}

impl TuiState {
    pub fn region_count(&self) -> usize {
        REGION_CODES.len()
    }

    pub fn selected_region(&self) -> Option<Region> {
        Region::all().nth(self.selected)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Status line text while it is still fresh.
    pub fn status(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, at)| at.elapsed() < STATUS_TTL)
            .map(|(msg, _)| msg.as_str())
    }

    pub fn observation_count(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.observations.len())
    }
}
