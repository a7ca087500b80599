use crate::error::CadenceError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const SCHEMA_VERSION: u32 = 1;

/// Canton codes, one historical-data file each.
pub const REGION_CODES: [&str; 26] = [
    "AG", "AI", "AR", "BE", "BL", "BS", "FR", "GE", "GL", "GR", "JU", "LU", "NE", "NW", "OW",
    "SG", "SH", "SO", "SZ", "TG", "TI", "UR", "VD", "VS", "ZG", "ZH",
];

/// A validated region code from [`REGION_CODES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Region(&'static str);

impl Region {
    pub fn all() -> impl Iterator<Item = Region> {
        REGION_CODES.into_iter().map(Region)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// Position in [`REGION_CODES`], used for list selection.
    pub fn index(&self) -> usize {
        REGION_CODES
            .iter()
            .position(|code| *code == self.0)
            .unwrap_or(0)
    }
}

impl FromStr for Region {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        REGION_CODES
            .into_iter()
            .find(|code| *code == wanted)
            .map(Region)
            .ok_or_else(|| CadenceError::UnknownRegion(s.to_string()))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

impl<'de> Deserialize<'de> for Region {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// Who made a commit. Variant order follows label order, which is the
/// tie-break for rows sharing a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CommitterCategory {
    Other,
    Scraper,
}

impl CommitterCategory {
    /// Exact, case-sensitive match against the automation identity.
    pub fn classify(committer_name: &str, automation_identity: &str) -> Self {
        if committer_name == automation_identity {
            CommitterCategory::Scraper
        } else {
            CommitterCategory::Other
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommitterCategory::Other => "Other",
            CommitterCategory::Scraper => "Scraper",
        }
    }
}

impl fmt::Display for CommitterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    pub region: Region,
    pub date: NaiveDate,
    pub committer: CommitterCategory,
}

/// One row per distinct (date, committer) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedObservation {
    pub date: NaiveDate,
    pub committer: CommitterCategory,
    pub count: usize,
    /// Days since the previous row of the merged timeline, whatever its category.
    pub gap_days: i64,
    pub weekday: String,
}

impl AggregatedObservation {
    pub fn gap(&self) -> TimeDelta {
        TimeDelta::days(self.gap_days)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCount {
    pub weekday: String,
    pub weekday_count: usize,
}

/// Both committer histograms joined on weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayBreakdown {
    pub weekday: String,
    pub scraper: usize,
    pub other: usize,
}

impl WeekdayBreakdown {
    pub fn total(&self) -> usize {
        self.scraper + self.other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionStatus {
    Overdue,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub next_expected: NaiveDateTime,
    pub mean_gap_millis: i64,
    pub delta_seconds: i64,
    pub status: PredictionStatus,
    /// Days overdue, or days until the expected update.
    pub days: i64,
}

impl Prediction {
    pub fn next_expected_date(&self) -> NaiveDate {
        self.next_expected.date()
    }

    pub fn mean_gap(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.mean_gap_millis)
    }
}

/// Trailing span of history under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    pub start: NaiveDate,
    pub weeks: u32,
}

impl Window {
    /// Starts `weeks` whole weeks before `now`; a span reaching past the
    /// calendar's range is `InvalidConfig`.
    pub fn trailing(now: NaiveDateTime, weeks: u32) -> Result<Self, CadenceError> {
        let start = TimeDelta::try_days(i64::from(weeks) * 7)
            .and_then(|span| now.checked_sub_signed(span))
            .ok_or_else(|| {
                CadenceError::InvalidConfig(format!(
                    "a window of {weeks} weeks reaches outside the supported date range"
                ))
            })?
            .date();
        Ok(Self { start, weeks })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub region: Region,
    pub since: NaiveDate,
    pub weeks: u32,
    pub commits: usize,
    pub histogram: Vec<WeekdayBreakdown>,
    pub prediction: Option<Prediction>,
    pub observations: Vec<AggregatedObservation>,
}
