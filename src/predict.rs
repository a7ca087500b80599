//! Next-update projection from the mean gap between updates.

use crate::error::{CadenceError, Result};
use crate::model::{AggregatedObservation, Prediction, PredictionStatus};
use crate::util::floor_days;
use chrono::{Local, NaiveDateTime, NaiveTime, TimeDelta};

/// Source of "now" for the predictor.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock in the local zone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Projects the next update as the last row's date plus the mean gap over
/// all rows and classifies it against `now`.
///
/// More than one day in the past is overdue by the absolute number of whole
/// days. Anything later is upcoming in whole days plus one, so an update due
/// later today reads as "in 1 day".
pub fn predict(rows: &[AggregatedObservation], now: NaiveDateTime) -> Result<Prediction> {
    if rows.len() < 2 {
        return Err(CadenceError::InsufficientHistory { rows: rows.len() });
    }
    let last = &rows[rows.len() - 1];

    let total_gap: TimeDelta = rows.iter().map(AggregatedObservation::gap).sum();
    let mean_gap_millis = total_gap.num_milliseconds() / rows.len() as i64;
    let mean_gap = TimeDelta::milliseconds(mean_gap_millis);

    let next_expected = last.date.and_time(NaiveTime::MIN) + mean_gap;
    let delta = next_expected - now;

    let (status, days) = if delta < -TimeDelta::days(1) {
        (PredictionStatus::Overdue, floor_days(delta).abs())
    } else {
        (PredictionStatus::Upcoming, floor_days(delta) + 1)
    };

    Ok(Prediction {
        next_expected,
        mean_gap_millis,
        delta_seconds: delta.num_seconds(),
        status,
        days,
    })
}
