use crate::model::{Prediction, PredictionStatus, ReportOutput, WeekdayBreakdown, SCHEMA_VERSION};
use crate::report::RegionReport;
use anyhow::Result;
use chrono::Utc;
use console::style;
use std::path::Path;
use std::time::Duration;

const CHART_WIDTH: usize = 40;
pub const NOT_ENOUGH_DATA: &str = "Not enough data to predict the next commit";

/// Banner sentence for a prediction.
pub fn banner_text(prediction: Option<&Prediction>) -> String {
    match prediction {
        Some(p) if p.status == PredictionStatus::Overdue => format!(
            "The next commit is overdue since {} days, was expected on {}",
            p.days,
            p.next_expected_date()
        ),
        Some(p) => format!(
            "Next commit expected on {} (in {} days)",
            p.next_expected_date(),
            p.days
        ),
        None => NOT_ENOUGH_DATA.to_string(),
    }
}

/// Mean gap in humantime notation, e.g. `7days` or `1day 12h`.
pub fn mean_gap_text(prediction: &Prediction) -> String {
    let secs = u64::try_from(prediction.mean_gap_millis / 1000).unwrap_or(0);
    humantime::format_duration(Duration::from_secs(secs)).to_string()
}

/// One chart line: Scraper segment then Others segment, scaled to `max`.
pub fn bar_segments(row: &WeekdayBreakdown, max: usize) -> (String, String) {
    let scale = |n: usize| {
        if max <= CHART_WIDTH {
            n
        } else {
            (n * CHART_WIDTH + max - 1) / max
        }
    };
    ("█".repeat(scale(row.scraper)), "▒".repeat(scale(row.other)))
}

pub fn report_output(report: &RegionReport, repository_path: &Path) -> ReportOutput {
    ReportOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repository_path.to_string_lossy().to_string(),
        region: report.region,
        since: report.window.start,
        weeks: report.window.weeks,
        commits: report.commits,
        histogram: report.histogram.clone(),
        prediction: report.prediction.clone(),
        observations: report.observations.clone(),
    }
}

pub fn output_json(report: &RegionReport, repository_path: &Path) -> Result<()> {
    let output = report_output(report, repository_path);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_ndjson(report: &RegionReport) -> Result<()> {
    for row in &report.observations {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

pub fn output_report(report: &RegionReport) -> Result<()> {
    let banner = banner_text(report.prediction.as_ref());
    let banner = match report.prediction.as_ref().map(|p| p.status) {
        Some(PredictionStatus::Overdue) => style(banner).white().on_red().bold(),
        Some(PredictionStatus::Upcoming) => style(banner).white().on_blue().bold(),
        None => style(banner).yellow(),
    };

    println!(
        "{}",
        style(format!(
            "Weekday of commits over last {} weeks for {}",
            report.window.weeks, report.region
        ))
        .bold()
    );
    println!("{}", "─".repeat(60));
    println!("{banner}");
    if let Some(prediction) = &report.prediction {
        println!(
            "Mean gap between updates: {}",
            style(mean_gap_text(prediction)).cyan()
        );
    }
    println!();

    let max = report
        .histogram
        .iter()
        .map(WeekdayBreakdown::total)
        .max()
        .unwrap_or(0);

    for row in &report.histogram {
        let (scraper, other) = bar_segments(row, max);
        println!(
            "{:<10} {}{} {:>3}",
            row.weekday,
            style(scraper).green(),
            style(other).blue(),
            row.total()
        );
    }

    println!("\n{}", style("Legend").bold());
    println!("  {} Others", style("▒").blue());
    println!("  {} Scraper", style("█").green());

    println!("\nCommit data of {}:", report.region);
    if report.observations.is_empty() {
        println!("  (no commits since {})", report.window.start);
        return Ok(());
    }
    println!(
        "{:<12} {:<10} {:>6} {:>5} {:<10}",
        style("Date").bold(),
        style("Committer").bold(),
        style("Count").bold(),
        style("Gap").bold(),
        style("Weekday").bold()
    );
    for row in &report.observations {
        println!(
            "{:<12} {:<10} {:>6} {:>4}d {:<10}",
            row.date.to_string(),
            row.committer.label(),
            row.count,
            row.gap_days,
            row.weekday
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Region, Window};
    use chrono::{NaiveDate, NaiveTime, TimeDelta};
    use pretty_assertions::assert_eq;

    fn prediction(status: PredictionStatus, days: i64) -> Prediction {
        Prediction {
            next_expected: NaiveDate::from_ymd_opt(2024, 1, 22)
                .unwrap()
                .and_time(NaiveTime::MIN),
            mean_gap_millis: TimeDelta::days(7).num_milliseconds(),
            delta_seconds: 0,
            status,
            days,
        }
    }

    #[test]
    fn banner_wording() {
        assert_eq!(
            banner_text(Some(&prediction(PredictionStatus::Upcoming, 7))),
            "Next commit expected on 2024-01-22 (in 7 days)"
        );
        assert_eq!(
            banner_text(Some(&prediction(PredictionStatus::Overdue, 3))),
            "The next commit is overdue since 3 days, was expected on 2024-01-22"
        );
        assert_eq!(banner_text(None), NOT_ENOUGH_DATA);
    }

    #[test]
    fn mean_gap_uses_humantime() {
        assert_eq!(
            mean_gap_text(&prediction(PredictionStatus::Upcoming, 7)),
            "7days"
        );
    }

    #[test]
    fn bars_scale_only_when_too_wide() {
        let row = WeekdayBreakdown {
            weekday: "Monday".to_string(),
            scraper: 2,
            other: 1,
        };
        assert_eq!(bar_segments(&row, 3), ("██".to_string(), "▒".to_string()));

        let busy = WeekdayBreakdown {
            weekday: "Monday".to_string(),
            scraper: 80,
            other: 0,
        };
        let (scraper, other) = bar_segments(&busy, 80);
        assert_eq!(scraper.chars().count(), CHART_WIDTH);
        assert!(other.is_empty());
    }

    #[test]
    fn json_envelope_carries_report() {
        let report = RegionReport {
            region: "SG".parse::<Region>().unwrap(),
            window: Window {
                start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                weeks: 3,
            },
            commits: 0,
            observations: Vec::new(),
            histogram: Vec::new(),
            prediction: None,
        };
        let output = report_output(&report, Path::new("/tmp/data"));
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["version"], SCHEMA_VERSION);
        assert_eq!(value["region"], "SG");
        assert_eq!(value["since"], "2024-01-01");
        assert_eq!(value["weeks"], 3);
        assert!(value["prediction"].is_null());
    }
}
