//! Weekday histograms with every day present.

use crate::aggregate::by_committer;
use crate::model::{AggregatedObservation, CommitterCategory, WeekdayBreakdown, WeekdayCount};
use crate::util::WEEKDAYS;

/// Exactly seven rows, Monday to Sunday, counting rows per weekday.
pub fn normalize(rows: &[AggregatedObservation]) -> Vec<WeekdayCount> {
    WEEKDAYS
        .iter()
        .map(|day| WeekdayCount {
            weekday: day.to_string(),
            weekday_count: rows.iter().filter(|row| row.weekday == *day).count(),
        })
        .collect()
}

/// Scraper and Other histograms of the aggregated timeline, joined on weekday.
pub fn breakdown(rows: &[AggregatedObservation]) -> Vec<WeekdayBreakdown> {
    let scraper = normalize(&by_committer(rows, CommitterCategory::Scraper));
    let other = normalize(&by_committer(rows, CommitterCategory::Other));

    scraper
        .into_iter()
        .zip(other)
        .map(|(s, o)| WeekdayBreakdown {
            weekday: s.weekday,
            scraper: s.weekday_count,
            other: o.weekday_count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::aggregate;
    use crate::model::{Observation, Region};
    use chrono::{NaiveDate, TimeDelta};
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn obs(day_offset: i64, committer: CommitterCategory) -> Observation {
        // 2024-01-01 is a Monday
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Observation {
            region: "BE".parse::<Region>().unwrap(),
            date: monday + TimeDelta::days(day_offset),
            committer,
        }
    }

    fn distinct_pairs(observations: &[Observation], category: CommitterCategory) -> usize {
        observations
            .iter()
            .filter(|o| o.committer == category)
            .map(|o| o.date)
            .collect::<HashSet<_>>()
            .len()
    }

    fn total(counts: &[WeekdayCount]) -> usize {
        counts.iter().map(|c| c.weekday_count).sum()
    }

    #[test]
    fn empty_input_gives_seven_zero_rows() {
        let counts = normalize(&[]);
        assert_eq!(counts.len(), 7);
        assert!(counts.iter().all(|c| c.weekday_count == 0));
        let names: Vec<&str> = counts.iter().map(|c| c.weekday.as_str()).collect();
        assert_eq!(names, WEEKDAYS.to_vec());
    }

    #[test]
    fn sparse_input_keeps_fixed_order() {
        let input = vec![
            obs(0, CommitterCategory::Scraper),
            obs(6, CommitterCategory::Scraper),
            obs(13, CommitterCategory::Scraper),
            obs(9, CommitterCategory::Scraper),
        ];
        let counts = normalize(&aggregate(&input));

        let expected: Vec<(String, usize)> = [
            ("Monday", 0),
            ("Tuesday", 0),
            ("Wednesday", 1),
            ("Thursday", 0),
            ("Friday", 0),
            ("Saturday", 0),
            ("Sunday", 2),
        ]
        .iter()
        .map(|(d, n)| (d.to_string(), *n))
        .collect();
        let actual: Vec<(String, usize)> = counts
            .into_iter()
            .map(|c| (c.weekday, c.weekday_count))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn first_row_is_charged_to_its_own_category() {
        // the Scraper update on day 0 opens the timeline
        let input = vec![
            obs(0, CommitterCategory::Scraper),
            obs(1, CommitterCategory::Other),
            obs(2, CommitterCategory::Scraper),
            obs(3, CommitterCategory::Other),
            obs(4, CommitterCategory::Scraper),
        ];
        let rows = aggregate(&input);

        let scraper = normalize(&by_committer(&rows, CommitterCategory::Scraper));
        let other = normalize(&by_committer(&rows, CommitterCategory::Other));

        assert_eq!(
            total(&scraper),
            distinct_pairs(&input, CommitterCategory::Scraper) - 1
        );
        assert_eq!(total(&other), distinct_pairs(&input, CommitterCategory::Other));
    }

    #[test]
    fn first_row_in_other_category_leaves_scraper_intact() {
        let input = vec![
            obs(0, CommitterCategory::Other),
            obs(1, CommitterCategory::Scraper),
            obs(2, CommitterCategory::Scraper),
            obs(8, CommitterCategory::Other),
        ];
        let rows = aggregate(&input);

        let scraper = normalize(&by_committer(&rows, CommitterCategory::Scraper));
        let other = normalize(&by_committer(&rows, CommitterCategory::Other));

        assert_eq!(total(&scraper), distinct_pairs(&input, CommitterCategory::Scraper));
        assert_eq!(total(&other), distinct_pairs(&input, CommitterCategory::Other) - 1);
    }

    #[test]
    fn breakdown_joins_both_categories() {
        let input = vec![
            obs(0, CommitterCategory::Scraper),
            obs(1, CommitterCategory::Scraper),
            obs(1, CommitterCategory::Other),
            obs(7, CommitterCategory::Scraper),
        ];
        let rows = breakdown(&aggregate(&input));

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0].weekday, "Monday");
        assert_eq!((rows[0].scraper, rows[0].other), (1, 0));
        assert_eq!(rows[1].weekday, "Tuesday");
        assert_eq!((rows[1].scraper, rows[1].other), (1, 1));
        assert_eq!(rows.iter().map(WeekdayBreakdown::total).sum::<usize>(), 3);
    }
}
