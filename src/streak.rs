//! Habit streak computation.
//!
//! A streak is the run of consecutive calendar days ending today or
//! yesterday. Yesterday still counts so a habit is not broken until a full
//! day has been missed.

use crate::errors::StreakError;
use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

pub type CompletedDates = BTreeSet<NaiveDate>;

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, StreakError> {
    let trimmed = value.trim();
    let bytes = trimmed.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !shaped {
        return Err(StreakError::InvalidDateFormat {
            value: value.to_string(),
        });
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| StreakError::InvalidDateFormat {
        value: value.to_string(),
    })
}

pub fn mark_completed(mut dates: CompletedDates, day: NaiveDate) -> CompletedDates {
    dates.insert(day);
    dates
}

pub fn unmark(mut dates: CompletedDates, day: NaiveDate) -> CompletedDates {
    dates.remove(&day);
    dates
}

pub fn is_completed_on(dates: &CompletedDates, day: NaiveDate) -> bool {
    dates.contains(&day)
}

/// Walks completions from the most recent one backwards and stops at the
/// first gap. Dates after `today` are not part of any streak.
pub fn compute_streak(dates: &CompletedDates, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut cursor = today;

    for (idx, &date) in dates.range(..=today).rev().enumerate() {
        let gap = (cursor - date).num_days();
        if idx == 0 {
            if gap > 1 {
                return 0;
            }
            streak = 1;
        } else if gap == 1 {
            streak += 1;
        } else {
            break;
        }
        cursor = date;
    }

    streak
}

/// Completion dates of one habit together with the streak derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitRecord {
    completed_dates: CompletedDates,
    streak: u32,
    as_of: NaiveDate,
}

impl HabitRecord {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            completed_dates: CompletedDates::new(),
            streak: 0,
            as_of: today,
        }
    }

    pub fn with_dates(dates: impl IntoIterator<Item = NaiveDate>, today: NaiveDate) -> Self {
        let completed_dates: CompletedDates = dates.into_iter().collect();
        let streak = compute_streak(&completed_dates, today);
        Self {
            completed_dates,
            streak,
            as_of: today,
        }
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn completed_dates(&self) -> &CompletedDates {
        &self.completed_dates
    }

    pub fn is_completed_on(&self, day: NaiveDate) -> bool {
        is_completed_on(&self.completed_dates, day)
    }

    pub fn completed_today(&self, today: NaiveDate) -> bool {
        self.is_completed_on(today)
    }

    pub fn mark_completed(&mut self, day: NaiveDate, today: NaiveDate) -> Result<(), StreakError> {
        if day > today {
            return Err(StreakError::FutureDate { date: day, today });
        }
        let dates = std::mem::take(&mut self.completed_dates);
        self.completed_dates = mark_completed(dates, day);
        self.recompute(today);
        Ok(())
    }

    pub fn mark_completed_str(&mut self, day: &str, today: NaiveDate) -> Result<(), StreakError> {
        let day = parse_date(day)?;
        self.mark_completed(day, today)
    }

    pub fn unmark(&mut self, day: NaiveDate, today: NaiveDate) {
        let dates = std::mem::take(&mut self.completed_dates);
        self.completed_dates = unmark(dates, day);
        self.recompute(today);
    }

    pub fn unmark_str(&mut self, day: &str, today: NaiveDate) -> Result<(), StreakError> {
        let day = parse_date(day)?;
        self.unmark(day, today);
        Ok(())
    }

    /// Flips completion for `day` and returns whether it is now completed.
    pub fn toggle(&mut self, day: NaiveDate, today: NaiveDate) -> Result<bool, StreakError> {
        if self.is_completed_on(day) {
            self.unmark(day, today);
            Ok(false)
        } else {
            self.mark_completed(day, today)?;
            Ok(true)
        }
    }

    /// Recomputes the cached streak when the calendar day has moved on.
    pub fn refresh(&mut self, today: NaiveDate) {
        if self.as_of != today {
            self.recompute(today);
        }
    }

    fn recompute(&mut self, today: NaiveDate) {
        self.streak = compute_streak(&self.completed_dates, today);
        self.as_of = today;
        debug!(
            streak = self.streak,
            dates = self.completed_dates.len(),
            %today,
            "recomputed habit streak"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(value: &str) -> NaiveDate {
        parse_date(value).unwrap()
    }

    fn set(values: &[&str]) -> CompletedDates {
        values.iter().map(|value| day(value)).collect()
    }

    fn today() -> NaiveDate {
        day("2025-08-16")
    }

    #[test]
    fn empty_set_has_no_streak() {
        assert_eq!(compute_streak(&CompletedDates::new(), today()), 0);
        assert_eq!(compute_streak(&CompletedDates::new(), day("1999-01-01")), 0);
    }

    #[test]
    fn single_completion_today_or_yesterday_counts() {
        let t = today();
        assert_eq!(compute_streak(&[t].into(), t), 1);
        assert_eq!(compute_streak(&[t - Duration::days(1)].into(), t), 1);
    }

    #[test]
    fn completion_two_days_ago_is_broken() {
        let t = today();
        assert_eq!(compute_streak(&[t - Duration::days(2)].into(), t), 0);
        assert_eq!(compute_streak(&[t - Duration::days(30)].into(), t), 0);
    }

    #[test]
    fn consecutive_run_counts_every_day() {
        let t = today();
        let dates = [t, t - Duration::days(1), t - Duration::days(2)].into();
        assert_eq!(compute_streak(&dates, t), 3);
    }

    #[test]
    fn gap_stops_run_after_first_entry() {
        let t = today();
        let dates = [t, t - Duration::days(2)].into();
        assert_eq!(compute_streak(&dates, t), 1);
    }

    #[test]
    fn run_ending_yesterday_keeps_full_length() {
        let dates = set(&["2025-08-15", "2025-08-14", "2025-08-13", "2025-08-10"]);
        assert_eq!(compute_streak(&dates, today()), 3);
    }

    #[test]
    fn five_day_scenario() {
        let dates = set(&[
            "2025-08-16",
            "2025-08-15",
            "2025-08-14",
            "2025-08-13",
            "2025-08-12",
        ]);
        assert_eq!(compute_streak(&dates, today()), 5);
    }

    #[test]
    fn two_day_gap_scenario() {
        let dates = set(&["2025-08-16", "2025-08-14"]);
        assert_eq!(compute_streak(&dates, today()), 1);
    }

    #[test]
    fn streak_crosses_month_and_year_boundaries() {
        let dates = set(&["2025-01-01", "2024-12-31", "2024-12-30"]);
        assert_eq!(compute_streak(&dates, day("2025-01-01")), 3);

        let leap = set(&["2024-03-01", "2024-02-29", "2024-02-28"]);
        assert_eq!(compute_streak(&leap, day("2024-03-01")), 3);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let forward = ["2025-08-12", "2025-08-13", "2025-08-14", "2025-08-16"];
        let mut backward = forward;
        backward.reverse();

        let a = forward
            .iter()
            .fold(CompletedDates::new(), |acc, value| mark_completed(acc, day(value)));
        let b = backward
            .iter()
            .fold(CompletedDates::new(), |acc, value| mark_completed(acc, day(value)));

        assert_eq!(a, b);
        assert_eq!(compute_streak(&a, today()), compute_streak(&b, today()));
        assert_eq!(compute_streak(&a, today()), 1);
    }

    #[test]
    fn marking_twice_is_a_no_op() {
        let base = set(&["2025-08-14"]);
        let once = mark_completed(base.clone(), today());
        let twice = mark_completed(once.clone(), today());
        assert_eq!(once, twice);
        assert_eq!(twice.len(), 2);
    }

    #[test]
    fn unmark_undoes_mark() {
        let base = set(&["2025-08-13", "2025-08-15"]);
        let restored = unmark(mark_completed(base.clone(), today()), today());
        assert_eq!(restored, base);
    }

    #[test]
    fn unmark_missing_date_is_a_no_op() {
        let base = set(&["2025-08-13"]);
        assert_eq!(unmark(base.clone(), today()), base);
    }

    #[test]
    fn membership_query() {
        let dates = set(&["2025-08-13"]);
        assert!(is_completed_on(&dates, day("2025-08-13")));
        assert!(!is_completed_on(&dates, today()));
    }

    #[test]
    fn future_dates_are_ignored_by_the_walk() {
        let dates = set(&["2025-08-20", "2025-08-16", "2025-08-15"]);
        assert_eq!(compute_streak(&dates, today()), 2);

        let only_future = set(&["2025-08-17"]);
        assert_eq!(compute_streak(&only_future, today()), 0);
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        assert_eq!(
            parse_date(" 2025-08-16 ").unwrap(),
            NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_other_shapes() {
        for value in ["", "2025-8-16", "16/08/2025", "2025-02-30", "+202-01-01", "2025-08-16T00"] {
            assert_eq!(
                parse_date(value),
                Err(StreakError::InvalidDateFormat {
                    value: value.to_string()
                }),
                "{value}"
            );
        }
    }

    #[test]
    fn record_starts_empty() {
        let record = HabitRecord::new(today());
        assert_eq!(record.streak(), 0);
        assert!(record.completed_dates().is_empty());
        assert!(!record.completed_today(today()));
    }

    #[test]
    fn record_streak_tracks_every_mutation() {
        let t = today();
        let mut record = HabitRecord::new(t);

        record.mark_completed(t, t).unwrap();
        assert_eq!(record.streak(), 1);

        // Same day again must not inflate the streak.
        record.mark_completed(t, t).unwrap();
        assert_eq!(record.streak(), 1);

        // Non-contiguous day does not extend the run.
        record.mark_completed(t - Duration::days(5), t).unwrap();
        assert_eq!(record.streak(), 1);

        record.mark_completed(t - Duration::days(1), t).unwrap();
        assert_eq!(record.streak(), 2);

        record.unmark(t, t);
        assert_eq!(record.streak(), 1);
        assert_eq!(record.streak(), compute_streak(record.completed_dates(), t));
    }

    #[test]
    fn record_rejects_future_dates_without_mutating() {
        let t = today();
        let mut record = HabitRecord::with_dates([t], t);
        let before = record.clone();

        let err = record.mark_completed(t + Duration::days(1), t).unwrap_err();
        assert_eq!(
            err,
            StreakError::FutureDate {
                date: t + Duration::days(1),
                today: t
            }
        );
        assert_eq!(record, before);
    }

    #[test]
    fn record_rejects_bad_strings_without_mutating() {
        let t = today();
        let mut record = HabitRecord::with_dates([t], t);
        let before = record.clone();

        assert!(record.mark_completed_str("yesterday", t).is_err());
        assert!(record.unmark_str("2025/08/16", t).is_err());
        assert_eq!(record, before);

        record.unmark_str("2025-08-16", t).unwrap();
        assert_eq!(record.streak(), 0);
    }

    #[test]
    fn toggle_flips_completion() {
        let t = today();
        let mut record = HabitRecord::with_dates([t - Duration::days(1)], t);

        assert!(record.toggle(t, t).unwrap());
        assert_eq!(record.streak(), 2);
        assert!(!record.toggle(t, t).unwrap());
        assert_eq!(record.streak(), 1);
    }

    #[test]
    fn refresh_recomputes_for_a_new_day() {
        let t = today();
        let mut record = HabitRecord::with_dates([t, t - Duration::days(1)], t);
        assert_eq!(record.streak(), 2);

        record.refresh(t + Duration::days(1));
        assert_eq!(record.streak(), 2);
        assert_eq!(record.as_of(), t + Duration::days(1));

        record.refresh(t + Duration::days(3));
        assert_eq!(record.streak(), 0);
    }
}
