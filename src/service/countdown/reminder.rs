//! Reminder threshold evaluation.
//!
//! Day reminders use whole elapsed days (floor). Hour reminders only become eligible
//! in the final 48 hours and use the remaining hours rounded to the nearest integer,
//! ties to even. The rounding decides which single tick fires an hour reminder, so a
//! reminder for `N` hours goes out roughly between `N - 0.5` and `N + 0.5` hours
//! before impact, on the first tick that lands in that window.
//!
//! A threshold is marked as fired before anything is sent. A failed send is never
//! retried, and thresholds crossed while the process was down are never backfilled.

use chrono::TimeDelta;

use crate::model::{
    event::{is_expired, Event},
    reminder::{ReminderFire, ReminderThresholds},
};

use super::format::{SECONDS_PER_DAY, SECONDS_PER_HOUR};

/// Hour reminders are only evaluated while strictly less than this many seconds remain.
pub const HOUR_REMINDER_WINDOW_SECONDS: i64 = 2 * SECONDS_PER_DAY;

/// Whole days left, rounded down.
pub fn days_remaining(remaining: TimeDelta) -> i64 {
    remaining.num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Hours left, rounded to the nearest hour with ties going to the even hour.
pub fn hours_remaining(remaining: TimeDelta) -> i64 {
    let seconds = remaining.num_milliseconds() as f64 / 1_000.0;
    (seconds / SECONDS_PER_HOUR as f64).round_ties_even() as i64
}

/// Decides which reminders fire this tick and records them as fired.
///
/// Returns at most one day reminder followed by at most one hour reminder. Nothing
/// fires once the event has expired.
///
/// # Arguments
/// - `event` - The active event; its fired sets are updated in place
/// - `remaining` - Time left until impact as of this tick
/// - `thresholds` - Configured day and hour thresholds
///
/// # Returns
/// - `Vec<ReminderFire>` - Reminders that must be sent this tick
pub fn evaluate_reminders(
    event: &mut Event,
    remaining: TimeDelta,
    thresholds: &ReminderThresholds,
) -> Vec<ReminderFire> {
    let mut fires = Vec::with_capacity(2);

    if is_expired(remaining) {
        return fires;
    }

    let days = days_remaining(remaining);
    if thresholds.days.contains(&days) && event.fired_day_markers.insert(days) {
        fires.push(ReminderFire::day(days));
    }

    if remaining < TimeDelta::seconds(HOUR_REMINDER_WINDOW_SECONDS) {
        let hours = hours_remaining(remaining);
        if thresholds.hours.contains(&hours) && event.fired_hour_markers.insert(hours) {
            fires.push(ReminderFire::hour(hours));
        }
    }

    fires
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::ChannelRef;
    use chrono::{TimeZone, Utc};
    use std::collections::BTreeSet;

    fn event() -> Event {
        let target = Utc.with_ymd_and_hms(2026, 1, 20, 16, 47, 0).unwrap();
        Event::new(target, ChannelRef(1), "meteor impact".to_string())
    }

    fn thresholds(days: &[i64], hours: &[i64]) -> ReminderThresholds {
        ReminderThresholds {
            days: days.iter().copied().collect(),
            hours: hours.iter().copied().collect(),
        }
    }

    fn days_f(days: f64) -> TimeDelta {
        TimeDelta::milliseconds((days * SECONDS_PER_DAY as f64 * 1_000.0) as i64)
    }

    fn hours_f(hours: f64) -> TimeDelta {
        TimeDelta::milliseconds((hours * SECONDS_PER_HOUR as f64 * 1_000.0) as i64)
    }

    /// Tests a day threshold crossed by a descending tick sequence.
    ///
    /// Expected: exactly one fire for threshold 7; a later tick that drifts back
    /// above 7 days does not fire again
    #[test]
    fn fires_day_threshold_once() {
        let mut event = event();
        let thresholds = thresholds(&[7, 1], &[]);

        let first = evaluate_reminders(&mut event, days_f(7.2), &thresholds);
        let second = evaluate_reminders(&mut event, days_f(6.9), &thresholds);
        let skewed = evaluate_reminders(&mut event, days_f(7.1), &thresholds);

        assert_eq!(first, vec![ReminderFire::day(7)]);
        assert!(second.is_empty());
        assert!(skewed.is_empty());
        assert_eq!(event.fired_day_markers, BTreeSet::from([7]));
    }

    /// Tests repeated evaluation with identical inputs.
    ///
    /// Expected: the reminder fires on the first call only
    #[test]
    fn does_not_duplicate_reminder() {
        let mut event = event();
        let thresholds = ReminderThresholds::default();

        let first = evaluate_reminders(&mut event, days_f(14.5), &thresholds);
        let second = evaluate_reminders(&mut event, days_f(14.5), &thresholds);

        assert_eq!(first, vec![ReminderFire::day(14)]);
        assert!(second.is_empty());
    }

    /// Tests a minute-by-minute sweep over the whole countdown.
    ///
    /// Expected: every configured day and hour threshold fires exactly once
    #[test]
    fn sweep_fires_every_threshold_once() {
        let mut event = event();
        let thresholds = ReminderThresholds::default();
        let mut fired = Vec::new();

        for minute in (1..=30 * 24 * 60).rev() {
            fired.extend(evaluate_reminders(
                &mut event,
                TimeDelta::minutes(minute),
                &thresholds,
            ));
        }

        let days: Vec<i64> = fired
            .iter()
            .filter(|f| f.kind == crate::model::reminder::ReminderKind::Day)
            .map(|f| f.threshold)
            .collect();
        let hours: Vec<i64> = fired
            .iter()
            .filter(|f| f.kind == crate::model::reminder::ReminderKind::Hour)
            .map(|f| f.threshold)
            .collect();

        assert_eq!(days, vec![28, 21, 14, 7, 2, 1]);
        assert_eq!(hours, vec![24, 12, 6, 3, 1]);
    }

    /// Tests that a boundary crossed while not observing is not backfilled.
    ///
    /// Expected: jumping from 8.5 days straight to 6.5 days never fires threshold 7
    #[test]
    fn does_not_backfill_missed_threshold() {
        let mut event = event();
        let thresholds = thresholds(&[7], &[]);

        assert!(evaluate_reminders(&mut event, days_f(8.5), &thresholds).is_empty());
        assert!(evaluate_reminders(&mut event, days_f(6.5), &thresholds).is_empty());
        assert!(event.fired_day_markers.is_empty());
    }

    /// Tests the 48 hour eligibility window for hour reminders.
    ///
    /// Expected: no hour reminder at 49h or exactly 48h even when the threshold
    /// matches, one at 47h
    #[test]
    fn hour_thresholds_only_within_two_days() {
        let mut event = event();
        let thresholds = thresholds(&[], &[49, 48, 47]);

        assert!(evaluate_reminders(&mut event, TimeDelta::hours(49), &thresholds).is_empty());
        assert!(evaluate_reminders(&mut event, TimeDelta::hours(48), &thresholds).is_empty());
        assert_eq!(
            evaluate_reminders(&mut event, TimeDelta::hours(47), &thresholds),
            vec![ReminderFire::hour(47)]
        );
    }

    /// Tests nearest rounding of hours remaining.
    ///
    /// Expected: 11h31m rounds to 12 and fires early, 12h29m rounds to 12 as well,
    /// exact half hours round to the even neighbour
    #[test]
    fn rounds_hours_to_nearest() {
        assert_eq!(hours_remaining(TimeDelta::minutes(11 * 60 + 31)), 12);
        assert_eq!(hours_remaining(TimeDelta::minutes(12 * 60 + 29)), 12);
        assert_eq!(hours_remaining(TimeDelta::minutes(12 * 60 + 31)), 13);
        assert_eq!(hours_remaining(hours_f(1.5)), 2);
        assert_eq!(hours_remaining(hours_f(2.5)), 2);
        assert_eq!(hours_remaining(hours_f(0.4)), 0);

        let mut event = event();
        let thresholds = thresholds(&[], &[12]);
        assert!(
            evaluate_reminders(&mut event, TimeDelta::minutes(12 * 60 + 31), &thresholds)
                .is_empty()
        );
        assert_eq!(
            evaluate_reminders(&mut event, TimeDelta::minutes(12 * 60 + 29), &thresholds),
            vec![ReminderFire::hour(12)]
        );
    }

    /// Tests day and hour reminders firing on the same tick.
    ///
    /// Expected: both the 1 day and 24 hour reminders fire, day first
    #[test]
    fn fires_day_and_hour_together() {
        let mut event = event();
        let fires = evaluate_reminders(
            &mut event,
            TimeDelta::hours(24) + TimeDelta::minutes(10),
            &ReminderThresholds::default(),
        );

        assert_eq!(fires, vec![ReminderFire::day(1), ReminderFire::hour(24)]);
    }

    #[test]
    fn nothing_fires_after_expiry() {
        let mut event = event();
        let thresholds = ReminderThresholds::default();

        assert!(evaluate_reminders(&mut event, TimeDelta::zero(), &thresholds).is_empty());
        assert!(evaluate_reminders(&mut event, TimeDelta::hours(-1), &thresholds).is_empty());
        assert!(event.fired_hour_markers.is_empty());
    }
}
