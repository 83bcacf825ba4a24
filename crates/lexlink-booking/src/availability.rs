// SPDX-FileCopyrightText: 2026 Lexlink Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slot availability: working-hours window test and booked-slot conflict test.
//!
//! A candidate timestamp is bookable iff its time-of-day falls inside the
//! lawyer's working hours (inclusive on both bounds) and no existing
//! booking lies strictly within [`CONFLICT_WINDOW_SECS`] of it. The two
//! verdicts are kept separate: out-of-hours candidates are filtered out
//! up front, conflicts surface as a blocking message on an otherwise
//! valid pick.
//!
//! The backend re-runs the conflict check inside a transaction at
//! submission time, so a race between two clients booking the same slot
//! shows up as a submission error, not something prevented here.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use lexlink_core::LexlinkError;

/// Two bookings closer than this (in seconds) conflict.
pub const CONFLICT_WINDOW_SECS: i64 = 30 * 60;

/// A lawyer's daily booking window, parsed once from the profile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl WorkingHours {
    /// Parses the profile's `"HH:MM"` pair.
    pub fn parse(start: &str, end: &str) -> Result<Self, LexlinkError> {
        let parse_one = |s: &str| {
            NaiveTime::parse_from_str(s, "%H:%M")
                .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
                .map_err(|_| LexlinkError::Validation(format!("invalid working hours time `{s}`")))
        };
        Ok(Self {
            start: parse_one(start)?,
            end: parse_one(end)?,
        })
    }

    /// True if the candidate's time-of-day lies inside the window.
    ///
    /// Both bounds are inclusive: a booking exactly at closing time is
    /// allowed.
    pub fn contains(&self, candidate: NaiveDateTime) -> bool {
        let t = candidate.time();
        t >= self.start && t <= self.end
    }
}

/// Returns the first booked slot strictly within the conflict window of
/// `candidate`, if any.
pub fn first_conflict(candidate: NaiveDateTime, booked: &[NaiveDateTime]) -> Option<NaiveDateTime> {
    booked
        .iter()
        .find(|b| (**b - candidate).num_seconds().abs() < CONFLICT_WINDOW_SECS)
        .copied()
}

/// The two independent verdicts for a candidate slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotAssessment {
    /// Working-hours test. Absent hours means no constraint, so `true`.
    pub within_hours: bool,
    /// The booked slot this candidate collides with, if any.
    pub conflict: Option<NaiveDateTime>,
}

impl SlotAssessment {
    /// Bookable iff both tests pass.
    pub fn is_bookable(&self) -> bool {
        self.within_hours && self.conflict.is_none()
    }
}

/// Evaluates both tests for a candidate.
pub fn assess(
    hours: Option<&WorkingHours>,
    booked: &[NaiveDateTime],
    candidate: NaiveDateTime,
) -> SlotAssessment {
    SlotAssessment {
        within_hours: hours.is_none_or(|h| h.contains(candidate)),
        conflict: first_conflict(candidate, booked),
    }
}

/// Holds the candidate, the booked set, and the current assessment for
/// one lawyer's booking flow.
///
/// Every mutation recomputes the assessment synchronously, so the
/// verdict can never be stale relative to its inputs, and recomputation
/// is idempotent: whichever of candidate-change or booked-refresh lands
/// last, both always read the latest value of the other.
#[derive(Debug, Clone)]
pub struct SlotPlanner {
    hours: Option<WorkingHours>,
    booked: Vec<NaiveDateTime>,
    candidate: Option<NaiveDateTime>,
    assessment: Option<SlotAssessment>,
}

impl SlotPlanner {
    /// Creates a planner for a lawyer. `hours` is `None` when the
    /// profile carries no working-hours fields.
    pub fn new(hours: Option<WorkingHours>) -> Self {
        Self {
            hours,
            booked: Vec::new(),
            candidate: None,
            assessment: None,
        }
    }

    /// Replaces the booked set (after a fetch or a successful booking).
    pub fn set_booked(&mut self, booked: Vec<NaiveDateTime>) {
        self.booked = booked;
        self.recompute();
    }

    /// Drops all known bookings. Used when a booked-times refresh fails:
    /// the conflict test falls open to "no conflicts known" and the
    /// backend's submission-time check remains authoritative.
    pub fn clear_booked(&mut self) {
        self.booked.clear();
        self.recompute();
    }

    /// Selects a candidate timestamp.
    pub fn set_candidate(&mut self, candidate: NaiveDateTime) {
        self.candidate = Some(candidate);
        self.recompute();
    }

    /// The current verdict, `None` until a candidate is selected.
    pub fn assessment(&self) -> Option<SlotAssessment> {
        self.assessment
    }

    /// True when a candidate is selected and passes both tests — the
    /// submit action is enabled exactly when this holds.
    pub fn is_submittable(&self) -> bool {
        self.assessment.is_some_and(|a| a.is_bookable())
    }

    pub fn candidate(&self) -> Option<NaiveDateTime> {
        self.candidate
    }

    pub fn hours(&self) -> Option<&WorkingHours> {
        self.hours.as_ref()
    }

    fn recompute(&mut self) {
        self.assessment = self
            .candidate
            .map(|c| assess(self.hours.as_ref(), &self.booked, c));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn nine_to_five() -> WorkingHours {
        WorkingHours::parse("09:00", "17:00").unwrap()
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(WorkingHours::parse("9am", "17:00").is_err());
        assert!(WorkingHours::parse("09:00", "25:61").is_err());
    }

    #[test]
    fn spec_scenario_nine_to_five_with_ten_oclock_booking() {
        let hours = nine_to_five();
        let booked = vec![dt(10, 0)];

        // 10:15 collides (diff = 15 min).
        let a = assess(Some(&hours), &booked, dt(10, 15));
        assert!(a.within_hours);
        assert_eq!(a.conflict, Some(dt(10, 0)));
        assert!(!a.is_bookable());

        // 10:45 is fine (diff = 45 min).
        let a = assess(Some(&hours), &booked, dt(10, 45));
        assert!(a.is_bookable());

        // 08:30 is outside working hours.
        let a = assess(Some(&hours), &booked, dt(8, 30));
        assert!(!a.within_hours);
        assert!(!a.is_bookable());
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let hours = nine_to_five();
        assert!(hours.contains(dt(9, 0)));
        assert!(hours.contains(dt(17, 0)));
        assert!(!hours.contains(dt(17, 1)));
        assert!(!hours.contains(dt(8, 59)));
    }

    #[test]
    fn exactly_thirty_minutes_apart_does_not_conflict() {
        let booked = vec![dt(10, 0)];
        assert_eq!(first_conflict(dt(10, 30), &booked), None);
        assert_eq!(first_conflict(dt(9, 30), &booked), None);
        // One second inside the window on either side does.
        let candidate = dt(10, 29).checked_add_signed(chrono::Duration::seconds(59)).unwrap();
        assert!(first_conflict(candidate, &booked).is_some());
    }

    #[test]
    fn exact_overlap_conflicts() {
        let booked = vec![dt(14, 0)];
        assert_eq!(first_conflict(dt(14, 0), &booked), Some(dt(14, 0)));
    }

    #[test]
    fn missing_hours_pass_the_window_test() {
        let a = assess(None, &[], dt(3, 0));
        assert!(a.within_hours);
        assert!(a.is_bookable());
    }

    #[test]
    fn planner_recomputes_on_booked_refresh() {
        let mut planner = SlotPlanner::new(Some(nine_to_five()));
        planner.set_candidate(dt(10, 15));
        assert!(planner.is_submittable());

        // A refresh lands a booking next to the candidate: the verdict
        // flips without the candidate changing.
        planner.set_booked(vec![dt(10, 0)]);
        assert!(!planner.is_submittable());
        assert_eq!(planner.assessment().unwrap().conflict, Some(dt(10, 0)));
    }

    #[test]
    fn planner_is_order_independent() {
        let mut a = SlotPlanner::new(Some(nine_to_five()));
        a.set_candidate(dt(11, 0));
        a.set_booked(vec![dt(11, 20)]);

        let mut b = SlotPlanner::new(Some(nine_to_five()));
        b.set_booked(vec![dt(11, 20)]);
        b.set_candidate(dt(11, 0));

        assert_eq!(a.assessment(), b.assessment());
        assert!(!a.is_submittable());
    }

    #[test]
    fn failed_refresh_falls_open() {
        let mut planner = SlotPlanner::new(Some(nine_to_five()));
        planner.set_booked(vec![dt(10, 0)]);
        planner.set_candidate(dt(10, 10));
        assert!(!planner.is_submittable());

        planner.clear_booked();
        assert!(planner.is_submittable());
    }

    #[test]
    fn no_candidate_means_no_verdict_and_no_submit() {
        let planner = SlotPlanner::new(Some(nine_to_five()));
        assert_eq!(planner.assessment(), None);
        assert!(!planner.is_submittable());
    }

    proptest! {
        // bookable(T, S) == within_hours(T) && none(|T - s| < 30min for s in S)
        #[test]
        fn assessment_matches_direct_formula(
            candidate_min in 0i64..7 * 24 * 60,
            booked_mins in proptest::collection::vec(0i64..7 * 24 * 60, 0..12),
        ) {
            let base = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap().and_hms_opt(0, 0, 0).unwrap();
            let candidate = base + chrono::Duration::minutes(candidate_min);
            let booked: Vec<NaiveDateTime> =
                booked_mins.iter().map(|m| base + chrono::Duration::minutes(*m)).collect();
            let hours = nine_to_five();

            let a = assess(Some(&hours), &booked, candidate);

            let expect_hours = candidate.time() >= hours.start && candidate.time() <= hours.end;
            let expect_conflict = booked
                .iter()
                .any(|b| (*b - candidate).num_seconds().abs() < CONFLICT_WINDOW_SECS);

            prop_assert_eq!(a.within_hours, expect_hours);
            prop_assert_eq!(a.conflict.is_some(), expect_conflict);
            prop_assert_eq!(a.is_bookable(), expect_hours && !expect_conflict);
        }
    }
}
