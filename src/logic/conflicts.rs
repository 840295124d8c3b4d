//! Schedule conflict detection against committed bookings. Read-only.

use crate::models::{minute_stamp, ConflictReason, ExistingBooking, MatchId, MatchTemplate};
use chrono::{NaiveDate, NaiveTime};

/// Check `candidate` against `existing` bookings. Empty result means the slot is free.
pub fn check_conflicts(candidate: &MatchTemplate, existing: &[ExistingBooking]) -> Vec<ConflictReason> {
    check_conflicts_excluding(candidate, existing, None)
}

/// Like [`check_conflicts`], ignoring the booking of match `exclude` (used when a
/// persisted match is rescheduled and must not collide with its own row).
///
/// Cancelled bookings never conflict. A court conflict needs the same court in an
/// overlapping window; a player conflict needs the same player in an overlapping
/// window on any court.
pub fn check_conflicts_excluding(
    candidate: &MatchTemplate,
    existing: &[ExistingBooking],
    exclude: Option<MatchId>,
) -> Vec<ConflictReason> {
    let mut reasons = Vec::new();
    for booking in existing {
        if booking.cancelled || (exclude.is_some() && booking.match_id == exclude) {
            continue;
        }
        if !slots_overlap(
            (candidate.date, candidate.time, Some(candidate.duration_minutes)),
            (booking.date, booking.time, booking.duration_minutes),
        ) {
            continue;
        }

        if let Some(court_id) = candidate.court_id {
            if booking.court_id == Some(court_id) {
                push_unique(
                    &mut reasons,
                    ConflictReason::Court {
                        court_id,
                        date: booking.date,
                        time: booking.time,
                    },
                );
            }
        }

        for player_id in candidate.player_ids() {
            if booking.player_ids.contains(&player_id) {
                push_unique(
                    &mut reasons,
                    ConflictReason::Player {
                        player_id,
                        date: booking.date,
                        time: booking.time,
                    },
                );
            }
        }
    }

    if !reasons.is_empty() {
        log::warn!(
            "conflict: '{}' on {} at {} has {} conflict(s)",
            candidate.title,
            candidate.date,
            candidate.time.format("%H:%M"),
            reasons.len()
        );
    }
    reasons
}

fn push_unique(reasons: &mut Vec<ConflictReason>, reason: ConflictReason) {
    if !reasons.contains(&reason) {
        reasons.push(reason);
    }
}

/// Two slots overlap when they start at the same instant or, when both durations
/// are known, their `[start, start + duration)` windows share an instant. Windows
/// may cross midnight. Arithmetic is in `i64` minutes, so any `u32` duration fits.
pub(crate) fn slots_overlap(
    a: (NaiveDate, NaiveTime, Option<u32>),
    b: (NaiveDate, NaiveTime, Option<u32>),
) -> bool {
    let (a_date, a_time, a_duration) = a;
    let (b_date, b_time, b_duration) = b;
    let a_start = minute_stamp(a_date, a_time);
    let b_start = minute_stamp(b_date, b_time);
    if a_start == b_start {
        return true;
    }
    match (a_duration, b_duration) {
        (Some(a_len), Some(b_len)) => {
            a_start < b_start + i64::from(b_len) && b_start < a_start + i64::from(a_len)
        }
        _ => false,
    }
}
