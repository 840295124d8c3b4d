//! Integration tests for schedule conflict detection.

use chrono::{NaiveDate, NaiveTime};
use club_match_engine::{
    check_conflicts, check_conflicts_excluding, ConflictReason, ExistingBooking, MatchSkill,
    MatchTemplate, MatchType, Participant, Player, SkillLevel, TeamId,
};
use uuid::Uuid;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
}

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn template(players: &[Player], court: Option<Uuid>, day: u32, time: NaiveTime) -> MatchTemplate {
    MatchTemplate {
        title: "Team A vs Team B".to_string(),
        match_type: MatchType::Doubles,
        skill_level: MatchSkill::Mixed,
        court_id: court,
        date: date(day),
        time,
        duration_minutes: 90,
        max_players: players.len(),
        participants: players
            .iter()
            .enumerate()
            .map(|(i, p)| Participant {
                player: p.clone(),
                team: TeamId::from_index(i % 2),
            })
            .collect(),
        description: String::new(),
        notes: String::new(),
    }
}

fn booking(players: &[&Player], court: Option<Uuid>, day: u32, time: NaiveTime) -> ExistingBooking {
    ExistingBooking {
        match_id: None,
        date: date(day),
        time,
        duration_minutes: None,
        court_id: court,
        player_ids: players.iter().map(|p| p.id).collect(),
        cancelled: false,
    }
}

fn roster(n: usize) -> Vec<Player> {
    (0..n)
        .map(|i| Player::new(format!("P{i}"), SkillLevel::Advanced))
        .collect()
}

#[test]
fn same_court_same_slot_is_a_court_conflict() {
    let court = Uuid::new_v4();
    let p = roster(8);
    let candidate = template(&p[0..4], Some(court), 1, at(10, 0));
    let existing = vec![booking(&[&p[4], &p[5]], Some(court), 1, at(10, 0))];
    assert_eq!(
        check_conflicts(&candidate, &existing),
        vec![ConflictReason::Court {
            court_id: court,
            date: date(1),
            time: at(10, 0)
        }]
    );
}

#[test]
fn other_court_or_other_day_is_free() {
    let p = roster(8);
    let candidate = template(&p[0..4], Some(Uuid::new_v4()), 1, at(10, 0));
    let existing = vec![
        booking(&[&p[4]], Some(Uuid::new_v4()), 1, at(10, 0)),
        booking(&[&p[0]], candidate.court_id, 2, at(10, 0)),
    ];
    assert!(check_conflicts(&candidate, &existing).is_empty());
}

#[test]
fn player_in_another_match_at_the_same_time_conflicts_on_any_court() {
    let p = roster(6);
    let candidate = template(&p[0..4], Some(Uuid::new_v4()), 1, at(18, 30));
    let existing = vec![booking(&[&p[2], &p[5]], Some(Uuid::new_v4()), 1, at(18, 30))];
    assert_eq!(
        check_conflicts(&candidate, &existing),
        vec![ConflictReason::Player {
            player_id: p[2].id,
            date: date(1),
            time: at(18, 30)
        }]
    );
}

#[test]
fn candidate_without_court_only_checks_players() {
    let court = Uuid::new_v4();
    let p = roster(6);
    let candidate = template(&p[0..4], None, 1, at(9, 0));
    let existing = vec![booking(&[&p[5]], Some(court), 1, at(9, 0))];
    assert!(check_conflicts(&candidate, &existing).is_empty());
}

#[test]
fn cancelled_and_excluded_bookings_never_conflict() {
    let court = Uuid::new_v4();
    let own_match = Uuid::new_v4();
    let p = roster(4);
    let candidate = template(&p, Some(court), 1, at(10, 0));

    let mut cancelled = booking(&[&p[0]], Some(court), 1, at(10, 0));
    cancelled.cancelled = true;
    assert!(check_conflicts(&candidate, &[cancelled]).is_empty());

    let mut own = booking(&[&p[0]], Some(court), 1, at(10, 0));
    own.match_id = Some(own_match);
    assert!(check_conflicts_excluding(&candidate, &[own.clone()], Some(own_match)).is_empty());
    assert!(!check_conflicts_excluding(&candidate, &[own], None).is_empty());
}

#[test]
fn known_durations_detect_partial_overlap() {
    let court = Uuid::new_v4();
    let p = roster(8);
    let mut existing = booking(&[&p[4]], Some(court), 1, at(10, 0));
    existing.duration_minutes = Some(90);

    let overlapping = template(&p[0..4], Some(court), 1, at(11, 0));
    assert_eq!(check_conflicts(&overlapping, &[existing.clone()]).len(), 1);

    // Windows are half-open: 10:00-11:30 and 11:30-13:00 do not overlap.
    let adjacent = template(&p[0..4], Some(court), 1, at(11, 30));
    assert!(check_conflicts(&adjacent, &[existing.clone()]).is_empty());

    // Without a duration only equal start times collide.
    existing.duration_minutes = None;
    assert!(check_conflicts(&overlapping, &[existing]).is_empty());
}

#[test]
fn windows_crossing_midnight_overlap_the_next_day() {
    let court = Uuid::new_v4();
    let p = roster(8);
    let late = template(&p[0..4], Some(court), 1, at(23, 30));
    let mut early = booking(&[&p[4]], Some(court), 2, at(0, 30));
    early.duration_minutes = Some(60);
    assert_eq!(check_conflicts(&late, &[early.clone()]).len(), 1);

    early.time = at(1, 0);
    assert!(check_conflicts(&late, &[early]).is_empty());
}

#[test]
fn huge_durations_do_not_overflow() {
    let court = Uuid::new_v4();
    let p = roster(8);
    let mut candidate = template(&p[0..4], Some(court), 1, at(10, 0));
    candidate.duration_minutes = u32::MAX;
    let mut existing = booking(&[&p[4]], Some(court), 1, at(9, 0));
    existing.duration_minutes = Some(u32::MAX);
    assert_eq!(check_conflicts(&candidate, &[existing.clone()]).len(), 1);

    // A booking long before still reaches the candidate.
    existing.date = date(1) - chrono::Duration::days(30);
    assert_eq!(check_conflicts(&candidate, &[existing]).len(), 1);
}

#[test]
fn each_reason_is_reported_once_per_slot() {
    let court = Uuid::new_v4();
    let p = roster(4);
    let candidate = template(&p, Some(court), 1, at(10, 0));
    let existing = vec![
        booking(&[&p[0], &p[1]], Some(court), 1, at(10, 0)),
        booking(&[&p[0]], Some(court), 1, at(10, 0)),
    ];
    let reasons = check_conflicts(&candidate, &existing);
    assert_eq!(reasons.len(), 3); // court, p0, p1
}

#[test]
fn conflicts_are_symmetric() {
    let courts = [Some(Uuid::new_v4()), Some(Uuid::new_v4()), None];
    let p = roster(8);
    let candidates: Vec<MatchTemplate> = [
        (0..4, courts[0], 1, at(10, 0)),
        (4..8, courts[0], 1, at(10, 0)),
        (2..6, courts[1], 1, at(11, 0)),
        (4..8, courts[2], 1, at(11, 0)),
        (0..4, courts[1], 2, at(10, 0)),
        (6..8, courts[0], 1, at(12, 0)),
    ]
    .into_iter()
    .map(|(range, court, day, time)| template(&p[range], court, day, time))
    .collect();

    for a in &candidates {
        for b in &candidates {
            let a_vs_b = !check_conflicts(b, &[a.as_booking(None)]).is_empty();
            let b_vs_a = !check_conflicts(a, &[b.as_booking(None)]).is_empty();
            assert_eq!(a_vs_b, b_vs_a, "{:?} / {:?}", a.time, b.time);
        }
    }
}
