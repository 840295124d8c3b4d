//! Match templates, schedule defaults, courts, existing bookings and conflict reasons.

use crate::models::player::{PlayerId, SkillLevel};
use crate::models::team::Participant;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a persisted match (assigned by the match store).
pub type MatchId = Uuid;

/// Unique identifier for a court.
pub type CourtId = Uuid;

/// Default match length when the caller does not set one.
pub const DEFAULT_DURATION_MINUTES: u32 = 90;

/// Longest match a schedule may ask for: one day.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// A bookable court.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Court {
    pub id: CourtId,
    pub name: String,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Court {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            available: true,
        }
    }
}

/// Kind of match as shown in the club calendar.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchType {
    Singles,
    #[default]
    Doubles,
    #[serde(rename = "Mixed Doubles")]
    MixedDoubles,
    Tournament,
}

/// Skill band of a match; `Mixed` when participants differ.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchSkill {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    Mixed,
}

impl From<SkillLevel> for MatchSkill {
    fn from(level: SkillLevel) -> Self {
        match level {
            SkillLevel::Beginner => MatchSkill::Beginner,
            SkillLevel::Intermediate => MatchSkill::Intermediate,
            SkillLevel::Advanced => MatchSkill::Advanced,
        }
    }
}

/// Date/time/court/duration applied to every assembled template of one run.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDefaults {
    pub date: NaiveDate,
    /// Start time of the first template.
    pub time: NaiveTime,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    /// Court used for every template when `courts` is empty.
    #[serde(default)]
    pub court_id: Option<CourtId>,
    /// Courts to rotate through. When set, template `i` plays on `courts[i % len]`
    /// and starts `(i / len) * duration` after `time`.
    #[serde(default)]
    pub courts: Vec<CourtId>,
    /// None derives the skill band from the participants.
    #[serde(default)]
    pub skill_level: Option<MatchSkill>,
    #[serde(default)]
    pub match_type: MatchType,
}

fn default_duration() -> u32 {
    DEFAULT_DURATION_MINUTES
}

impl ScheduleDefaults {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            date,
            time,
            duration_minutes: DEFAULT_DURATION_MINUTES,
            court_id: None,
            courts: Vec::new(),
            skill_level: None,
            match_type: MatchType::default(),
        }
    }

    pub fn with_court(mut self, court_id: CourtId) -> Self {
        self.court_id = Some(court_id);
        self
    }

    pub fn with_court_rotation(mut self, courts: Vec<CourtId>) -> Self {
        self.courts = courts;
        self
    }

    pub fn with_duration(mut self, duration_minutes: u32) -> Self {
        self.duration_minutes = duration_minutes;
        self
    }

    /// Whether `duration_minutes` is within `1..=MAX_DURATION_MINUTES`.
    pub fn has_valid_duration(&self) -> bool {
        (1..=MAX_DURATION_MINUTES).contains(&self.duration_minutes)
    }

    /// Start of template `index`. Rotated slots run on past midnight into the
    /// following days. `None` only when the start falls off the calendar.
    pub fn slot_start(&self, index: usize) -> Option<NaiveDateTime> {
        let first = self.date.and_time(self.time);
        if self.courts.is_empty() {
            return Some(first);
        }
        let slot = i64::try_from(index / self.courts.len()).ok()?;
        let offset = slot.checked_mul(i64::from(self.duration_minutes))?;
        first.checked_add_signed(Duration::try_minutes(offset)?)
    }

    /// Last date touched by the first `template_count` templates, including the
    /// end of the last match.
    pub fn last_day(&self, template_count: usize) -> NaiveDate {
        self.slot_start(template_count.saturating_sub(1))
            .and_then(|start| start.checked_add_signed(Duration::try_minutes(i64::from(self.duration_minutes))?))
            .map(|end| end.date())
            .unwrap_or(NaiveDate::MAX)
    }
}

/// A generated match, ready for the match store. Ephemeral until persisted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchTemplate {
    pub title: String,
    pub match_type: MatchType,
    pub skill_level: MatchSkill,
    pub court_id: Option<CourtId>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub max_players: usize,
    pub participants: Vec<Participant>,
    pub description: String,
    pub notes: String,
}

impl MatchTemplate {
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.participants.iter().map(|p| p.player.id)
    }

    /// This template viewed as a booking, for checking later templates against it.
    pub fn as_booking(&self, match_id: Option<MatchId>) -> ExistingBooking {
        ExistingBooking {
            match_id,
            date: self.date,
            time: self.time,
            duration_minutes: Some(self.duration_minutes),
            court_id: self.court_id,
            player_ids: self.player_ids().collect(),
            cancelled: false,
        }
    }
}

/// A committed slot read from the booking store. Never mutated by the engine.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ExistingBooking {
    #[serde(default)]
    pub match_id: Option<MatchId>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Unknown durations compare by start time only.
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub court_id: Option<CourtId>,
    #[serde(default)]
    pub player_ids: Vec<PlayerId>,
    #[serde(default)]
    pub cancelled: bool,
}

/// Minutes since 0001-01-01 00:00 for a start, so slots on different days compare.
pub(crate) fn minute_stamp(date: NaiveDate, time: NaiveTime) -> i64 {
    i64::from(date.num_days_from_ce()) * 1440 + i64::from(time.num_seconds_from_midnight() / 60)
}

/// Why a candidate template cannot take its slot.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConflictReason {
    /// The court is already booked in an overlapping window.
    Court {
        court_id: CourtId,
        date: NaiveDate,
        time: NaiveTime,
    },
    /// The player already plays in an overlapping window.
    Player {
        player_id: PlayerId,
        date: NaiveDate,
        time: NaiveTime,
    },
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConflictReason::Court { court_id, date, time } => {
                write!(f, "Court {} is already booked on {} at {}", court_id, date, time.format("%H:%M"))
            }
            ConflictReason::Player { player_id, date, time } => {
                write!(f, "Player {} is already playing on {} at {}", player_id, date, time.format("%H:%M"))
            }
        }
    }
}
