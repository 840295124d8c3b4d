//! Collaborator seams (player directory, court/booking store, match store) and an
//! in-memory club store implementing all three.
//!
//! The engine never reads these itself: callers take snapshots and pass them in.

use crate::logic::check_conflicts;
use crate::models::{
    Court, CourtId, EngineError, ExistingBooking, MatchId, MatchTemplate, Player, PlayerId, Score,
    SkillLevel, MAX_DURATION_MINUTES,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source of players for generation.
pub trait PlayerDirectory {
    fn list_active_players(&self) -> Vec<Player>;

    /// Resolve ids to active players, keeping the requested order.
    fn find_players(&self, ids: &[PlayerId]) -> Result<Vec<Player>, EngineError> {
        let active = self.list_active_players();
        ids.iter()
            .map(|id| {
                active
                    .iter()
                    .find(|p| p.id == *id)
                    .cloned()
                    .ok_or(EngineError::PlayerNotFound(*id))
            })
            .collect()
    }
}

/// Courts and their committed bookings.
pub trait CourtStore {
    fn list_courts(&self) -> Vec<Court>;

    /// Bookings dated within `from..=to`.
    fn list_existing_bookings(&self, from: NaiveDate, to: NaiveDate) -> Vec<ExistingBooking>;
}

/// Persistence for generated matches.
pub trait MatchStore {
    /// Persist a template. Implementations must refuse a template that conflicts
    /// with what is already stored at insert time.
    fn create_match(&mut self, template: MatchTemplate) -> Result<MatchId, EngineError>;
}

/// A persisted match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StoredMatch {
    pub id: MatchId,
    #[serde(flatten)]
    pub template: MatchTemplate,
    #[serde(default)]
    pub score: Score,
    #[serde(default)]
    pub cancelled: bool,
}

/// In-memory club data: players, courts, matches.
#[derive(Clone, Debug, Default)]
pub struct ClubStore {
    players: Vec<Player>,
    courts: Vec<Court>,
    matches: Vec<StoredMatch>,
}

impl ClubStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active player. Names are trimmed and must not be empty.
    pub fn add_player(&mut self, name: &str, skill_level: SkillLevel) -> Result<Player, EngineError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::EmptyName);
        }
        let player = Player::new(name, skill_level);
        self.players.push(player.clone());
        Ok(player)
    }

    /// Mark a player inactive. Their past matches are kept.
    pub fn deactivate_player(&mut self, id: PlayerId) -> Result<(), EngineError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(EngineError::PlayerNotFound(id))?;
        player.active = false;
        Ok(())
    }

    /// Add a bookable court. Names are trimmed and must not be empty.
    pub fn add_court(&mut self, name: &str) -> Result<Court, EngineError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::EmptyName);
        }
        let court = Court::new(name);
        self.courts.push(court.clone());
        Ok(court)
    }

    pub fn court_exists(&self, id: CourtId) -> bool {
        self.courts.iter().any(|c| c.id == id)
    }

    pub fn list_matches(&self) -> &[StoredMatch] {
        &self.matches
    }

    /// Record a score for a persisted match.
    pub fn set_score(&mut self, id: MatchId, score: Score) -> Result<&StoredMatch, EngineError> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(EngineError::MatchNotFound(id))?;
        m.score = score;
        Ok(m)
    }

    /// Cancel a match; its slot stops counting as booked.
    pub fn cancel_match(&mut self, id: MatchId) -> Result<(), EngineError> {
        let m = self
            .matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(EngineError::MatchNotFound(id))?;
        m.cancelled = true;
        Ok(())
    }
}

impl PlayerDirectory for ClubStore {
    fn list_active_players(&self) -> Vec<Player> {
        self.players.iter().filter(|p| p.active).cloned().collect()
    }
}

impl CourtStore for ClubStore {
    fn list_courts(&self) -> Vec<Court> {
        self.courts.clone()
    }

    fn list_existing_bookings(&self, from: NaiveDate, to: NaiveDate) -> Vec<ExistingBooking> {
        self.matches
            .iter()
            .filter(|m| m.template.date >= from && m.template.date <= to)
            .map(|m| ExistingBooking {
                cancelled: m.cancelled,
                ..m.template.as_booking(Some(m.id))
            })
            .collect()
    }
}

impl MatchStore for ClubStore {
    fn create_match(&mut self, template: MatchTemplate) -> Result<MatchId, EngineError> {
        if !(1..=MAX_DURATION_MINUTES).contains(&template.duration_minutes) {
            return Err(EngineError::InvalidDuration(template.duration_minutes));
        }
        // Windows may cross midnight, so neighbouring days count too.
        let from = template.date.pred_opt().unwrap_or(template.date);
        let to = template.date.succ_opt().unwrap_or(template.date);
        let bookings = self.list_existing_bookings(from, to);
        let reasons = check_conflicts(&template, &bookings);
        if !reasons.is_empty() {
            return Err(EngineError::ScheduleConflict(reasons));
        }
        let id = Uuid::new_v4();
        log::info!("Created match {} '{}' on {} at {}", id, template.title, template.date, template.time);
        self.matches.push(StoredMatch {
            id,
            template,
            score: Score::NotRecorded,
            cancelled: false,
        });
        Ok(id)
    }
}
