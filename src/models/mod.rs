//! Data structures for match generation: players, teams, plans, templates, bookings, scores.

mod error;
mod player;
mod schedule;
mod score;
mod team;

pub use error::EngineError;
pub use player::{Player, PlayerId, SkillLevel};
pub use schedule::{
    ConflictReason, Court, CourtId, ExistingBooking, MatchId, MatchSkill, MatchTemplate, MatchType,
    ScheduleDefaults, DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES,
};
pub(crate) use schedule::minute_stamp;
pub use score::Score;
pub use team::{Participant, Team, TeamId, TeamPairing, TeamPlan};
