//! Errors returned by the engine and the in-memory stores.

use crate::models::player::PlayerId;
use crate::models::schedule::{ConflictReason, MatchId, MAX_DURATION_MINUTES};
use serde::{Deserialize, Serialize};

/// Errors that can occur while planning, assigning or persisting matches.
///
/// Serialized as `{"kind": ..., "detail": ...}` so clients can branch on the kind.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum EngineError {
    /// Fewer players than any team configuration can use.
    InsufficientPlayers { minimum: usize, available: usize },
    /// Enough players, but no configuration fits the requested team size.
    InfeasiblePlan(String),
    /// The player list does not match the count the plan was built for.
    MismatchedInput { expected: usize, actual: usize },
    /// The same player was handed to the assigner twice.
    DuplicatePlayer(PlayerId),
    /// A template collides with a committed booking.
    ScheduleConflict(Vec<ConflictReason>),
    /// Player not found in the directory.
    PlayerNotFound(PlayerId),
    /// Match not found in the match store.
    MatchNotFound(MatchId),
    /// A player or court name was empty after trimming.
    EmptyName,
    /// Match duration outside `1..=MAX_DURATION_MINUTES`.
    InvalidDuration(u32),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InsufficientPlayers { minimum, available } => write!(
                f,
                "Not enough players for team matches (minimum {} required, {} available)",
                minimum, available
            ),
            EngineError::InfeasiblePlan(description) => write!(f, "{}", description),
            EngineError::MismatchedInput { expected, actual } => write!(
                f,
                "Plan was built for {} players but {} were supplied",
                expected, actual
            ),
            EngineError::DuplicatePlayer(id) => write!(f, "Player {} was supplied more than once", id),
            EngineError::ScheduleConflict(reasons) => {
                let joined: Vec<String> = reasons.iter().map(|r| r.to_string()).collect();
                write!(f, "Schedule conflict: {}", joined.join("; "))
            }
            EngineError::PlayerNotFound(_) => write!(f, "Player not found"),
            EngineError::MatchNotFound(_) => write!(f, "Match not found"),
            EngineError::EmptyName => write!(f, "Name must not be empty"),
            EngineError::InvalidDuration(minutes) => write!(
                f,
                "Match duration must be between 1 and {} minutes, got {}",
                MAX_DURATION_MINUTES, minutes
            ),
        }
    }
}

impl std::error::Error for EngineError {}
