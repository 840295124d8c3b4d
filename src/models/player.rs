//! Player and SkillLevel data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in teams, participants and bookings).
pub type PlayerId = Uuid;

/// Ordinal playing level of a club member.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
}

/// A club member as handed out by the player directory. Read-only to the engine.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub skill_level: SkillLevel,
    /// Inactive players are kept in the directory but never offered for generation.
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Player {
    /// Create a new active player with the given name and skill.
    pub fn new(name: impl Into<String>, skill_level: SkillLevel) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            skill_level,
            active: true,
        }
    }
}
