//! TeamId, TeamPlan, Team, Participant and TeamPairing.

use crate::models::player::Player;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Label of a team within one generation run (`A`, `B`, ... `Z`, `AA`, `AB`, ...).
///
/// Wraps the zero-based fill order, so ordering follows the order teams were filled.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TeamId(usize);

impl TeamId {
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Spreadsheet-style label: 0 -> `A`, 25 -> `Z`, 26 -> `AA`.
    pub fn label(self) -> String {
        let mut n = self.0 + 1;
        let mut out = Vec::new();
        while n > 0 {
            let rem = (n - 1) % 26;
            out.push(b'A' + rem as u8);
            n = (n - 1) / 26;
        }
        out.reverse();
        String::from_utf8(out).unwrap_or_default()
    }

    /// Parse a label produced by [`TeamId::label`]. Returns None for anything else.
    pub fn parse(label: &str) -> Option<Self> {
        if label.is_empty() || !label.bytes().all(|b| b.is_ascii_uppercase()) {
            return None;
        }
        let mut n: usize = 0;
        for b in label.bytes() {
            n = n.checked_mul(26)?.checked_add((b - b'A') as usize + 1)?;
        }
        Some(Self(n - 1))
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl Serialize for TeamId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for TeamId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TeamId::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid team id: {s}")))
    }
}

/// Outcome of team sizing for one run. Advisory: carries sizes, never player identities.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamPlan {
    /// Player count the plan was computed for.
    pub total_players: usize,
    /// Requested (base) team size.
    pub team_size: usize,
    pub team_count: usize,
    /// Planned size of each team, in fill order.
    pub players_per_team: Vec<usize>,
    pub is_valid: bool,
    /// True when every team has exactly `team_size` players.
    pub is_optimal: bool,
    pub description: String,
}

impl TeamPlan {
    /// An infeasible plan: no teams, with a reason for the caller to surface.
    pub fn invalid(total_players: usize, team_size: usize, description: impl Into<String>) -> Self {
        Self {
            total_players,
            team_size,
            team_count: 0,
            players_per_team: Vec::new(),
            is_valid: false,
            is_optimal: false,
            description: description.into(),
        }
    }

    /// Sum of all planned team sizes.
    pub fn planned_players(&self) -> usize {
        self.players_per_team.iter().sum()
    }
}

/// A team roster produced by the assigner.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub players: Vec<Player>,
}

impl Team {
    /// Player names joined for titles, e.g. "Ann & Bo".
    pub fn display_name(&self) -> String {
        self.players
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

/// Flattened player-to-team join consumed by the UI and the match store.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub player: Player,
    pub team: TeamId,
}

/// One team-vs-team match before date, time and court are attached.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct TeamPairing {
    pub team_a: TeamId,
    pub team_b: TeamId,
}
