//! Match score as a tagged variant, with conversion from and to the loose legacy shapes.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Recorded result of a persisted match.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Score {
    #[default]
    NotRecorded,
    /// Per-set games as (team A, team B).
    SetScores(Vec<(u32, u32)>),
    /// Point totals for multi-team matches.
    TeamTotals(BTreeMap<TeamId, u32>),
}

impl Score {
    /// Read a score stored in one of the legacy shapes:
    /// `"6-4, 4-6"`, `{"teamA": 6, "teamB": 4}`, `{"sets": [{"teamA": 6, "teamB": 4}]}`
    /// or `{"A": 21, "B": 17, "C": 12}`. Anything unreadable is `NotRecorded`.
    pub fn from_legacy(value: &Value) -> Score {
        match value {
            Value::String(s) => parse_set_string(s),
            Value::Object(map) => {
                if let (Some(a), Some(b)) = (
                    map.get("teamA").and_then(as_points),
                    map.get("teamB").and_then(as_points),
                ) {
                    let mut totals = BTreeMap::new();
                    totals.insert(TeamId::from_index(0), a);
                    totals.insert(TeamId::from_index(1), b);
                    return Score::TeamTotals(totals);
                }
                if let Some(Value::Array(sets)) = map.get("sets") {
                    let sets: Vec<(u32, u32)> = sets
                        .iter()
                        .filter_map(|set| {
                            Some((
                                set.get("teamA").and_then(as_points)?,
                                set.get("teamB").and_then(as_points)?,
                            ))
                        })
                        .collect();
                    return if sets.is_empty() {
                        Score::NotRecorded
                    } else {
                        Score::SetScores(sets)
                    };
                }
                let totals: BTreeMap<TeamId, u32> = map
                    .iter()
                    .filter_map(|(k, v)| Some((TeamId::parse(k)?, as_points(v)?)))
                    .collect();
                if totals.len() >= 2 && totals.len() == map.len() {
                    Score::TeamTotals(totals)
                } else {
                    Score::NotRecorded
                }
            }
            _ => Score::NotRecorded,
        }
    }

    /// Legacy shape for the persistence layer: set scores as a `"6-4, 4-6"` string,
    /// totals as a label-keyed object, nothing recorded as null.
    pub fn to_legacy(&self) -> Value {
        match self {
            Score::NotRecorded => Value::Null,
            Score::SetScores(sets) => Value::String(
                sets.iter()
                    .map(|(a, b)| format!("{}-{}", a, b))
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Score::TeamTotals(totals) => Value::Object(
                totals
                    .iter()
                    .map(|(team, points)| (team.label(), Value::from(*points)))
                    .collect(),
            ),
        }
    }

    /// Winning team, if the score decides one. Sets go to whoever won more of them;
    /// totals go to the unique highest total.
    pub fn winner(&self) -> Option<TeamId> {
        match self {
            Score::NotRecorded => None,
            Score::SetScores(sets) => {
                let (mut a_sets, mut b_sets) = (0, 0);
                for (a, b) in sets {
                    match a.cmp(b) {
                        Ordering::Greater => a_sets += 1,
                        Ordering::Less => b_sets += 1,
                        Ordering::Equal => {}
                    }
                }
                match a_sets.cmp(&b_sets) {
                    Ordering::Greater => Some(TeamId::from_index(0)),
                    Ordering::Less => Some(TeamId::from_index(1)),
                    Ordering::Equal => None,
                }
            }
            Score::TeamTotals(totals) => {
                let best = totals.values().copied().max()?;
                let mut leaders = totals.iter().filter(|(_, p)| **p == best);
                let (team, _) = leaders.next()?;
                if leaders.next().is_some() {
                    None
                } else {
                    Some(*team)
                }
            }
        }
    }
}

fn as_points(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|n| u32::try_from(n).ok())
}

fn parse_set_string(s: &str) -> Score {
    let sets: Vec<(u32, u32)> = s
        .split(',')
        .filter_map(|game| {
            let (a, b) = game.trim().split_once('-')?;
            Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
        })
        .collect();
    if sets.is_empty() {
        Score::NotRecorded
    } else {
        Score::SetScores(sets)
    }
}
