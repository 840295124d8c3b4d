//! Team assignment: fill the planned teams from the player list, in order.

use crate::models::{EngineError, Participant, Player, Team, TeamId, TeamPlan};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How the caller wants players ordered before assignment.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PlayerOrder {
    /// Keep the order the players were supplied in.
    #[default]
    AsGiven,
    /// Shuffle with a seeded RNG. The same seed gives the same order.
    Shuffled { seed: u64 },
}

/// Apply `order` to the player list. Assignment itself never reorders.
pub fn order_players(mut players: Vec<Player>, order: PlayerOrder) -> Vec<Player> {
    if let PlayerOrder::Shuffled { seed } = order {
        let mut rng = StdRng::seed_from_u64(seed);
        players.shuffle(&mut rng);
    }
    players
}

/// Team rosters for one run.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub teams: Vec<Team>,
    /// False when the plan was invalid; `teams` is then empty.
    pub is_valid: bool,
}

impl Assignment {
    /// Flattened player/team join, in team order.
    pub fn participants(&self) -> Vec<Participant> {
        self.teams
            .iter()
            .flat_map(|t| {
                t.players.iter().map(move |p| Participant {
                    player: p.clone(),
                    team: t.id,
                })
            })
            .collect()
    }

    pub fn team_sizes(&self) -> Vec<usize> {
        self.teams.iter().map(|t| t.players.len()).collect()
    }
}

/// Assign every player to exactly one team following `plan.players_per_team`.
///
/// Players are consumed in the order given and teams are filled one after another,
/// labelled `A`, `B`, `C`, ... in fill order. An invalid plan yields no teams.
/// A player list that does not match the plan is an error, never truncated or padded.
pub fn assign(players: &[Player], plan: &TeamPlan) -> Result<Assignment, EngineError> {
    if players.len() != plan.total_players {
        return Err(EngineError::MismatchedInput {
            expected: plan.total_players,
            actual: players.len(),
        });
    }

    let mut seen = HashSet::with_capacity(players.len());
    for p in players {
        if !seen.insert(p.id) {
            return Err(EngineError::DuplicatePlayer(p.id));
        }
    }

    if !plan.is_valid {
        log::debug!("assign: plan invalid ({}), no teams", plan.description);
        return Ok(Assignment {
            teams: Vec::new(),
            is_valid: false,
        });
    }

    if plan.planned_players() != players.len() {
        return Err(EngineError::MismatchedInput {
            expected: plan.planned_players(),
            actual: players.len(),
        });
    }

    let mut rest = players;
    let mut teams = Vec::with_capacity(plan.players_per_team.len());
    for (i, &size) in plan.players_per_team.iter().enumerate() {
        let (roster, tail) = rest.split_at(size);
        teams.push(Team {
            id: TeamId::from_index(i),
            players: roster.to_vec(),
        });
        rest = tail;
    }

    log::debug!(
        "assign: {} players into {} teams {:?}",
        players.len(),
        teams.len(),
        plan.players_per_team
    );

    Ok(Assignment {
        teams,
        is_valid: true,
    })
}
