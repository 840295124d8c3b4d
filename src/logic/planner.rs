//! Team sizing: how many teams, and how big, for a player count and a preferred team size.

use crate::models::{EngineError, TeamPlan};

/// Fewest players that can form team matches at all.
pub const MIN_PLAYERS: usize = 6;

/// Largest playable team. A remainder may only enlarge the last team up to this size.
pub const MAX_TEAM_SIZE: usize = 6;

/// Smallest preferred team size the planner accepts.
const MIN_TEAM_SIZE: usize = 2;

/// Compute the canonical plan for `total_players` with `preferred_team_size`.
///
/// 1. Below [`MIN_PLAYERS`]: invalid.
/// 2. `q = total / size`, `r = total % size`; fewer than two full teams: invalid.
/// 3. `r == 0`: `q` teams of `size`.
/// 4. `r > 0`: `q - 1` teams of `size` plus a last team of `size + r`, if that stays
///    within [`MAX_TEAM_SIZE`]; otherwise invalid. Players are never dropped.
///
/// Pure: the same inputs always give the same plan.
pub fn plan(total_players: usize, preferred_team_size: usize) -> TeamPlan {
    if preferred_team_size < MIN_TEAM_SIZE {
        return TeamPlan::invalid(
            total_players,
            preferred_team_size,
            format!("Preferred team size must be at least {}", MIN_TEAM_SIZE),
        );
    }
    if total_players < MIN_PLAYERS {
        return TeamPlan::invalid(
            total_players,
            preferred_team_size,
            format!(
                "Not enough players for team matches (minimum {} required)",
                MIN_PLAYERS
            ),
        );
    }

    let full_teams = total_players / preferred_team_size;
    let remainder = total_players % preferred_team_size;

    if full_teams < 2 {
        return TeamPlan::invalid(
            total_players,
            preferred_team_size,
            format!("Not enough players for {}-player teams", preferred_team_size),
        );
    }

    let mut players_per_team = vec![preferred_team_size; full_teams];
    let description = if remainder == 0 {
        format!("{} teams of {} players each", full_teams, preferred_team_size)
    } else {
        let enlarged = preferred_team_size + remainder;
        if enlarged > MAX_TEAM_SIZE {
            return TeamPlan::invalid(
                total_players,
                preferred_team_size,
                format!(
                    "{} leftover players would make a team of {} (maximum {}); choose a different team size",
                    remainder, enlarged, MAX_TEAM_SIZE
                ),
            );
        }
        if let Some(last) = players_per_team.last_mut() {
            *last = enlarged;
        }
        format!(
            "{} of {} players + 1 team of {} players",
            count_teams(full_teams - 1),
            preferred_team_size,
            enlarged
        )
    };

    log::debug!(
        "plan: {} players, preferred size {} -> {:?}",
        total_players,
        preferred_team_size,
        players_per_team
    );

    TeamPlan {
        total_players,
        team_size: preferred_team_size,
        team_count: players_per_team.len(),
        players_per_team,
        is_valid: true,
        is_optimal: remainder == 0,
        description,
    }
}

fn count_teams(n: usize) -> String {
    if n == 1 {
        "1 team".to_string()
    } else {
        format!("{} teams", n)
    }
}

/// Every valid plan for team sizes 2 through [`MAX_TEAM_SIZE`], for showing alternatives.
///
/// Even plans come first, then fewer teams, then smaller sizes. Each entry is exactly
/// what [`plan`] returns for that size, so a suggestion always generates as shown.
pub fn suggest_plans(total_players: usize) -> Vec<TeamPlan> {
    let mut plans: Vec<TeamPlan> = (MIN_TEAM_SIZE..=MAX_TEAM_SIZE)
        .map(|size| plan(total_players, size))
        .filter(|p| p.is_valid)
        .collect();
    plans.sort_by_key(|p| (!p.is_optimal, p.team_count, p.team_size));
    plans
}

/// Classify an invalid plan as an error for callers that propagate with `?`.
pub fn check_plan(plan: &TeamPlan) -> Result<(), EngineError> {
    if plan.is_valid {
        Ok(())
    } else if plan.team_size >= MIN_TEAM_SIZE && plan.total_players < MIN_PLAYERS {
        Err(EngineError::InsufficientPlayers {
            minimum: MIN_PLAYERS,
            available: plan.total_players,
        })
    } else {
        Err(EngineError::InfeasiblePlan(plan.description.clone()))
    }
}
