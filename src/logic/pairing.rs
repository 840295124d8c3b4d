//! Team-vs-team pairings: a single match for two teams, full round robin for more.

use crate::models::{Team, TeamId, TeamPairing};

/// Pair up teams.
///
/// - fewer than 2 teams: nothing to generate (empty, not an error)
/// - exactly 2: one pairing
/// - more: every unordered pair once, `k * (k - 1) / 2` pairings in ascending
///   `(team_a, team_b)` order
///
/// Team ids order by fill position (`A`..`Z`, `AA`, `AB`, ...), so past `Z` the
/// order is not lexical: `AA` sorts after `Z`, not after `A`.
pub fn generate_pairings(teams: &[Team]) -> Vec<TeamPairing> {
    let mut ids: Vec<TeamId> = teams.iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();

    let mut pairings = Vec::with_capacity(ids.len() * ids.len().saturating_sub(1) / 2);
    for (i, &team_a) in ids.iter().enumerate() {
        for &team_b in &ids[i + 1..] {
            pairings.push(TeamPairing { team_a, team_b });
        }
    }
    pairings
}
