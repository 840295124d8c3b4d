//! Template assembly: pairings + rosters + schedule defaults -> match templates.

use crate::models::{
    MatchSkill, MatchTemplate, Participant, ScheduleDefaults, Team, TeamId, TeamPairing,
};

/// Rosters up to this size are named player by player in the title.
const NAMED_ROSTER_LIMIT: usize = 2;

/// Build one template per pairing. No conflict checking happens here.
///
/// Without a court rotation every template gets the default court and start time.
/// With `schedule.courts` set, templates are spread over the courts first and then
/// over consecutive slots of `duration_minutes`. A rotation that runs past midnight
/// continues on the next date.
pub fn assemble(
    pairings: &[TeamPairing],
    teams: &[Team],
    schedule: &ScheduleDefaults,
) -> Vec<MatchTemplate> {
    let round_robin = pairings.len() > 1;
    let mut templates = Vec::with_capacity(pairings.len());

    for pairing in pairings {
        let (Some(team_a), Some(team_b)) = (find_team(teams, pairing.team_a), find_team(teams, pairing.team_b))
        else {
            log::warn!(
                "assemble: pairing {} vs {} references an unknown team, skipped",
                pairing.team_a,
                pairing.team_b
            );
            continue;
        };

        let index = templates.len();
        let Some(start) = schedule.slot_start(index) else {
            log::warn!("assemble: slot {} falls outside the calendar, skipped", index);
            continue;
        };
        let court_id = if schedule.courts.is_empty() {
            schedule.court_id
        } else {
            Some(schedule.courts[index % schedule.courts.len()])
        };

        let participants: Vec<Participant> = [team_a, team_b]
            .iter()
            .flat_map(|t| {
                t.players.iter().map(move |p| Participant {
                    player: p.clone(),
                    team: t.id,
                })
            })
            .collect();

        let versus = format!("Team {} vs Team {}", team_a.id, team_b.id);
        let title = if team_a.players.len() <= NAMED_ROSTER_LIMIT && team_b.players.len() <= NAMED_ROSTER_LIMIT {
            format!("{} vs {}", team_a.display_name(), team_b.display_name())
        } else {
            versus.clone()
        };
        let (description, notes) = if round_robin {
            (format!("Round Robin: {}", versus), "Round Robin tournament match".to_string())
        } else {
            (versus, "Team match".to_string())
        };

        templates.push(MatchTemplate {
            title,
            match_type: schedule.match_type,
            skill_level: schedule
                .skill_level
                .unwrap_or_else(|| common_skill(&participants)),
            court_id,
            date: start.date(),
            time: start.time(),
            duration_minutes: schedule.duration_minutes,
            max_players: team_a.players.len() + team_b.players.len(),
            participants,
            description,
            notes,
        });
    }

    templates
}

fn find_team(teams: &[Team], id: TeamId) -> Option<&Team> {
    teams.iter().find(|t| t.id == id)
}

/// The participants' shared skill level, or `Mixed`.
fn common_skill(participants: &[Participant]) -> MatchSkill {
    let mut levels = participants.iter().map(|p| p.player.skill_level);
    match levels.next() {
        Some(first) if levels.all(|l| l == first) => first.into(),
        _ => MatchSkill::Mixed,
    }
}
