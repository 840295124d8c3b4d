//! Batch match generation: plan -> assign -> pair -> assemble -> conflict report.

use crate::logic::assembler::assemble;
use crate::logic::assigner::{assign, order_players, PlayerOrder};
use crate::logic::conflicts::check_conflicts;
use crate::logic::pairing::generate_pairings;
use crate::logic::planner::{check_plan, plan};
use crate::models::{
    ConflictReason, EngineError, ExistingBooking, MatchTemplate, Player, ScheduleDefaults, Team,
    TeamPlan,
};
use serde::{Deserialize, Serialize};

/// Input of one "generate matches" call. Players are a snapshot, not a live view.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub players: Vec<Player>,
    pub preferred_team_size: usize,
    pub schedule_defaults: ScheduleDefaults,
    pub order: PlayerOrder,
}

/// Conflicts found for one template of the batch.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TemplateConflicts {
    /// Index into `GenerationResult::match_templates`.
    pub template_index: usize,
    pub reasons: Vec<ConflictReason>,
}

/// Everything a generation UI needs: the plan, rosters, templates and every conflict.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub team_plan: TeamPlan,
    /// Why no teams were formed, when the plan is invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_error: Option<EngineError>,
    pub teams: Vec<Team>,
    pub match_templates: Vec<MatchTemplate>,
    pub conflicts: Vec<TemplateConflicts>,
}

/// Run the whole pipeline for one request against a bookings snapshot.
///
/// An invalid plan is not an error: the result carries the plan (with its
/// description, classified in `plan_error`) and no teams. Mismatched or duplicated
/// player input and a duration outside `1..=MAX_DURATION_MINUTES` are errors.
/// Each template is checked against `existing` and against the conflict-free
/// templates before it, so one pass reports every collision in the batch.
pub fn generate_matches(
    request: GenerationRequest,
    existing: &[ExistingBooking],
) -> Result<GenerationResult, EngineError> {
    if !request.schedule_defaults.has_valid_duration() {
        return Err(EngineError::InvalidDuration(request.schedule_defaults.duration_minutes));
    }
    let players = order_players(request.players, request.order);
    let team_plan = plan(players.len(), request.preferred_team_size);
    let assignment = assign(&players, &team_plan)?;

    if !assignment.is_valid {
        log::warn!(
            "generate: no matches for {} players at size {}: {}",
            players.len(),
            request.preferred_team_size,
            team_plan.description
        );
        return Ok(GenerationResult {
            plan_error: check_plan(&team_plan).err(),
            team_plan,
            teams: Vec::new(),
            match_templates: Vec::new(),
            conflicts: Vec::new(),
        });
    }

    let pairings = generate_pairings(&assignment.teams);
    let match_templates = assemble(&pairings, &assignment.teams, &request.schedule_defaults);

    let mut booked: Vec<ExistingBooking> = existing.to_vec();
    let mut conflicts = Vec::new();
    for (template_index, template) in match_templates.iter().enumerate() {
        let reasons = check_conflicts(template, &booked);
        if reasons.is_empty() {
            booked.push(template.as_booking(None));
        } else {
            conflicts.push(TemplateConflicts {
                template_index,
                reasons,
            });
        }
    }

    log::info!(
        "generate: {} players -> {} teams, {} templates, {} with conflicts",
        players.len(),
        assignment.teams.len(),
        match_templates.len(),
        conflicts.len()
    );

    Ok(GenerationResult {
        team_plan,
        plan_error: None,
        teams: assignment.teams,
        match_templates,
        conflicts,
    })
}
