//! Club match engine: library with models, match-generation logic and collaborator stores.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    assemble, assign, check_conflicts, check_plan, check_conflicts_excluding, generate_matches,
    generate_pairings, order_players, plan, suggest_plans, Assignment, GenerationRequest,
    GenerationResult, PlayerOrder, TemplateConflicts, MAX_TEAM_SIZE, MIN_PLAYERS,
};
pub use models::{
    ConflictReason, Court, CourtId, EngineError, ExistingBooking, MatchId, MatchSkill,
    MatchTemplate, MatchType, Participant, Player, PlayerId, ScheduleDefaults, Score, SkillLevel,
    Team, TeamId, TeamPairing, TeamPlan, DEFAULT_DURATION_MINUTES, MAX_DURATION_MINUTES,
};
pub use store::{ClubStore, CourtStore, MatchStore, PlayerDirectory, StoredMatch};
