//! Match generation logic: planning, assignment, pairing, conflicts, assembly.

mod assembler;
mod assigner;
mod conflicts;
mod generate;
mod pairing;
mod planner;

pub use assembler::assemble;
pub use assigner::{assign, order_players, Assignment, PlayerOrder};
pub use conflicts::{check_conflicts, check_conflicts_excluding};
pub use generate::{generate_matches, GenerationRequest, GenerationResult, TemplateConflicts};
pub use pairing::generate_pairings;
pub use planner::{check_plan, plan, suggest_plans, MAX_TEAM_SIZE, MIN_PLAYERS};
