//! Integration tests for team sizing: the club's QA matrix and plan invariants.

use club_match_engine::{check_plan, plan, suggest_plans, EngineError, MAX_TEAM_SIZE, MIN_PLAYERS};

#[test]
fn eighteen_players_size_three_makes_six_even_teams() {
    let p = plan(18, 3);
    assert!(p.is_valid);
    assert!(p.is_optimal);
    assert_eq!(p.team_count, 6);
    assert_eq!(p.players_per_team, vec![3; 6]);
    assert_eq!(p.description, "6 teams of 3 players each");
}

#[test]
fn ten_players_size_four_enlarges_last_team() {
    let p = plan(10, 4);
    assert!(p.is_valid);
    assert!(!p.is_optimal);
    assert_eq!(p.team_count, 2);
    assert_eq!(p.players_per_team, vec![4, 6]);
    assert_eq!(p.description, "1 team of 4 players + 1 team of 6 players");
}

#[test]
fn thirty_players_size_five_makes_six_even_teams() {
    let p = plan(30, 5);
    assert!(p.is_valid);
    assert_eq!(p.team_count, 6);
    assert_eq!(p.players_per_team, vec![5; 6]);
}

#[test]
fn five_players_is_below_the_floor() {
    let p = plan(5, 3);
    assert!(!p.is_valid);
    assert_eq!(p.team_count, 0);
    assert!(p.players_per_team.is_empty());
    assert!(p.description.contains("minimum 6"));
    assert_eq!(
        check_plan(&p),
        Err(EngineError::InsufficientPlayers { minimum: 6, available: 5 })
    );
}

#[test]
fn fewer_than_two_full_teams_is_infeasible() {
    let p = plan(8, 5);
    assert!(!p.is_valid);
    assert_eq!(p.description, "Not enough players for 5-player teams");
    assert!(matches!(check_plan(&p), Err(EngineError::InfeasiblePlan(_))));
}

#[test]
fn remainder_beyond_cap_is_infeasible_not_dropped() {
    // 14 / 5 = 2 rem 4 -> last team would have 9 players.
    let p = plan(14, 5);
    assert!(!p.is_valid);
    assert_eq!(p.team_count, 0);
    assert!(matches!(check_plan(&p), Err(EngineError::InfeasiblePlan(_))));

    // 13 / 4 = 3 rem 1 -> last team of 5 is fine.
    let p = plan(13, 4);
    assert!(p.is_valid);
    assert_eq!(p.players_per_team, vec![4, 4, 5]);
}

#[test]
fn team_size_below_two_is_rejected() {
    for size in 0..2 {
        let p = plan(12, size);
        assert!(!p.is_valid);
        assert!(matches!(check_plan(&p), Err(EngineError::InfeasiblePlan(_))));
    }
}

#[test]
fn pairs_are_allowed_once_the_floor_is_met() {
    assert_eq!(plan(6, 2).players_per_team, vec![2, 2, 2]);
    assert_eq!(plan(7, 2).players_per_team, vec![2, 2, 3]);
}

#[test]
fn valid_plans_conserve_every_player() {
    for total in 0..=80 {
        for size in 2..=8 {
            let p = plan(total, size);
            if !p.is_valid {
                assert_eq!(p.team_count, 0, "total={total} size={size}");
                continue;
            }
            assert!(total >= MIN_PLAYERS);
            assert_eq!(p.planned_players(), total, "total={total} size={size}");
            assert_eq!(p.team_count, p.players_per_team.len());
            assert!(p.team_count >= 2);
            let (last, rest) = p.players_per_team.split_last().unwrap();
            assert!(rest.iter().all(|&s| s == size));
            assert!(*last == size || *last <= MAX_TEAM_SIZE);
        }
    }
}

#[test]
fn plan_is_deterministic() {
    for total in 0..40 {
        for size in 2..7 {
            assert_eq!(plan(total, size), plan(total, size));
        }
    }
}

#[test]
fn suggestions_are_valid_plans_with_even_ones_first() {
    let suggestions = suggest_plans(12);
    let sizes: Vec<usize> = suggestions.iter().map(|p| p.team_size).collect();
    // 12/5 would need a team of 7, so size 5 is absent.
    assert_eq!(sizes, vec![6, 4, 3, 2]);
    for s in &suggestions {
        assert_eq!(*s, plan(12, s.team_size));
    }

    let suggestions = suggest_plans(11);
    assert!(suggestions.iter().all(|p| p.is_valid && p.planned_players() == 11));
    assert!(suggest_plans(4).is_empty());
}
