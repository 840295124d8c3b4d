//! Integration tests for score conversion at the persistence boundary.

use club_match_engine::{Score, TeamId};
use serde_json::json;
use std::collections::BTreeMap;

fn team(label: &str) -> TeamId {
    TeamId::parse(label).unwrap()
}

#[test]
fn set_strings_become_set_scores() {
    let score = Score::from_legacy(&json!("6-4, 4-6, 6-3"));
    assert_eq!(score, Score::SetScores(vec![(6, 4), (4, 6), (6, 3)]));
    assert_eq!(score.winner(), Some(team("A")));
    assert_eq!(score.to_legacy(), json!("6-4, 4-6, 6-3"));
}

#[test]
fn two_team_objects_become_totals() {
    let score = Score::from_legacy(&json!({ "teamA": 11, "teamB": 13 }));
    let mut totals = BTreeMap::new();
    totals.insert(team("A"), 11);
    totals.insert(team("B"), 13);
    assert_eq!(score, Score::TeamTotals(totals));
    assert_eq!(score.winner(), Some(team("B")));
}

#[test]
fn set_objects_become_set_scores() {
    let score = Score::from_legacy(&json!({ "sets": [{ "teamA": 6, "teamB": 2 }, { "teamA": 3, "teamB": 6 }] }));
    assert_eq!(score, Score::SetScores(vec![(6, 2), (3, 6)]));
    assert_eq!(score.winner(), None);
}

#[test]
fn label_keyed_objects_cover_more_than_two_teams() {
    let score = Score::from_legacy(&json!({ "A": 21, "B": 17, "C": 25 }));
    assert_eq!(score.winner(), Some(team("C")));
    assert_eq!(score.to_legacy(), json!({ "A": 21, "B": 17, "C": 25 }));

    let tied = Score::from_legacy(&json!({ "A": 21, "B": 21 }));
    assert_eq!(tied.winner(), None);
}

#[test]
fn unreadable_shapes_are_not_recorded() {
    for value in [json!(null), json!(""), json!("abc"), json!(7), json!({ "foo": 1 }), json!({ "sets": [] })] {
        assert_eq!(Score::from_legacy(&value), Score::NotRecorded, "{value}");
    }
    assert_eq!(Score::NotRecorded.to_legacy(), json!(null));
    assert_eq!(Score::NotRecorded.winner(), None);
}

#[test]
fn tagged_form_serializes_with_kind() {
    let score = Score::SetScores(vec![(6, 4)]);
    let value = serde_json::to_value(&score).unwrap();
    assert_eq!(value, json!({ "kind": "set_scores", "value": [[6, 4]] }));
    assert_eq!(serde_json::from_value::<Score>(value).unwrap(), score);
    assert_eq!(
        serde_json::to_value(Score::NotRecorded).unwrap(),
        json!({ "kind": "not_recorded" })
    );
}
