//! End-to-end registry scenarios through the public API

use chrono::{TimeZone, Timelike, Utc};
use scoreboard::ScoreBoard;
use types::errors::ScoreBoardError;

#[test]
fn tournament_day_flow() {
    let mut board = ScoreBoard::new();

    board.start_match("mexico", "canada").unwrap();
    board.start_match("spain", "brazil").unwrap();
    board.start_match("germany", "france").unwrap();

    board.update_score("Mexico", "Canada", 0, 5).unwrap();
    board.update_score("Spain", "Brazil", 10, 2).unwrap();
    board.update_score("Germany", "France", 2, 2).unwrap();

    // Spain-Brazil ends; the board keeps ranking the rest.
    board.finish_match("SPAIN", "BRAZIL").unwrap();

    let summary = board.summary();
    let homes: Vec<&str> = summary.iter().map(|m| m.home_team.as_str()).collect();
    assert_eq!(homes, ["Mexico", "Germany"]);

    board.finish_match("Mexico", "Canada").unwrap();
    board.finish_match("Germany", "France").unwrap();
    assert!(board.summary().is_empty());
}

#[test]
fn same_teams_can_rematch_after_finish() {
    let mut board = ScoreBoard::new();

    board.start_match("Germany", "Poland").unwrap();
    board.finish_match("Germany", "Poland").unwrap();

    // The key is free again once the match is finished.
    board.start_match("Germany", "Poland").unwrap();
    let summary = board.summary();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].home_score.value(), 0);
    assert_eq!(summary[0].away_score.value(), 0);
}

#[test]
fn home_and_away_fixtures_coexist() {
    let mut board = ScoreBoard::new();

    board.start_match("Germany", "Poland").unwrap();
    board.start_match("Poland", "Germany").unwrap();

    board.update_score("Germany", "Poland", 3, 0).unwrap();
    board.update_score("Poland", "Germany", 1, 1).unwrap();

    let summary = board.summary();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].home_team.as_str(), "Germany");
    assert_eq!(summary[0].home_score.value(), 3);
    assert_eq!(summary[1].home_team.as_str(), "Poland");

    // Finishing one leg leaves the other untouched.
    board.finish_match("Germany", "Poland").unwrap();
    let summary = board.summary();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].home_team.as_str(), "Poland");
}

#[test]
fn failed_calls_leave_state_untouched() {
    let mut board = ScoreBoard::new();

    board.start_match("Uruguay", "Italy").unwrap();
    board.update_score("Uruguay", "Italy", 6, 6).unwrap();
    let before = board.summary();

    assert!(matches!(
        board.start_match("Uruguay", "Italy"),
        Err(ScoreBoardError::AlreadyExists { .. })
    ));
    assert!(matches!(
        board.update_score("Uruguay", "Italy", -1, 7),
        Err(ScoreBoardError::InvalidArgument { .. })
    ));
    assert!(matches!(
        board.update_score("Italy", "Uruguay", 0, 0),
        Err(ScoreBoardError::NotFound { .. })
    ));
    assert!(matches!(
        board.finish_match("Italy", "Uruguay"),
        Err(ScoreBoardError::NotFound { .. })
    ));
    assert!(matches!(
        board.start_match("", "Italy"),
        Err(ScoreBoardError::InvalidArgument { .. })
    ));

    assert_eq!(board.summary(), before);
}

#[test]
fn seeded_matches_rank_with_live_ones() {
    let mut board = ScoreBoard::new();
    let base = Utc.with_ymd_and_hms(2025, 6, 14, 18, 30, 0).unwrap();

    // Import two in-progress matches from before the process started.
    board
        .start_match_at("Argentina", "Australia", 3, 1, base)
        .unwrap();
    board
        .start_match_at("Uruguay", "Italy", 6, 6, base.with_nanosecond(500).unwrap())
        .unwrap();

    // A fresh match started now has total 0 and sorts last.
    board.start_match("Japan", "Senegal").unwrap();

    let summary = board.summary();
    let homes: Vec<&str> = summary.iter().map(|m| m.home_team.as_str()).collect();
    assert_eq!(homes, ["Uruguay", "Argentina", "Japan"]);
}
