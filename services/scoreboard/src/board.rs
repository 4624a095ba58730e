//! Scoreboard core
//!
//! Owns the collection of live matches keyed by the ordered (home, away)
//! pair of normalized team names, and exposes the four registry operations:
//! start, update, finish, summary.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use types::errors::ScoreBoardError;
use types::matches::{Match, MatchKey, MatchSnapshot};
use types::score::Score;
use types::team::TeamName;

use crate::ranking::summary_order;

/// In-memory registry of live matches
///
/// Single-threaded: every operation is a synchronous read-modify-write on
/// the keyed store. Callers that need concurrent access must wrap the board
/// in one lock covering each call end-to-end.
///
/// Storage uses a BTreeMap so pre-sort iteration order is deterministic.
#[derive(Debug, Default)]
pub struct ScoreBoard {
    matches: BTreeMap<MatchKey, Match>,
}

impl ScoreBoard {
    /// Create an empty scoreboard
    pub fn new() -> Self {
        Self {
            matches: BTreeMap::new(),
        }
    }

    /// Start a match at 0-0, stamped with the current time
    ///
    /// Fails with `InvalidArgument` if either name is blank or both normalize
    /// to the same team, and with `AlreadyExists` if the ordered pair already
    /// has a live match. Starting the reversed pair is a distinct match and
    /// does not collide.
    pub fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<(), ScoreBoardError> {
        let key = self.derive_key(home_team, away_team)?;
        self.check_vacant(&key)?;

        tracing::debug!(%key, "match started");
        let m = Match::new(key.home.clone(), key.away.clone(), Utc::now());
        self.matches.insert(key, m);
        Ok(())
    }

    /// Start a match with an explicit score and start time (seed/import)
    ///
    /// Same validation as `start_match`, plus `InvalidArgument` on a negative
    /// score.
    pub fn start_match_at(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
        start_time: DateTime<Utc>,
    ) -> Result<(), ScoreBoardError> {
        let key = self.derive_key(home_team, away_team)?;
        let home_score = Score::try_new(home_score)?;
        let away_score = Score::try_new(away_score)?;
        self.check_vacant(&key)?;

        tracing::debug!(%key, %home_score, %away_score, "match seeded");
        let m = Match::with_score(
            key.home.clone(),
            key.away.clone(),
            home_score,
            away_score,
            start_time,
        );
        self.matches.insert(key, m);
        Ok(())
    }

    /// Set both scores on a live match
    ///
    /// Fails with `NotFound` if the ordered pair has no live match (the
    /// reversed pair is not consulted), and with `InvalidArgument` if either
    /// score is negative. Both scores are validated before either is written,
    /// so a failed update leaves the previous scores fully intact.
    pub fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<(), ScoreBoardError> {
        let key = self.derive_key(home_team, away_team)?;
        let home_score = Score::try_new(home_score)?;
        let away_score = Score::try_new(away_score)?;

        let m = self
            .matches
            .get_mut(&key)
            .ok_or_else(|| not_found(&key))?;

        tracing::debug!(%key, %home_score, %away_score, "score updated");
        m.set_score(home_score, away_score);
        Ok(())
    }

    /// Remove a finished match
    ///
    /// Fails with `NotFound` if the ordered pair has no live match; a second
    /// finish of the same pair therefore fails.
    pub fn finish_match(
        &mut self,
        home_team: &str,
        away_team: &str,
    ) -> Result<(), ScoreBoardError> {
        let key = self.derive_key(home_team, away_team)?;
        match self.matches.remove(&key) {
            Some(_) => {
                tracing::debug!(%key, "match finished");
                Ok(())
            }
            None => Err(not_found(&key)),
        }
    }

    /// Ranked summary of all live matches
    ///
    /// Ordered by total score descending, ties broken by start time
    /// descending (most recently started first). Returns owned snapshots, so
    /// later board mutations never alter a summary already handed out.
    pub fn summary(&self) -> Vec<MatchSnapshot> {
        let mut live: Vec<&Match> = self.matches.values().collect();
        live.sort_by(|a, b| summary_order(a, b));
        live.into_iter().map(Match::snapshot).collect()
    }

    /// Number of live matches
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether no match is live
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn derive_key(&self, home_team: &str, away_team: &str) -> Result<MatchKey, ScoreBoardError> {
        let home = TeamName::normalize(home_team)?;
        let away = TeamName::normalize(away_team)?;
        MatchKey::new(home, away)
    }

    fn check_vacant(&self, key: &MatchKey) -> Result<(), ScoreBoardError> {
        if self.matches.contains_key(key) {
            return Err(ScoreBoardError::AlreadyExists {
                home: key.home.as_str().to_string(),
                away: key.away.as_str().to_string(),
            });
        }
        Ok(())
    }
}

fn not_found(key: &MatchKey) -> ScoreBoardError {
    ScoreBoardError::NotFound {
        home: key.home.as_str().to_string(),
        away: key.away.as_str().to_string(),
    }
}
