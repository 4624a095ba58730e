//! Match lifecycle types
//!
//! A match is created at kick-off, has its score updated in place while it is
//! live, and is removed when it finishes. Identity (teams, start time) is
//! immutable after creation; only the scores change.

use crate::errors::ScoreBoardError;
use crate::score::Score;
use crate::team::TeamName;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a match: the ordered (home, away) pair of normalized names
///
/// The pair is ordered, so (A, B) and (B, A) identify two different matches.
/// Used directly as the registry map key; no string concatenation or
/// separator is involved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchKey {
    pub home: TeamName,
    pub away: TeamName,
}

impl MatchKey {
    /// Build a key from two normalized names
    ///
    /// Fails with `InvalidArgument` if both names normalize to the same team.
    pub fn new(home: TeamName, away: TeamName) -> Result<Self, ScoreBoardError> {
        if home == away {
            return Err(ScoreBoardError::invalid_argument(
                "home and away team cannot be the same",
            ));
        }
        Ok(Self { home, away })
    }
}

impl fmt::Display for MatchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.home, self.away)
    }
}

/// A live match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub home_score: Score,
    pub away_score: Score,
    /// Immutable once set; nanosecond resolution so matches started within
    /// the same second still total-order.
    pub start_time: DateTime<Utc>,
}

impl Match {
    /// Create a new match at 0-0
    pub fn new(home_team: TeamName, away_team: TeamName, start_time: DateTime<Utc>) -> Self {
        Self::with_score(home_team, away_team, Score::zero(), Score::zero(), start_time)
    }

    /// Create a match with an explicit initial score (seed/import path)
    pub fn with_score(
        home_team: TeamName,
        away_team: TeamName,
        home_score: Score,
        away_score: Score,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            home_team,
            away_team,
            home_score,
            away_score,
            start_time,
        }
    }

    /// Replace both scores
    ///
    /// Scores are already validated (`Score` cannot hold a negative value),
    /// so this cannot fail and both writes always land together.
    pub fn set_score(&mut self, home_score: Score, away_score: Score) {
        self.home_score = home_score;
        self.away_score = away_score;
    }

    /// Combined score used for summary ranking
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score.value()) + u64::from(self.away_score.value())
    }

    /// Read-only view of the current state
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            home_score: self.home_score,
            away_score: self.away_score,
            start_time: self.start_time,
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_score, self.away_team
        )
    }
}

/// Owned copy of a match's observable state
///
/// Summaries hand these out instead of references into the registry, so a
/// returned summary is a snapshot: later registry mutations never alter it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub home_team: TeamName,
    pub away_team: TeamName,
    pub home_score: Score,
    pub away_score: Score,
    pub start_time: DateTime<Utc>,
}

impl fmt::Display for MatchSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_score, self.away_team
        )
    }
}
