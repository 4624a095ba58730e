//! Scoreboard service
//!
//! In-memory registry of live matches with ranked summaries.
//!
//! **Key invariants:**
//! - The ordered (home, away) pair identifies a match; the reversed pair is a
//!   different match
//! - Scores never go negative; a failed update changes nothing
//! - Team identity and start time are immutable once a match starts
//! - Summaries are snapshots, ordered by total score descending then start
//!   time descending

pub mod board;
pub mod ranking;

pub use board::ScoreBoard;
