//! Normalized team name type
//!
//! A `TeamName` is always stored in canonical per-word-capitalized form, so
//! two spellings of the same team compare equal and derive the same match key.

use crate::errors::ScoreBoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A team name in canonical form
///
/// Canonical form: trimmed, words separated by single spaces, each word with
/// its first character uppercased and the remainder lowercased. Equality and
/// hashing operate on the canonical string, so name comparison is effectively
/// case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    /// Normalize a raw team name into canonical form
    ///
    /// Fails with `InvalidArgument` if the input is empty or whitespace-only.
    /// Normalization is idempotent: normalizing an already canonical name
    /// returns it unchanged.
    pub fn normalize(raw: &str) -> Result<Self, ScoreBoardError> {
        if raw.trim().is_empty() {
            return Err(ScoreBoardError::invalid_argument(
                "team name cannot be blank",
            ));
        }

        let canonical = raw
            .split_whitespace()
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self(canonical))
    }

    /// Get the canonical name string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Uppercase the first character of a word, lowercase the rest.
///
/// Simple one-to-one case mapping only: if the first character's uppercase
/// form expands to multiple characters (e.g. 'ß' -> "SS"), the character is
/// kept as-is. This keeps normalization idempotent for every input.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };

    let mut upper = first.to_uppercase();
    let head = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => first,
    };

    let mut result = String::with_capacity(word.len());
    result.push(head);
    result.extend(chars.flat_map(char::to_lowercase));
    result
}
