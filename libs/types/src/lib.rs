//! Types library for the live scoreboard
//!
//! Core type definitions shared by the registry service and the console
//! shell.
//!
//! # Modules
//! - `team`: normalized team name type
//! - `score`: validated non-negative score type
//! - `matches`: match lifecycle types (Match, MatchKey, MatchSnapshot)
//! - `errors`: error taxonomy

// Public modules
pub mod errors;
pub mod matches;
pub mod score;
pub mod team;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::matches::*;
    pub use crate::score::*;
    pub use crate::team::*;
}
