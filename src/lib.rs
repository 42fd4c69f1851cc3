//! # Connect Z
//!
//! Checker for recorded games of Connect Z, the generalized Connect Four
//! played on a `width x height` board where a player wins by lining up
//! `run_length` counters. A game arrives as a text file: one header line
//! with the three dimensions, then one 1-based column number per move.
//! Replaying the file yields either the game's outcome or the first rule
//! violation, each mapped to a stable numeric code.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: header parsing, board, win scan, replay driver
//! - [`error`] — Structured error types and their report codes
//!
//! ## Example
//!
//! ```
//! use connectz::game::{replay, Outcome, Player};
//!
//! let log = "7 6 4\n1\n2\n1\n2\n1\n2\n1\n";
//! let outcome = replay(log.as_bytes()).unwrap();
//! assert_eq!(outcome, Outcome::Win(Player::One));
//! assert_eq!(outcome.code(), 1);
//! ```

pub mod error;
pub mod game;

pub use error::GameError;
pub use game::{replay, replay_file, Outcome};

/// Numeric code for a finished replay, whichever side of the result it
/// landed on. This is the single integer the command-line tool prints.
pub fn report_code(result: &Result<Outcome, GameError>) -> u8 {
    match result {
        Ok(outcome) => outcome.code(),
        Err(err) => err.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_code_covers_both_families() {
        assert_eq!(report_code(&Ok(Outcome::Draw)), 0);
        assert_eq!(report_code(&Err(GameError::InvalidFile)), 8);
    }
}
