//! Core Connect Z game logic: header parsing, board representation, win
//! scanning, and the replay driver that turns a move log into an outcome.

mod board;
mod driver;
mod player;
mod spec;
mod win;

pub use board::{Board, Cell, MoveError};
pub use driver::{replay, replay_file, Outcome, Replay};
pub use player::Player;
pub use spec::GameSpec;
pub use win::has_win;
