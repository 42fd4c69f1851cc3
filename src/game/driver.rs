use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::GameError;
use crate::game::win::has_win;
use crate::game::{Board, GameSpec, Player};

/// Final result of a legal game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Board filled completely with no winning run.
    Draw,
    /// The given player completed a winning run.
    Win(Player),
    /// The log ended with the board neither won nor full.
    Incomplete,
}

impl Outcome {
    /// Stable numeric code reported on stdout.
    pub fn code(&self) -> u8 {
        match self {
            Outcome::Draw => 0,
            Outcome::Win(Player::One) => 1,
            Outcome::Win(Player::Two) => 2,
            Outcome::Incomplete => 3,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Draw => write!(f, "Draw"),
            Outcome::Win(player) => write!(f, "Win for player {}", player.number()),
            Outcome::Incomplete => write!(f, "Incomplete"),
        }
    }
}

/// Replays a recorded game move by move.
///
/// Owns the board and tracks how many moves have been applied and whether a
/// winner has been recorded. Moves arrive as raw text lines; the mover is
/// derived from move parity, never from the input.
pub struct Replay {
    spec: GameSpec,
    board: Board,
    moves: usize,
    winner: Option<Player>,
}

impl Replay {
    pub fn new(spec: GameSpec) -> Self {
        Replay {
            board: Board::new(spec.width, spec.height),
            spec,
            moves: 0,
            winner: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Apply one move line to the game.
    ///
    /// A move after a recorded win is `IllegalContinue`. A token that does
    /// not parse, a column outside `1..=width`, and a drop into a full
    /// column are all `InvalidFile`.
    pub fn apply_move(&mut self, token: &str) -> Result<(), GameError> {
        if self.winner.is_some() {
            return Err(GameError::IllegalContinue);
        }

        let column: i64 = token.trim().parse().map_err(|_| GameError::InvalidFile)?;
        if column < 1 {
            return Err(GameError::InvalidFile);
        }
        let col = usize::try_from(column - 1).map_err(|_| GameError::InvalidFile)?;

        let player = Player::for_move(self.moves);
        self.board
            .place(col, player)
            .map_err(|_| GameError::InvalidFile)?;
        self.moves += 1;

        if self.win_possible() && has_win(&self.board, player, self.spec.run_length) {
            self.winner = Some(player);
        }

        Ok(())
    }

    /// Earliest point a winning run can exist: the winner needs
    /// `run_length` counters and the opponent has moved at least
    /// `run_length - 1` times before the winner's last counter lands.
    fn win_possible(&self) -> bool {
        self.moves >= self.spec.run_length * 2 - 1
    }

    /// True once every cell holds a counter.
    pub fn is_board_full(&self) -> bool {
        self.moves == self.spec.cell_count()
    }

    /// Result of the game as replayed so far.
    pub fn outcome(&self) -> Outcome {
        match self.winner {
            Some(player) => Outcome::Win(player),
            None if self.is_board_full() => Outcome::Draw,
            None => Outcome::Incomplete,
        }
    }
}

/// Replay one recorded game from a line-oriented reader.
///
/// The first line is the game header; each following line is one move. A
/// blank line ends the log early. Once the board is full the remaining
/// lines are ignored, so a win landing on the last cell is still a win.
pub fn replay<R: BufRead>(input: R) -> Result<Outcome, GameError> {
    let mut lines = input.lines();

    let header = lines.next().transpose()?.unwrap_or_default();
    let spec = GameSpec::parse(&header)?;
    let mut game = Replay::new(spec);

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        game.apply_move(&line)?;
        if game.is_board_full() {
            break;
        }
    }

    Ok(game.outcome())
}

/// Open a game file and replay it. A file that cannot be opened or read is
/// `FileError`; the handle is dropped on every exit path.
pub fn replay_file<P: AsRef<Path>>(path: P) -> Result<Outcome, GameError> {
    let file = File::open(path)?;
    replay(BufReader::new(file))
}
