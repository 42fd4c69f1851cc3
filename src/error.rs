use std::io;

/// A rejected game: the first structural problem or rule violation found
/// while replaying a move log. Each variant carries its stable numeric
/// code and its fixed display string.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A move line arrived after the game was already won.
    #[error("Illegal continue")]
    IllegalContinue,

    /// Reserved code in the result table. Row-boundary violations are
    /// reported as [`GameError::InvalidFile`]; no validation path
    /// constructs this variant.
    #[error("Illegal row")]
    IllegalRow,

    /// Reserved code in the result table. Column-boundary violations are
    /// reported as [`GameError::InvalidFile`]; no validation path
    /// constructs this variant.
    #[error("Illegal column")]
    IllegalColumn,

    /// The game can never be won: the required run length exceeds both
    /// board dimensions.
    #[error("Illegal game")]
    IllegalGame,

    /// The content cannot be interpreted: malformed header, malformed or
    /// out-of-range move token, or a move into a full column.
    #[error("Invalid file")]
    InvalidFile,

    /// The input file could not be opened or read.
    #[error("File error")]
    FileError(#[from] io::Error),
}

impl GameError {
    /// Stable numeric code reported for this rejection.
    pub fn code(&self) -> u8 {
        match self {
            GameError::IllegalContinue => 4,
            GameError::IllegalRow => 5,
            GameError::IllegalColumn => 6,
            GameError::IllegalGame => 7,
            GameError::InvalidFile => 8,
            GameError::FileError(_) => 9,
        }
    }
}

/// Errors compare by kind: the io source carried by `FileError` does not
/// affect equality.
impl PartialEq for GameError {
    fn eq(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl Eq for GameError {}
