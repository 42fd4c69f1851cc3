use crate::error::GameError;

/// Game dimensions parsed from the first line of a move log.
///
/// The header holds three space-separated positive integers: board width,
/// board height, and the run length needed to win. The shape is strict:
/// exactly three tokens, separated by single spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSpec {
    pub width: usize,
    pub height: usize,
    pub run_length: usize,
}

impl GameSpec {
    /// Parse and validate a header line.
    ///
    /// Structural problems (wrong token count, non-numeric or non-positive
    /// values) are `InvalidFile`. A run length that fits neither dimension
    /// is a well-formed but unwinnable game: `IllegalGame`.
    pub fn parse(line: &str) -> Result<GameSpec, GameError> {
        let fields: Vec<&str> = line.split(' ').collect();
        if fields.len() != 3 {
            return Err(GameError::InvalidFile);
        }

        let width = parse_dimension(fields[0])?;
        let height = parse_dimension(fields[1])?;
        let run_length = parse_dimension(fields[2])?;

        // A winning run may lie along either axis, so it only has to fit
        // the larger dimension.
        if run_length > width.max(height) {
            return Err(GameError::IllegalGame);
        }

        Ok(GameSpec {
            width,
            height,
            run_length,
        })
    }

    /// Total number of cells on the board this spec describes.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

fn parse_dimension(token: &str) -> Result<usize, GameError> {
    match token.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(GameError::InvalidFile),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_valid_header() {
        let spec = GameSpec::parse("7 6 4").unwrap();
        assert_eq!(spec.width, 7);
        assert_eq!(spec.height, 6);
        assert_eq!(spec.run_length, 4);
        assert_eq!(spec.cell_count(), 42);
    }

    #[test]
    fn test_run_of_one_is_legal() {
        assert!(GameSpec::parse("3 2 1").is_ok());
    }

    #[test]
    fn test_run_may_match_either_dimension() {
        // Run fits the width exactly
        assert!(GameSpec::parse("7 6 7").is_ok());
        // Run fits only the height: legal on a tall narrow board
        assert!(GameSpec::parse("2 7 6").is_ok());
    }

    #[test]
    fn test_run_longer_than_both_dimensions() {
        assert_eq!(GameSpec::parse("7 6 8"), Err(GameError::IllegalGame));
        assert_eq!(GameSpec::parse("1 1 2"), Err(GameError::IllegalGame));
    }

    #[test]
    fn test_wrong_token_count() {
        assert_eq!(GameSpec::parse("1 1"), Err(GameError::InvalidFile));
        assert_eq!(GameSpec::parse("3 2 1 4"), Err(GameError::InvalidFile));
        assert_eq!(GameSpec::parse(""), Err(GameError::InvalidFile));
    }

    #[test]
    fn test_stray_separators() {
        // Leading, trailing, or doubled spaces produce empty tokens
        assert_eq!(GameSpec::parse(" 2 3"), Err(GameError::InvalidFile));
        assert_eq!(GameSpec::parse("1 1 "), Err(GameError::InvalidFile));
        assert_eq!(GameSpec::parse("1  2 3"), Err(GameError::InvalidFile));
    }

    #[test]
    fn test_non_numeric_token() {
        assert_eq!(GameSpec::parse("a 2 3"), Err(GameError::InvalidFile));
        assert_eq!(GameSpec::parse("7 6 four"), Err(GameError::InvalidFile));
    }

    #[test]
    fn test_non_positive_dimensions() {
        assert_eq!(GameSpec::parse("0 6 4"), Err(GameError::InvalidFile));
        assert_eq!(GameSpec::parse("7 0 4"), Err(GameError::InvalidFile));
        assert_eq!(GameSpec::parse("7 6 0"), Err(GameError::InvalidFile));
        assert_eq!(GameSpec::parse("-7 6 4"), Err(GameError::InvalidFile));
    }

    #[test]
    fn test_unrepresentable_dimension() {
        assert_eq!(
            GameSpec::parse("99999999999999999999999 6 4"),
            Err(GameError::InvalidFile)
        );
    }
}
