#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

/// A Connect Z board with dimensions taken from the game file.
///
/// Cells are stored row-major with row 0 at the bottom, so a counter
/// dropped into a column lands at the lowest empty row. `heights` counts
/// the counters in each column; `heights[col]` is always the next row
/// written in that column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    heights: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
            heights: vec![0; width],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a specific position
    /// Row 0 is the bottom, row `height - 1` is the top
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Number of counters already dropped into a column.
    pub fn column_height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Height of the fullest column.
    pub fn max_column_height(&self) -> usize {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    /// The row the next counter in this column would land on, or `None`
    /// when the column is full.
    pub fn next_free_row(&self, col: usize) -> Option<usize> {
        let row = self.heights[col];
        if row < self.height {
            Some(row)
        } else {
            None
        }
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.heights[col] == self.height
    }

    /// Drop a counter into a column, returns the row where it landed
    pub fn place(&mut self, col: usize, player: super::Player) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.next_free_row(col).ok_or(MoveError::ColumnFull)?;
        self.cells[row * self.width + col] = player.cell();
        self.heights[col] += 1;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }
}
