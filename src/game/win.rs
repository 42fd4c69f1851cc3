use super::{Board, Cell, Player};

/// Check whether `player` owns a contiguous run of `run_length` counters
/// anywhere on the board.
///
/// Pure existence scan: rows first, then columns, then both diagonal
/// families. Between rows and the rest sits a gravity short-circuit: a run
/// that spans more than one row needs at least one column holding
/// `run_length` counters, so a shallow board can skip everything after the
/// row pass.
pub fn has_win(board: &Board, player: Player, run_length: usize) -> bool {
    debug_assert!(run_length >= 1, "run length comes from a validated header");

    let target = player.cell();

    for row in 0..board.height() {
        if run_in_line(board, target, run_length, (row, 0), (0, 1)) {
            return true;
        }
    }

    if board.max_column_height() < run_length {
        return false;
    }

    for col in 0..board.width() {
        if run_in_line(board, target, run_length, (0, col), (1, 0)) {
            return true;
        }
    }

    // Rising diagonals (up-right) start on the bottom row and the left edge
    for col in 0..board.width() {
        if run_in_line(board, target, run_length, (0, col), (1, 1)) {
            return true;
        }
    }
    for row in 1..board.height() {
        if run_in_line(board, target, run_length, (row, 0), (1, 1)) {
            return true;
        }
    }

    // Falling diagonals (down-right) start on the top row and the left edge
    let top = board.height() - 1;
    for col in 0..board.width() {
        if run_in_line(board, target, run_length, (top, col), (-1, 1)) {
            return true;
        }
    }
    for row in 0..top {
        if run_in_line(board, target, run_length, (row, 0), (-1, 1)) {
            return true;
        }
    }

    false
}

/// Walk one line of the board from `start` along `step`, counting the
/// longest streak of `target` cells. Coordinates are bounds-checked every
/// step, so lines end at the board edge and never wrap onto another row or
/// column.
fn run_in_line(
    board: &Board,
    target: Cell,
    run_length: usize,
    start: (usize, usize),
    step: (isize, isize),
) -> bool {
    let mut streak = 0;
    let mut row = start.0 as isize;
    let mut col = start.1 as isize;

    while row >= 0
        && col >= 0
        && (row as usize) < board.height()
        && (col as usize) < board.width()
    {
        if board.get(row as usize, col as usize) == target {
            streak += 1;
            if streak == run_length {
                return true;
            }
        } else {
            streak = 0;
        }
        row += step.0;
        col += step.1;
    }

    false
}
