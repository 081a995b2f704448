use log::debug;
use super::types::Placement;

/// N×N board of queen markers, alive for a single `solve` call
struct Board {
    n: usize,
    cells: Vec<bool>, // row-major
}

impl Board {
    fn new(n: usize) -> Self {
        Board { n, cells: vec![false; n * n] }
    }

    fn has_queen(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.n + col]
    }

    fn set(&mut self, row: usize, col: usize, queen: bool) {
        self.cells[row * self.n + col] = queen;
    }

    /// Only columns left of `col` can hold queens yet, so only the row and the
    /// two diagonals running leftwards need checking.
    fn is_safe(&self, row: usize, col: usize) -> bool {
        // same row
        if (0..col).any(|c| self.has_queen(row, c)) {
            return false;
        }

        // upper-left diagonal
        if (0..=row).rev().zip((0..=col).rev()).any(|(r, c)| self.has_queen(r, c)) {
            return false;
        }

        // lower-left diagonal
        if (row..self.n).zip((0..=col).rev()).any(|(r, c)| self.has_queen(r, c)) {
            return false;
        }

        true
    }

    fn into_placement(self) -> Placement {
        let columns = (0..self.n)
            .map(|row| {
                (0..self.n)
                    .find(|&col| self.has_queen(row, col))
                    .unwrap_or_default()
            })
            .collect();
        Placement::from_columns(columns)
    }
}

/// Places a queen in `col` and every column after it. Returns true once all
/// columns are filled, leaving the solution on the board.
fn place_from_column(board: &mut Board, col: usize) -> bool {
    if col >= board.n {
        return true;
    }

    for row in 0..board.n {
        if board.is_safe(row, col) {
            board.set(row, col, true);

            if place_from_column(board, col + 1) {
                return true;
            }

            // dead end, backtrack
            board.set(row, col, false);
        }
    }

    false
}

/// Finds the first N-Queens placement in column-major, top-to-bottom search
/// order. The result for a given `n` is always the same. Returns `None` when no
/// placement exists (n = 2 or 3).
pub fn solve(n: usize) -> Option<Placement> {
    let mut board = Board::new(n);
    if place_from_column(&mut board, 0) {
        let placement = board.into_placement();
        debug!("Solved {}-queens: {:?}", n, placement);
        Some(placement)
    } else {
        debug!("No {}-queens placement exists", n);
        None
    }
}
