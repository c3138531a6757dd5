use super::types::{BOARD_SIZE, Mark};

pub type Cells = [[Mark; BOARD_SIZE]; BOARD_SIZE];

/// Every row, then every column, then both diagonals, as (row, col) triples.
const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn has_won(cells: &Cells, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| cells[row][col] == mark))
}

/// The mark owning a complete line. Play stops at the first completed line,
/// so at most one mark can have won.
pub fn check_win(cells: &Cells) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_won(cells, mark))
}
