use std::fmt;
use std::str::FromStr;

use super::error::GameError;
use super::types::{BOARD_SIZE, Mark, Position};
use super::win_detector::{Cells, check_win, has_won};

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 grid of marks. Winner, draw and legal moves are derived from the grid on
/// every call, since search mutates the grid between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: Cells,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn is_legal_move(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(Mark::Empty)
    }

    /// Places `mark` if the move is legal. Returns `false` and leaves the grid
    /// untouched otherwise.
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if mark == Mark::Empty || !self.is_legal_move(row, col) {
            return false;
        }
        self.cells[row][col] = mark;
        true
    }

    /// Clears a cell without validation. Callers only undo cells they just set.
    pub fn undo_move(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = Mark::Empty;
        }
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn winner(&self, mark: Mark) -> bool {
        has_won(&self.cells, mark)
    }

    pub fn winning_mark(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winning_mark().is_none()
    }

    pub fn is_terminal(&self) -> bool {
        self.winning_mark().is_some() || self.is_full()
    }
}

/// Compact single-line form, rows separated by `/` and `.` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for &cell in cells {
                let c = if cell == Mark::Empty { '.' } else { cell.to_char() };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

/// Parses nine cell characters in row-major order. Whitespace, `|` and `/`
/// are separators and ignored.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(GameError::InvalidBoardLength {
                expected: CELL_COUNT,
                got: symbols.len(),
            });
        }

        let mut cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (index, &symbol) in symbols.iter().enumerate() {
            let mark = Mark::from_char(symbol).ok_or(GameError::InvalidCellCharacter {
                character: symbol,
                position: index,
            })?;
            cells[index / BOARD_SIZE][index % BOARD_SIZE] = mark;
        }

        Ok(Self { cells })
    }
}
