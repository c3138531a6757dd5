use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("position ({row}, {col}) is out of bounds (must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },

    #[error("board string has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },
}
