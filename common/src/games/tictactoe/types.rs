use std::fmt;

pub const BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | '_' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
