use super::board::Board;
use super::error::GameError;
use super::types::{GameStatus, Mark, Position};

/// The real game: a board, whose turn it is and how the game stands.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<Position>,
    pub move_count: usize,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
            move_count: 0,
        }
    }

    pub fn place_mark(&mut self, position: Position) -> Result<(), GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        let Position { row, col } = position;
        if self.board.cell(row, col).is_none() {
            return Err(GameError::OutOfBounds { row, col });
        }

        if !self.board.apply_move(row, col, self.current_mark) {
            return Err(GameError::CellOccupied { row, col });
        }

        self.last_move = Some(position);
        self.move_count += 1;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = self.board.winning_mark() {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
