mod alpha_beta;
mod board;
mod bot_controller;
mod error;
mod game_state;
mod minimax;
mod strategy;
mod types;
mod win_detector;

pub use alpha_beta::AlphaBetaBot;
pub use board::Board;
pub use bot_controller::{BotKind, calculate_move};
pub use error::GameError;
pub use game_state::TicTacToeGameState;
pub use minimax::MinimaxBot;
pub use strategy::{ScoredMove, SearchStats, Strategy, WIN_SCORE, terminal_score};
pub use types::{BOARD_SIZE, GameStatus, Mark, Position};
pub use win_detector::check_win;
