use super::alpha_beta::AlphaBetaBot;
use super::board::Board;
use super::minimax::MinimaxBot;
use super::strategy::Strategy;
use super::types::{Mark, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BotKind {
    Minimax,
    AlphaBeta,
}

impl BotKind {
    pub fn display_name(self) -> &'static str {
        match self {
            BotKind::Minimax => "Minimax Bot",
            BotKind::AlphaBeta => "Alpha-Beta Bot",
        }
    }

    pub fn create_strategy(self) -> Box<dyn Strategy> {
        match self {
            BotKind::Minimax => Box::new(MinimaxBot::new()),
            BotKind::AlphaBeta => Box::new(AlphaBetaBot::new()),
        }
    }
}

pub fn calculate_move(bot_kind: BotKind, board: &Board, current_mark: Mark) -> Option<Position> {
    bot_kind.create_strategy().choose_move(board, current_mark)
}
