use std::time::Instant;

use super::board::Board;
use super::strategy::{ScoredMove, SearchStats, Strategy, terminal_score};
use super::types::Mark;

/// Plain minimax over the whole remaining game tree.
#[derive(Debug, Default)]
pub struct MinimaxBot {
    stats: SearchStats,
}

impl MinimaxBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn evaluate(
        &mut self,
        board: &mut Board,
        depth: usize,
        is_maximizing: bool,
        player: Mark,
        opponent: Mark,
    ) -> i32 {
        self.stats.nodes_visited += 1;

        if let Some(score) = terminal_score(board, depth, player, opponent) {
            return score;
        }

        let moves = board.legal_moves();

        if is_maximizing {
            let mut max_eval = i32::MIN;
            for position in moves {
                board.apply_move(position.row, position.col, player);
                let eval = self.evaluate(board, depth + 1, false, player, opponent);
                board.undo_move(position.row, position.col);

                max_eval = max_eval.max(eval);
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for position in moves {
                board.apply_move(position.row, position.col, opponent);
                let eval = self.evaluate(board, depth + 1, true, player, opponent);
                board.undo_move(position.row, position.col);

                min_eval = min_eval.min(eval);
            }
            min_eval
        }
    }
}

impl Strategy for MinimaxBot {
    fn name(&self) -> &'static str {
        "Minimax Bot"
    }

    fn search(&mut self, board: &Board, player: Mark) -> Option<ScoredMove> {
        let opponent = player.opponent()?;
        let started = Instant::now();
        self.stats = SearchStats::default();

        let mut scratch = *board;
        let mut best_move: Option<ScoredMove> = None;

        for position in board.legal_moves() {
            scratch.apply_move(position.row, position.col, player);
            let score = self.evaluate(&mut scratch, 0, false, player, opponent);
            scratch.undo_move(position.row, position.col);

            if best_move.is_none_or(|best| score > best.score) {
                best_move = Some(ScoredMove::new(position, score));
            }
        }

        debug_assert_eq!(scratch, *board);
        self.stats.elapsed = started.elapsed();
        best_move
    }

    fn last_stats(&self) -> SearchStats {
        self.stats
    }
}
