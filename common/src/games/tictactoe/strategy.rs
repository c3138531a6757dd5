use std::time::Duration;

use super::board::Board;
use super::types::{Mark, Position};

/// Score of a win reached at depth zero. A game lasts at most nine plies, so
/// `WIN_SCORE - depth` stays positive for every reachable win.
pub const WIN_SCORE: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub position: Position,
    pub score: i32,
}

impl ScoredMove {
    pub fn new(position: Position, score: i32) -> Self {
        Self { position, score }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes_visited: u64,
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn accumulate(&mut self, other: &SearchStats) {
        self.nodes_visited += other.nodes_visited;
        self.elapsed += other.elapsed;
    }
}

/// A move-selection strategy over the exact game tree.
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// Best move for `player` together with its score, or `None` when the
    /// board has no empty cell or `player` is not a player mark. Ties keep the
    /// earliest move in row-major order.
    fn search(&mut self, board: &Board, player: Mark) -> Option<ScoredMove>;

    /// Statistics of the most recent `search` call.
    fn last_stats(&self) -> SearchStats;

    fn choose_move(&mut self, board: &Board, player: Mark) -> Option<Position> {
        self.search(board, player).map(|scored| scored.position)
    }
}

/// Score of a finished position, checked in order: `player` won, `opponent`
/// won, board full. `None` while the game is still open.
pub fn terminal_score(board: &Board, depth: usize, player: Mark, opponent: Mark) -> Option<i32> {
    if board.winner(player) {
        return Some(WIN_SCORE - depth as i32);
    }
    if board.winner(opponent) {
        return Some(depth as i32 - WIN_SCORE);
    }
    if board.is_full() {
        return Some(0);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_score_for_open_board_is_none() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(terminal_score(&board, 2, Mark::X, Mark::O), None);
    }

    #[test]
    fn test_terminal_score_checks_player_before_opponent() {
        let board: Board = "XXX/OOO/...".parse().unwrap();
        assert_eq!(terminal_score(&board, 1, Mark::X, Mark::O), Some(9));
        assert_eq!(terminal_score(&board, 1, Mark::O, Mark::X), Some(9));
    }

    #[test]
    fn test_stats_accumulate() {
        let mut total = SearchStats::default();
        total.accumulate(&SearchStats {
            nodes_visited: 10,
            elapsed: Duration::from_millis(3),
        });
        total.accumulate(&SearchStats {
            nodes_visited: 5,
            elapsed: Duration::from_millis(4),
        });
        assert_eq!(total.nodes_visited, 15);
        assert_eq!(total.elapsed, Duration::from_millis(7));
    }
}
