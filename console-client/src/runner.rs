use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{GameError, GameStatus, Mark, SearchStats, TicTacToeGameState};
use common::{debug_log, log};

use crate::config::GameMode;
use crate::error::RunnerError;
use crate::human_input::{HumanInput, read_human_move};
use crate::menu::prompt_game_mode;
use crate::participants::{BotSeat, Participant, Seating};
use crate::render::render_board;

#[derive(Debug, Clone, Copy)]
pub struct RunnerSettings {
    /// Pause before each bot move so a watching human can follow the game.
    /// Bot-vs-bot games use the same pause; there is no extra gap between
    /// the two bots' turns.
    pub bot_delay: Duration,
    pub show_search_stats: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReport {
    pub name: &'static str,
    pub mark: Mark,
    pub stats: SearchStats,
    pub moves: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub status: GameStatus,
    pub winner: Option<&'static str>,
    pub move_count: usize,
    pub bots: Vec<BotReport>,
}

pub struct GameRunner<R, W> {
    input: R,
    output: W,
    settings: RunnerSettings,
}

impl<R: BufRead, W: Write> GameRunner<R, W> {
    pub fn new(input: R, output: W, settings: RunnerSettings) -> Self {
        Self {
            input,
            output,
            settings,
        }
    }

    /// Welcome banner, mode selection when `mode` is `None`, one game, farewell.
    pub fn run_session(
        &mut self,
        mode: Option<GameMode>,
        rng: &mut SessionRng,
    ) -> Result<GameSummary, RunnerError> {
        writeln!(self.output, "Welcome to Tic Tac Toe!")?;

        let mode = match mode {
            Some(mode) => mode,
            None => prompt_game_mode(&mut self.input, &mut self.output)?,
        };

        log!("Starting {:?} (seed {})", mode, rng.seed());
        let summary = self.run_game(mode, rng)?;

        writeln!(self.output, "Thanks for playing!")?;
        Ok(summary)
    }

    pub fn run_game(
        &mut self,
        mode: GameMode,
        rng: &mut SessionRng,
    ) -> Result<GameSummary, RunnerError> {
        let first_mark = rng.random_mark();
        let seating = Seating::for_mode(mode, rng);
        self.play(TicTacToeGameState::new(first_mark), seating)
    }

    pub fn play(
        &mut self,
        mut state: TicTacToeGameState,
        mut seating: Seating,
    ) -> Result<GameSummary, RunnerError> {
        self.announce_seating(&state, &seating)?;

        while !state.is_over() {
            self.write_board(&state)?;

            let mark = state.current_mark;
            match seating.participant_mut(mark) {
                Some(Participant::Human) => self.human_turn(&mut state)?,
                Some(Participant::Bot(seat)) => self.bot_turn(&mut state, seat)?,
                None => return Err(RunnerError::UnseatedMark(mark)),
            }
        }

        self.write_board(&state)?;
        let summary = self.summarize(&state, &seating);
        self.announce_result(&state, &seating)?;

        log!(
            "Game over: {:?} after {} moves",
            summary.status,
            summary.move_count
        );
        Ok(summary)
    }

    fn announce_seating(
        &mut self,
        state: &TicTacToeGameState,
        seating: &Seating,
    ) -> Result<(), RunnerError> {
        for seat in &seating.seats {
            match &seat.participant {
                Participant::Human => writeln!(self.output, "You are playing as {}", seat.mark)?,
                Participant::Bot(bot) => writeln!(
                    self.output,
                    "{} is playing as {}",
                    bot.kind.display_name(),
                    seat.mark
                )?,
            }
        }

        let first = seating
            .participant(state.current_mark)
            .ok_or(RunnerError::UnseatedMark(state.current_mark))?;
        writeln!(self.output, "{} will go first", first.label())?;
        Ok(())
    }

    fn human_turn(&mut self, state: &mut TicTacToeGameState) -> Result<(), RunnerError> {
        loop {
            writeln!(self.output, "Your turn (you are {})", state.current_mark)?;

            match read_human_move(&mut self.input, &mut self.output)? {
                HumanInput::NotANumber => {
                    writeln!(self.output, "Please enter valid numbers (0-2).")?;
                }
                HumanInput::OutOfRange => {
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
                HumanInput::Move(position) => match state.place_mark(position) {
                    Ok(()) => return Ok(()),
                    Err(GameError::GameOver) => return Err(GameError::GameOver.into()),
                    Err(err) => {
                        debug_log!("Rejected human move {}: {}", position, err);
                        writeln!(self.output, "Invalid move. Try again.")?;
                    }
                },
            }
        }
    }

    fn bot_turn(
        &mut self,
        state: &mut TicTacToeGameState,
        seat: &mut BotSeat,
    ) -> Result<(), RunnerError> {
        let name = seat.kind.display_name();
        let mark = state.current_mark;

        writeln!(self.output, "{}'s turn (playing as {})...", name, mark)?;
        self.output.flush()?;
        if !self.settings.bot_delay.is_zero() {
            thread::sleep(self.settings.bot_delay);
        }

        let position = seat
            .strategy
            .choose_move(&state.board, mark)
            .ok_or(RunnerError::NoMoveAvailable { bot: name })?;

        let stats = seat.strategy.last_stats();
        seat.total_stats.accumulate(&stats);
        seat.moves_made += 1;
        debug_log!(
            "{} chose {} on {} after {} nodes in {:?}",
            name,
            position,
            state.board,
            stats.nodes_visited,
            stats.elapsed
        );

        state.place_mark(position)?;
        writeln!(
            self.output,
            "{} placed {} at position {}",
            name, mark, position
        )?;
        Ok(())
    }

    fn announce_result(
        &mut self,
        state: &TicTacToeGameState,
        seating: &Seating,
    ) -> Result<(), RunnerError> {
        match state.winner().and_then(|mark| seating.participant(mark)) {
            Some(Participant::Human) => writeln!(self.output, "Congratulations! You won!")?,
            Some(Participant::Bot(seat)) => {
                writeln!(self.output, "{} wins!", seat.kind.display_name())?
            }
            None => writeln!(self.output, "It's a draw!")?,
        }

        if self.settings.show_search_stats {
            for seat in &seating.seats {
                if let Participant::Bot(bot) = &seat.participant {
                    writeln!(
                        self.output,
                        "{} ({}): {} nodes searched over {} moves in {:.3} ms",
                        bot.kind.display_name(),
                        seat.mark,
                        bot.total_stats.nodes_visited,
                        bot.moves_made,
                        bot.total_stats.elapsed.as_secs_f64() * 1000.0
                    )?;
                }
            }
        }
        Ok(())
    }

    fn summarize(&self, state: &TicTacToeGameState, seating: &Seating) -> GameSummary {
        let bots = seating
            .seats
            .iter()
            .filter_map(|seat| match &seat.participant {
                Participant::Bot(bot) => Some(BotReport {
                    name: bot.kind.display_name(),
                    mark: seat.mark,
                    stats: bot.total_stats,
                    moves: bot.moves_made,
                }),
                Participant::Human => None,
            })
            .collect();

        GameSummary {
            status: state.status,
            winner: state
                .winner()
                .and_then(|mark| seating.participant(mark))
                .map(Participant::label),
            move_count: state.move_count,
            bots,
        }
    }

    fn write_board(&mut self, state: &TicTacToeGameState) -> Result<(), RunnerError> {
        writeln!(self.output, "{}", render_board(&state.board))?;
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use common::games::tictactoe::BotKind;

    use super::*;

    fn settings(show_search_stats: bool) -> RunnerSettings {
        RunnerSettings {
            bot_delay: Duration::ZERO,
            show_search_stats,
        }
    }

    fn runner(script: &str, show_search_stats: bool) -> GameRunner<Cursor<String>, Vec<u8>> {
        GameRunner::new(
            Cursor::new(script.to_string()),
            Vec::new(),
            settings(show_search_stats),
        )
    }

    fn preset(board: &str, to_move: Mark) -> TicTacToeGameState {
        let mut state = TicTacToeGameState::new(to_move);
        state.board = board.parse().unwrap();
        state
    }

    fn output_of(runner: GameRunner<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(runner.into_output()).unwrap()
    }

    #[test]
    fn test_human_reprompts_then_wins() {
        let mut runner = runner("abc\n5\n1\n0\n0\n-1\n2\n0\n2\n", false);
        let seating = Seating::new(
            (Mark::X, Participant::Human),
            (Mark::O, Participant::bot(BotKind::Minimax)),
        );

        let summary = runner.play(preset("XX./OO./...", Mark::X), seating).unwrap();

        assert_eq!(summary.status, GameStatus::XWon);
        assert_eq!(summary.winner, Some("You"));
        assert_eq!(summary.move_count, 1);
        assert_eq!(summary.bots[0].moves, 0);

        let text = output_of(runner);
        assert!(text.contains("You are playing as X"));
        assert!(text.contains("Minimax Bot is playing as O"));
        assert!(text.contains("You will go first"));
        assert!(text.contains("Please enter valid numbers (0-2)."));
        assert_eq!(text.matches("Invalid move. Try again.").count(), 3);
        assert!(text.contains("Congratulations! You won!"));
        assert!(text.contains("0 X X X"));
    }

    #[test]
    fn test_bot_takes_immediate_win() {
        let mut runner = runner("", false);
        let seating = Seating::new(
            (Mark::O, Participant::Human),
            (Mark::X, Participant::bot(BotKind::Minimax)),
        );

        let summary = runner.play(preset(".OO/XX./...", Mark::X), seating).unwrap();

        assert_eq!(summary.status, GameStatus::XWon);
        assert_eq!(summary.winner, Some("Minimax Bot"));
        let text = output_of(runner);
        assert!(text.contains("Minimax Bot will go first"));
        assert!(text.contains("Minimax Bot placed X at position (1, 2)"));
        assert!(text.contains("Minimax Bot wins!"));
    }

    #[test]
    fn test_alpha_beta_punishes_blunder() {
        let mut runner = runner("2\n0\n", true);
        let seating = Seating::new(
            (Mark::X, Participant::Human),
            (Mark::O, Participant::bot(BotKind::AlphaBeta)),
        );

        let summary = runner.play(preset("XX./OO./...", Mark::X), seating).unwrap();

        assert_eq!(summary.status, GameStatus::OWon);
        assert_eq!(summary.winner, Some("Alpha-Beta Bot"));
        assert_eq!(summary.move_count, 2);
        assert_eq!(summary.bots[0].moves, 1);
        assert!(summary.bots[0].stats.nodes_visited > 0);

        let text = output_of(runner);
        assert!(text.contains("Alpha-Beta Bot placed O at position (1, 2)"));
        assert!(text.contains("Alpha-Beta Bot wins!"));
        assert!(text.contains("Alpha-Beta Bot (O):"));
    }

    #[test]
    fn test_bot_vs_bot_session_is_a_draw() {
        let mut runner = runner("", true);
        let summary = runner
            .run_session(Some(GameMode::BotVsBot), &mut SessionRng::new(5))
            .unwrap();

        assert_eq!(summary.status, GameStatus::Draw);
        assert_eq!(summary.winner, None);
        assert_eq!(summary.move_count, 9);
        assert_eq!(summary.bots.len(), 2);
        assert_eq!(summary.bots.iter().map(|bot| bot.moves).sum::<usize>(), 9);

        let text = output_of(runner);
        assert!(text.starts_with("Welcome to Tic Tac Toe!"));
        assert!(text.contains("It's a draw!"));
        assert!(text.contains("nodes searched"));
        assert!(text.trim_end().ends_with("Thanks for playing!"));
    }

    #[test]
    fn test_bot_vs_bot_waits_once_per_move() {
        let delay = Duration::from_millis(2);
        let mut runner = GameRunner::new(
            Cursor::new(String::new()),
            Vec::new(),
            RunnerSettings {
                bot_delay: delay,
                show_search_stats: false,
            },
        );

        let started = std::time::Instant::now();
        let summary = runner.run_game(GameMode::BotVsBot, &mut SessionRng::new(3)).unwrap();

        assert_eq!(summary.move_count, 9);
        assert!(started.elapsed() >= delay * 9);
    }

    #[test]
    fn test_menu_selects_mode_when_none_given() {
        let mut runner = runner("7\n3\n", false);
        let summary = runner.run_session(None, &mut SessionRng::new(8)).unwrap();

        assert_eq!(summary.status, GameStatus::Draw);
        let text = output_of(runner);
        assert!(text.contains("Please enter a number between 1 and 3."));
        assert!(text.contains("Minimax Bot is playing as"));
        assert!(text.contains("Alpha-Beta Bot is playing as"));
    }

    #[test]
    fn test_closed_input_ends_human_game() {
        let mut runner = runner("", false);
        let result = runner.run_session(Some(GameMode::HumanVsMinimax), &mut SessionRng::new(1));
        assert!(matches!(result, Err(RunnerError::InputClosed)));
    }

    #[test]
    fn test_same_seed_replays_identically() {
        let play = |seed| {
            let mut runner = runner("", false);
            let _ = runner.run_session(Some(GameMode::HumanVsAlphaBeta), &mut SessionRng::new(seed));
            output_of(runner)
        };
        assert_eq!(play(21), play(21));
    }

    #[test]
    fn test_finished_game_is_not_replayed() {
        let mut runner = runner("", false);
        let mut state = preset("XXX/OO./...", Mark::O);
        state.status = GameStatus::XWon;
        let seating = Seating::new(
            (Mark::X, Participant::Human),
            (Mark::O, Participant::bot(BotKind::Minimax)),
        );

        let summary = runner.play(state, seating).unwrap();
        assert_eq!(summary.winner, Some("You"));
        assert_eq!(summary.move_count, 0);
    }

    #[test]
    fn test_unseated_mark_is_an_error() {
        let mut runner = runner("", false);
        let seating = Seating::new(
            (Mark::X, Participant::Human),
            (Mark::X, Participant::bot(BotKind::Minimax)),
        );

        let result = runner.play(TicTacToeGameState::new(Mark::O), seating);
        assert!(matches!(result, Err(RunnerError::UnseatedMark(Mark::O))));
    }
}
