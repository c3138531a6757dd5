use clap::ValueEnum;
use common::games::tictactoe::BotKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    HumanVsMinimax,
    HumanVsAlphaBeta,
    BotVsBot,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::HumanVsMinimax,
        GameMode::HumanVsAlphaBeta,
        GameMode::BotVsBot,
    ];

    pub fn from_menu_choice(choice: i64) -> Option<GameMode> {
        match choice {
            1 => Some(GameMode::HumanVsMinimax),
            2 => Some(GameMode::HumanVsAlphaBeta),
            3 => Some(GameMode::BotVsBot),
            _ => None,
        }
    }

    pub fn menu_label(self) -> &'static str {
        match self {
            GameMode::HumanVsMinimax => "Play against Minimax Bot",
            GameMode::HumanVsAlphaBeta => "Play against Alpha-Beta Pruning Bot",
            GameMode::BotVsBot => "Watch Bots play against each other",
        }
    }

    /// The bot a human plays against, `None` for bot-vs-bot.
    pub fn opponent_bot(self) -> Option<BotKind> {
        match self {
            GameMode::HumanVsMinimax => Some(BotKind::Minimax),
            GameMode::HumanVsAlphaBeta => Some(BotKind::AlphaBeta),
            GameMode::BotVsBot => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices_map_in_order() {
        for (index, mode) in GameMode::ALL.iter().enumerate() {
            assert_eq!(GameMode::from_menu_choice(index as i64 + 1), Some(*mode));
        }
        assert_eq!(GameMode::from_menu_choice(0), None);
        assert_eq!(GameMode::from_menu_choice(4), None);
    }

    #[test]
    fn test_cli_names_are_kebab_case() {
        assert_eq!(
            GameMode::from_str("human-vs-alpha-beta", false),
            Ok(GameMode::HumanVsAlphaBeta)
        );
        assert_eq!(GameMode::from_str("bot-vs-bot", false), Ok(GameMode::BotVsBot));
    }
}
