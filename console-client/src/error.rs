use common::games::tictactoe::{GameError, Mark};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error("{bot} found no move on a board that is still in play")]
    NoMoveAvailable { bot: &'static str },

    #[error("no participant is seated for mark {0}")]
    UnseatedMark(Mark),
}
