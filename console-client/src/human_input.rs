use std::io::{BufRead, Write};

use common::games::tictactoe::Position;

use crate::console_io::prompt_line;
use crate::error::RunnerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HumanInput {
    Move(Position),
    /// Parsed as numbers but negative, so it can never name a cell.
    OutOfRange,
    NotANumber,
}

/// Asks for a row, then a column. A non-numeric row ends the attempt before
/// the column is asked for.
pub fn read_human_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<HumanInput, RunnerError> {
    let Ok(row) = prompt_line(input, output, "Enter row (0-2): ")?.parse::<i64>() else {
        return Ok(HumanInput::NotANumber);
    };
    let Ok(col) = prompt_line(input, output, "Enter column (0-2): ")?.parse::<i64>() else {
        return Ok(HumanInput::NotANumber);
    };

    match (usize::try_from(row), usize::try_from(col)) {
        (Ok(row), Ok(col)) => Ok(HumanInput::Move(Position::new(row, col))),
        _ => Ok(HumanInput::OutOfRange),
    }
}
