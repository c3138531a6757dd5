use std::io::{BufRead, Write};

use crate::config::GameMode;
use crate::console_io::prompt_line;
use crate::error::RunnerError;

pub fn prompt_game_mode<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<GameMode, RunnerError> {
    for (index, mode) in GameMode::ALL.iter().enumerate() {
        writeln!(output, "{}. {}", index + 1, mode.menu_label())?;
    }

    loop {
        let Ok(choice) = prompt_line(input, output, "Enter your choice (1-3): ")?.parse::<i64>()
        else {
            writeln!(output, "Please enter a valid number.")?;
            continue;
        };

        match GameMode::from_menu_choice(choice) {
            Some(mode) => return Ok(mode),
            None => writeln!(output, "Please enter a number between 1 and 3.")?,
        }
    }
}
