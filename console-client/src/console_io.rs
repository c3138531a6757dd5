use std::io::{BufRead, Write};

use crate::error::RunnerError;

/// Writes `prompt` without a newline and reads one line of input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, RunnerError> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(RunnerError::InputClosed);
    }
    Ok(line.trim().to_string())
}
