use common::games::tictactoe::{BOARD_SIZE, Board, Mark};

/// Board with a column header and a row index on every line, so a human can
/// read off the coordinates to type.
pub fn render_board(board: &Board) -> String {
    let header: Vec<String> = (0..BOARD_SIZE).map(|col| col.to_string()).collect();
    let mut rendered = format!("\n  {}\n", header.join(" "));

    for (row, cells) in board.cells().iter().enumerate() {
        let symbols: Vec<String> = cells
            .iter()
            .map(|&mark| match mark {
                Mark::Empty => ".".to_string(),
                mark => mark.to_string(),
            })
            .collect();
        rendered.push_str(&format!("{} {}\n", row, symbols.join(" ")));
    }

    rendered
}
