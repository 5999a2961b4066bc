use std::io::{self, BufRead, Write};

use engine::games::tictactoe::{Board, CELL_COUNT, Mark};

/// Parses a cell number 1-9 into a board index 0-8.
pub fn parse_cell(input: &str) -> Result<usize, String> {
    let trimmed = input.trim();
    let number: usize = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a number", trimmed))?;
    if number < 1 || number > CELL_COUNT {
        return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
    }
    Ok(number - 1)
}

/// Prompts on stdout and reads moves from stdin until one addresses an
/// empty cell. Errors only when stdin is closed or unreadable.
pub fn read_player_move(board: &Board) -> Result<usize, String> {
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("Your move (1-9): ");
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;

        line.clear();
        let bytes_read = stdin
            .lock()
            .read_line(&mut line)
            .map_err(|e| format!("Failed to read input: {}", e))?;
        if bytes_read == 0 {
            return Err("Input closed".to_string());
        }

        match parse_cell(&line) {
            Ok(index) if board[index] == Mark::Empty => return Ok(index),
            Ok(_) => println!("That cell is already taken"),
            Err(message) => println!("{}", message),
        }
    }
}
