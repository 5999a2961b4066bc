mod board;
mod bot_controller;
mod game_state;
mod outcome;
mod types;

pub use board::{Board, CELL_COUNT, CENTER_CELL, CORNER_CELLS, get_available_moves};
pub use bot_controller::choose_move;
pub use game_state::TicTacToeGameState;
pub use outcome::{WIN_TRIPLES, evaluate, find_forcing_move, winning_line};
pub use types::{BotError, Difficulty, GameStatus, Mark, WinningLine};
