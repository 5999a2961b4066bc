use crate::games::SessionRng;
use super::board::{Board, CELL_COUNT, CENTER_CELL, CORNER_CELLS, get_available_moves};
use super::outcome::{evaluate, find_forcing_move};
use super::types::{BotError, Difficulty, GameStatus, Mark};

const STRATEGIC_CHANCE_EASY: f64 = 0.3;
const STRATEGIC_CHANCE_MEDIUM: f64 = 0.8;
const STRATEGIC_CHANCE_HARD: f64 = 0.9;

const WIN_SCORE: i32 = 10;

/// Picks the bot's next move. The board must still be in progress;
/// calling this on a full or terminal board is a caller bug.
pub fn choose_move(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, BotError> {
    if evaluate(board) != GameStatus::InProgress {
        return Err(BotError::InvalidState);
    }

    let index = match difficulty {
        Difficulty::Easy => choose_easy_move(board, rng),
        Difficulty::Medium => choose_medium_move(board, rng),
        Difficulty::Hard => choose_hard_move(board, rng),
        Difficulty::Insane => choose_insane_move(board),
    };

    index.ok_or(BotError::InvalidState)
}

fn choose_easy_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    if rng.random_chance(STRATEGIC_CHANCE_EASY)
        && let Some(index) = find_win_or_block(board)
    {
        return Some(index);
    }
    random_move(board, rng)
}

fn choose_medium_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    if rng.random_chance(STRATEGIC_CHANCE_MEDIUM) {
        if let Some(index) = find_win_or_block(board) {
            return Some(index);
        }
        if board[CENTER_CELL] == Mark::Empty {
            return Some(CENTER_CELL);
        }
        let open_corners: Vec<usize> = CORNER_CELLS
            .iter()
            .copied()
            .filter(|&index| board[index] == Mark::Empty)
            .collect();
        if !open_corners.is_empty() {
            return Some(open_corners[rng.random_range(0..open_corners.len())]);
        }
    }
    random_move(board, rng)
}

fn choose_hard_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    if rng.random_chance(STRATEGIC_CHANCE_HARD) {
        return choose_insane_move(board);
    }
    random_move(board, rng)
}

fn choose_insane_move(board: &Board) -> Option<usize> {
    if let Some(index) = find_win_or_block(board) {
        return Some(index);
    }
    best_minimax_move(board)
}

fn find_win_or_block(board: &Board) -> Option<usize> {
    find_forcing_move(board, Mark::O).or_else(|| find_forcing_move(board, Mark::X))
}

fn random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return None;
    }
    Some(available_moves[rng.random_range(0..available_moves.len())])
}

fn best_minimax_move(board: &Board) -> Option<usize> {
    let mut scratch = *board;
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for index in 0..CELL_COUNT {
        if scratch[index] != Mark::Empty {
            continue;
        }
        scratch[index] = Mark::O;
        let score = minimax(&mut scratch, 0, false);
        scratch[index] = Mark::Empty;

        // Strictly greater: the first best index in scan order wins,
        // keeping the choice deterministic.
        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    match evaluate(board) {
        GameStatus::OWon => return WIN_SCORE - depth,
        GameStatus::XWon => return depth - WIN_SCORE,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    if is_maximizing {
        let mut best_score = i32::MIN;
        for index in 0..CELL_COUNT {
            if board[index] != Mark::Empty {
                continue;
            }
            board[index] = Mark::O;
            best_score = best_score.max(minimax(board, depth + 1, false));
            board[index] = Mark::Empty;
        }
        best_score
    } else {
        let mut best_score = i32::MAX;
        for index in 0..CELL_COUNT {
            if board[index] != Mark::Empty {
                continue;
            }
            board[index] = Mark::X;
            best_score = best_score.min(minimax(board, depth + 1, true));
            board[index] = Mark::Empty;
        }
        best_score
    }
}
