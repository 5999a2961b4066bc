use super::board::Board;
use super::types::{GameStatus, Mark, WinningLine};

/// The 8 winning triples: rows, columns, diagonals. Scan order is fixed;
/// `winning_line` and `find_forcing_move` return the first match.
pub const WIN_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    for triple in WIN_TRIPLES {
        let [a, b, c] = triple;
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            return Some(WinningLine {
                mark,
                cells: triple,
            });
        }
    }
    None
}

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(line) = winning_line(board) {
        return match line.mark {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if board.iter().all(|&cell| cell != Mark::Empty) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

/// Finds a move that completes a win for `mark`: the empty cell of the
/// first triple already holding two of `mark`. Called with the opponent's
/// mark this is the blocking move.
pub fn find_forcing_move(board: &Board, mark: Mark) -> Option<usize> {
    for triple in WIN_TRIPLES {
        let marked = triple.iter().filter(|&&index| board[index] == mark).count();
        if marked != 2 {
            continue;
        }
        if let Some(&empty) = triple.iter().find(|&&index| board[index] == Mark::Empty) {
            return Some(empty);
        }
    }
    None
}
