use super::board::{Board, CELL_COUNT};
use super::outcome::evaluate;
use super::types::{GameStatus, Mark};

/// One game session: board, whose turn it is, and the derived status.
/// X is the human player and always moves first.
#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: [Mark::Empty; CELL_COUNT],
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if index >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if self.board[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[index] = mark;
        self.last_move = Some(index);

        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    pub fn winner_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let state = TicTacToeGameState::new();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_place_mark_alternates_turns() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Mark::X, 0).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        state.place_mark(Mark::O, 4).unwrap();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.last_move, Some(4));
    }

    #[test]
    fn test_place_mark_rejects_wrong_turn() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(
            state.place_mark(Mark::O, 0),
            Err("Not your turn".to_string())
        );
    }

    #[test]
    fn test_place_mark_rejects_out_of_bounds() {
        let mut state = TicTacToeGameState::new();
        assert_eq!(
            state.place_mark(Mark::X, 9),
            Err("Position out of bounds".to_string())
        );
    }

    #[test]
    fn test_place_mark_rejects_occupied_cell() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Mark::X, 3).unwrap();
        assert_eq!(
            state.place_mark(Mark::O, 3),
            Err("Cell is already marked".to_string())
        );
    }

    #[test]
    fn test_win_ends_game_and_freezes_turn() {
        let mut state = TicTacToeGameState::new();
        for (mark, index) in [
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 1),
            (Mark::O, 4),
            (Mark::X, 2),
        ] {
            state.place_mark(mark, index).unwrap();
        }
        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.winner_mark(), Some(Mark::X));
        // No turn switch after the game ends.
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(
            state.place_mark(Mark::O, 5),
            Err("Game is already over".to_string())
        );
    }

    #[test]
    fn test_full_game_ends_in_draw() {
        let mut state = TicTacToeGameState::new();
        for (mark, index) in [
            (Mark::X, 0),
            (Mark::O, 1),
            (Mark::X, 2),
            (Mark::O, 4),
            (Mark::X, 3),
            (Mark::O, 5),
            (Mark::X, 7),
            (Mark::O, 6),
            (Mark::X, 8),
        ] {
            state.place_mark(mark, index).unwrap();
        }
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.winner_mark(), None);
    }

    #[test]
    fn test_reset_clears_the_session() {
        let mut state = TicTacToeGameState::new();
        state.place_mark(Mark::X, 0).unwrap();
        state.place_mark(Mark::O, 4).unwrap();
        state.reset();
        assert_eq!(state.board, [Mark::Empty; CELL_COUNT]);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.last_move, None);
    }
}
