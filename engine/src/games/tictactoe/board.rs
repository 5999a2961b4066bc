use super::types::Mark;

pub const CELL_COUNT: usize = 9;
pub const CENTER_CELL: usize = 4;
pub const CORNER_CELLS: [usize; 4] = [0, 2, 6, 8];

/// 3x3 board in row-major order, indices 0-8.
pub type Board = [Mark; CELL_COUNT];

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    let mut moves = Vec::new();
    for (index, &cell) in board.iter().enumerate() {
        if cell == Mark::Empty {
            moves.push(index);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_nine_moves() {
        let board = [Mark::Empty; CELL_COUNT];
        assert_eq!(get_available_moves(&board), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_occupied_cells_are_excluded() {
        let mut board = [Mark::Empty; CELL_COUNT];
        board[0] = Mark::X;
        board[4] = Mark::O;
        board[8] = Mark::X;
        assert_eq!(get_available_moves(&board), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = [Mark::X; CELL_COUNT];
        assert!(get_available_moves(&board).is_empty());
    }
}
