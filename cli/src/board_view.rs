use engine::games::tictactoe::{Board, Mark, WinningLine};

/// Renders the board as a 3x3 ASCII grid. Empty cells show their 1-9
/// input number; cells on the winning line are starred.
pub fn render(board: &Board, winning: Option<&WinningLine>) -> String {
    let mut out = String::new();

    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        for col in 0..3 {
            if col > 0 {
                out.push('|');
            }
            let index = row * 3 + col;
            out.push_str(&render_cell(board, index, winning));
        }
        out.push('\n');
    }

    out
}

fn render_cell(board: &Board, index: usize, winning: Option<&WinningLine>) -> String {
    let glyph = match board[index] {
        Mark::Empty => return format!(" {} ", index + 1),
        Mark::X => 'X',
        Mark::O => 'O',
    };

    let on_winning_line = winning.is_some_and(|line| line.cells.contains(&index));
    if on_winning_line {
        format!("*{}*", glyph)
    } else {
        format!(" {} ", glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::games::tictactoe::CELL_COUNT;

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let board = [Mark::Empty; CELL_COUNT];
        let expected = concat!(
            " 1 | 2 | 3 \n",
            "---+---+---\n",
            " 4 | 5 | 6 \n",
            "---+---+---\n",
            " 7 | 8 | 9 \n",
        );
        assert_eq!(render(&board, None), expected);
    }

    #[test]
    fn test_marks_are_rendered() {
        let mut board = [Mark::Empty; CELL_COUNT];
        board[0] = Mark::X;
        board[4] = Mark::O;
        let rendered = render(&board, None);
        assert!(rendered.starts_with(" X | 2 | 3 "));
        assert!(rendered.contains(" 4 | O | 6 "));
    }

    #[test]
    fn test_winning_line_is_starred() {
        let board = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::Empty,
            Mark::Empty,
            Mark::X,
        ];
        let line = WinningLine {
            mark: Mark::X,
            cells: [0, 4, 8],
        };
        let rendered = render(&board, Some(&line));
        assert!(rendered.contains("*X*| O | X "));
        assert!(rendered.contains(" O |*X*| O "));
        assert!(rendered.contains(" 7 | 8 |*X*"));
    }
}
