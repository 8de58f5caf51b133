use super::board::Board;
use super::types::{Mark, WinningLine};

/// Rows, columns, then diagonals. Detection reports the first match in this order.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    WIN_PATTERNS.iter().find_map(|&pattern| {
        let [a, b, c] = pattern;
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            Some(WinningLine::new(mark, pattern))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn is_winner(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    let cells = board.cells();
    WIN_PATTERNS
        .iter()
        .any(|pattern| pattern.iter().all(|&i| cells[i] == mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Mark::{Empty as E, O, X};

    #[test]
    fn test_every_pattern_is_detected() {
        for mark in [X, O] {
            for pattern in WIN_PATTERNS {
                let mut cells = [E; 9];
                for i in pattern {
                    cells[i] = mark;
                }
                let board = Board::from_cells(cells);
                assert_eq!(
                    check_win_with_line(&board),
                    Some(WinningLine::new(mark, pattern)),
                    "pattern {:?} for {:?}",
                    pattern,
                    mark
                );
                assert!(is_winner(&board, mark));
                assert!(!is_winner(&board, mark.opponent().unwrap()));
            }
        }
    }

    #[test]
    fn test_first_pattern_in_table_order_wins() {
        // Top row and left column both complete.
        let board = Board::from_cells([X, X, X, X, O, O, X, O, O]);
        assert_eq!(check_win_with_line(&board).unwrap().pattern, [0, 1, 2]);
    }

    #[test]
    fn test_no_winner() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(check_win(&board), None);
        assert_eq!(check_win(&Board::new()), None);
        assert!(!is_winner(&Board::new(), E));
    }
}
