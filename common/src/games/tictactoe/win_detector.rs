use super::board::{Board, LINES};
use super::types::{Mark, Outcome, WinningLine};

/// The first complete line in canonical order, if any.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a);
        if mark != Mark::Empty && mark == board.get(b) && mark == board.get(c) {
            Some(WinningLine::new(mark, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = find_winning_line(board) {
        return Outcome::Win(line.mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
