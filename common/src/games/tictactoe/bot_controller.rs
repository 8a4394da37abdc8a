use crate::games::SessionRng;

use super::board::{Board, CENTER, CORNERS, LINES, SIDES};
use super::game_state::TicTacToeGameState;
use super::types::Mark;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.current_mark(),
        }
    }
}

pub fn calculate_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let opponent_mark = input.bot_mark.opponent()?;
    select_move(&input.board, input.bot_mark, opponent_mark, rng)
}

/// Picks the next cell for `my_mark`: win, block, center, random corner, random side.
/// Returns `None` only on a full board.
pub fn select_move(
    board: &Board,
    my_mark: Mark,
    opponent_mark: Mark,
    rng: &mut SessionRng,
) -> Option<usize> {
    assert!(
        !my_mark.is_empty() && !opponent_mark.is_empty() && my_mark != opponent_mark,
        "select_move needs two distinct player marks, got {:?} and {:?}",
        my_mark,
        opponent_mark
    );

    if let Some(index) = find_completing_cell(board, my_mark) {
        return Some(index);
    }

    if let Some(index) = find_completing_cell(board, opponent_mark) {
        return Some(index);
    }

    if board.is_empty_at(CENTER) {
        return Some(CENTER);
    }

    if let Some(index) = rng.choose(&board.empty_among(&CORNERS)) {
        return Some(index);
    }

    rng.choose(&board.empty_among(&SIDES))
}

/// The empty cell of the first line holding two `mark`s and one empty cell.
pub fn find_completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|&&i| board.get(i) == mark).count();
        let empty: Vec<usize> = line.iter().copied().filter(|&i| board.is_empty_at(i)).collect();
        match (owned, empty.as_slice()) {
            (2, &[index]) => Some(index),
            _ => None,
        }
    })
}
