use super::game_state::TicTacToeGameState;
use super::types::{GameMode, Mark, Outcome};

pub fn player_label(mark: Mark, mode: GameMode) -> &'static str {
    match (mark, mode.computer_mark()) {
        (mark, Some(computer)) if mark == computer => "Computer",
        (Mark::X, _) => "Player X",
        (Mark::O, _) => "Player O",
        (Mark::Empty, _) => "Nobody",
    }
}

pub fn status_line(state: &TicTacToeGameState) -> String {
    match state.outcome() {
        Outcome::Draw => "Game ended in a draw!".to_string(),
        Outcome::Win(mark) if state.mode().computer_mark() == Some(mark) => {
            "Computer wins!".to_string()
        }
        Outcome::Win(mark) => format!("Player {} wins!", mark),
        Outcome::InProgress if state.is_computer_turn() => "Computer is thinking...".to_string(),
        Outcome::InProgress => format!("Next player: {}", state.current_mark()),
    }
}
