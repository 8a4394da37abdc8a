use common::games::tictactoe::{BOARD_CELLS, SessionCommand};

/// Maps one line of terminal input to a session command. Cells are numbered 1-9
/// row by row; `q` maps to `Shutdown`.
pub fn parse_input(line: &str) -> Option<SessionCommand> {
    let input = line.trim().to_ascii_lowercase();
    match input.as_str() {
        "r" | "reset" => Some(SessionCommand::Reset),
        "m" | "mode" => Some(SessionCommand::ToggleMode),
        "s" | "scores" => Some(SessionCommand::ResetScores),
        "q" | "quit" | "exit" => Some(SessionCommand::Shutdown),
        other => match other.parse::<usize>() {
            Ok(cell @ 1..=BOARD_CELLS) => Some(SessionCommand::HumanMove(cell - 1)),
            _ => None,
        },
    }
}
