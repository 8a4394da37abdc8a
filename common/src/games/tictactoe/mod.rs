mod board;
mod bot_controller;
mod broadcaster;
mod controller;
mod game_state;
mod scoreboard;
mod session;
mod status;
mod types;
mod win_detector;

pub use board::{BOARD_CELLS, Board, CENTER, CORNERS, LINES, SIDES};
pub use bot_controller::{BotInput, calculate_move, find_completing_cell, select_move};
pub use broadcaster::{GameBroadcaster, SessionSnapshot};
pub use controller::{ComputerTurn, MoveResult, TurnController};
pub use game_state::{MoveError, TicTacToeGameState};
pub use scoreboard::Scoreboard;
pub use session::{
    DEFAULT_COMPUTER_MOVE_DELAY, ScheduledMove, SessionCommand, TicTacToeSession,
    TicTacToeSessionSettings,
};
pub use status::{player_label, status_line};
pub use types::{GameMode, Mark, Outcome, WinningLine};
pub use win_detector::{evaluate, find_winning_line};
