use derive_more::{Display, Error};

use super::board::{BOARD_CELLS, Board};
use super::types::{GameMode, Mark, Outcome, WinningLine};
use super::win_detector::{evaluate, find_winning_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("Game is already over")]
    GameOver,
    #[display("Not your turn")]
    NotYourTurn,
    #[display("Cell {index} is out of bounds")]
    OutOfBounds { index: usize },
    #[display("Cell {index} is already marked")]
    CellOccupied { index: usize },
}

/// One game as an immutable value. Every transition returns a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    mode: GameMode,
    outcome: Outcome,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            mode,
            outcome: Outcome::InProgress,
            last_move: None,
        }
    }

    /// Resumes from an arbitrary position. X moves first, so O is to move whenever
    /// X has placed more marks.
    pub fn from_board(board: Board, mode: GameMode) -> Self {
        let current_mark = if board.count(Mark::X) > board.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        };
        Self {
            board,
            current_mark,
            mode,
            outcome: evaluate(&board),
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_over()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        find_winning_line(&self.board)
    }

    /// The mark a human may play right now. Against the computer the human is always X.
    pub fn human_mark(&self) -> Mark {
        match self.mode.computer_mark() {
            Some(computer) => computer.opponent().unwrap_or(Mark::X),
            None => self.current_mark,
        }
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.mode.computer_mark() == Some(self.current_mark)
    }

    pub fn apply_move(&self, mark: Mark, index: usize) -> Result<Self, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        if mark != self.current_mark {
            return Err(MoveError::NotYourTurn);
        }

        if index >= BOARD_CELLS {
            return Err(MoveError::OutOfBounds { index });
        }

        if !self.board.is_empty_at(index) {
            return Err(MoveError::CellOccupied { index });
        }

        let board = self.board.with_mark(index, mark);
        let outcome = evaluate(&board);
        let current_mark = match outcome {
            Outcome::InProgress => mark.opponent().unwrap_or(Mark::X),
            _ => mark,
        };

        Ok(Self {
            board,
            current_mark,
            mode: self.mode,
            outcome,
            last_move: Some(index),
        })
    }

    pub fn reset(&self) -> Self {
        Self::new(self.mode)
    }

    /// Switching mode always starts a fresh board.
    pub fn with_mode(&self, mode: GameMode) -> Self {
        Self::new(mode)
    }
}
