use crate::games::SessionRng;
use crate::log;

use super::bot_controller::{BotInput, calculate_move};
use super::game_state::TicTacToeGameState;
use super::scoreboard::Scoreboard;
use super::types::{GameMode, Mark, Outcome};

/// Permission for the computer to move on one exact position. Any later transition
/// bumps the controller epoch and turns an outstanding ticket stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerTurn {
    epoch: u64,
    mark: Mark,
}

impl ComputerTurn {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Applied {
        index: usize,
        mark: Mark,
        outcome: Outcome,
    },
    Ignored,
}

impl MoveResult {
    pub fn finished_game(&self) -> Option<Outcome> {
        match self {
            MoveResult::Applied { outcome, .. } if outcome.is_over() => Some(*outcome),
            _ => None,
        }
    }
}

/// Owns the current game and the session scoreboard. Rejected moves are logged and
/// dropped; callers only ever see `MoveResult::Ignored`.
#[derive(Debug, Clone)]
pub struct TurnController {
    state: TicTacToeGameState,
    scoreboard: Scoreboard,
    epoch: u64,
}

impl TurnController {
    pub fn new(mode: GameMode) -> Self {
        Self {
            state: TicTacToeGameState::new(mode),
            scoreboard: Scoreboard::new(),
            epoch: 0,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn human_move(&mut self, index: usize) -> MoveResult {
        let mark = self.state.human_mark();
        self.apply(mark, index)
    }

    pub fn take_computer_turn(&self) -> Option<ComputerTurn> {
        if !self.state.is_computer_turn() {
            return None;
        }
        Some(ComputerTurn {
            epoch: self.epoch,
            mark: self.state.current_mark(),
        })
    }

    pub fn play_computer_turn(&mut self, turn: ComputerTurn, rng: &mut SessionRng) -> MoveResult {
        if self.take_computer_turn() != Some(turn) {
            log!(
                "Dropping stale computer move (epoch {}, current {})",
                turn.epoch,
                self.epoch
            );
            return MoveResult::Ignored;
        }

        let input = BotInput::from_game_state(&self.state);
        match calculate_move(&input, rng) {
            Some(index) => self.apply(turn.mark, index),
            None => MoveResult::Ignored,
        }
    }

    pub fn reset(&mut self) {
        self.state = self.state.reset();
        self.epoch += 1;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.state = self.state.with_mode(mode);
        self.epoch += 1;
        log!("Game mode set to {:?}", mode);
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.state.mode().toggled());
    }

    pub fn reset_scores(&mut self) {
        self.scoreboard.reset();
    }

    fn apply(&mut self, mark: Mark, index: usize) -> MoveResult {
        match self.state.apply_move(mark, index) {
            Ok(next) => {
                self.state = next;
                self.epoch += 1;
                let outcome = next.outcome();
                if self.scoreboard.record(outcome) {
                    log!("Game finished: {:?}", outcome);
                }
                MoveResult::Applied {
                    index,
                    mark,
                    outcome,
                }
            }
            Err(e) => {
                log!("Ignoring move by {} at cell {}: {}", mark, index, e);
                MoveResult::Ignored
            }
        }
    }
}
