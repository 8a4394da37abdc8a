use std::future::Future;

use super::game_state::TicTacToeGameState;
use super::scoreboard::Scoreboard;
use super::types::Outcome;

/// What the presentation layer renders after each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: TicTacToeGameState,
    pub scoreboard: Scoreboard,
    pub computer_thinking: bool,
}

pub trait GameBroadcaster: Send + Sync + Clone + 'static {
    fn broadcast_state(&self, snapshot: SessionSnapshot) -> impl Future<Output = ()> + Send;

    fn broadcast_game_over(
        &self,
        outcome: Outcome,
        snapshot: SessionSnapshot,
    ) -> impl Future<Output = ()> + Send;
}
