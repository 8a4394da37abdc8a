use common::games::tictactoe::{GameBroadcaster, Outcome, SessionSnapshot};
use common::log;

use crate::render::render_snapshot;
use crate::theme::Theme;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Clone)]
pub struct TerminalBroadcaster {
    theme: Theme,
    color: bool,
}

impl TerminalBroadcaster {
    pub fn new(theme: Theme, color: bool) -> Self {
        Self { theme, color }
    }
}

impl GameBroadcaster for TerminalBroadcaster {
    async fn broadcast_state(&self, snapshot: SessionSnapshot) {
        let palette = self.color.then(|| self.theme.palette());
        let prefix = if self.color { CLEAR_SCREEN } else { "" };
        println!("{}{}", prefix, render_snapshot(&snapshot, palette));
    }

    // The following state broadcast redraws the board with the play-again banner.
    async fn broadcast_game_over(&self, outcome: Outcome, snapshot: SessionSnapshot) {
        log!(
            "Game over: {:?} after {} games",
            outcome,
            snapshot.scoreboard.games_played()
        );
    }
}
