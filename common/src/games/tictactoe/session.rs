use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::games::SessionRng;
use crate::log;

use super::broadcaster::{GameBroadcaster, SessionSnapshot};
use super::controller::{ComputerTurn, MoveResult, TurnController};
use super::scoreboard::Scoreboard;
use super::types::GameMode;

pub const DEFAULT_COMPUTER_MOVE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    HumanMove(usize),
    Reset,
    SetMode(GameMode),
    ToggleMode,
    ResetScores,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub computer_move_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::TwoPlayers,
            computer_move_delay: DEFAULT_COMPUTER_MOVE_DELAY,
            seed: None,
        }
    }
}

/// A delayed computer move. Aborted on `cancel` or drop, so it never outlives
/// the session that scheduled it.
#[derive(Debug)]
pub struct ScheduledMove {
    turn: ComputerTurn,
    handle: JoinHandle<()>,
}

impl ScheduledMove {
    pub fn schedule(
        turn: ComputerTurn,
        delay: Duration,
        due_tx: mpsc::UnboundedSender<ComputerTurn>,
    ) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = due_tx.send(turn);
        });
        Self { turn, handle }
    }

    pub fn turn(&self) -> ComputerTurn {
        self.turn
    }

    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for ScheduledMove {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

pub struct TicTacToeSession;

impl TicTacToeSession {
    /// Runs until `Shutdown` arrives or every command sender is gone, then returns
    /// the session scoreboard.
    pub async fn run(
        settings: TicTacToeSessionSettings,
        mut commands: mpsc::Receiver<SessionCommand>,
        broadcaster: impl GameBroadcaster,
    ) -> Scoreboard {
        let mut rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        log!("Starting session in {:?} mode with seed {}", settings.mode, rng.seed());

        let mut controller = TurnController::new(settings.mode);
        let (due_tx, mut due_rx) = mpsc::unbounded_channel();
        let mut pending: Option<ScheduledMove> = None;

        loop {
            sync_computer_turn(&controller, &mut pending, settings.computer_move_delay, &due_tx);
            broadcaster
                .broadcast_state(snapshot(&controller, &pending))
                .await;

            let result = tokio::select! {
                command = commands.recv() => match command {
                    None | Some(SessionCommand::Shutdown) => break,
                    Some(command) => handle_command(&mut controller, &mut pending, command),
                },
                Some(turn) = due_rx.recv() => {
                    if pending.as_ref().map(ScheduledMove::turn) == Some(turn) {
                        pending = None;
                    }
                    controller.play_computer_turn(turn, &mut rng)
                }
            };

            if let Some(outcome) = result.finished_game() {
                let delay = settings.computer_move_delay;
                sync_computer_turn(&controller, &mut pending, delay, &due_tx);
                broadcaster
                    .broadcast_game_over(outcome, snapshot(&controller, &pending))
                    .await;
            }
        }

        if let Some(scheduled) = pending.take() {
            scheduled.cancel();
        }
        log!("Session finished after {} games", controller.scoreboard().games_played());
        *controller.scoreboard()
    }
}

fn handle_command(
    controller: &mut TurnController,
    pending: &mut Option<ScheduledMove>,
    command: SessionCommand,
) -> MoveResult {
    match command {
        SessionCommand::HumanMove(index) => return controller.human_move(index),
        SessionCommand::Reset => {
            cancel_pending(pending);
            controller.reset();
        }
        SessionCommand::SetMode(mode) => {
            cancel_pending(pending);
            controller.set_mode(mode);
        }
        SessionCommand::ToggleMode => {
            cancel_pending(pending);
            controller.toggle_mode();
        }
        SessionCommand::ResetScores => controller.reset_scores(),
        SessionCommand::Shutdown => {}
    }
    MoveResult::Ignored
}

fn cancel_pending(pending: &mut Option<ScheduledMove>) {
    if let Some(scheduled) = pending.take() {
        log!("Cancelling computer move for epoch {}", scheduled.turn().epoch());
        scheduled.cancel();
    }
}

/// Keeps exactly one scheduled move alive while the computer is to move.
fn sync_computer_turn(
    controller: &TurnController,
    pending: &mut Option<ScheduledMove>,
    delay: Duration,
    due_tx: &mpsc::UnboundedSender<ComputerTurn>,
) {
    match controller.take_computer_turn() {
        Some(turn) if pending.as_ref().map(ScheduledMove::turn) != Some(turn) => {
            *pending = Some(ScheduledMove::schedule(turn, delay, due_tx.clone()));
        }
        Some(_) => {}
        None => cancel_pending(pending),
    }
}

fn snapshot(controller: &TurnController, pending: &Option<ScheduledMove>) -> SessionSnapshot {
    SessionSnapshot {
        state: *controller.state(),
        scoreboard: *controller.scoreboard(),
        computer_thinking: pending.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Mark, Outcome};

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Broadcast {
        State(SessionSnapshot),
        GameOver(Outcome, SessionSnapshot),
    }

    #[derive(Clone)]
    struct ChannelBroadcaster {
        tx: mpsc::UnboundedSender<Broadcast>,
    }

    impl GameBroadcaster for ChannelBroadcaster {
        async fn broadcast_state(&self, snapshot: SessionSnapshot) {
            let _ = self.tx.send(Broadcast::State(snapshot));
        }

        async fn broadcast_game_over(&self, outcome: Outcome, snapshot: SessionSnapshot) {
            let _ = self.tx.send(Broadcast::GameOver(outcome, snapshot));
        }
    }

    struct Harness {
        commands: mpsc::Sender<SessionCommand>,
        broadcasts: mpsc::UnboundedReceiver<Broadcast>,
        handle: JoinHandle<Scoreboard>,
    }

    impl Harness {
        fn start(mode: GameMode) -> Self {
            let settings = TicTacToeSessionSettings {
                mode,
                computer_move_delay: Duration::from_millis(500),
                seed: Some(11),
            };
            let (commands, command_rx) = mpsc::channel(16);
            let (tx, broadcasts) = mpsc::unbounded_channel();
            let handle = tokio::spawn(TicTacToeSession::run(
                settings,
                command_rx,
                ChannelBroadcaster { tx },
            ));
            Self {
                commands,
                broadcasts,
                handle,
            }
        }

        async fn send(&self, command: SessionCommand) {
            self.commands.send(command).await.unwrap();
        }

        async fn next_state(&mut self) -> SessionSnapshot {
            loop {
                match self.broadcasts.recv().await.unwrap() {
                    Broadcast::State(snapshot) => return snapshot,
                    Broadcast::GameOver(..) => continue,
                }
            }
        }

        async fn finish(mut self) -> (Scoreboard, Vec<Broadcast>) {
            self.send(SessionCommand::Shutdown).await;
            let scoreboard = self.handle.await.unwrap();
            let mut rest = Vec::new();
            while let Ok(broadcast) = self.broadcasts.try_recv() {
                rest.push(broadcast);
            }
            (scoreboard, rest)
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_snapshot_is_empty_board() {
        let mut harness = Harness::start(GameMode::TwoPlayers);
        let snapshot = harness.next_state().await;
        assert_eq!(snapshot.state.board(), &Board::new());
        assert!(!snapshot.computer_thinking);
        harness.finish().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_computer_replies_after_delay() {
        let mut harness = Harness::start(GameMode::VsComputer);
        harness.next_state().await;

        let started = tokio::time::Instant::now();
        harness.send(SessionCommand::HumanMove(0)).await;
        let after_human = harness.next_state().await;
        assert_eq!(after_human.state.board().get(0), Mark::X);
        assert!(after_human.computer_thinking);
        assert!(after_human.state.board().is_empty_at(4));

        let after_computer = harness.next_state().await;
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert_eq!(after_computer.state.board().get(4), Mark::O);
        assert_eq!(after_computer.state.current_mark(), Mark::X);
        assert!(!after_computer.computer_thinking);
        harness.finish().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_cancels_pending_computer_move() {
        let mut harness = Harness::start(GameMode::VsComputer);
        harness.next_state().await;

        harness.send(SessionCommand::HumanMove(0)).await;
        assert!(harness.next_state().await.computer_thinking);
        harness.send(SessionCommand::Reset).await;
        let after_reset = harness.next_state().await;
        assert_eq!(after_reset.state.board(), &Board::new());
        assert!(!after_reset.computer_thinking);

        tokio::time::sleep(Duration::from_secs(2)).await;
        let (_, rest) = harness.finish().await;
        assert!(rest.is_empty(), "stale computer move produced {:?}", rest);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mode_toggle_cancels_pending_computer_move() {
        let mut harness = Harness::start(GameMode::VsComputer);
        harness.next_state().await;

        harness.send(SessionCommand::HumanMove(4)).await;
        harness.next_state().await;
        harness.send(SessionCommand::ToggleMode).await;
        let toggled = harness.next_state().await;
        assert_eq!(toggled.state.mode(), GameMode::TwoPlayers);
        assert_eq!(toggled.state.board(), &Board::new());

        tokio::time::sleep(Duration::from_secs(2)).await;
        let (_, rest) = harness.finish().await;
        assert!(rest.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_mode_restarts_board_and_keeps_scores() {
        let mut harness = Harness::start(GameMode::TwoPlayers);
        harness.next_state().await;

        for index in [0, 3, 1, 4, 2] {
            harness.send(SessionCommand::HumanMove(index)).await;
            harness.next_state().await;
        }
        harness.send(SessionCommand::SetMode(GameMode::VsComputer)).await;
        let switched = harness.next_state().await;
        assert_eq!(switched.state.mode(), GameMode::VsComputer);
        assert_eq!(switched.state.board(), &Board::new());
        assert_eq!(switched.scoreboard.x_wins, 1);

        harness.send(SessionCommand::HumanMove(0)).await;
        assert!(harness.next_state().await.computer_thinking);
        let replied = harness.next_state().await;
        assert_eq!(replied.state.board().get(4), Mark::O);
        harness.finish().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_occupied_cell_tap_changes_nothing() {
        let mut harness = Harness::start(GameMode::TwoPlayers);
        harness.next_state().await;

        harness.send(SessionCommand::HumanMove(4)).await;
        let first = harness.next_state().await;
        harness.send(SessionCommand::HumanMove(4)).await;
        let second = harness.next_state().await;
        assert_eq!(first, second);
        harness.finish().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_win_is_broadcast_and_scored() {
        let mut harness = Harness::start(GameMode::TwoPlayers);
        harness.next_state().await;

        for index in [0, 3, 1, 4, 2] {
            harness.send(SessionCommand::HumanMove(index)).await;
        }

        let game_over = loop {
            match harness.broadcasts.recv().await.unwrap() {
                Broadcast::GameOver(outcome, snapshot) => break (outcome, snapshot),
                Broadcast::State(_) => continue,
            }
        };
        assert_eq!(game_over.0, Outcome::Win(Mark::X));
        assert_eq!(game_over.1.scoreboard.x_wins, 1);

        harness.send(SessionCommand::Reset).await;
        harness.send(SessionCommand::HumanMove(8)).await;
        let (scoreboard, _) = harness.finish().await;
        assert_eq!(scoreboard.x_wins, 1);
        assert_eq!(scoreboard.games_played(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closing_command_channel_ends_session() {
        let harness = Harness::start(GameMode::VsComputer);
        let Harness { commands, handle, .. } = harness;
        drop(commands);
        let scoreboard = handle.await.unwrap();
        assert_eq!(scoreboard, Scoreboard::default());
    }
}
