use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::{SessionId, log};
use crate::games::{GameBroadcaster, RandomSource};
use super::game_state::{GameSnapshot, TicTacToeGameState};
use super::settings::TicTacToeSessionSettings;
use super::types::{Difficulty, GameStatus, InvalidMove};

/// One human-vs-computer game. Cheap to clone; clones share the same game.
///
/// After an accepted player move the computer's reply runs as a spawned task that first
/// sleeps for a delay sampled from the configured range. A reset or difficulty change
/// aborts that task, and the task re-checks the game generation before applying, so a
/// reply computed for an earlier game is never applied to a new one.
///
/// Broadcasts happen while the game state lock is held, so the renderer sees snapshots
/// in the same order as the state changes that produced them.
#[derive(Clone)]
pub struct TicTacToeSession<B: GameBroadcaster> {
    session_id: SessionId,
    settings: TicTacToeSessionSettings,
    game_state: Arc<Mutex<TicTacToeGameState>>,
    rng: Arc<Mutex<Box<dyn RandomSource>>>,
    pending_turn: Arc<Mutex<Option<JoinHandle<()>>>>,
    broadcaster: B,
}

impl<B: GameBroadcaster> TicTacToeSession<B> {
    pub fn new(
        session_id: SessionId,
        settings: TicTacToeSessionSettings,
        rng: impl RandomSource + 'static,
        broadcaster: B,
    ) -> Self {
        log!(
            "[session:{}] Created with difficulty {}, think delay {:?}..{:?}",
            session_id,
            settings.difficulty,
            settings.think_delay_min,
            settings.think_delay_max
        );

        Self {
            session_id,
            settings,
            game_state: Arc::new(Mutex::new(TicTacToeGameState::new(settings.difficulty))),
            rng: Arc::new(Mutex::new(Box::new(rng))),
            pending_turn: Arc::new(Mutex::new(None)),
            broadcaster,
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub async fn snapshot(&self) -> GameSnapshot {
        self.game_state.lock().await.snapshot()
    }

    /// Pushes the current state to the broadcaster, e.g. for the first render.
    pub async fn broadcast_current_state(&self) {
        let game_state = self.game_state.lock().await;
        self.broadcaster.broadcast_state(game_state.snapshot()).await;
    }

    /// Human move attempt. Rejections leave the game untouched and are not broadcast.
    pub async fn on_player_move(&self, slot: usize) -> Result<GameStatus, InvalidMove> {
        let (snapshot, generation) = {
            let mut game_state = self.game_state.lock().await;
            game_state.place_player_mark(slot)?;
            let snapshot = game_state.snapshot();

            if let GameStatus::GameOver(result) = snapshot.status {
                log!("[session:{}] Game over after player move at {}: {:?}", self.session_id, slot, result);
            }

            self.broadcaster.broadcast_state(snapshot).await;
            (snapshot, game_state.generation())
        };

        if snapshot.status == GameStatus::AwaitingComputerMove {
            self.schedule_computer_turn(generation).await;
        }

        Ok(snapshot.status)
    }

    pub async fn on_difficulty_changed(&self, difficulty: Difficulty) {
        self.cancel_pending_turn().await;

        let mut game_state = self.game_state.lock().await;
        game_state.set_difficulty(difficulty);

        log!("[session:{}] Difficulty changed to {}, game reset", self.session_id, difficulty);
        self.broadcaster.broadcast_state(game_state.snapshot()).await;
    }

    pub async fn on_reset(&self) {
        self.cancel_pending_turn().await;

        let mut game_state = self.game_state.lock().await;
        game_state.reset();

        log!("[session:{}] Game reset", self.session_id);
        self.broadcaster.broadcast_state(game_state.snapshot()).await;
    }

    /// Resolves once the scheduled computer reply, if any, has finished or been aborted.
    pub async fn wait_for_computer_turn(&self) {
        let handle = self.pending_turn.lock().await.take();
        if let Some(handle) = handle {
            if let Some(e) = handle.await.err().filter(|e| e.is_panic()) {
                log!("[session:{}] Computer turn panicked: {}", self.session_id, e);
            }
        }
    }

    async fn cancel_pending_turn(&self) {
        if let Some(handle) = self.pending_turn.lock().await.take() {
            handle.abort();
        }
    }

    async fn sample_think_delay(&self) -> Duration {
        let min_ms = self.settings.think_delay_min.as_millis() as u64;
        let max_ms = self.settings.think_delay_max.as_millis() as u64;
        let mut rng = self.rng.lock().await;
        Duration::from_millis(rng.range_u64(min_ms, max_ms))
    }

    async fn schedule_computer_turn(&self, generation: u64) {
        let delay = self.sample_think_delay().await;
        let session = self.clone();

        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            session.play_computer_turn(generation, delay).await;
        });

        *self.pending_turn.lock().await = Some(handle);
    }

    async fn play_computer_turn(&self, generation: u64, delay: Duration) {
        let mut game_state = self.game_state.lock().await;
        if game_state.generation() != generation
            || game_state.status() != GameStatus::AwaitingComputerMove
        {
            return;
        }

        let outcome = {
            let mut rng = self.rng.lock().await;
            game_state.play_computer_turn(&mut **rng)
        };
        match outcome {
            Ok(slot) => {
                log!(
                    "[session:{}] Computer ({}) played {} after {:?}",
                    self.session_id,
                    game_state.difficulty(),
                    slot,
                    delay
                );
            }
            Err(e) => {
                log!("[session:{}] Computer failed to move: {}", self.session_id, e);
                return;
            }
        }

        let snapshot = game_state.snapshot();
        if let GameStatus::GameOver(result) = snapshot.status {
            log!("[session:{}] Game over after computer move: {:?}", self.session_id, result);
        }

        self.broadcaster.broadcast_state(snapshot).await;
    }
}
