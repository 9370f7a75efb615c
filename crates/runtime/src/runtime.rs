//! High-level runtime orchestrator.
//!
//! The runtime owns the simulation worker, wires up command/event channels,
//! and exposes a builder-based API for clients to play a session.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use game_content::ContentBundle;
use game_core::{
    GameConfig, GameState, IntentRejection, Job, Player, TurnError, TurnEvent, TurnReport,
    new_game,
};

use crate::api::{IntentProvider, Result, RuntimeError, RuntimeHandle, WaitIntentProvider};
use crate::events::{EventBus, GameEvent};
use crate::oracle::OracleManager;
use crate::workers::SimulationWorker;

/// Rejected intents tolerated in a row before [`Runtime::run`] gives up.
const MAX_CONSECUTIVE_REJECTIONS: u32 = 64;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Overrides the content bundle's configuration when set.
    pub game_config: Option<GameConfig>,
    pub seed: u64,
    pub player_name: String,
    pub job: Job,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// [`Runtime::run`] stops once this many turns have been played.
    pub turn_limit: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: None,
            seed: 0,
            player_name: Player::DEFAULT_NAME.to_string(),
            job: Job::Pld,
            event_buffer_size: 100,
            command_buffer_size: 32,
            turn_limit: None,
        }
    }
}

/// What one [`Runtime::step`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Resolved(TurnReport),
    Rejected(IntentRejection),
}

impl StepOutcome {
    /// True if the step advanced the turn counter.
    pub fn consumed_turn(&self) -> bool {
        matches!(self, Self::Resolved(report) if report.consumed)
    }
}

/// Why [`Runtime::run`] returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player died. `killer` is unknown when the session was resumed
    /// from a state that was already over.
    Died { killer: Option<String> },
    TurnLimit,
}

/// Final tally of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub seed: u64,
    pub floor: u32,
    pub turns: u64,
    pub level: u32,
    pub xp: u32,
    pub end: SessionEnd,
}

impl SessionSummary {
    fn from_state(state: &GameState, end: SessionEnd) -> Self {
        let player = state.player();
        Self {
            seed: state.seed,
            floor: state.floor(),
            turns: turns_played(state),
            level: player.level,
            xp: player.xp,
            end,
        }
    }
}

/// Main runtime that orchestrates a session.
///
/// Runtime owns the worker and the intent provider; [`RuntimeHandle`]
/// provides a cloneable façade for other clients.
pub struct Runtime {
    handle: RuntimeHandle,
    provider: Box<dyn IntentProvider>,
    sim_worker_handle: JoinHandle<()>,
    turn_limit: Option<u64>,
    killer: Option<String>,
    rejections_in_a_row: u32,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    /// Subscribe to game events
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.handle.subscribe_events()
    }

    /// Replace the intent provider between steps.
    pub fn set_provider(&mut self, provider: impl IntentProvider + 'static) {
        self.provider = Box::new(provider);
    }

    /// Awaits exactly one intent from the provider and submits it.
    ///
    /// A rejected intent is a normal outcome, not an error; only worker,
    /// provider, and content failures surface as `Err`.
    pub async fn step(&mut self) -> Result<StepOutcome> {
        let view = self.handle.query_state().await?;
        self.step_with(view).await
    }

    /// One step against a snapshot the caller already holds.
    async fn step_with(&mut self, view: GameState) -> Result<StepOutcome> {
        let intent = self.provider.next_intent(&view).await?;
        debug!(turn = view.turn_number(), intent = intent.label(), "submitting intent");

        match self.handle.submit_intent(intent).await? {
            Ok(report) => {
                self.rejections_in_a_row = 0;
                if let Some(killer) = report.events.iter().find_map(|event| match event {
                    TurnEvent::PlayerDied { killer } => Some(killer.clone()),
                    _ => None,
                }) {
                    self.killer = Some(killer);
                }
                Ok(StepOutcome::Resolved(report))
            }
            Err(TurnError::Rejected(reason)) => {
                self.rejections_in_a_row += 1;
                if self.provider.is_scripted() {
                    warn!(intent = ?intent, error = %reason, "scripted intent rejected");
                } else {
                    debug!(intent = ?intent, error = %reason, "intent rejected");
                }
                Ok(StepOutcome::Rejected(reason))
            }
            Err(TurnError::Content(err)) => Err(err.into()),
        }
    }

    /// Plays until the player dies or the turn limit is reached.
    ///
    /// Without a turn limit this only returns once the provider gets the
    /// player killed.
    pub async fn run(&mut self) -> Result<SessionSummary> {
        loop {
            let state = self.handle.query_state().await?;
            if state.is_game_over() {
                let summary = SessionSummary::from_state(
                    &state,
                    SessionEnd::Died {
                        killer: self.killer.clone(),
                    },
                );
                info!(floor = summary.floor, turns = summary.turns, "session over");
                return Ok(summary);
            }
            if let Some(limit) = self.turn_limit
                && turns_played(&state) >= limit
            {
                info!(limit, floor = state.floor(), "turn limit reached");
                return Ok(SessionSummary::from_state(&state, SessionEnd::TurnLimit));
            }
            if self.rejections_in_a_row >= MAX_CONSECUTIVE_REJECTIONS {
                return Err(RuntimeError::Stalled {
                    count: self.rejections_in_a_row,
                });
            }

            self.step_with(state).await?;
        }
    }

    /// Shutdown the runtime gracefully
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.sim_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;
        Ok(())
    }
}

/// The turn counter starts at 1.
fn turns_played(state: &GameState) -> u64 {
    state.turn_number().saturating_sub(1)
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    content: Option<ContentBundle>,
    state: Option<GameState>,
    provider: Option<Box<dyn IntentProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            content: None,
            state: None,
            provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Content to play with. Defaults to the built-in data set.
    pub fn content(mut self, content: ContentBundle) -> Self {
        self.content = Some(content);
        self
    }

    /// Resume from an existing state instead of starting a new session.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.state = Some(state);
        self
    }

    /// Intent source. Defaults to [`WaitIntentProvider`].
    pub fn provider(mut self, provider: impl IntentProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Build the runtime and spawn the simulation worker.
    ///
    /// # Errors
    ///
    /// Fails when the built-in content cannot be loaded or the session
    /// cannot start (bad configuration, job missing from the content).
    pub async fn build(self) -> Result<Runtime> {
        let content = match self.content {
            Some(content) => content,
            None => game_content::load_builtin()?,
        };
        let game_config = self
            .config
            .game_config
            .clone()
            .unwrap_or_else(|| content.config.clone());
        let oracles = OracleManager::from_bundle(content);

        let state = match self.state {
            Some(state) => state,
            None => new_game(
                self.config.seed,
                game_config,
                &self.config.player_name,
                self.config.job,
                oracles.as_game_env(),
            )?,
        };

        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size.max(1));
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let handle = RuntimeHandle::new(command_tx, event_bus.clone());

        let worker = SimulationWorker::new(state, oracles, command_rx, event_bus);
        let sim_worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            provider: self
                .provider
                .unwrap_or_else(|| Box::new(WaitIntentProvider)),
            sim_worker_handle,
            turn_limit: self.config.turn_limit,
            killer: None,
            rejections_in_a_row: 0,
        })
    }
}
