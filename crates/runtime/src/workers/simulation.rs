//! Simulation worker that owns the authoritative [`game_core::GameState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), runs turns
//! through [`GameEngine`], and publishes the outcome on the [`EventBus`].

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use game_core::{GameEngine, GameState, Intent, TurnError, TurnEvent, TurnReport};

use crate::events::{EventBus, GameEvent};
use crate::oracle::OracleManager;

/// Commands that can be sent to the simulation worker
pub enum Command {
    /// Run one turn for the intent.
    SubmitIntent {
        intent: Intent,
        reply: oneshot::Sender<Result<TurnReport, TurnError>>,
    },
    /// Query the current game state (read-only).
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task that processes gameplay commands.
///
/// Pure game logic executor: it owns no providers and performs no I/O.
/// Intent sourcing is done by [`Runtime`](crate::Runtime).
pub struct SimulationWorker {
    state: GameState,
    oracles: OracleManager,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        oracles: OracleManager,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            seed = state.seed,
            floor = state.floor(),
            player = %state.player().actor.name,
            "simulation worker initialized"
        );

        Self {
            state,
            oracles,
            command_rx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every handle has been dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd);
                }
                else => break,
            }
        }
        debug!("simulation worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SubmitIntent { intent, reply } => {
                let result = self.handle_intent(intent);
                if reply.send(result).is_err() {
                    debug!("SubmitIntent reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn handle_intent(&mut self, intent: Intent) -> Result<TurnReport, TurnError> {
        let turn = self.state.turn_number();
        debug!(turn, intent = ?intent, "resolving intent");

        let env = self.oracles.as_game_env();
        let result = GameEngine::new(&mut self.state).submit_intent(env, intent);

        match &result {
            Ok(report) => self.publish_report(intent, report),
            Err(TurnError::Rejected(reason)) => {
                debug!(turn, error = %reason, "intent rejected");
                self.event_bus.publish(GameEvent::IntentRejected {
                    intent,
                    reason: reason.clone(),
                });
            }
            Err(TurnError::Content(_)) => {}
        }
        result
    }

    fn publish_report(&self, intent: Intent, report: &TurnReport) {
        let floor = self.state.floor();
        let mut killer = None;

        for event in &report.events {
            match event {
                TurnEvent::FloorEntered { floor, boss_floor } => {
                    info!(floor, boss_floor, "entered floor");
                }
                TurnEvent::LeveledUp(level) => {
                    info!(level = level.level, max_hp = level.max_hp, "player leveled up");
                }
                TurnEvent::BossDefeated { name, stairs } => {
                    info!(boss = %name, floor, stairs = %stairs, "boss defeated");
                }
                TurnEvent::PlayerDied { killer: name } => killer = Some(name.clone()),
                _ => {}
            }
            if let Some(public) = GameEvent::from_turn_event(event, floor) {
                self.event_bus.publish(public);
            }
        }

        if !report.consumed {
            return;
        }

        let turn = self.state.turn_number();
        self.event_bus.publish(GameEvent::TurnCompleted {
            turn,
            floor,
            intent,
        });

        if self.state.is_game_over() {
            info!(floor, turn, killer = ?killer, "game over");
            self.event_bus
                .publish(GameEvent::GameOver { floor, turn, killer });
        }
    }
}
