//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! submitting intents, querying state, and streaming events.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{GameState, Intent, TurnError, TurnReport};

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, GameEvent};
use crate::workers::Command;

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Runs one turn for `intent` on the simulation worker.
    ///
    /// The outer error means the worker is gone; the inner one is the
    /// engine's verdict on the intent.
    pub async fn submit_intent(
        &self,
        intent: Intent,
    ) -> Result<std::result::Result<TurnReport, TurnError>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::SubmitIntent {
                intent,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the current game state (read-only snapshot)
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to session events.
    ///
    /// Receivers only see events published after they subscribe; a slow
    /// receiver gets `RecvError::Lagged` once the buffer overflows.
    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.event_bus.subscribe()
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
