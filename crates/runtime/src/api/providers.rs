//! Asynchronous abstraction for sourcing player intent.
//!
//! Runtime users plug in [`IntentProvider`] implementations so a session can
//! run with human input, scripted fixtures, or automated policies.
use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use game_core::{GameState, Intent};

use super::errors::Result;

/// Supplies the player's intent for the next turn.
///
/// The runtime calls this exactly once per step with a read-only snapshot of
/// the session. Implementations may await user input, a network peer, or
/// nothing at all.
#[async_trait]
pub trait IntentProvider: Send + Sync {
    async fn next_intent(&self, view: &GameState) -> Result<Intent>;

    /// True for providers replaying a fixed script; their rejected intents
    /// are logged at warn level.
    fn is_scripted(&self) -> bool {
        false
    }
}

/// A provider that always waits. Useful for testing or as a fallback.
pub struct WaitIntentProvider;

#[async_trait]
impl IntentProvider for WaitIntentProvider {
    async fn next_intent(&self, _view: &GameState) -> Result<Intent> {
        Ok(Intent::Wait)
    }
}

/// Replays a queue of intents in order, then waits forever.
#[derive(Default)]
pub struct ScriptedIntentProvider {
    queue: Mutex<VecDeque<Intent>>,
}

impl ScriptedIntentProvider {
    pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            queue: Mutex::new(intents.into_iter().collect()),
        }
    }

    /// Appends intents to the end of the script.
    pub async fn extend(&self, intents: impl IntoIterator<Item = Intent>) {
        self.queue.lock().await.extend(intents);
    }

    /// Intents not yet handed out.
    pub async fn remaining(&self) -> usize {
        self.queue.lock().await.len()
    }
}

#[async_trait]
impl IntentProvider for ScriptedIntentProvider {
    async fn next_intent(&self, _view: &GameState) -> Result<Intent> {
        Ok(self.queue.lock().await.pop_front().unwrap_or(Intent::Wait))
    }

    fn is_scripted(&self) -> bool {
        true
    }
}
