//! Session orchestration for the dungeon crawl.
//!
//! This crate wires the intent provider abstraction, content oracles, and the
//! simulation worker into a runtime API. Consumers embed [`Runtime`] to play a
//! session turn by turn, subscribe to [`GameEvent`]s, and query state through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the broadcast event bus
//! - [`oracle`] adapts loaded content into a `game-core` environment
//! - `workers` keeps the simulation task internal to the crate
pub mod api;
pub mod events;
pub mod oracle;
pub mod runtime;

mod workers;

pub use api::{
    IntentProvider, Result, RuntimeError, RuntimeHandle, ScriptedIntentProvider,
    WaitIntentProvider,
};
pub use events::{EventBus, GameEvent};
pub use oracle::OracleManager;
pub use runtime::{
    Runtime, RuntimeBuilder, RuntimeConfig, SessionEnd, SessionSummary, StepOutcome,
};
