//! Session event stream.
//!
//! The simulation worker translates each engine [`TurnReport`] into
//! [`GameEvent`]s and publishes them on the [`EventBus`]. Events are
//! notifications only; the authoritative state stays with the worker.
//!
//! [`TurnReport`]: game_core::TurnReport
mod bus;
mod game_event;

pub use bus::EventBus;
pub use game_event::GameEvent;
