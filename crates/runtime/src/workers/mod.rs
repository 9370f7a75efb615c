//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker owns the session state and executes every command
//! against it; everything else talks to it through channels.

mod simulation;

pub use simulation::{Command, SimulationWorker};
