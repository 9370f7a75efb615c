//! Public runtime API surface.
//!
//! Re-exports the error type, the cloneable [`RuntimeHandle`], and the
//! [`IntentProvider`] trait with its stock implementations.
mod errors;
mod handle;
mod providers;

pub use errors::{Result, RuntimeError};
pub use handle::RuntimeHandle;
pub use providers::{IntentProvider, ScriptedIntentProvider, WaitIntentProvider};
