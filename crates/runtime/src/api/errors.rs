//! Unified error types surfaced by the runtime API.
//!
//! Wraps session setup failures, content loading, worker coordination, and
//! intent providers so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::SetupError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("failed to set up the session")]
    Setup(#[from] SetupError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),

    #[error("intent provider failed: {0}")]
    Provider(String),

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("simulation worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("provider produced {count} rejected intents in a row")]
    Stalled { count: u32 },
}
