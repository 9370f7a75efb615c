//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

use super::Job;

/// Errors that occur when content oracles cannot answer a request.
///
/// Content is loaded once at startup, so these indicate broken data rather
/// than transient conditions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// No monster pool covers the requested floor.
    #[error("no monster pool for floor {0}")]
    EmptyMonsterPool(u32),

    /// The boss table has no names to draw from.
    #[error("boss table is empty")]
    EmptyBossTable,

    /// Job definition was not found.
    #[error("job definition {0} not found")]
    JobNotFound(Job),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyMonsterPool(_) => "ORACLE_EMPTY_MONSTER_POOL",
            Self::EmptyBossTable => "ORACLE_EMPTY_BOSS_TABLE",
            Self::JobNotFound(_) => "ORACLE_JOB_NOT_FOUND",
        }
    }
}
