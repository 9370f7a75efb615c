//! Common error infrastructure for game-core.
//!
//! The simulation never aborts mid-floor: invalid intents come back as
//! [`IntentRejection`](crate::engine::IntentRejection) values and generation
//! failures fall back to a guaranteed layout. The only hard failures are
//! setup problems, reported through [`SetupError`].

use crate::env::OracleError;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry with a different intent
/// - **Validation**: invalid input that should be rejected without retry
/// - **Fatal**: the session cannot be started or continued
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log fields and test assertions.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while creating a new game session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("grid {width}x{height} is smaller than the minimum edge {minimum}")]
    GridTooSmall {
        width: u32,
        height: u32,
        minimum: u32,
    },

    #[error("room size range [{min}, {max}) is empty")]
    EmptyRoomSizeRange { min: u32, max: u32 },

    #[error("room count range [{min}, {max}) is empty")]
    EmptyRoomCountRange { min: u32, max: u32 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::GridTooSmall { .. } => "SETUP_GRID_TOO_SMALL",
            Self::EmptyRoomSizeRange { .. } => "SETUP_EMPTY_ROOM_SIZE_RANGE",
            Self::EmptyRoomCountRange { .. } => "SETUP_EMPTY_ROOM_COUNT_RANGE",
            Self::Oracle(inner) => inner.error_code(),
        }
    }
}
