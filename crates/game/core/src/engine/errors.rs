//! Why an intent was refused.

use crate::env::AbilityId;
use crate::error::{ErrorSeverity, GameError, SetupError};
use crate::state::{Position, TurnPhase};

/// A submitted intent that consumed no turn.
///
/// Rejections leave the simulation untouched apart from an explanatory log
/// line for the cases a player would want to read about (sealed stairs,
/// ability failures).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntentRejection {
    #[error("step ({dx},{dy}) is not a single-tile move")]
    InvalidStep { dx: i32, dy: i32 },

    #[error("{target} is outside the floor")]
    OutOfBounds { target: Position },

    #[error("{target} is not walkable")]
    Blocked { target: Position },

    #[error("no stairs here")]
    NoStairs,

    #[error("the stairs are sealed while {boss} lives")]
    StairsSealed { boss: String },

    #[error("ascending is disabled")]
    AscentDisabled,

    #[error("already on the top floor")]
    TopFloor,

    #[error("intents are not accepted in phase {phase}")]
    NotAccepting { phase: TurnPhase },

    #[error("the game is over")]
    GameOver,

    #[error("no ability bound to '{hotkey}'")]
    UnknownAbility { hotkey: char },

    #[error("{ability} is on cooldown for {remaining} more turns")]
    OnCooldown { ability: AbilityId, remaining: u32 },

    #[error("{ability} needs {required} MP, {available} available")]
    InsufficientMp {
        ability: AbilityId,
        required: u32,
        available: u32,
    },

    #[error("{ability} has no target in range")]
    NoTarget { ability: AbilityId },

    #[error("{ability} would have no effect at full health")]
    AlreadyAtMax { ability: AbilityId },
}

impl GameError for IntentRejection {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidStep { .. } => ErrorSeverity::Validation,
            Self::NotAccepting { .. } | Self::GameOver => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStep { .. } => "INTENT_INVALID_STEP",
            Self::OutOfBounds { .. } => "INTENT_OUT_OF_BOUNDS",
            Self::Blocked { .. } => "INTENT_BLOCKED",
            Self::NoStairs => "INTENT_NO_STAIRS",
            Self::StairsSealed { .. } => "INTENT_STAIRS_SEALED",
            Self::AscentDisabled => "INTENT_ASCENT_DISABLED",
            Self::TopFloor => "INTENT_TOP_FLOOR",
            Self::NotAccepting { .. } => "INTENT_NOT_ACCEPTING",
            Self::GameOver => "INTENT_GAME_OVER",
            Self::UnknownAbility { .. } => "ABILITY_UNKNOWN",
            Self::OnCooldown { .. } => "ABILITY_ON_COOLDOWN",
            Self::InsufficientMp { .. } => "ABILITY_INSUFFICIENT_MP",
            Self::NoTarget { .. } => "ABILITY_NO_TARGET",
            Self::AlreadyAtMax { .. } => "ABILITY_ALREADY_AT_MAX",
        }
    }
}

/// Failure of [`GameEngine::submit_intent`](super::GameEngine::submit_intent).
///
/// `Rejected` is the everyday case. `Content` only surfaces when a floor
/// transition cannot be populated, which means broken content data; the
/// state is left on the previous floor.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("intent rejected: {0}")]
    Rejected(#[from] IntentRejection),

    #[error("floor transition failed: {0}")]
    Content(#[from] SetupError),
}

impl TurnError {
    pub fn rejection(&self) -> Option<&IntentRejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            Self::Content(_) => None,
        }
    }
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Rejected(inner) => inner.severity(),
            Self::Content(inner) => inner.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Rejected(inner) => inner.error_code(),
            Self::Content(inner) => inner.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_rejections_are_fatal() {
        assert_eq!(IntentRejection::GameOver.severity(), ErrorSeverity::Fatal);
        assert!(IntentRejection::NoStairs.severity().is_recoverable());
        assert_eq!(
            IntentRejection::Blocked {
                target: Position::new(1, 2)
            }
            .to_string(),
            "(1,2) is not walkable"
        );
        assert_eq!(
            IntentRejection::UnknownAbility { hotkey: '9' }.error_code(),
            "ABILITY_UNKNOWN"
        );
    }
}
