/// Where the turn state machine currently sits.
///
/// ```text
/// AwaitingFloorStart -> Exploring -> ResolvingAction -> ResolvingMonsters -> Exploring
///                                         |                    |
///                                   FloorTransition        GameOver
/// ```
///
/// Only `Exploring` accepts intents. The resolving phases are transient and
/// only observable if a caller inspects state mid-turn (hooks do).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    #[default]
    AwaitingFloorStart,
    Exploring,
    ResolvingAction,
    ResolvingMonsters,
    FloorTransition,
    GameOver,
}

impl TurnPhase {
    pub fn accepts_intents(self) -> bool {
        matches!(self, Self::Exploring)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// Floor and turn counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Current floor, starting at 1.
    pub floor: u32,
    /// Starts at 1; incremented after every consumed turn.
    pub turn: u64,
    pub phase: TurnPhase,
}

impl TurnState {
    pub fn new() -> Self {
        Self {
            floor: 1,
            turn: 1,
            phase: TurnPhase::AwaitingFloorStart,
        }
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
