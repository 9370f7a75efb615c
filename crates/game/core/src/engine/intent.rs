/// A single player command for one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Step (or attack) toward a neighbouring tile; `dx`, `dy` in `{-1, 0, 1}`.
    Move { dx: i32, dy: i32 },
    Wait,
    Descend,
    /// Only honoured when `allow_ascent` is set.
    Ascend,
    /// Presentation-only; never consumes a turn.
    OpenAbilityMenu,
    UseAbility { hotkey: char },
}

impl Intent {
    pub const fn step(dx: i32, dy: i32) -> Self {
        Self::Move { dx, dy }
    }

    pub const fn north() -> Self {
        Self::step(0, -1)
    }

    pub const fn south() -> Self {
        Self::step(0, 1)
    }

    pub const fn west() -> Self {
        Self::step(-1, 0)
    }

    pub const fn east() -> Self {
        Self::step(1, 0)
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Wait => "wait",
            Self::Descend => "descend",
            Self::Ascend => "ascend",
            Self::OpenAbilityMenu => "ability_menu",
            Self::UseAbility { .. } => "use_ability",
        }
    }
}
