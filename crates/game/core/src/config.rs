/// Game configuration constants and tunable parameters.
///
/// Every field has a default matching the classic ruleset; data files only
/// need to name the values they override.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Grid width in tiles.
    pub width: u32,
    /// Grid height in tiles.
    pub height: u32,

    /// Radius (Euclidean) around the player that becomes explored each turn.
    pub visibility_radius: u32,
    /// Manhattan distance within which monsters pursue the player.
    ///
    /// Independent of `visibility_radius` even though both default to 8.
    pub monster_sight_range: u32,

    /// Number of messages retained in the log (clamped to [`Self::MAX_MESSAGES`]).
    pub message_capacity: usize,

    /// Enables up-stairs and the `Ascend` intent.
    pub allow_ascent: bool,

    /// Heal the player every N consumed turns.
    pub hp_regen_interval: u64,
    /// Restore player MP every N consumed turns.
    pub mp_regen_interval: u64,

    /// Smallest room edge (inclusive).
    pub min_room_size: u32,
    /// Largest room edge (exclusive).
    pub max_room_size: u32,
    /// Fewest rooms attempted per floor (inclusive).
    pub min_rooms: u32,
    /// Most rooms attempted per floor (exclusive).
    pub max_rooms: u32,
    /// Upper bound on rejected room samples before generation gives up.
    pub max_placement_attempts: u32,

    /// Floors divisible by this number are boss arenas.
    pub boss_floor_interval: u32,

    /// Manhattan range of targeted abilities.
    pub spell_range: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Hard upper bound for the message log.
    pub const MAX_MESSAGES: usize = 16;
    /// Tiles kept free between carved rooms and the grid edge.
    pub const ROOM_MARGIN: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_WIDTH: u32 = 60;
    pub const DEFAULT_HEIGHT: u32 = 25;
    pub const DEFAULT_VISIBILITY_RADIUS: u32 = 8;
    pub const DEFAULT_SIGHT_RANGE: u32 = 8;
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 4;
    pub const DEFAULT_HP_REGEN_INTERVAL: u64 = 2;
    pub const DEFAULT_MP_REGEN_INTERVAL: u64 = 5;
    pub const DEFAULT_BOSS_FLOOR_INTERVAL: u32 = 10;
    pub const DEFAULT_SPELL_RANGE: u32 = 5;

    pub fn new() -> Self {
        Self {
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            visibility_radius: Self::DEFAULT_VISIBILITY_RADIUS,
            monster_sight_range: Self::DEFAULT_SIGHT_RANGE,
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
            allow_ascent: false,
            hp_regen_interval: Self::DEFAULT_HP_REGEN_INTERVAL,
            mp_regen_interval: Self::DEFAULT_MP_REGEN_INTERVAL,
            min_room_size: 4,
            max_room_size: 9,
            min_rooms: 6,
            max_rooms: 10,
            max_placement_attempts: 500,
            boss_floor_interval: Self::DEFAULT_BOSS_FLOOR_INTERVAL,
            spell_range: Self::DEFAULT_SPELL_RANGE,
        }
    }

    pub fn with_dimensions(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::new()
        }
    }

    pub fn with_ascent(mut self, allow_ascent: bool) -> Self {
        self.allow_ascent = allow_ascent;
        self
    }

    /// Effective message capacity after clamping to the compile-time bound.
    pub fn effective_message_capacity(&self) -> usize {
        self.message_capacity.clamp(1, Self::MAX_MESSAGES)
    }

    /// Smallest width/height that can hold one minimum-size room plus margins.
    pub fn minimum_grid_edge(&self) -> u32 {
        self.min_room_size + 2 * Self::ROOM_MARGIN + 1
    }

    pub fn is_boss_floor(&self, floor: u32) -> bool {
        self.boss_floor_interval > 0 && floor > 0 && floor % self.boss_floor_interval == 0
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
