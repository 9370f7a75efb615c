/// Terrain kinds for a single grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    #[default]
    Wall,
    Floor,
    DownStairs,
    UpStairs,
}

impl TileKind {
    /// Floor and both stair kinds can be stood on.
    pub const fn is_walkable(self) -> bool {
        matches!(self, Self::Floor | Self::DownStairs | Self::UpStairs)
    }

    pub const fn is_stairs(self) -> bool {
        matches!(self, Self::DownStairs | Self::UpStairs)
    }

    /// Canonical glyph used by renderers and the query surface.
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Floor => '.',
            Self::DownStairs => '>',
            Self::UpStairs => '<',
        }
    }

    pub(crate) const fn as_byte(self) -> u8 {
        match self {
            Self::Wall => 0,
            Self::Floor => 1,
            Self::DownStairs => 2,
            Self::UpStairs => 3,
        }
    }
}
