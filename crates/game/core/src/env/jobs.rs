//! Job definitions and oracle interface.
//!
//! Jobs are static content: the base-stat table lives in data files and is
//! served to the engine through [`JobOracle`]. The engine only needs the
//! derivation rules that turn a definition into a starting player.

/// Playable jobs, identified by their three-letter abbreviation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Job {
    // Tanks
    Pld,
    War,
    Drk,
    Gnb,
    // Healers
    Whm,
    Sch,
    Ast,
    Sge,
    // Melee DPS
    Mnk,
    Drg,
    Nin,
    Sam,
    Rpr,
    Vpr,
    // Physical ranged DPS
    Brd,
    Mch,
    Dnc,
    // Magical ranged DPS
    Blm,
    Smn,
    Rdm,
    Pct,
    // Limited job
    Blu,
}

/// Party role of a job; drives the attack/defense derivation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Tank,
    Healer,
    Dps,
}

/// Whether a job's basic attack scales from strength or intelligence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackStyle {
    #[default]
    Physical,
    Magical,
}

/// The five primary attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoreStats {
    pub str: u32,
    pub dex: u32,
    pub int: u32,
    pub mnd: u32,
    pub vit: u32,
}

impl CoreStats {
    pub const fn new(str: u32, dex: u32, int: u32, mnd: u32, vit: u32) -> Self {
        Self {
            str,
            dex,
            int,
            mnd,
            vit,
        }
    }
}

/// Static description of a job: identity, role, and base numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobDefinition {
    pub job: Job,
    pub display_name: String,
    pub role: Role,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack_style: AttackStyle,
    pub base_stats: CoreStats,
    pub base_hp: u32,
    pub base_mp: u32,
}

impl JobDefinition {
    /// Starting maximum HP: base HP plus VIT.
    pub fn max_hp(&self) -> u32 {
        self.base_hp + self.base_stats.vit
    }

    /// Starting maximum MP: base MP plus half of MND.
    pub fn max_mp(&self) -> u32 {
        self.base_mp + self.base_stats.mnd / 2
    }

    /// Starting attack.
    ///
    /// ```text
    /// Tank            5 + STR/2
    /// Healer          3 + INT/3
    /// DPS (magical)   4 + INT/2
    /// DPS (physical)  6 + STR/2
    /// ```
    pub fn attack(&self) -> i32 {
        let stats = &self.base_stats;
        let value = match (self.role, self.attack_style) {
            (Role::Tank, _) => 5 + stats.str / 2,
            (Role::Healer, _) => 3 + stats.int / 3,
            (Role::Dps, AttackStyle::Magical) => 4 + stats.int / 2,
            (Role::Dps, AttackStyle::Physical) => 6 + stats.str / 2,
        };
        value as i32
    }

    /// Starting defense.
    ///
    /// ```text
    /// Tank    4 + VIT/2
    /// Healer  2 + VIT/3
    /// DPS     3 + VIT/3
    /// ```
    pub fn defense(&self) -> i32 {
        let vit = self.base_stats.vit;
        let value = match self.role {
            Role::Tank => 4 + vit / 2,
            Role::Healer => 2 + vit / 3,
            Role::Dps => 3 + vit / 3,
        };
        value as i32
    }
}

/// Read-only access to the job table.
pub trait JobOracle: Send + Sync {
    fn job(&self, job: Job) -> Option<&JobDefinition>;

    /// All known jobs, in table order.
    fn jobs(&self) -> Vec<Job>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paladin() -> JobDefinition {
        JobDefinition {
            job: Job::Pld,
            display_name: "Paladin".into(),
            role: Role::Tank,
            attack_style: AttackStyle::Physical,
            base_stats: CoreStats::new(12, 8, 6, 8, 14),
            base_hp: 40,
            base_mp: 20,
        }
    }

    #[test]
    fn derives_starting_numbers_for_tank() {
        let def = paladin();
        assert_eq!(def.max_hp(), 54);
        assert_eq!(def.max_mp(), 24);
        assert_eq!(def.attack(), 11);
        assert_eq!(def.defense(), 11);
    }

    #[test]
    fn magical_dps_scales_from_int() {
        let def = JobDefinition {
            job: Job::Blm,
            display_name: "Black Mage".into(),
            role: Role::Dps,
            attack_style: AttackStyle::Magical,
            base_stats: CoreStats::new(5, 7, 16, 6, 9),
            base_hp: 28,
            base_mp: 42,
        };
        assert_eq!(def.attack(), 12);
        assert_eq!(def.defense(), 6);
    }

    #[test]
    fn job_names_parse_case_insensitively() {
        assert_eq!("pld".parse::<Job>().ok(), Some(Job::Pld));
        assert_eq!("BLU".parse::<Job>().ok(), Some(Job::Blu));
        assert_eq!(Job::Drk.to_string(), "DRK");
        assert!("XYZ".parse::<Job>().is_err());
    }
}
