//! Combat resolution.
//!
//! Melee is a two-draw affair: a percentile roll against the hit chance, then
//! a small damage variance. Both draws come from the caller's RNG stream, in
//! that order, so a fixed seed replays every exchange.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (hit check + damage)
//! - `calculate_hit_chance`: Attack vs Defense, clamped percentage
//! - `calculate_damage`: Damage after defense with a floor of 1
//! - `apply_damage`: HP reduction (clamped to 0), the single HP-loss primitive

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{MIN_DAMAGE, VARIANCE, apply_damage, calculate_damage};
pub use hit::{BASE_HIT_CHANCE, MAX_HIT_CHANCE, MIN_HIT_CHANCE, calculate_hit_chance, check_hit};
pub use result::{CombatOutcome, resolve_attack};
