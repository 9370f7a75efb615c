//! Hit chance calculation.

pub const BASE_HIT_CHANCE: i32 = 70;
pub const MIN_HIT_CHANCE: u32 = 20;
pub const MAX_HIT_CHANCE: u32 = 95;

/// Calculate hit chance from attack vs defense.
///
/// # Formula
///
/// ```text
/// hit_chance = 70 + 2 * (attack - defense)
/// clamped to [20, 95]
/// ```
///
/// Stats are widened before the subtraction so extreme values cannot
/// overflow.
pub fn calculate_hit_chance(attack: i32, defense: i32) -> u32 {
    let diff = i64::from(attack) - i64::from(defense);
    let chance = i64::from(BASE_HIT_CHANCE) + 2 * diff;
    chance.clamp(i64::from(MIN_HIT_CHANCE), i64::from(MAX_HIT_CHANCE)) as u32
}

/// `roll` is a percentile in `[0, 100)`; the attack lands when it is strictly
/// below the hit chance.
pub fn check_hit(attack: i32, defense: i32, roll: u32) -> bool {
    roll < calculate_hit_chance(attack, defense)
}
