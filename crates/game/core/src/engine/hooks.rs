//! Damage, targeting, and XP surface shared by melee and abilities.
//!
//! Ability effects never touch HP or XP fields directly; they go through
//! these methods so clamping, death detection, kill rewards, and the boss
//! staircase behave exactly as they do for a sword swing.

use crate::ability::{flat_heal, fraction_of, strike_damage, sweep_damage};
use crate::combat;
use crate::env::{AbilityDefinition, AbilityEffect, GameEnv};
use crate::state::{EntityId, LevelUp, Position};

use super::{GameEngine, IntentRejection, TurnEvent};

impl<'a> GameEngine<'a> {
    /// XP paid for killing a monster on `floor`.
    pub fn kill_reward(is_boss: bool, floor: u32) -> u32 {
        if is_boss {
            100 + 10 * floor
        } else {
            10 + 2 * floor
        }
    }

    /// Reduces a live entity's HP by `amount`, clamped at zero.
    ///
    /// Returns `true` if this call killed it. Killing a monster pays XP and,
    /// for the last boss, opens the stairs. Dead or unknown targets are
    /// ignored.
    pub fn apply_damage(&mut self, target: EntityId, amount: u32) -> bool {
        let Some(actor) = self.state.entities.actor_mut(target) else {
            return false;
        };
        let died = combat::apply_damage(actor, amount);
        if died && !target.is_player() {
            self.on_monster_killed(target);
        }
        died
    }

    /// Nearest living monster within `range` (Manhattan, inclusive).
    pub fn find_nearest_monster_within_range(
        &self,
        origin: Position,
        range: u32,
    ) -> Option<EntityId> {
        self.state.entities.nearest_monster_within(origin, range)
    }

    /// Living monsters on the eight tiles around `origin`.
    pub fn find_monsters_adjacent_to(&self, origin: Position) -> Vec<EntityId> {
        self.state.entities.monsters_adjacent_to(origin)
    }

    /// Grants XP to the player and logs each level gained.
    pub fn award_xp(&mut self, amount: u32) -> Vec<LevelUp> {
        let player = self.state.entities.player_mut();
        let levels = player.gain_xp(amount);
        let name = player.actor.name.clone();
        for level in &levels {
            self.state
                .log
                .push(format!("{name} reaches level {}!", level.level));
            self.push_event(TurnEvent::LeveledUp(*level));
        }
        levels
    }

    /// Kill bookkeeping for a monster whose HP just reached zero.
    pub(crate) fn on_monster_killed(&mut self, id: EntityId) {
        let Some(monster) = self.state.entities.monsters().iter().find(|m| m.id() == id) else {
            return;
        };
        let name = monster.actor.name.clone();
        let is_boss = monster.is_boss;

        let xp = Self::kill_reward(is_boss, self.state.turn.floor);
        let player = self.state.entities.player().actor.name.clone();
        self.state.log.push(format!("{player} gains {xp} XP!"));
        self.push_event(TurnEvent::MonsterSlain {
            id,
            name: name.clone(),
            xp,
        });
        self.award_xp(xp);

        if is_boss && !self.state.entities.boss_alive() && self.state.grid.down_stairs().is_none() {
            let stairs = self.unlock_boss_stairs();
            self.state.log.push("A staircase rumbles open nearby!");
            self.push_event(TurnEvent::BossDefeated { name, stairs });
        }
    }

    // ===== abilities =====

    /// Uses the player's ability bound to `hotkey`.
    ///
    /// All checks run before anything is spent: the ability must exist, be
    /// off cooldown, be affordable, and its first targeted effect must have
    /// a target. On success MP is paid, the cooldown starts, and effects
    /// apply in order.
    pub fn use_ability(&mut self, env: GameEnv<'_>, hotkey: char) -> Result<(), IntentRejection> {
        let job = self.state.entities.player().job;
        let ability = env
            .abilities()
            .ability_by_hotkey(job, hotkey)
            .ok_or(IntentRejection::UnknownAbility { hotkey })?;

        if let Err(rejection) = self.check_ability(ability) {
            self.state.log.push(rejection_message(ability, &rejection));
            return Err(rejection);
        }

        let state = &mut *self.state;
        let player = state.entities.player_mut();
        player.actor.mp.drain(ability.mp_cost);
        let caster = player.actor.name.clone();
        state
            .cooldowns
            .start(EntityId::PLAYER, ability.id.clone(), ability.cooldown);
        state.log.push(format!("{caster} uses {}!", ability.name));

        for effect in &ability.effects {
            self.apply_effect(ability, *effect);
        }
        self.push_event(TurnEvent::AbilityUsed {
            ability: ability.id.clone(),
        });
        Ok(())
    }

    fn check_ability(&self, ability: &AbilityDefinition) -> Result<(), IntentRejection> {
        let player = self.state.entities.player();

        let remaining = self.state.cooldowns.remaining(EntityId::PLAYER, &ability.id);
        if remaining > 0 {
            return Err(IntentRejection::OnCooldown {
                ability: ability.id.clone(),
                remaining,
            });
        }

        if player.actor.mp.current < ability.mp_cost {
            return Err(IntentRejection::InsufficientMp {
                ability: ability.id.clone(),
                required: ability.mp_cost,
                available: player.actor.mp.current,
            });
        }

        if let Some(first) = ability.effects.iter().find(|e| e.requires_target())
            && !self.has_target(*first)
        {
            return Err(IntentRejection::NoTarget {
                ability: ability.id.clone(),
            });
        }

        if matches!(ability.effects.first(), Some(AbilityEffect::HealFlat { .. }))
            && player.actor.hp.is_full()
        {
            return Err(IntentRejection::AlreadyAtMax {
                ability: ability.id.clone(),
            });
        }

        Ok(())
    }

    fn has_target(&self, effect: AbilityEffect) -> bool {
        let origin = self.state.entities.player().position();
        match effect {
            AbilityEffect::Strike { .. } => self
                .find_nearest_monster_within_range(origin, self.state.config.spell_range)
                .is_some(),
            AbilityEffect::Sweep { .. } => !self.find_monsters_adjacent_to(origin).is_empty(),
            _ => true,
        }
    }

    fn apply_effect(&mut self, ability: &AbilityDefinition, effect: AbilityEffect) {
        let player = self.state.entities.player();
        let origin = player.position();
        let attack = player.actor.attack;
        let stats = player.stats;
        let caster = player.actor.name.clone();

        match effect {
            AbilityEffect::Strike { power } => {
                let range = self.state.config.spell_range;
                match self.find_nearest_monster_within_range(origin, range) {
                    Some(target) => {
                        let damage = strike_damage(attack, &stats, power);
                        self.ability_hit(ability, target, damage);
                    }
                    None => self
                        .state
                        .log
                        .push(format!("No enemies in range for {}!", ability.name)),
                }
            }
            AbilityEffect::Sweep { power } => {
                let targets = self.find_monsters_adjacent_to(origin);
                if targets.is_empty() {
                    self.state
                        .log
                        .push(format!("{} finds no enemies nearby.", ability.name));
                }
                let damage = sweep_damage(attack, power);
                for target in targets {
                    self.ability_hit(ability, target, damage);
                }
            }
            AbilityEffect::RestoreHp { divisor } => {
                let hp = &mut self.state.entities.player_mut().actor.hp;
                let restored = hp.restore(fraction_of(hp.maximum, divisor));
                self.state.log.push(format!("{caster} recovers {restored} HP."));
            }
            AbilityEffect::HealFlat { base, mnd_scale } => {
                let hp = &mut self.state.entities.player_mut().actor.hp;
                let restored = hp.restore(flat_heal(base, &stats, mnd_scale));
                self.state.log.push(format!("{caster} recovers {restored} HP."));
            }
            AbilityEffect::RestoreMp { divisor } => {
                let mp = &mut self.state.entities.player_mut().actor.mp;
                let restored = mp.restore(fraction_of(mp.maximum, divisor));
                self.state.log.push(format!("{caster} recovers {restored} MP."));
            }
            AbilityEffect::RaiseAttack { amount } => {
                let actor = &mut self.state.entities.player_mut().actor;
                actor.attack = actor.attack.saturating_add(amount);
                let raised = actor.attack;
                self.state
                    .log
                    .push(format!("{caster}'s attack rises to {raised}!"));
            }
        }
    }

    fn ability_hit(&mut self, ability: &AbilityDefinition, target: EntityId, damage: u32) {
        let Some(actor) = self.state.entities.actor_mut(target) else {
            return;
        };
        let name = actor.name.clone();
        let died = combat::apply_damage(actor, damage);

        let mut message = format!("{} hits {name} for {damage}!", ability.name);
        if died {
            message.push_str(&format!(" {name} is defeated."));
        }
        self.state.log.push(message);

        if died {
            self.on_monster_killed(target);
        }
    }
}

fn rejection_message(ability: &AbilityDefinition, rejection: &IntentRejection) -> String {
    match rejection {
        IntentRejection::OnCooldown { remaining, .. } => {
            format!("{} is not ready ({remaining} turns).", ability.name)
        }
        IntentRejection::InsufficientMp { .. } => format!("Not enough MP for {}!", ability.name),
        IntentRejection::NoTarget { .. } => format!("No enemies in range for {}!", ability.name),
        IntentRejection::AlreadyAtMax { .. } => "Already at full health.".to_string(),
        other => other.to_string(),
    }
}
