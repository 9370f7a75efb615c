//! The per-turn sequence.
//!
//! 1. visibility refresh (done when the previous turn closed or the floor opened)
//! 2. one player intent
//! 3. intent resolution
//! 4. every living monster steps or attacks
//! 5. periodic HP/MP regeneration, cooldown tick
//! 6. turn counter increment
//! 7. game-over check

use crate::ai::{self, MonsterAction};
use crate::combat::resolve_attack;
use crate::env::GameEnv;
use crate::state::{EntityId, TurnPhase};

use super::{Arrival, GameEngine, Intent, IntentRejection, TurnError, TurnEvent, TurnReport};

impl<'a> GameEngine<'a> {
    /// Runs one turn for `intent`.
    ///
    /// Returns a report with `consumed = false` only for the ability menu.
    /// Every other accepted intent consumes a turn; rejected intents consume
    /// nothing and leave the counters untouched.
    ///
    /// # Errors
    ///
    /// [`TurnError::Rejected`] for invalid intents; [`TurnError::Content`] if
    /// a stair transition cannot populate the next floor.
    pub fn submit_intent(
        &mut self,
        env: GameEnv<'_>,
        intent: Intent,
    ) -> Result<TurnReport, TurnError> {
        self.ensure_accepting()?;

        if intent == Intent::OpenAbilityMenu {
            self.push_event(TurnEvent::AbilityMenuOpened);
            return Ok(TurnReport {
                consumed: false,
                events: self.take_events(),
            });
        }

        self.set_phase(TurnPhase::ResolvingAction);
        if let Err(err) = self.resolve_intent(env, intent) {
            self.events.clear();
            if !self.state.is_game_over() {
                self.set_phase(TurnPhase::Exploring);
            }
            return Err(err);
        }

        self.close_turn();
        Ok(TurnReport {
            consumed: true,
            events: self.take_events(),
        })
    }

    fn ensure_accepting(&mut self) -> Result<(), IntentRejection> {
        if !self.state.entities.player().is_alive() {
            self.set_phase(TurnPhase::GameOver);
        }
        let phase = self.state.turn.phase;
        if phase.accepts_intents() {
            Ok(())
        } else if phase.is_terminal() {
            Err(IntentRejection::GameOver)
        } else {
            Err(IntentRejection::NotAccepting { phase })
        }
    }

    fn resolve_intent(&mut self, env: GameEnv<'_>, intent: Intent) -> Result<(), TurnError> {
        match intent {
            Intent::Move { dx, dy } => self.player_step(dx, dy)?,
            Intent::Wait => {
                let name = self.state.entities.player().actor.name.clone();
                self.state.log.push(format!("{name} rests."));
            }
            Intent::Descend => self.descend(env)?,
            Intent::Ascend => self.ascend(env)?,
            Intent::UseAbility { hotkey } => self.use_ability(env, hotkey)?,
            Intent::OpenAbilityMenu => {}
        }
        Ok(())
    }

    // ===== player intents =====

    fn player_step(&mut self, dx: i32, dy: i32) -> Result<(), IntentRejection> {
        if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) || (dx, dy) == (0, 0) {
            return Err(IntentRejection::InvalidStep { dx, dy });
        }

        let target = self.state.entities.player().position().offset(dx, dy);
        if !self.state.grid.in_bounds(target) {
            return Err(IntentRejection::OutOfBounds { target });
        }

        if let Some(monster) = self.state.entities.monster_at(target) {
            self.player_attacks(monster);
            return Ok(());
        }

        if !self.state.grid.is_walkable(target) {
            return Err(IntentRejection::Blocked { target });
        }
        self.state.entities.player_mut().actor.position = target;
        Ok(())
    }

    fn player_attacks(&mut self, monster: EntityId) {
        let state = &mut *self.state;
        let Some((player, target)) = state.entities.player_and_monster_mut(monster) else {
            return;
        };
        let outcome = resolve_attack(&player.actor, &mut target.actor, &mut state.rng);
        state.log.push(outcome.message);
        if outcome.defender_died {
            self.on_monster_killed(monster);
        }
    }

    fn descend(&mut self, env: GameEnv<'_>) -> Result<(), TurnError> {
        if self.state.is_boss_floor()
            && let Some(boss) = self.state.entities.living_monsters().find(|m| m.is_boss)
        {
            let boss = boss.actor.name.clone();
            self.state
                .log
                .push(format!("The stairs are sealed while {boss} lives!"));
            return Err(IntentRejection::StairsSealed { boss }.into());
        }

        let here = self.state.entities.player().position();
        if !self.state.grid.has_down_stairs(here) {
            return Err(IntentRejection::NoStairs.into());
        }

        let next = self.state.turn.floor + 1;
        self.enter_floor(env, next, Arrival::FromAbove)?;
        Ok(())
    }

    fn ascend(&mut self, env: GameEnv<'_>) -> Result<(), TurnError> {
        if !self.state.config.allow_ascent {
            return Err(IntentRejection::AscentDisabled.into());
        }
        if self.state.turn.floor <= 1 {
            return Err(IntentRejection::TopFloor.into());
        }
        let here = self.state.entities.player().position();
        if !self.state.grid.has_up_stairs(here) {
            return Err(IntentRejection::NoStairs.into());
        }

        let previous = self.state.turn.floor - 1;
        self.enter_floor(env, previous, Arrival::FromBelow)?;
        Ok(())
    }

    // ===== end of turn =====

    fn close_turn(&mut self) {
        self.set_phase(TurnPhase::ResolvingMonsters);
        self.run_monsters();

        let state = &mut *self.state;
        let turn = state.turn.turn;
        if is_due(turn, state.config.hp_regen_interval) {
            state.entities.player_mut().recover_hp();
        }
        if is_due(turn, state.config.mp_regen_interval) {
            state.entities.player_mut().recover_mp();
        }
        state.cooldowns.tick();
        state.turn.turn += 1;

        if state.entities.player().is_alive() {
            self.refresh_visibility();
            self.set_phase(TurnPhase::Exploring);
        } else {
            let message = format!(
                "{} has fallen on floor {}.",
                self.state.entities.player().actor.name,
                self.state.turn.floor
            );
            self.state.log.push(message);
            self.set_phase(TurnPhase::GameOver);
        }
    }

    /// Each living monster, in spawn order, steps toward the player or
    /// attacks. Stops early once the player is dead.
    fn run_monsters(&mut self) {
        for id in self.state.entities.living_ids() {
            let state = &mut *self.state;
            let player_at = state.entities.player().position();
            if !state.entities.player().is_alive() {
                break;
            }
            let Some(monster) = state.entities.living_monster(id) else {
                continue;
            };

            let origin = monster.position();
            let step = ai::next_step(monster, player_at, &mut state.rng);
            let action = ai::resolve_step(id, origin, step, player_at, &state.grid, &state.entities);

            match action {
                MonsterAction::Attack => self.monster_attacks(id),
                MonsterAction::MoveTo(destination) => {
                    if let Some(monster) = state.entities.living_monster_mut(id) {
                        monster.actor.position = destination;
                    }
                }
                MonsterAction::Hold => {}
            }
        }
    }

    fn monster_attacks(&mut self, monster: EntityId) {
        let state = &mut *self.state;
        let Some((player, attacker)) = state.entities.player_and_monster_mut(monster) else {
            return;
        };
        let outcome = resolve_attack(&attacker.actor, &mut player.actor, &mut state.rng);
        let killer = attacker.actor.name.clone();
        state.log.push(outcome.message);
        if outcome.defender_died {
            self.push_event(TurnEvent::PlayerDied { killer });
        }
    }
}

fn is_due(turn: u64, interval: u64) -> bool {
    interval > 0 && turn % interval == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regeneration_schedule() {
        assert!(is_due(2, 2));
        assert!(!is_due(3, 2));
        assert!(is_due(10, 5));
        assert!(!is_due(10, 0));
    }
}
