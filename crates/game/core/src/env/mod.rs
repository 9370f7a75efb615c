//! Traits describing read-only content and the random stream.
//!
//! Oracles expose job base stats, floor-tiered monster rolls, and ability
//! catalogs. The [`Env`] aggregate bundles them so the engine can reach
//! everything it needs without hard coupling to concrete implementations
//! (the `game-content` crate provides the data-backed ones).
mod abilities;
mod error;
mod jobs;
mod monsters;
mod rng;

pub use abilities::{AbilityDefinition, AbilityEffect, AbilityId, AbilityKind, AbilityOracle};
pub use error::OracleError;
pub use jobs::{AttackStyle, CoreStats, Job, JobDefinition, JobOracle, Role};
pub use monsters::{MonsterOracle, MonsterTemplate};
pub use rng::{PcgRng, RngStream};

/// Aggregates read-only oracles required by the engine.
pub struct Env<'a, J, M, A>
where
    J: JobOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    A: AbilityOracle + ?Sized,
{
    jobs: &'a J,
    monsters: &'a M,
    abilities: &'a A,
}

impl<J, M, A> Clone for Env<'_, J, M, A>
where
    J: JobOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    A: AbilityOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<J, M, A> Copy for Env<'_, J, M, A>
where
    J: JobOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    A: AbilityOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn JobOracle + 'a, dyn MonsterOracle + 'a, dyn AbilityOracle + 'a>;

impl<'a, J, M, A> Env<'a, J, M, A>
where
    J: JobOracle + ?Sized,
    M: MonsterOracle + ?Sized,
    A: AbilityOracle + ?Sized,
{
    pub fn new(jobs: &'a J, monsters: &'a M, abilities: &'a A) -> Self {
        Self {
            jobs,
            monsters,
            abilities,
        }
    }

    pub fn jobs(&self) -> &'a J {
        self.jobs
    }

    pub fn monsters(&self) -> &'a M {
        self.monsters
    }

    pub fn abilities(&self) -> &'a A {
        self.abilities
    }

    /// Looks up a job, turning a missing entry into an [`OracleError`].
    pub fn job(&self, job: Job) -> Result<&'a JobDefinition, OracleError> {
        self.jobs.job(job).ok_or(OracleError::JobNotFound(job))
    }
}

impl<'a, J, M, A> Env<'a, J, M, A>
where
    J: JobOracle + 'a,
    M: MonsterOracle + 'a,
    A: AbilityOracle + 'a,
{
    /// Erases concrete oracle types into a [`GameEnv`].
    pub fn as_game_env(&self) -> GameEnv<'a> {
        Env {
            jobs: self.jobs as &'a dyn JobOracle,
            monsters: self.monsters as &'a dyn MonsterOracle,
            abilities: self.abilities as &'a dyn AbilityOracle,
        }
    }
}
