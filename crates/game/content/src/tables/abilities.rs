use game_core::{AbilityDefinition, AbilityOracle, Job};

/// Abilities for one job, in hotkey order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JobAbilities {
    pub job: Job,
    pub abilities: Vec<AbilityDefinition>,
}

/// Per-job ability lists. Jobs without an entry have no abilities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AbilityCatalog {
    entries: Vec<JobAbilities>,
}

impl AbilityCatalog {
    pub fn new(entries: Vec<JobAbilities>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[JobAbilities] {
        &self.entries
    }

    /// `(job, hotkey)` pairs bound to more than one ability.
    pub fn hotkey_conflicts(&self) -> Vec<(Job, char)> {
        let mut conflicts = Vec::new();
        for entry in &self.entries {
            for (i, ability) in entry.abilities.iter().enumerate() {
                let clash = entry.abilities[..i]
                    .iter()
                    .any(|earlier| earlier.hotkey == ability.hotkey);
                if clash && !conflicts.contains(&(entry.job, ability.hotkey)) {
                    conflicts.push((entry.job, ability.hotkey));
                }
            }
        }
        conflicts
    }
}

impl AbilityOracle for AbilityCatalog {
    fn abilities(&self, job: Job) -> &[AbilityDefinition] {
        self.entries
            .iter()
            .find(|entry| entry.job == job)
            .map(|entry| entry.abilities.as_slice())
            .unwrap_or(&[])
    }
}
