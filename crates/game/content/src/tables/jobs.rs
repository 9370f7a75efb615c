use game_core::{Job, JobDefinition, JobOracle};

/// Job base-stat table in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct JobTable {
    definitions: Vec<JobDefinition>,
}

impl JobTable {
    pub fn new(definitions: Vec<JobDefinition>) -> Self {
        Self { definitions }
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JobDefinition> {
        self.definitions.iter()
    }

    /// Jobs listed more than once. Lookups return the first entry.
    pub fn duplicates(&self) -> Vec<Job> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for definition in &self.definitions {
            if seen.contains(&definition.job) {
                if !duplicates.contains(&definition.job) {
                    duplicates.push(definition.job);
                }
            } else {
                seen.push(definition.job);
            }
        }
        duplicates
    }
}

impl JobOracle for JobTable {
    fn job(&self, job: Job) -> Option<&JobDefinition> {
        self.definitions.iter().find(|d| d.job == job)
    }

    fn jobs(&self) -> Vec<Job> {
        self.definitions.iter().map(|d| d.job).collect()
    }
}
