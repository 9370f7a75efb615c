//! Job table loader.

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::tables::JobTable;

/// Loader for the job base-stat table from RON files.
pub struct JobLoader;

impl JobLoader {
    pub fn load(path: &Path) -> LoadResult<JobTable> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Parse a RON list of job definitions. Duplicate jobs are an error.
    pub fn parse(content: &str) -> LoadResult<JobTable> {
        let table: JobTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse job table RON: {}", e))?;

        let duplicates = table.duplicates();
        anyhow::ensure!(
            duplicates.is_empty(),
            "jobs listed more than once: {:?}",
            duplicates
        );
        Ok(table)
    }
}
