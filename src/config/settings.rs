use std::path::PathBuf;

use crate::error::{Error, Result};

use super::constants::{
    CHECKLIST_PAGE_SIZE, DB_FILE_NAME, DB_PATH_FRAGMENT, DEFAULT_HOST_PROCESS, DEFAULT_SEARCH_ROOT,
};

/// Parameters for one sweep run.
///
/// Everything the pipeline needs is carried here and handed to the workflow
/// explicitly; nothing is read from globals once the run has started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory searched recursively for the database
    pub root: PathBuf,
    /// Explicit database file; skips the search when set
    pub database: Option<PathBuf>,
    pub db_file_name: String,
    pub path_fragment: String,
    /// Process signalled after entries are removed
    pub process: String,
    pub restart: bool,
    pub page_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_SEARCH_ROOT),
            database: None,
            db_file_name: DB_FILE_NAME.to_string(),
            path_fragment: DB_PATH_FRAGMENT.to_string(),
            process: DEFAULT_HOST_PROCESS.to_string(),
            restart: true,
            page_size: CHECKLIST_PAGE_SIZE,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.root.as_os_str().is_empty() {
            return Err(Error::InvalidArgument {
                message: "search root cannot be empty".to_string(),
            });
        }
        if self.process.trim().is_empty() {
            return Err(Error::InvalidArgument {
                message: "process name cannot be empty".to_string(),
            });
        }
        if let Some(database) = &self.database
            && database.as_os_str().is_empty()
        {
            return Err(Error::InvalidArgument {
                message: "database path cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}
