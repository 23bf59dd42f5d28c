//! Access to the Launchpad state: finding the database, reading and pruning
//! its entries, and relaunching the process that renders them.

pub mod checklist;
pub mod locator;
pub mod reloader;
pub mod repository;

pub use checklist::Checklist;
pub use reloader::{KillallReloader, Reloader};
pub use repository::Repository;

/// One row of the Launchpad `apps` table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: i64,
    pub title: String,
}

impl Entry {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
