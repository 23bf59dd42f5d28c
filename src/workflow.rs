//! The sweep pipeline: locate, list, select, delete, reload.

use std::fmt;
use std::path::PathBuf;

use crate::cli::prompts::Selector;
use crate::config::Settings;
use crate::config::constants::CHECKLIST_MESSAGE;
use crate::error::Result;
use crate::launchpad::{Checklist, Reloader, Repository, locator};
use crate::utils::format_removal_message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Locating,
    Listing,
    Selecting,
    ResolvingIds,
    Deleting,
    Reloading,
    Done,
}

/// How a run ended when no error cut it short
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    NoEntries,
    NothingSelected,
    Removed { requested: usize, deleted: usize },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoEntries => write!(f, "No launcher entries found"),
            Outcome::NothingSelected => write!(f, "Nothing selected"),
            Outcome::Removed { requested, deleted } if requested == deleted => {
                write!(f, "Removed {deleted} item(s)")
            }
            Outcome::Removed { requested, deleted } => {
                write!(f, "Removed {deleted} item(s) ({requested} selected)")
            }
        }
    }
}

pub struct Workflow<'a, S, R> {
    settings: &'a Settings,
    selector: &'a S,
    reloader: &'a R,
}

impl<'a, S: Selector, R: Reloader> Workflow<'a, S, R> {
    pub fn new(settings: &'a Settings, selector: &'a S, reloader: &'a R) -> Self {
        Self {
            settings,
            selector,
            reloader,
        }
    }

    pub async fn run(&self) -> Result<Outcome> {
        enter(Stage::Locating);
        let path = self.locate().await?;
        let repo = Repository::open(&path)?;
        self.sweep(&repo).await
    }

    /// Everything after the database has been opened.
    pub async fn sweep(&self, repo: &Repository) -> Result<Outcome> {
        enter(Stage::Listing);
        let entries = repo.list()?;
        if entries.is_empty() {
            enter(Stage::Done);
            return Ok(Outcome::NoEntries);
        }

        let checklist = Checklist::new(&entries);
        drop(entries);

        enter(Stage::Selecting);
        let chosen = self
            .selector
            .choose(
                CHECKLIST_MESSAGE,
                checklist.labels(),
                &checklist.defaults(),
                self.settings.page_size,
            )
            .await?;
        if chosen.is_empty() {
            enter(Stage::Done);
            return Ok(Outcome::NothingSelected);
        }

        enter(Stage::ResolvingIds);
        let ids = checklist.resolve(&chosen)?;
        log::info!("{}", format_removal_message(&chosen));

        enter(Stage::Deleting);
        let deleted = repo.delete(&ids)?;

        if self.settings.restart {
            enter(Stage::Reloading);
            self.reloader.reload().await?;
        } else {
            log::info!("Skipping restart of '{}'", self.settings.process);
        }

        enter(Stage::Done);
        Ok(Outcome::Removed {
            requested: ids.len(),
            deleted,
        })
    }

    async fn locate(&self) -> Result<PathBuf> {
        match &self.settings.database {
            Some(path) => {
                log::debug!("Using database {} without searching", path.display());
                Ok(path.clone())
            }
            None => locator::find(self.settings).await,
        }
    }
}

fn enter(stage: Stage) {
    log::debug!("Entering stage {stage:?}");
}
