use snafu::{ResultExt, ensure};
use tokio::process::Command;

use crate::error::{ReloadFailedSnafu, ReloadSnafu, Result};

const KILLALL: &str = "killall";

/// Restarts the process that renders Launchpad so it re-reads the database.
pub trait Reloader {
    async fn reload(&self) -> Result<()>;
}

/// Terminates the host process by name and leaves the relaunch to launchd.
pub struct KillallReloader {
    program: String,
    process: String,
}

impl KillallReloader {
    pub fn new(process: impl Into<String>) -> Self {
        Self {
            program: KILLALL.to_string(),
            process: process.into(),
        }
    }

    #[cfg(test)]
    fn with_program(program: &str, process: &str) -> Self {
        Self {
            program: program.to_string(),
            process: process.to_string(),
        }
    }
}

impl Reloader for KillallReloader {
    async fn reload(&self) -> Result<()> {
        log::debug!("Sending terminate signal to '{}'", self.process);
        let status = Command::new(&self.program)
            .arg(&self.process)
            .status()
            .await
            .context(ReloadSnafu {
                process: self.process.as_str(),
            })?;

        ensure!(
            status.success(),
            ReloadFailedSnafu {
                process: self.process.as_str(),
                status,
            }
        );
        log::info!("Restarted '{}'", self.process);
        Ok(())
    }
}
