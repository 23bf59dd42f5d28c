use crate::config::Settings;
use crate::error::Result;

use super::entry::Args;

pub struct CliContext {
    settings: Settings,
}

impl CliContext {
    pub fn from_args(args: Args) -> Result<Self> {
        let settings = Settings {
            root: args.root,
            database: args.database,
            process: args.process.trim().to_string(),
            restart: !args.no_restart,
            ..Settings::default()
        };
        settings.validate()?;

        Ok(Self { settings })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
