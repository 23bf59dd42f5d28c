use snafu::Snafu;
use std::path::PathBuf;
use std::process::ExitStatus;
use tokio::task;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Could not find the database file under '{}'", root.display()))]
    DatabaseNotFound { root: PathBuf },

    #[snafu(display("Failed to search '{}': {source}", root.display()))]
    SearchRoot {
        root: PathBuf,
        source: walkdir::Error,
    },

    #[snafu(display("Failed to open database '{}': {source}", path.display()))]
    OpenDatabase {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[snafu(display("Failed to query launcher entries ({statement}): {source}"))]
    Query {
        statement: String,
        source: rusqlite::Error,
    },

    #[snafu(display("Failed to decode launcher entry: {source}"))]
    DecodeRow { source: rusqlite::Error },

    #[snafu(display("Failed to delete entries [{ids}]: {source}"))]
    DeleteEntries {
        ids: String,
        source: rusqlite::Error,
    },

    #[snafu(display("Selection was cancelled"))]
    Cancelled,

    #[snafu(display("Interactive prompt failed: {source}"))]
    Prompt { source: dialoguer::Error },

    #[snafu(display("Selected item '{label}' is not part of the listed entries"))]
    UnknownSelection { label: String },

    #[snafu(display("Failed to restart '{process}': {source}"))]
    Reload {
        process: String,
        source: std::io::Error,
    },

    #[snafu(display("Failed to restart '{process}': killall exited with {status}"))]
    ReloadFailed { process: String, status: ExitStatus },

    #[snafu(display("Invalid argument: {message}"))]
    InvalidArgument { message: String },

    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },
}

pub fn join_error(err: task::JoinError) -> Error {
    Error::Io {
        source: std::io::Error::other(err.to_string()),
    }
}
