use std::fs::FileType;
use std::path::{Path, PathBuf};

use snafu::OptionExt;
use tokio::task;
use walkdir::WalkDir;

use crate::config::Settings;
use crate::config::constants::SEARCH_PREFIX;
use crate::error::{DatabaseNotFoundSnafu, Error, Result, join_error};
use crate::utils::Spinner;

/// Locate the Launchpad database under `settings.root`, showing a spinner
/// for the duration of the walk.
pub async fn find(settings: &Settings) -> Result<PathBuf> {
    let root = settings.root.clone();
    let file_name = settings.db_file_name.clone();
    let fragment = settings.path_fragment.clone();

    let spinner = Spinner::start(SEARCH_PREFIX);
    let searched = task::spawn_blocking(move || search(&root, &file_name, &fragment)).await;
    spinner.stop().await;

    let found = searched.map_err(join_error)??;
    let path = found.context(DatabaseNotFoundSnafu {
        root: settings.root.clone(),
    })?;
    log::info!("Found database at {}", path.display());
    Ok(path)
}

/// Walk `root` and return the first file named `file_name` whose path
/// contains `fragment`.
///
/// Unreadable nodes below the root are skipped; only a failure on the root
/// itself aborts the walk.
pub fn search(root: &Path, file_name: &str, fragment: &str) -> Result<Option<PathBuf>> {
    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(Error::SearchRoot {
                    root: root.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                log::debug!("Skipping unreadable node: {err}");
                continue;
            }
        };

        if is_candidate(entry.path(), entry.file_type(), file_name, fragment) {
            return Ok(Some(entry.into_path()));
        }
    }
    Ok(None)
}

fn is_candidate(path: &Path, file_type: FileType, file_name: &str, fragment: &str) -> bool {
    !file_type.is_dir()
        && path.file_name().is_some_and(|name| name == file_name)
        && path.to_string_lossy().contains(fragment)
}
