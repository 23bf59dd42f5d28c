use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};
use snafu::ResultExt;

use crate::error::{DecodeRowSnafu, DeleteEntriesSnafu, OpenDatabaseSnafu, QuerySnafu, Result};

use super::Entry;

const LIST_ENTRIES_SQL: &str = "SELECT item_id, title FROM apps";

/// Read/delete access to the Launchpad `apps` table over a single connection.
///
/// The connection is opened once and closed when the repository is dropped.
pub struct Repository {
    conn: Connection,
    path: PathBuf,
}

impl Repository {
    pub fn open(path: &Path) -> Result<Self> {
        // never create a database that the Dock does not own
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).context(OpenDatabaseSnafu { path })?;
        log::debug!("Opened database {}", path.display());
        Ok(Self {
            conn,
            path: path.to_path_buf(),
        })
    }

    /// All entries in table order. An empty table is not an error.
    pub fn list(&self) -> Result<Vec<Entry>> {
        let mut stmt = self.conn.prepare(LIST_ENTRIES_SQL).context(QuerySnafu {
            statement: LIST_ENTRIES_SQL,
        })?;

        let rows = stmt
            .query_map([], |row| {
                Ok(Entry::new(row.get(0)?, row.get::<_, String>(1)?))
            })
            .context(QuerySnafu {
                statement: LIST_ENTRIES_SQL,
            })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row.context(DecodeRowSnafu)?);
        }

        stmt.finalize().context(QuerySnafu {
            statement: LIST_ENTRIES_SQL,
        })?;

        log::debug!("Listed {} launcher entries", entries.len());
        Ok(entries)
    }

    /// Remove every row whose id is in `ids` with a single statement.
    ///
    /// Returns the number of rows removed; ids that no longer exist are
    /// ignored by the store. An empty set issues no statement.
    pub fn delete(&self, ids: &BTreeSet<i64>) -> Result<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        // ids are integers read back from this same table, so they are
        // written into the statement directly
        let id_list = ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let sql = format!("DELETE FROM apps WHERE item_id IN ({id_list})");

        let deleted = self
            .conn
            .execute(&sql, [])
            .context(DeleteEntriesSnafu { ids: id_list })?;
        log::info!("Deleted {deleted} row(s) from {}", self.path.display());
        Ok(deleted)
    }
}
