/// Root of the per-user temporary directories on macOS
pub const DEFAULT_SEARCH_ROOT: &str = "/private/var/folders";

/// File name of the Launchpad SQLite database
pub const DB_FILE_NAME: &str = "db";

/// Path fragment identifying the Dock's Launchpad cache namespace
pub const DB_PATH_FRAGMENT: &str = "com.apple.dock.launchpad";

/// Process that renders Launchpad and is relaunched by launchd
pub const DEFAULT_HOST_PROCESS: &str = "Dock";

/// Visible rows in the checklist before it scrolls
pub const CHECKLIST_PAGE_SIZE: usize = 10;

pub const CHECKLIST_MESSAGE: &str = "Choose the items to remove";

pub const SEARCH_PREFIX: &str = "Searching database file: ";
