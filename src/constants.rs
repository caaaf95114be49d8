//! Constants for moment
//!
//! File names, markers, format strings and environment variable names shared
//! across the crate.

// === File and Directory Names ===

/// Backing file for the todo list, relative to the workspace root
pub const TODO_FILENAME: &str = "todo.md";

/// Default file extension for daily notes
pub const MARKDOWN_EXTENSION: &str = ".md";

/// Directory under the platform config dir holding the settings file
pub const CONFIG_DIR_NAME: &str = "moment";

/// Settings file name
pub const SETTINGS_FILENAME: &str = "settings.yaml";

/// Line separator used when saving the todo list
pub const NEWLINE: &str = "\n";

// === Todo Markers ===

/// Prefix of a pending todo line
pub const TODO_PENDING_PREFIX: &str = "- [ ] ";

/// Prefix of a completed todo line
pub const TODO_DONE_PREFIX: &str = "- [x] ";

/// Grammar every persisted todo line must match
pub const TODO_LINE_PATTERN: &str = r"^- \[( |x)\] .*$";

// === Daily Notes ===

/// Format used by the MOMENT_TODAY override: YYYY-MM-DD
pub const DATE_OVERRIDE_FORMAT: &str = "%Y-%m-%d";

/// Heading prepended to the template: "# Daily note: {date}\n\n"
pub const DAILY_NOTE_HEADING: &str = "# Daily note: ";

// === Environment Variables ===

/// Settings file location override
pub const ENV_CONFIG: &str = "MOMENT_CONFIG";

/// Workspace root override
pub const ENV_WORKSPACE: &str = "MOMENT_WORKSPACE";

/// Todo backing file name override (relative to the workspace root)
pub const ENV_TODO_FILE: &str = "MOMENT_TODO_FILE";

/// Local date override for reproducible runs
pub const ENV_TODAY: &str = "MOMENT_TODAY";

/// Log filter (tracing-subscriber EnvFilter syntax)
pub const ENV_LOG: &str = "MOMENT_LOG";

// === Prompts ===

/// Prompt shown when no daily notes folder is configured
pub const PROMPT_DAILY_FOLDER: &str = "Enter the folder path where you want to save the file";
