//! Workspace root resolution
//!
//! The todo backing file lives at a fixed name inside the workspace root.
//! Resolution priority:
//! 1. `--workspace` flag
//! 2. `MOMENT_WORKSPACE` environment variable
//! 3. the current directory

use std::path::{Path, PathBuf};

use crate::constants as C;
use crate::util;

/// A resolved workspace root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the workspace root. `None` when no existing directory can be found.
    pub fn resolve(explicit: Option<&str>) -> Option<Self> {
        let env = util::env_non_empty(C::ENV_WORKSPACE);
        let cwd = std::env::current_dir().ok();
        Self::resolve_from(explicit, env.as_deref(), cwd)
    }

    fn resolve_from(explicit: Option<&str>, env: Option<&str>, cwd: Option<PathBuf>) -> Option<Self> {
        let candidate = util::non_empty(explicit)
            .or(util::non_empty(env))
            .map(util::expand_home)
            .or(cwd)?;

        if !candidate.is_dir() {
            tracing::warn!("workspace {} is not a directory", candidate.display());
            return None;
        }

        // Use dunce to avoid UNC prefix on Windows
        let root = dunce::canonicalize(&candidate).unwrap_or(candidate);
        Some(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Todo backing file (MOMENT_TODO_FILE overrides the file name)
    pub fn todo_file(&self) -> PathBuf {
        self.todo_file_named(util::env_non_empty(C::ENV_TODO_FILE).as_deref())
    }

    fn todo_file_named(&self, name: Option<&str>) -> PathBuf {
        self.root.join(name.unwrap_or(C::TODO_FILENAME))
    }
}
