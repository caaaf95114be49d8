//! Todo list store
//!
//! Owns the ordered list of todo lines and its flat backing file. Each line is
//! `- [ ] text` (pending) or `- [x] text` (done); anything else in the file is
//! dropped on load and never written back.
//!
//! Every mutation runs read-modify-save-notify in one go: the list changes,
//! the whole file is rewritten, then each subscribed observer sees the new
//! list.

use std::fmt;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants as C;
use crate::error::{NoteError, Result};
use crate::host::TextFs;

static TODO_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(C::TODO_LINE_PATTERN).expect("valid todo line regex"));

/// One todo entry, stored in its persisted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoLine(String);

impl TodoLine {
    /// A new pending entry. The text is taken verbatim.
    pub fn pending(text: &str) -> Self {
        Self(format!("{}{}", C::TODO_PENDING_PREFIX, text))
    }

    /// Accept a line only if it carries one of the two markers
    pub fn parse(line: &str) -> Option<Self> {
        TODO_LINE_RE.is_match(line).then(|| Self(line.to_string()))
    }

    pub fn is_done(&self) -> bool {
        self.0.starts_with(C::TODO_DONE_PREFIX)
    }

    /// Free text after the marker
    pub fn text(&self) -> &str {
        // Both markers have the same length
        &self.0[C::TODO_PENDING_PREFIX.len()..]
    }

    /// Same text with the other marker
    pub fn toggled(&self) -> Self {
        let prefix = if self.is_done() {
            C::TODO_PENDING_PREFIX
        } else {
            C::TODO_DONE_PREFIX
        };
        Self(format!("{}{}", prefix, self.text()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Notified synchronously after every change to the list
pub trait TodoObserver {
    fn todos_changed(&mut self, list: &[TodoLine]);
}

/// The todo list and its backing file
pub struct TodoStore<F> {
    fs: F,
    backing: Option<PathBuf>,
    lines: Vec<TodoLine>,
    observers: Vec<Box<dyn TodoObserver>>,
    /// Set when the last load hit an existing but unreadable file
    unreadable: Option<std::io::ErrorKind>,
}

impl<F: TextFs> TodoStore<F> {
    /// Empty store. `backing` is `None` when no workspace is open.
    pub fn new(fs: F, backing: Option<PathBuf>) -> Self {
        Self {
            fs,
            backing,
            lines: Vec::new(),
            observers: Vec::new(),
            unreadable: None,
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn TodoObserver>) {
        self.observers.push(observer);
    }

    pub fn lines(&self) -> &[TodoLine] {
        &self.lines
    }

    pub fn backing(&self) -> Option<&Path> {
        self.backing.as_deref()
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Replace the list with the backing file's valid lines.
    ///
    /// A missing workspace or a missing file loads as an empty list. A file
    /// that exists but cannot be read also loads empty, and `save` then
    /// refuses to overwrite it until a later load succeeds.
    pub fn load(&mut self) {
        self.unreadable = None;
        let content = match self.backing.as_deref() {
            None => {
                tracing::debug!("no workspace, starting with an empty todo list");
                String::new()
            }
            Some(path) => match self.fs.read_text(path) {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
                Err(e) => {
                    tracing::warn!("cannot read {}: {}", path.display(), e);
                    self.unreadable = Some(e.kind());
                    String::new()
                }
            },
        };

        self.lines = content.lines().filter_map(TodoLine::parse).collect();
        tracing::debug!(count = self.lines.len(), "loaded todos");
        self.notify();
    }

    /// Overwrite the backing file with the current list
    pub fn save(&self) -> Result<()> {
        let path = self.backing.as_deref().ok_or(NoteError::NoWorkspace)?;
        if let Some(kind) = self.unreadable {
            return Err(NoteError::io(
                path,
                std::io::Error::new(kind, "file could not be read, refusing to overwrite it"),
            ));
        }
        let content = self
            .lines
            .iter()
            .map(TodoLine::as_str)
            .collect::<Vec<_>>()
            .join(C::NEWLINE);

        self.fs
            .write_text(path, &content)
            .map_err(|e| NoteError::io(path, e))?;
        tracing::debug!(path = %path.display(), count = self.lines.len(), "saved todos");
        Ok(())
    }

    /// Add a pending entry at the end of the list
    pub fn append(&mut self, text: &str) -> Result<()> {
        self.lines.push(TodoLine::pending(text));
        self.save()?;
        tracing::info!("added todo {:?}", text);
        self.notify();
        Ok(())
    }

    /// Flip the entry at `index` (0-based) between pending and done.
    ///
    /// Returns `Ok(false)` without saving or notifying when `index` is out of
    /// range.
    pub fn toggle_completion(&mut self, index: usize) -> Result<bool> {
        let len = self.lines.len();
        let Some(line) = self.lines.get_mut(index) else {
            tracing::debug!(index, len, "toggle index out of range");
            return Ok(false);
        };
        *line = line.toggled();
        let done = line.is_done();

        self.save()?;
        tracing::info!(index, done, "toggled todo");
        self.notify();
        Ok(true)
    }

    fn notify(&mut self) {
        for observer in self.observers.iter_mut() {
            observer.todos_changed(&self.lines);
        }
    }
}
