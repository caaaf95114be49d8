//! Host capabilities consumed by the stores
//!
//! The core never touches the terminal or the file system directly. It asks a
//! host for four things: read/write a text file, open a file for the user,
//! prompt for one line of text, and show a list of rows. The terminal host
//! below is what the `moment` binary uses.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

use crate::todo_view::Row;
use crate::util;

/// Whole-file text I/O
pub trait TextFs {
    /// Read a text file in full
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Overwrite a file in full, creating parent directories as needed
    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Opens a file for the user to look at or edit
pub trait Viewer {
    /// Fails with `ErrorKind::NotFound` if the file does not exist
    fn open(&self, path: &Path) -> io::Result<()>;
}

/// Asks the user for one line of text
pub trait Prompt {
    /// Returns `Ok(None)` when the user dismisses the prompt
    fn ask_line(&mut self, prompt: &str, default: Option<&str>) -> io::Result<Option<String>>;
}

/// Displays a flat list of labelled rows, replacing whatever was shown before
pub trait RenderSurface {
    fn replace(&mut self, rows: &[Row]);
}

// === Local file system ===

/// `TextFs` over `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

impl TextFs for LocalFs {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        // Invalid UTF-8 is replaced, not rejected, so the lines around it survive
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)
    }
}

// === Editor ===

/// Opens files in `$VISUAL` / `$EDITOR`, or prints the path when neither is set
#[derive(Debug, Clone, Default)]
pub struct EditorViewer {
    editor: Option<String>,
}

impl EditorViewer {
    pub fn new(editor: Option<String>) -> Self {
        Self { editor: editor.filter(|s| !s.trim().is_empty()) }
    }

    /// Pick the editor from the environment (empty values are ignored)
    pub fn from_env() -> Self {
        let editor = ["VISUAL", "EDITOR"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|s| !s.trim().is_empty());
        Self::new(editor)
    }
}

impl Viewer for EditorViewer {
    fn open(&self, path: &Path) -> io::Result<()> {
        if !path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", util::display_path(path)),
            ));
        }

        let Some(editor) = self.editor.as_deref() else {
            // Output full path for shell pipeline compatibility
            println!("{}", util::display_path(path));
            return Ok(());
        };

        let mut parts = editor.split_whitespace();
        let program = parts.next().unwrap_or(editor);
        tracing::debug!(editor = program, path = %path.display(), "launching editor");

        let status = Command::new(program).args(parts).arg(path).status()?;
        if !status.success() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("editor '{}' exited with {}", program, status),
            ));
        }
        Ok(())
    }
}

// === Prompt ===

/// Line prompt over any reader/writer pair
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, answer from stdin
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompt for LinePrompt<R, W> {
    fn ask_line(&mut self, prompt: &str, default: Option<&str>) -> io::Result<Option<String>> {
        let default = default.filter(|d| !d.is_empty());
        match default {
            Some(d) => write!(self.output, "{} [{}]: ", prompt, d)?,
            None => write!(self.output, "{}: ", prompt)?,
        }
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF counts as dismissing the prompt
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        if answer.is_empty() {
            return Ok(default.map(str::to_string));
        }
        Ok(Some(answer.to_string()))
    }
}

// === Terminal list ===

/// Prints rows numbered from 1, or as JSON
pub struct TerminalSurface<W> {
    out: W,
    json: bool,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, json: bool) -> Self {
        Self { out, json }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_rows(&mut self, rows: &[Row]) -> io::Result<()> {
        if self.json {
            let items: Vec<serde_json::Value> = rows
                .iter()
                .enumerate()
                .map(|(i, row)| serde_json::json!({ "number": i + 1, "label": row.label }))
                .collect();
            let text = serde_json::to_string_pretty(&items)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(self.out, "{}", text)?;
        } else if rows.is_empty() {
            writeln!(self.out, "  (none)")?;
        } else {
            for (i, row) in rows.iter().enumerate() {
                writeln!(self.out, "{:>3}. {}", i + 1, row.label)?;
            }
        }
        self.out.flush()
    }
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout(json: bool) -> Self {
        Self::new(io::stdout(), json)
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn replace(&mut self, rows: &[Row]) {
        // A failed refresh never fails the mutation that triggered it
        if let Err(e) = self.write_rows(rows) {
            tracing::warn!("failed to render todo list: {}", e);
        }
    }
}
