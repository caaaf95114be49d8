//! Per-invocation context: settings, workspace and output mode

use crate::error::{NoteError, Result};
use crate::host::{EditorViewer, LocalFs, Prompt};
use crate::note_store::NoteStore;
use crate::settings::SettingsFile;
use crate::todo_store::TodoStore;
use crate::workspace::Workspace;

/// Everything a command needs to reach the stores
#[derive(Debug, Clone)]
pub struct Context {
    /// `--config` as given on the command line
    config: Option<String>,
    /// Loaded on first use, so todo commands never depend on the settings file
    settings: Option<SettingsFile>,
    /// `None` when no workspace root could be resolved
    pub workspace: Option<Workspace>,
    /// Whether to output in JSON format
    pub json: bool,
}

impl Context {
    pub fn new(config: Option<&str>, workspace: Option<&str>, json: bool) -> Result<Self> {
        let workspace = Workspace::resolve(workspace);
        tracing::debug!(
            workspace = ?workspace.as_ref().map(|w| w.root().to_path_buf()),
            "resolved context"
        );

        Ok(Self {
            config: config.map(str::to_string),
            settings: None,
            workspace,
            json,
        })
    }

    /// The settings file, read the first time it is asked for
    pub fn settings(&mut self) -> Result<&mut SettingsFile> {
        let settings = match self.settings.take() {
            Some(settings) => settings,
            None => {
                let path = SettingsFile::locate(self.config.as_deref()).ok_or_else(|| NoteError::Config {
                    path: "settings.yaml".into(),
                    message: "cannot determine the config directory; pass --config".to_string(),
                })?;
                let settings = SettingsFile::load(path)?;
                tracing::debug!(settings = %settings.path().display(), "loaded settings");
                settings
            }
        };
        Ok(self.settings.insert(settings))
    }

    /// Daily notes folder, prompting (pre-filled with the workspace root) when unset
    pub fn daily_folder(&mut self, prompt: &mut dyn Prompt) -> Result<Option<String>> {
        let suggestion = self.workspace.as_ref().map(|w| w.root().to_path_buf());
        self.settings()?.resolve_daily_notes_path(prompt, suggestion.as_deref())
    }

    pub fn note_store(&self) -> NoteStore<LocalFs, EditorViewer> {
        NoteStore::new(LocalFs, EditorViewer::from_env())
    }

    /// Todo store bound to the workspace's backing file (not loaded yet)
    pub fn todo_store(&self) -> TodoStore<LocalFs> {
        TodoStore::new(LocalFs, self.workspace.as_ref().map(Workspace::todo_file))
    }
}
