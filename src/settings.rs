//! User settings
//!
//! Two keys, stored as YAML:
//! - `dailyNotesPath`: folder for daily notes, written back after the first prompt
//! - `dailyNoteTemplate`: body of a new daily note
//!
//! The file lives at `$MOMENT_CONFIG` or `<config dir>/moment/settings.yaml`.
//! A missing file means default (empty) settings.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants as C;
use crate::error::{NoteError, Result};
use crate::host::Prompt;
use crate::util;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_notes_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_note_template: Option<String>,
}

/// Settings bound to the file they were loaded from
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
    settings: Settings,
}

impl SettingsFile {
    /// Settings location: explicit path, then MOMENT_CONFIG, then the platform config dir
    pub fn locate(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = util::non_empty(explicit) {
            return Some(util::expand_home(path));
        }
        if let Some(path) = util::env_non_empty(C::ENV_CONFIG) {
            return Some(util::expand_home(&path));
        }
        dirs::config_dir().map(|dir| dir.join(C::CONFIG_DIR_NAME).join(C::SETTINGS_FILENAME))
    }

    /// Load settings; a missing or empty file yields defaults
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let settings = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => Settings::default(),
            Ok(content) => serde_yaml::from_str(&content).map_err(|e| NoteError::Config {
                path: path.clone(),
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Settings::default()
            }
            Err(e) => return Err(NoteError::io(&path, e)),
        };
        Ok(Self { path, settings })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Configured daily notes folder (empty values count as unset)
    pub fn daily_notes_path(&self) -> Option<&str> {
        util::non_empty(self.settings.daily_notes_path.as_deref())
    }

    /// Configured template (empty counts as unset)
    pub fn daily_note_template(&self) -> Option<&str> {
        self.settings.daily_note_template.as_deref().filter(|t| !t.is_empty())
    }

    pub fn set_daily_notes_path(&mut self, path: impl Into<String>) -> Result<()> {
        self.settings.daily_notes_path = Some(path.into());
        self.save()
    }

    pub fn set_daily_note_template(&mut self, template: impl Into<String>) -> Result<()> {
        self.settings.daily_note_template = Some(template.into());
        self.save()
    }

    /// Write settings back, creating the config directory if needed
    pub fn save(&self) -> Result<()> {
        let content = serde_yaml::to_string(&self.settings).map_err(|e| NoteError::Config {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| NoteError::io(parent, e))?;
            }
        }
        fs::write(&self.path, content).map_err(|e| NoteError::io(&self.path, e))?;
        tracing::debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }

    /// Daily notes folder, asking the user once when none is configured.
    ///
    /// The answer is persisted before it is returned. `Ok(None)` means the
    /// user dismissed the prompt and the operation should stop quietly.
    pub fn resolve_daily_notes_path(
        &mut self,
        prompt: &mut dyn Prompt,
        suggestion: Option<&Path>,
    ) -> Result<Option<String>> {
        if let Some(folder) = self.daily_notes_path() {
            return Ok(Some(folder.to_string()));
        }

        let suggestion = suggestion.map(util::display_path);
        let answer = prompt
            .ask_line(C::PROMPT_DAILY_FOLDER, suggestion.as_deref())
            .map_err(NoteError::Prompt)?;

        let Some(folder) = answer.filter(|a| !a.trim().is_empty()) else {
            tracing::debug!("daily notes folder prompt dismissed");
            return Ok(None);
        };

        self.set_daily_notes_path(folder.clone())?;
        tracing::info!(folder = %folder, "saved daily notes path");
        Ok(Some(folder))
    }
}
