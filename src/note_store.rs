//! Daily note creation and viewing

use std::path::{Path, PathBuf};

use crate::constants as C;
use crate::date_namer::DailyName;
use crate::error::{NoteError, Result};
use crate::host::{TextFs, Viewer};
use crate::util;

/// Result of [`NoteStore::open_daily_note`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyNote {
    pub path: PathBuf,
    pub display_date: String,
    /// True when the note did not exist and was created from the template
    pub created: bool,
}

/// Content of a fresh daily note: heading with the date, blank line, template
pub fn daily_note_content(display_date: &str, template: &str) -> String {
    format!("{}{}\n\n{}", C::DAILY_NOTE_HEADING, display_date, template)
}

/// `<folder>/<DD-MM-YYYY>.md`
pub fn daily_note_path(folder: &str, name: &DailyName) -> PathBuf {
    util::expand_home(folder).join(&name.file_name)
}

/// Writes daily notes into a folder and hands them to a viewer
pub struct NoteStore<F, V> {
    fs: F,
    viewer: V,
}

impl<F: TextFs, V: Viewer> NoteStore<F, V> {
    pub fn new(fs: F, viewer: V) -> Self {
        Self { fs, viewer }
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// Write today's note from the template (overwriting any existing file)
    /// and open it.
    pub fn create_daily_note(&self, folder: Option<&str>, template: Option<&str>) -> Result<PathBuf> {
        let path = self.write_daily_note(folder, template)?;
        self.open(&path)?;
        Ok(path)
    }

    /// Open today's note. Fails with `EditorOpen` if it does not exist.
    pub fn view_daily_note(&self, folder: Option<&str>) -> Result<PathBuf> {
        let folder = util::non_empty(folder).ok_or(NoteError::MissingFolder)?;
        let path = daily_note_path(folder, &DailyName::today());
        self.open(&path)?;
        Ok(path)
    }

    /// View today's note, creating it first if it is missing.
    ///
    /// The view is retried exactly once after creation; any other failure is
    /// returned as is.
    pub fn open_daily_note(&self, folder: Option<&str>, template: Option<&str>) -> Result<DailyNote> {
        let (path, created) = match self.view_daily_note(folder) {
            Ok(path) => (path, false),
            Err(e) if e.is_missing_file() => {
                tracing::info!("today's note is missing, creating it");
                self.write_daily_note(folder, template)?;
                (self.view_daily_note(folder)?, true)
            }
            Err(e) => return Err(e),
        };

        Ok(DailyNote {
            path,
            display_date: DailyName::today().display_date,
            created,
        })
    }

    fn write_daily_note(&self, folder: Option<&str>, template: Option<&str>) -> Result<PathBuf> {
        let folder = util::non_empty(folder).ok_or(NoteError::MissingFolder)?;
        let template = template.filter(|t| !t.is_empty()).ok_or(NoteError::MissingTemplate)?;

        let name = DailyName::today();
        let path = daily_note_path(folder, &name);
        let content = daily_note_content(&name.display_date, template);

        self.fs
            .write_text(&path, &content)
            .map_err(|e| NoteError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "wrote daily note");
        Ok(path)
    }

    fn open(&self, path: &Path) -> Result<()> {
        self.viewer.open(path).map_err(|source| NoteError::EditorOpen {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::LocalFs;
    use std::cell::{Cell, RefCell};
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    /// LocalFs that counts writes
    #[derive(Default)]
    struct CountingFs {
        writes: Cell<usize>,
    }

    impl TextFs for CountingFs {
        fn read_text(&self, path: &Path) -> io::Result<String> {
            LocalFs.read_text(path)
        }

        fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
            self.writes.set(self.writes.get() + 1);
            LocalFs.write_text(path, content)
        }
    }

    /// Records opened paths; refuses files that do not exist
    #[derive(Default)]
    struct RecordingViewer {
        opened: RefCell<Vec<PathBuf>>,
    }

    impl Viewer for RecordingViewer {
        fn open(&self, path: &Path) -> io::Result<()> {
            if !path.is_file() {
                return Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
            }
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct BrokenViewer;

    impl Viewer for BrokenViewer {
        fn open(&self, _path: &Path) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    fn store() -> NoteStore<CountingFs, RecordingViewer> {
        NoteStore::new(CountingFs::default(), RecordingViewer::default())
    }

    fn folder(temp_dir: &TempDir) -> String {
        temp_dir.path().to_string_lossy().into_owned()
    }

    #[test]
    fn test_content_format() {
        assert_eq!(
            daily_note_content("05-01-2024", "## Tasks\n"),
            "# Daily note: 05-01-2024\n\n## Tasks\n"
        );
    }

    #[test]
    fn test_create_writes_and_opens() {
        let temp_dir = TempDir::new().unwrap();
        let store = store();

        let path = store.create_daily_note(Some(&folder(&temp_dir)), Some("T")).unwrap();

        let name = DailyName::today();
        assert_eq!(path, temp_dir.path().join(&name.file_name));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            format!("# Daily note: {}\n\nT", name.display_date)
        );
        assert_eq!(store.fs().writes.get(), 1);
        assert_eq!(*store.viewer().opened.borrow(), vec![path]);
    }

    #[test]
    fn test_create_overwrites_existing_note() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DailyName::today().file_name);
        fs::write(&path, "old content").unwrap();

        store().create_daily_note(Some(&folder(&temp_dir)), Some("new")).unwrap();
        assert!(fs::read_to_string(&path).unwrap().ends_with("\n\nnew"));
    }

    #[test]
    fn test_create_missing_folder_writes_nothing() {
        let store = store();
        let err = store.create_daily_note(Some(""), Some("T")).unwrap_err();
        assert!(matches!(err, NoteError::MissingFolder));
        let err = store.create_daily_note(None, Some("T")).unwrap_err();
        assert!(matches!(err, NoteError::MissingFolder));
        assert_eq!(store.fs().writes.get(), 0);
        assert!(store.viewer().opened.borrow().is_empty());
    }

    #[test]
    fn test_create_missing_template_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let store = store();
        let err = store.create_daily_note(Some(&folder(&temp_dir)), Some("")).unwrap_err();
        assert!(matches!(err, NoteError::MissingTemplate));
        assert_eq!(store.fs().writes.get(), 0);
    }

    #[test]
    fn test_create_surfaces_open_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = NoteStore::new(CountingFs::default(), BrokenViewer);
        let err = store.create_daily_note(Some(&folder(&temp_dir)), Some("T")).unwrap_err();
        assert!(matches!(err, NoteError::EditorOpen { .. }));
        assert!(!err.is_missing_file());
        assert_eq!(store.fs().writes.get(), 1);
    }

    #[test]
    fn test_view_missing_folder() {
        assert!(matches!(store().view_daily_note(None), Err(NoteError::MissingFolder)));
    }

    #[test]
    fn test_view_missing_note_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = store().view_daily_note(Some(&folder(&temp_dir))).unwrap_err();
        assert!(err.is_missing_file());
    }

    #[test]
    fn test_open_existing_note_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DailyName::today().file_name);
        fs::write(&path, "mine").unwrap();
        let store = store();

        let note = store.open_daily_note(Some(&folder(&temp_dir)), Some("T")).unwrap();
        assert!(!note.created);
        assert_eq!(note.path, path);
        assert_eq!(store.fs().writes.get(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "mine");
    }

    #[test]
    fn test_open_missing_note_creates_then_views_once() {
        let temp_dir = TempDir::new().unwrap();
        let store = store();

        let note = store.open_daily_note(Some(&folder(&temp_dir)), Some("T")).unwrap();
        assert!(note.created);
        assert!(note.path.is_file());
        assert_eq!(store.fs().writes.get(), 1);
        assert_eq!(*store.viewer().opened.borrow(), vec![note.path]);
    }

    #[test]
    fn test_open_missing_note_without_template() {
        let temp_dir = TempDir::new().unwrap();
        let store = store();
        let err = store.open_daily_note(Some(&folder(&temp_dir)), None).unwrap_err();
        assert!(matches!(err, NoteError::MissingTemplate));
        assert_eq!(store.fs().writes.get(), 0);
    }

    #[test]
    fn test_open_other_errors_are_not_retried() {
        let temp_dir = TempDir::new().unwrap();
        let store = NoteStore::new(CountingFs::default(), BrokenViewer);
        let err = store.open_daily_note(Some(&folder(&temp_dir)), Some("T")).unwrap_err();
        assert!(matches!(err, NoteError::EditorOpen { .. }));
        assert_eq!(store.fs().writes.get(), 0);
    }
}
