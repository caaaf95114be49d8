pub mod cli;
pub mod constants;
pub mod context;
pub mod date_namer;
pub mod error;
pub mod host;
pub mod note_store;
pub mod settings;
pub mod todo_store;
pub mod todo_view;
pub mod util;
pub mod workspace;

pub use cli::{Cli, Command, ConfigCommand, TodoCommand};
pub use context::Context;
pub use date_namer::DailyName;
pub use error::{NoteError, Result};
pub use host::{EditorViewer, LinePrompt, LocalFs, Prompt, RenderSurface, TerminalSurface, TextFs, Viewer};
pub use note_store::{DailyNote, NoteStore};
pub use settings::{Settings, SettingsFile};
pub use todo_store::{TodoLine, TodoObserver, TodoStore};
pub use todo_view::{Row, TodoView};
pub use workspace::Workspace;
