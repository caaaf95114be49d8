use clap::{ArgAction, Parser, Subcommand};

/// moment - daily notes and a plain-text todo list
///
/// ## Daily Notes
///
/// ```bash
/// moment create                     # Write today's DD-MM-YYYY.md from the template
/// moment view                       # Open today's note (created if missing)
/// ```
///
/// The first time either command runs without `dailyNotesPath` set, moment
/// asks for the folder and saves the answer.
///
/// ## Todos
///
/// ```bash
/// moment todo add "buy milk"        # Append "- [ ] buy milk" to todo.md
/// moment todo toggle 2              # Flip the second todo between [ ] and [x]
/// moment todo list                  # Numbered list
/// moment --json todo list           # JSON for scripting
/// ```
///
/// ## Settings
///
/// ```bash
/// moment config                     # Show settings
/// moment config path ~/notes/daily  # Set dailyNotesPath
/// moment config template <<EOF      # Set dailyNoteTemplate from stdin
/// ## Tasks
/// EOF
/// ```
///
/// ## Environment Variables
///
/// - `MOMENT_CONFIG`: settings file (default: <config dir>/moment/settings.yaml)
/// - `MOMENT_WORKSPACE`: workspace root holding todo.md (default: current directory)
/// - `MOMENT_TODO_FILE`: todo file name inside the workspace (default: todo.md)
/// - `MOMENT_TODAY`: date override, YYYY-MM-DD
/// - `MOMENT_LOG`: log filter, e.g. `debug`
/// - `VISUAL` / `EDITOR`: editor used to open notes (path is printed if unset)
#[derive(Parser, Debug)]
#[command(name = "moment")]
#[command(version = "0.1.0")]
#[command(about = "Daily notes from a template and a plain-text todo list")]
pub struct Cli {
    /// Settings file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<String>,

    /// Workspace root holding the todo file
    #[arg(short, long, value_name = "PATH", global = true)]
    pub workspace: Option<String>,

    /// Output in JSON format (for scripting)
    #[arg(short = 'j', long, global = true)]
    pub json: bool,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create today's daily note from the template, replacing any existing one
    #[command(alias = "new")]
    Create,

    /// Open today's daily note, creating it first if it does not exist
    #[command(alias = "open")]
    View,

    /// Manage the todo list
    #[command(subcommand)]
    Todo(TodoCommand),

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommand>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TodoCommand {
    /// Append a new todo (prompts when no text is given)
    Add {
        /// Todo text
        text: Vec<String>,
    },

    /// Toggle a todo between pending and done
    #[command(alias = "done")]
    Toggle {
        /// Number of the todo as shown by `todo list`, starting at 1
        number: Option<String>,
    },

    /// Show the todo list
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the settings file location and values
    Show,

    /// Set the daily notes folder (dailyNotesPath)
    Path {
        /// Folder path
        path: String,
    },

    /// Set the daily note template (dailyNoteTemplate); reads stdin when omitted or "-"
    Template {
        /// Template text
        template: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_todo_add_words() {
        let cli = Cli::try_parse_from(["moment", "todo", "add", "buy", "milk"]).unwrap();
        match cli.command {
            Command::Todo(TodoCommand::Add { text }) => assert_eq!(text, vec!["buy", "milk"]),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["moment", "todo", "list", "--json", "-w", "/work", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.workspace.as_deref(), Some("/work"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_config_without_action() {
        let cli = Cli::try_parse_from(["moment", "config"]).unwrap();
        assert!(matches!(cli.command, Command::Config { action: None }));
    }

    #[test]
    fn test_parse_aliases() {
        assert!(matches!(
            Cli::try_parse_from(["moment", "open"]).unwrap().command,
            Command::View
        ));
        assert!(matches!(
            Cli::try_parse_from(["moment", "todo", "done", "3"]).unwrap().command,
            Command::Todo(TodoCommand::Toggle { number: Some(_) })
        ));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
