//! Settings command module

use std::io::{self, Read};

use moment::{ConfigCommand, Context, NoteError, Result};

pub fn run(ctx: &mut Context, action: Option<ConfigCommand>) -> Result<()> {
    match action.unwrap_or(ConfigCommand::Show) {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Path { path } => {
            let settings = ctx.settings()?;
            settings.set_daily_notes_path(path)?;
            eprintln!("Daily notes path saved to {}", moment::util::display_path(settings.path()));
            Ok(())
        }
        ConfigCommand::Template { template } => {
            let template = read_content(template).map_err(NoteError::Prompt)?;
            let settings = ctx.settings()?;
            settings.set_daily_note_template(template)?;
            eprintln!("Daily note template saved to {}", moment::util::display_path(settings.path()));
            Ok(())
        }
    }
}

fn show(ctx: &mut Context) -> Result<()> {
    let workspace = ctx.workspace.as_ref().map(|w| moment::util::display_path(w.root()));
    let json = ctx.json;
    let file = ctx.settings()?;
    let settings = file.settings();

    if json {
        let value = serde_json::json!({
            "settingsFile": moment::util::display_path(file.path()),
            "workspace": workspace,
            "dailyNotesPath": settings.daily_notes_path,
            "dailyNoteTemplate": settings.daily_note_template,
        });
        println!("{}", value);
        return Ok(());
    }

    println!("Settings file: {}", moment::util::display_path(file.path()));
    println!("Workspace: {}", workspace.as_deref().unwrap_or("(none)"));
    println!("dailyNotesPath: {}", file.daily_notes_path().unwrap_or("(not set)"));
    match file.daily_note_template() {
        Some(template) => {
            println!("dailyNoteTemplate:");
            for line in template.lines() {
                println!("  {}", line);
            }
        }
        None => println!("dailyNoteTemplate: (not set)"),
    }
    Ok(())
}

/// Read content from argument or stdin.
/// - Some("-") or None -> read from stdin
/// - Some(text) -> use the text directly
fn read_content(content: Option<String>) -> io::Result<String> {
    match content {
        Some(text) if text != "-" => Ok(text),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
