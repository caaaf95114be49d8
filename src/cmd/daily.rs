//! Daily note commands

use moment::{Context, Prompt, Result};

/// Write today's note from the template and open it
pub fn create(ctx: &mut Context, prompt: &mut dyn Prompt) -> Result<()> {
    let Some(folder) = ctx.daily_folder(prompt)? else {
        return Ok(());
    };

    let store = ctx.note_store();
    store.create_daily_note(Some(folder.as_str()), ctx.settings()?.daily_note_template())?;
    eprintln!("Daily note created successfully!");
    Ok(())
}

/// Open today's note, creating it if it does not exist yet
pub fn view(ctx: &mut Context, prompt: &mut dyn Prompt) -> Result<()> {
    let Some(folder) = ctx.daily_folder(prompt)? else {
        return Ok(());
    };

    let store = ctx.note_store();
    let note = store.open_daily_note(Some(folder.as_str()), ctx.settings()?.daily_note_template())?;
    if note.created {
        eprintln!("Daily note created successfully!");
    }
    eprintln!("Viewing daily note for {}", note.display_date);
    Ok(())
}
