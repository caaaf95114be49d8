//! Todo list commands
//!
//! Numbers shown to the user start at 1; the store indexes from 0.

use moment::{Context, NoteError, Prompt, Result, TerminalSurface, TodoCommand, TodoObserver, TodoView};

pub fn run(ctx: &Context, prompt: &mut dyn Prompt, cmd: TodoCommand) -> Result<()> {
    let mut store = ctx.todo_store();

    match cmd {
        TodoCommand::List => {
            store.subscribe(view(ctx));
            store.load();
        }
        TodoCommand::Add { text } => {
            store.load();

            let answer = if text.is_empty() {
                prompt.ask_line("Enter a new todo", None).map_err(NoteError::Prompt)?
            } else {
                Some(text.join(" "))
            };
            // Blank text counts as a dismissed prompt
            let Some(text) = todo_text(answer) else {
                tracing::debug!("no todo text given");
                return Ok(());
            };

            store.subscribe(view(ctx));
            store.append(&text)?;
        }
        TodoCommand::Toggle { number } => {
            store.load();

            let input = match number {
                Some(number) => number,
                None => match prompt
                    .ask_line("Enter the number of the todo to toggle", None)
                    .map_err(NoteError::Prompt)?
                {
                    Some(input) => input,
                    None => return Ok(()),
                },
            };

            // Anything that is not a listed number is ignored
            let Some(index) = parse_number(&input) else {
                tracing::debug!(input = %input, "not a todo number");
                return Ok(());
            };

            store.subscribe(view(ctx));
            store.toggle_completion(index)?;
        }
    }

    Ok(())
}

fn view(ctx: &Context) -> Box<dyn TodoObserver> {
    Box::new(TodoView::new(TerminalSurface::stdout(ctx.json)))
}

fn todo_text(answer: Option<String>) -> Option<String> {
    answer.filter(|text| !text.trim().is_empty())
}

/// 1-based number as typed by the user → 0-based index
fn parse_number(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("1"), Some(0));
        assert_eq!(parse_number(" 12 \n"), Some(11));
        assert_eq!(parse_number("0"), None);
        assert_eq!(parse_number("-1"), None);
        assert_eq!(parse_number("two"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_blank_todo_text_is_dismissed() {
        assert_eq!(todo_text(None), None);
        assert_eq!(todo_text(Some(String::new())), None);
        assert_eq!(todo_text(Some("  ".to_string())), None);
        assert_eq!(todo_text(Some(" buy milk".to_string())).as_deref(), Some(" buy milk"));
    }
}
