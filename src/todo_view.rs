//! Todo list projection
//!
//! Every todo line becomes one flat row labelled with the raw line, marker
//! included. The view rebuilds its rows wholesale on each notification.

use crate::host::RenderSurface;
use crate::todo_store::{TodoLine, TodoObserver};

/// One display row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub label: String,
}

/// Project the list into display rows, one per line, in list order
pub fn render(list: &[TodoLine]) -> Vec<Row> {
    list.iter()
        .map(|line| Row { label: line.as_str().to_string() })
        .collect()
}

/// Observer that re-renders the todo list onto a surface
pub struct TodoView<S> {
    surface: S,
}

impl<S: RenderSurface> TodoView<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: RenderSurface> TodoObserver for TodoView<S> {
    fn todos_changed(&mut self, list: &[TodoLine]) {
        let rows = render(list);
        tracing::debug!(rows = rows.len(), "rendering todo view");
        self.surface.replace(&rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<Row>>,
    }

    impl RenderSurface for Recorder {
        fn replace(&mut self, rows: &[Row]) {
            self.frames.push(rows.to_vec());
        }
    }

    fn lines(raw: &[&str]) -> Vec<TodoLine> {
        raw.iter().map(|l| TodoLine::parse(l).unwrap()).collect()
    }

    #[test]
    fn test_render_keeps_raw_labels_in_order() {
        let rows = render(&lines(&["- [x] b", "- [ ] a"]));
        assert_eq!(
            rows,
            vec![
                Row { label: "- [x] b".to_string() },
                Row { label: "- [ ] a".to_string() },
            ]
        );
    }

    #[test]
    fn test_render_empty() {
        assert!(render(&[]).is_empty());
    }

    #[test]
    fn test_view_replaces_wholesale() {
        let mut view = TodoView::new(Recorder::default());
        view.todos_changed(&lines(&["- [ ] a", "- [ ] b"]));
        view.todos_changed(&lines(&["- [ ] a"]));

        let frames = &view.surface().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1], vec![Row { label: "- [ ] a".to_string() }]);
    }
}
