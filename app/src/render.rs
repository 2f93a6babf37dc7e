//! Rendering of the published task list.

use tasklist_core::TaskListState;

/// Renders the list the way the screen shows it: a count line followed by
/// one row per task with checkbox, id, title, and due date.
#[must_use]
pub fn screen(state: &TaskListState) -> String {
    let mut out = format!("Tasks count: {}\n", state.count());
    for task in &state.tasks {
        let status = if task.done { "✓" } else { " " };
        out.push_str(&format!(
            "  [{}] {} {} (due {})\n",
            status, task.id, task.title, task.due_date
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::{DueDate, Task, TaskId, TaskListState};

    fn state() -> TaskListState {
        TaskListState::with_tasks(vec![
            Task::new(TaskId::new(1), "Buy groceries", DueDate::new("21/02/2025")),
            Task::new(TaskId::new(2), "Write report", DueDate::new("09/12/2024")).with_done(true),
        ])
    }

    #[test]
    fn renders_the_count_line_first() {
        let rendered = screen(&state());
        assert!(rendered.starts_with("Tasks count: 2\n"));
    }

    #[test]
    fn renders_one_row_per_task_in_order() {
        let rendered = screen(&state());
        let rows: Vec<&str> = rendered.lines().skip(1).collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "  [ ] 1 Buy groceries (due 21/02/2025)");
        assert_eq!(rows[1], "  [✓] 2 Write report (due 09/12/2024)");
    }

    #[test]
    fn renders_the_empty_list_as_just_the_count() {
        let rendered = screen(&TaskListState::new());
        assert_eq!(rendered, "Tasks count: 0\n");
    }
}
