//! Domain types for the task list.
//!
//! A task is a flat record: the fields the entry screen collects, a
//! length-derived integer id, and a completion flag. Due dates are plain
//! `dd/MM/yyyy` text and are never parsed.

use serde::{Deserialize, Serialize};

/// Priority assigned to every task at creation. Nothing reads it back.
pub const DEFAULT_PRIORITY: u8 = 1;

/// Unique identifier for a task
///
/// Ids are plain integers assigned from the list length at creation time
/// (see `TaskListStore::create_task` in the runtime crate). They identify a
/// task for toggling and removal but stay unique only as long as nothing is
/// removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(u32);

impl TaskId {
    /// Creates a `TaskId` from a raw integer
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Due date in `dd/MM/yyyy` form
///
/// The text is stored exactly as entered, without validation. Ordering is
/// the lexicographic order of the text, which is not calendar order:
/// `09/12/2024` sorts after `03/11/2025`. Sorting by due date deliberately
/// keeps this behavior.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DueDate(String);

impl DueDate {
    /// Creates a due date from the raw text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the stored text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DueDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier used by toggle and remove
    pub id: TaskId,
    /// User-supplied title, unconstrained
    pub title: String,
    /// Free-form description, empty at creation
    pub description: String,
    /// Priority level, fixed at creation and read by no operation
    pub priority: u8,
    /// Due date text in `dd/MM/yyyy` form
    pub due_date: DueDate,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Creates a task the way the entry screen does: empty description,
    /// default priority, not done.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, due_date: DueDate) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            priority: DEFAULT_PRIORITY,
            due_date,
            done: false,
        }
    }

    /// Returns the task with the `done` flag set to the given value
    #[must_use]
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Inverts the completion flag
    pub const fn toggle(&mut self) {
        self.done = !self.done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_display() {
        let id = TaskId::new(7);
        assert_eq!(format!("{id}"), "7");
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn task_new_uses_entry_screen_defaults() {
        let task = Task::new(TaskId::new(1), "Buy milk", DueDate::new("01/02/2025"));

        assert_eq!(task.id, TaskId::new(1));
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "");
        assert_eq!(task.priority, DEFAULT_PRIORITY);
        assert_eq!(task.due_date.as_str(), "01/02/2025");
        assert!(!task.done);
    }

    #[test]
    fn task_toggle_inverts_done() {
        let mut task = Task::new(TaskId::new(1), "Test", DueDate::new("01/02/2025"));

        task.toggle();
        assert!(task.done);

        task.toggle();
        assert!(!task.done);
    }

    #[test]
    fn with_done_overrides_the_flag() {
        let task = Task::new(TaskId::new(1), "Test", DueDate::new("01/02/2025")).with_done(true);
        assert!(task.done);
    }

    #[test]
    fn due_date_orders_by_text_not_calendar() {
        // Lexicographic on the raw text: the day field dominates, so a
        // December 2024 date lands after a November 2025 one.
        let december_2024 = DueDate::new("09/12/2024");
        let november_2025 = DueDate::new("03/11/2025");

        assert!(november_2025 < december_2024);
    }

    #[test]
    fn due_date_equal_text_compares_equal() {
        assert_eq!(DueDate::new("10/01/2025"), DueDate::new("10/01/2025"));
    }
}
