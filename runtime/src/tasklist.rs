//! The task-list state holder.
//!
//! `TaskListStore` wraps the generic [`Store`] with the entry points of the
//! single screen. Construction seeds the list from the environment; every
//! method applies its action synchronously and publishes the new state
//! before returning.

use crate::store::Store;
use tasklist_core::{
    DueDate, Task, TaskAction, TaskEnvironment, TaskId, TaskListState, TaskReducer,
};
use tokio::sync::watch;

/// State holder for the task list
///
/// Owns the one ordered task sequence. The filter, sort, and show-all
/// entry points replace that sequence rather than deriving views, so a
/// filtered-out task is unreachable until [`TaskListStore::show_all`]
/// restores the seed set.
pub struct TaskListStore {
    inner: Store<TaskListState, TaskAction, TaskEnvironment, TaskReducer>,
}

impl TaskListStore {
    /// Creates a store seeded from the environment's sample set
    #[must_use]
    pub fn new(environment: TaskEnvironment) -> Self {
        let initial = TaskListState::with_tasks(environment.seed.tasks());

        Self {
            inner: Store::new(initial, TaskReducer::new(), environment),
        }
    }

    /// Appends a prebuilt task at the end of the sequence
    pub fn add_task(&self, task: Task) {
        self.inner.send(TaskAction::Add { task });
    }

    /// Creates a task from the entry-screen inputs and appends it
    ///
    /// The id is the current list length plus one. After removals this can
    /// assign an id that is already in use; [`TaskListStore::toggle_done`]
    /// and [`TaskListStore::remove_task`] then affect every holder of the
    /// id.
    pub fn create_task(&self, title: impl Into<String>, due_date: DueDate) -> TaskId {
        // List lengths stay far below u32::MAX in an interactive session
        #[allow(clippy::cast_possible_truncation)]
        let id = self.inner.state(|s| TaskId::new(s.count() as u32 + 1));

        self.add_task(Task::new(id, title, due_date));
        id
    }

    /// Inverts the `done` flag of every task with the given id
    pub fn toggle_done(&self, id: TaskId) {
        self.inner.send(TaskAction::ToggleDone { id });
    }

    /// Removes every task with the given id
    pub fn remove_task(&self, id: TaskId) {
        self.inner.send(TaskAction::Remove { id });
    }

    /// Replaces the sequence with the subsequence matching `done`
    ///
    /// Destructive: the tasks filtered out are gone from the working copy
    /// until [`TaskListStore::show_all`] restores the seed set.
    pub fn filter_by_done(&self, done: bool) {
        self.inner.send(TaskAction::FilterByDone { done });
    }

    /// Replaces the sequence with the due-date-sorted sequence
    ///
    /// Due dates order by their text, not by calendar (see
    /// [`DueDate`]).
    pub fn sort_by_due_date(&self) {
        self.inner.send(TaskAction::SortByDueDate);
    }

    /// Resets the sequence to the seed set
    ///
    /// Every mutation since construction is discarded, including tasks
    /// added before a filter.
    pub fn show_all(&self) {
        self.inner.send(TaskAction::ShowAll);
    }

    /// Returns a snapshot of the current sequence
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.inner.state(|s| s.tasks.clone())
    }

    /// Returns the current task count
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.state(TaskListState::count)
    }

    /// Subscribes to state publications
    ///
    /// The receiver starts at the current state and observes every
    /// mutation.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TaskListState> {
        self.inner.subscribe()
    }
}
