//! The reduction contract and the task-list reducer.
//!
//! The reducer is a pure state machine: every action maps onto one of the
//! operations in [`crate::ops`] (or, for show-all, onto the injected seed),
//! is total, and produces no side effects. All consequences of an action
//! are visible in the post-state.

use crate::ops;
use crate::seed::TaskSeed;
use crate::task::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// The Reducer trait - core abstraction for state transitions
///
/// A reducer turns `(state, action, environment)` into the successor state,
/// in place. The system is synchronous and effect-free, so reduction returns
/// nothing: the post-state is the entire outcome.
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type containing injected dependencies
    type Environment;

    /// Reduces an action into the successor state
    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);
}

/// State of the task list: the current ordered sequence
///
/// There is exactly one sequence. Filtering and sorting replace it rather
/// than deriving a view, so "hidden" tasks are genuinely gone until the
/// seed is restored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListState {
    /// Current ordered sequence of tasks
    pub tasks: Vec<Task>,
}

impl TaskListState {
    /// Creates an empty state
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Creates a state holding the given sequence
    #[must_use]
    pub const fn with_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the number of completed tasks
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Returns the first task with the given id
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Checks whether any task has the given id
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }
}

/// Actions accepted by the task-list reducer
///
/// One variant per entry point of the single screen. The id-addressed
/// variants affect every task carrying the id, since length-derived ids can
/// collide after removals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskAction {
    /// Append a task at the end of the sequence
    Add {
        /// The task to append
        task: Task,
    },

    /// Invert the `done` flag of every task with this id
    ToggleDone {
        /// Target task id
        id: TaskId,
    },

    /// Drop every task with this id
    Remove {
        /// Target task id
        id: TaskId,
    },

    /// Keep only the tasks whose `done` flag equals the given value
    FilterByDone {
        /// Completion value to keep
        done: bool,
    },

    /// Reorder the sequence by due-date text, ascending
    SortByDueDate,

    /// Replace the sequence with the seed set, discarding every mutation
    ShowAll,
}

/// Environment dependencies for the task-list reducer
///
/// The only injected dependency is the seed source consulted by `ShowAll`.
/// Production wires in `SampleTasks`; tests inject their own sequences.
#[derive(Clone)]
pub struct TaskEnvironment {
    /// Source of the seed sequence
    pub seed: std::sync::Arc<dyn TaskSeed>,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub fn new(seed: std::sync::Arc<dyn TaskSeed>) -> Self {
        Self { seed }
    }
}

/// Reducer for the task list
///
/// Dispatches each action to the matching pure operation. Unknown ids fall
/// through as no-ops inside the operations themselves, so reduction never
/// fails.
#[derive(Clone, Copy, Debug)]
pub struct TaskReducer;

impl TaskReducer {
    /// Creates a new `TaskReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TaskReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TaskReducer {
    type State = TaskListState;
    type Action = TaskAction;
    type Environment = TaskEnvironment;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        let tasks = std::mem::take(&mut state.tasks);
        state.tasks = match action {
            TaskAction::Add { task } => ops::add(tasks, task),
            TaskAction::ToggleDone { id } => ops::toggle_done(tasks, id),
            TaskAction::Remove { id } => ops::remove(tasks, id),
            TaskAction::FilterByDone { done } => ops::filter_by_done(tasks, done),
            TaskAction::SortByDueDate => ops::sort_by_due_date(tasks),
            TaskAction::ShowAll => env.seed.tasks(),
        };
    }
}
