//! # Tasklist Testing
//!
//! Test support for the task-list crates.
//!
//! In here:
//! - A deterministic seed mock for the one injected dependency
//! - Fixtures for building tasks and seeded state holders
//! - Property-based strategies for the domain types
//! - A fluent Given-When-Then harness for reducer tests
//!
//! ## Example
//!
//! ```
//! use tasklist_testing::fixtures::{store_with, task};
//! use tasklist_core::TaskId;
//!
//! let store = store_with(vec![task(1, "A", "01/01/2025", false)]);
//! store.toggle_done(TaskId::new(1));
//!
//! assert!(store.tasks()[0].done);
//! ```


/// Deterministic stand-ins for the environment
///
/// The only injected dependency in this system is the seed source, so the
/// one mock is a seed that always returns the same sequence.
pub mod mocks {
    use tasklist_core::{DueDate, Task, TaskId, TaskSeed};

    /// Fixed seed for deterministic tests
    ///
    /// Always returns the same sequence, making construction and the
    /// show-all reset reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::FixedSeed;
    /// use tasklist_core::TaskSeed;
    ///
    /// let seed = FixedSeed::empty();
    /// assert!(seed.tasks().is_empty());
    /// ```
    #[derive(Clone, Debug, Default)]
    pub struct FixedSeed {
        tasks: Vec<Task>,
    }

    impl FixedSeed {
        /// Create a seed that always returns the given sequence
        #[must_use]
        pub const fn new(tasks: Vec<Task>) -> Self {
            Self { tasks }
        }

        /// Create a seed with no tasks
        #[must_use]
        pub const fn empty() -> Self {
            Self { tasks: Vec::new() }
        }
    }

    impl TaskSeed for FixedSeed {
        fn tasks(&self) -> Vec<Task> {
            self.tasks.clone()
        }
    }

    /// Create the canonical one-task seed for tests: id 1, title "A",
    /// due 01/01/2025, not done
    #[must_use]
    pub fn seed_one() -> FixedSeed {
        FixedSeed::new(vec![Task::new(
            TaskId::new(1),
            "A",
            DueDate::new("01/01/2025"),
        )])
    }
}

/// Fixtures for building tasks and seeded state holders
pub mod fixtures {
    use crate::mocks::FixedSeed;
    use std::sync::Arc;
    use tasklist_core::{DueDate, Task, TaskEnvironment, TaskId};
    use tasklist_runtime::TaskListStore;

    /// Build a task literal in one call
    #[must_use]
    pub fn task(id: u32, title: &str, due: &str, done: bool) -> Task {
        Task::new(TaskId::new(id), title, DueDate::new(due)).with_done(done)
    }

    /// Build an environment whose seed always returns `tasks`
    #[must_use]
    pub fn env_with(tasks: Vec<Task>) -> TaskEnvironment {
        TaskEnvironment::new(Arc::new(FixedSeed::new(tasks)))
    }

    /// Build a state holder seeded with `tasks`
    #[must_use]
    pub fn store_with(tasks: Vec<Task>) -> TaskListStore {
        TaskListStore::new(env_with(tasks))
    }
}

/// Property-based testing strategies for the domain types
pub mod properties {
    use proptest::prelude::*;
    use tasklist_core::{DueDate, Task, TaskId};

    /// Strategy producing a due date in `dd/MM/yyyy` text form
    pub fn due_date() -> impl Strategy<Value = DueDate> {
        (1u32..=28, 1u32..=12, 2024u32..=2026)
            .prop_map(|(day, month, year)| DueDate::new(format!("{day:02}/{month:02}/{year}")))
    }

    /// Strategy producing a task
    ///
    /// Ids come from a small range so that generated sequences contain
    /// duplicate ids often enough to exercise the multi-holder paths.
    pub fn task() -> impl Strategy<Value = Task> {
        (1u32..=8, "[a-z]{1,12}", due_date(), any::<bool>()).prop_map(
            |(id, title, due, done)| Task::new(TaskId::new(id), title, due).with_done(done),
        )
    }

    /// Strategy producing a task sequence of up to a dozen entries
    pub fn task_list() -> impl Strategy<Value = Vec<Task>> {
        proptest::collection::vec(task(), 0..12)
    }
}

pub use mocks::{FixedSeed, seed_one};
pub use reducer_test::ReducerTest;

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_core::{TaskId, TaskSeed};

    #[test]
    fn test_fixed_seed() {
        let seed = seed_one();
        let first = seed.tasks();
        let second = seed.tasks();
        assert_eq!(first, second);
        assert_eq!(first[0].id, TaskId::new(1));
    }
}
