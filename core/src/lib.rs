//! # Tasklist Core
//!
//! Domain types and pure logic for the single-screen task list.
//!
//! This crate provides everything below the state holder: the task record,
//! the pure operations over an ordered task sequence, and the reducer that
//! maps screen actions onto those operations.
//!
//! ## Core Concepts
//!
//! - **State**: the one ordered task sequence ([`TaskListState`])
//! - **Action**: the screen's entry points ([`TaskAction`])
//! - **Reducer**: pure function `(State, Action, Environment) → State'`
//! - **Environment**: injected dependencies, here just the seed source
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Dependency Injection via Environment
//!
//! Filter and sort are destructive: they replace the sequence instead of
//! deriving a view, and show-all restores the seed set rather than the
//! pre-filter state. Ids are assigned from the list length, so they can
//! collide after removals. Both behaviors are kept from the screen this
//! models, and the id-addressed operations therefore act on every task
//! carrying the id.
//!
//! ## Example
//!
//! ```
//! use tasklist_core::{ops, DueDate, Task, TaskId};
//!
//! let tasks = vec![Task::new(TaskId::new(1), "Buy milk", DueDate::new("01/02/2025"))];
//! let tasks = ops::toggle_done(tasks, TaskId::new(1));
//! assert!(tasks[0].done);
//! ```

pub mod ops;
pub mod reducer;
pub mod seed;
pub mod task;

pub use reducer::{Reducer, TaskAction, TaskEnvironment, TaskListState, TaskReducer};
pub use seed::{SampleTasks, TaskSeed};
pub use task::{DEFAULT_PRIORITY, DueDate, Task, TaskId};
