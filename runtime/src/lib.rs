//! # Tasklist Runtime
//!
//! Runtime for the task list: the store that holds state and publishes it.
//!
//! ## Core Components
//!
//! - **Store**: generic runtime pairing a reducer with locked state and a
//!   watch channel
//! - **`TaskListStore`**: the task-list state holder built on it, seeded
//!   from the environment
//!
//! Everything here is synchronous. A mutation method returns only after
//! the reducer has run and the new state is published, so the next read
//! (direct or through a subscription) observes the post-action state.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tasklist_core::{SampleTasks, TaskEnvironment, TaskId};
//! use tasklist_runtime::TaskListStore;
//!
//! let store = TaskListStore::new(TaskEnvironment::new(Arc::new(SampleTasks)));
//! store.toggle_done(TaskId::new(1));
//!
//! assert!(store.tasks()[0].done);
//! ```

pub mod store;
pub mod tasklist;

pub use store::Store;
pub use tasklist::TaskListStore;
