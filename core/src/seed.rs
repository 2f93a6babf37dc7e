//! Seed data for the task list.
//!
//! The seed set plays two roles: it is the list a fresh store starts from,
//! and it is what show-all restores. It reaches the reducer through the
//! [`TaskSeed`] trait so tests can pin their own sequences.

use crate::task::{DueDate, Task, TaskId};

/// Source of the fixed sample sequence used to seed a task list and to
/// restore it on show-all.
pub trait TaskSeed: Send + Sync {
    /// Returns a fresh copy of the seed sequence
    fn tasks(&self) -> Vec<Task>;
}

/// The built-in sample set
///
/// Five tasks with mixed completion state. The due dates are chosen so that
/// text order and calendar order visibly diverge once sorted.
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleTasks;

impl TaskSeed for SampleTasks {
    fn tasks(&self) -> Vec<Task> {
        vec![
            Task::new(TaskId::new(1), "Buy groceries", DueDate::new("21/02/2025")),
            Task::new(TaskId::new(2), "Write weekly report", DueDate::new("09/12/2024"))
                .with_done(true),
            Task::new(TaskId::new(3), "Call the dentist", DueDate::new("10/01/2025")),
            Task::new(TaskId::new(4), "Renew passport", DueDate::new("03/11/2025")),
            Task::new(TaskId::new(5), "Water the plants", DueDate::new("28/02/2025"))
                .with_done(true),
        ]
    }
}
