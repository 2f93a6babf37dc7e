//! Pure operations over an ordered task sequence.
//!
//! Every function consumes the current sequence and returns the successor
//! sequence. None of them touches shared state, performs I/O, or fails: an
//! id that matches nothing leaves the sequence unchanged. The state holder
//! in the runtime crate decides what to do with the result.

use crate::task::{Task, TaskId};

/// Returns the sequence with `task` appended at the end.
///
/// No duplicate-id check is performed; the caller owns id assignment.
#[must_use]
pub fn add(mut tasks: Vec<Task>, task: Task) -> Vec<Task> {
    tasks.push(task);
    tasks
}

/// Returns the sequence with the `done` flag inverted on every task whose
/// id matches.
///
/// Positions are unchanged. With duplicate ids every holder flips.
#[must_use]
pub fn toggle_done(mut tasks: Vec<Task>, id: TaskId) -> Vec<Task> {
    for task in tasks.iter_mut().filter(|t| t.id == id) {
        task.toggle();
    }
    tasks
}

/// Returns the sequence without every task whose id matches.
#[must_use]
pub fn remove(mut tasks: Vec<Task>, id: TaskId) -> Vec<Task> {
    tasks.retain(|t| t.id != id);
    tasks
}

/// Returns the subsequence of tasks whose `done` flag equals `done`,
/// preserving relative order.
#[must_use]
pub fn filter_by_done(tasks: Vec<Task>, done: bool) -> Vec<Task> {
    tasks.into_iter().filter(|t| t.done == done).collect()
}

/// Returns the sequence ordered by due date ascending.
///
/// The order is the lexicographic order of the `dd/MM/yyyy` text (see
/// [`DueDate`](crate::task::DueDate)), not calendar order. The sort is
/// stable: tasks with equal due-date text keep their relative order.
#[must_use]
pub fn sort_by_due_date(mut tasks: Vec<Task>) -> Vec<Task> {
    tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::DueDate;

    fn task(id: u32, title: &str, due: &str, done: bool) -> Task {
        Task::new(TaskId::new(id), title, DueDate::new(due)).with_done(done)
    }

    #[test]
    fn add_appends_at_the_end() {
        let tasks = vec![task(1, "first", "01/01/2025", false)];
        let tasks = add(tasks, task(2, "second", "02/01/2025", false));

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, TaskId::new(1));
        assert_eq!(tasks[1].id, TaskId::new(2));
    }

    #[test]
    fn add_does_not_reject_duplicate_ids() {
        let tasks = vec![task(1, "first", "01/01/2025", false)];
        let tasks = add(tasks, task(1, "twin", "02/01/2025", false));

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].id, tasks[1].id);
    }

    #[test]
    fn toggle_done_flips_the_matching_task_in_place() {
        let tasks = vec![
            task(1, "a", "01/01/2025", false),
            task(2, "b", "02/01/2025", false),
        ];
        let tasks = toggle_done(tasks, TaskId::new(2));

        assert!(!tasks[0].done);
        assert!(tasks[1].done);
        assert_eq!(tasks[1].id, TaskId::new(2));
    }

    #[test]
    fn toggle_done_hits_every_holder_of_a_shared_id() {
        let tasks = vec![
            task(2, "first holder", "01/01/2025", false),
            task(1, "other", "02/01/2025", false),
            task(2, "second holder", "03/01/2025", true),
        ];
        let tasks = toggle_done(tasks, TaskId::new(2));

        assert!(tasks[0].done);
        assert!(!tasks[1].done);
        assert!(!tasks[2].done);
    }

    #[test]
    fn toggle_done_with_unknown_id_is_a_no_op() {
        let before = vec![task(1, "a", "01/01/2025", false)];
        let after = toggle_done(before.clone(), TaskId::new(9));

        assert_eq!(after, before);
    }

    #[test]
    fn remove_drops_every_holder_of_the_id() {
        let tasks = vec![
            task(2, "first", "01/01/2025", false),
            task(1, "keep", "02/01/2025", false),
            task(2, "second", "03/01/2025", true),
        ];
        let tasks = remove(tasks, TaskId::new(2));

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, TaskId::new(1));
    }

    #[test]
    fn remove_with_unknown_id_is_a_no_op() {
        let before = vec![task(1, "a", "01/01/2025", false)];
        let after = remove(before.clone(), TaskId::new(9));

        assert_eq!(after, before);
    }

    #[test]
    fn filter_by_done_keeps_order_of_survivors() {
        let tasks = vec![
            task(1, "open", "01/01/2025", false),
            task(2, "done", "02/01/2025", true),
            task(3, "open again", "03/01/2025", false),
        ];
        let open = filter_by_done(tasks, false);

        assert_eq!(open.len(), 2);
        assert_eq!(open[0].id, TaskId::new(1));
        assert_eq!(open[1].id, TaskId::new(3));
    }

    #[test]
    fn filter_by_done_can_empty_the_sequence() {
        let tasks = vec![task(1, "open", "01/01/2025", false)];
        let done = filter_by_done(tasks, true);

        assert!(done.is_empty());
    }

    #[test]
    fn sort_by_due_date_uses_text_order() {
        let tasks = vec![
            task(1, "calendar earliest", "09/12/2024", false),
            task(2, "calendar latest", "03/11/2025", false),
            task(3, "calendar middle", "10/01/2025", false),
        ];
        let tasks = sort_by_due_date(tasks);

        // "03/.." < "09/.." < "10/.." as text, regardless of the years
        assert_eq!(tasks[0].id, TaskId::new(2));
        assert_eq!(tasks[1].id, TaskId::new(1));
        assert_eq!(tasks[2].id, TaskId::new(3));
    }

    #[test]
    fn sort_by_due_date_is_stable_for_equal_text() {
        let tasks = vec![
            task(1, "first", "10/01/2025", false),
            task(2, "second", "10/01/2025", false),
            task(3, "earlier", "01/01/2025", false),
        ];
        let tasks = sort_by_due_date(tasks);

        assert_eq!(tasks[0].id, TaskId::new(3));
        assert_eq!(tasks[1].id, TaskId::new(1));
        assert_eq!(tasks[2].id, TaskId::new(2));
    }

    #[test]
    fn operations_on_the_empty_sequence_stay_empty() {
        assert!(toggle_done(Vec::new(), TaskId::new(1)).is_empty());
        assert!(remove(Vec::new(), TaskId::new(1)).is_empty());
        assert!(filter_by_done(Vec::new(), true).is_empty());
        assert!(sort_by_due_date(Vec::new()).is_empty());
    }
}
