use crate::error::{Result, TaskError};
use crate::models::{Task, TaskStatus};
use std::collections::BTreeMap;
use tracing::debug;

/// In-memory task store: the id-to-task mapping plus the id counter.
///
/// Ids are assigned sequentially starting at 1 and are never reissued,
/// even after the task they belonged to is deleted.
pub struct TaskStore {
    tasks: BTreeMap<i64, Task>,
    next_id: i64,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        TaskStore {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }

    // Task operations

    /// Create a new task with the given description
    pub fn add_task(&mut self, description: &str) -> Result<Task> {
        let description = Self::validate_description(description)?;
        let task = Task {
            id: self.generate_id(),
            description,
            status: TaskStatus::Incomplete,
        };
        self.tasks.insert(task.id, task.clone());
        debug!("task {} added", task.id);
        Ok(task)
    }

    /// All tasks in ascending id order
    pub fn get_all_tasks(&self) -> Vec<Task> {
        self.tasks.values().cloned().collect()
    }

    /// Overwrite a task's description. Returns `None` if the id is unknown.
    pub fn update_task(&mut self, id: i64, description: &str) -> Result<Option<Task>> {
        match self.tasks.get_mut(&id) {
            None => Ok(None),
            Some(task) => {
                task.description = Self::validate_description(description)?;
                debug!("task {id} updated");
                Ok(Some(task.clone()))
            }
        }
    }

    /// Remove a task. Returns `false` if the id is unknown.
    pub fn delete_task(&mut self, id: i64) -> bool {
        let removed = self.tasks.remove(&id).is_some();
        if removed {
            debug!("task {id} deleted");
        }
        removed
    }

    // Status operations

    /// Mark a task complete. Returns `None` if the id is unknown.
    pub fn mark_complete(&mut self, id: i64) -> Option<Task> {
        self.set_status(id, TaskStatus::Complete)
    }

    /// Mark a task incomplete. Returns `None` if the id is unknown.
    pub fn mark_incomplete(&mut self, id: i64) -> Option<Task> {
        self.set_status(id, TaskStatus::Incomplete)
    }

    fn set_status(&mut self, id: i64, status: TaskStatus) -> Option<Task> {
        let task = self.tasks.get_mut(&id)?;
        task.status = status;
        debug!("task {id} marked {status}");
        Some(task.clone())
    }

    // Helpers

    /// Next sequential id; the counter only ever moves forward
    fn generate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn validate_description(description: &str) -> Result<String> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(TaskError::EmptyDescription);
        }
        Ok(trimmed.to_string())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(descriptions: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for description in descriptions {
            store.add_task(description).unwrap();
        }
        store
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = TaskStore::new();

        let first = store.add_task("First").unwrap();
        let second = store.add_task("Second").unwrap();
        let third = store.add_task("Third").unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[test]
    fn test_add_trims_description() {
        let mut store = TaskStore::new();

        let task = store.add_task("  x  ").unwrap();
        assert_eq!(task.description, "x");

        let stored = store.get_all_tasks();
        assert_eq!(stored[0].description, "x");
    }

    #[test]
    fn test_add_defaults_to_incomplete() {
        let mut store = TaskStore::new();

        let task = store.add_task("Test").unwrap();
        assert_eq!(task.status, TaskStatus::Incomplete);
    }

    #[test]
    fn test_add_empty_description_fails() {
        let mut store = TaskStore::new();

        assert!(matches!(
            store.add_task(""),
            Err(TaskError::EmptyDescription)
        ));
        assert!(matches!(
            store.add_task("   "),
            Err(TaskError::EmptyDescription)
        ));
        assert!(store.get_all_tasks().is_empty());
    }

    #[test]
    fn test_failed_add_does_not_consume_an_id() {
        let mut store = TaskStore::new();

        store.add_task("  ").unwrap_err();
        let task = store.add_task("Real task").unwrap();
        assert_eq!(task.id, 1);
    }

    #[test]
    fn test_deleted_ids_are_never_reissued() {
        let mut store = store_with(&["Task 1", "Task 2"]);

        assert!(store.delete_task(1));
        let third = store.add_task("Task 3").unwrap();
        assert_eq!(third.id, 3);

        let ids: Vec<i64> = store.get_all_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);

        let fourth = store.add_task("Task 4").unwrap();
        assert_eq!(fourth.id, 4);
    }

    #[test]
    fn test_get_all_tasks_empty_store() {
        let store = TaskStore::new();
        assert!(store.get_all_tasks().is_empty());
    }

    #[test]
    fn test_get_all_tasks_ordered_by_id_not_description() {
        let store = store_with(&["b", "a", "c"]);

        let tasks = store.get_all_tasks();
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        let descriptions: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(descriptions, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_update_task_trims_description() {
        let mut store = store_with(&["Original"]);

        let updated = store.update_task(1, "  z  ").unwrap().unwrap();
        assert_eq!(updated.description, "z");
        assert_eq!(store.get_all_tasks()[0].description, "z");
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let mut store = store_with(&["Task"]);

        assert!(store.update_task(999, "y").unwrap().is_none());
    }

    #[test]
    fn test_update_checks_presence_before_validation() {
        // A blank description for an unknown id is still a not-found
        // result, not a validation failure.
        let mut store = TaskStore::new();

        assert!(store.update_task(999, "").unwrap().is_none());
    }

    #[test]
    fn test_update_blank_description_fails_and_leaves_task_intact() {
        let mut store = store_with(&["Original"]);

        assert!(matches!(
            store.update_task(1, "   "),
            Err(TaskError::EmptyDescription)
        ));
        assert_eq!(store.get_all_tasks()[0].description, "Original");
    }

    #[test]
    fn test_delete_task_removes_only_that_task() {
        let mut store = store_with(&["Task 1", "Task 2", "Task 3"]);

        assert!(store.delete_task(2));

        let ids: Vec<i64> = store.get_all_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_unknown_id_returns_false() {
        let mut store = store_with(&["Task"]);

        assert!(!store.delete_task(999));
        assert_eq!(store.get_all_tasks().len(), 1);
    }

    #[test]
    fn test_mark_complete_then_incomplete_round_trips() {
        let mut store = store_with(&["Task"]);

        let marked = store.mark_complete(1).unwrap();
        assert_eq!(marked.status, TaskStatus::Complete);

        let unmarked = store.mark_incomplete(1).unwrap();
        assert_eq!(unmarked.status, TaskStatus::Incomplete);
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let mut store = store_with(&["Task"]);

        store.mark_complete(1).unwrap();
        let again = store.mark_complete(1).unwrap();
        assert_eq!(again.status, TaskStatus::Complete);
    }

    #[test]
    fn test_mark_unknown_id_returns_none() {
        let mut store = TaskStore::new();

        assert!(store.mark_complete(42).is_none());
        assert!(store.mark_incomplete(42).is_none());
    }
}
