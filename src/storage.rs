//! JSON-file persistence for the task collection.
//!
//! `TaskStore` is the sole authority over the backing file. Every mutation is
//! a full load-then-save cycle over the whole collection, and the save is a
//! single non-atomic overwrite: two concurrent writers race and the last save
//! wins. Acceptable for a single-user local tool, documented here rather than
//! papered over.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use crate::task::Task;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Task file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Task file is corrupt: {0}")]
    Corrupt(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// File-backed store for the task collection.
///
/// Holds only the backing path. Each operation reads the file fresh; there is
/// no in-memory cache across calls.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file containing an empty array if it does not
    /// exist. Never touches an existing file.
    pub fn ensure_file(&self) -> StorageResult<()> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, "[]")?;
        tracing::debug!("Created task file at {}", self.path.display());
        Ok(())
    }

    /// Load the full task collection from disk.
    pub fn load_tasks(&self) -> StorageResult<Vec<Task>> {
        self.ensure_file()?;
        let contents = fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt(e.to_string()))
    }

    /// Overwrite the backing file with the full collection in one write.
    pub fn save_tasks(&self, tasks: &[Task]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(tasks)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, contents)?;
        tracing::debug!("Saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Append one task: load, push, save.
    pub fn add_task(&self, task: Task) -> StorageResult<()> {
        let mut tasks = self.load_tasks()?;
        tasks.push(task);
        self.save_tasks(&tasks)
    }

    /// Drop the task with the given id: load, filter, save.
    pub fn remove_task(&self, id: Uuid) -> StorageResult<()> {
        let tasks: Vec<Task> = self
            .load_tasks()?
            .into_iter()
            .filter(|task| task.id != id)
            .collect();
        self.save_tasks(&tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::new(dir.path().join("tasks.json"))
    }

    #[test]
    fn test_load_creates_missing_file_as_empty() {
        let temp = tempdir().unwrap();
        let store = store_in(&temp);

        let tasks = store.load_tasks().unwrap();
        assert!(tasks.is_empty());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
    }

    #[test]
    fn test_ensure_file_is_idempotent() {
        let temp = tempdir().unwrap();
        let store = store_in(&temp);

        store.add_task(Task::new("X".to_string(), String::new(), Utc::now())).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        store.ensure_file().unwrap();
        store.ensure_file().unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp = tempdir().unwrap();
        let store = store_in(&temp);

        let tasks = vec![
            Task::new("One".to_string(), "first".to_string(), Utc::now()),
            Task::new("Two".to_string(), String::new(), Utc::now()),
        ];
        store.save_tasks(&tasks).unwrap();

        let loaded = store.load_tasks().unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_add_task_appends_in_order() {
        let temp = tempdir().unwrap();
        let store = store_in(&temp);

        store.add_task(Task::new("One".to_string(), String::new(), Utc::now())).unwrap();
        store.add_task(Task::new("Two".to_string(), String::new(), Utc::now())).unwrap();

        let tasks = store.load_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "One");
        assert_eq!(tasks[1].title, "Two");
    }

    #[test]
    fn test_remove_task_drops_only_the_matching_id() {
        let temp = tempdir().unwrap();
        let store = store_in(&temp);

        let keep = Task::new("Keep".to_string(), String::new(), Utc::now());
        let gone = Task::new("Drop".to_string(), String::new(), Utc::now());
        store.save_tasks(&[keep.clone(), gone.clone()]).unwrap();

        store.remove_task(gone.id).unwrap();

        let tasks = store.load_tasks().unwrap();
        assert_eq!(tasks, vec![keep]);
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let temp = tempdir().unwrap();
        let store = store_in(&temp);

        fs::write(store.path(), "not json").unwrap();
        assert!(matches!(store.load_tasks(), Err(StorageError::Corrupt(_))));
    }

    #[test]
    fn test_load_rejects_non_array_contents() {
        let temp = tempdir().unwrap();
        let store = store_in(&temp);

        fs::write(store.path(), r#"{"id": "nope"}"#).unwrap();
        assert!(matches!(store.load_tasks(), Err(StorageError::Corrupt(_))));
    }
}
