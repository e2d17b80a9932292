//! Business rules on top of raw storage.
//!
//! The service owns title uniqueness, lookup failures, and filter validation.
//! Storage stays policy-free; uniqueness is checked here with a linear scan
//! before insert, never enforced on disk.

use chrono::{Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::storage::{StorageError, TaskStore};
use crate::task::Task;
use crate::validation;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Title is required")]
    EmptyTitle,

    #[error("A task with title \"{0}\" already exists")]
    DuplicateTitle(String),

    #[error("No task found with {0}")]
    NotFound(String),

    #[error("Only one of --deadline, --today, or --tomorrow may be used at a time")]
    ConflictingFilters,

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Filters for [`TaskService::list_tasks`].
///
/// The three date filters are mutually exclusive; `done` composes with any
/// of them.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Keep tasks due on this date (`YYYY-MM-DD`).
    pub deadline: Option<String>,
    /// Keep tasks due today.
    pub today: bool,
    /// Keep tasks due tomorrow.
    pub tomorrow: bool,
    /// Keep only completed tasks.
    pub done: bool,
}

/// Business operations over one injected [`TaskStore`].
///
/// Every operation is a full load → mutate → save cycle; no task state is
/// held between calls.
#[derive(Debug, Clone)]
pub struct TaskService {
    store: TaskStore,
}

impl TaskService {
    pub fn new(store: TaskStore) -> Self {
        Self { store }
    }

    /// Create and persist a new task.
    ///
    /// Fails when the title is empty or already taken. The deadline string is
    /// normalized permissively (absent/invalid means "now").
    pub fn add_task(
        &self,
        title: &str,
        description: &str,
        raw_deadline: Option<&str>,
    ) -> TaskResult<Task> {
        let title = validation::sanitize_string(title);
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let tasks = self.store.load_tasks()?;
        if tasks.iter().any(|task| task.title == title) {
            return Err(TaskError::DuplicateTitle(title));
        }

        let task = Task::new(
            title,
            validation::sanitize_string(description),
            validation::normalize_deadline(raw_deadline),
        );
        self.store.add_task(task.clone())?;

        tracing::info!("Added task \"{}\" ({})", task.title, task.id);
        Ok(task)
    }

    /// Remove the task with the given title. Returns the removed task.
    pub fn remove_task_by_title(&self, title: &str) -> TaskResult<Task> {
        let tasks = self.store.load_tasks()?;
        let task = tasks
            .iter()
            .find(|task| task.title == title)
            .cloned()
            .ok_or_else(|| TaskError::NotFound(format!("title \"{title}\"")))?;

        self.store.remove_task(task.id)?;
        tracing::info!("Removed task \"{}\" ({})", task.title, task.id);
        Ok(task)
    }

    /// Remove the task with the given id. Returns the removed task.
    pub fn remove_task_by_id(&self, id: Uuid) -> TaskResult<Task> {
        let tasks = self.store.load_tasks()?;
        let task = tasks
            .iter()
            .find(|task| task.id == id)
            .cloned()
            .ok_or_else(|| TaskError::NotFound(format!("id {id}")))?;

        self.store.remove_task(task.id)?;
        tracing::info!("Removed task \"{}\" ({})", task.title, task.id);
        Ok(task)
    }

    /// Mark the task with the given title as completed.
    ///
    /// Completion is one-way; nothing ever flips a task back to not-done
    /// except a full field update.
    pub fn mark_done(&self, title: &str) -> TaskResult<Task> {
        let mut tasks = self.store.load_tasks()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.title == title)
            .ok_or_else(|| TaskError::NotFound(format!("title \"{title}\"")))?;

        task.set_completed(true);
        let done = task.clone();
        self.store.save_tasks(&tasks)?;

        tracing::info!("Marked task \"{}\" as done ({})", done.title, done.id);
        Ok(done)
    }

    /// List tasks in storage order, filtered.
    ///
    /// At most one date filter applies (exact-day match in UTC); the `done`
    /// filter is independent.
    pub fn list_tasks(&self, filter: &ListFilter) -> TaskResult<Vec<Task>> {
        let date_flags = [filter.deadline.is_some(), filter.today, filter.tomorrow]
            .into_iter()
            .filter(|set| *set)
            .count();
        if date_flags > 1 {
            return Err(TaskError::ConflictingFilters);
        }

        let mut tasks = self.store.load_tasks()?;

        let day = if let Some(raw) = filter.deadline.as_deref() {
            Some(validation::normalize_deadline(Some(raw)).date_naive())
        } else if filter.today {
            Some(Utc::now().date_naive())
        } else if filter.tomorrow {
            Some(Utc::now().date_naive() + Duration::days(1))
        } else {
            None
        };

        if let Some(day) = day {
            tasks.retain(|task| task.deadline.date_naive() == day);
        }
        if filter.done {
            tasks.retain(|task| task.completed);
        }

        Ok(tasks)
    }

    /// Look up a task by id with a linear scan.
    pub fn find_task_by_id(&self, id: Uuid) -> TaskResult<Option<Task>> {
        let tasks = self.store.load_tasks()?;
        Ok(tasks.into_iter().find(|task| task.id == id))
    }

    /// Overwrite all mutable fields of the task with `updated.id`.
    pub fn update_task_by_id(&self, updated: Task) -> TaskResult<Task> {
        let title = validation::sanitize_string(&updated.title);
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }

        let mut tasks = self.store.load_tasks()?;
        let task = tasks
            .iter_mut()
            .find(|task| task.id == updated.id)
            .ok_or_else(|| TaskError::NotFound(format!("id {}", updated.id)))?;

        task.update_details(title, validation::sanitize_string(&updated.description));
        task.set_completed(updated.completed);
        task.deadline = updated.deadline;
        let result = task.clone();
        self.store.save_tasks(&tasks)?;

        tracing::info!("Updated task \"{}\" ({})", result.title, result.id);
        Ok(result)
    }
}
