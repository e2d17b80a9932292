//! Task entity.
//!
//! A task is a plain record. All persistence lives in [`crate::storage`] and
//! all business rules in [`crate::service`]; nothing here touches disk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned at creation and never changed.
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// Serialized as an ISO-8601 string.
    pub deadline: DateTime<Utc>,
}

impl Task {
    /// Create a new task with a fresh id. New tasks start not completed.
    pub fn new(title: String, description: String, deadline: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            completed: false,
            deadline,
        }
    }

    pub fn set_completed(&mut self, status: bool) {
        self.completed = status;
    }

    pub fn update_details(&mut self, title: String, description: String) {
        self.title = title;
        self.description = description;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk".to_string(), String::new(), Utc::now());
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "");
        assert!(!task.completed);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let json = r#"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "title": "X",
            "deadline": "2025-01-01T00:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.description, "");
        assert!(!task.completed);
    }
}
