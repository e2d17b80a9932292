//! CLI command handlers.
//!
//! Thin adapters over [`crate::service::TaskService`]: run one operation,
//! print a confirmation or a table, exit. Errors bubble up as anyhow and are
//! printed by the binary.

pub mod view;

use anyhow::Result;

use crate::service::{ListFilter, TaskService};

pub fn add(
    service: &TaskService,
    title: &str,
    description: &str,
    deadline: Option<&str>,
) -> Result<()> {
    let task = service.add_task(title, description, deadline)?;
    println!(
        "Task \"{}\" added successfully (due {}).",
        task.title,
        task.deadline.format("%Y-%m-%d")
    );
    Ok(())
}

pub fn remove(service: &TaskService, title: &str) -> Result<()> {
    let task = service.remove_task_by_title(title)?;
    println!("Task \"{}\" removed successfully.", task.title);
    Ok(())
}

pub fn done(service: &TaskService, title: &str) -> Result<()> {
    let task = service.mark_done(title)?;
    println!("Task \"{}\" marked as done successfully.", task.title);
    Ok(())
}

pub fn list(service: &TaskService, filter: &ListFilter) -> Result<()> {
    let tasks = service.list_tasks(filter)?;
    view::print_tasks(&tasks);
    Ok(())
}
