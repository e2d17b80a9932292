//! Console output for CLI commands.

use crate::task::Task;

/// Print tasks as an aligned table, or a placeholder when there are none.
pub fn print_tasks(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let title_width = column_width("Title", tasks.iter().map(|t| t.title.as_str()));
    let desc_width = column_width("Description", tasks.iter().map(|t| t.description.as_str()));

    println!(
        "{:<36}  {:<title_width$}  {:<desc_width$}  {:<5}  {}",
        "ID", "Title", "Description", "Done", "Deadline"
    );
    for task in tasks {
        println!(
            "{:<36}  {:<title_width$}  {:<desc_width$}  {:<5}  {}",
            task.id.to_string(),
            task.title,
            task.description,
            task.completed,
            task.deadline.format("%Y-%m-%d")
        );
    }
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain([header.chars().count()])
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width_covers_header_and_values() {
        assert_eq!(column_width("Title", ["ab", "abcdef"].into_iter()), 6);
        assert_eq!(column_width("Description", ["ab"].into_iter()), 11);
    }
}
