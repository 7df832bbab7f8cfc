//! Interactive menu loop over a task store.
//!
//! The console owns no task state; it borrows the store, reads choices and
//! field values line by line, and prints outcomes. Generic over its input
//! and output streams so tests can script whole sessions.

use crate::error::Result;
use crate::models::{Task, TaskStatus};
use crate::store::TaskStore;
use std::io::{BufRead, Write};

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    View,
    Update,
    Delete,
    MarkComplete,
    MarkIncomplete,
    Exit,
}

impl MenuChoice {
    /// Parse a trimmed input line; only the literal tokens 1-7 are accepted
    fn parse(input: &str) -> Option<MenuChoice> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::Update),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::MarkComplete),
            "6" => Some(MenuChoice::MarkIncomplete),
            "7" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu-driven console interface
pub struct Console<'a, R, W> {
    input: R,
    output: W,
    store: &'a mut TaskStore,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    /// Create a console over the given store and streams
    pub fn new(store: &'a mut TaskStore, input: R, output: W) -> Self {
        Console {
            input,
            output,
            store,
        }
    }

    /// Run the menu loop until the user picks Exit or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "=== Todo Application ===")?;

        loop {
            self.display_menu()?;
            let choice = match self.read_menu_choice()? {
                Some(choice) => choice,
                None => break,
            };

            match choice {
                MenuChoice::Add => self.handle_add()?,
                MenuChoice::View => self.handle_view()?,
                MenuChoice::Update => self.handle_update()?,
                MenuChoice::Delete => self.handle_delete()?,
                MenuChoice::MarkComplete => self.handle_mark(TaskStatus::Complete)?,
                MenuChoice::MarkIncomplete => self.handle_mark(TaskStatus::Incomplete)?,
                MenuChoice::Exit => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
            }
        }

        Ok(())
    }

    fn display_menu(&mut self) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "--- Menu ---")?;
        writeln!(self.output, "1. Add Task")?;
        writeln!(self.output, "2. View Tasks")?;
        writeln!(self.output, "3. Update Task")?;
        writeln!(self.output, "4. Delete Task")?;
        writeln!(self.output, "5. Mark Complete")?;
        writeln!(self.output, "6. Mark Incomplete")?;
        writeln!(self.output, "7. Exit")?;
        Ok(())
    }

    /// Re-prompt until the choice is valid. `None` means input ended.
    fn read_menu_choice(&mut self) -> Result<Option<MenuChoice>> {
        loop {
            let line = match self.read_line("Enter choice (1-7): ")? {
                Some(line) => line,
                None => return Ok(None),
            };
            match MenuChoice::parse(&line) {
                Some(choice) => return Ok(Some(choice)),
                None => writeln!(self.output, "Invalid choice. Please enter 1-7.")?,
            }
        }
    }

    /// Handle the add flow
    fn handle_add(&mut self) -> Result<()> {
        let description = match self.read_line("Enter task description: ")? {
            Some(line) => line,
            None => return Ok(()),
        };
        if description.is_empty() {
            writeln!(self.output, "Error: Task description cannot be empty.")?;
            return Ok(());
        }

        let task = self.store.add_task(&description)?;
        writeln!(self.output, "Task added (ID: {})", task.id)?;
        Ok(())
    }

    /// Handle the view flow
    fn handle_view(&mut self) -> Result<()> {
        let tasks = self.store.get_all_tasks();
        if tasks.is_empty() {
            writeln!(self.output, "No tasks yet. Add one!")?;
            return Ok(());
        }

        writeln!(self.output)?;
        writeln!(self.output, "--- Tasks ---")?;
        for task in &tasks {
            writeln!(self.output, "{}", format_task_line(task))?;
        }
        Ok(())
    }

    /// Handle the update flow
    fn handle_update(&mut self) -> Result<()> {
        let id = match self.read_task_id("Enter task ID to update: ")? {
            Some(id) => id,
            None => return Ok(()),
        };

        let description = match self.read_line("Enter new description: ")? {
            Some(line) => line,
            None => return Ok(()),
        };
        if description.is_empty() {
            writeln!(self.output, "Error: Description cannot be empty.")?;
            return Ok(());
        }

        match self.store.update_task(id, &description)? {
            Some(_) => writeln!(self.output, "Task updated.")?,
            None => writeln!(self.output, "Error: Task {id} not found.")?,
        }
        Ok(())
    }

    /// Handle the delete flow
    fn handle_delete(&mut self) -> Result<()> {
        let id = match self.read_task_id("Enter task ID to delete: ")? {
            Some(id) => id,
            None => return Ok(()),
        };

        if self.store.delete_task(id) {
            writeln!(self.output, "Task deleted.")?;
        } else {
            writeln!(self.output, "Error: Task {id} not found.")?;
        }
        Ok(())
    }

    /// Handle the mark complete / mark incomplete flow
    fn handle_mark(&mut self, status: TaskStatus) -> Result<()> {
        let action = status.as_str();
        let id = match self.read_task_id(&format!("Enter task ID to mark {action}: "))? {
            Some(id) => id,
            None => return Ok(()),
        };

        let result = match status {
            TaskStatus::Complete => self.store.mark_complete(id),
            TaskStatus::Incomplete => self.store.mark_incomplete(id),
        };

        match result {
            Some(_) => writeln!(self.output, "Task marked as {action}.")?,
            None => writeln!(self.output, "Error: Task {id} not found.")?,
        }
        Ok(())
    }

    /// Prompt for a task id until the input parses as a positive number.
    /// An empty line aborts with `None`; so does end of input.
    fn read_task_id(&mut self, prompt: &str) -> Result<Option<i64>> {
        loop {
            let line = match self.read_line(prompt)? {
                Some(line) => line,
                None => return Ok(None),
            };
            if line.is_empty() {
                return Ok(None);
            }

            match line.parse::<i64>() {
                Ok(id) if id > 0 => return Ok(Some(id)),
                Ok(_) => writeln!(self.output, "Error: Task ID must be a positive number.")?,
                Err(_) => writeln!(self.output, "Error: Please enter a valid number.")?,
            }
        }
    }

    /// Print a prompt and read one trimmed line. `None` means input ended.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Render one task as `<id>. [<marker>] <description>`
fn format_task_line(task: &Task) -> String {
    format!("{}. [{}] {}", task.id, task.status.marker(), task.description)
}
