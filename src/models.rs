use std::fmt;

/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Incomplete,
    Complete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Incomplete => "incomplete",
            TaskStatus::Complete => "complete",
        }
    }

    /// Checkbox marker shown in task listings
    pub fn marker(&self) -> char {
        match self {
            TaskStatus::Complete => 'X',
            TaskStatus::Incomplete => ' ',
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, TaskStatus::Complete)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A task in the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub status: TaskStatus,
}
