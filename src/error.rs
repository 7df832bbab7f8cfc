use thiserror::Error;

/// All possible errors in the todo application
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TaskError>;
