use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Invalid time of day '{0}': expected HH:MM")]
    InvalidTime(String),

    #[error("Task name must not be empty")]
    EmptyName,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid task list JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskError>;
