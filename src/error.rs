use mealweek_shared::{Day, Slot, ValidationError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("There is no {slot} meal on {day} to edit.")]
    EmptySlot { day: Day, slot: Slot },

    #[error("{0}")]
    Command(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<clap::Error> for AppError {
    fn from(err: clap::Error) -> Self {
        AppError::Command(err.render().to_string().trim_end().to_owned())
    }
}

impl AppError {
    /// Whether the session can keep going after reporting this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Io(_))
    }
}
