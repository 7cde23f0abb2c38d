use serde::Serialize;
use std::fmt;

/// Application error types for better error handling and user feedback.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Errors related to local file storage
    Storage(String),
    /// Empty name or time field on add/edit
    Validation(String),
    /// Time string does not match the 12-hour clock format
    TimeFormat(String),
    /// Edit/delete invoked with nothing selected
    NoSelection(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Validation(msg) => write!(f, "Missing info: {}", msg),
            AppError::TimeFormat(msg) => write!(f, "Invalid time format: {}", msg),
            AppError::NoSelection(msg) => write!(f, "No selection: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion to String for Tauri command return types
impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}

// Convenience constructors
impl AppError {
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        AppError::Storage(msg.into())
    }

    pub fn validation<S: Into<String>>(msg: S) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn time_format<S: Into<String>>(msg: S) -> Self {
        AppError::TimeFormat(msg.into())
    }

    pub fn no_selection<S: Into<String>>(msg: S) -> Self {
        AppError::NoSelection(msg.into())
    }
}

/// Result type alias for registry and storage operations
pub type AppResult<T> = Result<T, AppError>;
