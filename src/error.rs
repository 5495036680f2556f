use thiserror::Error;

#[derive(Debug, Error)]
pub enum AbookError {
    #[error("Phone number must contain 10 digits.")]
    InvalidPhone { value: String },

    #[error("Invalid date format. Use DD.MM.YYYY")]
    InvalidBirthday { value: String },

    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Contact not found.")]
    ContactNotFound { name: String },

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AbookResult<T> = Result<T, AbookError>;
