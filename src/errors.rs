use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read or write the address book: {0}")]
    Csv(#[from] csv::Error),

    #[error("Contact '{0}' not found.")]
    NotFound(String),

    #[error("Contact '{0}' already exists.")]
    DuplicateContact(String),

    #[error("Error! Enter a valid value. Unrecognized choice: '{0}'")]
    ParseCommand(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid validation pattern: {0}")]
    Regex(#[from] regex::Error),
}
