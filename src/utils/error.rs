use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("staff {number} references unknown department code {code}")]
    UnknownDepartmentCode { number: i32, code: i32 },

    #[error("Configuration error in {field}: {message}")]
    Config { field: String, message: String },

    #[error("Invalid entity: {message}")]
    Entity { message: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
