use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid condition configuration: {0}")]
    InvalidCondition(String),

    #[error("Unknown condition kind: {0}")]
    UnknownCondition(String),

    #[error("Condition already registered: {0}")]
    ConditionAlreadyExists(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
