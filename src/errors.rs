use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodeGeneratorError {
    /// A requested code length was below one
    #[error("Min. length of 1 or above, got {0}")]
    Validation(usize),

    /// The alphabet resolved to no characters
    #[error("Invalid character set: {0}")]
    Config(String),

    #[error("{message}")]
    Capacity {
        requested: usize,
        capacity: u128,
        message: String,
    },

    /// A bulk request hit its configured round limit before collecting enough codes
    #[error("Generated {generated} of {requested} unique codes before reaching the limit of {rounds} rounds")]
    Exhausted {
        requested: usize,
        generated: usize,
        rounds: usize,
    },

    #[error("Configuration (de)serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodeGeneratorError>;
