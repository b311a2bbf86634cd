use thiserror::Error;

/// Errors that can occur during graph operations.
#[derive(Error, Debug)]
pub enum CerebroError {
    #[error("self-loop rejected: edge source and target are both '{id}'")]
    SelfLoop { id: String },

    #[error("graph config: {message}")]
    Config { message: String },
}

/// Convenience alias for results using `CerebroError`.
pub type Result<T> = std::result::Result<T, CerebroError>;
