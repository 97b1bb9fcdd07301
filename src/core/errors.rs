use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrepareError>;

#[derive(Debug, Error, PartialEq)]
pub enum PrepareError {
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Shape Mismatch: data is {0}x{1} but mask is {2}x{3}")]
    ShapeMismatch(usize, usize, usize, usize),
}
