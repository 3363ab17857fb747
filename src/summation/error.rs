use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SumError {
    #[error("count {count} exceeds the {len} available values")]
    CountOutOfRange { count: usize, len: usize },

    #[error("total overflowed while adding the value at index {index}")]
    Overflow { index: usize },
}

pub type Result<T> = std::result::Result<T, SumError>;
