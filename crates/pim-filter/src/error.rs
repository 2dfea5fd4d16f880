use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("{value} is not a choice of filter {filter}")]
    UnknownChoice { filter: String, value: String },
}

pub type Result<T> = std::result::Result<T, FilterError>;
