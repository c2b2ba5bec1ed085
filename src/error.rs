//! Cache Errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// A timeout or expiration time that cannot be used
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No entry is stored under the requested key
    #[error("Key not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, CacheError>;
