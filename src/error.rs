use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cannot {operation} an empty {container}")]
    EmptyContainer {
        operation: &'static str,
        container: &'static str,
    },
    #[error("{container} index out of range: {index} (len {len})")]
    IndexOutOfRange {
        container: &'static str,
        index: isize,
        len: usize,
    },
    #[error("{container} index must be an integer representable as isize")]
    InvalidIndexType { container: &'static str },
    #[error("value is not in {container}")]
    ValueNotFound { container: &'static str },
    #[error("{container} already at its maximum size ({maxlen})")]
    CapacityExceeded {
        container: &'static str,
        maxlen: usize,
    },
}

impl Error {
    pub(crate) fn empty(operation: &'static str, container: &'static str) -> Self {
        Error::EmptyContainer {
            operation,
            container,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
