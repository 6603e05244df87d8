//! Error type for heap construction

use std::fmt;

/// Error type for heap operations
///
/// Only construction can fail. `push`, `pop` and `peek` are infallible, and
/// an empty heap is reported through `Option::None` rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    /// A comparator was selected at runtime from an input that does not name
    /// one. Carries the rejected input.
    InvalidArgument(String),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument(input) => {
                write!(f, "invalid comparator argument: {input:?} (expected \"min\" or \"max\")")
            }
        }
    }
}

impl std::error::Error for HeapError {}
