use std::fmt;

/// Errors reported before a run starts. Once the training loop is
/// underway no further validation occurs; numerical divergence shows up
/// as a NaN/Inf cost for the caller to judge, never as an `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The dataset has no records; a mean cost would divide by zero.
    EmptyDataset,
    /// Parameter vector length does not match the model's declared shape.
    ShapeMismatch { expected: usize, found: usize },
    /// Record input arity does not match the model's input count.
    ArityMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyDataset => write!(f, "dataset is empty"),
            Error::ShapeMismatch { expected, found } => {
                write!(f, "parameter vector has {found} entries, model declares {expected}")
            }
            Error::ArityMismatch { expected, found } => {
                write!(f, "records supply {found} inputs, model expects {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}
