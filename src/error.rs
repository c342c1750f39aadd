use std::error::Error;
use std::fmt;

/// Location that failed a bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Index {
    Cell(isize, isize),
    Row(isize),
    Column(isize),
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Index::Cell(i, j) => write!(f, "cell ({}, {})", i, j),
            Index::Row(i) => write!(f, "row {}", i),
            Index::Column(j) => write!(f, "column {}", j),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MinerError {
    InvalidArgument(String),
    IndexOutOfBounds {
        index: Index,
        rows: usize,
        cols: usize,
    },
}

impl MinerError {
    pub(crate) fn invalid(message: impl Into<String>) -> MinerError {
        MinerError::InvalidArgument(message.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MinerError::InvalidArgument(_))
    }

    pub fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, MinerError::IndexOutOfBounds { .. })
    }
}

impl fmt::Display for MinerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MinerError::InvalidArgument(message) => write!(f, "Invalid argument: {}", message),
            MinerError::IndexOutOfBounds { index, rows, cols } => write!(
                f,
                "Index out of Bounds! Tried to access {} of {}x{} matrix.",
                index, rows, cols
            ),
        }
    }
}

impl Error for MinerError {}

impl From<serde_json::Error> for MinerError {
    fn from(err: serde_json::Error) -> Self {
        MinerError::InvalidArgument(format!("malformed configuration: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, MinerError>;
