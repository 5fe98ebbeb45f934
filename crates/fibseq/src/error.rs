use core::fmt::Display;

/// Errors that can occur while computing Fibonacci terms
#[derive(Debug)]
pub enum Error {
    /// A term index does not fit into the cache
    CapacityExceeded {
        /// The number of terms (or the term index + 1) that was asked for
        requested: usize,
        /// The number of slots in the cache
        capacity: usize,
    },

    /// A term does not fit into the integer width
    Overflow {
        /// The term index at which the overflow happened, or for
        /// [`Fibonacci::advance`](crate::Fibonacci::advance) the step number
        /// counted from the start of that call
        index: u64,
    },

    /// The term count could not be read as a non-negative integer
    InvalidCount(String),

    /// An I/O error occurred
    Io(std::io::Error),
}

impl Error {
    /// Get the message of the error
    pub fn message(&self) -> &'static str {
        match self {
            Self::CapacityExceeded { .. } => "cache capacity exceeded",
            Self::Overflow { .. } => "integer overflow",
            Self::InvalidCount(_) => "invalid term count",
            Self::Io(_) => "I/O error",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CapacityExceeded { requested, capacity } => {
                write!(f, "cache capacity exceeded: requested={requested}, capacity={capacity}")
            }
            Self::Overflow { index } => write!(f, "integer overflow at index {index}"),
            Self::InvalidCount(input) => write!(f, "invalid term count: {input:?}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// A wrapper around [`core::result::Result`] for fibseq operations
pub type Result<T, E = Error> = core::result::Result<T, E>;
