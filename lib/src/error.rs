//! # Error taxonomy
use std::error;
use std::fmt;

/// Error describes an input that violates a graph precondition.
/// Once a graph is built, every computation on it is total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// A partition size is negative or leaves no room for the NIL slot
    InvalidSize { m: i64, n: i64 },
    /// An edge endpoint lies outside `1..=m` (for `u`) or `1..=n` (for `v`)
    InvalidVertexIndex { u: i64, v: i64 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { m, n } => write!(f, "invalid partition sizes m={} n={}", m, n),
            Self::InvalidVertexIndex { u, v } => {
                write!(f, "invalid vertex index in edge ({}, {})", u, v)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::error::*;

    #[test]
    fn display_names_the_offending_values() {
        let e = Error::InvalidVertexIndex { u: 0, v: 4 };
        assert_eq!(e.to_string(), "invalid vertex index in edge (0, 4)");
        let e = Error::InvalidSize { m: -1, n: 2 };
        assert_eq!(e.to_string(), "invalid partition sizes m=-1 n=2");
    }
}
