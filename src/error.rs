use std::fmt::Display;
use std::fmt::Formatter;

/// Invalid-argument conditions surfaced before any clustering work begins.
///
/// Non-convergence within the iteration budget is deliberately absent: it is
/// a defined termination path, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input point set is empty.
    EmptyPoints,
    /// `k` is zero or exceeds the number of points.
    ClusterCount { k: usize, n: usize },
    /// A point's dimensionality differs from the first point's.
    Dimension {
        index: usize,
        expected: usize,
        found: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyPoints => {
                write!(f, "no points to cluster")
            }
            Self::ClusterCount { k, n } => {
                write!(f, "cluster count {} outside [1, {}]", k, n)
            }
            Self::Dimension {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "point {} has {} features, expected {}",
                    index, found, expected
                )
            }
        }
    }
}

impl std::error::Error for Error {}
