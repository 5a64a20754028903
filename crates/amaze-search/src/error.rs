use std::fmt;

/// Errors reported by the search engine and frontiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// `remove` was called on an empty frontier. The engine checks for
    /// emptiness before removing, so reaching this indicates a caller bug.
    EmptyFrontier,
    /// The goal is unreachable from the start. This is the ordinary
    /// outcome for a disconnected maze, not a fault.
    NoSolution,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFrontier => write!(f, "remove from empty frontier"),
            Self::NoSolution => write!(f, "no solution"),
        }
    }
}

impl std::error::Error for SearchError {}
