use std::fmt;

#[derive(Debug)]
pub enum ReconError {
    /// The oracle could not produce a decision (e.g. its input closed).
    Oracle(String),
    /// An internally-guaranteed precondition was violated.
    Defect(String),
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oracle(msg) => write!(f, "confirmation unavailable: {msg}"),
            Self::Defect(msg) => write!(f, "internal defect: {msg}"),
        }
    }
}

impl std::error::Error for ReconError {}
