use std::fmt;

#[derive(Debug)]
pub enum ScoreError {
    /// A supplied persistence parameter outside (0,1). Signals a logic
    /// defect in the caller; never recovered by substituting a default.
    Persistence(f64),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Persistence(p) => {
                write!(f, "persistence parameter must be in (0,1), got {p}")
            }
        }
    }
}

impl std::error::Error for ScoreError {}
