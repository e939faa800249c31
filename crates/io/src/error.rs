use std::fmt;

#[derive(Debug)]
pub enum IoError {
    /// Underlying read failure.
    Read(String),
    /// A block ended before the label, date line and first name were seen.
    TruncatedBlock { line: usize },
    /// The same name twice within one block.
    DuplicateName { source_id: String, name: String },
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read(msg) => write!(f, "read error: {msg}"),
            Self::TruncatedBlock { line } => {
                write!(f, "block ending at line {line} is incomplete (need label, date, names)")
            }
            Self::DuplicateName { source_id, name } => {
                write!(f, "ranking '{source_id}': duplicate name '{name}'")
            }
        }
    }
}

impl std::error::Error for IoError {}
