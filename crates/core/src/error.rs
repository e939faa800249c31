use std::fmt;

#[derive(Debug)]
pub enum ModelError {
    /// A name appended or rewritten into a ranking that already holds it.
    DuplicateItem { source_id: String, name: String },
    /// A rewrite referenced a name the ranking does not contain.
    UnknownItem { source_id: String, name: String },
    /// No ranking in the batch carried an authority label.
    NoAuthoritative,
    /// More than one ranking carried an authority label.
    MultipleAuthoritative { first: String, second: String },
    /// Nothing to score against the authoritative ranking.
    NoCandidates,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateItem { source_id, name } => {
                write!(f, "ranking '{source_id}': duplicate name '{name}'")
            }
            Self::UnknownItem { source_id, name } => {
                write!(f, "ranking '{source_id}': no such name '{name}'")
            }
            Self::NoAuthoritative => write!(f, "no authoritative ranking in batch"),
            Self::MultipleAuthoritative { first, second } => {
                write!(f, "more than one authoritative ranking: '{first}' and '{second}'")
            }
            Self::NoCandidates => write!(f, "no candidate rankings in batch"),
        }
    }
}

impl std::error::Error for ModelError {}
