use std::fmt;

#[derive(Debug)]
pub enum TimeParseError {
    /// Manual date entry had the wrong number of `-`-separated fields.
    ManualFieldCount(usize),
    /// Manual date entry had a non-numeric field.
    ManualNumber(String),
    /// Manual date entry named a day that does not exist.
    ManualInvalidDate { year: i32, month: u32, day: u32 },
    /// An internally-guaranteed precondition was violated.
    Defect(String),
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ManualFieldCount(n) => {
                write!(f, "expected YYYY-MM-DD (3 fields), got {n}")
            }
            Self::ManualNumber(field) => {
                write!(f, "expected a number in YYYY-MM-DD, got '{field}'")
            }
            Self::ManualInvalidDate { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a calendar date")
            }
            Self::Defect(msg) => write!(f, "internal defect: {msg}"),
        }
    }
}

impl std::error::Error for TimeParseError {}
