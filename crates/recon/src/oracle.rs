use crate::error::ReconError;

/// Verdict on whether two strings denote the same entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Same,
    Different,
}

/// Confirmation seam for approximate matches.
///
/// The engine asks once per undecided (canonical, variant) pair; an
/// interactive implementation is free to re-prompt internally until it has
/// a parseable answer. Implementations must not mutate the rankings.
pub trait MatchOracle {
    fn confirm(&mut self, canonical: &str, variant: &str) -> Result<Decision, ReconError>;
}
