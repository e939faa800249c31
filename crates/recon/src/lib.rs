//! `rankscore-recon` — name reconciliation across rankings.
//!
//! Aligns entity names between an authoritative ranking and candidate
//! rankings, rewriting confirmed spelling variants in place so every name
//! denoting the same real-world entity shares one canonical string.
//! Confirmation decisions come through the [`MatchOracle`] seam; the engine
//! itself never reads a terminal.

pub mod config;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod oracle;
pub mod session;

pub use config::{MatcherConfig, DEFAULT_CUTOFF};
pub use engine::{reconcile, ReconStats};
pub use error::ReconError;
pub use oracle::{Decision, MatchOracle};
pub use session::ReconSession;
