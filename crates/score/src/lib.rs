//! `rankscore-score` — list similarity measures.
//!
//! Pure scoring crate: rank-biased overlap as the featured measure (top
//! weighted, tolerant of unequal lengths) plus a plain sequence ratio, and
//! per-batch report assembly. No IO dependencies.

pub mod error;
pub mod ratio;
pub mod rbo;
pub mod report;

pub use error::ScoreError;
pub use report::{score_batch, ScoreReport, ScoreRow};
