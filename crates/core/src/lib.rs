//! Core types - rankings, batch partition.

pub mod batch;
pub mod error;
pub mod model;

pub use batch::{Batch, DEFAULT_AUTHORITIES};
pub use error::ModelError;
pub use model::{Ranking, RankingBuilder};
