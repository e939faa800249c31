//! `rankscore-io` — block-format ranking input.
//!
//! One ranking per block: line 1 is the organization label, line 2 the
//! free-form date/time string, each following line one entity name in rank
//! order; a blank line ends the block. Names are normalized at read time
//! (periods stripped, lowercased) so later comparisons ignore formatting.

pub mod block;
pub mod error;

pub use block::{normalize_name, parse_blocks, read_blocks, RawBlock};
pub use error::IoError;
