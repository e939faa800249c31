//! `rankscore-timeparse` — free-form date/time string resolution.
//!
//! Recovers a normalized timestamp from strings like "March 5, 2024
//! 14:30:00", "13/3/99 2:15pm" or "the 5th of November 21". Time-of-day is
//! extracted first and stripped, then the date rules run in priority order
//! (word-form month, delimited numeric). When no rule resolves the date
//! unambiguously, the result is [`Resolution::NeedsDate`] and the caller
//! supplies a `YYYY-MM-DD` value — the crate itself never reads a terminal.

pub mod date;
pub mod error;
pub mod resolve;
pub mod time;

pub use date::{guess_true_year, within_month};
pub use error::TimeParseError;
pub use resolve::{resolve, PendingDate, Resolution};
pub use time::TimeOfDay;
