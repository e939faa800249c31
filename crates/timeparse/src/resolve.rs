use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::date;
use crate::error::TimeParseError;
use crate::time::{extract_time, TimeOfDay};

/// Outcome of automatic resolution. `NeedsDate` suspends the record until
/// the caller supplies a manual date; the time-of-day already extracted is
/// carried along.
#[derive(Debug)]
pub enum Resolution {
    Resolved(NaiveDateTime),
    NeedsDate(PendingDate),
}

/// A record whose date could not be determined automatically.
#[derive(Debug, Clone)]
pub struct PendingDate {
    time: TimeOfDay,
    original: String,
}

/// Resolve a free-form date/time string.
///
/// Deterministic: the same input and `current_year` always produce the same
/// outcome. Ambiguity is reported as [`Resolution::NeedsDate`], never
/// guessed away.
pub fn resolve(text: &str, current_year: i32) -> Result<Resolution, TimeParseError> {
    let (time, date_text) = extract_time(text);
    match date::extract_date(&date_text, current_year)? {
        Some((year, month, day)) => Ok(Resolution::Resolved(compose(year, month, day, time)?)),
        None => Ok(Resolution::NeedsDate(PendingDate { time, original: text.to_string() })),
    }
}

impl PendingDate {
    /// The input line the automatic rules gave up on, for display in the
    /// operator prompt.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Accept an operator-supplied date in `YYYY-MM-DD` form and finish the
    /// record. Malformed entries are fatal for the record; no further
    /// inference is attempted.
    pub fn accept_manual(&self, line: &str) -> Result<NaiveDateTime, TimeParseError> {
        let fields: Vec<&str> = line.trim().split('-').collect();
        if fields.len() != 3 {
            return Err(TimeParseError::ManualFieldCount(fields.len()));
        }
        let year: i32 = fields[0]
            .trim()
            .parse()
            .map_err(|_| TimeParseError::ManualNumber(fields[0].to_string()))?;
        let month: u32 = fields[1]
            .trim()
            .parse()
            .map_err(|_| TimeParseError::ManualNumber(fields[1].to_string()))?;
        let day: u32 = fields[2]
            .trim()
            .parse()
            .map_err(|_| TimeParseError::ManualNumber(fields[2].to_string()))?;
        if !(1..=12).contains(&month) || !date::within_month(day, month, year) {
            return Err(TimeParseError::ManualInvalidDate { year, month, day });
        }
        compose(year, month, day, self.time)
    }
}

fn compose(year: i32, month: u32, day: u32, time: TimeOfDay) -> Result<NaiveDateTime, TimeParseError> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        TimeParseError::Defect(format!("assembled impossible date {year:04}-{month:02}-{day:02}"))
    })?;
    let clock = NaiveTime::from_hms_opt(time.hour, time.minute, time.second).ok_or_else(|| {
        TimeParseError::Defect(format!(
            "assembled impossible time {:02}:{:02}:{:02}",
            time.hour, time.minute, time.second
        ))
    })?;
    Ok(NaiveDateTime::new(date, clock))
}
