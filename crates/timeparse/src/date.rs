//! Calendar-date extraction.
//!
//! Two automatic rules, tried in priority order on the time-stripped input:
//! a word-form month with adjacent day/year numbers, then a
//! slash/dot/hyphen-delimited numeric date. Each rule accepts only an
//! unambiguous reading; anything else falls through toward manual entry.

use regex::Regex;

use crate::error::TimeParseError;

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

/// Resolve a 2-digit year fragment against the current calendar year.
///
/// Rankings may be dated up to two years in the future; everything else
/// prefers the current century. An input outside 0-99 is a logic defect,
/// not a user error.
pub fn guess_true_year(two_digits: u32, current_year: i32) -> Result<i32, TimeParseError> {
    if two_digits > 99 {
        return Err(TimeParseError::Defect(format!(
            "two-digit year out of range: {two_digits}"
        )));
    }
    let first_two = if two_digits as i32 <= current_year % 100 + 2 {
        current_year / 100
    } else {
        current_year / 100 - 1
    };
    Ok(first_two * 100 + two_digits as i32)
}

/// Whether a given day of a given month exists.
pub fn within_month(day: u32, month: u32, year: i32) -> bool {
    if !(1..=31).contains(&day) {
        return false;
    }
    if day <= 28 || (month != 2 && day <= 30) || matches!(month, 1 | 3 | 5 | 7 | 8 | 10 | 12) {
        return true;
    }
    // only Feb 29 is left; valid in leap years
    if month == 2 && day == 29 {
        return year % 4 == 0 && year % 100 != 0 || year % 400 == 0;
    }
    false
}

/// Run the automatic date rules. `Ok(None)` means no rule produced an
/// unambiguous date and the caller should fall back to manual entry.
pub(crate) fn extract_date(
    text: &str,
    current_year: i32,
) -> Result<Option<(i32, u32, u32)>, TimeParseError> {
    if let Some(ymd) = word_form(text, current_year)? {
        return Ok(Some(ymd));
    }
    delimited(text, current_year)
}

// ---------------------------------------------------------------------------
// Rule 1: word-form month
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Alpha,
    Digit,
}

#[derive(Debug)]
struct Token<'a> {
    kind: TokenKind,
    text: &'a str,
    start: usize,
    end: usize,
}

/// Maximal ASCII-alphabetic and ASCII-digit runs; everything else separates.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut iter = text.char_indices().peekable();
    while let Some((start, c)) = iter.next() {
        let kind = if c.is_ascii_alphabetic() {
            TokenKind::Alpha
        } else if c.is_ascii_digit() {
            TokenKind::Digit
        } else {
            continue;
        };
        let mut end = start + c.len_utf8();
        while let Some(&(i, next)) = iter.peek() {
            let same = match kind {
                TokenKind::Alpha => next.is_ascii_alphabetic(),
                TokenKind::Digit => next.is_ascii_digit(),
            };
            if !same {
                break;
            }
            end = i + next.len_utf8();
            iter.next();
        }
        tokens.push(Token { kind, text: &text[start..end], start, end });
    }
    tokens
}

/// Exact month name, or the first month the word abbreviates.
fn month_for(word: &str) -> Option<u32> {
    let lower = word.to_ascii_lowercase();
    if let Some(i) = MONTHS.iter().position(|m| *m == lower) {
        return Some(i as u32 + 1);
    }
    MONTHS.iter().position(|m| m.contains(&lower)).map(|i| i as u32 + 1)
}

/// The gap between two tokens is whitespace only (possibly empty).
fn space_between(text: &str, left: &Token, right: &Token) -> bool {
    text[left.end..right.start].chars().all(char::is_whitespace)
}

/// Day candidate directly before the month word: a 1-2 digit number with an
/// optional glued ordinal suffix, optionally followed by "of"
/// ("5th of November"). Returns the digit token index and its value.
fn day_before(text: &str, tokens: &[Token], month_idx: usize) -> Option<(usize, u32)> {
    let mut right = month_idx;
    let mut j = month_idx.checked_sub(1)?;

    if tokens[j].kind == TokenKind::Alpha
        && tokens[j].text.eq_ignore_ascii_case("of")
        && space_between(text, &tokens[j], &tokens[right])
    {
        right = j;
        j = j.checked_sub(1)?;
    }
    if tokens[j].kind == TokenKind::Alpha
        && tokens[j].text.len() == 2
        && space_between(text, &tokens[j], &tokens[right])
    {
        let digit = j.checked_sub(1)?;
        if tokens[digit].kind != TokenKind::Digit || tokens[digit].end != tokens[j].start {
            return None;
        }
        right = j;
        j = digit;
    }
    if tokens[j].kind == TokenKind::Digit
        && tokens[j].text.len() <= 2
        && space_between(text, &tokens[j], &tokens[right])
    {
        return tokens[j].text.parse().ok().map(|day| (j, day));
    }
    None
}

/// Day candidate directly after the month word, allowing the filler "the"
/// ("May the 4th").
fn day_after(text: &str, tokens: &[Token], month_idx: usize) -> Option<(usize, u32)> {
    let mut left = month_idx;
    let mut j = month_idx + 1;

    if j < tokens.len()
        && tokens[j].kind == TokenKind::Alpha
        && tokens[j].text.eq_ignore_ascii_case("the")
        && space_between(text, &tokens[left], &tokens[j])
    {
        left = j;
        j += 1;
    }
    if j < tokens.len()
        && tokens[j].kind == TokenKind::Digit
        && tokens[j].text.len() <= 2
        && space_between(text, &tokens[left], &tokens[j])
    {
        return tokens[j].text.parse().ok().map(|day| (j, day));
    }
    None
}

fn word_form(text: &str, current_year: i32) -> Result<Option<(i32, u32, u32)>, TimeParseError> {
    let tokens = tokenize(text);
    let found = tokens.iter().enumerate().find_map(|(i, t)| {
        if t.kind == TokenKind::Alpha && t.text.len() >= 3 {
            month_for(t.text).map(|m| (i, m))
        } else {
            None
        }
    });
    let (month_idx, month) = match found {
        Some(hit) => hit,
        None => return Ok(None),
    };

    let before = day_before(text, &tokens, month_idx);
    let after = day_after(text, &tokens, month_idx);

    match (before, after) {
        // one adjacent number: that is the day, the leftover number is the year
        (Some((day_idx, day)), None) | (None, Some((day_idx, day))) => {
            let years: Vec<&Token> = tokens
                .iter()
                .enumerate()
                .filter(|(i, t)| {
                    *i != day_idx
                        && t.kind == TokenKind::Digit
                        && (t.text.len() == 2 || t.text.len() == 4)
                })
                .map(|(_, t)| t)
                .collect();
            if years.len() != 1 {
                return Ok(None);
            }
            let raw: u32 = match years[0].text.parse() {
                Ok(v) => v,
                Err(_) => return Ok(None),
            };
            let year = if raw < 100 { guess_true_year(raw, current_year)? } else { raw as i32 };
            if within_month(day, month, year) {
                return Ok(Some((year, month, day)));
            }
            Ok(None)
        }
        // two flanking numbers: a day/year pair in unknown order; accept
        // only if exactly one assignment names a real day
        (Some((_, first)), Some((_, second))) => {
            let first_as_year = guess_true_year(first, current_year)?;
            let second_as_year = guess_true_year(second, current_year)?;
            let first_is_day = within_month(first, month, second_as_year);
            let second_is_day = within_month(second, month, first_as_year);
            if first_is_day == second_is_day {
                return Ok(None);
            }
            if first_is_day {
                Ok(Some((second_as_year, month, first)))
            } else {
                Ok(Some((first_as_year, month, second)))
            }
        }
        (None, None) => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Rule 2: delimited numeric date
// ---------------------------------------------------------------------------

fn delimited(text: &str, current_year: i32) -> Result<Option<(i32, u32, u32)>, TimeParseError> {
    let re = Regex::new(r"(\d+)[/.-](\d+)[/.-](\d+)").unwrap();
    let caps = match re.captures(text) {
        Some(c) => c,
        None => return Ok(None),
    };
    let parse = |i: usize| caps[i].parse::<u32>().ok();
    let (first, second, third) = match (parse(1), parse(2), parse(3)) {
        (Some(a), Some(b), Some(c)) => (a, b, c),
        _ => return Ok(None),
    };

    if second > 12 {
        // only month-day-year is numerically possible
        if !(1..=12).contains(&first) {
            return Ok(None);
        }
        let year = if third > 99 { third as i32 } else { guess_true_year(third, current_year)? };
        if within_month(second, first, year) {
            return Ok(Some((year, first, second)));
        }
        return Ok(None);
    }

    if first > 12 {
        // month-day-year is impossible; the middle number is the month and
        // first/third are day/year in unknown order
        let month = second;
        if !(1..=12).contains(&month) {
            return Ok(None);
        }
        let first_as_year = if first > 99 { first as i32 } else { guess_true_year(first, current_year)? };
        let third_as_year = if third > 99 { third as i32 } else { guess_true_year(third, current_year)? };
        let first_is_day = within_month(first, month, third_as_year);
        let third_is_day = within_month(third, month, first_as_year);
        if first_is_day != third_is_day {
            return Ok(if first_is_day {
                Some((third_as_year, month, first))
            } else {
                Some((first_as_year, month, third))
            });
        }
    }

    // all three <= 12, or no unambiguous resolution
    Ok(None)
}
