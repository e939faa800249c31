//! Time-of-day extraction.
//!
//! Runs before date extraction; the matched substring is removed from the
//! working string so residual digits are not mistaken for date components.

use regex::Regex;

/// Extracted clock reading. Defaults to midnight when the input carries no
/// recognizable time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Pull a time-of-day out of `text`, returning it together with the input
/// minus the matched span.
///
/// Primary form is `H(H):MM(:SS)` with an optional am/pm marker (periods
/// allowed, case-insensitive); the minute is mandatory. Fallback form is a
/// bare 1-2 digit hour glued to an am/pm marker ("7pm"). If neither
/// matches, the time is 00:00:00 and the input comes back unmodified.
pub fn extract_time(text: &str) -> (TimeOfDay, String) {
    if let Some((time, start, end)) = match_clock(text) {
        let remainder = format!("{}{}", &text[..start], &text[end..]);
        return (normalize(time), remainder);
    }
    if let Some((time, start, end)) = match_bare_hour(text) {
        let remainder = format!("{}{}", &text[..start], &text[end..]);
        return (normalize(time), remainder);
    }
    (TimeOfDay::default(), text.to_string())
}

/// Raw match before am/pm adjustment. `marker` is the am/pm letter, if any.
struct ClockMatch {
    hour: u32,
    minute: u32,
    second: u32,
    marker: Option<char>,
}

fn match_clock(text: &str) -> Option<(ClockMatch, usize, usize)> {
    let re = Regex::new(r"(\d{1,2}):(\d{2})(?::(\d{2}))?").unwrap();
    let ampm = Regex::new(r"^\s*([AaPp])\.?[Mm]\.?").unwrap();

    for caps in re.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        // A digit right after the match means this wasn't a clock reading
        // (e.g. "12:345").
        if text[whole.end()..].starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }

        let mut end = whole.end();
        let mut marker = None;
        if let Some(m) = ampm.captures(&text[whole.end()..]) {
            marker = m.get(1).unwrap().as_str().chars().next();
            end += m.get(0).unwrap().end();
        }

        let clock = ClockMatch {
            hour: caps[1].parse().unwrap_or(0),
            minute: caps[2].parse().unwrap_or(0),
            second: caps.get(3).map_or(0, |s| s.as_str().parse().unwrap_or(0)),
            marker,
        };
        return Some((clock, whole.start(), end));
    }
    None
}

fn match_bare_hour(text: &str) -> Option<(ClockMatch, usize, usize)> {
    let re = Regex::new(r"(\d{1,2})\s*([AaPp])\.?[Mm]\.?").unwrap();
    let caps = re.captures(text)?;
    let whole = caps.get(0).unwrap();
    let clock = ClockMatch {
        hour: caps[1].parse().unwrap_or(0),
        minute: 0,
        second: 0,
        marker: caps.get(2).and_then(|m| m.as_str().chars().next()),
    };
    Some((clock, whole.start(), whole.end()))
}

/// Apply the am/pm rules; a reading with out-of-range components drops to
/// midnight (the span is still stripped by the caller).
fn normalize(clock: ClockMatch) -> TimeOfDay {
    let mut hour = clock.hour;
    match clock.marker.map(|c| c.to_ascii_lowercase()) {
        Some('a') if hour == 12 => hour = 0,
        Some('p') if hour < 12 => hour += 12,
        _ => {}
    }
    if hour > 23 || clock.minute > 59 || clock.second > 59 {
        return TimeOfDay::default();
    }
    TimeOfDay { hour, minute: clock.minute, second: clock.second }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32, s: u32) -> TimeOfDay {
        TimeOfDay { hour: h, minute: m, second: s }
    }

    #[test]
    fn full_clock_with_seconds() {
        let (t, rest) = extract_time("March 5, 2024 14:30:00");
        assert_eq!(t, time(14, 30, 0));
        assert_eq!(rest, "March 5, 2024 ");
    }

    #[test]
    fn pm_marker_shifts_hour() {
        let (t, rest) = extract_time("5/3/99 2:15pm");
        assert_eq!(t, time(14, 15, 0));
        assert_eq!(rest, "5/3/99 ");
    }

    #[test]
    fn dotted_marker() {
        let (t, _) = extract_time("12:30 a.m.");
        assert_eq!(t, time(0, 30, 0));
    }

    #[test]
    fn noon_unchanged_by_pm() {
        let (t, _) = extract_time("12:00 PM");
        assert_eq!(t, time(12, 0, 0));
    }

    #[test]
    fn bare_hour_fallback() {
        let (t, rest) = extract_time("June 1 2024 7pm");
        assert_eq!(t, time(19, 0, 0));
        assert_eq!(rest, "June 1 2024 ");
    }

    #[test]
    fn no_time_returns_input_unmodified() {
        let (t, rest) = extract_time("March 5, 2024");
        assert_eq!(t, TimeOfDay::default());
        assert_eq!(rest, "March 5, 2024");
    }

    #[test]
    fn hour_without_minute_or_marker_is_not_a_time() {
        let (t, rest) = extract_time("updated at 7");
        assert_eq!(t, TimeOfDay::default());
        assert_eq!(rest, "updated at 7");
    }

    #[test]
    fn trailing_digit_rejects_clock() {
        // "12:345" is not a clock reading
        let (t, rest) = extract_time("12:345");
        assert_eq!(t, TimeOfDay::default());
        assert_eq!(rest, "12:345");
    }

    #[test]
    fn out_of_range_reading_drops_to_midnight_but_strips() {
        let (t, rest) = extract_time("jan 5 2024 25:99");
        assert_eq!(t, TimeOfDay::default());
        assert_eq!(rest, "jan 5 2024 ");
    }

    #[test]
    fn twelve_am_is_midnight() {
        let (t, _) = extract_time("12:05am");
        assert_eq!(t, time(0, 5, 0));
    }
}
