//! Natural-language date parsing for search queries
//!
//! Recognizes relative words ("yesterday"), weekday references
//! ("last monday"), and explicit dates either as the whole query or
//! embedded in it ("meeting 2024-06-10"). The reference day is passed in
//! so results are deterministic.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use regex::Regex;

/// Try to extract a date from a free-text query, relative to `today`.
/// Returns None when the query carries no recognizable date expression.
pub fn parse_date(query: &str, today: NaiveDate) -> Option<NaiveDate> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return None;
    }

    if let Some(date) = whole_query_date(&q) {
        return Some(date);
    }
    if let Some(date) = relative_word(&q, today) {
        return Some(date);
    }
    if let Some(date) = embedded_iso(&q) {
        return Some(date);
    }
    if let Some(date) = embedded_slash(&q) {
        return Some(date);
    }
    if let Some(date) = embedded_month_name(&q, today) {
        return Some(date);
    }
    weekday_reference(&q, today)
}

/// Explicit date formats accepted when the whole query is a date
const WHOLE_QUERY_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%B %d, %Y",
    "%B %d %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
];

fn whole_query_date(q: &str) -> Option<NaiveDate> {
    WHOLE_QUERY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(q, fmt).ok())
}

fn relative_word(q: &str, today: NaiveDate) -> Option<NaiveDate> {
    let re = Regex::new(r"\b(today|yesterday|tomorrow)\b").unwrap();
    let word = re.captures(q)?.get(1)?.as_str();
    match word {
        "today" => Some(today),
        "yesterday" => Some(today - Duration::days(1)),
        "tomorrow" => Some(today + Duration::days(1)),
        _ => None,
    }
}

fn embedded_iso(q: &str) -> Option<NaiveDate> {
    let re = Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap();
    let caps = re.captures(q)?;
    NaiveDate::from_ymd_opt(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    )
}

/// American month/day/year, e.g. "6/10/2024"
fn embedded_slash(q: &str) -> Option<NaiveDate> {
    let re = Regex::new(r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b").unwrap();
    let caps = re.captures(q)?;
    NaiveDate::from_ymd_opt(
        caps[3].parse().ok()?,
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
    )
}

/// "june 10", "june 10, 2024", "10 june 2024"; year defaults to today's
fn embedded_month_name(q: &str, today: NaiveDate) -> Option<NaiveDate> {
    let month_day = Regex::new(
        r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+(\d{1,2})(?:st|nd|rd|th)?(?:,?\s+(\d{4}))?\b",
    )
    .unwrap();
    if let Some(caps) = month_day.captures(q) {
        let month = month_number(&caps[1])?;
        let day: u32 = caps[2].parse().ok()?;
        let year: i32 = match caps.get(3) {
            Some(y) => y.as_str().parse().ok()?,
            None => today.year(),
        };
        return NaiveDate::from_ymd_opt(year, month, day);
    }

    let day_month = Regex::new(
        r"\b(\d{1,2})(?:st|nd|rd|th)?\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*(?:\s+(\d{4}))?\b",
    )
    .unwrap();
    let caps = day_month.captures(q)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2])?;
    let year: i32 = match caps.get(3) {
        Some(y) => y.as_str().parse().ok()?,
        None => today.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(prefix: &str) -> Option<u32> {
    let month = match prefix {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// "last monday", "next fri", "this tuesday", or a bare weekday name.
/// A bare or "this" weekday resolves to the most recent occurrence on or
/// before today; "last" is strictly before today; "next" strictly after.
fn weekday_reference(q: &str, today: NaiveDate) -> Option<NaiveDate> {
    let re = Regex::new(
        r"\b(?:(last|next|this)\s+)?(monday|tuesday|wednesday|thursday|friday|saturday|sunday|mon|tue|wed|thu|fri|sat|sun)\b",
    )
    .unwrap();
    let caps = re.captures(q)?;
    let target: Weekday = caps[2].parse().ok()?;

    let base = today.weekday().num_days_from_monday() as i64;
    let wanted = target.num_days_from_monday() as i64;

    match caps.get(1).map(|m| m.as_str()) {
        Some("last") => {
            let mut back = (base - wanted).rem_euclid(7);
            if back == 0 {
                back = 7;
            }
            Some(today - Duration::days(back))
        }
        Some("next") => {
            let mut ahead = (wanted - base).rem_euclid(7);
            if ahead == 0 {
                ahead = 7;
            }
            Some(today + Duration::days(ahead))
        }
        _ => Some(today - Duration::days((base - wanted).rem_euclid(7))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-06-12 is a Wednesday
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_relative_words() {
        assert_eq!(parse_date("today", today()), Some(d(2024, 6, 12)));
        assert_eq!(parse_date("Yesterday", today()), Some(d(2024, 6, 11)));
        assert_eq!(parse_date("tomorrow", today()), Some(d(2024, 6, 13)));
        assert_eq!(parse_date("notes from yesterday", today()), Some(d(2024, 6, 11)));
    }

    #[test]
    fn test_whole_query_formats() {
        assert_eq!(parse_date("2024-06-10", today()), Some(d(2024, 6, 10)));
        assert_eq!(parse_date("6/10/2024", today()), Some(d(2024, 6, 10)));
        assert_eq!(parse_date("June 10, 2024", today()), Some(d(2024, 6, 10)));
        assert_eq!(parse_date("10 June 2024", today()), Some(d(2024, 6, 10)));
    }

    #[test]
    fn test_embedded_dates() {
        assert_eq!(
            parse_date("meeting on 2024-06-10 about budget", today()),
            Some(d(2024, 6, 10))
        );
        assert_eq!(parse_date("call on 6/3/2024", today()), Some(d(2024, 6, 3)));
        assert_eq!(parse_date("lunch june 10", today()), Some(d(2024, 6, 10)));
        assert_eq!(parse_date("lunch on 10th june", today()), Some(d(2024, 6, 10)));
    }

    #[test]
    fn test_weekday_references() {
        // Last Monday from Wednesday 2024-06-12 is 2024-06-10
        assert_eq!(parse_date("last monday", today()), Some(d(2024, 6, 10)));
        // Last Wednesday skips today back a full week
        assert_eq!(parse_date("last wednesday", today()), Some(d(2024, 6, 5)));
        // Next Friday is ahead
        assert_eq!(parse_date("next friday", today()), Some(d(2024, 6, 14)));
        // Next Wednesday is a full week ahead
        assert_eq!(parse_date("next wed", today()), Some(d(2024, 6, 19)));
        // Bare weekday: most recent occurrence on or before today
        assert_eq!(parse_date("monday", today()), Some(d(2024, 6, 10)));
        assert_eq!(parse_date("wednesday", today()), Some(d(2024, 6, 12)));
        assert_eq!(parse_date("meeting last monday", today()), Some(d(2024, 6, 10)));
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert_eq!(parse_date("2024-13-40", today()), None);
        assert_eq!(parse_date("", today()), None);
        assert_eq!(parse_date("   ", today()), None);
    }

    #[test]
    fn test_plain_keywords_have_no_date() {
        assert_eq!(parse_date("groceries budget", today()), None);
        assert_eq!(parse_date("meeting notes", today()), None);
    }
}
