use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Placeholder printed wherever a citation needs a date the record does not have.
pub const NO_DATE: &str = "n.d.";

/// The two date renderings the citation styles need.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicationDate {
    /// Four-digit calendar year, or [`NO_DATE`].
    pub year: String,
    /// `"May 1, 2023"`, or [`NO_DATE`].
    pub full_date: String,
}

impl PublicationDate {
    fn undated() -> Self {
        PublicationDate {
            year: NO_DATE.to_string(),
            full_date: NO_DATE.to_string(),
        }
    }
}

/// Normalise an optional ISO 8601 date string.
pub fn format_date(date: Option<&str>) -> PublicationDate {
    match date
        .and_then(parse_date)
        .filter(|d| (0..=9999).contains(&d.year()))
    {
        Some(d) => PublicationDate {
            year: format!("{:04}", d.year()),
            full_date: d.format("%B %-d, %Y").to_string(),
        },
        None => PublicationDate::undated(),
    }
}

/// Accepts timestamps and calendar dates down to a bare year. Timestamps keep their own calendar
/// date; no timezone conversion is applied.
fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    // chrono refuses partial dates, so pad them out to the first day.
    if s.len() == 7 {
        return NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok();
    }
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok().and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1));
    }
    None
}
