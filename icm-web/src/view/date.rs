//! Display formatting for timestamps shown on pages, e.g. event and report times.
//!
//! Everything is shown as `dd/mm/yyyy HH:MM:ss`, in the offset the timestamp was written in.
use time::format_description::well_known::{Rfc2822, Rfc3339};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};

use crate::Error;

static DISPLAY: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]:[second]");

static NAIVE_FORMATS: &[&[BorrowedFormatItem<'static>]] = &[
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    format_description!("[year]-[month]-[day] [hour]:[minute]"),
];

static DATE_ONLY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parse a date string and format it for display.
///
/// Accepts RFC 3339, RFC 2822, `YYYY-MM-DD HH:MM[:SS]` and `YYYY-MM-DD`.
///
/// ```
/// use icm_web::view::format_date;
///
/// assert_eq!(format_date("2011-07-04T09:05:00+01:00").unwrap(), "04/07/2011 09:05:00");
/// assert_eq!(format_date("2011-07-04").unwrap(), "04/07/2011 00:00:00");
/// ```
pub fn format_date(input: &str) -> Result<String, Error> {
    let input = input.trim();

    if let Ok(date) = OffsetDateTime::parse(input, &Rfc3339) {
        return Ok(date.format(DISPLAY)?);
    }

    if let Ok(date) = OffsetDateTime::parse(input, &Rfc2822) {
        return Ok(date.format(DISPLAY)?);
    }

    for format in NAIVE_FORMATS.iter().copied() {
        if let Ok(date) = PrimitiveDateTime::parse(input, format) {
            return Ok(date.format(DISPLAY)?);
        }
    }

    if let Ok(date) = Date::parse(input, DATE_ONLY) {
        return Ok(PrimitiveDateTime::new(date, Time::MIDNIGHT).format(DISPLAY)?);
    }

    Err(Error::InvalidDate(input.to_string()))
}

/// Format a timestamp for display.
pub fn format_timestamp(timestamp: OffsetDateTime) -> Result<String, Error> {
    Ok(timestamp.format(DISPLAY)?)
}
