//! Parsing of the free-form `date` and `time` strings carried by appointments
//! into comparable instants.
//!
//! Appointments keep their date and time exactly as the caller sent them, so
//! chronological comparison happens on demand. A pair that does not parse has
//! no instant and never compares as later or earlier than anything.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Accepted time-of-day layouts, most specific first.
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

/// Combines an ISO calendar date and a time of day into a single instant.
///
/// # Example
///
/// ```
/// use doccal_core::instant::combine;
///
/// let earlier = combine("2024-01-10", "09:00").unwrap();
/// let later = combine("2024-01-10", "09:30:15").unwrap();
/// assert!(earlier < later);
/// assert!(combine("2024-13-01", "09:00").is_none());
/// ```
pub fn combine(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), DATE_FORMAT).ok()?;
    let time = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time.trim(), format).ok())?;

    Some(date.and_time(time))
}

/// Key used for slot conflict detection. Plain string concatenation, so
/// `09:00` and `09:00:00` are different slots.
pub fn slot_key(date: &str, time: &str) -> String {
    format!("{}T{}", date, time)
}
