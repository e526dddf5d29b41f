//! Slot predicates and the small amount of date handling the reservation flow
//! needs. Dates are treated as naive calendar dates; the reference timezone is
//! configuration data and only matters to downstream consumers (see queue).

use crate::events::Message;
use crate::session::DiningReservation;
use crate::vars::{SLOT_DINING_TIME, SLOT_LOCATION};

use chrono::{Duration, NaiveDate, NaiveTime};

// Cities the platform resolves for the Location slot. Fixed, anything else is
// rejected even if plausible.
const VALID_CITIES: [&str; 27] = [
    "new york",
    "los angeles",
    "chicago",
    "houston",
    "philadelphia",
    "phoenix",
    "san antonio",
    "san diego",
    "dallas",
    "san jose",
    "austin",
    "jacksonville",
    "san francisco",
    "indianapolis",
    "columbus",
    "fort worth",
    "charlotte",
    "detroit",
    "el paso",
    "seattle",
    "denver",
    "washington dc",
    "memphis",
    "boston",
    "nashville",
    "baltimore",
    "portland",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%d %B %Y"];
const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%I:%M %p"];

pub fn is_valid_city(city: &str) -> bool {
    let lowered = city.to_lowercase();
    VALID_CITIES.iter().any(|c| *c == lowered)
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(text, f).ok())
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    TIME_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(text, f).ok())
}

pub fn is_valid_date(text: &str) -> bool {
    parse_date(text).is_some()
}

pub fn is_valid_time(text: &str) -> bool {
    parse_time(text).is_some()
}

/// Absolute number of days between two dates, symmetric in its arguments.
/// None when either side does not parse.
pub fn day_difference(a: &str, b: &str) -> Option<i64> {
    let a = parse_date(a)?;
    let b = parse_date(b)?;
    Some((a - b).num_days().abs())
}

/// Date plus a signed day count, rendered back as `%Y-%m-%d`. None when the
/// date does not parse.
pub fn add_days(date: &str, days: i64) -> Option<String> {
    let new_date = parse_date(date)? + Duration::days(days);
    Some(new_date.format("%Y-%m-%d").to_string())
}

pub struct SlotViolation {
    pub slot: &'static str,
    pub message: Message,
}

/// Checks every currently-set slot, returning the first violation so the
/// caller can re-elicit it.
pub fn validate_dining(reservation: &DiningReservation) -> Option<SlotViolation> {
    if let Some(location) = &reservation.location {
        if !is_valid_city(location) {
            return Some(SlotViolation {
                slot: SLOT_LOCATION,
                message: Message::plain(format!(
                    "We currently do not support {} as a valid destination. Can you try a different city?",
                    location
                )),
            });
        }
    }

    if let Some(time) = &reservation.dining_time {
        if !is_valid_time(time) {
            return Some(SlotViolation {
                slot: SLOT_DINING_TIME,
                message: Message::plain(
                    "I didn't get that time. What time would you like to dine?",
                ),
            });
        }
    }

    None
}
