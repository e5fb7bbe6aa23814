// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Datelike, TimeZone};

#[rustfmt::skip]
pub const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Format the calendar date as "<Month name> <day>", e.g. "October 16".
///
/// The date is taken in the time zone `date` carries.
pub fn month_day<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.day())
}
