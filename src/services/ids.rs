// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Creation timestamps and workout id generation.

use chrono::{DateTime, FixedOffset, Local, TimeZone};

/// Source of creation timestamps, in the user's time zone.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock frozen at a given instant and offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    pub fn new<Tz: TimeZone>(at: DateTime<Tz>) -> Self {
        Self(at.fixed_offset())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Number of trailing epoch-millisecond digits used as the id.
const ID_DIGITS: usize = 10;

/// Generate a workout id from the last ten digits of `now` in epoch
/// milliseconds, stepping forward one millisecond while `taken` reports a
/// collision.
pub fn generate_id<Tz: TimeZone>(now: &DateTime<Tz>, taken: impl Fn(&str) -> bool) -> String {
    let mut millis = now.timestamp_millis();
    loop {
        let digits = millis.to_string();
        let id = digits[digits.len().saturating_sub(ID_DIGITS)..].to_string();
        if !taken(&id) {
            return id;
        }
        millis += 1;
    }
}
