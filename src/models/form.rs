// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Values entered in the new-workout and edit forms.

use crate::error::Result;
use crate::models::workout::WorkoutKind;
use serde::{Deserialize, Serialize};

/// Form submission payload.
///
/// `value` is the cadence for running and the elevation gain for cycling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance: f64,
    pub duration: f64,
    pub value: f64,
}

impl WorkoutForm {
    pub fn new(kind: WorkoutKind, distance: f64, duration: f64, value: f64) -> Self {
        Self {
            kind,
            distance,
            duration,
            value,
        }
    }

    /// Build a form from raw text inputs.
    ///
    /// Numeric fields never fail here; unparsable text becomes NaN and is
    /// rejected later by workout validation.
    pub fn from_fields(kind: &str, distance: &str, duration: &str, value: &str) -> Result<Self> {
        Ok(Self {
            kind: kind.parse()?,
            distance: parse_field(distance),
            duration: parse_field(duration),
            value: parse_field(value),
        })
    }
}

/// Parse a numeric input field. A blank field reads as 0.
pub fn parse_field(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}
