// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout model: the two disciplines, their derived metrics and descriptions.

use crate::error::{AppError, Result};
use crate::models::record::WorkoutRecord;
use crate::time_utils::month_day;
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the kind and the date in a workout description.
const DESCRIPTION_SEPARATOR: &str = " on ";

/// Geographic position of a workout, serialized as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coords> for [f64; 2] {
    fn from(c: Coords) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lat, self.lng)
    }
}

/// Workout discipline discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Lowercase name, as stored and as used in CSS classes.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Capitalized name used in descriptions.
    pub fn title(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "🏃",
            WorkoutKind::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => Ok(WorkoutKind::Running),
            "cycling" => Ok(WorkoutKind::Cycling),
            other => Err(AppError::Validation(format!(
                "Unknown workout type: {}",
                other
            ))),
        }
    }
}

/// Discipline-specific inputs. Derived metrics are computed from the shared
/// distance/duration, so they can never go stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discipline {
    /// Cadence in steps/min
    Running { cadence: u32 },
    /// Elevation gain in meters
    Cycling { elevation_gain: f64 },
}

impl Discipline {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Discipline::Running { .. } => WorkoutKind::Running,
            Discipline::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Validate raw inputs against the rules of `kind`.
    ///
    /// Every value must be finite; distance, duration and cadence must be
    /// strictly positive. Elevation gain is only checked for finiteness.
    pub fn validate(kind: WorkoutKind, distance: f64, duration: f64, value: f64) -> Result<Self> {
        let finite = [distance, duration, value].iter().all(|v| v.is_finite());
        if !finite || distance <= 0.0 || duration <= 0.0 {
            return Err(AppError::invalid_input());
        }

        match kind {
            WorkoutKind::Running => {
                if value <= 0.0 {
                    return Err(AppError::invalid_input());
                }
                if value.fract() != 0.0 || value > u32::MAX as f64 {
                    return Err(AppError::Validation(
                        "Cadence has to be a whole number".to_string(),
                    ));
                }
                Ok(Discipline::Running {
                    cadence: value as u32,
                })
            }
            WorkoutKind::Cycling => Ok(Discipline::Cycling {
                elevation_gain: value,
            }),
        }
    }
}

/// A logged workout session.
///
/// Serializes through [`WorkoutRecord`], so a stored record that breaks any
/// model invariant fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WorkoutRecord", into = "WorkoutRecord")]
pub struct Workout {
    id: String,
    created_at: DateTime<Utc>,
    coords: Coords,
    /// Distance in km
    distance: f64,
    /// Duration in min
    duration: f64,
    description: String,
    discipline: Discipline,
}

impl Workout {
    /// Create a running workout from validated inputs.
    pub fn create_running<Tz: TimeZone>(
        id: impl Into<String>,
        created_at: DateTime<Tz>,
        coords: Coords,
        distance: f64,
        duration: f64,
        cadence: f64,
    ) -> Result<Self> {
        Self::create(
            id,
            created_at,
            coords,
            WorkoutKind::Running,
            distance,
            duration,
            cadence,
        )
    }

    /// Create a cycling workout from validated inputs.
    pub fn create_cycling<Tz: TimeZone>(
        id: impl Into<String>,
        created_at: DateTime<Tz>,
        coords: Coords,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    ) -> Result<Self> {
        Self::create(
            id,
            created_at,
            coords,
            WorkoutKind::Cycling,
            distance,
            duration,
            elevation_gain,
        )
    }

    /// Create a workout of either kind. `value` is the cadence for running
    /// and the elevation gain for cycling.
    ///
    /// `created_at` is the creation instant in the user's time zone; the
    /// description uses that calendar date while the stored timestamp is UTC.
    pub fn create<Tz: TimeZone>(
        id: impl Into<String>,
        created_at: DateTime<Tz>,
        coords: Coords,
        kind: WorkoutKind,
        distance: f64,
        duration: f64,
        value: f64,
    ) -> Result<Self> {
        if !coords.is_finite() {
            return Err(AppError::Validation("Invalid map position".to_string()));
        }
        let discipline = Discipline::validate(kind, distance, duration, value)?;
        Ok(Self {
            id: id.into(),
            description: describe(kind, &created_at),
            created_at: created_at.with_timezone(&Utc),
            coords,
            distance,
            duration,
            discipline,
        })
    }

    /// Rebuild a workout from already-stored parts, keeping the stored
    /// description. Inputs are re-validated.
    pub(crate) fn restore(
        id: String,
        created_at: DateTime<Utc>,
        coords: Coords,
        distance: f64,
        duration: f64,
        description: String,
        discipline: Discipline,
    ) -> Result<Self> {
        let value = match discipline {
            Discipline::Running { cadence } => cadence as f64,
            Discipline::Cycling { elevation_gain } => elevation_gain,
        };
        let mut workout = Self::create(
            id,
            created_at,
            coords,
            discipline.kind(),
            distance,
            duration,
            value,
        )?;
        workout.description = description;
        Ok(workout)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> Coords {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    pub fn kind(&self) -> WorkoutKind {
        self.discipline.kind()
    }

    pub fn cadence(&self) -> Option<u32> {
        match self.discipline {
            Discipline::Running { cadence } => Some(cadence),
            Discipline::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain(&self) -> Option<f64> {
        match self.discipline {
            Discipline::Cycling { elevation_gain } => Some(elevation_gain),
            Discipline::Running { .. } => None,
        }
    }

    /// Pace in min/km (running only).
    pub fn pace(&self) -> Option<f64> {
        match self.discipline {
            Discipline::Running { .. } => Some(self.duration / self.distance),
            Discipline::Cycling { .. } => None,
        }
    }

    /// Speed in km/h (cycling only).
    pub fn speed(&self) -> Option<f64> {
        match self.discipline {
            Discipline::Cycling { .. } => Some(self.distance / (self.duration / 60.0)),
            Discipline::Running { .. } => None,
        }
    }

    /// Regenerate the description from the kind and the creation date in
    /// the local time zone.
    pub fn recompute(&mut self) {
        self.description = describe(self.kind(), &self.created_at.with_timezone(&Local));
    }

    /// Replace distance, duration and the whole discipline field set.
    ///
    /// The new kind is spliced in front of the existing description's date
    /// suffix, so the description keeps the date it was first written with.
    /// Nothing is modified when validation fails.
    pub fn edit(&mut self, kind: WorkoutKind, distance: f64, duration: f64, value: f64) -> Result<()> {
        let discipline = Discipline::validate(kind, distance, duration, value)?;

        self.distance = distance;
        self.duration = duration;
        self.discipline = discipline;
        match splice_description(&self.description, kind) {
            Some(description) => self.description = description,
            None => self.recompute(),
        }
        Ok(())
    }

    /// Popup text for the map marker, e.g. "🏃 Running on October 16".
    pub fn popup_content(&self) -> String {
        format!("{} {}", self.kind().icon(), self.description)
    }
}

/// Human-readable description: "<Kind> on <Month> <day>", dated in the
/// time zone `created_at` carries.
pub fn describe<Tz: TimeZone>(kind: WorkoutKind, created_at: &DateTime<Tz>) -> String {
    format!(
        "{}{}{}",
        kind.title(),
        DESCRIPTION_SEPARATOR,
        month_day(created_at)
    )
}

/// Replace the leading kind word of `description`, keeping its " on <date>"
/// suffix. Returns `None` when the description has no such suffix.
pub fn splice_description(description: &str, kind: WorkoutKind) -> Option<String> {
    let at = description.find(DESCRIPTION_SEPARATOR)?;
    Some(format!("{}{}", kind.title(), &description[at..]))
}
