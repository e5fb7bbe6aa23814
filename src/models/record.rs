// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Plain workout record as stored in the `workouts` slot and handed to the view.

use crate::error::AppError;
use crate::models::workout::{Coords, Discipline, Workout, WorkoutKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Stored workout record.
///
/// Exactly one of `cadence`/`pace` (running) or `elevationGain`/`speed`
/// (cycling) is written. The derived `pace`/`speed` values are informational
/// and recomputed on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutRecord {
    pub id: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub created_at: DateTime<Utc>,
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    pub coords: Coords,
    /// Distance in km
    pub distance: f64,
    /// Duration in min
    pub duration: f64,
    #[cfg_attr(feature = "binding-generation", ts(type = "\"running\" | \"cycling\""))]
    pub kind: WorkoutKind,
    pub description: String,
    /// Steps/min
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<u32>,
    /// min/km
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<f64>,
    /// Meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain: Option<f64>,
    /// km/h
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

impl From<&Workout> for WorkoutRecord {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id().to_string(),
            created_at: w.created_at(),
            coords: w.coords(),
            distance: w.distance(),
            duration: w.duration(),
            kind: w.kind(),
            description: w.description().to_string(),
            cadence: w.cadence(),
            pace: w.pace(),
            elevation_gain: w.elevation_gain(),
            speed: w.speed(),
        }
    }
}

impl From<Workout> for WorkoutRecord {
    fn from(w: Workout) -> Self {
        Self::from(&w)
    }
}

impl TryFrom<WorkoutRecord> for Workout {
    type Error = AppError;

    fn try_from(record: WorkoutRecord) -> Result<Self, Self::Error> {
        let discipline = match record.kind {
            WorkoutKind::Running => Discipline::Running {
                cadence: record.cadence.ok_or_else(|| {
                    AppError::Validation(format!("Running workout {} has no cadence", record.id))
                })?,
            },
            WorkoutKind::Cycling => Discipline::Cycling {
                elevation_gain: record.elevation_gain.ok_or_else(|| {
                    AppError::Validation(format!(
                        "Cycling workout {} has no elevation gain",
                        record.id
                    ))
                })?,
            },
        };

        Workout::restore(
            record.id,
            record.created_at,
            record.coords,
            record.distance,
            record.duration,
            record.description,
            discipline,
        )
    }
}
