// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod form;
pub mod record;
pub mod workout;

pub use form::WorkoutForm;
pub use record::WorkoutRecord;
pub use workout::{describe, Coords, Discipline, Workout, WorkoutKind};
