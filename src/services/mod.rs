// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - workout lifecycle logic.

pub mod collaborators;
pub mod controller;
pub mod ids;

pub use collaborators::{GeolocationService, Intent, MapService, MarkerStyle, WorkoutView};
pub use controller::WorkoutController;
pub use ids::{Clock, FixedClock, SystemClock};
