// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout-Tracker: log running and cycling workouts on a map
//!
//! This crate provides the workout model (derived pace/speed and
//! descriptions) and the controller that keeps the workout list, the map
//! and local storage in sync.

pub mod config;
pub mod console;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FileStorage;
use services::WorkoutController;

/// Controller wired to the terminal front-end and file storage.
pub type ConsoleApp = WorkoutController<
    FileStorage,
    console::ConsoleMap,
    console::ConsoleView,
    console::FixedGeolocation,
>;

/// Build the terminal application from configuration.
pub fn console_app(config: &Config) -> ConsoleApp {
    WorkoutController::new(
        FileStorage::new(&config.data_dir),
        console::ConsoleMap::default(),
        console::ConsoleView::default(),
        console::FixedGeolocation::new(config.home_position),
        config,
    )
}
