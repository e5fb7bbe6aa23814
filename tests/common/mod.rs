// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::{DateTime, TimeZone, Utc};
use workout_tracker::config::Config;
use workout_tracker::db::{MemoryStorage, Storage, StorageError};
use workout_tracker::models::{Coords, Workout};
use workout_tracker::services::{
    FixedClock, GeolocationService, MapService, MarkerStyle, WorkoutController, WorkoutView,
};

/// Creation instant used by every test controller.
#[allow(dead_code)]
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

/// Map that records every call.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub markers: Vec<(Coords, String, MarkerStyle)>,
    pub centered: Vec<(Coords, u8)>,
    pub clears: usize,
}

impl MapService for RecordingMap {
    fn add_marker(&mut self, coords: Coords, popup_content: &str, style: &MarkerStyle) {
        self.markers
            .push((coords, popup_content.to_string(), style.clone()));
    }

    fn center_on(&mut self, coords: Coords, zoom: u8) {
        self.centered.push((coords, zoom));
    }

    fn clear_markers(&mut self) {
        self.clears += 1;
        self.markers.clear();
    }
}

/// View that records rendered ids, visibility flags and notices.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub rendered: Vec<String>,
    pub replaced: Vec<String>,
    pub clears: usize,
    pub form_open: bool,
    pub forms_hidden: usize,
    pub delete_all_visible: bool,
    pub confirmation_visible: bool,
    pub notices: Vec<String>,
}

impl WorkoutView for RecordingView {
    fn render_workout(&mut self, workout: &Workout) {
        self.rendered.push(workout.id().to_string());
    }

    fn replace_workout(&mut self, workout: &Workout) {
        self.replaced.push(workout.id().to_string());
    }

    fn clear_workouts(&mut self) {
        self.clears += 1;
        self.rendered.clear();
    }

    fn show_form(&mut self) {
        self.form_open = true;
    }

    fn hide_form(&mut self) {
        self.form_open = false;
        self.forms_hidden += 1;
    }

    fn set_delete_all_visible(&mut self, visible: bool) {
        self.delete_all_visible = visible;
    }

    fn set_confirmation_visible(&mut self, visible: bool) {
        self.confirmation_visible = visible;
    }

    fn notify(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

/// Geolocation returning a fixed answer and counting requests.
#[derive(Debug)]
pub struct StubGeolocation {
    pub position: Option<Coords>,
    pub requests: usize,
}

impl StubGeolocation {
    #[allow(dead_code)]
    pub fn at(lat: f64, lng: f64) -> Self {
        Self {
            position: Some(Coords::new(lat, lng)),
            requests: 0,
        }
    }

    #[allow(dead_code)]
    pub fn unavailable() -> Self {
        Self {
            position: None,
            requests: 0,
        }
    }
}

impl GeolocationService for StubGeolocation {
    fn current_position(&mut self) -> Result<Coords, String> {
        self.requests += 1;
        self.position.ok_or_else(|| "User denied Geolocation".to_string())
    }
}

/// Storage whose writes can be made to fail.
#[derive(Debug, Default)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub fail_writes: bool,
}

impl Storage for FlakyStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io("quota exceeded".to_string()));
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Io("storage unavailable".to_string()));
        }
        self.inner.remove_item(key)
    }
}

pub type TestController<S = MemoryStorage> =
    WorkoutController<S, RecordingMap, RecordingView, StubGeolocation>;

/// Create an initialized controller over `storage` with a located user.
#[allow(dead_code)]
pub fn test_controller<S: Storage>(storage: S) -> TestController<S> {
    test_controller_with(storage, StubGeolocation::at(51.5, -0.12))
}

/// Create an initialized controller with a specific geolocation stub.
#[allow(dead_code)]
pub fn test_controller_with<S: Storage>(storage: S, geolocation: StubGeolocation) -> TestController<S> {
    let mut controller = WorkoutController::new(
        storage,
        RecordingMap::default(),
        RecordingView::default(),
        geolocation,
        &Config::default(),
    )
    .with_clock(FixedClock::new(test_now()));
    controller.initialize();
    controller
}
