// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout controller: owns the collection and mediates every change to it.
//!
//! Each user action runs to completion:
//! 1. Validate the input and locate the workout
//! 2. Persist the resulting collection
//! 3. Commit it in memory
//! 4. Render through the view and map collaborators

use crate::config::Config;
use crate::db::{Storage, WorkoutRepository};
use crate::error::{AppError, Result};
use crate::models::{Coords, Workout, WorkoutForm};
use crate::services::collaborators::{
    GeolocationService, Intent, MapService, MarkerStyle, WorkoutView,
};
use crate::services::ids::{generate_id, Clock, SystemClock};

/// Notice shown when a workout is submitted before a map position was picked.
const NO_POSITION: &str = "Click on the map to choose where the workout happened";

/// In-memory workout collection mirrored to storage.
pub struct WorkoutController<S, M, V, G> {
    repo: WorkoutRepository<S>,
    map: M,
    view: V,
    geolocation: G,
    clock: Box<dyn Clock>,
    map_zoom: u8,
    /// Oldest first
    workouts: Vec<Workout>,
    map_loaded: bool,
    pending_click: Option<Coords>,
    delete_all_requested: bool,
}

impl<S, M, V, G> WorkoutController<S, M, V, G>
where
    S: Storage,
    M: MapService,
    V: WorkoutView,
    G: GeolocationService,
{
    pub fn new(storage: S, map: M, view: V, geolocation: G, config: &Config) -> Self {
        Self {
            repo: WorkoutRepository::new(storage, config.storage_key.clone()),
            map,
            view,
            geolocation,
            clock: Box::new(SystemClock),
            map_zoom: config.map_zoom,
            workouts: Vec::new(),
            map_loaded: false,
            pending_click: None,
            delete_all_requested: false,
        }
    }

    /// Replace the clock used for creation timestamps and ids.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // ─── Lifecycle ───────────────────────────────────────────────

    /// Hydrate the collection from storage and render it, then try to load
    /// the map at the user's position.
    ///
    /// Also used as the full reload after deletions, so any previously
    /// rendered state is cleared first.
    pub fn initialize(&mut self) {
        self.view.clear_workouts();
        self.map.clear_markers();
        self.map_loaded = false;
        self.pending_click = None;
        self.delete_all_requested = false;

        self.workouts = self.repo.load();
        for workout in &self.workouts {
            self.view.render_workout(workout);
        }
        self.view.set_confirmation_visible(false);
        self.view
            .set_delete_all_visible(!self.workouts.is_empty());
        tracing::info!(count = self.workouts.len(), "Workouts loaded");

        match self.geolocation.current_position() {
            Ok(position) => self.load_map(position),
            Err(reason) => self.report(AppError::Geolocation(reason)),
        }
    }

    /// Center the map on `position` and place a marker per stored workout.
    fn load_map(&mut self, position: Coords) {
        self.map.center_on(position, self.map_zoom);
        self.map_loaded = true;
        for workout in &self.workouts {
            Self::render_marker(&mut self.map, workout);
        }
        tracing::debug!(%position, markers = self.workouts.len(), "Map loaded");
    }

    fn render_marker(map: &mut M, workout: &Workout) {
        let style = MarkerStyle::for_kind(workout.kind());
        map.add_marker(workout.coords(), &workout.popup_content(), &style);
    }

    // ─── Intents ─────────────────────────────────────────────────

    /// Handle one user action. Domain errors are reported through the view
    /// and never returned.
    pub fn dispatch(&mut self, intent: Intent) {
        let result = match intent {
            Intent::MapClicked(coords) => {
                self.map_clicked(coords);
                Ok(())
            }
            Intent::SubmitNew(form) => match self.pending_click {
                Some(coords) => self.submit_new_workout(form, coords).map(|_| ()),
                None => Err(AppError::Validation(NO_POSITION.to_string())),
            },
            Intent::Select(id) => self.select_workout(&id).map(|_| ()),
            Intent::Edit { id, form } => self.edit_workout(&id, form),
            Intent::Delete(id) => self.delete_workout(&id),
            Intent::DeleteAll => {
                self.request_delete_all();
                Ok(())
            }
            Intent::Confirm => self.confirm_delete_all(),
            Intent::Cancel => {
                self.cancel_delete_all();
                Ok(())
            }
        };

        if let Err(e) = result {
            self.report(e);
        }
    }

    fn report(&mut self, err: AppError) {
        match &err {
            AppError::Persistence(e) => {
                tracing::error!(kind = err.kind(), error = %e, "Workout operation failed")
            }
            _ => tracing::warn!(kind = err.kind(), error = %err, "Workout operation rejected"),
        }
        self.view.notify(&err.notice());
    }

    /// Remember where the map was clicked and open the input form.
    pub fn map_clicked(&mut self, coords: Coords) {
        self.pending_click = Some(coords);
        self.view.show_form();
    }

    // ─── Operations ──────────────────────────────────────────────

    /// Validate and append a new workout at `coords`. Returns its id.
    ///
    /// On validation failure nothing changes and the form stays open.
    pub fn submit_new_workout(&mut self, form: WorkoutForm, coords: Coords) -> Result<String> {
        let now = self.clock.now();
        let id = generate_id(&now, |id| self.workouts.iter().any(|w| w.id() == id));
        let workout = Workout::create(
            id.clone(),
            now,
            coords,
            form.kind,
            form.distance,
            form.duration,
            form.value,
        )?;

        self.workouts.push(workout);
        if let Err(e) = self.repo.save(&self.workouts) {
            self.workouts.pop();
            return Err(e.into());
        }

        let workout = &self.workouts[self.workouts.len() - 1];
        if self.map_loaded {
            Self::render_marker(&mut self.map, workout);
        }
        self.view.render_workout(workout);
        self.view.hide_form();
        self.view.set_delete_all_visible(true);
        self.pending_click = None;

        tracing::info!(
            id = %id,
            kind = %workout.kind(),
            distance = workout.distance(),
            duration = workout.duration(),
            "Workout created"
        );
        Ok(id)
    }

    /// Look up a workout and center the map on it.
    pub fn select_workout(&mut self, id: &str) -> Result<&Workout> {
        let index = self.position(id)?;
        let coords = self.workouts[index].coords();
        if self.map_loaded {
            self.map.center_on(coords, self.map_zoom);
        }
        Ok(&self.workouts[index])
    }

    /// Remove a workout, persist, and reload everything from storage.
    pub fn delete_workout(&mut self, id: &str) -> Result<()> {
        self.position(id)?;

        let remaining: Vec<Workout> = self
            .workouts
            .iter()
            .filter(|w| w.id() != id)
            .cloned()
            .collect();
        self.repo.save(&remaining)?;

        tracing::info!(id, remaining = remaining.len(), "Workout deleted");
        self.initialize();
        Ok(())
    }

    /// Replace distance, duration and the discipline fields of a workout,
    /// possibly switching its kind. The workout keeps its place in the list.
    pub fn edit_workout(&mut self, id: &str, form: WorkoutForm) -> Result<()> {
        let index = self.position(id)?;
        let previous = self.workouts[index].clone();

        self.workouts[index].edit(form.kind, form.distance, form.duration, form.value)?;
        if let Err(e) = self.repo.save(&self.workouts) {
            self.workouts[index] = previous;
            return Err(e.into());
        }

        let workout = &self.workouts[index];
        self.view.replace_workout(workout);
        tracing::info!(
            id,
            from = %previous.kind(),
            to = %workout.kind(),
            "Workout edited"
        );
        Ok(())
    }

    /// First step of delete-all: hide the button and ask for confirmation.
    pub fn request_delete_all(&mut self) {
        self.delete_all_requested = true;
        self.view.set_delete_all_visible(false);
        self.view.set_confirmation_visible(true);
    }

    /// Wipe the collection and storage, then reload to the empty state.
    ///
    /// Does nothing unless `request_delete_all` was called first.
    pub fn confirm_delete_all(&mut self) -> Result<()> {
        if !self.delete_all_requested {
            tracing::debug!("Delete-all confirmation without a pending request");
            return Ok(());
        }
        self.delete_all_requested = false;

        if let Err(e) = self.repo.clear() {
            self.view.set_confirmation_visible(false);
            self.view.set_delete_all_visible(!self.workouts.is_empty());
            return Err(e.into());
        }

        tracing::info!(count = self.workouts.len(), "All workouts deleted");
        self.workouts.clear();
        self.initialize();
        Ok(())
    }

    /// Dismiss the confirmation and restore the delete-all button.
    pub fn cancel_delete_all(&mut self) {
        self.delete_all_requested = false;
        self.view.set_confirmation_visible(false);
        self.view.set_delete_all_visible(!self.workouts.is_empty());
    }

    // ─── Accessors ───────────────────────────────────────────────

    fn position(&self, id: &str) -> Result<usize> {
        self.workouts
            .iter()
            .position(|w| w.id() == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))
    }

    /// Workouts in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn get(&self, id: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn is_map_loaded(&self) -> bool {
        self.map_loaded
    }

    pub fn pending_click(&self) -> Option<Coords> {
        self.pending_click
    }

    pub fn is_delete_all_requested(&self) -> bool {
        self.delete_all_requested
    }

    pub fn repository(&self) -> &WorkoutRepository<S> {
        &self.repo
    }

    pub fn repository_mut(&mut self) -> &mut WorkoutRepository<S> {
        &mut self.repo
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn geolocation(&self) -> &G {
        &self.geolocation
    }
}
