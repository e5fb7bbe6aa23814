// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collaborators the controller drives: the map, the view and geolocation.
//!
//! The controller never renders anything itself; it calls these traits and
//! receives user actions back as [`Intent`] values.

use crate::models::{Coords, Workout, WorkoutForm, WorkoutKind};

/// Popup options for a workout marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerStyle {
    /// CSS class, e.g. "running-popup"
    pub class_name: String,
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
}

impl MarkerStyle {
    pub fn for_kind(kind: WorkoutKind) -> Self {
        Self {
            class_name: format!("{}-popup", kind),
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
        }
    }
}

/// Map service showing workout markers.
pub trait MapService {
    /// Place a marker with an open popup.
    fn add_marker(&mut self, coords: Coords, popup_content: &str, style: &MarkerStyle);

    /// Pan/zoom the map to `coords`.
    fn center_on(&mut self, coords: Coords, zoom: u8);

    /// Remove every marker (used when the whole state is reloaded).
    fn clear_markers(&mut self);
}

/// Source of the user's current position.
pub trait GeolocationService {
    /// Resolve the current position, or a human-readable failure reason.
    fn current_position(&mut self) -> Result<Coords, String>;
}

/// Renderer for the workout list, the input form and notices.
pub trait WorkoutView {
    /// Render a workout list item (newest items appear on top).
    fn render_workout(&mut self, workout: &Workout);

    /// Re-render an already rendered list item in place.
    fn replace_workout(&mut self, workout: &Workout);

    /// Remove every rendered list item.
    fn clear_workouts(&mut self);

    fn show_form(&mut self);

    /// Clear the input fields and hide the form.
    fn hide_form(&mut self);

    /// Show or hide the "delete all" button.
    fn set_delete_all_visible(&mut self, visible: bool);

    /// Show or hide the delete-all confirmation modal.
    fn set_confirmation_visible(&mut self, visible: bool);

    /// Blocking notice to the user.
    fn notify(&mut self, message: &str);
}

/// User or map action delivered to `WorkoutController::dispatch`.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    MapClicked(Coords),
    SubmitNew(WorkoutForm),
    Select(String),
    Edit { id: String, form: WorkoutForm },
    Delete(String),
    DeleteAll,
    Confirm,
    Cancel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_style_for_kind() {
        let style = MarkerStyle::for_kind(WorkoutKind::Cycling);
        assert_eq!(style.class_name, "cycling-popup");
        assert_eq!((style.min_width, style.max_width), (100, 250));
        assert!(!style.auto_close);
        assert!(!style.close_on_click);
    }
}
