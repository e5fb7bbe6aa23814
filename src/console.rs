// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Terminal front-end: text renderings of the map and view collaborators,
//! and the line-command parser that turns input into intents.

use crate::models::{Coords, Workout, WorkoutForm};
use crate::services::{GeolocationService, Intent, MapService, MarkerStyle, WorkoutView};

pub const HELP: &str = "\
Commands:
  click <lat> <lng>                              pick a position on the map
  new <running|cycling> <km> <min> <cadence|elev> log a workout at the picked position
  select <id>                                    center the map on a workout
  edit <id> <running|cycling> <km> <min> <value> replace a workout's values
  delete <id>                                    delete one workout
  delete-all                                     delete every workout (asks to confirm)
  confirm | cancel                               answer the delete-all confirmation
  list                                           show all workouts
  help | quit";

/// Render a workout the way the list shows it.
pub fn format_workout(workout: &Workout) -> String {
    let mut out = format!(
        "[{}] {} {}\n  {} {} km  ⏱ {} min",
        workout.id(),
        workout.kind().icon(),
        workout.description(),
        workout.kind().icon(),
        workout.distance(),
        workout.duration(),
    );
    if let (Some(pace), Some(cadence)) = (workout.pace(), workout.cadence()) {
        out.push_str(&format!("  ⚡️ {:.1} min/km  🦶🏼 {} spm", pace, cadence));
    }
    if let (Some(speed), Some(elevation)) = (workout.speed(), workout.elevation_gain()) {
        out.push_str(&format!("  ⚡️ {:.1} km/h  ⛰ {} m", speed, elevation));
    }
    out
}

/// Map that prints what it would draw.
#[derive(Debug, Default)]
pub struct ConsoleMap;

impl MapService for ConsoleMap {
    fn add_marker(&mut self, coords: Coords, popup_content: &str, style: &MarkerStyle) {
        println!("📍 {} {} ({})", coords, popup_content, style.class_name);
    }

    fn center_on(&mut self, coords: Coords, zoom: u8) {
        println!("🗺  map centered on {} (zoom {})", coords, zoom);
    }

    fn clear_markers(&mut self) {}
}

/// View that prints list items and notices to stdout.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl WorkoutView for ConsoleView {
    fn render_workout(&mut self, workout: &Workout) {
        println!("{}", format_workout(workout));
    }

    fn replace_workout(&mut self, workout: &Workout) {
        println!("✏️  updated\n{}", format_workout(workout));
    }

    fn clear_workouts(&mut self) {}

    fn show_form(&mut self) {
        println!("Enter: new <running|cycling> <km> <min> <cadence|elev>");
    }

    fn hide_form(&mut self) {}

    fn set_delete_all_visible(&mut self, _visible: bool) {}

    fn set_confirmation_visible(&mut self, visible: bool) {
        if visible {
            println!("Delete all workouts? Type `confirm` or `cancel`.");
        }
    }

    fn notify(&mut self, message: &str) {
        println!("⚠️  {}", message);
    }
}

/// Geolocation reporting a configured position.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocation {
    position: Option<Coords>,
}

impl FixedGeolocation {
    pub fn new(position: Option<Coords>) -> Self {
        Self { position }
    }
}

impl GeolocationService for FixedGeolocation {
    fn current_position(&mut self) -> Result<Coords, String> {
        self.position
            .ok_or_else(|| "WORKOUT_HOME_LAT/WORKOUT_HOME_LNG not set".to_string())
    }
}

/// One line of console input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Intent(Intent),
    List,
    Help,
    Quit,
}

/// Errors from parsing a console command.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Invalid(String),
}

/// Parse a console command line.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = words.split_first() else {
        return Err(ParseError::Empty);
    };

    let command = match (head, args) {
        ("click", [lat, lng]) => {
            let lat = lat.parse().map_err(|_| ParseError::Usage("click <lat> <lng>"))?;
            let lng = lng.parse().map_err(|_| ParseError::Usage("click <lat> <lng>"))?;
            Command::Intent(Intent::MapClicked(Coords::new(lat, lng)))
        }
        ("click", _) => return Err(ParseError::Usage("click <lat> <lng>")),
        ("new", [kind, distance, duration, value]) => {
            Command::Intent(Intent::SubmitNew(parse_form(kind, distance, duration, value)?))
        }
        ("new", _) => {
            return Err(ParseError::Usage(
                "new <running|cycling> <km> <min> <cadence|elev>",
            ))
        }
        ("select", [id]) => Command::Intent(Intent::Select(id.to_string())),
        ("delete", [id]) => Command::Intent(Intent::Delete(id.to_string())),
        ("select" | "delete", _) => return Err(ParseError::Usage("select|delete <id>")),
        ("edit", [id, kind, distance, duration, value]) => Command::Intent(Intent::Edit {
            id: id.to_string(),
            form: parse_form(kind, distance, duration, value)?,
        }),
        ("edit", _) => {
            return Err(ParseError::Usage(
                "edit <id> <running|cycling> <km> <min> <value>",
            ))
        }
        ("delete-all", []) => Command::Intent(Intent::DeleteAll),
        ("confirm", []) => Command::Intent(Intent::Confirm),
        ("cancel", []) => Command::Intent(Intent::Cancel),
        ("list", []) => Command::List,
        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        (other, _) => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(command)
}

fn parse_form(kind: &str, distance: &str, duration: &str, value: &str) -> Result<WorkoutForm, ParseError> {
    WorkoutForm::from_fields(kind, distance, duration, value)
        .map_err(|e| ParseError::Invalid(e.to_string()))
}
