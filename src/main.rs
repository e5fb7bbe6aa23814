// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout-Tracker terminal front-end
//!
//! Reads commands from stdin and drives the workout controller, storing
//! workouts as JSON under the configured data directory.

use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use workout_tracker::{
    config::Config,
    console::{self, Command},
};

fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging (stderr, so it stays out of the UI)
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        storage_key = %config.storage_key,
        "Starting Workout-Tracker"
    );

    let mut app = workout_tracker::console_app(&config);
    app.initialize();
    println!("{}", console::HELP);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match console::parse_command(&line) {
            Ok(Command::Intent(intent)) => app.dispatch(intent),
            Ok(Command::List) => {
                if app.workouts().is_empty() {
                    println!("No workouts yet");
                }
                for workout in app.workouts() {
                    println!("{}", console::format_workout(workout));
                }
            }
            Ok(Command::Help) => println!("{}", console::HELP),
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    tracing::info!(count = app.workouts().len(), "Exiting");
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("workout_tracker=debug,info")),
        )
        .with(format)
        .init();
}
