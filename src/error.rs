// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing notices.

use crate::db::StorageError;

/// Domain error raised by the model and the controller.
///
/// None of these escape `WorkoutController::dispatch`; they are turned into
/// view notices (or silently degraded) at the controller boundary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Workout not found: {0}")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Persistence(#[from] StorageError),

    #[error("Could not get your location: {0}")]
    Geolocation(String),
}

impl AppError {
    /// Notice shown for every rejected numeric input.
    pub const INVALID_INPUT: &'static str = "Input has to be positive numbers";

    pub fn invalid_input() -> Self {
        AppError::Validation(Self::INVALID_INPUT.to_string())
    }

    /// Text shown to the user when this error reaches the view.
    pub fn notice(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::NotFound(_) => "That workout no longer exists".to_string(),
            AppError::Persistence(_) => "Could not save your workouts".to_string(),
            AppError::Geolocation(_) => "Could not get your location".to_string(),
        }
    }

    /// Short machine-readable name used in log events.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::NotFound(_) => "not_found",
            AppError::Persistence(_) => "persistence",
            AppError::Geolocation(_) => "geolocation",
        }
    }
}

/// Result type alias for controller and model operations
pub type Result<T> = std::result::Result<T, AppError>;
