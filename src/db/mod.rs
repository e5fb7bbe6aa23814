//! Persistence layer (named-slot storage).

pub mod repository;
pub mod storage;

pub use repository::WorkoutRepository;
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};

/// Slot names as constants.
pub mod slots {
    /// JSON array of all workouts, oldest first
    pub const WORKOUTS: &str = "workouts";
}
