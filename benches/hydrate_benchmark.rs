use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use workout_tracker::db::{MemoryStorage, WorkoutRepository};
use workout_tracker::models::{Coords, Workout};

const COLLECTION_SIZE: i64 = 1_000;

fn build_collection() -> Vec<Workout> {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 7, 0, 0).unwrap();
    (0..COLLECTION_SIZE)
        .map(|i| {
            let created = start + Duration::hours(i * 20);
            let coords = Coords::new(37.3 + (i % 50) as f64 * 0.001, -122.1);
            let id = format!("{:010}", i);
            let workout = if i % 3 == 0 {
                Workout::create_cycling(id, created, coords, 25.0, 70.0, 350.0)
            } else {
                Workout::create_running(id, created, coords, 8.0, 42.0, 168.0)
            };
            workout.expect("valid workout")
        })
        .collect()
}

fn benchmark_hydrate(c: &mut Criterion) {
    // Persist the collection once
    let mut repo = WorkoutRepository::new(MemoryStorage::new(), "workouts");
    let workouts = build_collection();
    repo.save(&workouts).expect("Failed to save workouts");

    let mut group = c.benchmark_group("workouts_slot");

    group.bench_function("load_1000", |b| b.iter(|| black_box(repo.load())));

    group.bench_function("save_1000", |b| {
        let mut scratch = WorkoutRepository::new(MemoryStorage::new(), "workouts");
        b.iter(|| scratch.save(black_box(&workouts)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_hydrate);
criterion_main!(benches);
