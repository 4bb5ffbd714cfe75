//! Development seed data.
//!
//! Inserts a representative spread of readings over the previous month so
//! the calendar and charts have something to show on a fresh profile.
//! Never runs implicitly; the consumer wires it to a dev-only action.

use chrono::{Duration, Utc};
use log::info;
use rand::Rng;

use crate::error::StoreError;
use crate::tracker::Tracker;
use crate::validation::ReadingDraft;

/// One sample per band the classifier distinguishes, plus a high-pulse
/// outlier.
const SAMPLES: [(i64, i64, i64); 10] = [
    (118, 76, 72),
    (115, 74, 68),
    (112, 78, 75),
    (125, 78, 82),
    (128, 76, 85),
    (135, 88, 88),
    (138, 85, 90),
    (145, 95, 95),
    (95, 65, 58),
    (120, 80, 105),
];

/// Seed the store with demo readings spread over the last 30 days, at
/// jittered daytime hours. Returns how many were inserted.
pub async fn seed_demo_readings(tracker: &Tracker) -> Result<usize, StoreError> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let mut inserted = 0;

    for (i, (systolic, diastolic, pulse)) in SAMPLES.iter().enumerate() {
        let days_ago = (30 / SAMPLES.len()) * i;
        let timestamp = now
            - Duration::days(days_ago as i64)
            - Duration::hours(rng.gen_range(0..12))
            - Duration::minutes(rng.gen_range(0..60));

        let draft = ReadingDraft::new(*systolic, *diastolic, *pulse, timestamp);
        tracker.save_reading(&draft).await?;
        inserted += 1;
    }

    info!("Seeded {inserted} demo readings");
    Ok(inserted)
}
