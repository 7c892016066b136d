// Duration statistics over level progressions.
// Turns cached collection pages into per-level durations and an average.

use chrono::{DateTime, Utc};

use crate::wanikani::Collection;

/// Seconds in a day, for expressing durations as fractional days.
const SECS_PER_DAY: f64 = 86_400.0;

/// Duration of one level, in days.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelDuration {
    pub level: u32,
    pub days: f64,
    /// False while the level is still in progress (`passed_at` null).
    pub completed: bool,
}

/// Chart-ready view of the level progression data.
#[derive(Debug, Clone, Default)]
pub struct ChartData {
    pub durations: Vec<LevelDuration>,
    pub average_days: f64,
}

impl ChartData {
    pub fn max_level(&self) -> u32 {
        self.durations.iter().map(|d| d.level).max().unwrap_or(0)
    }
}

/// Elapsed time from `start` to `end` in fractional days.
///
/// A null `end` means the level is still in progress, so `now` is used as the
/// end bound. `now` is always passed in by the caller, never read from the
/// system clock here.
pub fn duration_days(
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> f64 {
    let end = end.unwrap_or(now);
    let diff = end.signed_duration_since(start);
    diff.num_seconds() as f64 / SECS_PER_DAY
}

/// Arithmetic mean. Empty input yields 0.0 rather than NaN.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Compute per-level durations from cached pages, in the order the API
/// returned them, plus the overall average.
///
/// Progressions that were never started (null `started_at`) carry no duration
/// and are skipped.
pub fn level_durations(pages: &[Collection], now: DateTime<Utc>) -> ChartData {
    let mut durations = Vec::new();

    for page in pages {
        for resource in &page.data {
            let progression = &resource.data;
            let Some(started_at) = progression.started_at else {
                continue;
            };

            durations.push(LevelDuration {
                level: progression.level,
                days: duration_days(started_at, progression.passed_at, now),
                completed: progression.passed_at.is_some(),
            });
        }
    }

    let days: Vec<f64> = durations.iter().map(|d| d.days).collect();
    let average_days = mean(&days);

    ChartData {
        durations,
        average_days,
    }
}
