use chrono::NaiveDate;

use crate::core::config::TimelineConfig;
use crate::core::types::{Goal, GoalPosition};

/// Signed whole-day distance from `start` to `date`.
#[must_use]
pub fn days_between(start: NaiveDate, date: NaiveDate) -> i64 {
    date.signed_duration_since(start).num_days()
}

/// Maps a date to its pixel coordinate under `config`.
///
/// Deterministic and unclamped: dates before `start_date` map to negative
/// pixels, dates past `end_date` map beyond `total_width_px`. Callers decide
/// visibility from the raw value.
#[must_use]
pub fn date_to_position(date: NaiveDate, config: &TimelineConfig) -> f64 {
    (days_between(config.start_date, date) as f64 * config.pixels_per_day).round()
}

/// Maps every goal to a position and a visibility flag.
///
/// Off-canvas goals stay in the output (for off-timeline indicators); only
/// clustering excludes them.
#[must_use]
pub fn position_goals(goals: &[Goal], config: &TimelineConfig) -> Vec<GoalPosition> {
    goals
        .iter()
        .map(|goal| {
            let x_position = date_to_position(goal.target_date, config);
            GoalPosition {
                goal: goal.clone(),
                x_position,
                visible: (0.0..=config.total_width_px).contains(&x_position),
            }
        })
        .collect()
}
