use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{Goal, ZoomLevel};

/// Floor applied whenever a degenerate computation would yield a
/// non-positive pixel density.
pub const MIN_PIXELS_PER_DAY: f64 = 0.3;

/// Width the `all` zoom level aims for regardless of how far goals spread.
pub const TARGET_CANVAS_WIDTH_PX: f64 = 2000.0;

const ONE_YEAR_PIXELS_PER_DAY: f64 = 3.0;
const FIVE_YEARS_PIXELS_PER_DAY: f64 = 1.0;
const TEN_YEARS_PIXELS_PER_DAY: f64 = 0.5;

const ALL_MIN_SPAN_MONTHS: u32 = 24;
const ALL_SPAN_BUFFER_RATIO: f64 = 0.1;

/// Resolved coordinate system for one (zoom level, goal set) pair.
///
/// Created fresh per layout call and never mutated; any input change is
/// answered with a new config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineConfig {
    pub zoom_level: ZoomLevel,
    /// The caller's "today" (a calendar date, i.e. local midnight).
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Strictly positive pixel density.
    pub pixels_per_day: f64,
    /// Whole-pixel canvas width, >= 0.
    pub total_width_px: f64,
}

impl TimelineConfig {
    /// Resolves the coordinate system for a zoom level and goal set.
    ///
    /// Fixed levels use a constant pixel density over a calendar span from
    /// `today`. `All` fits the span to the furthest goal (floored at 24
    /// months out), pads it by 10%, and picks a density that keeps the
    /// canvas near [`TARGET_CANVAS_WIDTH_PX`].
    #[must_use]
    pub fn resolve(zoom_level: ZoomLevel, goals: &[Goal], today: NaiveDate) -> Self {
        let config = match zoom_level {
            ZoomLevel::OneYear => Self::fixed_span(zoom_level, today, 12, ONE_YEAR_PIXELS_PER_DAY),
            ZoomLevel::FiveYears => {
                Self::fixed_span(zoom_level, today, 60, FIVE_YEARS_PIXELS_PER_DAY)
            }
            ZoomLevel::TenYears => {
                Self::fixed_span(zoom_level, today, 120, TEN_YEARS_PIXELS_PER_DAY)
            }
            ZoomLevel::All => Self::fit_all(goals, today),
        };

        debug!(
            zoom = config.zoom_level.as_tag(),
            start = %config.start_date,
            end = %config.end_date,
            pixels_per_day = config.pixels_per_day,
            total_width_px = config.total_width_px,
            "resolved timeline config"
        );
        config
    }

    fn fixed_span(
        zoom_level: ZoomLevel,
        today: NaiveDate,
        span_months: u32,
        pixels_per_day: f64,
    ) -> Self {
        let end_date = add_months(today, span_months);
        Self::from_range(zoom_level, today, end_date, pixels_per_day)
    }

    fn fit_all(goals: &[Goal], today: NaiveDate) -> Self {
        let floor = add_months(today, ALL_MIN_SPAN_MONTHS);
        let furthest = goals
            .iter()
            .map(|goal| goal.target_date)
            .max()
            .map_or(floor, |date| date.max(floor));

        let span_days = (furthest - today).num_days().max(1);
        let buffer_days = (span_days as f64 * ALL_SPAN_BUFFER_RATIO).round() as i64;
        let end_date = furthest
            .checked_add_signed(Duration::days(buffer_days))
            .unwrap_or(furthest);

        let total_days = (end_date - today).num_days().max(1) as f64;
        let pixels_per_day = (TARGET_CANVAS_WIDTH_PX / total_days).max(MIN_PIXELS_PER_DAY);
        Self::from_range(ZoomLevel::All, today, end_date, pixels_per_day)
    }

    fn from_range(
        zoom_level: ZoomLevel,
        start_date: NaiveDate,
        end_date: NaiveDate,
        pixels_per_day: f64,
    ) -> Self {
        // Degenerate densities are absorbed, not rejected.
        let pixels_per_day = if pixels_per_day.is_finite() && pixels_per_day > 0.0 {
            pixels_per_day
        } else {
            MIN_PIXELS_PER_DAY
        };

        let total_days = (end_date - start_date).num_days().max(0) as f64;
        Self {
            zoom_level,
            start_date,
            end_date,
            pixels_per_day,
            total_width_px: (total_days * pixels_per_day).round(),
        }
    }
}

/// Calendar-month addition that absorbs out-of-range results instead of
/// panicking.
pub(crate) fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months)).unwrap_or(date)
}
