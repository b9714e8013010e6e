use chrono::{Datelike, NaiveDate};

use crate::core::config::TimelineConfig;
use crate::core::position::date_to_position;
use crate::core::types::{AxisMark, ZoomLevel};

/// Produces calendar tick marks for a resolved config.
///
/// Walks month boundaries from the first day of the month *after*
/// `start_date` through `end_date`. January is always emitted with a
/// 4-digit-year label and flagged major. At one-year/five-years zoom the
/// remaining months get minor short-name marks; at ten-years/all zoom only
/// July joins January and the other ten months produce nothing at all.
#[must_use]
pub fn axis_marks(config: &TimelineConfig) -> Vec<AxisMark> {
    let mut marks = Vec::new();
    let mut cursor = first_of_next_month(config.start_date);

    while cursor <= config.end_date {
        if let Some(mark) = mark_for_month(cursor, config) {
            marks.push(mark);
        }
        let next = first_of_next_month(cursor);
        if next <= cursor {
            break;
        }
        cursor = next;
    }

    marks
}

fn mark_for_month(date: NaiveDate, config: &TimelineConfig) -> Option<AxisMark> {
    if date.month() == 1 {
        return Some(AxisMark {
            date,
            x_position: date_to_position(date, config),
            label: date.year().to_string(),
            major: true,
        });
    }

    let emit_minor = match config.zoom_level {
        ZoomLevel::OneYear | ZoomLevel::FiveYears => true,
        ZoomLevel::TenYears | ZoomLevel::All => date.month() == 7,
    };

    emit_minor.then(|| AxisMark {
        date,
        x_position: date_to_position(date, config),
        label: date.format("%b").to_string(),
        major: false,
    })
}

fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // Only fails at the far edge of chrono's calendar; absorbed by the
    // caller's forward-progress check.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}
