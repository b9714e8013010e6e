use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::TimelineError;

/// Goal record as supplied by the upstream repository.
///
/// Consumed read-only: the engine never validates, converts, or mutates
/// these fields. `amount`, `currency`, and `bucket` pass through untouched
/// so the renderer can label markers without a second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub amount: Decimal,
    pub currency: String,
    pub bucket: String,
    pub target_date: NaiveDate,
}

impl Goal {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
        bucket: impl Into<String>,
        target_date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            amount,
            currency: currency.into(),
            bucket: bucket.into(),
            target_date,
        }
    }
}

/// Named timeline scale controlling the visible date span and pixel density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZoomLevel {
    OneYear,
    FiveYears,
    TenYears,
    All,
}

impl ZoomLevel {
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::OneYear => "one-year",
            Self::FiveYears => "five-years",
            Self::TenYears => "ten-years",
            Self::All => "all",
        }
    }
}

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for ZoomLevel {
    type Err = TimelineError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "one-year" => Ok(Self::OneYear),
            "five-years" => Ok(Self::FiveYears),
            "ten-years" => Ok(Self::TenYears),
            "all" => Ok(Self::All),
            other => Err(TimelineError::UnknownZoomLevel(other.to_owned())),
        }
    }
}

/// A goal mapped onto the timeline canvas.
///
/// `x_position` is the raw mapped coordinate: it may be negative or exceed
/// the canvas width. `visible` is true iff the position lands inside
/// `0..=total_width_px`. Invisible positions are kept so callers can surface
/// off-timeline indicators; only clustering skips them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalPosition {
    pub goal: Goal,
    pub x_position: f64,
    pub visible: bool,
}

/// A group of visible goals whose markers sit close enough to overlap.
///
/// Members are ordered by `x_position`. A single-member cluster is just a
/// group of one; the renderer decides whether to draw an individual marker
/// or an aggregate indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Member ids sorted lexicographically and joined with `+`, so identical
    /// membership always yields an identical id.
    pub id: String,
    pub members: SmallVec<[GoalPosition; 4]>,
    /// Arithmetic mean of member x positions.
    pub x_position: f64,
    /// Earliest member target date.
    pub start_date: NaiveDate,
    /// Latest member target date.
    pub end_date: NaiveDate,
}

impl Cluster {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True when the renderer should draw an aggregate indicator instead of
    /// an individual marker.
    #[must_use]
    pub fn is_aggregate(&self) -> bool {
        self.members.len() > 1
    }
}

/// A labeled tick on the calendar axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisMark {
    pub date: NaiveDate,
    pub x_position: f64,
    pub label: String,
    /// True for year boundaries (January marks); drives a heavier gridline
    /// and bold label in the consuming renderer.
    pub major: bool,
}
