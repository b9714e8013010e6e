use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AxisMark, Cluster, DEFAULT_CLUSTER_THRESHOLD_PX, Goal, GoalPosition, TimelineConfig,
    ZoomLevel, axis_marks, cluster_positions, date_to_position, position_goals,
};
use crate::error::{TimelineError, TimelineResult};

/// Tuning controls for layout composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutTuning {
    /// Merge distance in pixels between position-adjacent goal markers.
    pub cluster_threshold_px: f64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            cluster_threshold_px: DEFAULT_CLUSTER_THRESHOLD_PX,
        }
    }
}

impl LayoutTuning {
    fn validate(self) -> TimelineResult<Self> {
        if !self.cluster_threshold_px.is_finite() || self.cluster_threshold_px <= 0.0 {
            return Err(TimelineError::InvalidTuning(
                "cluster threshold must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Complete renderable model for one (goal set, zoom level, today) triple.
///
/// Everything the rendering layer needs to draw the timeline: the resolved
/// coordinate system, every goal's position (including off-canvas ones),
/// the clusters over the visible set, the calendar axis marks, and the
/// pixel position of "today".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineLayout {
    pub config: TimelineConfig,
    pub positions: Vec<GoalPosition>,
    pub clusters: Vec<Cluster>,
    pub marks: Vec<AxisMark>,
    pub today_position: f64,
}

impl TimelineLayout {
    /// Positions that landed on the canvas.
    #[must_use]
    pub fn visible_positions(&self) -> Vec<&GoalPosition> {
        self.positions
            .iter()
            .filter(|position| position.visible)
            .collect()
    }

    /// Pretty JSON snapshot of the full model, for debugging and for hosts
    /// that bridge the layout to a non-Rust renderer.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Stateless layout orchestrator.
///
/// Holds nothing but validated tuning; every [`build`](Self::build) call
/// recomputes the full model from its inputs. Hosts wanting memoization key
/// it on (goal-set identity, zoom level) at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutEngine {
    tuning: LayoutTuning,
}

impl LayoutEngine {
    pub fn new(tuning: LayoutTuning) -> TimelineResult<Self> {
        Ok(Self {
            tuning: tuning.validate()?,
        })
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            tuning: LayoutTuning::default(),
        }
    }

    #[must_use]
    pub fn tuning(self) -> LayoutTuning {
        self.tuning
    }

    /// Composes resolver, positioning, clustering, and axis generation into
    /// a fresh layout. Pure: same inputs, same output, no shared state.
    #[must_use]
    pub fn build(&self, goals: &[Goal], zoom_level: ZoomLevel, today: NaiveDate) -> TimelineLayout {
        let config = TimelineConfig::resolve(zoom_level, goals, today);
        let positions = position_goals(goals, &config);
        let visible: Vec<GoalPosition> = positions
            .iter()
            .filter(|position| position.visible)
            .cloned()
            .collect();
        let clusters = cluster_positions(&visible, self.tuning.cluster_threshold_px);
        let marks = axis_marks(&config);
        let today_position = date_to_position(today, &config);

        debug!(
            zoom = zoom_level.as_tag(),
            goal_count = goals.len(),
            visible_count = visible.len(),
            cluster_count = clusters.len(),
            mark_count = marks.len(),
            "built timeline layout"
        );

        TimelineLayout {
            config,
            positions,
            clusters,
            marks,
            today_position,
        }
    }
}

/// Builds a layout with default tuning.
#[must_use]
pub fn build_layout(goals: &[Goal], zoom_level: ZoomLevel, today: NaiveDate) -> TimelineLayout {
    LayoutEngine::with_defaults().build(goals, zoom_level, today)
}

/// Builds a layout with default tuning, anchored at the local calendar date.
#[must_use]
pub fn build_layout_now(goals: &[Goal], zoom_level: ZoomLevel) -> TimelineLayout {
    build_layout(goals, zoom_level, Local::now().date_naive())
}
