pub mod axis;
pub mod cluster;
pub mod config;
pub mod position;
pub mod types;

pub use axis::axis_marks;
pub use cluster::{DEFAULT_CLUSTER_THRESHOLD_PX, cluster_positions};
pub use config::{MIN_PIXELS_PER_DAY, TARGET_CANVAS_WIDTH_PX, TimelineConfig};
pub use position::{date_to_position, days_between, position_goals};
pub use types::{AxisMark, Cluster, Goal, GoalPosition, ZoomLevel};
