//! timeline-rs: pure layout engine for a horizontal, zoomable goal timeline.
//!
//! Converts a set of goal records into a renderable spatial model: a
//! zoom-dependent coordinate system, per-goal pixel positions, clusters of
//! visually overlapping goals, and calendar axis marks. The crate performs
//! no I/O and holds no state between calls; persistence and rendering stay
//! in the host application.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{LayoutEngine, LayoutTuning, TimelineLayout, build_layout, build_layout_now};
pub use error::{TimelineError, TimelineResult};
