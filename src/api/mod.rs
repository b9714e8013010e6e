mod layout;

pub use layout::{LayoutEngine, LayoutTuning, TimelineLayout, build_layout, build_layout_now};
