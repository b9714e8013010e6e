use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use timeline_rs::core::{Goal, ZoomLevel};
use timeline_rs::{LayoutEngine, LayoutTuning, TimelineLayout, build_layout};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn goal(id: &str, target_date: NaiveDate) -> Goal {
    Goal::new(
        id,
        format!("Goal {id}"),
        Decimal::new(10_000, 0),
        "USD",
        "dream",
        target_date,
    )
}

fn sample_goals(today: NaiveDate) -> Vec<Goal> {
    vec![
        goal("emergency", today + Duration::days(30)),
        goal("laptop", today + Duration::days(40)),
        goal("car", today + Duration::days(300)),
        goal("house", today + Duration::days(3_000)),
        goal("overdue", today - Duration::days(15)),
    ]
}

#[test]
fn layout_composes_config_positions_clusters_and_marks() {
    let today = date(2026, 8, 23);
    let goals = sample_goals(today);

    let layout = build_layout(&goals, ZoomLevel::All, today);

    assert_eq!(layout.config.zoom_level, ZoomLevel::All);
    assert_eq!(layout.positions.len(), goals.len());
    assert!(!layout.clusters.is_empty());
    assert!(!layout.marks.is_empty());
    assert_eq!(layout.today_position, 0.0);
}

#[test]
fn clusters_partition_the_visible_goal_set_exactly() {
    let today = date(2026, 8, 23);
    let goals = sample_goals(today);

    let layout = build_layout(&goals, ZoomLevel::OneYear, today);

    let mut visible_ids: Vec<&str> = layout
        .positions
        .iter()
        .filter(|position| position.visible)
        .map(|position| position.goal.id.as_str())
        .collect();
    visible_ids.sort_unstable();

    let mut clustered_ids: Vec<&str> = layout
        .clusters
        .iter()
        .flat_map(|cluster| cluster.members.iter())
        .map(|member| member.goal.id.as_str())
        .collect();
    clustered_ids.sort_unstable();

    assert_eq!(clustered_ids, visible_ids);
}

#[test]
fn off_canvas_goals_are_reported_but_never_clustered() {
    let today = date(2026, 8, 23);
    let goals = sample_goals(today);

    let layout = build_layout(&goals, ZoomLevel::OneYear, today);

    let overdue = layout
        .positions
        .iter()
        .find(|position| position.goal.id == "overdue")
        .expect("overdue goal retained");
    assert!(!overdue.visible);
    assert!(overdue.x_position < 0.0);

    let house = layout
        .positions
        .iter()
        .find(|position| position.goal.id == "house")
        .expect("house goal retained");
    assert!(!house.visible);

    for cluster in &layout.clusters {
        assert!(
            cluster
                .members
                .iter()
                .all(|member| member.goal.id != "overdue" && member.goal.id != "house")
        );
    }
}

#[test]
fn nearby_goals_merge_under_default_threshold() {
    let today = date(2026, 8, 23);
    // 30 and 40 days out at 3 px/day: 90 px and 120 px, 30 px apart.
    let goals = sample_goals(today);

    let layout = build_layout(&goals, ZoomLevel::OneYear, today);
    let merged = layout
        .clusters
        .iter()
        .find(|cluster| cluster.id == "emergency+laptop")
        .expect("adjacent goals share a cluster");
    assert!(merged.is_aggregate());
    assert_eq!(merged.x_position, 105.0);
}

#[test]
fn empty_goal_list_still_yields_a_complete_model() {
    let today = date(2026, 8, 23);
    let layout = build_layout(&[], ZoomLevel::All, today);

    assert!(layout.positions.is_empty());
    assert!(layout.clusters.is_empty());
    assert!(!layout.marks.is_empty());
    assert!(layout.config.pixels_per_day > 0.0);
}

#[test]
fn building_twice_yields_identical_layouts() {
    let today = date(2026, 8, 23);
    let goals = sample_goals(today);
    let engine = LayoutEngine::with_defaults();

    let first = engine.build(&goals, ZoomLevel::FiveYears, today);
    let second = engine.build(&goals, ZoomLevel::FiveYears, today);
    assert_eq!(first, second);
}

#[test]
fn layout_snapshot_round_trips_through_json() {
    let today = date(2026, 8, 23);
    let goals = sample_goals(today);
    let layout = build_layout(&goals, ZoomLevel::All, today);

    let json = layout.to_json_pretty().expect("layout json");
    let restored: TimelineLayout = serde_json::from_str(&json).expect("layout roundtrip");
    assert_eq!(restored, layout);
}

#[test]
fn visible_positions_helper_filters_off_canvas_entries() {
    let today = date(2026, 8, 23);
    let goals = sample_goals(today);
    let layout = build_layout(&goals, ZoomLevel::OneYear, today);

    let visible = layout.visible_positions();
    assert_eq!(visible.len(), 3);
    assert!(visible.iter().all(|position| position.visible));
}

#[test]
fn non_positive_cluster_threshold_is_rejected() {
    for threshold in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let result = LayoutEngine::new(LayoutTuning {
            cluster_threshold_px: threshold,
        });
        assert!(result.is_err(), "threshold {threshold} should be rejected");
    }
}

#[test]
fn custom_threshold_changes_cluster_granularity() {
    let today = date(2026, 8, 23);
    let goals = sample_goals(today);

    let tight = LayoutEngine::new(LayoutTuning {
        cluster_threshold_px: 5.0,
    })
    .expect("valid tuning");
    let layout = tight.build(&goals, ZoomLevel::OneYear, today);

    // 30 px apart: too far under a 5 px threshold.
    assert!(layout.clusters.iter().all(|cluster| !cluster.is_aggregate()));
}

#[test]
fn default_tuning_uses_forty_pixel_threshold() {
    let engine = LayoutEngine::with_defaults();
    assert_eq!(engine.tuning().cluster_threshold_px, 40.0);
}
