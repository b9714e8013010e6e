use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use timeline_rs::core::{Goal, TimelineConfig, ZoomLevel, position_goals};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn goal(id: &str, target_date: NaiveDate) -> Goal {
    Goal::new(id, id, Decimal::new(2_500, 0), "EUR", "safety", target_date)
}

#[test]
fn every_goal_keeps_an_entry_even_off_canvas() {
    let today = date(2026, 1, 1);
    let config = TimelineConfig::resolve(ZoomLevel::OneYear, &[], today);
    let goals = vec![
        goal("past", today - Duration::days(10)),
        goal("near", today + Duration::days(90)),
        goal("far", today + Duration::days(2_000)),
    ];

    let positions = position_goals(&goals, &config);
    assert_eq!(positions.len(), goals.len());

    assert!(!positions[0].visible);
    assert!(positions[0].x_position < 0.0);

    assert!(positions[1].visible);
    assert_eq!(positions[1].x_position, 270.0);

    assert!(!positions[2].visible);
    assert!(positions[2].x_position > config.total_width_px);
}

#[test]
fn canvas_edges_are_inclusive() {
    let today = date(2026, 1, 1);
    let config = TimelineConfig::resolve(ZoomLevel::OneYear, &[], today);
    let goals = vec![goal("at-start", today), goal("at-end", config.end_date)];

    let positions = position_goals(&goals, &config);
    assert!(positions[0].visible);
    assert_eq!(positions[0].x_position, 0.0);
    assert!(positions[1].visible);
    assert_eq!(positions[1].x_position, config.total_width_px);
}

#[test]
fn positions_carry_the_goal_untouched() {
    let today = date(2026, 5, 1);
    let config = TimelineConfig::resolve(ZoomLevel::FiveYears, &[], today);
    let original = goal("carry", date(2028, 11, 30));

    let positions = position_goals(std::slice::from_ref(&original), &config);
    assert_eq!(positions[0].goal, original);
}

#[test]
fn empty_goal_list_maps_to_no_positions() {
    let today = date(2026, 1, 1);
    let config = TimelineConfig::resolve(ZoomLevel::TenYears, &[], today);
    assert!(position_goals(&[], &config).is_empty());
}
