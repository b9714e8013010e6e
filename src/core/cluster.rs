use smallvec::SmallVec;

use crate::core::types::{Cluster, GoalPosition};

/// Default merge distance in pixels between position-adjacent markers.
pub const DEFAULT_CLUSTER_THRESHOLD_PX: f64 = 40.0;

/// Groups visible positions whose markers would visually overlap.
///
/// Single-pass greedy chain clustering: positions are sorted ascending by x
/// (tie-broken by goal id, so output is independent of input order), and a
/// goal joins the open group when its distance to the *last appended member*
/// is within `threshold_px`. A long evenly-spaced chain can therefore form
/// one cluster wider than the threshold end-to-end; that trade-off (fewer,
/// larger clusters over fragmentation) is deliberate.
///
/// Invisible positions are ignored, so the result always partitions the
/// visible set exactly.
#[must_use]
pub fn cluster_positions(positions: &[GoalPosition], threshold_px: f64) -> Vec<Cluster> {
    let mut sorted: Vec<GoalPosition> = positions
        .iter()
        .filter(|position| position.visible)
        .cloned()
        .collect();
    sorted.sort_by(|left, right| {
        left.x_position
            .total_cmp(&right.x_position)
            .then_with(|| left.goal.id.cmp(&right.goal.id))
    });

    let mut clusters = Vec::new();
    let mut open: SmallVec<[GoalPosition; 4]> = SmallVec::new();

    for position in sorted {
        let chains = open
            .last()
            .is_some_and(|last| position.x_position - last.x_position <= threshold_px);
        if !chains && !open.is_empty() {
            if let Some(cluster) = finalize(std::mem::take(&mut open)) {
                clusters.push(cluster);
            }
        }
        open.push(position);
    }

    if let Some(cluster) = finalize(open) {
        clusters.push(cluster);
    }
    clusters
}

fn finalize(members: SmallVec<[GoalPosition; 4]>) -> Option<Cluster> {
    let first = members.first()?;

    let mut start_date = first.goal.target_date;
    let mut end_date = first.goal.target_date;
    let mut sum_x = 0.0;
    for member in &members {
        start_date = start_date.min(member.goal.target_date);
        end_date = end_date.max(member.goal.target_date);
        sum_x += member.x_position;
    }

    let id = {
        let mut ids: Vec<&str> = members.iter().map(|m| m.goal.id.as_str()).collect();
        ids.sort_unstable();
        ids.join("+")
    };

    Some(Cluster {
        id,
        x_position: sum_x / members.len() as f64,
        start_date,
        end_date,
        members,
    })
}
