//! Step-by-step walkthroughs of both algorithms.

use greedykit_core::collisions::CollisionBreakdown;
use greedykit_core::run_time::{usable_capacity, RuntimeReport};
use greedykit_core::types::Road;
use greedykit_core::Result;

/// Describe how the collision count of `road` is obtained.
pub fn explain_collisions(road: &Road) -> Result<String> {
    let breakdown = CollisionBreakdown::analyze(road.as_slice())?;
    let text = road.to_string();
    let interior = &text[breakdown.interior.clone()];

    let lines = [
        format!("road: {text}"),
        format!(
            "step 1: drop {} leading 'L' (they leave on the left)",
            breakdown.leading_left
        ),
        format!(
            "step 2: drop {} trailing 'R' (they leave on the right)",
            breakdown.trailing_right
        ),
        format!(
            "step 3: {} moving and {} stationary cars remain in '{interior}'",
            breakdown.moving(),
            breakdown.stationary
        ),
        format!("collisions: {}", breakdown.collisions),
    ];
    Ok(lines.join("\n"))
}

/// Describe how the running time in `report` was reached.
pub fn explain_run_time(report: &RuntimeReport, batteries: &[u64]) -> String {
    let t = report.run_time;
    let usable = usable_capacity(batteries, t);
    let required = report.computers as u64 * t;

    let mut lines = vec![
        format!("computers: {}", report.computers),
        format!("total capacity: {}", report.total_capacity),
        format!(
            "search space: [0, {}] ({} probes)",
            report.upper_bound, report.probes
        ),
    ];
    lines.extend(
        batteries
            .iter()
            .enumerate()
            .map(|(index, &capacity)| format!("  battery {index}: min({capacity}, {t}) = {}", capacity.min(t))),
    );
    lines.push(format!(
        "usable: {usable} >= required: {} * {t} = {required}",
        report.computers
    ));
    lines.push(format!("run time: {t}"));
    lines.join("\n")
}
