//! Dashboard statistics helpers.

use crate::project::ProjectStatus;
use crate::types::Timestamp;

/// Percentage of closed projects, rounded to the nearest integer.
///
/// Halfway values round to the nearest even integer (`12.5` becomes `12`).
/// A zero `total` yields `0`.
pub fn completion_percentage(closed: i64, total: i64) -> i64 {
    if total == 0 {
        return 0;
    }
    let ratio = closed as f64 / total as f64 * 100.0;
    ratio.round_ties_even() as i64
}

/// Whether a project counts as delayed at `now`.
///
/// A project is delayed when it is still running and its end date is strictly
/// before `now`. Projects without an end date are never delayed.
pub fn is_delayed(status: Option<&ProjectStatus>, end_date: Option<Timestamp>, now: Timestamp) -> bool {
    matches!(status, Some(ProjectStatus::Running)) && end_date.is_some_and(|end| end < now)
}
