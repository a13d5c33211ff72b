use std::collections::VecDeque;

use crate::core::Sample;

/// Returns the sample whose timestamp is closest to `t`.
///
/// Lower-bound bisection over the (strictly ascending) timestamps yields the
/// insertion index; the neighbors on either side are the only candidates.
/// The closer one wins, and an exact equidistant tie resolves to the later
/// sample. Queries outside the covered range clamp to the boundary sample.
/// Empty input yields `None` rather than a placeholder.
#[must_use]
pub fn nearest_point(points: &VecDeque<Sample>, t: f64) -> Option<Sample> {
    let i = points.partition_point(|s| s.time < t);
    let right = points.get(i).copied();
    let left = i.checked_sub(1).and_then(|j| points.get(j)).copied();

    match (left, right) {
        (None, None) => None,
        (Some(l), None) => Some(l),
        (None, Some(r)) => Some(r),
        (Some(l), Some(r)) => {
            if (r.time - t) <= (t - l.time) {
                Some(r)
            } else {
                Some(l)
            }
        }
    }
}
