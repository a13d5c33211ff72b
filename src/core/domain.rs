use serde::{Deserialize, Serialize};

use crate::core::Series;

/// Inclusive min/max pair for one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    fn fold(current: Option<Self>, v: f64) -> Option<Self> {
        Some(match current {
            None => Self { min: v, max: v },
            Some(b) => Self {
                min: b.min.min(v),
                max: b.max.max(v),
            },
        })
    }
}

/// Raw display bounds derived from the current windows.
///
/// Recomputed every tick and discarded; niceing is applied downstream by the
/// rendering side, never here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleDomains {
    pub time: Bounds,
    /// Absent when no window holds an eligible defined value this tick.
    pub value: Option<Bounds>,
}

/// Computes raw time/value bounds across post-merge, pre-retirement windows.
///
/// A window with more than one point skips its current first point (the one
/// about to be retired), so the trimmed edge cannot pull the axes backward
/// mid-scroll. No-data samples keep their time slot but add nothing to the
/// value bounds. Series left with zero eligible points are skipped; `None`
/// is returned when nothing contributes at all.
pub fn domains_for<'a, I>(series: I) -> Option<ScaleDomains>
where
    I: IntoIterator<Item = &'a Series>,
{
    let mut time: Option<Bounds> = None;
    let mut value: Option<Bounds> = None;

    for s in series {
        let skip = usize::from(s.len() > 1);
        for sample in s.points_for_display().skip(skip) {
            time = Bounds::fold(time, sample.time);
            if let Some(v) = sample.value {
                value = Bounds::fold(value, v);
            }
        }
    }

    time.map(|time| ScaleDomains { time, value })
}
