//! Piecewise-linear curves over normalized path distance.

use serde::{Deserialize, Serialize};

/// A control value at position `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub t: f32,
    pub value: f32,
}

impl Keyframe {
    pub fn new(t: f32, value: f32) -> Self {
        Self { t, value }
    }
}

/// A curve sampled by linear interpolation between keyframes.
///
/// Keyframes are kept sorted by `t`. Outside the keyed range the nearest
/// end value holds. An empty curve evaluates to zero everywhere, which is
/// the neutral value for an offset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct OffsetCurve {
    keys: Vec<Keyframe>,
}

impl OffsetCurve {
    /// The zero curve.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A constant curve.
    pub fn constant(value: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, value)])
    }

    /// The curve `f(t) = t` on `[0, 1]`.
    pub fn identity() -> Self {
        Self::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)])
    }

    /// A straight ramp from `start` at `t = 0` to `end` at `t = 1`.
    pub fn ramp(start: f32, end: f32) -> Self {
        Self::new(vec![Keyframe::new(0.0, start), Keyframe::new(1.0, end)])
    }

    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.retain(|k| k.t.is_finite() && k.value.is_finite());
        keys.sort_by(|a, b| a.t.total_cmp(&b.t));
        Self { keys }
    }

    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if t <= first.t {
            return first.value;
        }
        if t >= last.t {
            return last.value;
        }
        // first key strictly after t; t is inside the keyed range here
        let hi = self.keys.partition_point(|k| k.t <= t);
        let (a, b) = (self.keys[hi - 1], self.keys[hi]);
        let span = b.t - a.t;
        if span <= f32::EPSILON {
            return b.value;
        }
        a.value + (b.value - a.value) * ((t - a.t) / span)
    }
}

impl From<Vec<Keyframe>> for OffsetCurve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}

impl From<OffsetCurve> for Vec<Keyframe> {
    fn from(curve: OffsetCurve) -> Self {
        curve.keys
    }
}
