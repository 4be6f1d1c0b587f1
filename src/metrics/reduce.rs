//! Point reduction for hand-drawn paths.
//!
//! # Example
//!
//! ```
//! use pathstack::{Point3, metrics::remove_colinear};
//!
//! let pts = vec![
//!     Point3::new(0.0_f64, 0.0, 0.0),
//!     Point3::new(1.0, 0.01, 0.0),
//!     Point3::new(2.0, 0.0, 0.0),
//!     Point3::new(2.0, 2.0, 0.0),
//! ];
//! let reduced = remove_colinear(&pts, 5.0, false);
//! assert_eq!(reduced.len(), 3);
//! ```

use crate::primitives::Point3;
use num_traits::Float;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Reduction never goes below a triangle.
const MIN_REMAINING: usize = 3;

const NONE: usize = usize::MAX;

/// Drops points whose direction change is below `max_angle_degrees`.
///
/// The straightest point is removed first and its neighbours are
/// re-evaluated, so the result does not depend on scan order and a second
/// pass with the same threshold removes nothing. Endpoints of open paths
/// are kept, and at least three points always remain.
pub fn remove_colinear<F: Float>(
    points: &[Point3<F>],
    max_angle_degrees: F,
    closed: bool,
) -> Vec<Point3<F>> {
    remove_colinear_indices(points, max_angle_degrees, closed)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

/// Like [`remove_colinear`] but returns the indices of kept points.
pub fn remove_colinear_indices<F: Float>(
    points: &[Point3<F>],
    max_angle_degrees: F,
    closed: bool,
) -> Vec<usize> {
    let n = points.len();
    if n <= MIN_REMAINING {
        return (0..n).collect();
    }

    let mut prev: Vec<usize> = (0..n)
        .map(|i| match i {
            0 if closed => n - 1,
            0 => NONE,
            _ => i - 1,
        })
        .collect();
    let mut next: Vec<usize> = (0..n)
        .map(|i| match i {
            _ if i == n - 1 && closed => 0,
            _ if i == n - 1 => NONE,
            _ => i + 1,
        })
        .collect();

    let mut active = vec![true; n];
    let mut generation = vec![0usize; n];
    let mut heap = BinaryHeap::new();

    let deviation = |prev: usize, i: usize, next: usize| -> F {
        let d_in = (points[i] - points[prev]).xy();
        let d_out = (points[next] - points[i]).xy();
        d_in.angle_degrees(d_out)
    };

    for i in 0..n {
        if prev[i] == NONE || next[i] == NONE {
            continue;
        }
        let angle = deviation(prev[i], i, next[i]);
        if angle < max_angle_degrees {
            heap.push(AngleEntry {
                index: i,
                angle,
                generation: 0,
            });
        }
    }

    let mut remaining = n;
    while let Some(entry) = heap.pop() {
        if remaining <= MIN_REMAINING {
            break;
        }
        let i = entry.index;
        if !active[i] || generation[i] != entry.generation {
            continue;
        }

        active[i] = false;
        remaining -= 1;
        let (p, nx) = (prev[i], next[i]);
        next[p] = nx;
        prev[nx] = p;

        for j in [p, nx] {
            generation[j] += 1;
            if prev[j] == NONE || next[j] == NONE {
                continue;
            }
            let angle = deviation(prev[j], j, next[j]);
            if angle < max_angle_degrees {
                heap.push(AngleEntry {
                    index: j,
                    angle,
                    generation: generation[j],
                });
            }
        }
    }

    (0..n).filter(|&i| active[i]).collect()
}

/// Drops points closer than `threshold` to the previously kept point.
///
/// The first point is always kept.
pub fn remove_overlapping<F: Float>(points: &[Point3<F>], threshold: F) -> Vec<Point3<F>> {
    let threshold_sq = threshold * threshold;
    let mut result: Vec<Point3<F>> = Vec::with_capacity(points.len());
    for &p in points {
        match result.last() {
            Some(last) if last.distance_squared(p) < threshold_sq => {}
            _ => result.push(p),
        }
    }
    result
}

/// Heap entry ordered so the smallest angle pops first, ties by index.
struct AngleEntry<F> {
    index: usize,
    angle: F,
    generation: usize,
}

impl<F: Float> PartialEq for AngleEntry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for AngleEntry<F> {}

impl<F: Float> PartialOrd for AngleEntry<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for AngleEntry<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .angle
            .partial_cmp(&self.angle)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}
