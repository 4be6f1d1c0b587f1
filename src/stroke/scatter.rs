//! Discrete elements along edges and at path ends.

use crate::layer::{LayerConfig, Outline};
use crate::scatter::{place_element, Element, ElementSite, MAX_ELEMENTS};
use tracing::warn;

/// Distance between element centers along an edge.
pub fn scatter_step(layer: &LayerConfig) -> f32 {
    crate::scatter::clamp_size(layer.scale.size).abs() * 2.0 * layer.position.spacing
}

fn count_on(length: f32, step: f32) -> usize {
    if length < step {
        0
    } else {
        (length / step).floor() as usize
    }
}

/// Spaces elements along every edge whose outward normal passes the
/// layer's angular filter.
///
/// An edge of length `L` holds `floor(L / step)` elements starting at its
/// first point. Edges shorter than one step hold none. Culled elements
/// still consume their index.
pub fn scatter_edge(outline: &Outline, layer: &LayerConfig) -> Vec<Element> {
    let segments = outline.segment_count();
    if segments == 0 {
        return Vec::new();
    }
    let step = scatter_step(layer);
    let lengths = outline.cumulative_lengths();
    let total = lengths[segments];

    let planned: usize = (0..segments)
        .map(|i| count_on(lengths[i + 1] - lengths[i], step))
        .sum();
    if planned > MAX_ELEMENTS {
        warn!(layer = %layer.name, planned, "edge scatter exceeds element budget, layer skipped");
        return Vec::new();
    }

    let mut elements = Vec::with_capacity(planned);
    let mut index = 0u32;
    for i in 0..segments {
        let Some(direction) = outline.direction(i) else {
            continue;
        };
        if !layer.exists_in_direction(direction.perpendicular()) {
            continue;
        }
        let length = lengths[i + 1] - lengths[i];
        let count = count_on(length, step);
        let (a, b) = outline.segment(i);
        for k in 0..count {
            let frac = k as f32 / count as f32;
            let site = ElementSite {
                position: outline.points[a].lerp(outline.points[b], frac),
                direction,
                t: if total > 0.0 {
                    (lengths[i] + length * frac) / total
                } else {
                    0.0
                },
                size: outline.size_at(i, frac),
                tint: outline.color_at(i, frac),
            };
            elements.extend(place_element(layer, &site, index));
            index += 1;
        }
    }
    elements
}

/// One element at each end of an open path, pointing away from the path.
///
/// Closed paths have no ends and produce nothing.
pub fn scatter_caps(outline: &Outline, layer: &LayerConfig) -> Vec<Element> {
    let n = outline.len();
    if outline.closed || n < 2 {
        return Vec::new();
    }
    let first = (0..n - 1).find_map(|i| outline.direction(i));
    let last = (0..n - 1).rev().find_map(|i| outline.direction(i));
    let (Some(first), Some(last)) = (first, last) else {
        return Vec::new();
    };

    let ends = [(0, -first, 0.0), (n - 1, last, 1.0)];
    ends.iter()
        .enumerate()
        .filter_map(|(index, &(point, direction, t))| {
            let site = ElementSite {
                position: outline.points[point],
                direction,
                t,
                size: outline.sizes[point],
                tint: outline.colors[point],
            };
            place_element(layer, &site, index as u32)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use approx::assert_relative_eq;

    fn line(length: f32) -> Outline {
        let path = Path::from_xy(&[(0.0, 0.0), (length, 0.0)], false);
        Outline::new(&path, &LayerConfig::scatter_edge())
    }

    #[test]
    fn test_count_follows_step() {
        let layer = LayerConfig::scatter_edge().size(0.5).spacing(1.0);
        let elements = scatter_edge(&line(10.0), &layer);
        assert_eq!(elements.len(), 10);
        assert_relative_eq!(elements[3].position.x, 3.0);
        assert_eq!(elements[9].index, 9);
    }

    #[test]
    fn test_short_edge_holds_nothing() {
        let layer = LayerConfig::scatter_edge().size(2.0);
        assert!(scatter_edge(&line(3.0), &layer).is_empty());
    }

    #[test]
    fn test_culled_elements_keep_index() {
        let layer = LayerConfig::scatter_edge().size(0.5).frequency(0.5).seed(11);
        let elements = scatter_edge(&line(40.0), &layer);
        assert!(elements.len() < 40);
        assert!(elements.windows(2).all(|w| w[0].index < w[1].index));
        assert!(elements.iter().any(|e| e.index as usize >= elements.len()));
    }

    #[test]
    fn test_angular_filter_skips_edges() {
        // clockwise square: only the top edge faces up
        let path = Path::from_xy(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)], true);
        let layer = LayerConfig::scatter_edge().size(0.5).placement_range(1.0);
        let outline = Outline::new(&path, &layer);
        let elements = scatter_edge(&outline, &layer);
        assert_eq!(elements.len(), 4);
        assert!(elements.iter().all(|e| e.position.y == 4.0));
    }

    #[test]
    fn test_over_budget_layer_is_skipped() {
        let layer = LayerConfig::scatter_edge().size(0.0).spacing(0.01);
        assert!(scatter_edge(&line(1000.0), &layer).is_empty());
    }

    #[test]
    fn test_caps_point_away_from_path() {
        let caps = scatter_caps(&line(5.0), &LayerConfig::caps());
        assert_eq!(caps.len(), 2);
        assert_relative_eq!(caps[0].right.x, -1.0);
        assert_relative_eq!(caps[1].right.x, 1.0);
        assert_relative_eq!(caps[1].position.x, 5.0);
    }

    #[test]
    fn test_closed_path_has_no_caps() {
        let path = Path::from_xy(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)], true);
        let outline = Outline::new(&path, &LayerConfig::caps());
        assert!(scatter_caps(&outline, &LayerConfig::caps()).is_empty());
    }
}
