//! Elements on a grid clipped to the shape.

use crate::layer::{FillCoverage, LayerConfig, Outline};
use crate::polygon::{offset_path, Polygon};
use crate::primitives::{Point2, Point3, Vec2};
use crate::scatter::{place_element, Element, ElementSite, MAX_ELEMENTS};
use crate::stroke::scatter_step;
use tracing::warn;

/// Corner tests sit this fraction of a half tile inside the tile, so tiles
/// lying along a straight boundary are judged by their interior.
const CORNER_INSET: f32 = 1e-3;

/// Whether a tile of half-width `half` centered on `center` is kept.
fn covered(polygon: &Polygon<f32>, center: Point2<f32>, half: f32, policy: FillCoverage) -> bool {
    let reach = half * (1.0 - CORNER_INSET);
    let corners = || {
        [(-reach, -reach), (reach, -reach), (reach, reach), (-reach, reach)]
            .into_iter()
            .map(move |(dx, dy)| Point2::new(center.x + dx, center.y + dy))
    };
    match policy {
        FillCoverage::Center => polygon.contains(center),
        FillCoverage::AnyCorner => corners().any(|p| polygon.contains(p)),
        FillCoverage::AllCorners => corners().all(|p| polygon.contains(p)),
    }
}

/// Places elements on a square grid over the outline's bounding box.
///
/// Tiles are `step` wide starting at the box's lower corner, visited column
/// by column, and the last row and column reach past the box when it is not
/// a whole number of tiles. Each tile is tested and placed at its center. Each kept tile becomes one element facing +x, with `t`
/// running across the box from left to right. With overflow the shape is
/// first grown by two steps and the box by one, so tiles straddling the
/// boundary are kept. Grids above the element budget produce nothing.
pub fn scatter_fill(outline: &Outline, layer: &LayerConfig) -> Vec<Element> {
    if outline.len() < 3 {
        return Vec::new();
    }
    let step = scatter_step(layer);
    let Some((mut min, mut max)) = Polygon::from_points(&outline.points).bounding_box() else {
        return Vec::new();
    };

    let polygon = if layer.overflows() {
        let base = Polygon::from_points(&outline.points);
        // grow outward whichever way the outline winds
        let outward = if base.signed_area() > 0.0 { -1.0 } else { 1.0 };
        min = min - Vec2::new(step, step);
        max = max + Vec2::new(step, step);
        Polygon::from_points(&offset_path(&outline.points, 2.0 * step * outward, true))
    } else {
        Polygon::from_points(&outline.points)
    };

    let width = max.x - min.x;
    let columns = (width / step).ceil().max(0.0);
    let rows = ((max.y - min.y) / step).ceil().max(0.0);
    let tiles = columns as f64 * rows as f64;
    if tiles > MAX_ELEMENTS as f64 {
        warn!(layer = %layer.name, tiles, "fill grid exceeds tile budget, layer skipped");
        return Vec::new();
    }

    let z = outline.points[0].z;
    let half = step * 0.5;
    let policy = layer.position.fill_coverage;
    let mut elements = Vec::new();
    let mut index = 0u32;
    for ix in 0..columns as usize {
        let x = min.x + (ix as f32 + 0.5) * step;
        let t = if width > 0.0 { (x - min.x) / width } else { 0.0 };
        for iy in 0..rows as usize {
            let y = min.y + (iy as f32 + 0.5) * step;
            if !covered(&polygon, Point2::new(x, y), half, policy) {
                continue;
            }
            let site = ElementSite::new(Point3::new(x, y, z), Vec2::unit_x(), t);
            elements.extend(place_element(layer, &site, index));
            index += 1;
        }
    }
    elements
}
