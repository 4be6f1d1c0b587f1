//! Continuous textured ribbons with corner joins.
//!
//! The ribbon grows from the path toward each segment's outward normal, so
//! for a clockwise loop it surrounds the shape. At every interior vertex the
//! turn between the two outward normals decides the corner treatment:
//!
//! * convex turns (`cross(prev_out, curr_out) < 0`) leave a wedge outside the
//!   corner, filled with the layer's outer join around the path vertex;
//! * concave turns (`> 0`) make the two ribbons overlap, so both are cut back
//!   to where their outer edges cross and the inner join fills the wedge left
//!   on the path side, pivoting on that crossing point.
//!
//! Texture coordinates run continuously through segments and joins: `u`
//! advances by world distance along the ribbon, one tile per
//! `size * aspect`, and `v` runs from the path (`v0`) to the outer edge
//! (`v1`).
//!
//! # Example
//!
//! ```
//! use pathstack::layer::{JoinType, LayerConfig, Outline};
//! use pathstack::mesh::NoSprites;
//! use pathstack::path::Path;
//! use pathstack::stroke::solid_edge;
//!
//! let square = Path::from_xy(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)], true);
//! let layer = LayerConfig::solid_edge().outer_join(JoinType::Miter);
//! let ribbon = solid_edge(&Outline::new(&square, &layer), &layer, &NoSprites);
//! assert!(ribbon.triangle_count() > 0);
//! ```

use super::uv::{UvCursor, UvPiece};
use crate::color::Rgba;
use crate::layer::{JoinType, LayerConfig, MeshParams, Outline};
use crate::mesh::{MeshBuilder, MeshFragment, SpriteResolver, UvRect, Vertex};
use crate::polygon::offset_normals;
use crate::primitives::{Point2, Point3, Vec2, Vec3};
use crate::scatter::{
    clamp_size, element_color, element_size, resolve_sprite, ElementJitter, MAX_ELEMENTS,
};
use tracing::warn;

/// Angle swept by one triangle of a rounded join, in degrees.
pub const ROUND_STEP_DEGREES: f32 = 3.0;

/// Miter joins longer than this multiple of the ribbon width become bevels.
pub const MITER_RATIO_LIMIT: f32 = 4.0;

const EPS: f32 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Convex,
    Concave,
}

/// The turn at one path vertex between two drawn segments.
#[derive(Debug, Clone, Copy)]
struct Corner {
    turn: Turn,
    dir_in: Vec2<f32>,
    dir_out: Vec2<f32>,
    out_in: Vec2<f32>,
    out_out: Vec2<f32>,
    /// Offset reaching both outer edges at unit width.
    miter: Vec2<f32>,
    degrees: f32,
}

impl Corner {
    fn new(dir_in: Vec2<f32>, dir_out: Vec2<f32>, min_degrees: f32) -> Option<Self> {
        let (out_in, out_out) = (dir_in.perpendicular(), dir_out.perpendicular());
        let cos = out_in.dot(out_out).clamp(-1.0, 1.0);
        // a full reversal has no finite miter
        if 1.0 + cos <= EPS {
            return None;
        }
        let degrees = cos.acos().to_degrees();
        if degrees <= min_degrees.max(EPS) {
            return None;
        }
        let turn = if out_in.cross(out_out) < 0.0 {
            Turn::Convex
        } else {
            Turn::Concave
        };
        Some(Self {
            turn,
            dir_in,
            dir_out,
            out_in,
            out_out,
            miter: (out_in + out_out) / (1.0 + cos),
            degrees,
        })
    }

    /// How far the outgoing segment starts past the vertex.
    fn trim_after(&self, width: f32) -> f32 {
        match self.turn {
            Turn::Concave => ((self.miter - self.out_out).dot(self.dir_out) * width).max(0.0),
            Turn::Convex => 0.0,
        }
    }

    /// How far the incoming segment stops short of the vertex.
    fn trim_before(&self, width: f32) -> f32 {
        match self.turn {
            Turn::Concave => (-(self.miter - self.out_in).dot(self.dir_in) * width).max(0.0),
            Turn::Convex => 0.0,
        }
    }

    /// Fan pivot and rim for the join at `vertex`, or `None` for an open
    /// corner. The rim runs from the incoming ribbon to the outgoing one.
    fn fan(
        &self,
        join: JoinType,
        vertex: Point3<f32>,
        width: f32,
    ) -> Option<(Point3<f32>, Vec<Point3<f32>>)> {
        let (pivot, from, to, tip) = match self.turn {
            Turn::Convex => (vertex, self.out_in, self.out_out, self.miter),
            Turn::Concave => (
                vertex.offset_xy(self.miter * width),
                -self.out_in,
                -self.out_out,
                -self.miter,
            ),
        };
        let at = |dir: Vec2<f32>| pivot.offset_xy(dir * width);
        let join = match join {
            JoinType::Miter if tip.magnitude() > MITER_RATIO_LIMIT => JoinType::Bevel,
            other => other,
        };
        let rim = match join {
            JoinType::None => return None,
            JoinType::Miter => vec![at(from), at(tip), at(to)],
            JoinType::Bevel => vec![at(from), at((from + to) * 0.5), at(to)],
            JoinType::Rounded => {
                let steps = (self.degrees / ROUND_STEP_DEGREES - 1e-4).ceil().max(1.0) as usize;
                let sign = if from.cross(to) < 0.0 { -1.0 } else { 1.0 };
                let mut rim: Vec<_> = (0..steps)
                    .map(|k| at(from.rotate_degrees(sign * self.degrees * k as f32 / steps as f32)))
                    .collect();
                rim.push(at(to));
                rim
            }
        };
        Some((pivot, rim))
    }
}

/// Texture rectangle and tangent for one segment and the join before it.
#[derive(Debug, Clone, Copy)]
struct Look {
    rect: UvRect,
    tangent: [f32; 4],
}

fn tilted(tilt: Vec2<f32>) -> Vec3<f32> {
    Vec3::new(tilt.x, tilt.y, 1.0)
        .normalize()
        .unwrap_or_else(Vec3::unit_z)
}

struct Ribbon {
    builder: MeshBuilder,
    cursor: UvCursor,
    stretch: bool,
    smooth: bool,
}

impl Ribbon {
    fn vertex(
        &mut self,
        position: Point3<f32>,
        uv: Point2<f32>,
        color: Rgba,
        tilt: Vec2<f32>,
        look: &Look,
    ) -> u32 {
        let normal = if self.smooth { tilted(tilt) } else { Vec3::unit_z() };
        self.builder.push_vertex(
            Vertex::new(position, uv, color)
                .with_normal(normal)
                .with_tangent(look.tangent),
        )
    }

    /// Quads between `start` and `end` on the path, pushed out along `out`.
    fn strip(
        &mut self,
        (start, end): (Point3<f32>, Point3<f32>),
        out: Vec2<f32>,
        (w0, w1): (f32, f32),
        (c0, c1): (Rgba, Rgba),
        (t0, t1): (Vec2<f32>, Vec2<f32>),
        look: &Look,
    ) {
        let length = start.distance(end);
        let pieces = if self.stretch {
            self.cursor.whole(length)
        } else {
            self.cursor.advance(length)
        };
        let rect = look.rect;
        for piece in pieces {
            let (fa, fb) = (piece.start / length, piece.end / length);
            let (ba, bb) = (start.lerp(end, fa), start.lerp(end, fb));
            let (wa, wb) = (w0 + (w1 - w0) * fa, w0 + (w1 - w0) * fb);
            let (ca, cb) = (c0.lerp(c1, fa), c0.lerp(c1, fb));
            let (ta, tb) = (t0.lerp(t1, fa), t0.lerp(t1, fb));
            let (ua, ub) = (rect.u_at(piece.u0), rect.u_at(piece.u1));

            let base_a = self.vertex(ba, Point2::new(ua, rect.v0), ca, Vec2::zero(), look);
            let base_b = self.vertex(bb, Point2::new(ub, rect.v0), cb, Vec2::zero(), look);
            let outer_b = self.vertex(bb.offset_xy(out * wb), Point2::new(ub, rect.v1), cb, tb, look);
            let outer_a = self.vertex(ba.offset_xy(out * wa), Point2::new(ua, rect.v1), ca, ta, look);
            self.builder.push_quad(base_a, base_b, outer_b, outer_a);
        }
    }

    /// Triangles from `pivot` to each rim edge, split at tile boundaries.
    fn fan(
        &mut self,
        pivot: Point3<f32>,
        rim: &[Point3<f32>],
        outer_rim: bool,
        color: Rgba,
        look: &Look,
    ) {
        let lengths: Vec<f32> = rim.windows(2).map(|w| w[0].distance(w[1])).collect();
        let total: f32 = lengths.iter().sum();
        if total <= EPS {
            return;
        }
        let pieces: Vec<UvPiece> = self.cursor.advance(total);
        let rect = look.rect;
        let (v_pivot, v_rim) = if outer_rim {
            (rect.v0, rect.v1)
        } else {
            (rect.v1, rect.v0)
        };
        let tilt_of = |p: Point3<f32>| (p - pivot).xy().normalize().unwrap_or_else(Vec2::zero);
        let pivot_tilt = if outer_rim {
            Vec2::zero()
        } else {
            // concave pivot sits on the outer edge
            rim.first()
                .zip(rim.last())
                .and_then(|(a, b)| (pivot - a.lerp(*b, 0.5)).xy().normalize())
                .unwrap_or_else(Vec2::zero)
        };

        let mut edge_start = 0.0;
        for (j, &len) in lengths.iter().enumerate() {
            let edge_end = edge_start + len;
            if len > EPS {
                for piece in &pieces {
                    let lo = piece.start.max(edge_start);
                    let hi = piece.end.min(edge_end);
                    if hi - lo <= EPS {
                        continue;
                    }
                    let ra = rim[j].lerp(rim[j + 1], (lo - edge_start) / len);
                    let rb = rim[j].lerp(rim[j + 1], (hi - edge_start) / len);
                    let (ua, ub) = (piece.u_at(lo), piece.u_at(hi));
                    let (ta, tb) = if outer_rim {
                        (tilt_of(ra), tilt_of(rb))
                    } else {
                        (Vec2::zero(), Vec2::zero())
                    };
                    let p = self.vertex(
                        pivot,
                        Point2::new(rect.u_at((ua + ub) * 0.5), v_pivot),
                        color,
                        pivot_tilt,
                        look,
                    );
                    let a = self.vertex(ra, Point2::new(rect.u_at(ua), v_rim), color, ta, look);
                    let b = self.vertex(rb, Point2::new(rect.u_at(ub), v_rim), color, tb, look);
                    self.builder.push_triangle(p, a, b);
                }
            }
            edge_start = edge_end;
        }
    }
}

/// Tessellates a ribbon along every edge whose outward normal passes the
/// layer's angular filter, with joins at corners between drawn edges.
///
/// Width and color are resolved per path vertex (seeded by the vertex
/// index) and interpolated along each segment. Each segment picks its own
/// sprite. Edges rejected by the filter leave a gap.
pub fn solid_edge<R: SpriteResolver + ?Sized>(
    outline: &Outline,
    layer: &LayerConfig,
    sprites: &R,
) -> MeshFragment {
    let Some(params) = layer.mesh_params() else {
        return MeshFragment::new();
    };
    let segments = outline.segment_count();
    if segments == 0 {
        return MeshFragment::new();
    }
    let n = outline.len();
    let points = &outline.points;

    let lengths = outline.cumulative_lengths();
    let total = lengths[segments];
    let t_at = |v: usize| if total > 0.0 { lengths[v] / total } else { 0.0 };

    let dirs: Vec<Option<Vec2<f32>>> = (0..segments).map(|i| outline.direction(i)).collect();
    let drawn: Vec<bool> = dirs
        .iter()
        .map(|d| d.map_or(false, |d| layer.exists_in_direction(d.perpendicular())))
        .collect();

    let jitters: Vec<ElementJitter> = (0..n)
        .map(|v| ElementJitter::for_element(layer, v as u32))
        .collect();
    let widths: Vec<f32> = (0..n)
        .map(|v| element_size(layer, t_at(v), outline.sizes[v], jitters[v].size))
        .collect();
    let colors: Vec<Rgba> = (0..n)
        .map(|v| element_color(layer, t_at(v), outline.colors[v], jitters[v].color))
        .collect();
    let tilts: Vec<Vec2<f32>> = if params.smooth_normals {
        offset_normals(points, outline.closed)
            .into_iter()
            .map(|m| m.normalize().unwrap_or_else(Vec2::zero))
            .collect()
    } else {
        vec![Vec2::zero(); n]
    };

    let base_width = clamp_size(layer.scale.size).abs();
    let surfaces: Vec<(Look, f32)> = (0..segments)
        .map(|i| surface(params, sprites, &jitters[i], dirs[i], base_width))
        .collect();

    let planned: f32 = (0..segments)
        .filter(|&i| drawn[i])
        .map(|i| (lengths[i + 1] - lengths[i]) / surfaces[i].1)
        .sum();
    if planned > MAX_ELEMENTS as f32 {
        warn!(layer = %layer.name, planned, "ribbon exceeds element budget, layer skipped");
        return MeshFragment::new();
    }

    // zero-length segments are stepped over, so a join pairs the nearest
    // segments with a direction on either side
    let closed = outline.closed;
    let with_dir = |j: &usize| dirs[*j].is_some();
    let before = |v: usize| {
        (1..segments)
            .map_while(|k| {
                if closed {
                    Some((v + segments - k) % segments)
                } else {
                    v.checked_sub(k)
                }
            })
            .find(with_dir)
    };
    let after = |i: usize| {
        (1..segments)
            .map_while(|k| {
                if closed {
                    Some((i + k) % segments)
                } else {
                    Some(i + k).filter(|&j| j < segments)
                }
            })
            .find(with_dir)
    };

    // keyed by the vertex where the outgoing segment starts
    let corners: Vec<Option<Corner>> = (0..n)
        .map(|v| {
            if v >= segments || (closed && n < 3) {
                return None;
            }
            let prev = before(v)?;
            if !(drawn[prev] && drawn[v]) {
                return None;
            }
            Corner::new(dirs[prev]?, dirs[v]?, params.min_join_angle)
        })
        .collect();

    let mut ribbon = Ribbon {
        builder: MeshBuilder::new(),
        cursor: UvCursor::new(surfaces[0].1, params.max_stretch),
        stretch: params.stretch_segments,
        smooth: params.smooth_normals,
    };

    for i in 0..segments {
        let (a, b) = outline.segment(i);
        let (look, tile) = surfaces[i];
        ribbon.cursor.set_tile(tile);

        if let Some(corner) = corners[a] {
            let join = match corner.turn {
                Turn::Convex => params.outer_join,
                Turn::Concave => params.inner_join,
            };
            if let Some((pivot, rim)) = corner.fan(join, points[a], widths[a]) {
                ribbon.fan(pivot, &rim, corner.turn == Turn::Convex, colors[a], &look);
            }
        }

        let Some(dir) = dirs[i].filter(|_| drawn[i]) else {
            continue;
        };
        let length = lengths[i + 1] - lengths[i];
        let head = corners[a].map_or(0.0, |c| c.trim_after(widths[a]));
        let tail = after(i)
            .and_then(|j| Some((corners[j]?, widths[j])))
            .map_or(0.0, |(c, w)| c.trim_before(w));
        if length - head - tail <= EPS {
            continue;
        }
        let start = points[a].lerp(points[b], head / length);
        let end = points[a].lerp(points[b], 1.0 - tail / length);
        ribbon.strip(
            (start, end),
            dir.perpendicular(),
            (widths[a], widths[b]),
            (colors[a], colors[b]),
            (tilts[a], tilts[b]),
            &look,
        );
    }
    ribbon.builder.finish()
}

/// Texture for segment `i` and the world length of one tile along it.
fn surface<R: SpriteResolver + ?Sized>(
    params: &MeshParams,
    sprites: &R,
    jitter: &ElementJitter,
    dir: Option<Vec2<f32>>,
    base_width: f32,
) -> (Look, f32) {
    let (rect, aspect) = resolve_sprite(sprites, params.pick_sprite(jitter.sprite));
    let d = dir.unwrap_or_else(Vec2::unit_x);
    let look = Look {
        rect,
        tangent: [d.x, d.y, 0.0, 1.0],
    };
    (look, base_width * aspect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{NoSprites, SpriteAtlas};
    use crate::path::Path;
    use approx::assert_relative_eq;

    fn area(mesh: &MeshFragment) -> f32 {
        mesh.triangles()
            .map(|[a, b, c]| {
                let (pa, pb, pc) = (
                    mesh.positions[a as usize],
                    mesh.positions[b as usize],
                    mesh.positions[c as usize],
                );
                ((pb.x - pa.x) * (pc.y - pa.y) - (pb.y - pa.y) * (pc.x - pa.x)) * 0.5
            })
            .sum()
    }

    fn has_vertex(mesh: &MeshFragment, x: f32, y: f32) -> bool {
        mesh.positions
            .iter()
            .any(|p| (p.x - x).abs() < 1e-4 && (p.y - y).abs() < 1e-4)
    }

    fn cw_square() -> Path {
        Path::from_xy(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)], true)
    }

    fn ribbon(path: &Path, layer: &LayerConfig) -> MeshFragment {
        solid_edge(&Outline::new(path, layer), layer, &NoSprites)
    }

    #[test]
    fn test_mitered_square_frame_has_no_gaps() {
        let layer = LayerConfig::solid_edge().outer_join(JoinType::Miter);
        let mesh = ribbon(&cw_square(), &layer);
        // (4 + 2)^2 - 4^2
        assert_relative_eq!(area(&mesh), 20.0, epsilon = 1e-3);
        for (x, y) in [(-1.0, -1.0), (-1.0, 5.0), (5.0, 5.0), (5.0, -1.0)] {
            assert!(has_vertex(&mesh, x, y), "missing miter tip at ({x}, {y})");
        }
        // 4 unit tiles per side plus two join triangles per corner
        assert_eq!(mesh.triangle_count(), 4 * 4 * 2 + 4 * 2);
    }

    #[test]
    fn test_repeated_corner_point_keeps_join() {
        let path = Path::from_xy(
            &[(0.0, 0.0), (0.0, 4.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)],
            true,
        );
        let layer = LayerConfig::solid_edge().outer_join(JoinType::Miter);
        let mesh = ribbon(&path, &layer);
        assert_relative_eq!(area(&mesh), 20.0, epsilon = 1e-3);
        assert!(has_vertex(&mesh, -1.0, 5.0));
        assert_eq!(mesh.triangle_count(), 4 * 4 * 2 + 4 * 2);
    }

    #[test]
    fn test_repeated_point_in_concave_bend_still_trims() {
        let path = Path::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 0.0), (4.0, 4.0)], false);
        let layer = LayerConfig::solid_edge().inner_join(JoinType::Miter);
        assert_relative_eq!(area(&ribbon(&path, &layer)), 7.0, epsilon = 1e-3);
    }

    #[test]
    fn test_bevel_cuts_corners() {
        let layer = LayerConfig::solid_edge().outer_join(JoinType::Bevel);
        let mesh = ribbon(&cw_square(), &layer);
        assert_relative_eq!(area(&mesh), 18.0, epsilon = 1e-3);
        assert!(!has_vertex(&mesh, -1.0, 5.0));
    }

    #[test]
    fn test_rounded_corners_approach_quarter_circles() {
        let layer = LayerConfig::solid_edge().outer_join(JoinType::Rounded);
        let mesh = ribbon(&cw_square(), &layer);
        let expected = 16.0 + std::f32::consts::PI;
        assert_relative_eq!(area(&mesh), expected, epsilon = 0.02);
    }

    #[test]
    fn test_open_corners_leave_gaps() {
        let layer = LayerConfig::solid_edge().outer_join(JoinType::None);
        assert_relative_eq!(area(&ribbon(&cw_square(), &layer)), 16.0, epsilon = 1e-3);
    }

    #[test]
    fn test_concave_corner_is_cut_back() {
        // the ribbon sits on the inside of this bend
        let path = Path::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)], false);
        let layer = LayerConfig::solid_edge().inner_join(JoinType::Miter);
        let mesh = ribbon(&path, &layer);
        // two 4x1 strips overlapping in a unit square
        assert_relative_eq!(area(&mesh), 7.0, epsilon = 1e-3);
        assert!(has_vertex(&mesh, 3.0, 1.0));
    }

    #[test]
    fn test_concave_joins_fill_the_inner_wedge() {
        let path = Path::from_xy(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)], false);
        let area_with = |join| area(&ribbon(&path, &LayerConfig::solid_edge().inner_join(join)));
        // two trimmed 3x1 strips plus the wedge around the crossing at (3, 1)
        assert_relative_eq!(area_with(JoinType::None), 6.0, epsilon = 1e-3);
        assert_relative_eq!(area_with(JoinType::Bevel), 6.5, epsilon = 1e-3);
        let quarter = std::f32::consts::FRAC_PI_4;
        assert_relative_eq!(area_with(JoinType::Rounded), 6.0 + quarter, epsilon = 2e-3);
        // default inner join
        let default = area(&ribbon(&path, &LayerConfig::solid_edge()));
        assert_relative_eq!(default, area_with(JoinType::Rounded), epsilon = 1e-5);
    }

    #[test]
    fn test_angular_filter_draws_top_edge_only() {
        let layer = LayerConfig::solid_edge().placement_range(1.0);
        let mesh = ribbon(&cw_square(), &layer);
        assert_eq!(mesh.triangle_count(), 8);
        assert!(mesh.positions.iter().all(|p| p.y >= 4.0 - 1e-5));
    }

    #[test]
    fn test_uv_continues_between_segments() {
        let path = Path::from_xy(&[(0.0, 0.0), (0.0, 1.5), (0.0, 3.0)], false);
        let layer = LayerConfig::solid_edge();
        let mesh = ribbon(&path, &layer);
        // 1.5 + 1.5 units at one tile per unit: pieces 1, 0.5, 0.5, 1
        assert_eq!(mesh.triangle_count(), 8);
        let u_values: Vec<f32> = mesh.uvs.iter().map(|uv| uv.x).collect();
        assert!(u_values.iter().all(|u| (0.0..=1.0).contains(u)));
        assert_relative_eq!(mesh.uvs[4].x, 0.0);
        assert_relative_eq!(mesh.uvs[5].x, 0.5);
        assert_relative_eq!(mesh.uvs[8].x, 0.5);
    }

    #[test]
    fn test_stretch_segments_use_one_quad() {
        let layer = LayerConfig::solid_edge()
            .stretch_segments(true)
            .outer_join(JoinType::None);
        let mesh = ribbon(&cw_square(), &layer);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_sprite_rect_and_aspect() {
        let mut atlas = SpriteAtlas::new();
        let sprite = atlas.insert(UvRect::new(0.5, 0.0, 1.0, 0.5), 2.0);
        let path = Path::from_xy(&[(0.0, 0.0), (4.0, 0.0)], false);
        let layer = LayerConfig::solid_edge().sprites(vec![sprite]);
        let mesh = solid_edge(&Outline::new(&path, &layer), &layer, &atlas);
        // tiles are 2 units long
        assert_eq!(mesh.triangle_count(), 4);
        assert!(mesh.uvs.iter().all(|uv| uv.x >= 0.5 && uv.y <= 0.5));
    }

    #[test]
    fn test_smooth_normals_tilt_outer_edge() {
        let layer = LayerConfig::solid_edge().smooth_normals(true);
        let mesh = ribbon(&cw_square(), &layer);
        assert!(mesh.normals.iter().any(|n| n.z < 0.99));
        assert!(mesh.normals.iter().all(|n| n.z > 0.0));
    }

    #[test]
    fn test_degenerate_outline_is_empty() {
        let path = Path::from_xy(&[(1.0, 1.0)], false);
        assert!(ribbon(&path, &LayerConfig::solid_edge()).is_empty());
    }
}
