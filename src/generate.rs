//! Generation passes: a path and a layer stack in, a mesh or placements out.
//!
//! Each pass validates its inputs, optionally densifies the path along a
//! curve, measures winding once on the result and reverses
//! counter-clockwise paths so that every layer walks clockwise. Outward is
//! then always to the left of travel.
//!
//! # Example
//!
//! ```
//! use pathstack::generate::{generate_mesh, generate_placements};
//! use pathstack::layer::LayerConfig;
//! use pathstack::path::Path;
//!
//! let square = Path::from_xy(&[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)], true);
//! let mesh = generate_mesh(&square, &[LayerConfig::solid_fill()]).unwrap();
//! assert_eq!(mesh.triangle_count(), 2);
//!
//! let line = Path::from_xy(&[(0.0, 0.0), (10.0, 0.0)], false);
//! let grass = LayerConfig::scatter_edge().size(0.5).seed(42);
//! assert_eq!(generate_placements(&line, &grass).unwrap().len(), 10);
//! ```

use crate::curves::{evaluate, CurveType};
use crate::error::Result;
use crate::fill::{scatter_fill, solid_fill};
use crate::layer::{LayerConfig, LayerKind, LayerMode, Outline};
use crate::mesh::{Mesh, MeshFragment, NoSprites, SpriteResolver};
use crate::metrics;
use crate::path::Path;
use crate::scatter::{element_quads, Element, PlacementFragment};
use crate::stroke::{scatter_caps, scatter_edge, solid_edge};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Curve settings for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub curve: CurveType,
    /// Samples per source segment. Zero uses the control points as they are.
    pub subdivisions: u32,
}

impl GeneratorConfig {
    pub fn new(curve: CurveType, subdivisions: u32) -> Self {
        Self {
            curve,
            subdivisions,
        }
    }

    pub fn curve(mut self, curve: CurveType) -> Self {
        self.curve = curve;
        self
    }

    pub fn subdivisions(mut self, subdivisions: u32) -> Self {
        self.subdivisions = subdivisions;
        self
    }
}

/// Runs generation passes with one configuration and sprite resolver.
#[derive(Debug, Clone)]
pub struct Generator<R = NoSprites> {
    config: GeneratorConfig,
    sprites: R,
}

impl Generator<NoSprites> {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            sprites: NoSprites,
        }
    }
}

impl<R: SpriteResolver> Generator<R> {
    /// Replaces the sprite resolver.
    pub fn with_sprites<S: SpriteResolver>(self, sprites: S) -> Generator<S> {
        Generator {
            config: self.config,
            sprites,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The path every layer of a pass walks, or `None` when it has fewer
    /// than two points.
    pub fn prepare(&self, path: &Path) -> Result<Option<Path>> {
        path.validate()?;
        if path.len() < 2 {
            return Ok(None);
        }
        let curved = if self.config.subdivisions > 0 {
            evaluate(path, self.config.curve, self.config.subdivisions as usize)
        } else {
            path.clone()
        };
        let w = winding(&curved);
        debug!(
            points = curved.len(),
            closed = curved.closed,
            winding = w,
            "path prepared"
        );
        Ok(Some(if w > 0.0 { curved.reversed() } else { curved }))
    }

    /// Tessellates every mesh layer and merges the fragments by material.
    ///
    /// Layers run in ascending `sort_order`, ties in list order. Object
    /// layers contribute nothing here; see [`Generator::placements`].
    pub fn mesh(&self, path: &Path, layers: &[LayerConfig]) -> Result<Mesh> {
        for (index, layer) in layers.iter().enumerate() {
            layer.validate(index)?;
        }
        let mut mesh = Mesh::new();
        let Some(path) = self.prepare(path)? else {
            return Ok(mesh);
        };
        debug!(layers = layers.len(), "generating mesh");

        let mut order: Vec<usize> = (0..layers.len()).collect();
        order.sort_by_key(|&i| layers[i].sort_order);

        for i in order {
            let layer = layers[i].sanitized();
            let LayerKind::Mesh(params) = &layer.kind else {
                continue;
            };
            let fragment = match params
                .sprites
                .iter()
                .find(|&&s| self.sprites.uv_rect(s).is_none())
            {
                Some(missing) => {
                    warn!(layer = %layer.name, sprite = missing.0, "unknown sprite, layer skipped");
                    MeshFragment::new()
                }
                None => self.layer_mesh(&path, &layer),
            };
            trace!(
                layer = %layer.name,
                vertices = fragment.vertex_count(),
                triangles = fragment.triangle_count(),
                "layer tessellated"
            );
            mesh.push_fragment(fragment, params.material);
        }
        Ok(mesh)
    }

    fn layer_mesh(&self, path: &Path, layer: &LayerConfig) -> MeshFragment {
        let outline = Outline::new(path, layer);
        match layer.mode {
            LayerMode::Line | LayerMode::SolidEdge => solid_edge(&outline, layer, &self.sprites),
            LayerMode::SolidFill => solid_fill(&outline, layer),
            _ => element_quads(&scatter_elements(&outline, layer), &self.sprites),
        }
    }

    /// Element transforms for one scatter layer.
    ///
    /// Surface layers produce an empty list. Object layers without an
    /// object produce nothing and log a warning.
    pub fn placements(&self, path: &Path, layer: &LayerConfig) -> Result<PlacementFragment> {
        layer.validate(0)?;
        let prepared = self.prepare(path)?;
        let object = match &layer.kind {
            LayerKind::Object(params) => match params.object {
                Some(object) => Some(object),
                None => {
                    warn!(layer = %layer.name, "object layer has no object, nothing placed");
                    return Ok(PlacementFragment::default());
                }
            },
            LayerKind::Mesh(_) => None,
        };
        let Some(path) = prepared else {
            return Ok(PlacementFragment::new(object));
        };
        let layer = layer.sanitized();
        if !layer.mode.is_scatter() {
            debug!(layer = %layer.name, mode = ?layer.mode, "surface layer has no placements");
            return Ok(PlacementFragment::new(object));
        }
        let elements = scatter_elements(&Outline::new(&path, &layer), &layer);
        trace!(layer = %layer.name, placements = elements.len(), "layer placed");
        Ok(PlacementFragment::from_elements(object, &elements))
    }
}

/// Elements of a scatter layer. Surface modes have none.
fn scatter_elements(outline: &Outline, layer: &LayerConfig) -> Vec<Element> {
    match layer.mode {
        LayerMode::Stroke | LayerMode::ScatterEdge => scatter_edge(outline, layer),
        LayerMode::Cap => scatter_caps(outline, layer),
        LayerMode::InnerFill | LayerMode::OuterFill | LayerMode::ScatterFill => {
            scatter_fill(outline, layer)
        }
        LayerMode::Line | LayerMode::SolidEdge | LayerMode::SolidFill => Vec::new(),
    }
}

/// [`Generator::mesh`] with no curve and no sprites.
pub fn generate_mesh(path: &Path, layers: &[LayerConfig]) -> Result<Mesh> {
    Generator::new(GeneratorConfig::default()).mesh(path, layers)
}

/// [`Generator::placements`] with no curve.
pub fn generate_placements(path: &Path, layer: &LayerConfig) -> Result<PlacementFragment> {
    Generator::new(GeneratorConfig::default()).placements(path, layer)
}

/// Signed area of the path, positive when counter-clockwise.
///
/// Open paths are measured without the closing edge.
pub fn winding(path: &Path) -> f32 {
    let positions = path.positions();
    if path.closed {
        metrics::closed_winding(&positions)
    } else {
        metrics::winding(&positions)
    }
}

/// Length of the path including the closing edge of closed paths.
pub fn path_length(path: &Path) -> f32 {
    metrics::path_length(&path.positions(), path.closed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::error::PolyError;
    use crate::mesh::{MaterialId, ObjectHandle, SpriteAtlas, SpriteHandle, UvRect};
    use crate::path::PathPoint;
    use approx::assert_relative_eq;

    fn ccw_square() -> Path {
        Path::from_xy(&[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)], true)
    }

    #[test]
    fn test_winding_and_length() {
        assert!(winding(&ccw_square()) > 0.0);
        assert!(winding(&ccw_square().reversed()) < 0.0);
        assert_relative_eq!(path_length(&ccw_square()), 8.0);
    }

    #[test]
    fn test_prepare_reverses_counter_clockwise() {
        let generator = Generator::new(GeneratorConfig::default());
        let prepared = generator.prepare(&ccw_square()).unwrap().unwrap();
        assert!(winding(&prepared) < 0.0);
    }

    #[test]
    fn test_prepare_applies_curve() {
        let generator = Generator::new(GeneratorConfig::new(CurveType::CatmullRom, 4));
        let prepared = generator.prepare(&ccw_square()).unwrap().unwrap();
        assert_eq!(prepared.len(), 16);
    }

    #[test]
    fn test_degenerate_path_is_empty() {
        let layers = [
            LayerConfig::solid_fill(),
            LayerConfig::solid_edge(),
            LayerConfig::scatter_edge(),
        ];
        for points in [vec![], vec![PathPoint::xy(1.0, 1.0)]] {
            let path = Path::new(points, true);
            assert!(generate_mesh(&path, &layers).unwrap().is_empty());
            assert!(generate_placements(&path, &layers[2]).unwrap().is_empty());
        }
    }

    #[test]
    fn test_non_finite_input_is_rejected() {
        let path = Path::from_xy(&[(0.0, 0.0), (f32::NAN, 1.0)], false);
        assert_eq!(
            generate_mesh(&path, &[]),
            Err(PolyError::NonFinitePoint { index: 1 })
        );
        let bad = LayerConfig::scatter_edge().angle(f32::INFINITY);
        assert!(matches!(
            generate_mesh(&ccw_square(), &[LayerConfig::solid_fill(), bad]),
            Err(PolyError::InvalidLayer { layer: 1, .. })
        ));
    }

    #[test]
    fn test_layers_follow_sort_order_and_material_runs() {
        let layers = [
            LayerConfig::solid_fill().material(MaterialId(2)).sort_order(1),
            LayerConfig::solid_edge().material(MaterialId(1)).sort_order(0),
            LayerConfig::solid_fill().material(MaterialId(2)).sort_order(5),
        ];
        let mesh = generate_mesh(&ccw_square(), &layers).unwrap();
        assert_eq!(mesh.materials(), vec![MaterialId(1), MaterialId(2)]);
        assert_eq!(mesh.submeshes[1].indices.len(), 12);
    }

    #[test]
    fn test_unknown_sprite_skips_layer() {
        let atlas = SpriteAtlas::new();
        let generator = Generator::new(GeneratorConfig::default()).with_sprites(&atlas);
        let layer = LayerConfig::scatter_edge().sprites(vec![SpriteHandle(3)]);
        let mesh = generator.mesh(&ccw_square(), &[layer]).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.submeshes.len(), 1);
    }

    #[test]
    fn test_known_sprite_is_used() {
        let mut atlas = SpriteAtlas::new();
        let leaf = atlas.insert(UvRect::new(0.0, 0.0, 0.5, 0.5), 1.0);
        let generator = Generator::new(GeneratorConfig::default()).with_sprites(&atlas);
        let layer = LayerConfig::scatter_edge().size(0.5).sprites(vec![leaf]);
        let mesh = generator.mesh(&ccw_square(), &[layer]).unwrap();
        assert_eq!(mesh.vertex_count(), 8 * 4);
        assert!(mesh.uvs.iter().all(|uv| uv.x <= 0.5));
    }

    #[test]
    fn test_object_layer_placements() {
        let line = Path::from_xy(&[(0.0, 0.0), (4.0, 0.0)], false);
        let layer = LayerConfig::object(ObjectHandle(7)).size(0.5);
        let fragment = generate_placements(&line, &layer).unwrap();
        assert_eq!(fragment.object, Some(ObjectHandle(7)));
        assert_eq!(fragment.len(), 4);
        assert!(generate_mesh(&line, &[layer]).unwrap().submeshes.is_empty());
    }

    #[test]
    fn test_object_layer_without_object_places_nothing() {
        let line = Path::from_xy(&[(0.0, 0.0), (4.0, 0.0)], false);
        let mut layer = LayerConfig::object(ObjectHandle(7));
        layer.kind = LayerKind::Object(Default::default());
        assert!(generate_placements(&line, &layer).unwrap().is_empty());
    }

    #[test]
    fn test_surface_layer_has_no_placements() {
        let fragment = generate_placements(&ccw_square(), &LayerConfig::solid_fill()).unwrap();
        assert!(fragment.is_empty());
    }

    #[test]
    fn test_point_color_tints_fill() {
        let mut path = ccw_square();
        for p in &mut path.points {
            *p = p.with_color(Rgba::new(1.0, 0.0, 0.0, 1.0));
        }
        let mesh = generate_mesh(&path, &[LayerConfig::solid_fill()]).unwrap();
        assert!(mesh.colors.iter().all(|c| c.g == 0.0 && c.r == 1.0));
    }
}
