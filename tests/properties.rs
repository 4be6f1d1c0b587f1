use pathstack::metrics::{closed_winding, path_length, remove_colinear, resample};
use pathstack::{generate_mesh, generate_placements, JoinType, LayerConfig, Mesh, Path, PathPoint};
use proptest::prelude::*;

fn point_strategy() -> impl Strategy<Value = (f32, f32)> {
    (-50.0f32..50.0, -50.0f32..50.0)
}

fn path_strategy(min: usize, max: usize) -> impl Strategy<Value = Path> {
    (proptest::collection::vec(point_strategy(), min..max), any::<bool>())
        .prop_map(|(coords, closed)| Path::from_xy(&coords, closed))
}

fn layer_stack(seed: i32) -> Vec<LayerConfig> {
    vec![
        LayerConfig::solid_fill().hsva_jitter(0.1, 0.1, 0.1, 0.0).seed(seed),
        LayerConfig::solid_edge()
            .size(0.75)
            .outer_join(JoinType::Miter)
            .seed(seed),
        LayerConfig::scatter_edge()
            .size(0.5)
            .frequency(0.7)
            .position_jitter(0.3)
            .angle_jitter(30.0)
            .size_jitter(0.4)
            .seed(seed),
        LayerConfig::scatter_fill().size(2.0).seed(seed),
    ]
}

/// Bit patterns of every float and index, so NaN compares equal to itself.
fn fingerprint(mesh: &Mesh) -> Vec<u32> {
    let mut out = Vec::new();
    for p in &mesh.positions {
        out.extend([p.x.to_bits(), p.y.to_bits(), p.z.to_bits()]);
    }
    for uv in &mesh.uvs {
        out.extend([uv.x.to_bits(), uv.y.to_bits()]);
    }
    for c in &mesh.colors {
        out.extend([c.r.to_bits(), c.g.to_bits(), c.b.to_bits(), c.a.to_bits()]);
    }
    for n in &mesh.normals {
        out.extend([n.x.to_bits(), n.y.to_bits(), n.z.to_bits()]);
    }
    for submesh in &mesh.submeshes {
        out.push(submesh.material.0);
        out.extend(&submesh.indices);
    }
    out
}

proptest! {
    #[test]
    fn generation_is_deterministic(path in path_strategy(0, 10), seed in any::<i32>()) {
        let layers = layer_stack(seed);
        let first = generate_mesh(&path, &layers).unwrap();
        let second = generate_mesh(&path, &layers).unwrap();
        prop_assert_eq!(fingerprint(&first), fingerprint(&second));

        let a = generate_placements(&path, &layers[2]).unwrap();
        let b = generate_placements(&path, &layers[2]).unwrap();
        prop_assert_eq!(format!("{a:?}"), format!("{b:?}"));
    }

    #[test]
    fn reversing_flips_winding(path in path_strategy(3, 12)) {
        let forward = closed_winding(&path.positions());
        let backward = closed_winding(&path.reversed().positions());
        prop_assert!((forward + backward).abs() <= 0.1 + 1e-3 * forward.abs());
    }

    #[test]
    fn resample_returns_requested_count(
        path in path_strategy(2, 12),
        count in 2usize..200,
    ) {
        let out = resample(&path.positions(), count, path.closed);
        prop_assert_eq!(out.len(), count);
    }

    #[test]
    fn colinear_removal_is_idempotent(
        path in path_strategy(3, 30),
        max_angle in 0.0f32..45.0,
    ) {
        let once = remove_colinear(&path.positions(), max_angle, path.closed);
        let twice = remove_colinear(&once, max_angle, path.closed);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn zero_frequency_places_nothing(path in path_strategy(2, 10), seed in any::<i32>()) {
        let layer = LayerConfig::scatter_edge().size(0.5).frequency(0.0).seed(seed);
        prop_assert!(generate_placements(&path, &layer).unwrap().is_empty());
    }

    #[test]
    fn edge_scatter_count_follows_step(length in 1.0f32..200.0, size in 0.1f32..4.0) {
        let path = Path::new(vec![PathPoint::xy(0.0, 0.0), PathPoint::xy(length, 0.0)], false);
        let layer = LayerConfig::scatter_edge().size(size);
        let placed = generate_placements(&path, &layer).unwrap().len();
        prop_assert_eq!(placed, (length / (size * 2.0)).floor() as usize);
    }
}

#[test]
fn resample_preserves_convex_length() {
    let circle: Vec<_> = (0..90)
        .map(|i| {
            let a = i as f32 / 90.0 * std::f32::consts::TAU;
            pathstack::Point3::new(10.0 * a.cos(), 10.0 * a.sin(), 0.0)
        })
        .collect();
    let before = path_length(&circle, true);
    let after = path_length(&resample(&circle, 60, true), true);
    assert!((before - after).abs() / before < 0.01);
}
