use crate::coords::Vec3;
use crate::mode::ShapeMode;
use crate::polygon::Polygon;

use super::IndexedPolygon;

/// Triangle list over the 8 corners from [`corners`], counter-clockwise when
/// seen from outside. Face order: front, back, left, right, top, bottom.
pub const CUBOID_INDICES: [u32; 36] = [
    4, 5, 6, 4, 6, 7, // front  (+z)
    1, 0, 3, 1, 3, 2, // back   (-z)
    0, 4, 7, 0, 7, 3, // left   (-x)
    5, 1, 2, 5, 2, 6, // right  (+x)
    7, 6, 2, 7, 2, 3, // top    (+y)
    0, 1, 5, 0, 5, 4, // bottom (-y)
];

fn corners(size: Vec3) -> Vec<Vec3> {
    let Vec3 { x: w, y: h, z: d } = size;
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(w, 0.0, 0.0),
        Vec3::new(w, h, 0.0),
        Vec3::new(0.0, h, 0.0),
        Vec3::new(0.0, 0.0, d),
        Vec3::new(w, 0.0, d),
        Vec3::new(w, h, d),
        Vec3::new(0.0, h, d),
    ]
}

/// Indexed cuboid: 8 unique corners local to `pos` plus 36 indices.
pub fn cuboid_indexed(pos: Vec3, size: Vec3, mode: ShapeMode) -> IndexedPolygon {
    IndexedPolygon {
        polygon: Polygon::new_3d(corners(size), mode).with_offset(pos),
        indices: CUBOID_INDICES.to_vec(),
    }
}

/// Unindexed cuboid: 36 triangle-list vertices.
pub fn cuboid(pos: Vec3, size: Vec3, mode: ShapeMode) -> Polygon {
    cuboid_indexed(pos, size, mode).expand()
}

/// Cube of edge `side`.
pub fn cube(pos: Vec3, side: f32, mode: ShapeMode) -> Polygon {
    cuboid(pos, Vec3::splat(side), mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::test_util::normal;

    #[test]
    fn cuboid_has_36_vertices() {
        let poly = cuboid(Vec3::zero(), Vec3::new(1.0, 2.0, 3.0), ShapeMode::none());
        assert_eq!(poly.len(), 36);
    }

    #[test]
    fn indexed_cuboid_has_8_corners() {
        let mesh = cuboid_indexed(Vec3::new(1.0, 1.0, 1.0), Vec3::splat(2.0), ShapeMode::none());
        assert_eq!(mesh.polygon.len(), 8);
        assert_eq!(mesh.triangle_count(), 12);
        assert!(mesh.indices.iter().all(|&i| i < 8));
    }

    #[test]
    fn faces_wind_outward() {
        let mut mesh = cuboid_indexed(Vec3::zero(), Vec3::new(2.0, 3.0, 4.0), ShapeMode::none());
        mesh.center_points_around_pos();
        let pts = &mesh.polygon.points;
        for tri in mesh.indices.chunks(3) {
            let (a, b, c) = (pts[tri[0] as usize], pts[tri[1] as usize], pts[tri[2] as usize]);
            let face_center = (a + b + c) / 3.0;
            assert!(normal(a, b, c).dot(face_center) > 0.0, "inward face {tri:?}");
        }
    }

    #[test]
    fn cube_centering_moves_offset_to_middle() {
        let mut poly = cube(Vec3::new(10.0, 0.0, 0.0), 2.0, ShapeMode::none());
        poly.center_points_around_pos();
        assert_eq!(poly.offset, Vec3::new(11.0, 1.0, 1.0));
    }

    #[test]
    fn rotation_preserves_distances_from_center() {
        let mut poly = cube(Vec3::zero(), 2.0, ShapeMode::none());
        poly.center_points_around_pos();
        poly.rotate_points(0.3, 1.1, -0.7);
        let expected = 3.0f32.sqrt();
        for p in &poly.points {
            assert!((p.length() - expected).abs() < 1e-4);
        }
    }
}
