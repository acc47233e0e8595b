use crate::coords::Vec3;
use crate::mode::ShapeMode;
use crate::polygon::Polygon;

use super::IndexedPolygon;

/// Triangle list for a right-angle triangular prism: two caps and three
/// quads, counter-clockwise when seen from outside.
pub const TRI_PRISM_INDICES: [u32; 24] = [
    3, 4, 5, // front cap (+z)
    0, 2, 1, // back cap  (-z)
    0, 1, 4, 0, 4, 3, // bottom (-y)
    0, 3, 5, 0, 5, 2, // left   (-x)
    1, 2, 5, 1, 5, 4, // hypotenuse
];

/// Indexed right-angle prism local to `pos`.
///
/// The right angle sits at the local origin; legs run `size.x` along +X and
/// `size.y` along +Y, extruded `size.z` along +Z. 6 corners, 24 indices.
pub fn tri_prism_indexed(pos: Vec3, size: Vec3, mode: ShapeMode) -> IndexedPolygon {
    let Vec3 { x: w, y: h, z: d } = size;
    let corners = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(w, 0.0, 0.0),
        Vec3::new(0.0, h, 0.0),
        Vec3::new(0.0, 0.0, d),
        Vec3::new(w, 0.0, d),
        Vec3::new(0.0, h, d),
    ];
    IndexedPolygon {
        polygon: Polygon::new_3d(corners, mode).with_offset(pos),
        indices: TRI_PRISM_INDICES.to_vec(),
    }
}

/// Unindexed prism: 24 triangle-list vertices.
pub fn tri_prism(pos: Vec3, size: Vec3, mode: ShapeMode) -> Polygon {
    tri_prism_indexed(pos, size, mode).expand()
}
