//! Parametric shape constructors.
//!
//! Every constructor returns a `Polygon` whose point order is already correct
//! for triangle-strip (2D) or triangle-list (3D) assembly, so nothing needs to
//! reorder points downstream.

mod cuboid;
mod line;
mod prism;
mod rect;

pub use cuboid::{cube, cuboid, cuboid_indexed, CUBOID_INDICES};
pub use line::line;
pub use prism::{tri_prism, tri_prism_indexed, TRI_PRISM_INDICES};
pub use rect::{rect, rect_outline};

use crate::coords::Vec2;
use crate::mode::ShapeMode;
use crate::polygon::Polygon;

/// Generic 2D polygon from caller-ordered points.
#[inline]
pub fn polygon(points: impl IntoIterator<Item = Vec2>, mode: ShapeMode) -> Polygon {
    Polygon::new_2d(points, mode)
}

/// Unique corner vertices plus a triangle index list.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPolygon {
    pub polygon: Polygon,
    pub indices: Vec<u32>,
}

impl IndexedPolygon {
    /// Unindexed copy: one point per index, same offset and mode.
    pub fn expand(&self) -> Polygon {
        Polygon {
            points: self.indices.iter().map(|&i| self.polygon.points[i as usize]).collect(),
            offset: self.polygon.offset,
            mode: self.polygon.mode.clone(),
            dims: self.polygon.dims,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn rotate_points(&mut self, roll: f32, pitch: f32, yaw: f32) {
        self.polygon.rotate_points(roll, pitch, yaw);
    }

    pub fn center_points_around_pos(&mut self) {
        self.polygon.center_points_around_pos();
    }
}
