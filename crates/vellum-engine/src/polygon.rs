//! Polygon value object: ordered points + emission offset + shape mode.

use crate::coords::{Vec2, Vec3};
use crate::mode::ShapeMode;
use crate::winding;

/// Position width of a polygon or builder: 2 or 3 floats.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Dims {
    #[default]
    Two,
    Three,
}

impl Dims {
    #[inline]
    pub const fn count(self) -> usize {
        match self {
            Dims::Two => 2,
            Dims::Three => 3,
        }
    }
}

/// Ordered point list emitted as `point + offset`, with one `ShapeMode`
/// shared by every vertex.
///
/// Polygons are transient: build, push into a `BufferBuilder`, drop.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<Vec3>,
    pub offset: Vec3,
    pub mode: ShapeMode,
    pub dims: Dims,
}

impl Polygon {
    pub fn new_2d(points: impl IntoIterator<Item = Vec2>, mode: ShapeMode) -> Self {
        Self {
            points: points.into_iter().map(Vec3::from).collect(),
            offset: Vec3::zero(),
            mode,
            dims: Dims::Two,
        }
    }

    pub fn new_3d(points: Vec<Vec3>, mode: ShapeMode) -> Self {
        Self { points, offset: Vec3::zero(), mode, dims: Dims::Three }
    }

    #[inline]
    pub fn with_offset(mut self, offset: impl Into<Vec3>) -> Self {
        self.offset = offset.into();
        self
    }

    #[inline]
    pub fn with_mode(mut self, mode: ShapeMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Emitted position of point `i` (`points[i] + offset`).
    #[inline]
    pub fn emitted(&self, i: usize) -> Vec3 {
        self.points[i] + self.offset
    }

    /// Mean of the distinct local points; zero for an empty polygon.
    ///
    /// Repeated points (closing pairs, shared corners of unindexed meshes) are
    /// counted once so they do not pull the centroid towards themselves.
    pub fn centroid(&self) -> Vec3 {
        let mut keys: Vec<[u32; 3]> = self
            .points
            .iter()
            .map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
            .collect();
        keys.sort_unstable();
        keys.dedup();

        if keys.is_empty() {
            return Vec3::zero();
        }
        let sum = keys.iter().fold(Vec3::zero(), |acc, k| {
            acc + Vec3::new(f32::from_bits(k[0]), f32::from_bits(k[1]), f32::from_bits(k[2]))
        });
        sum / keys.len() as f32
    }

    /// Moves the emission offset.
    #[inline]
    pub fn translate(&mut self, by: Vec3) {
        self.offset += by;
    }

    /// Rotates every local point in place: Z by `yaw`, then Y by `pitch`, then
    /// X by `roll` (radians).
    ///
    /// Rotation is about the local origin; call
    /// [`center_points_around_pos`](Self::center_points_around_pos) first to
    /// spin a shape about its own centroid.
    pub fn rotate_points(&mut self, roll: f32, pitch: f32, yaw: f32) {
        for p in &mut self.points {
            *p = p.rotated_z(yaw).rotated_y(pitch).rotated_x(roll);
        }
    }

    /// Makes the centroid the local origin.
    ///
    /// The old centroid moves into `offset`, so emitted positions are unchanged.
    pub fn center_points_around_pos(&mut self) {
        let c = self.centroid();
        for p in &mut self.points {
            *p -= c;
        }
        self.offset += c;
    }

    /// Reorders points clockwise around the centroid (see `winding`).
    pub fn sort_clockwise(&mut self, axis: Vec3, fidelity: u32) {
        let center = self.centroid();
        self.points = winding::sort_points(&self.points, self.dims, axis, center, fidelity);
    }

    /// Zig-zag visiting order: first, last, first + 1, last - 1, ...
    pub fn zigzag_order(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.points.len();
        (0..n).map(move |k| if k % 2 == 0 { k / 2 } else { n - 1 - k / 2 })
    }
}
