//! Coordinate and color value types shared by shapes, modes and buffers.
//!
//! Canonical CPU space:
//! - 2D geometry is logical pixels, origin top-left, +X right, +Y down
//! - 3D geometry uses the same X/Y with +Z towards the viewer
//!
//! 2D points are stored as `Vec3` with `z = 0` once they enter a `Polygon`.

mod color;
mod vec2;
mod vec3;

pub use color::ColorRgba;
pub use vec2::Vec2;
pub use vec3::Vec3;
