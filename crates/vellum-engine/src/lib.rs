//! Vellum engine crate.
//!
//! Turns declarative shapes into one flat, interleaved `f32` vertex stream for
//! a triangle-strip (or instanced) draw:
//!
//! shape constructors -> `Polygon` (points + `ShapeMode`) -> `BufferBuilder`
//! -> flat floats + `VertexLayout` -> GPU upload.
//!
//! ```ignore
//! let mut shapes = BufferBuilder::new(
//!     BuilderConfig::default().with_label("main shapes").with_additional_vert_floats(3),
//! );
//! shapes.push_rect(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), ShapeMode::solid(ColorRgba::red()))?;
//! shapes.push_line(Vec2::new(0.0, 20.0), Vec2::new(40.0, 20.0), 2.0, ShapeMode::solid(ColorRgba::blue()))?;
//! stream.upload(&ctx, &shapes);
//! ```

pub mod buffer;
pub mod coords;
pub mod layout;
pub mod logging;
pub mod mode;
pub mod polygon;
pub mod render;
pub mod shapes;
pub mod texture;
pub mod winding;

pub use buffer::{BufferBuilder, BufferError, BuilderConfig};
pub use mode::ShapeMode;
pub use polygon::{Dims, Polygon};
