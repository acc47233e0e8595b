//! Growable float store for triangle-strip vertex streams.
//!
//! A `BufferBuilder` accumulates fixed-width vertices into one contiguous
//! `f32` array. Disjoint shapes share a single strip through degenerate
//! separation: two duplicated vertices bridge the previous shape's last vertex
//! to the next shape's first, producing only zero-area triangles.
//!
//! Every push is atomic. It either applies fully or returns a `BufferError`
//! (also logged) with the builder byte-for-byte unchanged.

mod builder;
mod circle;
mod config;
mod error;
mod ladder;
mod stats;

pub use builder::BufferBuilder;
pub use circle::CircleInstance;
pub use config::BuilderConfig;
pub use error::BufferError;
pub use ladder::CapacityLadder;
pub use stats::BufferStats;
