//! GPU boundary.
//!
//! Turns builder output into what a wgpu renderer consumes: vertex attribute
//! descriptors and an uploaded vertex buffer. Pipelines, shaders and draw
//! calls stay with the caller.

mod ctx;
mod layout;
mod stream;

pub use ctx::RenderCtx;
pub use layout::{WgpuVertexLayout, STRIP_TOPOLOGY};
pub use stream::GpuVertexStream;
