use crate::buffer::BufferBuilder;

use super::RenderCtx;

/// Smallest GPU allocation, in bytes.
const MIN_STREAM_BYTES: u64 = 4096;

/// GPU vertex buffer mirroring one `BufferBuilder`.
///
/// Grows by powers of two and is never shrunk; `upload` rewrites the written
/// prefix only.
#[derive(Default)]
pub struct GpuVertexStream {
    buffer: Option<wgpu::Buffer>,
    capacity_bytes: u64,
    vertex_count: u32,
}

impl GpuVertexStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the builder's written floats into the GPU buffer.
    pub fn upload(&mut self, ctx: &RenderCtx<'_>, builder: &BufferBuilder) {
        self.vertex_count = builder.vertex_count() as u32;

        let bytes: &[u8] = bytemuck::cast_slice(builder.floats());
        if bytes.is_empty() {
            return;
        }

        self.ensure_capacity(ctx, builder.label(), bytes.len() as u64);

        let Some(buffer) = self.buffer.as_ref() else { return };
        ctx.queue.write_buffer(buffer, 0, bytes);
    }

    /// Vertices (or instances) from the last upload.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    #[inline]
    pub fn capacity_bytes(&self) -> u64 {
        self.capacity_bytes
    }

    /// Whole-buffer slice for `set_vertex_buffer`, once something was uploaded.
    pub fn slice(&self) -> Option<wgpu::BufferSlice<'_>> {
        self.buffer.as_ref().map(|b| b.slice(..))
    }

    fn ensure_capacity(&mut self, ctx: &RenderCtx<'_>, label: &str, required: u64) {
        if required <= self.capacity_bytes && self.buffer.is_some() {
            return;
        }

        let new_size = required.next_power_of_two().max(MIN_STREAM_BYTES);
        self.buffer = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: new_size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.capacity_bytes = new_size;
        log::debug!("{label}: gpu vertex buffer now {new_size} bytes");
    }
}
