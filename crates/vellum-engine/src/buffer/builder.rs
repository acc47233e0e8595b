use crate::coords::{ColorRgba, Vec2};
use crate::layout::{LayoutElement, VertexLayout};
use crate::mode::ShapeMode;
use crate::polygon::Polygon;
use crate::shapes;

use super::{BufferError, BufferStats, BuilderConfig, CapacityLadder, CircleInstance};

/// Growable, capacity-tracked vertex float store.
///
/// Invariants after every public call:
/// - `float_count` is a multiple of `floats_per_vertex()`
/// - `float_count <= capacity()`
/// - the backing store is always exactly `capacity()` floats long
///
/// Not thread-safe by construction (`&mut self` everywhere); the owning
/// renderer rebuilds it from one thread, typically once per dirty frame.
#[derive(Debug, Clone)]
pub struct BufferBuilder {
    label: String,
    storage: Vec<f32>,

    float_count: usize,
    vertex_count: usize,
    separation_count: usize,

    pos_float_count: usize,
    additional_vert_floats: usize,

    auto_resize: bool,
    separate_next: bool,
    ladder: CapacityLadder,

    // Reused across polygon pushes.
    scratch: Vec<f32>,
}

impl Default for BufferBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

impl BufferBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            label: config.label,
            storage: vec![0.0; config.initial_capacity],
            float_count: 0,
            vertex_count: 0,
            separation_count: 0,
            pos_float_count: config.dims.count(),
            additional_vert_floats: config.additional_vert_floats,
            auto_resize: config.auto_resize,
            separate_next: false,
            ladder: config.ladder,
            scratch: Vec::new(),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Written floats (`float_count` long).
    #[inline]
    pub fn floats(&self) -> &[f32] {
        &self.storage[..self.float_count]
    }

    /// Entire backing store, including the unwritten zeroed tail.
    #[inline]
    pub fn raw_storage(&self) -> &[f32] {
        &self.storage
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn float_count(&self) -> usize {
        self.float_count
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn separation_count(&self) -> usize {
        self.separation_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.float_count == 0
    }

    #[inline]
    pub fn pos_float_count(&self) -> usize {
        self.pos_float_count
    }

    #[inline]
    pub fn additional_vert_floats(&self) -> usize {
        self.additional_vert_floats
    }

    #[inline]
    pub fn floats_per_vertex(&self) -> usize {
        self.pos_float_count + self.additional_vert_floats
    }

    #[inline]
    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    #[inline]
    pub fn set_auto_resize(&mut self, on: bool) {
        self.auto_resize = on;
    }

    /// Written share of the capacity, in percent.
    pub fn fill_percent(&self) -> f32 {
        if self.capacity() == 0 {
            return 0.0;
        }
        self.float_count as f32 / self.capacity() as f32 * 100.0
    }

    pub fn stats(&self) -> BufferStats {
        BufferStats {
            vertex_count: self.vertex_count,
            separation_count: self.separation_count,
            float_count: self.float_count,
            capacity: self.capacity(),
            fill_percent: self.fill_percent(),
        }
    }

    /// Position element followed by the mode tail element (if any).
    pub fn layout(&self) -> VertexLayout {
        VertexLayout::new()
            .with_element(LayoutElement::floats(self.pos_float_count as u32))
            .with_element(LayoutElement::floats(self.additional_vert_floats as u32))
    }

    // ── configuration ─────────────────────────────────────────────────────

    /// Sets the mode-tail width.
    ///
    /// Changing an already configured width, or changing it once floats were
    /// written, is logged but still applied: earlier vertices keep their old
    /// width and the buffer is left mixed.
    pub fn set_additional_vert_floats(&mut self, n: usize) {
        let current = self.additional_vert_floats;
        if n != current && (current != 0 || self.float_count > 0) {
            log::warn!(
                "{}: vertex tail width changed {current} -> {n} with {} floats written; \
                 buffer now mixes vertex widths",
                self.label,
                self.float_count
            );
        }
        self.additional_vert_floats = n;
    }

    /// Forces the next push to be separated from what is already buffered.
    #[inline]
    pub fn separate_next(&mut self) {
        self.separate_next = true;
    }

    /// Drops all vertices and zeroes the store. Capacity is kept.
    pub fn clear(&mut self) {
        self.float_count = 0;
        self.vertex_count = 0;
        self.separation_count = 0;
        self.separate_next = false;
        self.storage.fill(0.0);
        log::trace!("{}: cleared ({} floats capacity)", self.label, self.capacity());
    }

    // ── capacity ──────────────────────────────────────────────────────────

    /// Resizes the store to exactly `capacity` floats.
    ///
    /// Existing floats keep their offsets. Shrinking below the written length
    /// truncates to the last whole vertex that still fits.
    pub fn resize(&mut self, capacity: usize) {
        let old = self.capacity();
        self.storage.resize(capacity, 0.0);

        if capacity < self.float_count {
            let per = self.floats_per_vertex();
            self.float_count = capacity - capacity % per;
            self.vertex_count = self.float_count / per;
            log::warn!(
                "{}: shrunk to {capacity} floats; content truncated to {} vertices",
                self.label,
                self.vertex_count
            );
        }

        log::debug!("{}: resized {old} -> {capacity} floats", self.label);
    }

    /// Grows to the smallest ladder bucket strictly above `min_size`.
    ///
    /// Returns the new capacity. Fails without touching the store when
    /// `min_size` is at or above the largest bucket.
    pub fn auto_resize_buffer(&mut self, min_size: usize) -> Result<usize, BufferError> {
        let Some(bucket) = self.ladder.bucket_above(min_size) else {
            let largest = self.ladder.largest();
            log::warn!(
                "{}: need {min_size} floats, largest capacity bucket is {largest}; push dropped",
                self.label
            );
            return Err(BufferError::LadderExhausted { required: min_size, largest });
        };

        self.resize(bucket);
        Ok(bucket)
    }

    fn ensure_capacity(&mut self, required: usize) -> Result<(), BufferError> {
        if required <= self.capacity() {
            return Ok(());
        }

        if !self.auto_resize {
            log::warn!(
                "{}: need {required} floats, capacity {} and auto-resize off; push dropped",
                self.label,
                self.capacity()
            );
            return Err(BufferError::CapacityExceeded { required, capacity: self.capacity() });
        }

        self.auto_resize_buffer(required).map(|_| ())
    }

    // ── raw pushes ────────────────────────────────────────────────────────

    /// Appends whole vertices.
    ///
    /// With `separated` (or a pending [`separate_next`](Self::separate_next))
    /// and a non-empty buffer, the last buffered vertex and the first vertex of
    /// `data` are duplicated in front of `data`. That adds exactly two
    /// vertices and one separation. An empty `data` is a no-op.
    pub fn push_raw_floats(&mut self, data: &[f32], separated: bool) -> Result<(), BufferError> {
        self.write_vertices(data, separated || self.separate_next)
    }

    /// Shared push path. A pending `separate_next` is consumed on success but
    /// only bridges when the caller folded it into `separated`.
    fn write_vertices(&mut self, data: &[f32], separated: bool) -> Result<(), BufferError> {
        if data.is_empty() {
            return Ok(());
        }

        let per = self.floats_per_vertex();
        if data.len() % per != 0 {
            log::warn!(
                "{}: {} floats is not a whole number of {per}-float vertices; push dropped",
                self.label,
                data.len()
            );
            return Err(BufferError::Misaligned { len: data.len(), per_vertex: per });
        }

        let bridge = separated && self.float_count >= per;
        let bridge_len = if bridge { 2 * per } else { 0 };
        self.ensure_capacity(self.float_count + bridge_len + data.len())?;

        if bridge {
            let end = self.float_count;
            self.storage.copy_within(end - per..end, end);
            self.storage[end + per..end + 2 * per].copy_from_slice(&data[..per]);
            self.advance(2 * per);
            self.separation_count += 1;
        }

        let start = self.float_count;
        self.storage[start..start + data.len()].copy_from_slice(data);
        self.advance(data.len());

        self.separate_next = false;
        Ok(())
    }

    #[inline]
    fn advance(&mut self, floats: usize) {
        self.float_count += floats;
        self.vertex_count += floats / self.floats_per_vertex();
    }

    /// Appends `other`'s vertices, optionally separated from the current tail.
    ///
    /// No-op when `other` is empty. `other`'s own separations carry over.
    pub fn append_buffer(&mut self, other: &BufferBuilder, use_separation: bool) -> Result<(), BufferError> {
        if other.vertex_count == 0 {
            return Ok(());
        }
        self.check_same_width(other)?;

        self.push_raw_floats(other.floats(), use_separation)?;
        self.separation_count += other.separation_count;
        Ok(())
    }

    /// Inserts `other`'s vertices before the current content.
    ///
    /// With `use_separation` and a non-empty buffer, `other`'s last vertex and
    /// this buffer's first vertex bridge the join.
    pub fn prepend_buffer(&mut self, other: &BufferBuilder, use_separation: bool) -> Result<(), BufferError> {
        if other.vertex_count == 0 {
            return Ok(());
        }
        self.check_same_width(other)?;

        let per = self.floats_per_vertex();
        let head = other.floats();
        let bridge = use_separation && self.float_count >= per;
        let bridge_len = if bridge { 2 * per } else { 0 };
        self.ensure_capacity(head.len() + bridge_len + self.float_count)?;

        let old_len = self.float_count;
        self.storage.copy_within(0..old_len, head.len() + bridge_len);
        if bridge {
            let at = head.len();
            self.storage.copy_within(head.len() + bridge_len..head.len() + bridge_len + per, at + per);
            self.storage[at..at + per].copy_from_slice(&head[head.len() - per..]);
            self.separation_count += 1;
        }
        self.storage[..head.len()].copy_from_slice(head);

        self.advance(head.len() + bridge_len);
        self.separation_count += other.separation_count;
        Ok(())
    }

    fn check_same_width(&self, other: &BufferBuilder) -> Result<(), BufferError> {
        let (expected, actual) = (self.floats_per_vertex(), other.floats_per_vertex());
        if expected != actual {
            log::warn!(
                "{}: cannot merge '{}' ({actual} floats/vertex) into {expected} floats/vertex",
                self.label,
                other.label
            );
            return Err(BufferError::WidthMismatch { expected, actual });
        }
        Ok(())
    }

    // ── polygons ──────────────────────────────────────────────────────────

    /// Emits every point as `point + offset` followed by the mode tail.
    pub fn push_polygon(&mut self, polygon: &Polygon) -> Result<(), BufferError> {
        self.push_points(polygon, 0..polygon.len(), false)
    }

    /// Like [`push_polygon`](Self::push_polygon), separated from prior content.
    pub fn push_separated_polygon(&mut self, polygon: &Polygon) -> Result<(), BufferError> {
        self.push_points(polygon, 0..polygon.len(), true)
    }

    /// Emits points in zig-zag order (first, last, first + 1, last - 1, ...).
    ///
    /// Tails are still looked up by each point's original index.
    pub fn push_polygon_sorted(&mut self, polygon: &Polygon) -> Result<(), BufferError> {
        self.push_points(polygon, polygon.zigzag_order(), false)
    }

    pub fn push_separated_polygon_sorted(&mut self, polygon: &Polygon) -> Result<(), BufferError> {
        self.push_points(polygon, polygon.zigzag_order(), true)
    }

    /// Pushes each polygon separated from the previous one.
    pub fn push_polygons<'a>(
        &mut self,
        polygons: impl IntoIterator<Item = &'a Polygon>,
    ) -> Result<(), BufferError> {
        for polygon in polygons {
            self.push_separated_polygon(polygon)?;
        }
        Ok(())
    }

    fn push_points(
        &mut self,
        polygon: &Polygon,
        order: impl Iterator<Item = usize>,
        separated: bool,
    ) -> Result<(), BufferError> {
        let pos = self.pos_float_count;
        let tail = self.additional_vert_floats;

        let dims = polygon.dims.count();
        if dims > pos {
            log::warn!(
                "{}: {dims}D polygon pushed into a {pos}D builder; push dropped",
                self.label
            );
            return Err(BufferError::WidthMismatch { expected: pos, actual: dims });
        }

        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        scratch.reserve(polygon.len() * (pos + tail));

        for i in order {
            let p = polygon.emitted(i).to_array();
            scratch.extend_from_slice(&p[..pos]);

            let before = scratch.len();
            polygon.mode.write_tail(i, &mut scratch);
            let written = scratch.len() - before;
            if written != tail {
                log::warn!(
                    "{}: shape mode produced {written} tail floats for vertex {i}, expected {tail}; push dropped",
                    self.label
                );
                self.scratch = scratch;
                return Err(BufferError::WidthMismatch { expected: tail, actual: written });
            }
        }

        let result = self.push_raw_floats(&scratch, separated);
        self.scratch = scratch;
        result
    }

    // ── shape helpers ─────────────────────────────────────────────────────
    //
    // These always separate: each call is a disjoint shape in the strip.

    pub fn push_rect(&mut self, top_left: Vec2, size: Vec2, mode: ShapeMode) -> Result<(), BufferError> {
        self.push_separated_polygon(&shapes::rect(top_left, size, mode))
    }

    pub fn push_rect_outline(
        &mut self,
        top_left: Vec2,
        size: Vec2,
        thickness: f32,
        mode: ShapeMode,
    ) -> Result<(), BufferError> {
        self.push_separated_polygon(&shapes::rect_outline(top_left, size, thickness, mode))
    }

    pub fn push_line(&mut self, p1: Vec2, p2: Vec2, thickness: f32, mode: ShapeMode) -> Result<(), BufferError> {
        self.push_separated_polygon(&shapes::line(p1, p2, thickness, mode))
    }

    // ── instances ─────────────────────────────────────────────────────────

    /// Appends one compact circle record (never separated).
    ///
    /// The builder must be 2D with a 5-float tail (see `BuilderConfig::circles`).
    pub fn push_circle(
        &mut self,
        pos: Vec2,
        radius: f32,
        inner_radius: f32,
        colour: ColorRgba,
    ) -> Result<(), BufferError> {
        let per = self.floats_per_vertex();
        if per != CircleInstance::FLOATS || self.pos_float_count != 2 {
            log::warn!(
                "{}: circle records need 2D vertices of {} floats, builder has {per}",
                self.label,
                CircleInstance::FLOATS
            );
            return Err(BufferError::WidthMismatch { expected: CircleInstance::FLOATS, actual: per });
        }

        // Instanced records are independent: a pending separation is consumed, never bridged.
        let record = CircleInstance::new(pos, radius, inner_radius, colour);
        self.write_vertices(record.as_floats(), false)
    }
}
