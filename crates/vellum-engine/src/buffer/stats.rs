use std::fmt;

/// Counter snapshot for diagnostic overlays.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BufferStats {
    pub vertex_count: usize,
    pub separation_count: usize,
    pub float_count: usize,
    pub capacity: usize,
    /// `float_count / capacity` in percent; 0 for an unallocated buffer.
    pub fill_percent: f32,
}

impl fmt::Display for BufferStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} verts ({} separations), {}/{} floats ({:.1}%)",
            self.vertex_count, self.separation_count, self.float_count, self.capacity, self.fill_percent
        )
    }
}
