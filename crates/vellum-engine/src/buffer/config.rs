use crate::polygon::Dims;

use super::{CapacityLadder, CircleInstance};

/// Construction parameters for a `BufferBuilder`.
///
/// `dims` and `additional_vert_floats` together fix the vertex width
/// (`dims.count() + additional_vert_floats`).
#[derive(Debug, Clone)]
pub struct BuilderConfig {
    /// Name used in log messages ("main shapes", "circles", ...).
    pub label: String,
    pub dims: Dims,
    pub additional_vert_floats: usize,
    /// Initial capacity in floats.
    pub initial_capacity: usize,
    pub auto_resize: bool,
    pub ladder: CapacityLadder,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            label: "vertex buffer".to_owned(),
            dims: Dims::Two,
            additional_vert_floats: 0,
            initial_capacity: CapacityLadder::DEFAULT_FIRST,
            auto_resize: true,
            ladder: CapacityLadder::default(),
        }
    }
}

impl BuilderConfig {
    /// 2D builder sized for `CircleInstance` records.
    pub fn circles() -> Self {
        Self::default()
            .with_label("circles")
            .with_additional_vert_floats(CircleInstance::TAIL_FLOATS)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_dims(mut self, dims: Dims) -> Self {
        self.dims = dims;
        self
    }

    pub fn with_additional_vert_floats(mut self, n: usize) -> Self {
        self.additional_vert_floats = n;
        self
    }

    pub fn with_capacity(mut self, floats: usize) -> Self {
        self.initial_capacity = floats;
        self
    }

    pub fn with_auto_resize(mut self, on: bool) -> Self {
        self.auto_resize = on;
        self
    }

    pub fn with_ladder(mut self, ladder: CapacityLadder) -> Self {
        self.ladder = ladder;
        self
    }
}
