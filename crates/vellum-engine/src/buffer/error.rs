use std::fmt;

/// Why a push or resize was dropped.
///
/// Every variant means the builder is byte-for-byte unchanged.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferError {
    /// The push does not fit and auto-resize is off.
    CapacityExceeded { required: usize, capacity: usize },
    /// No ladder bucket is larger than `required`.
    LadderExhausted { required: usize, largest: usize },
    /// Raw data length is not a whole number of vertices.
    Misaligned { len: usize, per_vertex: usize },
    /// Vertex widths disagree (mode tail, polygon dims, circle record, appended buffer).
    WidthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            BufferError::CapacityExceeded { required, capacity } => write!(
                f,
                "buffer needs {required} floats but capacity is {capacity} and auto-resize is off"
            ),
            BufferError::LadderExhausted { required, largest } => write!(
                f,
                "buffer needs {required} floats but the largest capacity bucket is {largest}"
            ),
            BufferError::Misaligned { len, per_vertex } => write!(
                f,
                "{len} floats is not a multiple of {per_vertex} floats per vertex"
            ),
            BufferError::WidthMismatch { expected, actual } => {
                write!(f, "vertex width mismatch: expected {expected} floats, got {actual}")
            }
        }
    }
}

impl std::error::Error for BufferError {}
