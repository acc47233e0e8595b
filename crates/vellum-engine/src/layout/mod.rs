//! Vertex layout descriptors.
//!
//! A `VertexLayout` says how the consecutive floats of one vertex map onto
//! typed attribute slots (position, mode tag, mode variables, ...). It carries
//! no behavior beyond aggregation: the GPU side turns it into attribute
//! pointers (see `render::WgpuVertexLayout`).
//!
//! ```ignore
//! let layout = VertexLayout::new()
//!     .with_element(LayoutElement::floats(2)) // position
//!     .with_element(LayoutElement::floats(1)) // mode tag
//!     .with_element(LayoutElement::floats(3)); // mode vars
//! assert_eq!(layout.stride(), 24);
//! ```

/// Scalar type of a layout element component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    /// 32-bit float.
    Float,
    /// 32-bit signed integer.
    Int,
    /// 32-bit unsigned integer.
    UnsignedInt,
    /// 8-bit unsigned integer (usually normalized to 0.0-1.0).
    UnsignedByte,
}

impl ScalarType {
    /// Size of one component in bytes.
    pub fn size(self) -> usize {
        match self {
            Self::Float | Self::Int | Self::UnsignedInt => 4,
            Self::UnsignedByte => 1,
        }
    }
}

/// One attribute slot: `components` scalars of type `scalar`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutElement {
    pub scalar: ScalarType,
    pub components: u32,
    pub normalized: bool,
}

impl LayoutElement {
    pub const fn new(scalar: ScalarType, components: u32, normalized: bool) -> Self {
        Self { scalar, components, normalized }
    }

    /// Non-normalized float element, the common case for builder output.
    pub const fn floats(components: u32) -> Self {
        Self::new(ScalarType::Float, components, false)
    }

    /// Size of the element in bytes.
    pub fn size(&self) -> usize {
        self.components as usize * self.scalar.size()
    }
}

/// Ordered list of layout elements for one interleaved vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    elements: Vec<LayoutElement>,
}

impl VertexLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style append.
    pub fn with_element(mut self, element: LayoutElement) -> Self {
        self.push(element);
        self
    }

    /// Appends an element. Zero-component elements are skipped.
    pub fn push(&mut self, element: LayoutElement) {
        if element.components == 0 {
            return;
        }
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[LayoutElement] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Per-vertex byte stride: sum of `components * sizeof(scalar)`.
    pub fn stride(&self) -> usize {
        self.elements.iter().map(LayoutElement::size).sum()
    }

    /// Total component count across all elements.
    ///
    /// For float-only layouts this equals the builder's floats per vertex.
    pub fn component_count(&self) -> usize {
        self.elements.iter().map(|e| e.components as usize).sum()
    }

    /// Byte offset of each element within the vertex.
    pub fn offsets(&self) -> impl Iterator<Item = (usize, &LayoutElement)> + '_ {
        self.elements.iter().scan(0usize, |offset, e| {
            let at = *offset;
            *offset += e.size();
            Some((at, e))
        })
    }
}
