use crate::buffer::CircleInstance;
use crate::layout::{LayoutElement, ScalarType, VertexLayout};

/// Topology builder output is laid out for.
pub const STRIP_TOPOLOGY: wgpu::PrimitiveTopology = wgpu::PrimitiveTopology::TriangleStrip;

/// Owned wgpu attribute list for one `VertexLayout`.
///
/// `wgpu::VertexBufferLayout` borrows its attributes, so this keeps them alive
/// for pipeline creation.
#[derive(Debug, Clone, PartialEq)]
pub struct WgpuVertexLayout {
    pub stride: u64,
    pub step_mode: wgpu::VertexStepMode,
    pub attributes: Vec<wgpu::VertexAttribute>,
}

impl WgpuVertexLayout {
    /// Maps each element to one attribute at consecutive shader locations
    /// starting from `first_location`.
    ///
    /// Returns `None` if an element has no wgpu vertex format (e.g. 3 bytes).
    pub fn from_layout(
        layout: &VertexLayout,
        first_location: u32,
        step_mode: wgpu::VertexStepMode,
    ) -> Option<Self> {
        let mut attributes = Vec::with_capacity(layout.elements().len());

        for (location, (offset, element)) in (first_location..).zip(layout.offsets()) {
            let Some(format) = vertex_format(element) else {
                log::debug!("no wgpu vertex format for {element:?}");
                return None;
            };
            attributes.push(wgpu::VertexAttribute {
                format,
                offset: offset as u64,
                shader_location: location,
            });
        }

        Some(Self { stride: layout.stride() as u64, step_mode, attributes })
    }

    /// Per-instance layout for `CircleInstance` records.
    pub fn circle_instances(first_location: u32) -> Self {
        Self::from_layout(&CircleInstance::layout(), first_location, wgpu::VertexStepMode::Instance)
            .expect("CircleInstance layout is float-only by construction")
    }

    pub fn buffer_layout(&self) -> wgpu::VertexBufferLayout<'_> {
        wgpu::VertexBufferLayout {
            array_stride: self.stride,
            step_mode: self.step_mode,
            attributes: &self.attributes,
        }
    }
}

fn vertex_format(element: &LayoutElement) -> Option<wgpu::VertexFormat> {
    use wgpu::VertexFormat as F;

    let format = match (element.scalar, element.components, element.normalized) {
        (ScalarType::Float, 1, _) => F::Float32,
        (ScalarType::Float, 2, _) => F::Float32x2,
        (ScalarType::Float, 3, _) => F::Float32x3,
        (ScalarType::Float, 4, _) => F::Float32x4,
        (ScalarType::Int, 1, _) => F::Sint32,
        (ScalarType::Int, 2, _) => F::Sint32x2,
        (ScalarType::Int, 3, _) => F::Sint32x3,
        (ScalarType::Int, 4, _) => F::Sint32x4,
        (ScalarType::UnsignedInt, 1, _) => F::Uint32,
        (ScalarType::UnsignedInt, 2, _) => F::Uint32x2,
        (ScalarType::UnsignedInt, 3, _) => F::Uint32x3,
        (ScalarType::UnsignedInt, 4, _) => F::Uint32x4,
        (ScalarType::UnsignedByte, 2, false) => F::Uint8x2,
        (ScalarType::UnsignedByte, 4, false) => F::Uint8x4,
        (ScalarType::UnsignedByte, 2, true) => F::Unorm8x2,
        (ScalarType::UnsignedByte, 4, true) => F::Unorm8x4,
        _ => return None,
    };
    Some(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_layout_maps_to_consecutive_locations() {
        let layout = VertexLayout::new()
            .with_element(LayoutElement::floats(2))
            .with_element(LayoutElement::floats(3));
        let wgpu_layout =
            WgpuVertexLayout::from_layout(&layout, 0, wgpu::VertexStepMode::Vertex).unwrap();

        assert_eq!(wgpu_layout.stride, 20);
        assert_eq!(
            wgpu_layout.attributes,
            vec![
                wgpu::VertexAttribute { format: wgpu::VertexFormat::Float32x2, offset: 0, shader_location: 0 },
                wgpu::VertexAttribute { format: wgpu::VertexFormat::Float32x3, offset: 8, shader_location: 1 },
            ]
        );
    }

    #[test]
    fn offsets_agree_with_wgpu_format_sizes() {
        let layout = VertexLayout::new()
            .with_element(LayoutElement::new(ScalarType::UnsignedByte, 4, true))
            .with_element(LayoutElement::new(ScalarType::UnsignedInt, 3, false))
            .with_element(LayoutElement::floats(1));
        let wgpu_layout =
            WgpuVertexLayout::from_layout(&layout, 2, wgpu::VertexStepMode::Vertex).unwrap();

        let mut expected = 0;
        for attr in &wgpu_layout.attributes {
            assert_eq!(attr.offset, expected);
            expected += attr.format.size();
        }
        assert_eq!(expected, wgpu_layout.stride);
        assert_eq!(wgpu_layout.attributes[0].shader_location, 2);
    }

    #[test]
    fn unsupported_element_yields_none() {
        let layout = VertexLayout::new().with_element(LayoutElement::new(ScalarType::UnsignedByte, 3, true));
        assert!(WgpuVertexLayout::from_layout(&layout, 0, wgpu::VertexStepMode::Vertex).is_none());
    }

    #[test]
    fn circle_instances_step_per_instance() {
        let wgpu_layout = WgpuVertexLayout::circle_instances(1);
        let buffer_layout = wgpu_layout.buffer_layout();
        assert_eq!(buffer_layout.step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(buffer_layout.array_stride, 28);
        assert_eq!(buffer_layout.attributes.len(), 4);
        assert_eq!(buffer_layout.attributes[3].shader_location, 4);
    }
}
