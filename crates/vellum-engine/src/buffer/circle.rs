use bytemuck::{Pod, Zeroable};

use crate::coords::{ColorRgba, Vec2};
use crate::layout::{LayoutElement, VertexLayout};

/// One instanced circle record (28 bytes, 7 floats):
///
///  offset  0  center        [f32; 2]
///  offset  8  radius        f32
///  offset 12  inner_radius  f32   (0 = solid disc)
///  offset 16  color         [f32; 3]
///
/// Records are drawn by instancing a fixed base triangle; they never take part
/// in strip separation.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub inner_radius: f32,
    pub color: [f32; 3],
}

impl CircleInstance {
    /// Floats per record.
    pub const FLOATS: usize = 7;
    /// Floats after the 2D position (radius, inner radius, rgb).
    pub const TAIL_FLOATS: usize = Self::FLOATS - 2;

    pub fn new(center: Vec2, radius: f32, inner_radius: f32, color: ColorRgba) -> Self {
        Self {
            center: [center.x, center.y],
            radius,
            inner_radius,
            color: color.to_rgb(),
        }
    }

    #[inline]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }

    pub fn layout() -> VertexLayout {
        VertexLayout::new()
            .with_element(LayoutElement::floats(2)) // center
            .with_element(LayoutElement::floats(1)) // radius
            .with_element(LayoutElement::floats(1)) // inner radius
            .with_element(LayoutElement::floats(3)) // color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_seven_floats() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), CircleInstance::FLOATS * 4);
        assert_eq!(CircleInstance::layout().stride(), std::mem::size_of::<CircleInstance>());
    }

    #[test]
    fn as_floats_matches_field_order() {
        let c = CircleInstance::new(Vec2::new(1.0, 2.0), 3.0, 0.5, ColorRgba::rgb(0.1, 0.2, 0.3));
        assert_eq!(c.as_floats(), &[1.0, 2.0, 3.0, 0.5, 0.1, 0.2, 0.3]);
    }
}
