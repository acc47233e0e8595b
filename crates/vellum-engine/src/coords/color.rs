/// Linear RGBA color.
///
/// Buffers only carry the RGB channels (circle records, color tails); alpha is
/// kept so colors can be shared with paint code that needs it.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn red() -> Self {
        Self::rgb(1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn green() -> Self {
        Self::rgb(0.0, 1.0, 0.0)
    }

    #[inline]
    pub const fn blue() -> Self {
        Self::rgb(0.0, 0.0, 1.0)
    }

    #[inline]
    pub fn to_rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}
