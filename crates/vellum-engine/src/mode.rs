//! Per-vertex tail generators.
//!
//! A `ShapeMode` decides which floats trail each vertex position, independently
//! of how many points the shape has. Resolution happens in exactly one place
//! (`write_tail`), matched exhaustively over the variants.

use crate::coords::ColorRgba;
use crate::texture::AtlasRegion;

/// Generator for the float block appended after each vertex position.
///
/// Out-of-range indices never fail: `Unpack` wraps around its blocks,
/// `Demonstration` clamps to its last value. The asymmetry is intentional.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeMode {
    /// Same `vars` for every vertex.
    Append(Vec<f32>),
    /// `blocks[i % blocks.len()]`.
    Unpack(Vec<Vec<f32>>),
    /// Unpacked block followed by `vars`.
    UnpackAppend { blocks: Vec<Vec<f32>>, vars: Vec<f32> },
    /// `vars` followed by the unpacked block.
    AppendUnpack { vars: Vec<f32>, blocks: Vec<Vec<f32>> },
    /// Mode tag followed by `values[min(i, len - 1)]`.
    Demonstration { tag: u32, values: Vec<Vec<f32>> },
}

impl Default for ShapeMode {
    fn default() -> Self {
        ShapeMode::none()
    }
}

impl ShapeMode {
    /// Mode with an empty tail.
    #[inline]
    pub fn none() -> Self {
        ShapeMode::Append(Vec::new())
    }

    #[inline]
    pub fn append(vars: impl Into<Vec<f32>>) -> Self {
        ShapeMode::Append(vars.into())
    }

    #[inline]
    pub fn unpack(blocks: Vec<Vec<f32>>) -> Self {
        ShapeMode::Unpack(blocks)
    }

    /// Constant RGB tail.
    #[inline]
    pub fn solid(color: ColorRgba) -> Self {
        ShapeMode::Append(color.to_rgb().to_vec())
    }

    /// Per-corner UVs of an atlas region followed by the texture slot.
    ///
    /// Corner order matches `shapes::rect` emission (TL, BL, TR, BR).
    pub fn textured_quad(region: AtlasRegion, slot: u32) -> Self {
        ShapeMode::UnpackAppend {
            blocks: region.corner_uvs().iter().map(|uv| uv.to_vec()).collect(),
            vars: vec![slot as f32],
        }
    }

    /// The index-dependent block for vertex `i`.
    ///
    /// For `Append` this is the constant vars; for the mixed variants it is the
    /// unpacked part only.
    pub fn var(&self, i: usize) -> &[f32] {
        match self {
            ShapeMode::Append(vars) => vars.as_slice(),
            ShapeMode::Unpack(blocks)
            | ShapeMode::UnpackAppend { blocks, .. }
            | ShapeMode::AppendUnpack { blocks, .. } => wrapped(blocks, i),
            ShapeMode::Demonstration { values, .. } => clamped(values, i),
        }
    }

    /// Appends the full tail for vertex `i` to `out`.
    pub fn write_tail(&self, i: usize, out: &mut Vec<f32>) {
        match self {
            ShapeMode::Append(vars) => out.extend_from_slice(vars),
            ShapeMode::Unpack(blocks) => out.extend_from_slice(wrapped(blocks, i)),
            ShapeMode::UnpackAppend { blocks, vars } => {
                out.extend_from_slice(wrapped(blocks, i));
                out.extend_from_slice(vars);
            }
            ShapeMode::AppendUnpack { vars, blocks } => {
                out.extend_from_slice(vars);
                out.extend_from_slice(wrapped(blocks, i));
            }
            ShapeMode::Demonstration { tag, values } => {
                out.push(*tag as f32);
                out.extend_from_slice(clamped(values, i));
            }
        }
    }

    /// Tail for vertex `i` as an owned vector.
    pub fn tail(&self, i: usize) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.tail_len());
        self.write_tail(i, &mut out);
        out
    }

    /// Width of the tail, taken from the first block where blocks are involved.
    pub fn tail_len(&self) -> usize {
        let first = |blocks: &[Vec<f32>]| blocks.first().map_or(0, Vec::len);
        match self {
            ShapeMode::Append(vars) => vars.len(),
            ShapeMode::Unpack(blocks) => first(blocks),
            ShapeMode::UnpackAppend { blocks, vars } | ShapeMode::AppendUnpack { vars, blocks } => {
                first(blocks) + vars.len()
            }
            ShapeMode::Demonstration { values, .. } => 1 + first(values),
        }
    }
}

#[inline]
fn wrapped(blocks: &[Vec<f32>], i: usize) -> &[f32] {
    if blocks.is_empty() {
        return &[];
    }
    &blocks[i % blocks.len()]
}

#[inline]
fn clamped(values: &[Vec<f32>], i: usize) -> &[f32] {
    match values.len() {
        0 => &[],
        n => &values[i.min(n - 1)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks() -> Vec<Vec<f32>> {
        vec![vec![1.0, 2.0], vec![3.0, 4.0]]
    }

    // ── Append ────────────────────────────────────────────────────────────

    #[test]
    fn append_is_constant() {
        let mode = ShapeMode::append([1.0, 0.0, 0.0]);
        for i in 0..5 {
            assert_eq!(mode.tail(i), vec![1.0, 0.0, 0.0]);
        }
        assert_eq!(mode.tail_len(), 3);
    }

    #[test]
    fn none_has_empty_tail() {
        assert!(ShapeMode::none().tail(7).is_empty());
        assert_eq!(ShapeMode::default().tail_len(), 0);
    }

    // ── Unpack ────────────────────────────────────────────────────────────

    #[test]
    fn unpack_wraps_around() {
        let mode = ShapeMode::unpack(blocks());
        for i in [0, 2, 4, 6] {
            assert_eq!(mode.tail(i), vec![1.0, 2.0]);
        }
        for i in [1, 3, 5, 7] {
            assert_eq!(mode.tail(i), vec![3.0, 4.0]);
        }
    }

    #[test]
    fn unpack_without_blocks_is_empty() {
        let mode = ShapeMode::unpack(Vec::new());
        assert!(mode.var(3).is_empty());
        assert_eq!(mode.tail_len(), 0);
    }

    // ── mixed ─────────────────────────────────────────────────────────────

    #[test]
    fn unpack_append_puts_block_first() {
        let mode = ShapeMode::UnpackAppend { blocks: blocks(), vars: vec![9.0] };
        assert_eq!(mode.tail(1), vec![3.0, 4.0, 9.0]);
        assert_eq!(mode.tail_len(), 3);
    }

    #[test]
    fn append_unpack_puts_vars_first() {
        let mode = ShapeMode::AppendUnpack { vars: vec![9.0], blocks: blocks() };
        assert_eq!(mode.tail(2), vec![9.0, 1.0, 2.0]);
        assert_eq!(mode.var(3), &[3.0, 4.0]);
    }

    // ── Demonstration ─────────────────────────────────────────────────────

    #[test]
    fn demonstration_clamps_instead_of_wrapping() {
        let mode = ShapeMode::Demonstration { tag: 2, values: blocks() };
        assert_eq!(mode.var(0), &[1.0, 2.0]);
        assert_eq!(mode.var(1), &[3.0, 4.0]);
        for i in 2..10 {
            assert_eq!(mode.var(i), &[3.0, 4.0]);
        }
    }

    #[test]
    fn demonstration_tail_leads_with_tag() {
        let mode = ShapeMode::Demonstration { tag: 5, values: blocks() };
        assert_eq!(mode.tail(0), vec![5.0, 1.0, 2.0]);
        assert_eq!(mode.tail_len(), 3);
    }

    // ── textures ──────────────────────────────────────────────────────────

    #[test]
    fn textured_quad_cycles_corners_and_appends_slot() {
        let mode = ShapeMode::textured_quad(AtlasRegion::new(0.0, 0.0, 0.5, 0.25), 3);
        assert_eq!(mode.tail(0), vec![0.0, 0.0, 3.0]);
        assert_eq!(mode.tail(1), vec![0.0, 0.25, 3.0]);
        assert_eq!(mode.tail(2), vec![0.5, 0.0, 3.0]);
        assert_eq!(mode.tail(3), vec![0.5, 0.25, 3.0]);
        assert_eq!(mode.tail(4), mode.tail(0));
    }
}
