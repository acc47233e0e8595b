//! Clockwise reordering of polygon points without inverse trig.
//!
//! Each point gets a scalar rank built from which side of `axis` it lies on and
//! how closely its direction from `center` aligns with `axis`:
//!
//! - `on_side = p.x * axis.y - p.y * axis.x`
//! - `dot = normalize(p - center) . normalize(axis)`
//! - `rank = dot + 3` when `on_side > 0`, else `1 - dot`
//!
//! Ranks from the positive side always land in `[2, 4]`, the negative side in
//! `[0, 2]`. The rank is quantized to `fidelity` decimal places and sorted with
//! an LSD base-10 radix sort (stable, `fidelity + 1` passes).

use crate::coords::Vec3;
use crate::polygon::Dims;

/// Decimal places kept in the rank key unless told otherwise.
pub const DEFAULT_FIDELITY: u32 = 2;

/// f32 ranks carry about 7 significant digits; more places only add noise.
pub const MAX_FIDELITY: u32 = 6;

/// Returns the permutation that puts `points` in clockwise order.
///
/// `result[k]` is the index into `points` of the k-th point in the new order.
/// A zero `center` is replaced by `(1, 1)` (2D) or `(1, 1, 1)` (3D).
pub fn clockwise_order(
    points: &[Vec3],
    dims: Dims,
    axis: Vec3,
    center: Vec3,
    fidelity: u32,
) -> Vec<usize> {
    let fidelity = fidelity.min(MAX_FIDELITY);
    let center = if center.is_zero() {
        match dims {
            Dims::Two => Vec3::new(1.0, 1.0, 0.0),
            Dims::Three => Vec3::splat(1.0),
        }
    } else {
        center
    };

    let scale = 10u64.pow(fidelity) as f32;
    let keys: Vec<u64> = points
        .iter()
        .map(|&p| quantize(rank(p, axis, center), scale))
        .collect();

    radix_sort(&keys, fidelity + 1)
}

/// Reorders `points` clockwise; see [`clockwise_order`].
///
/// The result is a permutation of the input: nothing is added, dropped or
/// altered.
pub fn sort_points(
    points: &[Vec3],
    dims: Dims,
    axis: Vec3,
    center: Vec3,
    fidelity: u32,
) -> Vec<Vec3> {
    clockwise_order(points, dims, axis, center, fidelity)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

fn rank(p: Vec3, axis: Vec3, center: Vec3) -> f32 {
    let on_side = p.x * axis.y - p.y * axis.x;
    let dot = (p - center).normalized().dot(axis.normalized());
    if on_side > 0.0 { dot + 3.0 } else { -dot + 1.0 }
}

#[inline]
fn quantize(rank: f32, scale: f32) -> u64 {
    // NaN and negatives saturate to 0.
    (rank * scale).round() as u64
}

/// Stable LSD radix sort over base-10 digits; returns the index permutation.
///
/// Digits past a key's length read as 0.
fn radix_sort(keys: &[u64], passes: u32) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    let mut buckets: [Vec<usize>; 10] = Default::default();

    let mut place = 1u64;
    for _ in 0..passes {
        for bucket in buckets.iter_mut() {
            bucket.clear();
        }
        for &i in &order {
            let digit = ((keys[i] / place) % 10) as usize;
            buckets[digit].push(i);
        }

        order.clear();
        for bucket in &buckets {
            order.extend_from_slice(bucket);
        }
        place = place.saturating_mul(10);
    }

    order
}
