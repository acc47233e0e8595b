use crate::coords::Vec2;
use crate::mode::ShapeMode;
use crate::polygon::Polygon;

/// Quad covering `[top_left, top_left + size]`.
///
/// Points are local to `top_left` (which becomes the polygon offset) in
/// strip order: TL, BL, TR, BR.
pub fn rect(top_left: Vec2, size: Vec2, mode: ShapeMode) -> Polygon {
    let (w, h) = (size.x, size.y);
    Polygon::new_2d(
        [Vec2::new(0.0, 0.0), Vec2::new(0.0, h), Vec2::new(w, 0.0), Vec2::new(w, h)],
        mode,
    )
    .with_offset(top_left)
}

/// Hollow rectangular border of uniform `thickness`, drawn inward from the
/// outer edge.
///
/// Ten points: (outer, inner) pairs for TL, TR, BR, BL, then the TL pair again
/// to close the ring. A negative size extends left/up from `top_left`; the
/// rectangle is normalized first so the inner ring stays inside.
pub fn rect_outline(top_left: Vec2, size: Vec2, thickness: f32, mode: ShapeMode) -> Polygon {
    let origin = Vec2::new(top_left.x + size.x.min(0.0), top_left.y + size.y.min(0.0));
    let (w, h) = (size.x.abs(), size.y.abs());
    let t = thickness.max(0.0).min(w / 2.0).min(h / 2.0);

    let ring = [
        Vec2::new(0.0, 0.0),
        Vec2::new(t, t),
        Vec2::new(w, 0.0),
        Vec2::new(w - t, t),
        Vec2::new(w, h),
        Vec2::new(w - t, h - t),
        Vec2::new(0.0, h),
        Vec2::new(t, h - t),
    ];

    Polygon::new_2d(ring.iter().chain(&ring[..2]).copied(), mode).with_offset(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;

    #[test]
    fn rect_corners_in_strip_order() {
        let poly = rect(Vec2::new(5.0, 6.0), Vec2::new(10.0, 4.0), ShapeMode::none());
        let emitted: Vec<Vec3> = (0..poly.len()).map(|i| poly.emitted(i)).collect();
        assert_eq!(
            emitted,
            vec![
                Vec3::new(5.0, 6.0, 0.0),
                Vec3::new(5.0, 10.0, 0.0),
                Vec3::new(15.0, 6.0, 0.0),
                Vec3::new(15.0, 10.0, 0.0),
            ]
        );
    }

    #[test]
    fn outline_closes_the_ring() {
        let poly = rect_outline(Vec2::zero(), Vec2::new(10.0, 10.0), 2.0, ShapeMode::none());
        assert_eq!(poly.len(), 10);
        assert_eq!(poly.points[8], poly.points[0]);
        assert_eq!(poly.points[9], poly.points[1]);
        assert_eq!(poly.points[1], Vec3::new(2.0, 2.0, 0.0));
        assert_eq!(poly.points[5], Vec3::new(8.0, 8.0, 0.0));
    }

    #[test]
    fn outline_thickness_is_capped_at_half_size() {
        let poly = rect_outline(Vec2::zero(), Vec2::new(4.0, 10.0), 9.0, ShapeMode::none());
        // inner TL collapses onto the vertical center line
        assert_eq!(poly.points[1], Vec3::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn outline_with_negative_size_keeps_inner_ring_inside() {
        let flipped = rect_outline(Vec2::new(10.0, 10.0), Vec2::new(-10.0, -10.0), 2.0, ShapeMode::none());
        let plain = rect_outline(Vec2::zero(), Vec2::new(10.0, 10.0), 2.0, ShapeMode::none());

        let emitted = |p: &Polygon| (0..p.len()).map(|i| p.emitted(i)).collect::<Vec<Vec3>>();
        assert_eq!(emitted(&flipped), emitted(&plain));
        assert_eq!(flipped.emitted(1), Vec3::new(2.0, 2.0, 0.0));
    }
}
