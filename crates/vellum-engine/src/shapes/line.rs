use crate::coords::Vec2;
use crate::mode::ShapeMode;
use crate::polygon::Polygon;

/// Segment `p1 -> p2` widened into a quad of `thickness`.
///
/// Both endpoints are pushed out by half the thickness along the unit
/// perpendicular. A zero-length segment yields a degenerate quad.
pub fn line(p1: Vec2, p2: Vec2, thickness: f32, mode: ShapeMode) -> Polygon {
    let half = (p2 - p1).normalized().perp() * (thickness / 2.0);
    Polygon::new_2d([p1 + half, p1 - half, p2 + half, p2 - half], mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec3;

    #[test]
    fn horizontal_line_offsets_vertically() {
        let poly = line(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), 2.0, ShapeMode::none());
        assert_eq!(
            poly.points,
            vec![
                Vec3::new(0.0, 6.0, 0.0),
                Vec3::new(0.0, 4.0, 0.0),
                Vec3::new(10.0, 6.0, 0.0),
                Vec3::new(10.0, 4.0, 0.0),
            ]
        );
    }

    #[test]
    fn diagonal_line_keeps_width() {
        let poly = line(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0), 4.0, ShapeMode::none());
        let width = (poly.points[0] - poly.points[1]).length();
        assert!((width - 4.0).abs() < 1e-5);
    }

    #[test]
    fn zero_length_line_is_degenerate_not_nan() {
        let p = Vec2::new(1.0, 1.0);
        let poly = line(p, p, 3.0, ShapeMode::none());
        assert!(poly.points.iter().all(|v| v.is_finite()));
    }
}
