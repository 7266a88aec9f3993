use super::Circle;
use crate::math::Point;

/// Index of the topmost circle containing `p`. Later slots are drawn
/// later, so the scan runs from the back.
pub fn hit_test(circles: &[Circle], p: Point) -> Option<usize> {
    circles.iter().rposition(|c| c.contains(p))
}

/// Maps a position on a host surface of size `surface` onto a canvas
/// of size `canvas` (both `(width, height)`).
pub fn to_canvas(p: Point, surface: (f32, f32), canvas: (f32, f32)) -> Point {
    let sx = if surface.0 > 0.0 { canvas.0 / surface.0 } else { 1.0 };
    let sy = if surface.1 > 0.0 { canvas.1 / surface.1 } else { 1.0 };

    Point::new(p.x * sx, p.y * sy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlapping() -> Vec<Circle> {
        vec![
            Circle::new(Point::new(50.0, 50.0), 40.0),
            Circle::new(Point::new(70.0, 50.0), 30.0),
            Circle::new(Point::new(200.0, 50.0), 10.0),
        ]
    }

    #[test]
    fn topmost_wins() {
        assert_eq!(hit_test(&overlapping(), Point::new(60.0, 50.0)), Some(1));
    }

    #[test]
    fn falls_through_to_lower_slots() {
        assert_eq!(hit_test(&overlapping(), Point::new(15.0, 50.0)), Some(0));
    }

    #[test]
    fn edge_counts_as_hit() {
        assert_eq!(hit_test(&overlapping(), Point::new(210.0, 50.0)), Some(2));
    }

    #[test]
    fn miss() {
        assert_eq!(hit_test(&overlapping(), Point::new(150.0, 150.0)), None);
        assert_eq!(hit_test(&[], Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn canvas_mapping_scales_each_axis() {
        let p = to_canvas(Point::new(40.0, 12.5), (80.0, 25.0), (1280.0, 800.0));
        assert_eq!(p, Point::new(640.0, 400.0));

        let same = to_canvas(Point::new(3.0, 4.0), (0.0, 0.0), (10.0, 10.0));
        assert_eq!(same, Point::new(3.0, 4.0));
    }
}
