pub mod rng;
pub mod shapes;
pub mod vec2;

/// Plain 2D vector. Canvas positions are `Vec2<f32>`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

pub type Point = Vec2<f32>;

pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

pub fn lerp_vec(a: Point, b: Point, t: f32) -> Point {
    Point::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn lerp_vec_moves_both_axes() {
        let p = lerp_vec(Point::new(0.0, 100.0), Point::new(100.0, 0.0), 0.25);
        assert_eq!(p, Point::new(25.0, 75.0));
    }
}
