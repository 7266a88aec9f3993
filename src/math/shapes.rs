use super::Point;

/// True when `p` lies inside or on the edge of the circle.
pub fn circle(pc: Point, r: f32, p: Point) -> bool {
    pc.distance(p) <= r
}

/// Two discs overlap when their centers are closer than the sum of
/// their radii. Touching discs do not overlap.
pub fn circles_overlap(a: Point, ra: f32, b: Point, rb: f32) -> bool {
    a.distance(b) < ra + rb
}
