use super::{blend::Argb, PixelBuffer};

use crate::math::Point;

impl PixelBuffer {
    /// Horizontal run from `xs` to `xe` inclusive, clipped to the buffer.
    pub fn draw_span(&mut self, y: i32, xs: i32, xe: i32, c: Argb) {
        if y < 0 || y as usize >= self.height || xe < xs {
            return;
        }

        let xs = xs.max(0) as usize;
        let xe = (xe.max(-1) + 1) as usize;
        let xe = xe.min(self.width);

        if xs >= xe {
            return;
        }

        let start = y as usize * self.width;
        let b = self.mixer;

        for p in &mut self.buffer[start + xs..start + xe] {
            *p = b(*p, c);
        }
    }

    /// Filled disc. Every covered pixel is blended exactly once,
    /// which matters for translucent colors. A pixel is covered when
    /// its center lies within `radius` of `center`.
    pub fn fill_disc(&mut self, center: Point, radius: f32, c: Argb) {
        if !(radius > 0.0) {
            return;
        }

        let ys = (center.y - radius - 0.5).ceil() as i32;
        let ye = (center.y + radius - 0.5).floor() as i32;

        for y in ys..=ye {
            let dy = y as f32 + 0.5 - center.y;
            let span = radius * radius - dy * dy;

            if span < 0.0 {
                continue;
            }

            let half = span.sqrt();

            let xs = (center.x - half - 0.5).ceil() as i32;
            let xe = (center.x + half - 0.5).floor() as i32;

            self.draw_span(y, xs, xe, c);
        }
    }
}
