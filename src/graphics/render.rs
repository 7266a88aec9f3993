use super::{
    blend::{rgba, Argb},
    PixelBuffer,
};

use crate::scene::Scene;

/// Tint of the circle in slot 0. This follows the slot,
/// not the center role.
pub fn slot_color(index: usize) -> Argb {
    if index == 0 {
        return rgba(100, 150, 255, 0.5);
    }

    let blue = index.saturating_mul(30).min(255) as u8;
    rgba(255, 100, blue, 0.7)
}

/// Clears the canvas and redraws every circle in slot order.
pub fn draw_scene(scene: &Scene, pix: &mut PixelBuffer) {
    pix.clear();

    for (index, circle) in scene.circles().iter().enumerate() {
        pix.fill_disc(circle.pos, circle.radius, slot_color(index));
    }
}
