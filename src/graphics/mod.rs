pub mod blend;
pub mod draw;
pub mod render;

use blend::{Argb, Mixer};

pub const DEFAULT_BACKGROUND: Argb = 0xFF_FF_FF_FF;

pub(crate) trait Pixel: Copy + Clone + Sized + std::fmt::Debug {
    fn white() -> Self;
    fn trans() -> Self;

    fn mix(self, other: Self) -> Self;

    fn set_alpha(self, alpha: u8) -> Self;

    fn alpha(self) -> u8;

    fn decompose(self) -> [u8; 4];
    fn compose(array: [u8; 4]) -> Self;
}

/// CPU-side drawing surface. Drawing happens on a transparent
/// buffer; the background is only composited in when the frame
/// leaves the buffer.
pub struct PixelBuffer {
    buffer: Vec<Argb>,
    width: usize,
    height: usize,

    mixer: Mixer,
    background: Argb,
}

impl PixelBuffer {
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            buffer: vec![Argb::trans(); w * h],
            width: w,
            height: h,

            mixer: u32::mix,
            background: DEFAULT_BACKGROUND,
        }
    }

    pub fn set_background(&mut self, bg: Argb) {
        self.background = bg.set_alpha(0xFF);
    }

    pub fn background(&self) -> Argb {
        self.background
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.buffer.fill(Argb::trans());
    }

    pub fn pixel(&self, i: usize) -> Argb {
        self.buffer.get(i).copied().unwrap_or(Argb::trans())
    }

    /// The pixel as it appears on screen, i.e. over the background.
    pub fn pixel_on_background(&self, x: usize, y: usize) -> Argb {
        if x >= self.width || y >= self.height {
            return self.background;
        }

        self.background.mix(self.pixel(y * self.width + x))
    }

    // The destination may be wider than `width * scale`
    // (e.g. when the compositor hands us a bigger surface than
    // requested), so its stride is passed separately.
    pub fn scale_to(&self, scale: usize, dest: &mut [Argb], dst_width: Option<usize>) {
        if self.width == 0 || scale == 0 {
            return;
        }

        let dst_width = dst_width.unwrap_or(self.width * scale);

        if dst_width == 0 {
            return;
        }

        dest.fill(self.background);

        self.buffer
            .chunks_exact(self.width) // source lines
            .flat_map(|line| std::iter::repeat(line).take(scale))
            .zip(dest.chunks_exact_mut(dst_width)) // with destination lines
            .flat_map(|(src_row, dst_row)| src_row.iter().zip(dst_row.chunks_mut(scale)))
            .for_each(|(src_pixel, dst_chunk)| {
                dst_chunk.fill(self.background.mix(*src_pixel))
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_transparent() {
        let pix = PixelBuffer::new(4, 3);
        assert_eq!((pix.width(), pix.height()), (4, 3));
        assert!((0..12).all(|i| pix.pixel(i) == Argb::trans()));
        assert_eq!(pix.pixel_on_background(1, 1), DEFAULT_BACKGROUND);
    }

    #[test]
    fn background_is_forced_opaque() {
        let mut pix = PixelBuffer::new(1, 1);
        pix.set_background(0x00_10_20_30);
        assert_eq!(pix.background(), 0xFF_10_20_30);
    }

    #[test]
    fn scale_to_repeats_pixels() {
        let mut pix = PixelBuffer::new(2, 1);
        pix.draw_span(0, 1, 1, 0xFF_00_00_FF);

        let mut dest = vec![0u32; 4 * 2];
        pix.scale_to(2, &mut dest, None);

        assert_eq!(&dest[0..2], &[DEFAULT_BACKGROUND; 2]);
        assert_eq!(&dest[2..4], &[0xFF_00_00_FF; 2]);
        assert_eq!(dest[4..8], dest[0..4]);
    }

    #[test]
    fn scale_to_wider_destination_pads_with_background() {
        let mut pix = PixelBuffer::new(1, 1);
        pix.draw_span(0, 0, 0, 0xFF_00_FF_00);

        let mut dest = vec![0u32; 3];
        pix.scale_to(1, &mut dest, Some(3));

        assert_eq!(dest, vec![0xFF_00_FF_00, DEFAULT_BACKGROUND, DEFAULT_BACKGROUND]);
    }
}
