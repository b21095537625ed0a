use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Anything the CPU can draw on.
///
/// Implementors own the pixel state; the CPU only clears it, blits sprites onto it
/// and lets renderers read it back.
pub trait Screen {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Whether the pixel in column `x` of row `y` is lit
    fn pixel(&self, x: usize, y: usize) -> bool;

    /// Unlights every pixel
    fn clear(&mut self);

    /// XORs `sprite` onto the screen with its top left corner at `origin`.
    /// Returns whether any lit pixel was unlit in the process.
    fn draw_sprite(&mut self, origin: (usize, usize), sprite: &[u8]) -> bool;
}

/// # FrameBuffer
/// A monochrome bit grid, 64x32 pixels by default.
///
/// Pixels are stored row by row, so `(x, y)` lives at `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl FrameBuffer {
    /// # Panics
    /// If either dimension is 0.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "a frame buffer needs at least one pixel");
        FrameBuffer {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    fn offset(&self, x: usize, y: usize) -> usize {
        (y % self.height) * self.width + (x % self.width)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl Screen for FrameBuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixel(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[self.offset(x, y)]
    }

    fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = false);
    }

    /// Each byte of `sprite` is a row of 8 pixels, most significant bit leftmost.
    /// Pixels falling off an edge wrap around to the opposite one.
    fn draw_sprite(&mut self, origin: (usize, usize), sprite: &[u8]) -> bool {
        let (x, y) = origin;
        let mut collision = false;

        for (row, byte) in sprite.iter().enumerate() {
            for bit in 0..8 {
                let sprite_pixel = (byte >> (7 - bit)) & 1 == 1;
                let offset = self.offset(x + bit, y + row);
                collision |= sprite_pixel && self.pixels[offset];
                self.pixels[offset] ^= sprite_pixel;
            }
        }

        collision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The "1" glyph, narrower than 8 pixels
    const ONE: [u8; 5] = [0b0010_0000, 0b0110_0000, 0b0010_0000, 0b0010_0000, 0b0111_0000];

    fn lit(frame: &FrameBuffer) -> Vec<(usize, usize)> {
        let mut lit = Vec::new();
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                if frame.pixel(x, y) {
                    lit.push((x, y));
                }
            }
        }
        lit
    }

    #[test]
    fn test_draws_msb_leftmost() {
        let mut frame = FrameBuffer::new(12, 24);
        frame.draw_sprite((0, 0), &[0b1000_0001]);
        assert_eq!(lit(&frame), vec![(0, 0), (7, 0)]);
    }

    #[test]
    fn test_clear() {
        let mut frame = FrameBuffer::default();
        frame.draw_sprite((3, 3), &ONE);
        frame.clear();
        assert!(lit(&frame).is_empty());
    }

    #[test]
    fn test_shifted_redraw_collides() {
        let mut frame = FrameBuffer::new(12, 24);
        let (x, y) = (2, 2);

        assert!(!frame.draw_sprite((x, y), &ONE));
        assert!(frame.draw_sprite((x, y + 1), &ONE));

        assert!(frame.pixel(x + 2, y));
        assert!(frame.pixel(x + 1, y + 1));
        assert!(!frame.pixel(x + 2, y + 1));
        assert!(!frame.pixel(x, y + 1));
        assert_eq!(
            lit(&frame),
            vec![(4, 2), (3, 3), (3, 4), (3, 6), (5, 6), (3, 7), (4, 7), (5, 7)]
        );
    }

    #[test]
    fn test_drawing_twice_restores_frame() {
        let mut frame = FrameBuffer::new(12, 24);
        frame.draw_sprite((5, 1), &[0xFF, 0x81]);
        let before = frame.clone();

        frame.draw_sprite((1, 2), &ONE);
        frame.draw_sprite((1, 2), &ONE);

        assert_eq!(frame, before);
    }

    #[test]
    fn test_wraps_around_edges() {
        let mut frame = FrameBuffer::new(12, 24);
        frame.draw_sprite((10, 23), &[0b1110_0000, 0b1000_0000]);
        assert_eq!(lit(&frame), vec![(10, 0), (0, 23), (10, 23), (11, 23)]);
    }

    #[test]
    fn test_origin_wraps() {
        let mut frame = FrameBuffer::new(12, 24);
        frame.draw_sprite((13, 25), &[0b1000_0000]);
        assert_eq!(lit(&frame), vec![(1, 1)]);
    }

    #[test]
    fn test_collision_only_on_overlap() {
        let mut frame = FrameBuffer::new(12, 24);
        frame.draw_sprite((0, 0), &[0b1010_0000]);
        assert!(!frame.draw_sprite((0, 0), &[0b0101_0000]));
        assert!(frame.draw_sprite((0, 0), &[0b0001_0000]));
        assert_eq!(lit(&frame), vec![(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    fn test_out_of_range_pixels_are_unlit() {
        let frame = FrameBuffer::new(12, 24);
        assert!(!frame.pixel(12, 0));
        assert!(!frame.pixel(0, 24));
    }
}
