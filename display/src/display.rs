use sdl2::pixels::PixelFormatEnum;
use thiserror::Error;

use chipvm_core::Screen;

const TITLE: &str = "chipvm";

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("SDL2 error: {0}")]
    Sdl(String),

    #[error("a {width}x{height} screen scaled by {scale} doesn't fit in a window")]
    WindowTooLarge {
        width: usize,
        height: usize,
        scale: usize,
    },
}

fn sdl_error<E: ToString>(e: E) -> DisplayError {
    DisplayError::Sdl(e.to_string())
}

/// Window dimensions in physical pixels
fn window_size(width: usize, height: usize, scale: usize) -> Result<(u32, u32), DisplayError> {
    let scaled = |side: usize| {
        side.checked_mul(scale)
            .and_then(|pixels| u32::try_from(pixels).ok())
    };
    match (scaled(width), scaled(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(DisplayError::WindowTooLarge {
            width,
            height,
            scale,
        }),
    }
}

/// # Display
/// A window showing a monochrome screen, each pixel blown up to a `scale` x `scale` square.
/// The display only gets a call to `render` when the screen has been updated.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    width: usize,
    height: usize,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `width` the horizontal size of the screen measured in pixels
    /// * `height` the vertical size of the screen measured in pixels
    /// * `scale` the size multiplier for each pixel
    pub fn new(
        sdl: &sdl2::Sdl,
        width: usize,
        height: usize,
        scale: usize,
    ) -> Result<Self, DisplayError> {
        let (window_width, window_height) = window_size(width, height, scale)?;
        let video_subsystem = sdl.video().map_err(sdl_error)?;
        let window = video_subsystem
            .window(TITLE, window_width, window_height)
            .position_centered()
            .opengl()
            .build()
            .map_err(sdl_error)?;
        let canvas = window.into_canvas().build().map_err(sdl_error)?;

        Ok(Display {
            canvas,
            width,
            height,
        })
    }

    /// Formats a screen for rendering as an SDL2 texture.
    ///
    /// An SDL2 RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
    ///
    /// This creates a black and white rendering by:
    /// - Walking the screen row by row
    /// - Triplicating each pixel to represent its RGB values
    /// - Mapping lit pixels to full intensity and unlit ones to 0
    fn frame_to_sdl_texture(screen: &dyn Screen) -> Vec<u8> {
        (0..screen.height())
            .flat_map(|y| (0..screen.width()).map(move |x| (x, y)))
            .map(|(x, y)| if screen.pixel(x, y) { 0xFF } else { 0x00 })
            .flat_map(|intensity| std::iter::repeat(intensity).take(3))
            .collect()
    }

    /// Formats the screen as an SDL2 RGB24 texture and renders it.
    pub fn render(&mut self, screen: &dyn Screen) -> Result<(), DisplayError> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                self.width as u32,
                self.height as u32,
            )
            .map_err(sdl_error)?;

        let pixels = Display::frame_to_sdl_texture(screen);
        let row_len = self.width * 3;
        texture
            .with_lock(None, |buffer: &mut [u8], pitch: usize| {
                // rows may be padded out to `pitch` bytes
                for (row, line) in pixels.chunks(row_len).enumerate() {
                    buffer[row * pitch..row * pitch + row_len].copy_from_slice(line);
                }
            })
            .map_err(sdl_error)?;

        self.canvas.copy(&texture, None, None).map_err(sdl_error)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chipvm_core::FrameBuffer;

    #[test]
    fn test_frame_to_sdl_texture() {
        let mut frame = FrameBuffer::new(64, 32);
        frame.draw_sprite((1, 0), &[0b1000_0000]);
        frame.draw_sprite((0, 1), &[0b1000_0000]);
        let texture = Display::frame_to_sdl_texture(&frame);

        let mut expected: Vec<u8> = vec![0; 6144];
        expected[0..6].copy_from_slice(&[0, 0, 0, 255, 255, 255]);
        expected[192..198].copy_from_slice(&[255, 255, 255, 0, 0, 0]);

        assert_eq!(texture, expected);
    }

    #[test]
    fn test_window_size_scales_the_screen() {
        assert_eq!(window_size(64, 32, 10).unwrap(), (640, 320));
    }

    #[test]
    fn test_window_size_rejects_oversized_scales() {
        assert!(matches!(
            window_size(64, 32, usize::MAX),
            Err(DisplayError::WindowTooLarge { scale: usize::MAX, .. })
        ));
        assert!(window_size(64, 32, u32::MAX as usize).is_err());
    }

    #[test]
    fn test_texture_follows_screen_size() {
        let frame = FrameBuffer::new(12, 24);
        assert_eq!(Display::frame_to_sdl_texture(&frame).len(), 12 * 24 * 3);
    }
}
