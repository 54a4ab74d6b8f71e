//! Per-pixel driver and the output image buffer.
//!
//! Pixel (0, 0) is the bottom-left corner, matching the camera. The buffer
//! stores rows bottom-up and flips them when converting to bytes, so the
//! encoded image has its top row first.

use std::time::Instant;

use crate::{trace_ray, Color, RenderContext};

/// Convert a color to 8-bit RGBA.
///
/// Channels are clamped and scaled linearly, with no gamma curve. Alpha is
/// always opaque.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let to_byte = |c: f32| (255.0 * c.clamp(0.0, 1.0)) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z), 255]
}

/// Trace the primary ray for pixel (i, j).
pub fn render_pixel(ctx: &RenderContext, i: u32, j: u32) -> Color {
    let settings = ctx.settings();
    let ray = ctx
        .camera()
        .primary_ray(i, j, settings.width, settings.height);
    trace_ray(ctx, &ray, 0)
}

/// Image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Row-major, bottom row first
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    fn index(&self, i: u32, j: u32) -> Option<usize> {
        (i < self.width && j < self.height).then(|| j as usize * self.width as usize + i as usize)
    }

    /// Get the pixel at (i, j), or `None` outside the image.
    pub fn get(&self, i: u32, j: u32) -> Option<Color> {
        self.index(i, j).map(|idx| self.pixels[idx])
    }

    /// Set the pixel at (i, j). Writes outside the image are ignored.
    pub fn set(&mut self, i: u32, j: u32, color: Color) {
        if let Some(idx) = self.index(i, j) {
            self.pixels[idx] = color;
        }
    }

    /// Convert to RGBA bytes, top row first.
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        if self.width == 0 {
            return bytes;
        }
        for row in self.pixels.chunks(self.width as usize).rev() {
            for color in row {
                bytes.extend_from_slice(&color_to_rgba(*color));
            }
        }
        bytes
    }
}

/// Render the entire image on the calling thread.
pub fn render(ctx: &RenderContext) -> ImageBuffer {
    let settings = ctx.settings();
    let start = Instant::now();
    let mut image = ImageBuffer::new(settings.width, settings.height);

    for j in 0..settings.height {
        for i in 0..settings.width {
            image.set(i, j, render_pixel(ctx, i, j));
        }
    }

    log::info!(
        "Rendered {}x{} sequentially in {:.2?}",
        settings.width,
        settings.height,
        start.elapsed()
    );
    image
}
