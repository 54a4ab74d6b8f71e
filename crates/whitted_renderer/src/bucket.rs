//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that are traced independently
//! and in parallel using rayon. Every pixel is a pure function of the
//! render context, so the result matches a sequential render bit for bit.

use std::time::Instant;

use rayon::prelude::*;

use crate::renderer::render_pixel;
use crate::{Color, ImageBuffer, RenderContext};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Column of the bucket's bottom-left pixel
    pub x: u32,
    /// Row of the bucket's bottom-left pixel
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in the render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Generate buckets covering a `width` x `height` image, center first.
///
/// Edge buckets are cropped to the image. A `bucket_size` of zero yields
/// no buckets.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    if bucket_size == 0 {
        return Vec::new();
    }

    let mut buckets = Vec::new();
    for y in (0..height).step_by(bucket_size as usize) {
        for x in (0..width).step_by(bucket_size as usize) {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, 0));
        }
    }

    sort_spiral(&mut buckets, width, height);

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from the image center. The sort is stable, so
/// equidistant buckets keep their grid order.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    let distance = |b: &Bucket| {
        let bx = b.x as f32 + b.width as f32 / 2.0;
        let by = b.y as f32 + b.height as f32 / 2.0;
        (bx - center_x).powi(2) + (by - center_y).powi(2)
    };

    buckets.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Pixel colors in row-major order within the bucket
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy the bucket's pixels into their place in `image`.
    pub fn write_into(&self, image: &mut ImageBuffer) {
        let width = self.bucket.width.max(1) as usize;
        for (n, color) in self.pixels.iter().enumerate() {
            let i = self.bucket.x + (n % width) as u32;
            let j = self.bucket.y + (n / width) as u32;
            image.set(i, j, *color);
        }
    }
}

/// Render a single bucket.
pub fn render_bucket(bucket: &Bucket, ctx: &RenderContext) -> BucketResult {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            pixels.push(render_pixel(ctx, bucket.x + local_x, bucket.y + local_y));
        }
    }

    log::debug!(
        "Bucket {} at ({}, {}) done: {}x{}",
        bucket.index,
        bucket.x,
        bucket.y,
        bucket.width,
        bucket.height
    );
    BucketResult::new(*bucket, pixels)
}

/// Render the entire image across the current rayon thread pool.
pub fn render_parallel(ctx: &RenderContext) -> ImageBuffer {
    let settings = ctx.settings();
    let start = Instant::now();
    let buckets = generate_buckets(settings.width, settings.height, settings.bucket_size);

    log::info!(
        "Rendering {}x{} in {} buckets on {} threads",
        settings.width,
        settings.height,
        buckets.len(),
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, ctx))
        .collect();

    let mut image = ImageBuffer::new(settings.width, settings.height);
    for result in &results {
        result.write_into(&mut image);
    }

    log::info!("Render finished in {:.2?}", start.elapsed());
    image
}
