use std::path::Path;

use anyhow::{Context, Result};
use whitted_renderer::ImageBuffer;

/// Write the rendered image as an 8-bit RGBA PNG.
pub fn save_png(image: &ImageBuffer, path: &Path) -> Result<()> {
    let bytes = image.to_rgba();
    image::save_buffer(path, &bytes, image.width, image.height, image::ColorType::Rgba8)
        .with_context(|| format!("failed to write {}", path.display()))?;

    log::info!("Saved {}x{} image to {}", image.width, image.height, path.display());
    Ok(())
}
