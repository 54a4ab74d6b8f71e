//! Scene file loading.
//!
//! Scenes are stored as JSON. Every field has a default, so a file only
//! needs to list what differs from the defaults. Loaded scenes are always
//! validated before they are returned.

use std::path::Path;

use crate::scene::{SceneDescription, SceneResult};

/// Load and validate a JSON scene file.
///
/// # Example
///
/// ```ignore
/// use whitted_core::load_scene;
///
/// let scene = load_scene("scenes/spheres.json")?;
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene from: {:?}", path);

    let source = std::fs::read_to_string(path)?;
    load_scene_from_str(&source)
}

/// Parse and validate a JSON scene from a string.
pub fn load_scene_from_str(source: &str) -> SceneResult<SceneDescription> {
    let scene: SceneDescription = serde_json::from_str(source)?;
    scene.validate()?;

    log::info!(
        "Loaded {} objects and {} lights ({}x{}, max depth {})",
        scene.objects.len(),
        scene.lights.len(),
        scene.settings.width,
        scene.settings.height,
        scene.settings.max_depth
    );

    Ok(scene)
}
