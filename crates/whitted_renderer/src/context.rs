//! Immutable render context.

use whitted_core::{RenderSettings, SceneDescription, SceneResult};

use crate::{Camera, Scene};

/// Everything a render pass reads: scene, camera and settings.
///
/// Built once before rendering and only ever borrowed immutably while
/// tracing, so it can be shared freely across worker threads.
#[derive(Debug, Clone)]
pub struct RenderContext {
    scene: Scene,
    camera: Camera,
    settings: RenderSettings,
}

impl RenderContext {
    pub fn new(scene: Scene, camera: Camera, settings: RenderSettings) -> Self {
        Self {
            scene,
            camera,
            settings,
        }
    }

    /// Validate a description and build the context from it.
    pub fn from_description(desc: &SceneDescription) -> SceneResult<Self> {
        desc.validate()?;
        Ok(Self::new(
            Scene::from_description(desc),
            Camera::from(&desc.camera),
            desc.settings,
        ))
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }
}
