//! Whitted Core - Scene description and render settings.
//!
//! This crate provides:
//!
//! - **Scene description types**: `SceneDescription`, `ObjectDescription`,
//!   `LightDescription`, `MaterialDescription`
//! - **Render context settings**: `CameraSettings`, `RenderSettings`
//! - **Loading**: JSON scene files with validation
//! - **Demo scene**: the built-in showcase scene
//!
//! Everything here is renderer-agnostic plain data. The renderer turns a
//! validated description into its own intersectable scene.
//!
//! # Example
//!
//! ```ignore
//! use whitted_core::load_scene;
//!
//! let scene = load_scene("scene.json")?;
//! println!("Loaded {} objects, {} lights",
//!     scene.objects.len(),
//!     scene.lights.len());
//! ```

pub mod demo;
pub mod loader;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use demo::demo_scene;
pub use loader::{load_scene, load_scene_from_str};
pub use scene::{
    Checker, LightDescription, MaterialDescription, ObjectDescription, PlaneDescription,
    SceneDescription, SceneError, SceneResult, SphereDescription, TriangleDescription,
};
pub use settings::{CameraSettings, RenderSettings};
