//! Whitted Renderer - recursive CPU ray tracing
//!
//! Casts one ray per pixel and recursively evaluates reflected and
//! transmitted light on top of Phong local illumination with hard shadows.
//!
//! The pipeline, leaves first:
//! - [`Primitive`] / [`Light`]: ray intersection queries
//! - [`Scene`]: brute-force closest-hit over every light and primitive
//! - [`shade`]: Phong illumination with a shadow ray per light
//! - [`trace_ray`]: depth-bounded recursive compositor
//! - [`Camera`]: pixel coordinates to primary rays

mod bucket;
mod camera;
mod context;
mod integrator;
mod light;
mod material;
mod plane;
mod primitive;
mod renderer;
mod scene;
mod shader;
mod sphere;
mod triangle;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult};
pub use camera::Camera;
pub use context::RenderContext;
pub use integrator::trace_ray;
pub use light::Light;
pub use material::{clamp_color, Color, Material};
pub use plane::Plane;
pub use primitive::{Intersection, Primitive};
pub use renderer::{color_to_rgba, render, render_pixel, ImageBuffer};
pub use scene::{Hit, HitTarget, Scene};
pub use shader::shade;
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export Vec3 and common math types from whitted_math
pub use whitted_math::{Interval, Ray, Vec3, Vec4};

/// Offset applied along an outgoing direction before a secondary
/// closest-hit query, so the surface being left is not re-selected.
pub const RAY_EPSILON: f32 = 0.001;
