//! Recursive Whitted integrator.

use whitted_math::{normalize, Ray};

use crate::{clamp_color, shade, Color, HitTarget, RenderContext, RAY_EPSILON};

/// Compute the color seen along a ray.
///
/// Lights short-circuit to their own color. Surfaces composite
/// `alpha * local + specular * reflected + (1 - alpha) * transmitted`,
/// where transmission passes straight through translucent surfaces without
/// bending. Recursion stops once `depth` exceeds the configured maximum;
/// shadow rays cast by the shader are not counted against it.
pub fn trace_ray(ctx: &RenderContext, ray: &Ray, depth: u32) -> Color {
    let settings = ctx.settings();
    if depth > settings.max_depth {
        return settings.background;
    }

    let Some(hit) = ctx.scene().closest_hit(ray) else {
        return settings.background;
    };

    let primitive = match hit.target {
        HitTarget::Light(light) => {
            log::trace!("Ray reached light at {:?} (depth {})", light.position(), depth);
            return light.color();
        }
        HitTarget::Primitive(primitive) => primitive,
    };

    let point = hit.point;
    let material = primitive.material();
    let local = shade(ctx, ray, point, primitive);

    // Mirror the hit-to-eye vector about the normal
    let view = normalize(ctx.camera().eye() - point);
    let normal = normalize(primitive.normal(point));
    let mirror = 2.0 * view.dot(normal) * normal - view;
    let reflected = trace_ray(ctx, &Ray::offset(point, mirror, RAY_EPSILON), depth + 1);

    let transmitted = if material.is_translucent() {
        trace_ray(
            ctx,
            &Ray::offset(point, ray.direction(), RAY_EPSILON),
            depth + 1,
        )
    } else {
        Color::ZERO
    };

    let alpha = material.alpha();
    clamp_color(alpha * local + material.specular * reflected + (1.0 - alpha) * transmitted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, Light, Material, Plane, Scene, Sphere};
    use whitted_core::{demo_scene, RenderSettings};
    use whitted_math::Vec3;

    fn settings() -> RenderSettings {
        RenderSettings {
            background: Color::new(0.1, 0.2, 0.3, 1.0),
            ambient: Color::ZERO,
            ..Default::default()
        }
    }

    fn context(scene: Scene) -> RenderContext {
        RenderContext::new(scene, Camera::default(), settings())
    }

    fn sphere_scene(material: Material) -> Scene {
        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, material));
        scene.add_light(Light::new(Vec3::new(0.0, 5.0, -5.0), 1.0, Color::ONE));
        scene
    }

    #[test]
    fn test_past_max_depth_returns_background() {
        let ctx = context(sphere_scene(Material::default()));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let max = ctx.settings().max_depth;
        assert_eq!(trace_ray(&ctx, &ray, max + 1), ctx.settings().background);
        assert_eq!(trace_ray(&ctx, &ray, u32::MAX), ctx.settings().background);
    }

    /// Opaque, half-mirrored sphere facing the eye, lit only by ambient.
    fn mirror_context() -> RenderContext {
        let material = Material::new(Color::new(0.3, 0.3, 0.3, 1.0)).with_phong(1.0, 1.0, 0.5, 10.0);
        let settings = RenderSettings {
            ambient: Color::new(0.1, 0.1, 0.1, 1.0),
            max_depth: 2,
            ..settings()
        };
        RenderContext::new(sphere_scene(material), Camera::default(), settings)
    }

    #[test]
    fn test_reflection_adds_specular_weighted_background() {
        let ctx = mirror_context();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = ctx.scene().closest_hit(&ray).unwrap();
        let HitTarget::Primitive(primitive) = hit.target else {
            panic!("expected the sphere");
        };
        let local = shade(&ctx, &ray, hit.point, primitive);

        // The mirror ray at (0,0,-4) heads back along +Z and hits nothing
        let background = ctx.settings().background;
        let expected = clamp_color(local + 0.5 * background);
        let color = trace_ray(&ctx, &ray, 0);

        assert_eq!(color, expected);
        assert!((color - Color::new(0.15, 0.2, 0.25, 1.0)).length() < 1e-6, "{:?}", color);
        assert_ne!(color, clamp_color(local));
    }

    #[test]
    fn test_max_depth_is_still_shaded() {
        let ctx = mirror_context();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let max = ctx.settings().max_depth;

        let at_max = trace_ray(&ctx, &ray, max);
        assert_ne!(at_max, ctx.settings().background);
        assert_eq!(at_max, trace_ray(&ctx, &ray, 0));
        assert_eq!(trace_ray(&ctx, &ray, max + 1), ctx.settings().background);
    }

    #[test]
    fn test_miss_returns_background() {
        let ctx = context(sphere_scene(Material::default()));
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(trace_ray(&ctx, &ray, 0), ctx.settings().background);

        let empty = context(Scene::new());
        assert_eq!(
            trace_ray(&empty, &Ray::new(Vec3::ZERO, Vec3::NEG_Z), 0),
            empty.settings().background
        );
    }

    #[test]
    fn test_light_hit_returns_light_color() {
        // Out-of-range color passes through untouched
        let color = Color::new(2.0, 0.5, 0.0, 1.0);
        let mut scene = Scene::new();
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, -10.0), 1.0, color));
        let ctx = context(scene);

        assert_eq!(trace_ray(&ctx, &Ray::new(Vec3::ZERO, Vec3::NEG_Z), 0), color);
    }

    #[test]
    fn test_opaque_matte_is_clamped_local_color() {
        // specular = 0 and alpha = 1 leave only the local term
        let material = Material::new(Color::new(0.3, 0.3, 0.3, 1.0)).with_phong(1.0, 1.0, 0.0, 10.0);
        let ctx = context(sphere_scene(material));
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hit = ctx.scene().closest_hit(&ray).unwrap();
        let HitTarget::Primitive(primitive) = hit.target else {
            panic!("expected the sphere");
        };
        let expected = clamp_color(shade(&ctx, &ray, hit.point, primitive));

        assert_eq!(trace_ray(&ctx, &ray, 0), expected);
    }

    #[test]
    fn test_translucent_surface_shows_what_is_behind() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let glass = Material::new(Color::new(0.0, 0.0, 0.0, 0.0)).with_phong(0.0, 0.0, 0.0, 10.0);

        let mut scene = Scene::new();
        scene.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, glass));
        scene.add_light(Light::new(Vec3::new(0.0, 0.0, -20.0), 1.0, red));
        let ctx = context(scene);

        // alpha = 0: everything comes from the transmitted ray. It starts
        // inside the sphere, where only the far root exists, so it passes
        // straight on to the light.
        let color = trace_ray(&ctx, &Ray::new(Vec3::ZERO, Vec3::NEG_Z), 0);
        assert_eq!(color, red);
    }

    #[test]
    fn test_output_channels_are_clamped() {
        let mut scene = sphere_scene(Material::default());
        scene.add(Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, Material::default()));
        let ctx = context(scene);

        for dir in [Vec3::NEG_Z, Vec3::new(0.1, -0.3, -1.0), Vec3::new(-0.2, 0.1, -1.0)] {
            let color = trace_ray(&ctx, &Ray::new(Vec3::ZERO, normalize(dir)), 0);
            for channel in color.to_array() {
                assert!((0.0..=1.0).contains(&channel), "channel {}", channel);
            }
        }
    }

    #[test]
    fn test_trace_is_deterministic() {
        let ctx = RenderContext::from_description(&demo_scene()).unwrap();
        let camera = ctx.camera();
        for (i, j) in [(250, 150), (100, 40), (400, 260)] {
            let ray = camera.primary_ray(i, j, 500, 300);
            assert_eq!(trace_ray(&ctx, &ray, 0), trace_ray(&ctx, &ray, 0));
        }
    }
}
