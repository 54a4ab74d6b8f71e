//! Phong local illumination with hard shadows.

use whitted_math::{normalize, Ray, Vec3};

use crate::{Color, Light, Primitive, RenderContext, Scene, RAY_EPSILON};

/// Phong color of `point` on `primitive`, lit by every light in the scene.
///
/// Sums diffuse and specular terms per light, each tinted by the light's
/// attenuated color plus the surface color, then adds the ambient term.
/// The result is not clamped; the integrator clamps once at the end.
///
/// The view vector runs from `point` to the camera eye, so the incoming
/// ray is not consulted.
pub fn shade(ctx: &RenderContext, _ray: &Ray, point: Vec3, primitive: &Primitive) -> Color {
    let scene = ctx.scene();
    let material = primitive.material();

    let normal = normalize(primitive.normal(point));
    let view = normalize(ctx.camera().eye() - point);
    let surface = primitive.surface_color(point);

    let mut color = Color::ZERO;

    for light in scene.lights() {
        let to_light = normalize(light.position() - point);
        let n_dot_l = to_light.dot(normal);
        let reflected = normalize(2.0 * n_dot_l * normal - to_light);

        let tint = light.color_at(point) + surface;

        let diffuse_coefficient = n_dot_l.max(0.0);
        let mut diffuse = diffuse_coefficient * material.diffuse * tint;

        let specular_coefficient = reflected.dot(view).max(0.0).powf(material.shininess);
        let mut specular = specular_coefficient * material.specular * tint;

        if !reaches_light(scene, point, to_light, light) {
            let intensity = light.intensity_at(point);
            diffuse *= 0.25 * intensity;
            specular *= intensity;
        }

        color += diffuse + specular;
    }

    color + ctx.settings().ambient * material.ambient
}

/// Shadow test: does a ray from `point` toward the light arrive at it?
///
/// Succeeds only when the closest hit is exactly the light position, which
/// is what a light's own intersection test reports.
fn reaches_light(scene: &Scene, point: Vec3, to_light: Vec3, light: &Light) -> bool {
    let shadow_ray = Ray::offset(point, to_light, RAY_EPSILON);
    scene
        .closest_hit(&shadow_ray)
        .is_some_and(|hit| hit.point == light.position())
}
