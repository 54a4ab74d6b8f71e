//! Built-in demo scene.
//!
//! Three colored point lights over a spiral of small spheres, a translucent
//! central sphere, two translucent triangles and a pair of tetrahedra,
//! boxed in by three planes.

use std::f32::consts::PI;

use whitted_math::{Vec3, Vec4};

use crate::scene::{
    LightDescription, MaterialDescription, ObjectDescription, PlaneDescription, SceneDescription,
    SphereDescription, TriangleDescription,
};

const RING_SPHERES: u32 = 22;

/// Build the demo scene with default camera and render settings.
pub fn demo_scene() -> SceneDescription {
    let mut scene = SceneDescription::new();

    scene.add_light(LightDescription::new(
        Vec3::new(0.0, 10.0, -15.0),
        2.0,
        Vec4::new(0.0, 0.0, 1.0, 1.0),
    ));
    scene.add_light(LightDescription::new(
        Vec3::new(20.0, -1.5, 15.0),
        2.0,
        Vec4::new(1.0, 1.0, 0.0, 1.0),
    ));
    scene.add_light(LightDescription::new(
        Vec3::new(-20.0, 10.0, 12.5),
        3.0,
        Vec4::new(1.0, 0.0, 0.0, 1.0),
    ));

    // Spiral ring of growing spheres
    let n = RING_SPHERES as f32;
    for i in 0..RING_SPHERES {
        let i = i as f32;
        let radius = i / (4.0 * n) + 2.25 / n;
        let angle = 2.0 * PI * i / n;
        let center = Vec3::new(
            2.0 * angle.cos() + 3.25 * i / n - 2.0,
            2.0 * angle.sin() + 2.75 * i / n - 1.0,
            2.0 * radius - 12.0,
        );
        let shade = 2.0 * i / n;

        scene.add_object(ObjectDescription::Sphere(SphereDescription {
            center,
            radius,
            material: MaterialDescription {
                color: Vec4::new(shade, shade, 0.0, 1.0),
                ambient: 0.1,
                specular: 0.90,
                shininess: 5.0,
                ..Default::default()
            },
        }));
    }

    // Translucent central sphere
    scene.add_object(ObjectDescription::Sphere(SphereDescription {
        center: Vec3::new(0.0, 0.0, -15.0),
        radius: 2.0,
        material: MaterialDescription {
            color: Vec4::new(1.0, 0.0, 0.0, 0.30),
            ambient: 0.1,
            specular: 0.95,
            shininess: 3.0,
            refraction: 2.0,
            ..Default::default()
        },
    }));

    // Back wall, front wall (translucent) and floor
    let wall = |point: Vec3, normal: Vec3, alpha: f32, specular: f32, shininess: f32| {
        ObjectDescription::Plane(PlaneDescription {
            point,
            normal,
            material: MaterialDescription {
                color: Vec4::new(0.0, 0.0, 0.3, alpha),
                ambient: 1.0,
                specular,
                shininess,
                ..Default::default()
            },
            checker: None,
        })
    };
    scene.add_object(wall(Vec3::new(0.0, 0.0, -25.0), Vec3::Z, 1.0, 0.95, 20.0));
    scene.add_object(wall(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, 0.5, 0.95, 20.0));
    scene.add_object(wall(Vec3::new(0.0, -3.0, 0.0), Vec3::Y, 1.0, 0.55, 100.0));

    // Two translucent triangles
    let glass = |color: Vec4| MaterialDescription {
        color,
        ambient: 0.3,
        specular: 0.05,
        shininess: 500.0,
        refraction: 2.0,
        ..Default::default()
    };
    scene.add_object(ObjectDescription::Triangle(TriangleDescription {
        v0: Vec3::new(1.5, 0.0, -5.0),
        v1: Vec3::new(3.0, 2.0, -5.0),
        v2: Vec3::new(4.5, 0.0, -5.0),
        material: glass(Vec4::new(0.5, 0.0, 0.5, 0.30)),
    }));
    scene.add_object(ObjectDescription::Triangle(TriangleDescription {
        v0: Vec3::new(3.5, 1.0, -8.0),
        v1: Vec3::new(5.0, 3.0, -8.0),
        v2: Vec3::new(6.5, 1.0, -8.0),
        material: glass(Vec4::new(1.0, 0.0, 0.0, 0.30)),
    }));

    // Yellow tetrahedron, lower left
    let yellow = |specular: f32| MaterialDescription {
        color: Vec4::new(0.8, 0.8, 0.0, 0.80),
        ambient: 0.01,
        specular,
        shininess: 15.0,
        refraction: 2.0,
        ..Default::default()
    };
    let a = [
        Vec3::new(-10.0, -4.0, -12.5),
        Vec3::new(-8.0, -2.25, -15.5),
        Vec3::new(-6.75, -3.25, -12.5),
        Vec3::new(-8.5, -1.0, -14.5),
    ];
    for (face, specular) in [([0, 1, 2], 1.0), ([0, 1, 3], 1.05), ([0, 2, 3], 1.0), ([1, 2, 3], 1.0)] {
        scene.add_object(tetrahedron_face(&a, face, yellow(specular)));
    }

    // Green tetrahedron, upper right
    let green = MaterialDescription {
        color: Vec4::new(0.5, 1.0, 0.0, 0.80),
        ambient: 0.0,
        specular: 0.90,
        shininess: 50.0,
        refraction: 2.0,
        ..Default::default()
    };
    let b = [
        Vec3::new(6.0, 4.0, -12.5),
        Vec3::new(8.0, 4.75, -15.5),
        Vec3::new(10.25, 3.75, -12.5),
        Vec3::new(8.5, 6.5, -14.5),
    ];
    for face in [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]] {
        scene.add_object(tetrahedron_face(&b, face, green));
    }

    scene
}

fn tetrahedron_face(
    vertices: &[Vec3; 4],
    face: [usize; 3],
    material: MaterialDescription,
) -> ObjectDescription {
    ObjectDescription::Triangle(TriangleDescription {
        v0: vertices[face[0]],
        v1: vertices[face[1]],
        v2: vertices[face[2]],
        material,
    })
}
