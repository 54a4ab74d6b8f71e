//! Phong material parameters.

use whitted_core::MaterialDescription;
use whitted_math::{Interval, Vec4};

/// Color type alias (RGBA values nominally 0-1)
pub type Color = Vec4;

/// Surface properties for the Phong model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color; alpha < 1.0 marks the surface as translucent
    pub color: Color,
    pub ambient: f32,
    pub diffuse: f32,
    /// Weights both the specular highlight and the mirror reflection
    pub specular: f32,
    pub shininess: f32,
    /// Carried for completeness; transmission does not bend rays
    pub refraction: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self::from(&MaterialDescription::default())
    }
}

impl Material {
    /// Create a material with the given color and default coefficients.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the Phong coefficients.
    pub fn with_phong(mut self, ambient: f32, diffuse: f32, specular: f32, shininess: f32) -> Self {
        self.ambient = ambient;
        self.diffuse = diffuse;
        self.specular = specular;
        self.shininess = shininess;
        self
    }

    /// Opacity of the surface (the color's alpha channel).
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.color.w
    }

    /// Whether a transmission ray should be traced behind this surface.
    #[inline]
    pub fn is_translucent(&self) -> bool {
        self.alpha() < 1.0
    }
}

impl From<&MaterialDescription> for Material {
    fn from(desc: &MaterialDescription) -> Self {
        Self {
            color: desc.color,
            ambient: desc.ambient,
            diffuse: desc.diffuse,
            specular: desc.specular,
            shininess: desc.shininess,
            refraction: desc.refraction,
        }
    }
}

/// Clamp every channel of a color to [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    let unit = Interval::UNIT;
    Color::new(
        unit.clamp(color.x),
        unit.clamp(color.y),
        unit.clamp(color.z),
        unit.clamp(color.w),
    )
}
