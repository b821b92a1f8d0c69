//! Lighting component for ECS
//!
//! Pure data: the light's position comes from the entity's transform.

use crate::ecs::{Component, ComponentKinds};
use crate::foundation::math::Vec3;

/// Point light with constant/linear/quadratic distance falloff
#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// Whether the light contributes to shading
    pub enabled: bool,
    /// Constant attenuation term
    pub constant: f32,
    /// Linear attenuation term
    pub linear: f32,
    /// Quadratic attenuation term
    pub quadratic: f32,
    /// Diffuse color
    pub diffuse: Vec3,
    /// Specular color
    pub specular: Vec3,
}

impl Component for PointLight {
    const KIND: ComponentKinds = ComponentKinds::POINT_LIGHT;

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            enabled: false,
            constant: 0.0,
            linear: 0.0,
            quadratic: 0.0,
            diffuse: Vec3::zeros(),
            specular: Vec3::zeros(),
        }
    }
}

impl PointLight {
    /// Light with roughly a 50 unit reach
    pub fn new(diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            enabled: true,
            constant: 1.0,
            linear: 0.09,
            quadratic: 0.032,
            diffuse,
            specular,
        }
    }

    /// Builder pattern: Set attenuation terms
    pub fn with_attenuation(mut self, constant: f32, linear: f32, quadratic: f32) -> Self {
        self.constant = constant;
        self.linear = linear;
        self.quadratic = quadratic;
        self
    }

    /// Intensity multiplier at `distance`, `1 / (c + l·d + q·d²)`
    pub fn attenuation(&self, distance: f32) -> f32 {
        let linear_term = self.linear.mul_add(distance, self.constant);
        let denominator = self.quadratic.mul_add(distance * distance, linear_term);
        if denominator > 0.0 {
            1.0 / denominator
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_attenuation_at_source_is_full() {
        let light = PointLight::new(Vec3::new(0.8, 0.8, 0.8), Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(light.attenuation(0.0), 1.0);
    }

    #[test]
    fn test_attenuation_falls_off() {
        let light = PointLight::new(Vec3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 1.0, 1.0));
        let near = light.attenuation(1.0);
        let far = light.attenuation(10.0);

        assert!(far < near);
        assert_relative_eq!(far, 1.0 / (1.0 + 0.9 + 3.2), epsilon = 1e-5);
    }

    #[test]
    fn test_disabled_default_has_no_falloff_terms() {
        let light = PointLight::default();
        assert!(!light.is_enabled());
        assert_eq!(light.attenuation(5.0), 0.0);
    }
}
