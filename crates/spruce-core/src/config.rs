use crate::dynamics::DynamicsProfile;
use crate::error::ConfigError;
use crate::particle::OrnamentClass;

/// Startup constants for the scene. Nothing here changes after generation.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub foliage_count: usize,
    pub ornament_count: usize,
    pub tree_height: f32,
    pub base_radius: f32,
    /// Scatter sphere radius for foliage, as a multiple of `tree_height`.
    pub foliage_spread: f32,
    /// Scatter sphere radius for ornaments, as a multiple of `tree_height`.
    pub ornament_spread: f32,
    pub foliage_dynamics: DynamicsProfile,
    pub heavy_dynamics: DynamicsProfile,
    pub medium_dynamics: DynamicsProfile,
    pub light_dynamics: DynamicsProfile,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            foliage_count: 20_000,
            ornament_count: 400,
            tree_height: 14.0,
            base_radius: 6.0,
            foliage_spread: 1.5,
            ornament_spread: 2.5,
            foliage_dynamics: DynamicsProfile::FOLIAGE,
            heavy_dynamics: DynamicsProfile::for_class(OrnamentClass::Heavy),
            medium_dynamics: DynamicsProfile::for_class(OrnamentClass::Medium),
            light_dynamics: DynamicsProfile::for_class(OrnamentClass::Light),
        }
    }
}

impl SceneConfig {
    /// Default scene with different population sizes.
    pub fn with_counts(foliage_count: usize, ornament_count: usize) -> Self {
        Self {
            foliage_count,
            ornament_count,
            ..Default::default()
        }
    }

    pub fn foliage_scatter_radius(&self) -> f32 {
        self.tree_height * self.foliage_spread
    }

    pub fn ornament_scatter_radius(&self) -> f32 {
        self.tree_height * self.ornament_spread
    }

    pub fn dynamics(&self, class: OrnamentClass) -> DynamicsProfile {
        match class {
            OrnamentClass::Heavy => self.heavy_dynamics,
            OrnamentClass::Medium => self.medium_dynamics,
            OrnamentClass::Light => self.light_dynamics,
        }
    }

    /// Check the invariants geometry generation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.foliage_count == 0 {
            return Err(ConfigError::ZeroCount { what: "foliage" });
        }
        if self.ornament_count == 0 {
            return Err(ConfigError::ZeroCount { what: "ornament" });
        }
        if !is_positive(self.tree_height) {
            return Err(ConfigError::NonPositiveHeight(self.tree_height));
        }
        if !is_positive(self.base_radius) {
            return Err(ConfigError::NonPositiveRadius(self.base_radius));
        }
        for (what, value) in [
            ("foliage", self.foliage_spread),
            ("ornament", self.ornament_spread),
        ] {
            if !is_positive(value) {
                return Err(ConfigError::NonPositiveSpread { what, value });
            }
        }
        for (what, profile) in [
            ("foliage", self.foliage_dynamics),
            ("heavy", self.heavy_dynamics),
            ("medium", self.medium_dynamics),
            ("light", self.light_dynamics),
        ] {
            if !is_positive(profile.rate) {
                return Err(ConfigError::NonPositiveRate {
                    what,
                    value: profile.rate,
                });
            }
        }
        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
