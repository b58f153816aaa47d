use std::f32::consts::PI;

use glam::Vec3;

use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::materials::Swatch;
use crate::particle::{OrnamentClass, OrnamentRecord, OrnamentSet};
use crate::random::RandomSource;
use crate::shapes::primitives::{ornament_tree_point, random_in_sphere};

/// Build a single ornament from eleven draws.
///
/// Draw order: height, angle, three sphere samples, class, color,
/// rotation x/y/z, scale.
pub fn ornament_record(
    id: u32,
    config: &SceneConfig,
    rng: &mut impl RandomSource,
) -> OrnamentRecord {
    let tree_position = ornament_tree_point(config.tree_height, config.base_radius, rng);
    let scatter_position = random_in_sphere(config.ornament_scatter_radius(), rng);

    let class = OrnamentClass::classify(rng.next_unit());
    let swatch = Swatch::for_class(class, rng.next_unit());

    let rotation = Vec3::new(
        rng.next_unit() * PI,
        rng.next_unit() * PI,
        rng.next_unit() * PI,
    );
    let scale = 0.2 + 0.3 * rng.next_unit();

    OrnamentRecord {
        id,
        class,
        swatch,
        color: swatch.rgb(),
        tree_position,
        scatter_position,
        rotation,
        scale,
    }
}

/// Generate the ornament population, partitioned by class.
pub fn generate_ornaments(
    config: &SceneConfig,
    rng: &mut impl RandomSource,
) -> Result<OrnamentSet, ConfigError> {
    config.validate()?;

    let records: Vec<OrnamentRecord> = (0..config.ornament_count as u32)
        .map(|id| ornament_record(id, config, rng))
        .collect();
    let set = OrnamentSet::new(records);

    log::info!("Generated {} ornaments", set.len());
    log::debug!(
        "Ornament split: {} heavy, {} medium, {} light",
        set.class_count(OrnamentClass::Heavy),
        set.class_count(OrnamentClass::Medium),
        set.class_count(OrnamentClass::Light)
    );
    Ok(set)
}
