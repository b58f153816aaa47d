use crate::config::SceneConfig;
use crate::error::ConfigError;
use crate::particle::FoliageSet;
use crate::random::RandomSource;
use crate::shapes::primitives::{foliage_tree_point, random_in_sphere};

/// Generate every foliage particle's tree target, scatter target and phase.
///
/// Per particle the source is drawn six times: height, radial bias, three
/// sphere samples, phase.
pub fn generate_foliage(
    config: &SceneConfig,
    rng: &mut impl RandomSource,
) -> Result<FoliageSet, ConfigError> {
    config.validate()?;

    let count = config.foliage_count;
    let scatter_radius = config.foliage_scatter_radius();
    let mut set = FoliageSet::with_capacity(count);

    for i in 0..count {
        let tree = foliage_tree_point(i, config.tree_height, config.base_radius, rng);
        let scatter = random_in_sphere(scatter_radius, rng);
        let phase = rng.next_unit();
        set.push(tree, scatter, phase);
    }

    log::info!(
        "Generated {} foliage particles (height {}, radius {}, scatter {})",
        count,
        config.tree_height,
        config.base_radius,
        scatter_radius
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;

    #[test]
    fn test_draw_count_per_particle() {
        let config = SceneConfig::with_counts(5, 1);
        let mut rng = SequenceSource::new(vec![0.5]);
        let set = generate_foliage(&config, &mut rng).unwrap();
        assert_eq!(set.count, 5);
        assert_eq!(rng.drawn(), 30);
    }

    #[test]
    fn test_zero_count_fails_fast() {
        let config = SceneConfig::with_counts(0, 10);
        let mut rng = SequenceSource::new(vec![0.5]);
        assert_eq!(
            generate_foliage(&config, &mut rng).err(),
            Some(ConfigError::ZeroCount { what: "foliage" })
        );
        assert_eq!(rng.drawn(), 0);
    }
}
