//! Foliage particle sampling: staggered arrival, idle motion, color and glints.

use glam::Vec3;

use crate::dynamics::{DynamicsProfile, FOLIAGE_FLOAT_BELOW};
use crate::math::smoothstep;

/// Very deep jungle green.
pub const COLOR_DEEP: Vec3 = Vec3::new(0.005, 0.1, 0.05);
/// Rich emerald.
pub const COLOR_MID: Vec3 = Vec3::new(0.0, 0.3, 0.15);
/// Bright gold used for glints and scattered dust.
pub const COLOR_GOLD: Vec3 = Vec3::new(1.0, 0.9, 0.4);

/// Share of the shared progress range used to stagger arrivals.
const STAGGER: f32 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FoliageSample {
    pub position: Vec3,
    pub color: Vec3,
    pub alpha: f32,
    /// Point size before perspective attenuation.
    pub size: f32,
}

/// Phase-delayed progress: higher phases start later and catch up by the end.
pub fn local_progress(shared: f32, phase: f32) -> f32 {
    smoothstep(0.0, 1.0, (shared - phase * STAGGER) / (1.0 - STAGGER))
}

/// Brief bright glint, sharp peaks of a phase-shifted sine.
pub fn sparkle(time: f32, phase: f32) -> f32 {
    (time * 2.0 + phase * 30.0).sin().max(0.0).powf(10.0)
}

/// Compute one foliage particle for this frame.
pub fn sample_foliage(
    tree: Vec3,
    scatter: Vec3,
    phase: f32,
    shared: f32,
    time: f32,
) -> FoliageSample {
    sample_foliage_with(&DynamicsProfile::FOLIAGE, tree, scatter, phase, shared, time)
}

/// Same as [`sample_foliage`], breathing once `shared` reaches
/// `profile.settle_threshold`.
pub fn sample_foliage_with(
    profile: &DynamicsProfile,
    tree: Vec3,
    scatter: Vec3,
    phase: f32,
    shared: f32,
    time: f32,
) -> FoliageSample {
    let local = local_progress(shared, phase);
    let mut position = scatter.lerp(tree, local);

    // Settled tree breathes radially.
    if !profile.in_motion(shared) {
        let threshold = profile.settle_threshold;
        let breathe = (time * 1.5 + position.y * 0.5).sin() * 0.03 * (shared - threshold);
        position += position.normalize_or_zero() * breathe;
    }

    // Scattered dust floats, fading out as the tree forms.
    let float_scale = if shared < FOLIAGE_FLOAT_BELOW {
        1.0 - shared * 2.0
    } else {
        0.0
    };
    if float_scale > 0.0 {
        position.y += (time * 0.5 + phase * 100.0).sin() * 0.2 * float_scale;
        position.x += (time * 0.3 + phase * 50.0).cos() * 0.1 * float_scale;
    }

    let glint = sparkle(time, phase);
    let base = COLOR_DEEP.lerp(COLOR_MID, phase * 0.8 + 0.2);
    let mut color = base.lerp(COLOR_GOLD, glint * 0.6);
    if float_scale > 0.0 {
        color = color.lerp(COLOR_GOLD, 0.3 * float_scale);
    }

    FoliageSample {
        position,
        color,
        alpha: 0.6 + 0.4 * phase + glint * 0.4,
        size: 50.0 * phase + 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_progress_staggers() {
        let early = local_progress(0.5, 0.0);
        let late = local_progress(0.5, 1.0);
        assert!(early > late, "phase 0 should lead: {} vs {}", early, late);
        assert_eq!(local_progress(1.0, 1.0), 1.0);
        assert_eq!(local_progress(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_sparkle_range() {
        for i in 0..1000 {
            let s = sparkle(i as f32 * 0.01, 0.37);
            assert!((0.0..=1.0).contains(&s));
        }
    }

    #[test]
    fn test_settled_tree_no_float() {
        let tree = Vec3::new(1.0, 2.0, 3.0);
        let scatter = Vec3::new(-10.0, 5.0, 0.0);
        // Between thresholds: no breathing, no floating.
        let s = sample_foliage(tree, scatter, 0.0, 0.7, 3.0);
        let expected = scatter.lerp(tree, local_progress(0.7, 0.0));
        assert!((s.position - expected).length() < 1e-6);
    }

    #[test]
    fn test_scattered_dust_floats() {
        let tree = Vec3::new(1.0, 2.0, 3.0);
        let scatter = Vec3::new(-10.0, 5.0, 0.0);
        let phase = 0.3;
        let rest = scatter.lerp(tree, local_progress(0.0, phase));
        let mut largest = 0.0f32;
        for i in 0..200 {
            let s = sample_foliage(tree, scatter, phase, 0.0, i as f32 * 0.05);
            let offset = (s.position - rest).length();
            // 0.2 vertical plus 0.1 horizontal at full strength.
            assert!(offset <= 0.3 + 1e-6, "offset {} at step {}", offset, i);
            largest = largest.max(offset);
        }
        assert!(largest > 0.1, "dust never moved: {}", largest);
    }

    #[test]
    fn test_float_fades_with_progress() {
        let tree = Vec3::new(1.0, 2.0, 3.0);
        let scatter = Vec3::new(-10.0, 5.0, 0.0);
        let phase = 0.3;
        let time = 2.7;
        let offset = |shared: f32| {
            let s = sample_foliage(tree, scatter, phase, shared, time);
            s.position - scatter.lerp(tree, local_progress(shared, phase))
        };
        let full = offset(0.0);
        let half = offset(0.25);
        assert!(full.length() > 0.0);
        // Amplitude scales with 1 - 2 * shared.
        assert!((half - full * 0.5).length() < 1e-5);
        for shared in [0.5, 0.6, 0.79] {
            assert_eq!(offset(shared), Vec3::ZERO, "float at shared {}", shared);
        }
    }

    #[test]
    fn test_scattered_gold_glow() {
        // Phase 0 at time 0 has no glint, isolating the dust glow.
        let base = COLOR_DEEP.lerp(COLOR_MID, 0.2);
        let scattered = sample_foliage(Vec3::ONE, Vec3::ZERO, 0.0, 0.0, 0.0);
        assert!((scattered.color - base.lerp(COLOR_GOLD, 0.3)).length() < 1e-6);
        let formed = sample_foliage(Vec3::ONE, Vec3::ZERO, 0.0, 0.6, 0.0);
        assert!((formed.color - base).length() < 1e-6);
    }

    #[test]
    fn test_breathing_small() {
        let tree = Vec3::new(3.0, 1.0, 0.0);
        for i in 0..100 {
            let s = sample_foliage(tree, Vec3::ZERO, 0.2, 1.0, i as f32 * 0.1);
            // 0.03 * (1.0 - 0.8) = 0.006 max radial offset.
            assert!((s.position - tree).length() <= 0.006 + 1e-6);
        }
    }

    #[test]
    fn test_origin_breathing_finite() {
        let s = sample_foliage(Vec3::ZERO, Vec3::ZERO, 0.5, 1.0, 2.0);
        assert!(s.position.is_finite());
    }

    #[test]
    fn test_alpha_and_size_bounds() {
        let s = sample_foliage(Vec3::ONE, Vec3::ZERO, 1.0, 0.3, 0.0);
        assert!(s.alpha >= 0.999 && s.alpha <= 1.4, "alpha {}", s.alpha);
        assert_eq!(s.size, 80.0);
    }
}
