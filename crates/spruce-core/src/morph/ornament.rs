//! Ornament pose per class.
//!
//! Heavy ornaments drift slowly and stop spinning as they settle, medium
//! ones circle, light ones zip in on a smoothstep curve and flicker like
//! fireflies while scattered.

use glam::{Mat4, Vec3};

use crate::dynamics::DynamicsProfile;
use crate::math::{euler_xyz, hermite};
use crate::particle::{OrnamentClass, OrnamentRecord};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrnamentPose {
    pub position: Vec3,
    /// Euler angles, XYZ order.
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for OrnamentPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl OrnamentPose {
    /// Instance transform: scale, then rotate, then translate.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(self.scale),
            euler_xyz(self.rotation),
            self.position,
        )
    }
}

/// Pose of `record` at `progress` (0 scattered, 1 tree) and clock `time`,
/// using the stock profile for its class.
pub fn pose_ornament(record: &OrnamentRecord, progress: f32, time: f32) -> OrnamentPose {
    let profile = DynamicsProfile::for_class(record.class);
    pose_ornament_with(record, &profile, progress, time)
}

/// Same as [`pose_ornament`] with secondary motion gated by `profile`.
pub fn pose_ornament_with(
    record: &OrnamentRecord,
    profile: &DynamicsProfile,
    progress: f32,
    time: f32,
) -> OrnamentPose {
    let p = progress.clamp(0.0, 1.0);
    let id = record.id as f32;
    let base = record.rotation;
    let scatter = record.scatter_position;
    let tree = record.tree_position;

    match record.class {
        OrnamentClass::Heavy => {
            let mut position = scatter.lerp(tree, p);
            if profile.in_motion(p) {
                position.y += (time * 0.5 + id).sin() * 0.05 * (1.0 - p);
            }
            OrnamentPose {
                position,
                rotation: Vec3::new(
                    base.x + time * 0.1 * (1.0 - p),
                    base.y + time * 0.1,
                    base.z,
                ),
                scale: record.scale * (0.6 + 0.4 * p),
            }
        }
        OrnamentClass::Medium => {
            let mut position = scatter.lerp(tree, p);
            if profile.in_motion(p) {
                let drift = 0.1 * (1.0 - p);
                position.x += (time + id).cos() * drift;
                position.y += (time + id).sin() * drift;
            }
            OrnamentPose {
                position,
                rotation: Vec3::new(
                    base.x + time * 0.5 * (1.0 - p),
                    base.y + time * 0.2,
                    base.z,
                ),
                scale: record.scale * (0.3 + 0.7 * p),
            }
        }
        OrnamentClass::Light => {
            let mut position = scatter.lerp(tree, hermite(p));
            if profile.in_motion(p) {
                let amp = 0.5 * (1.0 - p);
                position += Vec3::new(
                    (time * 3.0 + id * 0.1).sin(),
                    (time * 2.5 + id * 0.1).cos(),
                    (time * 4.0 + id * 0.2).sin(),
                ) * amp;
            }
            let pulse = 1.0 + 0.3 * (time * 5.0 + id).sin();
            OrnamentPose {
                position,
                rotation: Vec3::new(base.x + time * 2.0, base.y + time * 1.5, 0.0),
                scale: record.scale * 0.5 * pulse,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::Swatch;

    fn record(class: OrnamentClass) -> OrnamentRecord {
        OrnamentRecord {
            id: 3,
            class,
            swatch: Swatch::Gold,
            color: Swatch::Gold.rgb(),
            tree_position: Vec3::new(1.0, 2.0, 0.5),
            scatter_position: Vec3::new(-20.0, 4.0, 9.0),
            rotation: Vec3::new(0.3, 0.2, 0.1),
            scale: 0.4,
        }
    }

    #[test]
    fn test_settled_on_tree() {
        for class in OrnamentClass::ALL {
            let r = record(class);
            let pose = pose_ornament(&r, 1.0, 12.34);
            assert!(
                (pose.position - r.tree_position).length() < 1e-5,
                "{:?} not on tree: {:?}",
                class,
                pose.position
            );
        }
    }

    #[test]
    fn test_scattered_scale_shrinks() {
        let heavy = pose_ornament(&record(OrnamentClass::Heavy), 0.0, 0.0);
        let medium = pose_ornament(&record(OrnamentClass::Medium), 0.0, 0.0);
        assert!((heavy.scale - 0.4 * 0.6).abs() < 1e-6);
        assert!((medium.scale - 0.4 * 0.3).abs() < 1e-6);
        let heavy_tree = pose_ornament(&record(OrnamentClass::Heavy), 1.0, 0.0);
        assert!((heavy_tree.scale - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_light_pulse_bounds() {
        let r = record(OrnamentClass::Light);
        for i in 0..200 {
            let pose = pose_ornament(&r, 1.0, i as f32 * 0.05);
            assert!(pose.scale >= 0.4 * 0.5 * 0.7 - 1e-6);
            assert!(pose.scale <= 0.4 * 0.5 * 1.3 + 1e-6);
        }
    }

    #[test]
    fn test_heavy_spin_decays() {
        let r = record(OrnamentClass::Heavy);
        let settled = pose_ornament(&r, 1.0, 100.0);
        assert!((settled.rotation.x - r.rotation.x).abs() < 1e-5);
        let scattered = pose_ornament(&r, 0.0, 100.0);
        assert!((scattered.rotation.x - r.rotation.x - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_light_noise_bounded() {
        let r = record(OrnamentClass::Light);
        let base = r.scatter_position.lerp(r.tree_position, hermite(0.5));
        for i in 0..200 {
            let pose = pose_ornament(&r, 0.5, i as f32 * 0.037);
            // Amplitude 0.5 * (1 - p) per axis.
            assert!((pose.position - base).length() <= 0.25 * 3f32.sqrt() + 1e-5);
        }
    }

    fn drift(class: OrnamentClass, progress: f32) -> f32 {
        let r = record(class);
        let early = pose_ornament(&r, progress, 1.0);
        let late = pose_ornament(&r, progress, 2.0);
        (early.position - late.position).length()
    }

    #[test]
    fn test_drift_stops_at_class_threshold() {
        for (class, moving, still) in [
            (OrnamentClass::Heavy, 0.89, 0.9),
            (OrnamentClass::Medium, 0.89, 0.9),
            (OrnamentClass::Light, 0.94, 0.95),
        ] {
            assert!(drift(class, moving) > 1e-4, "{:?} frozen at {}", class, moving);
            assert_eq!(drift(class, still), 0.0, "{:?} drifting at {}", class, still);
        }
    }

    #[test]
    fn test_heavy_drift_is_vertical() {
        let r = record(OrnamentClass::Heavy);
        let base = r.scatter_position.lerp(r.tree_position, 0.5);
        for i in 0..100 {
            let pose = pose_ornament(&r, 0.5, i as f32 * 0.3);
            let offset = pose.position - base;
            assert!(offset.x.abs() < 1e-5 && offset.z.abs() < 1e-5);
            assert!(offset.y.abs() <= 0.05 * 0.5 + 1e-5);
        }
    }

    #[test]
    fn test_medium_drift_circles() {
        let r = record(OrnamentClass::Medium);
        let base = r.scatter_position.lerp(r.tree_position, 0.0);
        for i in 0..100 {
            let pose = pose_ornament(&r, 0.0, i as f32 * 0.3);
            let offset = pose.position - base;
            assert!(offset.z.abs() < 1e-5);
            // Radius 0.1 * (1 - p) in the xy plane.
            assert!((offset.truncate().length() - 0.1).abs() < 1e-4);
        }
    }

    #[test]
    fn test_custom_profile_moves_threshold() {
        let r = record(OrnamentClass::Heavy);
        let early_settle = DynamicsProfile {
            settle_threshold: 0.5,
            ..DynamicsProfile::HEAVY
        };
        let a = pose_ornament_with(&r, &early_settle, 0.6, 1.0);
        let b = pose_ornament_with(&r, &early_settle, 0.6, 2.0);
        assert_eq!(a.position, b.position);
        assert!(drift(OrnamentClass::Heavy, 0.6) > 0.0);
    }

    #[test]
    fn test_matrix_translation() {
        let pose = OrnamentPose {
            position: Vec3::new(1.0, 2.0, 3.0),
            rotation: Vec3::new(0.5, 1.0, 1.5),
            scale: 0.25,
        };
        let m = pose.matrix();
        let (scale, _, translation) = m.to_scale_rotation_translation();
        assert!((translation - pose.position).length() < 1e-5);
        assert!((scale - Vec3::splat(0.25)).length() < 1e-5);
    }
}
