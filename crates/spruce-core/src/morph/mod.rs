//! Per-entity morph math: where a particle is, and how it looks, at a
//! given progress and time. Pure functions; the engine owns the progress.

pub mod foliage;
pub mod ornament;

pub use foliage::{sample_foliage, sample_foliage_with, FoliageSample};
pub use ornament::{pose_ornament, pose_ornament_with, OrnamentPose};
