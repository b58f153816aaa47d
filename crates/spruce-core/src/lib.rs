//! Particle morph engine for a tree that scatters into a cloud and back.
//!
//! Geometry is generated once ([`shapes`]), the [`engine::MorphEngine`]
//! advances damped progress every frame, and [`render::present`] hands the
//! result to whatever draws it.

pub mod config;
pub mod dynamics;
pub mod engine;
pub mod error;
pub mod materials;
pub mod math;
pub mod morph;
pub mod particle;
pub mod random;
pub mod render;
pub mod shapes;
pub mod state;

pub use config::SceneConfig;
pub use engine::{FrameOutput, MorphEngine};
pub use error::ConfigError;
pub use particle::{FoliageSet, OrnamentClass, OrnamentRecord, OrnamentSet};
pub use render::{present, InstanceBuffers, Renderer};
pub use state::{MorphSignal, MorphState};
